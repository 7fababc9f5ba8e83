use contracts::domain::a001_pdf_document::UploadResponse;
use leptos::prelude::*;
use thaw::*;

/// Строки сводки по загруженному документу: (метка, значение)
///
/// Values are shown as received from the backend.
pub fn summary_rows(document: &UploadResponse) -> Vec<(&'static str, String)> {
    vec![
        ("Filename:", document.filename.clone()),
        ("Pages:", document.page_count.to_string()),
        ("Text Length:", format!("{} characters", document.text_length)),
        ("Document ID:", document.document_id.clone()),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn DocumentSummary(document: UploadResponse, on_reset: Callback<()>) -> impl IntoView {
    let rows = summary_rows(&document);

    view! {
        <div style="margin-top: 16px; padding: 16px; background: var(--colorPaletteGreenBackground1); border: 1px solid var(--colorPaletteGreenBorder1); border-radius: 8px;">
            <h3 style="font-size: 16px; font-weight: bold; margin-bottom: 8px;">
                "✓ Document Uploaded Successfully"
            </h3>
            {rows
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <p style="margin: 4px 0;">
                            <strong>{label}</strong>
                            " "
                            {value}
                        </p>
                    }
                })
                .collect_view()}
            <div style="margin-top: 12px;">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_reset.run(())
                >
                    "Upload Another Document"
                </Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_pdf_rows() {
        let document = UploadResponse {
            document_id: "doc-1".into(),
            filename: "contract.pdf".into(),
            page_count: 12,
            text_length: 4096,
            message: "PDF uploaded and processed successfully".into(),
        };

        let rows = summary_rows(&document);
        let lines: Vec<String> = rows
            .iter()
            .map(|(label, value)| format!("{} {}", label, value))
            .collect();

        assert_eq!(
            lines,
            vec![
                "Filename: contract.pdf",
                "Pages: 12",
                "Text Length: 4096 characters",
                "Document ID: doc-1",
            ]
        );
    }

    #[test]
    fn test_zero_values_are_not_hidden() {
        let document = UploadResponse {
            document_id: "doc-2".into(),
            filename: "blank.pdf".into(),
            page_count: 0,
            text_length: 0,
            message: String::new(),
        };
        let rows = summary_rows(&document);
        assert_eq!(rows[1].1, "0");
        assert_eq!(rows[2].1, "0 characters");
    }
}
