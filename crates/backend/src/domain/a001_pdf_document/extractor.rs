use lopdf::Document;

/// Результат разбора PDF
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedPdf {
    pub page_count: u32,
    pub text: String,
}

/// Считает страницы и извлекает текст всего документа.
///
/// Text is extracted page by page, each page followed by `'\n'`. When lopdf
/// cannot decode a page, the whole document goes through pdf-extract
/// instead (no page boundaries in that case).
///
/// Blocking: call from `spawn_blocking`.
pub fn extract(content: &[u8]) -> anyhow::Result<ExtractedPdf> {
    let doc = Document::load_mem(content)
        .map_err(|e| anyhow::anyhow!("Failed to load PDF: {}", e))?;
    let pages = doc.get_pages();
    let page_count = pages.len() as u32;

    let text = match extract_pages(&doc, pages.keys().copied()) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("Per-page extraction failed ({}), falling back to pdf-extract", e);
            pdf_extract::extract_text_from_mem(content)
                .map_err(|e| anyhow::anyhow!("Failed to extract text: {}", e))?
        }
    };

    Ok(ExtractedPdf { page_count, text })
}

fn extract_pages(
    doc: &Document,
    page_numbers: impl Iterator<Item = u32>,
) -> Result<String, lopdf::Error> {
    let mut text = String::new();
    for page_number in page_numbers {
        text.push_str(&doc.extract_text(&[page_number])?);
        text.push('\n');
    }
    Ok(text)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    /// Собрать PDF, где каждая строка `pages` становится отдельной страницей
    pub(crate) fn build_pdf(pages: &[&str]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for page_text in pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*page_text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let page_count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => page_count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_rejects_non_pdf_bytes() {
        let err = extract(b"just some text, not a pdf").unwrap_err();
        assert!(err.to_string().starts_with("Failed to load PDF"));
    }

    #[test]
    fn test_rejects_empty_input() {
        assert!(extract(&[]).is_err());
    }

    #[test]
    fn test_pages_are_separated() {
        let pdf = build_pdf(&[
            "The termination clause is in Section 9.",
            "Payment is due monthly.",
        ]);

        let extracted = extract(&pdf).unwrap();
        assert_eq!(extracted.page_count, 2);

        let lines: Vec<&str> = extracted.text.lines().map(str::trim).collect();
        assert!(lines.contains(&"The termination clause is in Section 9."));
        assert!(lines.contains(&"Payment is due monthly."));
        assert!(extracted.text.ends_with('\n'));
        assert!(!extracted.text.contains("Section 9.Payment"));
    }
}
