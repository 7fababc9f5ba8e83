//! PDF Upload - View Component

use super::view_model::PdfUploadVm;
use crate::shared::api_client::upload_document;
use contracts::domain::a001_pdf_document::UploadResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;

#[component]
#[allow(non_snake_case)]
pub fn PdfUpload(on_upload_success: Callback<UploadResponse>) -> impl IntoView {
    let vm = PdfUploadVm::new();
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    let handle_file_select = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        vm.form.update(|form| form.select(file));
    };

    let handle_upload = Callback::new(move |_| {
        let Some(file) = vm.form.try_update(|form| form.begin_upload()).flatten() else {
            return;
        };

        spawn_local(async move {
            let result = upload_document(&file).await;
            if let Err(e) = &result {
                log::error!("Upload of '{}' failed: {}", file.name(), e.log_details());
            }

            let uploaded = vm.form.try_update(|form| form.finish(result)).flatten();
            if let Some(response) = uploaded {
                if let Some(input) = file_input_ref.get_untracked() {
                    input.set_value("");
                }
                on_upload_success.run(response);
            }
        });
    });

    let is_uploading = Signal::derive(move || vm.form.with(|f| f.is_uploading()));
    let upload_disabled = Signal::derive(move || vm.form.with(|f| !f.can_upload()));

    view! {
        <div style="padding: 20px; background: var(--colorNeutralBackground1); border: 1px solid var(--colorNeutralStroke2); border-radius: 8px;">
            <h2 style="font-size: 18px; font-weight: bold; margin-bottom: 12px;">"Upload PDF Document"</h2>

            <Flex align=FlexAlign::Center style="gap: 12px;">
                <input
                    type="file"
                    accept=".pdf,application/pdf"
                    node_ref=file_input_ref
                    disabled=move || !vm.form.with(|f| f.can_pick())
                    on:change=handle_file_select
                />

                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=upload_disabled
                    on_click=move |_| handle_upload.run(())
                >
                    {move || if is_uploading.get() { "Uploading..." } else { "Upload PDF" }}
                </Button>
            </Flex>

            {move || {
                vm.form
                    .with(|f| f.selected_name())
                    .map(|name| {
                        view! {
                            <div style="margin-top: 8px; font-size: 14px; color: var(--colorNeutralForeground3);">
                                "Selected: " {name}
                            </div>
                        }
                    })
            }}

            // Error display
            {move || {
                vm.form
                    .with(|f| f.error().map(str::to_string))
                    .map(|e| {
                        view! {
                            <div style="padding: 12px; margin-top: 12px; background: var(--color-error-50); border: 1px solid var(--color-error-100); border-radius: 8px;">
                                <span style="color: var(--color-error);">{e}</span>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
