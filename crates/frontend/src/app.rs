use crate::domain::a001_pdf_document::ui::summary::DocumentSummary;
use crate::domain::a001_pdf_document::ui::upload::PdfUpload;
use crate::domain::a002_document_question::ui::chat::DocumentChat;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use contracts::domain::a001_pdf_document::UploadResponse;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    provide_context(ctx);

    let on_upload_success = Callback::new(move |response: UploadResponse| ctx.on_upload_success(response));
    let on_reset = Callback::new(move |_: ()| ctx.reset());
    let active_document = ctx.active_document();
    let conversation_document = ctx.conversation_document();

    view! {
        <Shell>
            <section style="margin-bottom: 24px;">
                // Панель загрузки пересоздается при сбросе
                {move || {
                    let _epoch = ctx.upload_epoch.get();
                    view! { <PdfUpload on_upload_success=on_upload_success /> }
                }}

                {move || {
                    active_document
                        .get()
                        .map(|document| view! { <DocumentSummary document=document on_reset=on_reset /> })
                }}
            </section>

            <section>
                <DocumentChat document=conversation_document />
            </section>
        </Shell>
    }
}
