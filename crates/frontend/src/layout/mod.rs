pub mod footer;
pub mod global_context;

use leptos::prelude::*;

/// Каркас страницы: заголовок, содержимое, footer
///
/// ```text
/// +------------------------------------------+
/// |  AI-Driven PDF Question Answering        |
/// +------------------------------------------+
/// |  children (upload, summary, chat)        |
/// +------------------------------------------+
/// |  footer: stub note + server status       |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout" style="max-width: 960px; margin: 0 auto; padding: 24px;">
            <header data-zone="header" style="margin-bottom: 24px; text-align: center;">
                <h1 style="font-size: 28px; font-weight: bold;">"AI-Driven PDF Question Answering"</h1>
                <p style="color: var(--colorNeutralForeground3);">
                    "Upload a PDF document and ask questions about its content"
                </p>
            </header>

            <main>{children()}</main>

            <footer::Footer />
        </div>
    }
}
