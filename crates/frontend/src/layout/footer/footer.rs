use crate::shared::api_client::check_health;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq)]
enum ServerStatus {
    Online,
    Offline,
    Checking,
}

impl ServerStatus {
    fn display_text(&self) -> &'static str {
        match self {
            ServerStatus::Online => "Server: Online",
            ServerStatus::Offline => "Server: Offline",
            ServerStatus::Checking => "Server: Checking...",
        }
    }

    fn color(&self) -> &'static str {
        match self {
            ServerStatus::Online => "var(--colorPaletteGreenForeground1)",
            ServerStatus::Offline => "var(--colorPaletteRedForeground1)",
            ServerStatus::Checking => "var(--colorNeutralForeground3)",
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let status = RwSignal::new(ServerStatus::Checking);

    // Проверка сервера при монтировании
    Effect::new(move |_| {
        status.set(ServerStatus::Checking);

        spawn_local(async move {
            let next = match check_health().await {
                Ok(health) => {
                    log::debug!("Backend health: {}", health.status);
                    ServerStatus::Online
                }
                Err(e) => {
                    log::warn!("Health check failed: {}", e.log_details());
                    ServerStatus::Offline
                }
            };
            status.set(next);
        });
    });

    view! {
        <footer
            data-zone="footer"
            style="margin-top: 32px; padding: 16px 0; border-top: 1px solid var(--colorNeutralStroke2); text-align: center; font-size: 13px; color: var(--colorNeutralForeground3);"
        >
            <p>
                "Note: answers are generated by a stub provider and only quote the uploaded document. "
                "Connect a real language model on the backend for full answers."
            </p>
            <span style=move || format!("color: {};", status.get().color())>
                {move || status.get().display_text()}
            </span>
        </footer>
    }
}
