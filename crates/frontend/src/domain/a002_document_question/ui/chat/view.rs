//! Document Chat - View Component

use super::session::{is_submit_key, ActiveDocument};
use super::view_model::DocumentChatVm;
use crate::shared::api_client::ask_question;
use chrono::Local;
use contracts::domain::a002_document_question::ChatMessage;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn DocumentChat(#[prop(into)] document: Signal<Option<ActiveDocument>>) -> impl IntoView {
    let vm = DocumentChatVm::new();
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();

    // Scroll to bottom helper
    let scroll_to_bottom = move || {
        if let Some(container) = messages_container_ref.get_untracked() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    };

    // Смена документа: новая переписка
    Effect::new(move |_| {
        vm.sync_document(document.get());
    });

    // Autoscroll on new messages and on the "Thinking..." bubble
    Effect::new(move |_| {
        vm.session.with(|s| (s.messages().len(), s.is_loading()));
        scroll_to_bottom();
    });

    let handle_send = Callback::new(move |_| {
        let input = vm.input.get_untracked();
        let pending = match vm.session.try_update(|s| s.begin_send(&input)) {
            Some(Ok(pending)) => pending,
            Some(Err(refused)) => {
                log::debug!("Question not sent: {}", refused);
                return;
            }
            None => return,
        };
        vm.input.set(String::new());

        spawn_local(async move {
            let result = ask_question(&pending.document_id, &pending.question).await;
            if let Err(e) = &result {
                log::error!("Question failed: {}", e.log_details());
            }

            let landed = vm
                .session
                .try_update(|s| s.settle(&pending, result))
                .unwrap_or(false);
            if !landed {
                log::debug!(
                    "Dropped answer for {} from an earlier conversation",
                    pending.document_id
                );
            }
        });
    });

    let is_loading = Signal::derive(move || vm.session.with(|s| s.is_loading()));
    let send_disabled = Signal::derive(move || {
        let input = vm.input.get();
        vm.session.with(|s| !s.can_send(&input))
    });

    view! {
        <Show
            when=move || vm.session.with(|s| s.is_enabled())
            fallback=|| {
                view! {
                    <div style="padding: 20px; text-align: center; color: var(--colorNeutralForeground3); background: var(--colorNeutralBackground2); border: 1px dashed var(--colorNeutralStroke2); border-radius: 8px;">
                        <p>"Please upload a PDF document first to start asking questions."</p>
                    </div>
                }
            }
        >
            <div style="display: flex; flex-direction: column; padding: 20px; background: var(--colorNeutralBackground1); border: 1px solid var(--colorNeutralStroke2); border-radius: 8px;">
                // Header
                <div style="margin-bottom: 16px; padding-bottom: 12px; border-bottom: 1px solid var(--colorNeutralStroke2);">
                    <h2 style="font-size: 18px; font-weight: bold;">"Ask Questions"</h2>
                    <span style="color: var(--colorNeutralForeground3); font-size: 14px;">
                        {move || {
                            vm.session
                                .with(|s| s.document().map(|d| format!("Document: {}", d.name)))
                                .unwrap_or_default()
                        }}
                    </span>
                </div>

                // Messages area
                <div
                    node_ref=messages_container_ref
                    style="height: 400px; overflow-y: auto; display: flex; flex-direction: column; gap: 12px; margin-bottom: 16px; padding: 12px; background: var(--colorNeutralBackground1); border: 1px solid var(--colorNeutralStroke2); border-radius: 8px;"
                >
                    <For
                        each=move || vm.session.with(|s| s.messages().to_vec())
                        key=|msg| msg.id.clone()
                        let:msg
                    >
                        <MessageBubble msg=msg />
                    </For>

                    <Show when=move || is_loading.get()>
                        <div style="align-self: flex-start; max-width: 70%;">
                            <div style="background: var(--colorNeutralBackground2); padding: 10px 14px; border-radius: 12px; font-style: italic;">
                                "Thinking..."
                            </div>
                        </div>
                    </Show>
                </div>

                // Input area
                <Flex style="gap: 8px; align-items: flex-end;">
                    <div style="flex: 1;">
                        <Textarea
                            value=vm.input
                            placeholder="Ask a question about the document... (Enter to send, Shift+Enter for a new line)"
                            attr:style="width: 100%; min-height: 60px; max-height: 200px; resize: vertical;"
                            disabled=is_loading
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if is_submit_key(&ev.key(), ev.shift_key()) {
                                    ev.prevent_default();
                                    handle_send.run(());
                                }
                            }
                        />
                    </div>

                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=send_disabled
                        on_click=move |_| handle_send.run(())
                    >
                        {move || if is_loading.get() { "Sending..." } else { "Send" }}
                    </Button>
                </Flex>
            </div>
        </Show>
    }
}

#[component]
#[allow(non_snake_case)]
fn MessageBubble(msg: ChatMessage) -> impl IntoView {
    let is_user = msg.is_user();
    let time = msg.timestamp.with_timezone(&Local).format("%H:%M:%S").to_string();

    view! {
        <div
            style=if is_user {
                "align-self: flex-end; max-width: 70%;"
            } else {
                "align-self: flex-start; max-width: 70%;"
            }
        >
            <div
                style=if is_user {
                    "background: var(--colorBrandBackground2); padding: 10px 14px; border-radius: 12px;"
                } else {
                    "background: var(--colorNeutralBackground2); padding: 10px 14px; border-radius: 12px;"
                }
            >
                <div style="font-size: 11px; opacity: 0.7; margin-bottom: 4px;">
                    <strong>{msg.role.sender_label().to_string()}</strong>
                    " • "
                    {time}
                </div>
                <div style="white-space: pre-wrap;">{msg.content}</div>
            </div>
        </div>
    }
}
