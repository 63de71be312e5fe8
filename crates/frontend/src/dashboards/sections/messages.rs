//! Chat with counterparties. Sending goes through the simulated action
//! runner: one send per contact widget at a time.

use crate::layout::global_context::use_app;
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::timers::use_action_runner;
use crate::shared::toast::use_toasts;
use contracts::dashboards::content::{ChatThread, MessagesView};
use contracts::shared::async_action::{ActionKind, WidgetId};
use contracts::shared::notification::{Notification, Notifier};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Input};

#[derive(Debug, Clone, PartialEq, Eq)]
struct SentMessage {
    contact: String,
    content: String,
}

fn send_widget(contact: &str) -> WidgetId {
    WidgetId(format!("messageSend:{}", contact))
}

fn sent_toast(contact: &str) -> Notification {
    Notification::info("Message Sent", format!("Message sent to {}", contact))
}

#[component]
pub fn MessagesSection(data: MessagesView) -> impl IntoView {
    let ctx = use_app();
    let toasts = use_toasts();
    let runner = use_action_runner();

    let title = data.title;
    let first = data.threads.first().map(|t| t.contact.to_string()).unwrap_or_default();
    let messages = StoredValue::new(data);

    let selected = RwSignal::new(first);
    let search = RwSignal::new(String::new());
    let draft = RwSignal::new(String::new());
    let sending = RwSignal::new(false);
    let sent: RwSignal<Vec<SentMessage>> = RwSignal::new(Vec::new());

    let contacts = move || -> Vec<&'static str> {
        messages.with_value(|m| m.search(&search.get()).into_iter().map(|t| t.contact).collect())
    };
    let thread = move || -> Option<ChatThread> {
        let contact = selected.get();
        messages.with_value(|m| m.thread(&contact).cloned())
    };

    let send = move || {
        let text = draft.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        let contact = selected.get_untracked();
        let action = ctx.action(ActionKind::SendMessage);
        let started = runner.with_value(|r| {
            let contact = contact.clone();
            r.start(send_widget(&contact), action, move |_| {
                sent.update(|list| list.push(SentMessage {
                    contact: contact.clone(),
                    content: text.trim().to_string(),
                }));
                sending.set(false);
                toasts.notify(sent_toast(&contact));
            })
        });
        match started {
            Ok(_) => {
                sending.set(true);
                draft.set(String::new());
            }
            Err(e) => log::warn!("{}", e),
        }
    };

    view! {
        <div class="section section--messages">
            <PageHeader title=title icon_name="message-square">
                ""
            </PageHeader>

            <div class="chat">
                <div class="chat__contacts">
                    <Input value=search placeholder="Search contacts..." />
                    {move || contacts().into_iter().map(|contact| view! {
                        <div
                            class="chat__contact"
                            class:chat__contact--active=move || selected.get() == contact
                            on:click=move |_| selected.set(contact.to_string())
                        >
                            {icon("user")}
                            <span>{contact}</span>
                        </div>
                    }).collect_view()}
                </div>

                <div class="chat__thread">
                    {move || match thread() {
                        Some(t) => {
                            let contact = t.contact;
                            view! {
                                <div class="chat__header">{contact}</div>
                                <div class="chat__messages">
                                    {t.messages.into_iter().map(|m| view! {
                                        <div class="chat__message" class:chat__message--own=m.is_own()>
                                            <div class="chat__bubble">{m.content}</div>
                                            <div class="chat__time">{m.timestamp}</div>
                                        </div>
                                    }).collect_view()}
                                    {move || sent.get().into_iter()
                                        .filter(|s| s.contact == contact)
                                        .map(|s| view! {
                                            <div class="chat__message chat__message--own">
                                                <div class="chat__bubble">{s.content}</div>
                                                <div class="chat__time">"Just now"</div>
                                            </div>
                                        }).collect_view()}
                                </div>
                            }.into_any()
                        }
                        None => view! { <p class="empty">"Select a conversation"</p> }.into_any(),
                    }}

                    <div class="chat__composer">
                        <Input value=draft placeholder="Type a message..." />
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || sending.get())
                            on_click=move |_| send()
                        >
                            {move || if sending.get() { "Sending..." } else { "Send" }}
                        </Button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_widget_per_contact() {
        assert_eq!(send_widget("Kumar Stores").0, "messageSend:Kumar Stores");
        assert_ne!(send_widget("A"), send_widget("B"));
    }

    #[test]
    fn test_sent_toast() {
        let toast = sent_toast("ABC Electronics");
        assert_eq!(toast.title, "Message Sent");
        assert_eq!(toast.description, "Message sent to ABC Electronics");
    }
}
