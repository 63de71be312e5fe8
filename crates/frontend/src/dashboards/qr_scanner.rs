//! QR tools: генерация payload для товара и имитация сканирования.

use crate::layout::global_context::use_app;
use crate::shared::components::PageHeader;
use crate::shared::icons::icon;
use crate::shared::timers::use_action_runner;
use crate::shared::toast::use_toasts;
use contracts::dashboards::content::{qr_payload, QrToolsView};
use contracts::shared::async_action::{ActionKind, WidgetId};
use contracts::shared::notification::{Notification, Notifier};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Input, Select};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QrMode {
    Generate,
    Scan,
}

/// Payload for the generator; falls back to `default_payload` while the
/// form is incomplete.
fn generator_payload(product: &str, quantity: &str, default_payload: &str) -> String {
    match quantity.trim().parse::<u32>() {
        Ok(qty) if qty > 0 && !product.is_empty() => qr_payload(product, qty),
        _ => default_payload.to_string(),
    }
}

#[component]
pub fn QrToolsSection(data: QrToolsView) -> impl IntoView {
    let mode = RwSignal::new(QrMode::Generate);

    view! {
        <div class="section section--qr">
            <PageHeader title=data.title icon_name="qr-code">
                <Button
                    appearance=Signal::derive(move || if mode.get() == QrMode::Generate {
                        ButtonAppearance::Primary
                    } else {
                        ButtonAppearance::Secondary
                    })
                    on_click=move |_| mode.set(QrMode::Generate)
                >
                    "Generate"
                </Button>
                <Button
                    appearance=Signal::derive(move || if mode.get() == QrMode::Scan {
                        ButtonAppearance::Primary
                    } else {
                        ButtonAppearance::Secondary
                    })
                    on_click=move |_| mode.set(QrMode::Scan)
                >
                    "Scan"
                </Button>
            </PageHeader>

            {move || match mode.get() {
                QrMode::Generate => view! { <QrGenerator products=data.products.clone() /> }.into_any(),
                QrMode::Scan => view! { <QrScanner data=data.clone() /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn QrGenerator(products: Vec<&'static str>) -> impl IntoView {
    let ctx = use_app();
    let default_payload = ctx.config.with_value(|c| c.qr.default_payload.clone());

    let product = RwSignal::new(products.first().copied().unwrap_or_default().to_string());
    let quantity = RwSignal::new("100".to_string());
    let payload = move || generator_payload(&product.get(), &quantity.get(), &default_payload);

    view! {
        <div class="qr-panel">
            <h3>"QR Code Generator"</h3>
            <div class="qr-panel__form">
                <label>"Product"</label>
                <Select value=product>
                    {products.into_iter().map(|p| view! { <option value=p>{p}</option> }).collect_view()}
                </Select>
                <label>"Quantity"</label>
                <Input value=quantity placeholder="Quantity" />
            </div>
            <div class="qr-panel__code">
                {icon("qr-code")}
                <code>{payload}</code>
            </div>
        </div>
    }
}

#[component]
fn QrScanner(data: QrToolsView) -> impl IntoView {
    let ctx = use_app();
    let toasts = use_toasts();
    let runner = use_action_runner();

    let widget = WidgetId::new(data.widget);
    let view_data = StoredValue::new(data);
    let scanning = RwSignal::new(false);
    let last_result = RwSignal::new(None::<String>);

    let start = move |_| {
        let action = ctx.action(ActionKind::QrScan);
        let started = runner.with_value(|r| {
            r.start(widget.clone(), action, move |done| {
                scanning.set(false);
                let description = view_data.with_value(|v| v.scan_toast(&done.result));
                toasts.notify(Notification::info("QR Code Scanned", description));
                last_result.set(Some(done.result));
            })
        });
        match started {
            Ok(handle) => {
                leptos::logging::log!("📷 scan started on {}", handle.widget());
                scanning.set(true);
            }
            Err(e) => log::warn!("{}", e),
        }
    };

    view! {
        <div class="qr-panel">
            <h3>"QR Code Scanner"</h3>
            <div class="qr-panel__viewport" class:qr-panel__viewport--active=move || scanning.get()>
                {move || if scanning.get() {
                    view! { <p>"Scanning..."</p> }.into_any()
                } else {
                    view! { <p>"QR Scanner Ready"</p> }.into_any()
                }}
            </div>
            <Button
                appearance=ButtonAppearance::Primary
                disabled=Signal::derive(move || scanning.get())
                on_click=start
            >
                {move || if scanning.get() { "Scanning..." } else { "Start Scanning" }}
            </Button>
            {move || last_result.get().map(|r| view! {
                <div class="qr-panel__result">"Last scan: " <code>{r}</code></div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_payload() {
        assert_eq!(
            generator_payload("Smartphone X1", "200", "PRODUCT_123_QTY_500"),
            "PRODUCT_SMARTPHONE_X1_QTY_200"
        );
        assert_eq!(generator_payload("Smartphone X1", "", "PRODUCT_123_QTY_500"), "PRODUCT_123_QTY_500");
        assert_eq!(generator_payload("Smartphone X1", "0", "D"), "D");
        assert_eq!(generator_payload("", "10", "D"), "D");
    }
}
