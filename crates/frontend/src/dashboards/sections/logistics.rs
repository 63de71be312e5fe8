use crate::layout::global_context::use_app;
use crate::shared::components::ui::badge::{delivery_variant, Badge};
use crate::shared::components::PageHeader;
use crate::shared::toast::use_toasts;
use contracts::dashboards::content::{format_inr, LogisticsView};
use contracts::dashboards::{resolve_section, ContentView};
use contracts::enums::{Role, Section};
use contracts::shared::notification::{Notification, Notifier};
use leptos::prelude::*;
use thaw::{
    Button, ButtonAppearance, Select, Table, TableBody, TableCell, TableCellLayout, TableHeader,
    TableHeaderCell, TableRow,
};

/// Product of the order passed via `?order=`, if it is one the logistics
/// form offers.
fn preselected_product(role: Role, order_id: &str, products: &[&'static str]) -> Option<&'static str> {
    let ContentView::Orders(orders) = resolve_section(role, Section::Orders) else {
        return None;
    };
    let product = orders.find(order_id)?.product;
    products.iter().copied().find(|p| *p == product)
}

fn booked_toast(order: Option<&str>, product: &str, delivery_type: &str) -> Notification {
    let subject = match order {
        Some(id) => format!("order {}", id),
        None => product.to_string(),
    };
    Notification::info(
        "Delivery Booked",
        format!("{} delivery booked for {}", delivery_type, subject),
    )
}

#[component]
pub fn LogisticsSection(data: LogisticsView) -> impl IntoView {
    let ctx = use_app();
    let toasts = use_toasts();

    let order = ctx.query.get_untracked().order;
    let role = ctx.route.get_untracked().role();
    let initial_product = role
        .zip(order.as_deref())
        .and_then(|(role, id)| preselected_product(role, id, &data.products))
        .or_else(|| data.products.first().copied())
        .unwrap_or_default();

    let product = RwSignal::new(initial_product.to_string());
    let delivery_type = RwSignal::new(
        data.delivery_types.first().copied().unwrap_or_default().to_string(),
    );
    let order_stored = StoredValue::new(order.clone());

    let book = move |_| {
        let toast = order_stored.with_value(|o| {
            booked_toast(o.as_deref(), &product.get_untracked(), &delivery_type.get_untracked())
        });
        toasts.notify(toast);
    };

    view! {
        <div class="section section--logistics">
            <PageHeader title=data.title icon_name="truck">
                ""
            </PageHeader>

            {order.map(|id| view! {
                <div class="section__banner">{format!("Booking delivery for order {}", id)}</div>
            })}

            <div class="logistics-form">
                <label>"Product"</label>
                <Select value=product>
                    {data.products.iter().map(|p| view! { <option value=*p>{*p}</option> }).collect_view()}
                </Select>
                <label>"Delivery Type"</label>
                <Select value=delivery_type>
                    {data.delivery_types.iter().map(|t| view! { <option value=*t>{*t}</option> }).collect_view()}
                </Select>
                <Button appearance=ButtonAppearance::Primary on_click=book>
                    "Book Delivery"
                </Button>
            </div>

            <div class="logistics-estimates">
                <h2>"Cost Estimates"</h2>
                {data.estimates.iter().map(|e| view! {
                    <div class="logistics-estimates__row" class:logistics-estimates__row--best={e.label == data.best_option}>
                        <span>{e.label}</span>
                        <span>{format_inr(e.cost)}</span>
                    </div>
                }).collect_view()}
                <p class="section__hint">{format!("Best option: {}", data.best_option)}</p>
                <p class="section__hint">{data.eta_note}</p>
            </div>

            <h2>"Active Deliveries"</h2>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Tracking ID"</TableHeaderCell>
                        <TableHeaderCell>"Products"</TableHeaderCell>
                        <TableHeaderCell>"Destination"</TableHeaderCell>
                        <TableHeaderCell>"Status"</TableHeaderCell>
                        <TableHeaderCell>"ETA"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {data.deliveries.into_iter().map(|d| view! {
                        <TableRow>
                            <TableCell><TableCellLayout>{d.tracking_id}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{d.products}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{d.destination}</TableCellLayout></TableCell>
                            <TableCell>
                                <TableCellLayout>
                                    <Badge variant=delivery_variant(d.status)>{d.status.label()}</Badge>
                                </TableCellLayout>
                            </TableCell>
                            <TableCell><TableCellLayout>{d.eta}</TableCellLayout></TableCell>
                        </TableRow>
                    }).collect_view()}
                </TableBody>
            </Table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preselected_product_from_order() {
        let ContentView::Orders(orders) = resolve_section(Role::Distributor, Section::Orders) else {
            panic!("distributor orders expected");
        };
        let order = &orders.orders[0];
        let products = vec![order.product, "Something else"];
        assert_eq!(
            preselected_product(Role::Distributor, order.id, &products),
            Some(order.product)
        );
        assert_eq!(preselected_product(Role::Distributor, "ORD-000", &products), None);
        assert_eq!(preselected_product(Role::Distributor, order.id, &["Other"]), None);
    }

    #[test]
    fn test_booked_toast() {
        let toast = booked_toast(Some("ORD-456"), "Smartphone X1", "Same Day");
        assert_eq!(toast.title, "Delivery Booked");
        assert_eq!(toast.description, "Same Day delivery booked for order ORD-456");
        let toast = booked_toast(None, "Smartphone X1", "Standard");
        assert_eq!(toast.description, "Standard delivery booked for Smartphone X1");
    }
}
