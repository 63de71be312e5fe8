use crate::layout::global_context::use_app;
use crate::shared::components::ui::OrderBadge;
use crate::shared::components::PageHeader;
use crate::shared::toast::use_toasts;
use contracts::dashboards::content::{OrderRow, OrderStatus, OrdersView};
use contracts::shared::notification::{Notification, Notifier};
use leptos::prelude::*;
use thaw::{
    Button, ButtonAppearance, ButtonSize, Select, Table, TableBody, TableCell, TableCellLayout,
    TableHeader, TableHeaderCell, TableRow,
};

const ALL: &str = "all";

fn status_filter(value: &str) -> Option<OrderStatus> {
    OrderStatus::all().into_iter().find(|s| s.label() == value)
}

fn details_toast(order: &OrderRow) -> Notification {
    Notification::info(
        format!("Order {}", order.id),
        format!(
            "{} × {} for {} ({})",
            order.quantity,
            order.product,
            order.counterparty,
            order.status.label()
        ),
    )
}

#[component]
pub fn OrdersSection(data: OrdersView) -> impl IntoView {
    let ctx = use_app();
    let toasts = use_toasts();
    let filter = RwSignal::new(ALL.to_string());

    let title = data.title;
    let orders = StoredValue::new(data);

    let rows = move || -> Vec<OrderRow> {
        let status = status_filter(&filter.get());
        orders.with_value(|o| o.with_status(status).into_iter().cloned().collect())
    };

    view! {
        <div class="section section--orders">
            <PageHeader title=title icon_name="file-text">
                <Select value=filter>
                    <option value=ALL>"All statuses"</option>
                    {OrderStatus::all().into_iter().map(|s| view! {
                        <option value=s.label()>{s.label()}</option>
                    }).collect_view()}
                </Select>
            </PageHeader>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Order ID"</TableHeaderCell>
                        <TableHeaderCell>"Counterparty"</TableHeaderCell>
                        <TableHeaderCell>"Product"</TableHeaderCell>
                        <TableHeaderCell>"Quantity"</TableHeaderCell>
                        <TableHeaderCell>"Status"</TableHeaderCell>
                        <TableHeaderCell>"Actions"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || rows().into_iter().map(|order| {
                        let id = order.id;
                        let bookable = order.status.can_book_delivery();
                        let toast = details_toast(&order);
                        view! {
                            <TableRow>
                                <TableCell><TableCellLayout>{order.id}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{order.counterparty}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{order.product}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{order.quantity}</TableCellLayout></TableCell>
                                <TableCell>
                                    <TableCellLayout><OrderBadge status=order.status /></TableCellLayout>
                                </TableCell>
                                <TableCell>
                                    <TableCellLayout>
                                        <Button
                                            size=ButtonSize::Small
                                            on_click=move |_| toasts.notify(toast.clone())
                                        >
                                            "Details"
                                        </Button>
                                        {bookable.then(|| view! {
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=ButtonAppearance::Primary
                                                on_click=move |_| {
                                                    ctx.book_delivery(id);
                                                }
                                            >
                                                "Book Delivery"
                                            </Button>
                                        })}
                                    </TableCellLayout>
                                </TableCell>
                            </TableRow>
                        }
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
    fn test_status_filter() {
        assert_eq!(status_filter(ALL), None);
        assert_eq!(status_filter("Confirmed"), Some(OrderStatus::Confirmed));
        assert_eq!(status_filter("unknown"), None);
    }

    #[test]
    fn test_details_toast() {
        let order = OrderRow {
            id: "ORD-456",
            counterparty: "Kumar Stores",
            product: "Smartphone X1",
            quantity: 50,
            status: OrderStatus::Confirmed,
        };
        let toast = details_toast(&order);
        assert_eq!(toast.title, "Order ORD-456");
        assert_eq!(toast.description, "50 × Smartphone X1 for Kumar Stores (Confirmed)");
    }
}
