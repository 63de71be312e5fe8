use crate::shared::components::PageHeader;
use crate::shared::toast::use_toasts;
use contracts::dashboards::content::{DiscountRow, DiscountsView};
use contracts::shared::notification::{Notification, Notifier};
use leptos::prelude::*;
use thaw::{
    Button, ButtonAppearance, ButtonSize, Switch, Table, TableBody, TableCell, TableCellLayout,
    TableHeader, TableHeaderCell, TableRow,
};

fn applied_toast(row: &DiscountRow) -> Notification {
    Notification::info(
        "Discount Applied",
        format!(
            "{} off {} with {} (min. order {} units)",
            row.percent_label(),
            row.product,
            row.counterparty,
            row.min_order
        ),
    )
}

#[component]
pub fn DiscountsSection(data: DiscountsView) -> impl IntoView {
    let toasts = use_toasts();
    let tracking = RwSignal::new(data.tracking_by_default);

    let DiscountsView {
        title,
        counterparty_label,
        discounts,
        notes,
        ..
    } = data;
    let discounts = StoredValue::new(discounts);

    view! {
        <div class="section section--discounts">
            <PageHeader title=title icon_name="dollar-sign">
                <Switch checked=tracking label="Track discounts" />
            </PageHeader>

            <Show
                when=move || tracking.get()
                fallback=|| view! {
                    <p class="section__hint">"Discount tracking is paused. Turn it on to see volume discounts."</p>
                }
            >
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Product"</TableHeaderCell>
                            <TableHeaderCell>{counterparty_label}</TableHeaderCell>
                            <TableHeaderCell>"Discount"</TableHeaderCell>
                            <TableHeaderCell>"Min. Order"</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {discounts.get_value().into_iter().map(|row| {
                            let toast = applied_toast(&row);
                            let percent_label = row.percent_label();
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{row.product}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{row.counterparty}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{percent_label}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{format!("{} units", row.min_order)}</TableCellLayout></TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=ButtonAppearance::Primary
                                                on_click=move |_| toasts.notify(toast.clone())
                                            >
                                                "Apply"
                                            </Button>
                                        </TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }
                        }).collect_view()}
                    </TableBody>
                </Table>
            </Show>

            <ul class="section__notes">
                {notes.into_iter().map(|n| view! { <li>{n}</li> }).collect_view()}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_applied_toast() {
        let row = DiscountRow {
            product: "Smartphone X1",
            counterparty: "TechCorp",
            percent: 10,
            min_order: 200,
        };
        let toast = applied_toast(&row);
                            let percent_label = row.percent_label();
        assert_eq!(toast.title, "Discount Applied");
        assert_eq!(
            toast.description,
            "10% off Smartphone X1 with TechCorp (min. order 200 units)"
        );
    }
}
