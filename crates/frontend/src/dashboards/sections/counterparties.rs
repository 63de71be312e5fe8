use crate::shared::components::PageHeader;
use chrono::NaiveDate;
use contracts::dashboards::content::{CounterpartiesView, CounterpartyKind};
use leptos::prelude::*;
use thaw::{Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow};

const TOP_N: usize = 3;

fn last_order_label(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

#[component]
pub fn CounterpartiesSection(data: CounterpartiesView) -> impl IntoView {
    let (icon_name, top_title) = match data.kind {
        CounterpartyKind::Buyers => ("users", "Top Buyers"),
        CounterpartyKind::Suppliers => ("truck", "Top Suppliers"),
    };
    let top: Vec<_> = data.top(TOP_N).into_iter().cloned().collect();

    view! {
        <div class="section section--counterparties">
            <PageHeader title=data.title icon_name=icon_name>
                ""
            </PageHeader>

            <h2>{top_title}</h2>
            <div class="top-list">
                {top.into_iter().enumerate().map(|(i, row)| view! {
                    <div class="top-list__item">
                        <span class="top-list__rank">{format!("#{}", i + 1)}</span>
                        <span class="top-list__name">{row.name}</span>
                        <span class="top-list__orders">{format!("{} orders", row.orders)}</span>
                    </div>
                }).collect_view()}
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Name"</TableHeaderCell>
                        <TableHeaderCell>"Contact"</TableHeaderCell>
                        <TableHeaderCell>"Product"</TableHeaderCell>
                        <TableHeaderCell>"Quantity"</TableHeaderCell>
                        <TableHeaderCell>"Orders"</TableHeaderCell>
                        <TableHeaderCell>"Last Order"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {data.rows.into_iter().map(|row| view! {
                        <TableRow>
                            <TableCell><TableCellLayout>{row.name}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{row.contact}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{row.product}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{row.quantity}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{row.orders}</TableCellLayout></TableCell>
                            <TableCell>
                                <TableCellLayout>{last_order_label(row.last_order)}</TableCellLayout>
                            </TableCell>
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
    fn test_last_order_label() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(last_order_label(date), "05 Mar 2024");
    }
}
