use crate::shared::components::{PageHeader, StatCard};
use contracts::dashboards::content::StocksView;
use leptos::prelude::*;
use thaw::{Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow};

#[component]
pub fn StocksSection(data: StocksView) -> impl IntoView {
    let totals = data.totals();

    view! {
        <div class="section section--stocks">
            <PageHeader title=data.title icon_name="package">
                ""
            </PageHeader>

            <div class="stat-grid">
                <StatCard label="Total Stock" icon_name="box" value=totals.total.to_string() />
                <StatCard label="Booked" icon_name="shopping-cart" value=totals.booked.to_string() />
                <StatCard label="Dispatched" icon_name="truck" value=totals.dispatched.to_string() />
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Product"</TableHeaderCell>
                        <TableHeaderCell>"Supplier"</TableHeaderCell>
                        <TableHeaderCell>"Total"</TableHeaderCell>
                        <TableHeaderCell>"Booked"</TableHeaderCell>
                        <TableHeaderCell>"Dispatched"</TableHeaderCell>
                        <TableHeaderCell>"Available"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {data.rows.into_iter().map(|row| view! {
                        <TableRow>
                            <TableCell><TableCellLayout>{row.product}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{row.supplier}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{row.total}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{row.booked}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{row.dispatched}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{row.available()}</TableCellLayout></TableCell>
                        </TableRow>
                    }).collect_view()}
                </TableBody>
            </Table>
        </div>
    }
}
