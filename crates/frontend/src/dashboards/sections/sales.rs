use crate::shared::components::stat_card::format_change;
use crate::shared::components::{PageHeader, StatCard};
use contracts::dashboards::content::{format_inr, SalesView};
use leptos::prelude::*;
use thaw::{Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow};

#[component]
pub fn SalesSection(data: SalesView) -> impl IntoView {
    let achieved = data.achieved_percent();
    let growth = data.growth();
    let last_growth = growth.last().copied().flatten();
    let total_units: u32 = data.units_by_product.iter().map(|u| u.units).sum();

    view! {
        <div class="section section--sales">
            <PageHeader title=data.title icon_name="bar-chart" subtitle=data.change_label>
                ""
            </PageHeader>

            <div class="stat-grid">
                <StatCard
                    label="Revenue"
                    icon_name="dollar-sign"
                    value=format_inr(data.revenue)
                    change_percent=last_growth
                />
                <StatCard
                    label="Target"
                    icon_name="bar-chart"
                    value=format_inr(data.target)
                    subtitle=format!("{:.1}% achieved", achieved)
                />
                <StatCard label="Units Sold" icon_name="package" value=total_units.to_string() />
            </div>

            <div class="sales-progress">
                <div class="sales-progress__bar" style=format!("width: {}%;", achieved.min(100.0))></div>
            </div>

            <h2>"Units by product"</h2>
            <div class="units-list">
                {data.units_by_product.into_iter().map(|u| view! {
                    <div class="units-list__row">
                        <span>{u.product}</span>
                        <span>{format!("{} units", u.units)}</span>
                    </div>
                }).collect_view()}
            </div>

            <h2>"Monthly sales"</h2>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Month"</TableHeaderCell>
                        <TableHeaderCell>"Units"</TableHeaderCell>
                        <TableHeaderCell>"Revenue"</TableHeaderCell>
                        <TableHeaderCell>"Growth"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {data.months.into_iter().zip(growth).map(|(m, g)| view! {
                        <TableRow>
                            <TableCell><TableCellLayout>{m.month}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{m.units}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{format_inr(m.revenue)}</TableCellLayout></TableCell>
                            <TableCell>
                                <TableCellLayout>{g.map(format_change).unwrap_or_default()}</TableCellLayout>
                            </TableCell>
                        </TableRow>
                    }).collect_view()}
                </TableBody>
            </Table>
        </div>
    }
}
