use crate::shared::components::ui::badge::{item_variant, Badge};
use crate::shared::components::PageHeader;
use contracts::dashboards::content::{InventoryItem, ProductsView, ProfileView};
use leptos::prelude::*;
use thaw::{Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow};

#[component]
fn InventoryTable(items: Vec<InventoryItem>) -> impl IntoView {
    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Product"</TableHeaderCell>
                    <TableHeaderCell>"Supplier"</TableHeaderCell>
                    <TableHeaderCell>"Quantity"</TableHeaderCell>
                    <TableHeaderCell>"Status"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {items.into_iter().map(|item| view! {
                    <TableRow>
                        <TableCell><TableCellLayout>{item.product}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{item.supplier}</TableCellLayout></TableCell>
                        <TableCell><TableCellLayout>{item.quantity}</TableCellLayout></TableCell>
                        <TableCell>
                            <TableCellLayout>
                                <Badge variant=item_variant(item.status)>{item.status.label()}</Badge>
                            </TableCellLayout>
                        </TableCell>
                    </TableRow>
                }).collect_view()}
            </TableBody>
        </Table>
    }
}

#[component]
pub fn ProfileSection(data: ProfileView) -> impl IntoView {
    view! {
        <div class="section section--profile">
            <PageHeader title=data.title icon_name="user">
                ""
            </PageHeader>

            <dl class="profile-details">
                {data.details.into_iter().map(|f| view! {
                    <div class="profile-details__row">
                        <dt>{f.label}</dt>
                        <dd>{f.value}</dd>
                    </div>
                }).collect_view()}
            </dl>

            <h2>"Inventory"</h2>
            <InventoryTable items=data.inventory />
        </div>
    }
}

#[component]
pub fn ProductsSection(data: ProductsView) -> impl IntoView {
    view! {
        <div class="section section--products">
            <PageHeader title=data.title icon_name="package">
                ""
            </PageHeader>
            <InventoryTable items=data.items />
        </div>
    }
}
