use contracts::dashboards::content::{DeliveryStatus, ItemStatus, OrderStatus};
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary", "success", "warning", "error", "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant_class(), additional_class())>
            {children()}
        </span>
    }
}

pub fn order_variant(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Pending => "warning",
        OrderStatus::Confirmed => "primary",
        OrderStatus::Dispatched => "neutral",
        OrderStatus::Delivered => "success",
    }
}

pub fn item_variant(status: ItemStatus) -> &'static str {
    match status {
        ItemStatus::Active => "success",
        ItemStatus::Ordered => "warning",
    }
}

pub fn delivery_variant(status: DeliveryStatus) -> &'static str {
    match status {
        DeliveryStatus::InTransit => "warning",
        DeliveryStatus::OutForDelivery | DeliveryStatus::Delivered => "success",
    }
}

/// Status badge for an order row
#[component]
pub fn OrderBadge(status: OrderStatus) -> impl IntoView {
    view! { <Badge variant=order_variant(status)>{status.label()}</Badge> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_variants() {
        assert_eq!(order_variant(OrderStatus::Pending), "warning");
        assert_eq!(order_variant(OrderStatus::Confirmed), "primary");
        assert_eq!(order_variant(OrderStatus::Delivered), "success");
    }

    #[test]
    fn test_item_and_delivery_variants() {
        assert_eq!(item_variant(ItemStatus::Active), "success");
        assert_eq!(item_variant(ItemStatus::Ordered), "warning");
        assert_eq!(delivery_variant(DeliveryStatus::InTransit), "warning");
        assert_eq!(delivery_variant(DeliveryStatus::OutForDelivery), "success");
    }
}
