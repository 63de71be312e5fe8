use crate::dashboards::content::*;
use chrono::NaiveDate;

/// Fixture dates are literals; an impossible date degrades to the epoch.
pub(super) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub(super) fn msg(sender: &'static str, content: &'static str, timestamp: &'static str) -> ChatMessage {
    ChatMessage {
        sender,
        content,
        timestamp,
    }
}

pub(super) fn order(
    id: &'static str,
    counterparty: &'static str,
    product: &'static str,
    quantity: u32,
    status: OrderStatus,
) -> OrderRow {
    OrderRow {
        id,
        counterparty,
        product,
        quantity,
        status,
    }
}

pub(super) fn item(
    product: &'static str,
    supplier: &'static str,
    quantity: u32,
    status: ItemStatus,
) -> InventoryItem {
    InventoryItem {
        product,
        supplier,
        quantity,
        status,
    }
}

pub(super) fn stock(
    product: &'static str,
    supplier: &'static str,
    total: u32,
    booked: u32,
    dispatched: u32,
) -> StockRow {
    StockRow {
        product,
        supplier,
        total,
        booked,
        dispatched,
    }
}

pub(super) fn discount(
    percent: u8,
    min_order: u32,
    product: &'static str,
    counterparty: &'static str,
) -> DiscountRow {
    DiscountRow {
        product,
        counterparty,
        percent,
        min_order,
    }
}

pub(super) fn field(label: &'static str, value: &'static str) -> ProfileField {
    ProfileField { label, value }
}

pub(super) fn month(month: &'static str, units: u32, revenue: u64) -> MonthlySales {
    MonthlySales {
        month,
        units,
        revenue,
    }
}

pub(super) const DISCOUNT_NOTES: [&str; 2] = [
    "Discounts are automatically applied when you reach the minimum order quantity.",
    "Some discounts may have time limitations or other conditions.",
];

pub(super) fn logistics(products: Vec<&'static str>, deliveries: Vec<DeliveryRow>) -> LogisticsView {
    LogisticsView {
        title: "NexQ Logistics",
        products,
        delivery_types: vec!["Standard", "Same Day", "Emergency"],
        estimates: vec![
            CostEstimate {
                label: "Distance-based (50km)",
                cost: 300,
            },
            CostEstimate {
                label: "Self-Pickup",
                cost: 0,
            },
            CostEstimate {
                label: "NexQ Logistics (Same Day)",
                cost: 300,
            },
            CostEstimate {
                label: "NexQ Logistics (Emergency)",
                cost: 600,
            },
        ],
        best_option: "NexQ Logistics (Same Day)",
        eta_note: "Estimated delivery time: 4-6 hours",
        deliveries,
    }
}

pub(super) fn delivery(
    tracking_id: &'static str,
    products: &'static str,
    destination: &'static str,
    status: DeliveryStatus,
    eta: &'static str,
) -> DeliveryRow {
    DeliveryRow {
        tracking_id,
        products,
        destination,
        status,
        eta,
    }
}

pub(super) fn qr_tools(title: &'static str, products: Vec<&'static str>, prefix: &'static str) -> QrToolsView {
    QrToolsView {
        title,
        widget: "qrScanner1",
        products,
        scan_toast_prefix: prefix,
    }
}

pub(super) fn support(discount_section: &'static str) -> SupportView {
    let discount_answer = match discount_section {
        "Discount Tracker" => "Discounts are automatically applied when you reach the minimum order quantity. You can also manually apply discounts from the Discount Tracker section.",
        "Discount Impact" => "Create volume-based offers from the Discount Impact section. Buyers see them as soon as they are published.",
        "Bulk Discounts" => "Bulk discounts apply automatically once an order reaches the minimum quantity listed in the Bulk Discounts section.",
        _ => "Open the Discounts Available section and press Apply next to the offer you want to use.",
    };

    SupportView {
        title: "Customer Service",
        channels: vec![
            SupportChannel {
                icon: "message-square",
                title: "Chat Support",
                description: "Get instant answers from our AI assistant or chat with our support team.",
                contact: "Start Chat",
            },
            SupportChannel {
                icon: "file-text",
                title: "Email Support",
                description: "Send us an email and we'll get back to you within 24 hours.",
                contact: "support@nexq.com",
            },
            SupportChannel {
                icon: "bell",
                title: "Phone Support",
                description: "Call our customer service line for urgent assistance.",
                contact: "1800-123-4567",
            },
        ],
        faqs: vec![
            Faq {
                question: "How do I apply discounts to my orders?",
                answer: discount_answer,
            },
            Faq {
                question: "How does the QR scanning work?",
                answer: "You can scan QR codes from your partners to quickly update your inventory. Simply point your camera at the QR code on the product packaging or delivery receipt.",
            },
            Faq {
                question: "How can I track my deliveries?",
                answer: "You can track your deliveries from the NexQ Logistics section. Simply click on the \"Track\" button next to the delivery you want to track.",
            },
            Faq {
                question: "What are the payment terms?",
                answer: "We offer various payment terms including advance payment, credit (30/60/90 days), and COD. Contact our support team to discuss options that work best for your business.",
            },
        ],
    }
}
