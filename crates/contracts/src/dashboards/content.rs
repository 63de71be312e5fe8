//! Read-only view bundles, one per section.
//!
//! All data is fixture text; the helper methods only filter, rank and sum it.

use crate::enums::{Role, Section};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ContentView {
    Home(HomeView),
    Profile(ProfileView),
    Orders(OrdersView),
    Products(ProductsView),
    Discounts(DiscountsView),
    Sales(SalesView),
    Messages(MessagesView),
    Counterparties(CounterpartiesView),
    Stocks(StocksView),
    Logistics(LogisticsView),
    QrTools(QrToolsView),
    Support(SupportView),
}

impl ContentView {
    pub fn title(&self) -> &str {
        match self {
            ContentView::Home(v) => &v.greeting,
            ContentView::Profile(v) => v.title,
            ContentView::Orders(v) => v.title,
            ContentView::Products(v) => v.title,
            ContentView::Discounts(v) => v.title,
            ContentView::Sales(v) => v.title,
            ContentView::Messages(v) => v.title,
            ContentView::Counterparties(v) => v.title,
            ContentView::Stocks(v) => v.title,
            ContentView::Logistics(v) => v.title,
            ContentView::QrTools(v) => v.title,
            ContentView::Support(v) => v.title,
        }
    }

    /// Section the view belongs to (`Counterparties` maps to buyers or suppliers).
    pub fn section(&self) -> Section {
        match self {
            ContentView::Home(_) => Section::Dashboard,
            ContentView::Profile(_) => Section::Profile,
            ContentView::Orders(_) => Section::Orders,
            ContentView::Products(_) => Section::Products,
            ContentView::Discounts(_) => Section::Discounts,
            ContentView::Sales(_) => Section::Sales,
            ContentView::Messages(_) => Section::Messages,
            ContentView::Counterparties(v) => match v.kind {
                CounterpartyKind::Buyers => Section::Buyers,
                CounterpartyKind::Suppliers => Section::Suppliers,
            },
            ContentView::Stocks(_) => Section::Stocks,
            ContentView::Logistics(_) => Section::Logistics,
            ContentView::QrTools(_) => Section::QrScanner,
            ContentView::Support(_) => Section::CustomerService,
        }
    }
}

// ---------------------------------------------------------------------------
// Dashboard home

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartnerCard {
    pub name: &'static str,
    pub category: &'static str,
    /// Products or price line shown under the name
    pub detail: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub target: Section,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeView {
    pub role: Role,
    pub greeting: String,
    pub search_title: &'static str,
    pub search_placeholder: &'static str,
    pub categories: Vec<&'static str>,
    pub partners_title: &'static str,
    pub partners: Vec<PartnerCard>,
    pub features: Vec<FeatureCard>,
}

impl HomeView {
    /// Client-side filter: case-insensitive substring over name and detail,
    /// plus an exact category match when `category` is non-empty.
    pub fn filter_partners(&self, query: &str, category: &str) -> Vec<&PartnerCard> {
        let query = query.trim().to_lowercase();
        self.partners
            .iter()
            .filter(|p| category.is_empty() || p.category.eq_ignore_ascii_case(category))
            .filter(|p| {
                query.is_empty()
                    || p.name.to_lowercase().contains(&query)
                    || p.detail.to_lowercase().contains(&query)
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Profile / products

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileField {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ItemStatus {
    Active,
    Ordered,
}

impl ItemStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ItemStatus::Active => "Active",
            ItemStatus::Ordered => "Ordered",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryItem {
    pub product: &'static str,
    pub supplier: &'static str,
    pub quantity: u32,
    pub status: ItemStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileView {
    pub title: &'static str,
    pub details: Vec<ProfileField>,
    pub inventory: Vec<InventoryItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductsView {
    pub title: &'static str,
    pub items: Vec<InventoryItem>,
}

// ---------------------------------------------------------------------------
// Orders

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Dispatched,
    Delivered,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Dispatched => "Dispatched",
            OrderStatus::Delivered => "Delivered",
        }
    }

    pub fn all() -> [OrderStatus; 4] {
        [
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Dispatched,
            OrderStatus::Delivered,
        ]
    }

    /// Only confirmed orders can be handed to logistics.
    pub fn can_book_delivery(&self) -> bool {
        matches!(self, OrderStatus::Confirmed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRow {
    pub id: &'static str,
    pub counterparty: &'static str,
    pub product: &'static str,
    pub quantity: u32,
    pub status: OrderStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrdersView {
    pub title: &'static str,
    pub orders: Vec<OrderRow>,
}

impl OrdersView {
    pub fn with_status(&self, status: Option<OrderStatus>) -> Vec<&OrderRow> {
        self.orders
            .iter()
            .filter(|o| status.map_or(true, |s| o.status == s))
            .collect()
    }

    pub fn find(&self, id: &str) -> Option<&OrderRow> {
        self.orders.iter().find(|o| o.id == id)
    }
}

// ---------------------------------------------------------------------------
// Discounts

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscountRow {
    pub product: &'static str,
    /// Supplier offering the discount, or the buyer it is offered to
    pub counterparty: &'static str,
    pub percent: u8,
    pub min_order: u32,
}

impl DiscountRow {
    pub fn percent_label(&self) -> String {
        format!("{}%", self.percent)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscountsView {
    pub title: &'static str,
    pub counterparty_label: &'static str,
    pub tracking_by_default: bool,
    pub discounts: Vec<DiscountRow>,
    pub notes: Vec<&'static str>,
}

// ---------------------------------------------------------------------------
// Sales

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitsSold {
    pub product: &'static str,
    pub units: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlySales {
    pub month: &'static str,
    pub units: u32,
    /// Rupees
    pub revenue: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalesView {
    pub title: &'static str,
    pub units_by_product: Vec<UnitsSold>,
    pub revenue: u64,
    pub target: u64,
    pub change_label: &'static str,
    pub months: Vec<MonthlySales>,
}

impl SalesView {
    /// Share of target reached, one decimal place.
    pub fn achieved_percent(&self) -> f64 {
        if self.target == 0 {
            return 0.0;
        }
        (self.revenue as f64 * 1000.0 / self.target as f64).round() / 10.0
    }

    /// Month-over-month growth in tenths of a percent; `None` for the first month.
    pub fn growth(&self) -> Vec<Option<f64>> {
        let mut out = Vec::with_capacity(self.months.len());
        let mut prev: Option<u64> = None;
        for month in &self.months {
            out.push(prev.filter(|p| *p > 0).map(|p| {
                let change = (month.revenue as f64 - p as f64) * 100.0 / p as f64;
                (change * 10.0).round() / 10.0
            }));
            prev = Some(month.revenue);
        }
        out
    }
}

/// Indian digit grouping: 500000 -> "₹5,00,000".
pub fn format_inr(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{}", digits);
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (a, b) = rest.split_at(rest.len() - 2);
        groups.push(b);
        rest = a;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();
    format!("₹{},{}", groups.join(","), tail)
}

// ---------------------------------------------------------------------------
// Messages

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub sender: &'static str,
    pub content: &'static str,
    pub timestamp: &'static str,
}

impl ChatMessage {
    pub fn is_own(&self) -> bool {
        self.sender == "You"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatThread {
    pub contact: &'static str,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessagesView {
    pub title: &'static str,
    pub threads: Vec<ChatThread>,
}

impl MessagesView {
    pub fn thread(&self, contact: &str) -> Option<&ChatThread> {
        self.threads.iter().find(|t| t.contact == contact)
    }

    pub fn search(&self, query: &str) -> Vec<&ChatThread> {
        let query = query.trim().to_lowercase();
        self.threads
            .iter()
            .filter(|t| query.is_empty() || t.contact.to_lowercase().contains(&query))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Buyers / suppliers

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CounterpartyKind {
    Buyers,
    Suppliers,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CounterpartyRow {
    pub name: &'static str,
    pub contact: &'static str,
    pub product: &'static str,
    pub quantity: u32,
    pub orders: u32,
    pub last_order: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CounterpartiesView {
    pub title: &'static str,
    pub kind: CounterpartyKind,
    pub rows: Vec<CounterpartyRow>,
}

impl CounterpartiesView {
    /// Ranked by order count, ties broken by name.
    pub fn top(&self, n: usize) -> Vec<&CounterpartyRow> {
        let mut ranked: Vec<_> = self.rows.iter().collect();
        ranked.sort_by(|a, b| b.orders.cmp(&a.orders).then_with(|| a.name.cmp(b.name)));
        ranked.truncate(n);
        ranked
    }
}

// ---------------------------------------------------------------------------
// Stocks

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockRow {
    pub product: &'static str,
    pub supplier: &'static str,
    pub total: u32,
    pub booked: u32,
    pub dispatched: u32,
}

impl StockRow {
    pub fn available(&self) -> u32 {
        self.total.saturating_sub(self.booked)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockTotals {
    pub total: u32,
    pub booked: u32,
    pub dispatched: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StocksView {
    pub title: &'static str,
    pub rows: Vec<StockRow>,
}

impl StocksView {
    pub fn totals(&self) -> StockTotals {
        self.rows.iter().fold(
            StockTotals {
                total: 0,
                booked: 0,
                dispatched: 0,
            },
            |acc, row| StockTotals {
                total: acc.total + row.total,
                booked: acc.booked + row.booked,
                dispatched: acc.dispatched + row.dispatched,
            },
        )
    }
}

// ---------------------------------------------------------------------------
// Logistics

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeliveryStatus {
    InTransit,
    OutForDelivery,
    Delivered,
}

impl DeliveryStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DeliveryStatus::InTransit => "In Transit",
            DeliveryStatus::OutForDelivery => "Out for Delivery",
            DeliveryStatus::Delivered => "Delivered",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostEstimate {
    pub label: &'static str,
    pub cost: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryRow {
    pub tracking_id: &'static str,
    pub products: &'static str,
    pub destination: &'static str,
    pub status: DeliveryStatus,
    pub eta: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogisticsView {
    pub title: &'static str,
    pub products: Vec<&'static str>,
    pub delivery_types: Vec<&'static str>,
    pub estimates: Vec<CostEstimate>,
    pub best_option: &'static str,
    pub eta_note: &'static str,
    pub deliveries: Vec<DeliveryRow>,
}

// ---------------------------------------------------------------------------
// QR tools / support

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QrToolsView {
    pub title: &'static str,
    /// Widget id for the simulated scan
    pub widget: &'static str,
    pub products: Vec<&'static str>,
    /// Prefix of the "QR Code Scanned" toast description
    pub scan_toast_prefix: &'static str,
}

impl QrToolsView {
    pub fn scan_toast(&self, data: &str) -> String {
        format!("{}: {}", self.scan_toast_prefix, data)
    }
}

/// Generator payload, e.g. `PRODUCT_SMARTPHONE_X1_QTY_200`.
pub fn qr_payload(product: &str, quantity: u32) -> String {
    let code: String = product
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
        .collect();
    let code = code
        .split('_')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("_");
    format!("PRODUCT_{}_QTY_{}", code, quantity)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportChannel {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub contact: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportView {
    pub title: &'static str,
    pub channels: Vec<SupportChannel>,
    pub faqs: Vec<Faq>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_inr() {
        assert_eq!(format_inr(0), "₹0");
        assert_eq!(format_inr(450), "₹450");
        assert_eq!(format_inr(1200), "₹1,200");
        assert_eq!(format_inr(500_000), "₹5,00,000");
        assert_eq!(format_inr(12_345_678), "₹1,23,45,678");
    }

    #[test]
    fn test_qr_payload() {
        assert_eq!(qr_payload("Smartphone X1", 200), "PRODUCT_SMARTPHONE_X1_QTY_200");
        assert_eq!(
            qr_payload("Power Bank 10000mAh", 5),
            "PRODUCT_POWER_BANK_10000MAH_QTY_5"
        );
    }

    #[test]
    fn test_top_counterparties() {
        let row = |name, orders| CounterpartyRow {
            name,
            contact: "",
            product: "",
            quantity: 0,
            orders,
            last_order: date(2025, 4, 1),
        };
        let view = CounterpartiesView {
            title: "Buyers",
            kind: CounterpartyKind::Buyers,
            rows: vec![row("B", 3), row("A", 5), row("C", 5), row("D", 1)],
        };
        let names: Vec<_> = view.top(3).iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["A", "C", "B"]);
    }

    #[test]
    fn test_sales_math() {
        let view = SalesView {
            title: "Sales",
            units_by_product: vec![],
            revenue: 500_000,
            target: 600_000,
            change_label: "",
            months: vec![
                MonthlySales { month: "Jan", units: 300, revenue: 300_000 },
                MonthlySales { month: "Feb", units: 450, revenue: 450_000 },
                MonthlySales { month: "Mar", units: 400, revenue: 400_000 },
            ],
        };
        assert_eq!(view.achieved_percent(), 83.3);
        assert_eq!(view.growth(), vec![None, Some(50.0), Some(-11.1)]);
    }

    #[test]
    fn test_only_confirmed_orders_book_delivery() {
        let bookable: Vec<_> = OrderStatus::all()
            .into_iter()
            .filter(|s| s.can_book_delivery())
            .collect();
        assert_eq!(bookable, vec![OrderStatus::Confirmed]);
    }
}
