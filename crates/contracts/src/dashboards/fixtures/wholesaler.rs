use super::common::*;
use crate::dashboards::content::*;
use crate::enums::{Role, Section};

const ROLE: Role = Role::Wholesaler;

pub(super) fn view(section: Section) -> Option<ContentView> {
    let view = match section {
        Section::Dashboard => ContentView::Home(home()),
        Section::Profile => ContentView::Profile(ProfileView {
            title: "Wholesaler Profile",
            details: vec![
                field("Company", ROLE.company_name()),
                field("Contact Person", "Suresh Patel"),
                field("Email", "suresh@metrowholesale.com"),
                field("Phone", "+91 99887 66554"),
                field("Region", "West India"),
                field("GST Number", "24KLMNO9012P1Z8"),
                field("License Number", "WHL-24680"),
                field("Warehouse Capacity", "25,000 units"),
            ],
            inventory: inventory(),
        }),
        Section::Orders => ContentView::Orders(OrdersView {
            title: "Bulk Orders",
            orders: vec![
                order("ORD-610", "ABC Electronics", "Smartphone X1", 800, OrderStatus::Confirmed),
                order("ORD-611", "Sri Traders", "Charger C1", 2000, OrderStatus::Pending),
                order("ORD-612", "City Electronics Store", "Bluetooth Speaker", 120, OrderStatus::Dispatched),
                order("ORD-613", "Gupta Mart", "Charger C1", 300, OrderStatus::Delivered),
            ],
        }),
        Section::Products => ContentView::Products(ProductsView {
            title: "Product Lists",
            items: inventory(),
        }),
        Section::Discounts => ContentView::Discounts(DiscountsView {
            title: "Bulk Discounts",
            counterparty_label: "Supplier",
            tracking_by_default: true,
            discounts: vec![
                discount(12, 1000, "Smartphone X1", "ABC Electronics"),
                discount(18, 2500, "Smartphone X1", "ABC Electronics"),
                discount(9, 1500, "Charger C1", "Sri Traders"),
            ],
            notes: DISCOUNT_NOTES.to_vec(),
        }),
        Section::Sales => ContentView::Sales(SalesView {
            title: "Sales Analytics",
            units_by_product: vec![
                UnitsSold { product: "Smartphone X1", units: 1400 },
                UnitsSold { product: "Charger C1", units: 3200 },
                UnitsSold { product: "Bluetooth Speaker", units: 420 },
            ],
            revenue: 1_150_000,
            target: 1_250_000,
            change_label: "+6% from last month",
            months: vec![
                month("Jan 2025", 3900, 980_000),
                month("Feb 2025", 4100, 1_020_000),
                month("Mar 2025", 4350, 1_085_000),
                month("Apr 2025", 5020, 1_150_000),
            ],
        }),
        Section::Messages => ContentView::Messages(MessagesView {
            title: "Messages",
            threads: vec![
                ChatThread {
                    contact: "Sri Traders",
                    messages: vec![
                        msg("Sri Traders", "Chargers are back in stock.", "8:50 AM"),
                        msg("You", "Send 2000 units, same price as last time.", "9:05 AM"),
                    ],
                },
                ChatThread {
                    contact: "Gupta Mart",
                    messages: vec![msg("Gupta Mart", "When will the speakers arrive?", "Yesterday")],
                },
            ],
        }),
        Section::Buyers => ContentView::Counterparties(CounterpartiesView {
            title: "Retail Buyers",
            kind: CounterpartyKind::Buyers,
            rows: vec![
                CounterpartyRow {
                    name: "City Electronics Store",
                    contact: "buy@cityelectronics.in",
                    product: "Bluetooth Speaker",
                    quantity: 360,
                    orders: 7,
                    last_order: date(2025, 4, 11),
                },
                CounterpartyRow {
                    name: "Gupta Mart",
                    contact: "gupta@mart.in",
                    product: "Charger C1",
                    quantity: 900,
                    orders: 4,
                    last_order: date(2025, 4, 2),
                },
            ],
        }),
        Section::Stocks => ContentView::Stocks(StocksView {
            title: "Bulk Inventory",
            rows: stocks(),
        }),
        Section::Logistics => ContentView::Logistics(logistics(
            stocks().iter().map(|s| s.product).collect(),
            vec![delivery(
                "NEX-31870",
                "Charger C1 (300 units)",
                "Gupta Mart, Ahmedabad",
                DeliveryStatus::Delivered,
                "Yesterday, 5:10 PM",
            )],
        )),
        Section::QrScanner => ContentView::QrTools(qr_tools(
            "Update Inventory with QR",
            stocks().iter().map(|s| s.product).collect(),
            "Inventory updated",
        )),
        Section::CustomerService => ContentView::Support(support("Bulk Discounts")),
        Section::Suppliers => return None,
    };
    Some(view)
}

pub(super) fn home() -> HomeView {
    HomeView {
        role: ROLE,
        greeting: format!("Hello, {}!", ROLE.company_name()),
        search_title: "Find Suppliers",
        search_placeholder: "Search suppliers or products...",
        categories: vec!["Electronics", "Accessories"],
        partners_title: "Recommended Suppliers",
        partners: vec![
            PartnerCard { name: "ABC Electronics", category: "Electronics", detail: "Phones, Laptops" },
            PartnerCard {
                name: "Metro Distribution",
                category: "Electronics",
                detail: "Audio Equipment, Accessories",
            },
            PartnerCard { name: "Sri Traders", category: "Accessories", detail: "Chargers, Cables" },
        ],
        features: vec![
            FeatureCard {
                icon: "box",
                title: "Bulk Inventory",
                description: "Manage large stock volumes across warehouses",
                target: Section::Stocks,
            },
            FeatureCard {
                icon: "dollar-sign",
                title: "Bulk Discounts",
                description: "Unlock tiered pricing on large orders",
                target: Section::Discounts,
            },
            FeatureCard {
                icon: "package",
                title: "Order Management",
                description: "Track orders from suppliers and retailers",
                target: Section::Orders,
            },
            FeatureCard {
                icon: "truck",
                title: "Logistics Booking",
                description: "Schedule bulk shipments with NexQ Logistics",
                target: Section::Logistics,
            },
        ],
    }
}

fn inventory() -> Vec<InventoryItem> {
    vec![
        item("Smartphone X1", "ABC Electronics", 2400, ItemStatus::Active),
        item("Charger C1", "Sri Traders", 5000, ItemStatus::Active),
        item("Bluetooth Speaker", "Metro Distribution", 600, ItemStatus::Ordered),
    ]
}

fn stocks() -> Vec<StockRow> {
    vec![
        stock("Smartphone X1", "ABC Electronics", 2400, 800, 400),
        stock("Charger C1", "Sri Traders", 5000, 2300, 1200),
        stock("Bluetooth Speaker", "Metro Distribution", 600, 120, 120),
    ]
}
