use super::common::*;
use crate::dashboards::content::*;
use crate::enums::{Role, Section};

const ROLE: Role = Role::Distributor;

pub(super) fn view(section: Section) -> Option<ContentView> {
    let view = match section {
        Section::Dashboard => ContentView::Home(home()),
        Section::Profile => ContentView::Profile(profile()),
        Section::Orders => ContentView::Orders(OrdersView {
            title: "Orders Management",
            orders: vec![
                order("ORD-456", "ABC Electronics", "Smartphone X1", 200, OrderStatus::Confirmed),
                order("ORD-457", "Kumar Stores", "Smartphone X1", 50, OrderStatus::Dispatched),
                order("ORD-458", "XYZ Technologies", "Tablet T5", 100, OrderStatus::Pending),
                order("ORD-459", "City Electronics", "Smartphone X1", 75, OrderStatus::Delivered),
            ],
        }),
        Section::Products => ContentView::Products(ProductsView {
            title: "Product Lists",
            items: inventory(),
        }),
        Section::Discounts => ContentView::Discounts(DiscountsView {
            title: "Discount Tracker",
            counterparty_label: "Supplier",
            tracking_by_default: true,
            discounts: vec![
                discount(10, 200, "Smartphone X1", "ABC Electronics"),
                discount(15, 500, "Smartphone X1", "ABC Electronics"),
                discount(7, 100, "Tablet T5", "XYZ Technologies"),
                discount(12, 300, "Tablet T5", "XYZ Technologies"),
            ],
            notes: DISCOUNT_NOTES.to_vec(),
        }),
        Section::Sales => ContentView::Sales(SalesView {
            title: "Sales Analytics",
            units_by_product: vec![
                UnitsSold { product: "Smartphone X1", units: 500 },
                UnitsSold { product: "Tablet T5", units: 300 },
                UnitsSold { product: "Smartwatch W2", units: 150 },
            ],
            revenue: 500_000,
            target: 600_000,
            change_label: "+12% from last month",
            months: vec![
                month("Jan 2025", 300, 300_000),
                month("Feb 2025", 450, 450_000),
                month("Mar 2025", 400, 420_000),
                month("Apr 2025", 500, 500_000),
            ],
        }),
        Section::Messages => ContentView::Messages(MessagesView {
            title: "Messages",
            threads: vec![
                ChatThread {
                    contact: "ABC Electronics",
                    messages: vec![
                        msg("ABC Electronics", "We have new smartphones available. Interested?", "10:30 AM"),
                        msg("You", "Yes, what's the current stock and price?", "10:45 AM"),
                        msg("ABC Electronics", "5000 units at ₹8000 each with 10% off on 200+ units", "11:00 AM"),
                    ],
                },
                ChatThread {
                    contact: "Kumar Stores",
                    messages: vec![
                        msg("Kumar Stores", "Do you have smartphone X1 in stock?", "Yesterday"),
                        msg("You", "Yes, we have 750 units available", "Yesterday"),
                        msg("Kumar Stores", "Great! I need 50 units.", "Today"),
                    ],
                },
            ],
        }),
        Section::Buyers => ContentView::Counterparties(CounterpartiesView {
            title: "Retail Buyers",
            kind: CounterpartyKind::Buyers,
            rows: vec![
                CounterpartyRow {
                    name: "Kumar Stores",
                    contact: "anil@kumar.com",
                    product: "Smartphone X1",
                    quantity: 200,
                    orders: 5,
                    last_order: date(2025, 4, 10),
                },
                CounterpartyRow {
                    name: "City Electronics",
                    contact: "city@email.com",
                    product: "Smartphone X1",
                    quantity: 150,
                    orders: 3,
                    last_order: date(2025, 4, 8),
                },
                CounterpartyRow {
                    name: "Digital World",
                    contact: "digital@world.com",
                    product: "Tablet T5",
                    quantity: 100,
                    orders: 4,
                    last_order: date(2025, 4, 5),
                },
            ],
        }),
        Section::Stocks => ContentView::Stocks(StocksView {
            title: "Stocks Management",
            rows: stocks(),
        }),
        Section::Logistics => ContentView::Logistics(logistics(
            stocks().iter().map(|s| s.product).collect(),
            vec![
                delivery(
                    "NEX-12345",
                    "Smartphone X1 (50 units)",
                    "Kumar Stores, Delhi",
                    DeliveryStatus::InTransit,
                    "Today, 6:00 PM",
                ),
                delivery(
                    "NEX-12346",
                    "Tablet T5 (25 units)",
                    "City Electronics, Mumbai",
                    DeliveryStatus::OutForDelivery,
                    "Today, 3:30 PM",
                ),
            ],
        )),
        Section::QrScanner => ContentView::QrTools(qr_tools(
            "Update Inventory with QR",
            stocks().iter().map(|s| s.product).collect(),
            "Inventory updated",
        )),
        Section::CustomerService => ContentView::Support(support("Discount Tracker")),
        Section::Suppliers => return None,
    };
    Some(view)
}

pub(super) fn home() -> HomeView {
    HomeView {
        role: ROLE,
        greeting: format!("Hello, {}!", ROLE.company_name()),
        search_title: "Find Manufacturers & Products",
        search_placeholder: "Search manufacturers or products...",
        categories: vec!["Electronics", "Home Appliances"],
        partners_title: "Recommended Manufacturers",
        partners: vec![
            PartnerCard { name: "ABC Electronics", category: "Electronics", detail: "Phones, Laptops" },
            PartnerCard { name: "XYZ Technologies", category: "Electronics", detail: "Tablets, Smartwatches" },
            PartnerCard {
                name: "Smart Appliances Ltd.",
                category: "Home Appliances",
                detail: "Refrigerators, Washing Machines",
            },
        ],
        features: vec![
            FeatureCard {
                icon: "box",
                title: "Real-Time Inventory",
                description: "Track stock instantly across your warehouses",
                target: Section::Stocks,
            },
            FeatureCard {
                icon: "dollar-sign",
                title: "Dynamic Discounts",
                description: "Access volume-based discounts from manufacturers",
                target: Section::Discounts,
            },
            FeatureCard {
                icon: "package",
                title: "Order Placement",
                description: "Place and track orders with manufacturers",
                target: Section::Orders,
            },
            FeatureCard {
                icon: "truck",
                title: "Logistics Booking",
                description: "Book efficient deliveries for your inventory",
                target: Section::Logistics,
            },
        ],
    }
}

fn profile() -> ProfileView {
    ProfileView {
        title: "Distributor Profile",
        details: vec![
            field("Company", ROLE.company_name()),
            field("Contact Person", "Rajiv Kumar"),
            field("Email", "rajiv@globaldist.com"),
            field("Phone", "+91 98765 43210"),
            field("Region", "North India"),
            field("GST Number", "29ABCDE1234F1Z5"),
            field("PAN Number", "ABCDE1234F"),
            field("License Number", "DIST-12345"),
            field("Categories", "Electronics, Home Appliances"),
            field("Stock Capacity", "10,000 units"),
        ],
        inventory: inventory(),
    }
}

fn inventory() -> Vec<InventoryItem> {
    vec![
        item("Smartphone X1", "ABC Electronics", 1000, ItemStatus::Active),
        item("Tablet T5", "XYZ Technologies", 500, ItemStatus::Active),
        item("Smartwatch W2", "ABC Electronics", 300, ItemStatus::Ordered),
        item("Bluetooth Speaker", "Sound Co.", 250, ItemStatus::Active),
    ]
}

fn stocks() -> Vec<StockRow> {
    vec![
        stock("Smartphone X1", "ABC Electronics", 1000, 250, 150),
        stock("Tablet T5", "XYZ Technologies", 500, 100, 50),
        stock("Smartwatch W2", "ABC Electronics", 300, 50, 30),
    ]
}
