use super::common::*;
use crate::dashboards::content::*;
use crate::enums::{Role, Section};

const ROLE: Role = Role::Manufacturer;

pub(super) fn view(section: Section) -> Option<ContentView> {
    let view = match section {
        Section::Dashboard => ContentView::Home(home()),
        Section::Profile => ContentView::Profile(ProfileView {
            title: "Manufacturer Profile",
            details: vec![
                field("Company", ROLE.company_name()),
                field("Company Type", "Private Limited"),
                field("Contact Person", "Priya Sharma"),
                field("Email", "priya@techmfg.com"),
                field("Phone", "+91 98200 11223"),
                field("Location", "Pune, Maharashtra"),
                field("GST Number", "27FGHIJ5678K1Z2"),
                field("License Number", "MFG-67890"),
                field("Production Capacity", "50,000 units / month"),
                field("Minimum Order", "100 units"),
            ],
            inventory: catalogue(),
        }),
        Section::Orders => ContentView::Orders(OrdersView {
            title: "Incoming Orders",
            orders: vec![
                order("ORD-321", "Global Distribution Inc.", "Battery Pack B2", 1000, OrderStatus::Pending),
                order("ORD-322", "Metro Wholesale Inc.", "Power Bank P10", 400, OrderStatus::Confirmed),
                order("ORD-323", "Global Distribution Inc.", "Headphones H3", 250, OrderStatus::Dispatched),
                order("ORD-324", "Prime Distributors", "Battery Pack B2", 600, OrderStatus::Delivered),
            ],
        }),
        Section::Products => ContentView::Products(ProductsView {
            title: "Product Lists",
            items: catalogue(),
        }),
        Section::Discounts => ContentView::Discounts(DiscountsView {
            title: "Discount Impact",
            counterparty_label: "Offered To",
            tracking_by_default: true,
            discounts: vec![
                discount(5, 500, "Battery Pack B2", "All Distributors"),
                discount(8, 1000, "Battery Pack B2", "All Distributors"),
                discount(10, 300, "Power Bank P10", "Metro Wholesale Inc."),
            ],
            notes: vec![
                "Orders at or above the minimum quantity receive the discount automatically.",
                "Discounted volume is counted in the Sales section from the next billing cycle.",
            ],
        }),
        Section::Sales => ContentView::Sales(SalesView {
            title: "Sales Analytics",
            units_by_product: vec![
                UnitsSold { product: "Battery Pack B2", units: 4200 },
                UnitsSold { product: "Power Bank P10", units: 1800 },
                UnitsSold { product: "Headphones H3", units: 950 },
            ],
            revenue: 2_450_000,
            target: 3_000_000,
            change_label: "+8% from last month",
            months: vec![
                month("Jan 2025", 5200, 1_900_000),
                month("Feb 2025", 5900, 2_150_000),
                month("Mar 2025", 6100, 2_270_000),
                month("Apr 2025", 6950, 2_450_000),
            ],
        }),
        Section::Messages => ContentView::Messages(MessagesView {
            title: "Messages",
            threads: vec![
                ChatThread {
                    contact: "Global Distribution Inc.",
                    messages: vec![
                        msg("Global Distribution Inc.", "Can you ship 1000 battery packs next week?", "9:15 AM"),
                        msg("You", "Yes, production slot is reserved for Monday.", "9:40 AM"),
                    ],
                },
                ChatThread {
                    contact: "Metro Wholesale Inc.",
                    messages: vec![
                        msg("Metro Wholesale Inc.", "Is the 10% power bank offer still open?", "Yesterday"),
                        msg("You", "It runs until the end of the month.", "Yesterday"),
                    ],
                },
            ],
        }),
        Section::Buyers => ContentView::Counterparties(CounterpartiesView {
            title: "Distributor Buyers",
            kind: CounterpartyKind::Buyers,
            rows: vec![
                CounterpartyRow {
                    name: "Global Distribution Inc.",
                    contact: "rajiv@globaldist.com",
                    product: "Battery Pack B2",
                    quantity: 3000,
                    orders: 9,
                    last_order: date(2025, 4, 12),
                },
                CounterpartyRow {
                    name: "Metro Wholesale Inc.",
                    contact: "orders@metrowholesale.com",
                    product: "Power Bank P10",
                    quantity: 1200,
                    orders: 6,
                    last_order: date(2025, 4, 9),
                },
                CounterpartyRow {
                    name: "Prime Distributors",
                    contact: "buy@primedist.in",
                    product: "Battery Pack B2",
                    quantity: 600,
                    orders: 2,
                    last_order: date(2025, 3, 28),
                },
            ],
        }),
        Section::Stocks => ContentView::Stocks(StocksView {
            title: "Warehouse Stock",
            rows: stocks(),
        }),
        Section::Logistics => ContentView::Logistics(logistics(
            stocks().iter().map(|s| s.product).collect(),
            vec![delivery(
                "NEX-22001",
                "Headphones H3 (250 units)",
                "Global Distribution Inc., Delhi",
                DeliveryStatus::InTransit,
                "Tomorrow, 11:00 AM",
            )],
        )),
        Section::QrScanner => ContentView::QrTools(qr_tools(
            "Generate & Scan Product Codes",
            stocks().iter().map(|s| s.product).collect(),
            "Data",
        )),
        Section::CustomerService => ContentView::Support(support("Discount Impact")),
        Section::Suppliers => return None,
    };
    Some(view)
}

pub(super) fn home() -> HomeView {
    HomeView {
        role: ROLE,
        greeting: format!("Hello, {}!", ROLE.company_name()),
        search_title: "Find Components & Suppliers",
        search_placeholder: "Search components...",
        categories: vec!["Electronics", "Accessories"],
        partners_title: "Recommended Products",
        partners: vec![
            PartnerCard { name: "Battery by XYZ Ltd.", category: "Electronics", detail: "₹450" },
            PartnerCard { name: "Power Bank by ABC Corp.", category: "Electronics", detail: "₹1200" },
            PartnerCard { name: "Headphones by Sound Inc.", category: "Electronics", detail: "₹800" },
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
                description: "Boost sales with custom volume-based discounts",
                target: Section::Discounts,
            },
            FeatureCard {
                icon: "package",
                title: "Order Management",
                description: "View and process incoming orders efficiently",
                target: Section::Orders,
            },
            FeatureCard {
                icon: "bar-chart",
                title: "Analytics Dashboard",
                description: "Monitor sales, profits and inventory metrics",
                target: Section::Sales,
            },
        ],
    }
}

fn catalogue() -> Vec<InventoryItem> {
    vec![
        item("Battery Pack B2", "In-house", 8000, ItemStatus::Active),
        item("Power Bank P10", "In-house", 2500, ItemStatus::Active),
        item("Headphones H3", "Sound Inc.", 1200, ItemStatus::Ordered),
    ]
}

fn stocks() -> Vec<StockRow> {
    vec![
        stock("Battery Pack B2", "In-house", 8000, 1600, 1000),
        stock("Power Bank P10", "In-house", 2500, 400, 300),
        stock("Headphones H3", "Sound Inc.", 1200, 250, 250),
    ]
}
