use super::common::*;
use crate::dashboards::content::*;
use crate::enums::{Role, Section};

const ROLE: Role = Role::Retailer;

pub(super) fn view(section: Section) -> Option<ContentView> {
    let view = match section {
        Section::Dashboard => ContentView::Home(home()),
        Section::Profile => ContentView::Profile(ProfileView {
            title: "Retailer Profile",
            details: vec![
                field("Store", ROLE.company_name()),
                field("Owner", "Anita Desai"),
                field("Email", "anita@cityelectronics.in"),
                field("Phone", "+91 90000 12345"),
                field("Address", "MG Road, Bengaluru"),
                field("GST Number", "29QRSTU3456V1Z4"),
            ],
            inventory: shelf(),
        }),
        Section::Orders => ContentView::Orders(OrdersView {
            title: "My Orders",
            orders: vec![
                order("ORD-901", "Metro Wholesale Inc.", "Bluetooth Speaker", 40, OrderStatus::Confirmed),
                order("ORD-902", "XYZ Technologies", "Wireless Earbuds", 60, OrderStatus::Pending),
                order("ORD-903", "Global Distribution Inc.", "Smartphone X1", 20, OrderStatus::Delivered),
            ],
        }),
        Section::Products => ContentView::Products(ProductsView {
            title: "Product Lists",
            items: shelf(),
        }),
        Section::Discounts => ContentView::Discounts(DiscountsView {
            title: "Discounts Available",
            counterparty_label: "Supplier",
            tracking_by_default: true,
            discounts: vec![
                discount(5, 20, "Smartphone X1", "ABC Electronics"),
                discount(8, 50, "Wireless Earbuds", "XYZ Technologies"),
                discount(6, 30, "Power Bank 10000mAh", "PowerTech Ltd."),
            ],
            notes: DISCOUNT_NOTES.to_vec(),
        }),
        Section::Sales => ContentView::Sales(SalesView {
            title: "Store Sales",
            units_by_product: vec![
                UnitsSold { product: "Smartphone X1", units: 45 },
                UnitsSold { product: "Wireless Earbuds", units: 130 },
                UnitsSold { product: "Power Bank 10000mAh", units: 90 },
            ],
            revenue: 185_000,
            target: 200_000,
            change_label: "+4% from last month",
            months: vec![
                month("Jan 2025", 210, 150_000),
                month("Feb 2025", 230, 162_000),
                month("Mar 2025", 245, 178_000),
                month("Apr 2025", 265, 185_000),
            ],
        }),
        Section::Messages => ContentView::Messages(MessagesView {
            title: "Messages",
            threads: vec![
                ChatThread {
                    contact: "Metro Wholesale Inc.",
                    messages: vec![
                        msg("You", "Can I get the speakers by Friday?", "11:20 AM"),
                        msg("Metro Wholesale Inc.", "Yes, they ship tomorrow morning.", "11:32 AM"),
                    ],
                },
                ChatThread {
                    contact: "PowerTech Ltd.",
                    messages: vec![msg("PowerTech Ltd.", "New 20000mAh model launching next week.", "Monday")],
                },
            ],
        }),
        Section::Suppliers => ContentView::Counterparties(CounterpartiesView {
            title: "My Suppliers",
            kind: CounterpartyKind::Suppliers,
            rows: vec![
                CounterpartyRow {
                    name: "Metro Wholesale Inc.",
                    contact: "orders@metrowholesale.com",
                    product: "Bluetooth Speaker",
                    quantity: 120,
                    orders: 6,
                    last_order: date(2025, 4, 11),
                },
                CounterpartyRow {
                    name: "XYZ Technologies",
                    contact: "sales@xyztech.com",
                    product: "Wireless Earbuds",
                    quantity: 200,
                    orders: 3,
                    last_order: date(2025, 4, 3),
                },
                CounterpartyRow {
                    name: "Global Distribution Inc.",
                    contact: "rajiv@globaldist.com",
                    product: "Smartphone X1",
                    quantity: 60,
                    orders: 4,
                    last_order: date(2025, 3, 30),
                },
            ],
        }),
        Section::Stocks => ContentView::Stocks(StocksView {
            title: "Store Stock",
            rows: vec![
                stock("Smartphone X1", "Global Distribution Inc.", 60, 15, 5),
                stock("Wireless Earbuds", "XYZ Technologies", 200, 40, 20),
                stock("Power Bank 10000mAh", "PowerTech Ltd.", 150, 25, 10),
            ],
        }),
        Section::Logistics => ContentView::Logistics(logistics(
            shelf().iter().map(|i| i.product).collect(),
            vec![delivery(
                "NEX-40412",
                "Bluetooth Speaker (40 units)",
                "City Electronics Store, Bengaluru",
                DeliveryStatus::OutForDelivery,
                "Today, 2:00 PM",
            )],
        )),
        Section::QrScanner => ContentView::QrTools(qr_tools(
            "QR Inventory",
            shelf().iter().map(|i| i.product).collect(),
            "Inventory updated",
        )),
        Section::CustomerService => ContentView::Support(support("Discounts Available")),
        Section::Buyers => return None,
    };
    Some(view)
}

pub(super) fn home() -> HomeView {
    HomeView {
        role: ROLE,
        greeting: format!("Hello, {}!", ROLE.company_name()),
        search_title: "Find Products",
        search_placeholder: "Search products or suppliers...",
        categories: vec!["Electronics"],
        partners_title: "Recommended Products",
        partners: vec![
            PartnerCard { name: "Smartphone X1", category: "Electronics", detail: "₹450 · ABC Electronics" },
            PartnerCard {
                name: "Wireless Earbuds",
                category: "Electronics",
                detail: "₹199 · XYZ Technologies",
            },
            PartnerCard {
                name: "Power Bank 10000mAh",
                category: "Electronics",
                detail: "₹350 · PowerTech Ltd.",
            },
        ],
        features: vec![
            FeatureCard {
                icon: "shopping-cart",
                title: "Easy Ordering",
                description: "Place orders with wholesalers and distributors",
                target: Section::Orders,
            },
            FeatureCard {
                icon: "dollar-sign",
                title: "Dynamic Discounts",
                description: "Access available discounts from suppliers",
                target: Section::Discounts,
            },
            FeatureCard {
                icon: "qr-code",
                title: "QR Inventory",
                description: "Manage inventory with simple QR scanning",
                target: Section::QrScanner,
            },
            FeatureCard {
                icon: "truck",
                title: "Fast Logistics",
                description: "Get same-day or emergency deliveries",
                target: Section::Logistics,
            },
        ],
    }
}

fn shelf() -> Vec<InventoryItem> {
    vec![
        item("Smartphone X1", "Global Distribution Inc.", 60, ItemStatus::Active),
        item("Wireless Earbuds", "XYZ Technologies", 200, ItemStatus::Active),
        item("Power Bank 10000mAh", "PowerTech Ltd.", 150, ItemStatus::Active),
        item("Bluetooth Speaker", "Metro Wholesale Inc.", 40, ItemStatus::Ordered),
    ]
}
