pub mod card_animated;
pub mod page_header;
pub mod stat_card;
pub mod ui;

pub use card_animated::{CardAnimated, FeatureCard};
pub use page_header::PageHeader;
pub use stat_card::StatCard;
