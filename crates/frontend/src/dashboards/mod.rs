pub mod page;
pub mod qr_scanner;
pub mod sections;
pub mod welcome;
