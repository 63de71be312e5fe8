pub mod content;
mod fixtures;
pub mod resolver;

pub use content::ContentView;
pub use resolver::{resolve, resolve_checked, resolve_section};
