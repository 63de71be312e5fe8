pub mod role;
pub mod section;

pub use role::Role;
pub use section::Section;
