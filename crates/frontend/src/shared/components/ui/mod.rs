pub mod badge;

pub use badge::{Badge, OrderBadge};
