pub mod async_action;
pub mod config;
pub mod error;
pub mod forms;
pub mod navigation;
pub mod notification;
pub mod onboarding;
pub mod route;
