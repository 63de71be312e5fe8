//! Simulated asynchronous actions (QR scan, form submit, message send).
//!
//! Таймеры подключаются через `ActionScheduler`: во frontend это gloo-timers,
//! в тестах ручные часы.

pub mod handler;
#[cfg(test)]
mod manual_clock;

pub use handler::{
    ActionCompletion, ActionHandle, ActionKind, ActionScheduler, ActionStatus,
    AsyncActionHandler, SimulatedAction, WidgetId,
};
