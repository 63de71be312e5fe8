//! Shared types and pure logic for the NexQ dashboard.
//!
//! Нет I/O: всё, что касается браузера (localStorage, таймеры, тосты),
//! подключается через трейты из `shared` и реализуется во frontend.

pub mod dashboards;
pub mod enums;
pub mod shared;
