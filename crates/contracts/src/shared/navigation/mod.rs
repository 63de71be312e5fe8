//! Навигация дашборда
//!
//! Содержит:
//! - `menu` - декларативная таблица пунктов меню по ролям
//! - `state` - машина состояний навигации (активный раздел, сайдбар, мобильный оверлей)

pub mod menu;
pub mod state;

pub use menu::{menu_for, MenuItem};
pub use state::{NavigationMachine, NavigationState};
