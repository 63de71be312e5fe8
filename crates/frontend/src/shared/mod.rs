pub mod components;
pub mod icons;
pub mod storage;
pub mod timers;
pub mod toast;
