//! 可复用的界面组件

pub mod confirm;
pub mod modal;
pub mod navigation;
pub mod pagination;
pub mod statusbar;
pub mod table;
pub mod toast;
