//! 页面状态模块
//!
//! 定义表格、弹窗、确认对话框和提示消息的状态数据结构

mod accounts;
mod confirm;
mod modal;
mod proxies;
mod table;
mod toast;

pub use accounts::AccountsState;
pub use confirm::{ConfirmButton, ConfirmOutcome, ConfirmState};
pub use modal::{confirm_area, confirm_buttons, hit, modal_area, ModalId, ModalState};
pub use proxies::ProxiesState;
pub use table::{TableControls, TableState};
pub use toast::{Severity, ToastState};
