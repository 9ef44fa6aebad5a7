//! 应用主消息枚举

use super::{ConfirmMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::state::Severity;

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点面板（左右切换）
    ToggleFocus,

    /// 导航相关消息
    Navigation(NavigationMessage),

    /// 内容面板相关消息
    Content(ContentMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 确认对话框消息
    Confirm(ConfirmMessage),

    /// 显示提示消息
    Notify { message: String, severity: Severity },

    /// 终端尺寸变化
    Resize(u16, u16),

    /// 显示帮助
    ShowHelp,

    /// 时间推进（每轮主循环一次）
    Tick,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
