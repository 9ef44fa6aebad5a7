//! 确认对话框消息

/// 确认对话框消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmMessage {
    /// OK
    Accept,
    /// 取消
    Decline,
    /// 关闭（Esc、点击背景）
    Dismiss,
    /// 在两个按钮之间切换焦点
    ToggleFocus,
    /// 按下获得焦点的按钮
    Press,
}
