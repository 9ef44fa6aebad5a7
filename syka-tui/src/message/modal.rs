//! 弹窗消息类型

use crate::model::state::ModalId;

/// 弹窗相关消息
#[derive(Debug, Clone)]
pub enum ModalMessage {
    /// 打开弹窗
    Open(ModalId),

    /// 关闭弹窗（Esc 或关闭按钮）
    Close,

    /// 点击了弹窗外的背景
    BackdropClick,

    /// 输入字符
    Input(char),

    /// 换行
    Newline,

    /// 删除字符（Backspace）
    Backspace,

    /// 提交表单
    Submit,
}
