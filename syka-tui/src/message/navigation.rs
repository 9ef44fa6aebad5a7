//! 导航相关消息

/// 导航消息
#[derive(Debug, Clone)]
pub enum NavigationMessage {
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 打开选中的区块
    Confirm,

    // ========== 位置 ==========
    /// 跳转到片段（入历史）
    GoTo(String),
    /// 历史后退
    Back,
    /// 历史前进
    Forward,
    /// 位置已变化，路由据此切换区块
    LocationChanged(String),

    // ========== 位置栏 ==========
    OpenLocationBar,
    LocationInput(char),
    LocationBackspace,
    LocationSubmit,
    CloseLocationBar,
}
