//! 焦点状态定义

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 左侧导航面板
    #[default]
    Navigation,
    /// 右侧内容面板
    Content,
    /// 正在编辑表格搜索词
    Search,
    /// 正在编辑位置栏
    Location,
}

impl FocusPanel {
    /// 在导航与内容之间切换；输入状态回到内容面板
    pub fn toggle(self) -> Self {
        match self {
            FocusPanel::Navigation => FocusPanel::Content,
            FocusPanel::Content => FocusPanel::Navigation,
            FocusPanel::Search | FocusPanel::Location => FocusPanel::Content,
        }
    }

    pub fn is_navigation(self) -> bool {
        matches!(self, FocusPanel::Navigation)
    }

    /// 内容面板（包括其中的搜索框）
    pub fn is_content(self) -> bool {
        matches!(self, FocusPanel::Content | FocusPanel::Search)
    }
}
