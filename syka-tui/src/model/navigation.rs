//! 导航状态定义

use ratatui::layout::Rect;

use super::SectionId;

/// 侧边栏宽度（含边框）
pub const SIDEBAR_WIDTH: u16 = 22;

/// 导航状态
///
/// `selected` 是导航栏中的光标位置；激活的区块由路由决定，
/// 路由切换后光标会同步到激活区块。
pub struct NavigationState {
    /// 导航项列表
    pub items: Vec<SectionId>,
    /// 当前选中的索引
    pub selected: usize,
}

impl NavigationState {
    pub fn new() -> Self {
        Self {
            items: SectionId::ALL.to_vec(),
            selected: 0,
        }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    /// 获取当前选中的区块
    pub fn current_id(&self) -> Option<SectionId> {
        self.items.get(self.selected).copied()
    }

    /// 鼠标位置下的导航项
    ///
    /// 侧边栏在标题栏下方，列表从边框内第一行开始，底部留出边框和状态栏。
    pub fn item_at(&self, viewport: Rect, column: u16, row: u16) -> Option<SectionId> {
        let first_row = viewport.y.saturating_add(2);
        let last_row = viewport.bottom().saturating_sub(3);
        let inside_columns =
            column > viewport.x && column < viewport.x.saturating_add(SIDEBAR_WIDTH - 1);
        if !inside_columns || row < first_row || row > last_row {
            return None;
        }
        self.items.get(usize::from(row - first_row)).copied()
    }

    /// 把光标移动到指定区块
    pub fn highlight(&mut self, section: SectionId) {
        if let Some(index) = self.items.iter().position(|item| *item == section) {
            self.selected = index;
        }
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_at_maps_rows_below_the_border() {
        let nav = NavigationState::new();
        let viewport = Rect::new(0, 0, 100, 40);

        assert_eq!(nav.item_at(viewport, 3, 2), Some(SectionId::Dashboard));
        assert_eq!(nav.item_at(viewport, 3, 4), Some(SectionId::Proxies));
        // 边框、标题栏、列表之后的空行、侧边栏之外
        assert_eq!(nav.item_at(viewport, 0, 2), None);
        assert_eq!(nav.item_at(viewport, 3, 1), None);
        assert_eq!(nav.item_at(viewport, 3, 10), None);
        assert_eq!(nav.item_at(viewport, 40, 3), None);
    }
}
