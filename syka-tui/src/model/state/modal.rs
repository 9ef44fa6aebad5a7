//! 弹窗状态
//!
//! 弹窗的位置由终端尺寸唯一决定，渲染和鼠标命中测试共用
//! [`modal_area`] / [`confirm_area`]，因此"点在弹窗内"的判断与画面一致。

use ratatui::layout::{Position, Rect};

/// 弹窗 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalId {
    /// 批量添加代理
    AddProxies,
    /// 快捷键帮助
    Help,
}

impl ModalId {
    /// 弹窗尺寸（宽，高）
    fn size(self) -> (u16, u16) {
        match self {
            ModalId::AddProxies => (64, 16),
            ModalId::Help => (60, 24),
        }
    }
}

/// 添加代理表单
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddProxiesForm {
    /// 多行输入，每行一个代理
    pub text: String,
}

impl AddProxiesForm {
    pub fn input(&mut self, ch: char) {
        self.text.push(ch);
    }

    pub fn newline(&mut self) {
        self.text.push('\n');
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// 只有空白字符
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn reset(&mut self) {
        self.text.clear();
    }
}

/// 弹窗状态容器
///
/// 表单内容独立于弹窗的开关保存：取消后再次打开仍保留之前的输入，
/// 只有成功提交才会清空。
#[derive(Debug, Default)]
pub struct ModalState {
    /// None = 无弹窗
    pub active: Option<ModalId>,
    pub add_proxies: AddProxiesForm,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, id: ModalId) {
        self.active = Some(id);
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn is(&self, id: ModalId) -> bool {
        self.active == Some(id)
    }
}

/// 计算居中区域
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x.saturating_add((area.width - width) / 2);
    let y = area.y.saturating_add((area.height - height) / 2);
    Rect::new(x, y, width, height)
}

/// 弹窗在终端中的区域
pub fn modal_area(id: ModalId, viewport: Rect) -> Rect {
    let (width, height) = id.size();
    centered_rect(width, height, viewport)
}

/// 确认对话框在终端中的区域
pub fn confirm_area(viewport: Rect) -> Rect {
    centered_rect(46, 9, viewport)
}

/// 确认对话框中（取消，OK）按钮的区域
pub fn confirm_buttons(area: Rect) -> (Rect, Rect) {
    let row = area.y.saturating_add(area.height.saturating_sub(3));
    let ok = Rect::new(area.right().saturating_sub(10), row, 8, 1);
    let cancel = Rect::new(ok.x.saturating_sub(12), row, 10, 1);
    (cancel, ok)
}

/// 点是否落在区域内
pub fn hit(area: Rect, column: u16, row: u16) -> bool {
    area.contains(Position::new(column, row))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_blank_detection() {
        let mut form = AddProxiesForm::default();
        assert!(form.is_blank());
        form.input(' ');
        form.newline();
        assert!(form.is_blank());
        form.input('a');
        assert!(!form.is_blank());
        form.reset();
        assert_eq!(form.text, "");
    }

    #[test]
    fn modal_area_is_centered_and_bounded() {
        let viewport = Rect::new(0, 0, 100, 40);
        let area = modal_area(ModalId::AddProxies, viewport);
        assert_eq!(area, Rect::new(18, 12, 64, 16));
        assert!(hit(area, 18, 12));
        assert!(!hit(area, 17, 12));
        assert!(!hit(area, 82, 20));

        let tiny = Rect::new(0, 0, 20, 5);
        assert_eq!(modal_area(ModalId::Help, tiny), tiny);
    }

    #[test]
    fn confirm_buttons_sit_inside_the_dialog() {
        let area = confirm_area(Rect::new(0, 0, 100, 40));
        let (cancel, ok) = confirm_buttons(area);
        assert!(area.contains(Position::new(cancel.x, cancel.y)));
        assert!(area.contains(Position::new(ok.right() - 1, ok.y)));
        assert!(cancel.right() < ok.x);
    }

    #[test]
    fn open_close() {
        let mut modal = ModalState::new();
        modal.open(ModalId::Help);
        assert!(modal.is(ModalId::Help));
        modal.close();
        assert!(!modal.is_open());
    }
}
