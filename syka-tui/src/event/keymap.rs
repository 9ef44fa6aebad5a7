//! 快捷键配置
//!
//! 定义可配置的快捷键映射（未来可支持用户自定义）

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    ///
    /// 字符键忽略 Shift：`?`、`:` 在多数键盘布局上需要 Shift。
    pub fn matches(&self, key: &KeyEvent) -> bool {
        let modifiers = if matches!(key.code, KeyCode::Char(_)) {
            key.modifiers & !KeyModifiers::SHIFT
        } else {
            key.modifiers
        };
        modifiers == self.modifiers && key.code == self.code
    }
}

/// 文本输入：不带 Ctrl / Alt 的字符
pub fn typed_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(ch) if (key.modifiers & !KeyModifiers::SHIFT).is_empty() => Some(ch),
        _ => None,
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::Char('?'));
    pub const HELP_ALT: KeyBinding = KeyBinding::alt(KeyCode::Char('h'));

    // 面板切换
    pub const FOCUS_TOGGLE: KeyBinding = KeyBinding::key(KeyCode::Tab);
    pub const FOCUS_LEFT: KeyBinding = KeyBinding::key(KeyCode::Left);
    pub const FOCUS_RIGHT: KeyBinding = KeyBinding::key(KeyCode::Right);

    // 位置
    pub const LOCATION_BAR: KeyBinding = KeyBinding::key(KeyCode::Char(':'));
    pub const LOCATION_BACK: KeyBinding = KeyBinding::alt(KeyCode::Left);
    pub const LOCATION_FORWARD: KeyBinding = KeyBinding::alt(KeyCode::Right);

    // 表格
    pub const SEARCH: KeyBinding = KeyBinding::key(KeyCode::Char('/'));
    pub const PAGE_PREV: KeyBinding = KeyBinding::key(KeyCode::Char('['));
    pub const PAGE_NEXT: KeyBinding = KeyBinding::key(KeyCode::Char(']'));

    // 操作
    pub const ACTION_ADD: KeyBinding = KeyBinding::alt(KeyCode::Char('a'));
    pub const ACTION_EDIT: KeyBinding = KeyBinding::alt(KeyCode::Char('e'));
    pub const ACTION_DELETE: KeyBinding = KeyBinding::alt(KeyCode::Char('d'));
    pub const ACTION_TEST: KeyBinding = KeyBinding::key(KeyCode::Char('t'));

    // 弹窗
    pub const SUBMIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('s'));
}
