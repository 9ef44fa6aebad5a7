//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use syka_core::types::RecordKey;

use crate::event::keymap::{typed_char, DefaultKeymap};
use crate::message::{AppMessage, ConfirmMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::state::{confirm_area, confirm_buttons, hit, modal_area, ModalId};
use crate::model::{App, FocusPanel};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Mouse(mouse_event) => handle_mouse_event(mouse_event, app),
        Event::Resize(width, height) => AppMessage::Resize(width, height),
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // Ctrl+C 在任何状态下都退出
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 浮层优先：确认对话框在最上层
    if app.confirm.is_open() {
        return handle_confirm_keys(key);
    }
    if let Some(id) = app.modal.active {
        return handle_modal_keys(key, id);
    }

    match app.focus {
        FocusPanel::Search => return handle_search_keys(key),
        FocusPanel::Location => return handle_location_keys(key),
        FocusPanel::Navigation | FocusPanel::Content => {}
    }

    // 全局快捷键
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) || DefaultKeymap::HELP_ALT.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::LOCATION_BAR.matches(&key) {
        return AppMessage::Navigation(NavigationMessage::OpenLocationBar);
    }
    if DefaultKeymap::LOCATION_BACK.matches(&key) {
        return AppMessage::Navigation(NavigationMessage::Back);
    }
    if DefaultKeymap::LOCATION_FORWARD.matches(&key) {
        return AppMessage::Navigation(NavigationMessage::Forward);
    }
    if DefaultKeymap::FOCUS_TOGGLE.matches(&key)
        || DefaultKeymap::FOCUS_LEFT.matches(&key)
        || DefaultKeymap::FOCUS_RIGHT.matches(&key)
    {
        return AppMessage::ToggleFocus;
    }

    // 根据焦点位置处理按键
    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Navigation(NavigationMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Navigation(NavigationMessage::SelectNext),
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    if !app.section().has_table() {
        return AppMessage::Noop;
    }

    // 行操作作用于选中行
    if DefaultKeymap::ACTION_ADD.matches(&key) {
        return AppMessage::Content(ContentMessage::Add);
    }
    if DefaultKeymap::ACTION_EDIT.matches(&key) || key.code == KeyCode::Enter {
        return app
            .selected_key()
            .map_or(AppMessage::Noop, |key| AppMessage::Content(ContentMessage::Edit(key)));
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) || key.code == KeyCode::Delete {
        return app
            .selected_key()
            .map_or(AppMessage::Noop, |key| AppMessage::Content(ContentMessage::Delete(key)));
    }
    if DefaultKeymap::ACTION_TEST.matches(&key) {
        return match app.selected_key() {
            Some(RecordKey::Proxy(addr)) => AppMessage::Content(ContentMessage::TestProxy(addr)),
            _ => AppMessage::Noop,
        };
    }

    // 搜索与分页
    if DefaultKeymap::SEARCH.matches(&key) {
        return AppMessage::Content(ContentMessage::OpenSearch);
    }
    if DefaultKeymap::PAGE_PREV.matches(&key) {
        return AppMessage::Content(ContentMessage::PreviousPage);
    }
    if DefaultKeymap::PAGE_NEXT.matches(&key) {
        return AppMessage::Content(ContentMessage::NextPage);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        KeyCode::PageUp => AppMessage::Content(ContentMessage::PreviousPage),
        KeyCode::PageDown => AppMessage::Content(ContentMessage::NextPage),
        // 1-9: 对应的分页链接
        KeyCode::Char(ch @ '1'..='9') => ch
            .to_digit(10)
            .map_or(AppMessage::Noop, |page| {
                AppMessage::Content(ContentMessage::GoToPage(page as usize))
            }),
        KeyCode::Esc if !app.active_table().is_some_and(|table| table.query().is_empty()) => {
            AppMessage::Content(ContentMessage::ClearSearch)
        }
        _ => AppMessage::Noop,
    }
}

/// 搜索框输入
fn handle_search_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Esc => AppMessage::Content(ContentMessage::ClearSearch),
        KeyCode::Enter | KeyCode::Down | KeyCode::Tab => AppMessage::Content(ContentMessage::CloseSearch),
        KeyCode::Backspace => AppMessage::Content(ContentMessage::SearchBackspace),
        _ => typed_char(&key).map_or(AppMessage::Noop, |ch| {
            AppMessage::Content(ContentMessage::SearchInput(ch))
        }),
    }
}

/// 位置栏输入
fn handle_location_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Esc => AppMessage::Navigation(NavigationMessage::CloseLocationBar),
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::LocationSubmit),
        KeyCode::Backspace => AppMessage::Navigation(NavigationMessage::LocationBackspace),
        _ => typed_char(&key).map_or(AppMessage::Noop, |ch| {
            AppMessage::Navigation(NavigationMessage::LocationInput(ch))
        }),
    }
}

/// 确认对话框的按键
fn handle_confirm_keys(key: KeyEvent) -> AppMessage {
    let msg = match key.code {
        KeyCode::Char('y' | 'Y') => ConfirmMessage::Accept,
        KeyCode::Char('n' | 'N') => ConfirmMessage::Decline,
        KeyCode::Esc => ConfirmMessage::Dismiss,
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => ConfirmMessage::ToggleFocus,
        KeyCode::Enter => ConfirmMessage::Press,
        _ => return AppMessage::Noop,
    };
    AppMessage::Confirm(msg)
}

/// 弹窗中的按键
fn handle_modal_keys(key: KeyEvent, id: ModalId) -> AppMessage {
    if key.code == KeyCode::Esc {
        return AppMessage::Modal(ModalMessage::Close);
    }

    match id {
        ModalId::AddProxies => {
            if DefaultKeymap::SUBMIT.matches(&key) {
                return AppMessage::Modal(ModalMessage::Submit);
            }
            match key.code {
                KeyCode::Enter => AppMessage::Modal(ModalMessage::Newline),
                KeyCode::Backspace => AppMessage::Modal(ModalMessage::Backspace),
                _ => typed_char(&key).map_or(AppMessage::Noop, |ch| {
                    AppMessage::Modal(ModalMessage::Input(ch))
                }),
            }
        }
        ModalId::Help => match key.code {
            KeyCode::Enter | KeyCode::Char('q' | '?') => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
    }
}

/// 处理鼠标事件
///
/// 只关心左键按下：浮层外的点击关闭浮层，浮层内的点击不会关闭它。
fn handle_mouse_event(mouse: MouseEvent, app: &App) -> AppMessage {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return AppMessage::Noop;
    }
    let (column, row) = (mouse.column, mouse.row);

    if app.confirm.is_open() {
        let area = confirm_area(app.viewport);
        if !hit(area, column, row) {
            return AppMessage::Confirm(ConfirmMessage::Dismiss);
        }
        let (cancel, ok) = confirm_buttons(area);
        if hit(ok, column, row) {
            return AppMessage::Confirm(ConfirmMessage::Accept);
        }
        if hit(cancel, column, row) {
            return AppMessage::Confirm(ConfirmMessage::Decline);
        }
        return AppMessage::Noop;
    }

    if let Some(id) = app.modal.active {
        if !hit(modal_area(id, app.viewport), column, row) {
            return AppMessage::Modal(ModalMessage::BackdropClick);
        }
        return AppMessage::Noop;
    }

    match app.navigation.item_at(app.viewport, column, row) {
        Some(section) => AppMessage::Navigation(NavigationMessage::GoTo(section.fragment())),
        None => AppMessage::Noop,
    }
}
