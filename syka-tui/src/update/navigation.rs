//! 导航更新逻辑
//!
//! 位置的每一次变化都以 `LocationChanged` 结束，由 `on_location_changed` 统一处理。

use crate::message::{AppMessage, NavigationMessage};
use crate::model::{App, FocusPanel, RouteChange};

/// 处理导航消息
pub fn update(app: &mut App, msg: NavigationMessage) {
    match msg {
        NavigationMessage::SelectPrevious => {
            app.navigation.select_previous();
        }

        NavigationMessage::SelectNext => {
            app.navigation.select_next();
        }

        NavigationMessage::SelectFirst => {
            app.navigation.select_first();
        }

        NavigationMessage::SelectLast => {
            app.navigation.select_last();
        }

        NavigationMessage::Confirm => {
            if let Some(section) = app.navigation.current_id() {
                go_to(app, section.fragment());
            }
        }

        NavigationMessage::GoTo(fragment) => {
            go_to(app, fragment);
        }

        NavigationMessage::Back => {
            if let Some(fragment) = app.router.location.back().map(str::to_string) {
                emit_changed(app, fragment);
            }
        }

        NavigationMessage::Forward => {
            if let Some(fragment) = app.router.location.forward().map(str::to_string) {
                emit_changed(app, fragment);
            }
        }

        NavigationMessage::LocationChanged(fragment) => {
            on_location_changed(app, &fragment);
        }

        // ========== 位置栏 ==========
        NavigationMessage::OpenLocationBar => {
            app.location_input = app.router.location.current().to_string();
            app.focus = FocusPanel::Location;
        }

        NavigationMessage::LocationInput(ch) => {
            app.location_input.push(ch);
        }

        NavigationMessage::LocationBackspace => {
            app.location_input.pop();
        }

        NavigationMessage::LocationSubmit => {
            let input = std::mem::take(&mut app.location_input);
            let input = input.trim();
            let fragment = if input.is_empty() || input.starts_with('#') {
                input.to_string()
            } else {
                format!("#{input}")
            };
            // 跳转在本轮稍后才生效，焦点按目标区块决定
            let target = app.router.resolve(&fragment).unwrap_or_else(|| app.section());
            go_to(app, fragment);
            app.focus = if target.has_table() {
                FocusPanel::Content
            } else {
                FocusPanel::Navigation
            };
        }

        NavigationMessage::CloseLocationBar => {
            app.location_input.clear();
            app.focus = FocusPanel::Navigation;
        }
    }
}

/// 跳转到片段
///
/// 与当前位置相同时不产生历史，也不触发变化。
fn go_to(app: &mut App, fragment: String) {
    if app.router.location.push(fragment.clone()) {
        emit_changed(app, fragment);
    }
}

fn emit_changed(app: &mut App, fragment: String) {
    app.emit(AppMessage::Navigation(NavigationMessage::LocationChanged(fragment)));
}

/// 位置变化的唯一处理函数
fn on_location_changed(app: &mut App, fragment: &str) {
    match app.router.apply(fragment) {
        RouteChange::Activated(section) => {
            log::debug!("location {fragment:?} -> #{}", section.id());
            app.navigation.highlight(section);
            app.clear_status();
            if !section.has_table() && app.focus.is_content() {
                app.focus = FocusPanel::Navigation;
            }
        }
        RouteChange::Ignored => {}
    }
}
