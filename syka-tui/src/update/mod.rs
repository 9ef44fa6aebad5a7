//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod navigation;         // 导航与位置
//!         mod content;            // 表格与行操作
//!         mod modal;              // 弹窗
//!         mod confirm;            // 确认对话框
//!
//!         pub fn update(app: &mut App , msg: AppMessage) {...}
//!
//!
//!     update() 先分发传入的消息，再依次处理处理过程中排入的后续消息
//!     （app.emit()），直到队列清空。例如导航到新位置时：
//!
//!         Navigation(GoTo("#proxies"))
//!             ↓  修改 Location，emit
//!         Navigation(LocationChanged("#proxies"))
//!             ↓  router.apply()
//!         区块切换完成，本轮 update 结束
//!
//!     这样位置的所有来源（导航栏、位置栏、后退、前进、启动）都只经过
//!     一个处理函数。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 异步结果
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Update 层从不等待。需要等待的操作（确认对话框的结果、数据源调用）
//!     交给 app.effects，结果以普通消息的形式在之后的某一轮主循环中回到这里：
//!
//!         Content(Delete(key))
//!             ↓  app.confirm.request() + effects.await_confirmation()
//!         ……用户作答……
//!         Content(DeleteResolved { key, outcome })
//!             ↓  删除本地记录、提示、effects.delete()
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod confirm;
mod content;
mod modal;
mod navigation;

use std::time::Instant;

use ratatui::layout::Rect;

use crate::message::{AppMessage, ModalMessage};
use crate::model::state::ModalId;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    dispatch(app, msg);
    while let Some(next) = app.follow_ups.pop_front() {
        dispatch(app, next);
    }
}

fn dispatch(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 有浮层时不切换焦点
            if !app.modal.is_open() && !app.confirm.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::Confirm(confirm_msg) => {
            confirm::update(app, confirm_msg);
        }

        AppMessage::Notify { message, severity } => {
            app.notify(message, severity);
        }

        AppMessage::Resize(width, height) => {
            app.viewport = Rect::new(0, 0, width, height);
        }

        AppMessage::ShowHelp => {
            modal::update(app, ModalMessage::Open(ModalId::Help));
        }

        AppMessage::Tick => {
            app.toast.expire(Instant::now());
        }

        AppMessage::Noop => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::state::Severity;
    use crate::model::FocusPanel;
    use crate::test_utils::test_app;

    #[test]
    fn quit_sets_flag() {
        let (mut app, _rx) = test_app();
        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn focus_stays_while_modal_is_open() {
        let (mut app, _rx) = test_app();
        update(&mut app, AppMessage::ShowHelp);
        update(&mut app, AppMessage::ToggleFocus);
        assert_eq!(app.focus, FocusPanel::Navigation);

        update(&mut app, AppMessage::Modal(ModalMessage::Close));
        update(&mut app, AppMessage::ToggleFocus);
        assert_eq!(app.focus, FocusPanel::Content);
    }

    #[test]
    fn notify_message_shows_toast() {
        let (mut app, _rx) = test_app();
        update(
            &mut app,
            AppMessage::Notify {
                message: "Data source error".to_string(),
                severity: Severity::Danger,
            },
        );
        let toast = app.toast.visible().map(|toast| (toast.message.clone(), toast.severity));
        assert_eq!(toast, Some(("Data source error".to_string(), Severity::Danger)));
    }

    #[test]
    fn resize_updates_viewport() {
        let (mut app, _rx) = test_app();
        update(&mut app, AppMessage::Resize(120, 40));
        assert_eq!(app.viewport, Rect::new(0, 0, 120, 40));
    }
}
