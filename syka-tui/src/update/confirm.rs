//! 确认对话框更新逻辑

use crate::message::ConfirmMessage;
use crate::model::state::ConfirmOutcome;
use crate::model::App;

/// 处理确认对话框消息
pub fn update(app: &mut App, msg: ConfirmMessage) {
    let resolved = match msg {
        ConfirmMessage::Accept => app.confirm.resolve(ConfirmOutcome::Accepted),
        ConfirmMessage::Decline => app.confirm.resolve(ConfirmOutcome::Declined),
        ConfirmMessage::Dismiss => app.confirm.resolve(ConfirmOutcome::Dismissed),
        ConfirmMessage::Press => app.confirm.press(),
        ConfirmMessage::ToggleFocus => {
            app.confirm.toggle_focus();
            false
        }
    };

    if resolved {
        log::debug!("confirmation answered with {msg:?}, {} left", app.confirm.pending());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::AppMessage;
    use crate::model::state::ConfirmButton;
    use crate::test_utils::test_app;
    use crate::update;

    #[test]
    fn press_uses_focused_button() {
        let (mut app, _rx) = test_app();
        let mut reply = app.confirm.request("Delete account?", "This action cannot be undone.");

        update::update(&mut app, AppMessage::Confirm(ConfirmMessage::ToggleFocus));
        assert_eq!(app.confirm.focus, ConfirmButton::Ok);
        update::update(&mut app, AppMessage::Confirm(ConfirmMessage::Press));

        assert!(!app.confirm.is_open());
        assert_eq!(reply.try_recv().ok(), Some(ConfirmOutcome::Accepted));
    }

    #[test]
    fn dismiss_hides_dialog_and_answers() {
        let (mut app, _rx) = test_app();
        let reply = app.confirm.request("Delete proxy?", "This action cannot be undone.");

        update::update(&mut app, AppMessage::Confirm(ConfirmMessage::Dismiss));

        assert!(!app.confirm.is_open());
        assert_eq!(tokio_test::block_on(reply).ok(), Some(ConfirmOutcome::Dismissed));
    }

    #[test]
    fn answers_without_dialog_are_ignored() {
        let (mut app, _rx) = test_app();
        update::update(&mut app, AppMessage::Confirm(ConfirmMessage::Accept));
        assert!(!app.confirm.is_open());
    }
}
