//! 弹窗更新逻辑

use chrono::Local;
use syka_core::types::parse_proxy_list;

use crate::i18n::t;
use crate::message::ModalMessage;
use crate::model::state::{ModalId, Severity};
use crate::model::App;

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    match msg {
        ModalMessage::Open(id) => {
            log::debug!("open modal {id:?}");
            app.modal.open(id);
        }

        // 点击弹窗外与 Esc 等价
        ModalMessage::Close | ModalMessage::BackdropClick => {
            app.modal.close();
        }

        ModalMessage::Input(ch) => {
            if app.modal.is(ModalId::AddProxies) {
                app.modal.add_proxies.input(ch);
            }
        }

        ModalMessage::Newline => {
            if app.modal.is(ModalId::AddProxies) {
                app.modal.add_proxies.newline();
            }
        }

        ModalMessage::Backspace => {
            if app.modal.is(ModalId::AddProxies) {
                app.modal.add_proxies.backspace();
            }
        }

        ModalMessage::Submit => {
            if app.modal.is(ModalId::AddProxies) {
                submit_proxies(app);
            }
        }
    }
}

/// 提交添加代理表单
///
/// 空白内容不做任何事，弹窗保持打开。
fn submit_proxies(app: &mut App) {
    if app.modal.add_proxies.is_blank() {
        log::debug!("ignoring blank proxy list");
        return;
    }

    let candidates = parse_proxy_list(&app.modal.add_proxies.text, Local::now().naive_local());
    let submitted = candidates.len();
    let added = app.proxies.add_candidates(candidates);

    app.modal.close();
    app.modal.add_proxies.reset();

    if added.is_empty() {
        app.notify(t().proxies.none_added, Severity::Warning);
        return;
    }

    log::info!("{} of {submitted} submitted proxies added", added.len());
    app.notify(format!("{} {}", added.len(), t().proxies.added), Severity::Success);
    app.effects.create_proxies(added);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::AppMessage;
    use crate::test_utils::test_app;
    use crate::update;

    fn send(app: &mut App, msg: ModalMessage) {
        update::update(app, AppMessage::Modal(msg));
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                send(app, ModalMessage::Newline);
            } else {
                send(app, ModalMessage::Input(ch));
            }
        }
    }

    #[tokio::test]
    async fn three_lines_add_three_proxies() {
        let (mut app, _rx) = test_app();
        let before = app.proxies.records().len();

        send(&mut app, ModalMessage::Open(ModalId::AddProxies));
        type_text(&mut app, "a\nb\nc");
        send(&mut app, ModalMessage::Submit);

        assert_eq!(app.proxies.records().len(), before + 3);
        assert!(!app.modal.is_open());
        assert!(app.modal.add_proxies.text.is_empty());

        let toast = app.toast.visible().map(|toast| (toast.message.clone(), toast.severity));
        let (message, severity) = toast.unwrap_or_default();
        assert!(message.contains('3'));
        assert_eq!(severity, Severity::Success);
    }

    #[test]
    fn blank_submit_is_a_no_op() {
        let (mut app, _rx) = test_app();
        send(&mut app, ModalMessage::Open(ModalId::AddProxies));
        type_text(&mut app, "  \n\n ");
        send(&mut app, ModalMessage::Submit);

        assert!(app.modal.is(ModalId::AddProxies));
        assert_eq!(app.proxies.records().len(), 2);
        assert!(app.toast.visible().is_none());
    }

    #[test]
    fn existing_addresses_are_skipped() {
        let (mut app, _rx) = test_app();
        send(&mut app, ModalMessage::Open(ModalId::AddProxies));
        type_text(&mut app, "http://192.168.1.1:8080");
        send(&mut app, ModalMessage::Submit);

        assert_eq!(app.proxies.records().len(), 2);
        assert_eq!(app.toast.visible().map(|toast| toast.severity), Some(Severity::Warning));
    }

    #[test]
    fn backdrop_click_closes_and_keeps_draft() {
        let (mut app, _rx) = test_app();
        send(&mut app, ModalMessage::Open(ModalId::AddProxies));
        type_text(&mut app, "10.1.1.1:80");
        send(&mut app, ModalMessage::BackdropClick);

        assert!(!app.modal.is_open());
        assert_eq!(app.modal.add_proxies.text, "10.1.1.1:80");
    }

    #[test]
    fn help_modal_ignores_text_input() {
        let (mut app, _rx) = test_app();
        send(&mut app, ModalMessage::Open(ModalId::Help));
        send(&mut app, ModalMessage::Input('x'));
        send(&mut app, ModalMessage::Submit);

        assert!(app.modal.is(ModalId::Help));
        assert!(app.modal.add_proxies.text.is_empty());
    }
}
