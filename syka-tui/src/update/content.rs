//! 内容面板更新逻辑
//!
//! 处理表格的选择、翻页、搜索，以及针对单条记录的操作。
//! 行操作按记录身份（`RecordKey`）定位，不依赖行号。

use syka_core::types::{ProxyAddr, ProxyCheck, ProxyStatus, RecordKey};

use crate::i18n::t;
use crate::message::{AppMessage, ContentMessage, ModalMessage};
use crate::model::state::{ConfirmOutcome, ModalId, Severity, TableControls};
use crate::model::{App, FocusPanel, SectionId};

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        // ========== 行选择 ==========
        ContentMessage::SelectPrevious => with_table(app, |table| table.select_previous()),
        ContentMessage::SelectNext => with_table(app, |table| table.select_next()),
        ContentMessage::SelectFirst => with_table(app, |table| table.select_first()),
        ContentMessage::SelectLast => with_table(app, |table| table.select_last()),

        // ========== 分页 ==========
        ContentMessage::PreviousPage => with_table(app, |table| table.previous_page()),
        ContentMessage::NextPage => with_table(app, |table| table.next_page()),
        ContentMessage::GoToPage(page) => with_table(app, |table| table.jump_to_page(page)),

        // ========== 搜索 ==========
        ContentMessage::OpenSearch => {
            if app.section().has_table() {
                app.focus = FocusPanel::Search;
            }
        }
        ContentMessage::SearchInput(ch) => with_table(app, |table| table.push_filter_char(ch)),
        ContentMessage::SearchBackspace => with_table(app, |table| table.pop_filter_char()),
        ContentMessage::CloseSearch => {
            app.focus = FocusPanel::Content;
        }
        ContentMessage::ClearSearch => {
            with_table(app, |table| table.clear_filter());
            app.focus = FocusPanel::Content;
        }

        // ========== 行操作 ==========
        ContentMessage::Add => {
            if app.section() == SectionId::Proxies {
                app.emit(AppMessage::Modal(ModalMessage::Open(ModalId::AddProxies)));
            }
        }
        ContentMessage::Edit(key) => handle_edit(app, &key),
        ContentMessage::Delete(key) => handle_delete(app, key),
        ContentMessage::TestProxy(addr) => handle_test_proxy(app, addr),

        // ========== 异步结果 ==========
        ContentMessage::DeleteResolved { key, outcome } => handle_delete_resolved(app, key, outcome),
        ContentMessage::ProxyChecked { addr, result } => handle_proxy_checked(app, &addr, result),
    }
}

fn with_table(app: &mut App, f: impl FnOnce(&mut dyn TableControls)) {
    if let Some(table) = app.active_table_mut() {
        f(table);
    }
}

fn contains(app: &App, key: &RecordKey) -> bool {
    match key {
        RecordKey::Account(_) => app.accounts.contains(key),
        RecordKey::Proxy(_) => app.proxies.contains(key),
    }
}

// ========== 编辑 ==========

fn handle_edit(app: &mut App, key: &RecordKey) {
    if !contains(app, key) {
        return;
    }
    log::info!("edit requested for {key}");
    app.set_status(format!("{}: {key}", t().status_bar.editing));
}

// ========== 删除 ==========

fn handle_delete(app: &mut App, key: RecordKey) {
    if !contains(app, &key) {
        return;
    }
    if !app.pending_deletes.insert(key.clone()) {
        log::debug!("delete of {key} already awaiting confirmation");
        app.set_status(t().status_bar.delete_pending);
        return;
    }

    let texts = t();
    let (title, body) = match key {
        RecordKey::Account(_) => (texts.accounts.delete_title, texts.accounts.delete_body),
        RecordKey::Proxy(_) => (texts.proxies.delete_title, texts.proxies.delete_body),
    };
    let reply = app.confirm.request(title, body);
    app.effects.await_confirmation(reply, move |outcome| {
        AppMessage::Content(ContentMessage::DeleteResolved { key, outcome })
    });
}

fn handle_delete_resolved(app: &mut App, key: RecordKey, outcome: ConfirmOutcome) {
    app.pending_deletes.remove(&key);
    if !outcome.is_accepted() {
        log::debug!("delete of {key} not confirmed ({outcome:?})");
        return;
    }

    let removed = match key {
        RecordKey::Account(_) => app.accounts.remove(&key).is_some(),
        RecordKey::Proxy(_) => app.proxies.remove(&key).is_some(),
    };
    if !removed {
        log::debug!("{key} was already gone when its deletion was confirmed");
        return;
    }

    let message = match key {
        RecordKey::Account(_) => t().accounts.deleted,
        RecordKey::Proxy(_) => t().proxies.deleted,
    };
    log::info!("deleted {key}");
    app.notify(message, Severity::Success);
    app.effects.delete(key);
}

// ========== 代理检测 ==========

fn handle_test_proxy(app: &mut App, addr: ProxyAddr) {
    if !app.proxies.mark_checking(&addr) {
        return;
    }
    app.notify(format!("{}: {addr}", t().proxies.test_started), Severity::Info);
    app.effects.test_proxy(addr);
}

fn handle_proxy_checked(app: &mut App, addr: &ProxyAddr, result: Result<ProxyCheck, String>) {
    let check = match result {
        Ok(check) => check,
        Err(e) => {
            app.notify(format!("{}: {e}", t().status_bar.provider_failed), Severity::Danger);
            return;
        }
    };

    // 检测期间记录可能已被删除
    if !app.proxies.apply_check(addr, &check) {
        return;
    }

    let texts = t();
    match (check.status, check.speed) {
        (ProxyStatus::Working, Some(speed)) => app.notify(
            format!("{}: {addr} ({speed} ms)", texts.proxies.test_working),
            Severity::Success,
        ),
        (ProxyStatus::Working, None) => {
            app.notify(format!("{}: {addr}", texts.proxies.test_working), Severity::Success);
        }
        _ => {
            let reason = check.error.as_deref().unwrap_or(texts.status.dead);
            app.notify(format!("{}: {addr} ({reason})", texts.proxies.test_dead), Severity::Danger);
        }
    }
}
