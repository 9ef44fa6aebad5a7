//! 账号列表页面视图

use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    widgets::Cell,
    Frame,
};
use syka_core::types::Account;

use super::account_status_label;
use crate::i18n::t;
use crate::model::{App, FocusPanel};
use crate::view::components::table::{self, status_cell, Column};
use crate::view::theme::Styles;

/// 渲染账号列表
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().accounts;
    let columns = [
        Column::new(texts.col_id, Constraint::Length(5)),
        Column::new(texts.col_phone, Constraint::Length(14)),
        Column::new(texts.col_username, Constraint::Min(12)),
        Column::new(texts.col_status, Constraint::Length(12)),
        Column::new(texts.col_last_activity, Constraint::Length(13)),
    ];

    table::render(
        frame,
        area,
        &app.accounts,
        &columns,
        row,
        app.focus.is_content(),
        app.focus == FocusPanel::Search,
    );
}

fn row(account: &Account) -> Vec<Cell<'static>> {
    vec![
        Cell::from(account.id.to_string()).style(Styles::muted()),
        Cell::from(account.phone.clone()),
        Cell::from(account.username.clone()),
        status_cell(account_status_label(account.status), account.status.tag()),
        Cell::from(account.last_activity.format("%Y-%m-%d").to_string()).style(Style::default()),
    ]
}
