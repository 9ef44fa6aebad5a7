//! 代理列表页面视图

use ratatui::{
    layout::{Constraint, Rect},
    widgets::Cell,
    Frame,
};
use syka_core::types::Proxy;
use syka_core::utils::datetime;

use super::proxy_status_label;
use crate::i18n::t;
use crate::model::{App, FocusPanel};
use crate::view::components::table::{self, status_cell, Column};
use crate::view::theme::Styles;

/// 渲染代理列表
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().proxies;
    let columns = [
        Column::new(texts.col_address, Constraint::Min(21)),
        Column::new(texts.col_type, Constraint::Length(7)),
        Column::new(texts.col_status, Constraint::Length(12)),
        Column::new(texts.col_speed, Constraint::Length(8)),
        Column::new(texts.col_last_check, Constraint::Length(16)),
    ];

    table::render(
        frame,
        area,
        &app.proxies,
        &columns,
        row,
        app.focus.is_content(),
        app.focus == FocusPanel::Search,
    );
}

fn row(proxy: &Proxy) -> Vec<Cell<'static>> {
    let speed = proxy
        .speed
        .map_or_else(|| Cell::from("-").style(Styles::muted()), |ms| Cell::from(format!("{ms} ms")));

    vec![
        Cell::from(proxy.addr.to_string()),
        Cell::from(proxy.kind.label()),
        status_cell(proxy_status_label(proxy.status), proxy.status.tag()),
        speed,
        Cell::from(proxy.last_check.format(datetime::FORMAT).to_string()),
    ]
}
