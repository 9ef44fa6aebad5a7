//! 通用数据表格组件
//!
//! 把 `TableState<T>` 的当前页绑定到 ratatui 的 `Table`：
//!
//! ```text
//!   / 搜索词
//!   ┌──────┬───────────┬──────┐
//!   │ 表头 │           │      │
//!   │ 行   │           │      │   ← 当前页的行，选中行高亮
//!   └──────┴───────────┴──────┘
//!   Page 2 of 6 · 53 records      ‹ 1 [2] 3 4 5 6 ›
//! ```
//!
//! 没有数据时只显示表头和一行通栏占位文字。

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState as WidgetState},
    Frame,
};
use syka_core::types::{TableRecord, Tag};

use super::pagination;
use crate::i18n::t;
use crate::model::state::{TableControls, TableState};
use crate::view::theme::{colors, Styles};

/// 列定义
pub struct Column {
    pub title: &'static str,
    pub width: Constraint,
}

impl Column {
    pub const fn new(title: &'static str, width: Constraint) -> Self {
        Self { title, width }
    }
}

/// 状态单元格：按标签着色
pub fn status_cell(label: &str, tag: Tag) -> Cell<'static> {
    Cell::from(Span::styled(
        format!("● {label}"),
        Style::default().fg(colors().tag(tag)),
    ))
}

/// 渲染表格
///
/// `searching` 为真时搜索行显示光标。
pub fn render<T, F>(
    frame: &mut Frame,
    area: Rect,
    state: &TableState<T>,
    columns: &[Column],
    row: F,
    focused: bool,
    searching: bool,
) where
    T: TableRecord,
    F: Fn(&T) -> Vec<Cell<'static>>,
{
    let [search_area, table_area, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(2),
        Constraint::Length(1),
    ])
    .areas(area);

    render_search(frame, search_area, state.query(), searching);

    let c = colors();
    let page = state.page();

    let header = Row::new(columns.iter().map(|column| Cell::from(column.title)))
        .style(Style::default().fg(c.muted).add_modifier(Modifier::BOLD))
        .bottom_margin(1);
    let widths: Vec<Constraint> = columns.iter().map(|column| column.width).collect();

    let rows: Vec<Row> = page.rows().iter().map(|record| Row::new(row(record))).collect();

    let highlight = if focused {
        Styles::selected()
    } else {
        Style::default().bg(c.border)
    };
    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(2)
        .row_highlight_style(highlight)
        .highlight_symbol("▶ ");

    let mut widget_state = WidgetState::default();
    if !page.is_empty() {
        widget_state.select(Some(state.selected_row()));
    }
    frame.render_stateful_widget(table, table_area, &mut widget_state);

    if page.is_empty() {
        // 表头占两行（含间距），占位行横跨整个表格
        let placeholder_area = Rect {
            y: table_area.y.saturating_add(2),
            height: table_area.height.saturating_sub(2).min(1),
            ..table_area
        };
        let placeholder = Paragraph::new(t().common.no_data)
            .style(Styles::muted())
            .alignment(Alignment::Center);
        frame.render_widget(placeholder, placeholder_area);
    }

    pagination::render(frame, footer_area, &page);
}

fn render_search(frame: &mut Frame, area: Rect, query: &str, searching: bool) {
    let texts = t();
    let c = colors();

    let line = if searching || !query.is_empty() {
        let cursor = if searching { "▎" } else { "" };
        Line::from(vec![
            Span::styled(
                format!("{}: ", texts.status_bar.search_prompt),
                Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("{query}{cursor}"), Style::default().fg(c.fg)),
        ])
    } else {
        Line::from(Span::styled(format!("/ {}", texts.hints.search), Styles::muted()))
    };

    frame.render_widget(Paragraph::new(line), area);
}
