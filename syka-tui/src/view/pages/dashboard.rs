//! 概览页面视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use syka_core::types::Tag;

use super::{account_status_label, proxy_status_label};
use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染概览页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    // 布局：欢迎信息 + 统计信息
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(1)])
        .split(area);

    let welcome = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", texts.dashboard.welcome),
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(format!("  {}", texts.dashboard.subtitle), Styles::muted())),
    ];
    frame.render_widget(Paragraph::new(welcome), layout[0]);

    let stats_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout[1]);

    let accounts: Vec<(&str, Tag, usize)> = app
        .accounts
        .status_counts()
        .into_iter()
        .map(|(status, count)| (account_status_label(status), status.tag(), count))
        .collect();
    render_stats(
        frame,
        stats_layout[0],
        texts.nav.accounts,
        app.accounts.records().len(),
        texts.dashboard.accounts_total,
        &accounts,
    );

    let proxies: Vec<(&str, Tag, usize)> = app
        .proxies
        .status_counts()
        .into_iter()
        .map(|(status, count)| (proxy_status_label(status), status.tag(), count))
        .collect();
    render_stats(
        frame,
        stats_layout[1],
        texts.nav.proxies,
        app.proxies.records().len(),
        texts.dashboard.proxies_total,
        &proxies,
    );
}

/// 一个集合的统计卡片：总数 + 各状态数量
fn render_stats(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    total: usize,
    total_label: &str,
    counts: &[(&str, Tag, usize)],
) {
    let c = colors();
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Styles::border(false));

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("  {total}"),
                Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {total_label}"), Styles::muted()),
        ]),
        Line::from(""),
    ];
    lines.extend(counts.iter().map(|(label, tag, count)| {
        Line::from(vec![
            Span::styled("  ● ", Style::default().fg(c.tag(*tag))),
            Span::styled(format!("{label:<10}"), Style::default().fg(c.fg)),
            Span::styled(count.to_string(), Style::default().add_modifier(Modifier::BOLD)),
        ])
    }));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
