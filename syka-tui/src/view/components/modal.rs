//! 弹窗组件

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::state::{modal_area, ModalId};
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(id) = app.modal.active else {
        return;
    };

    let area = modal_area(id, frame.area());
    frame.render_widget(Clear, area);

    match id {
        ModalId::AddProxies => render_add_proxies(app, frame, area),
        ModalId::Help => render_help(frame, area),
    }
}

fn modal_block(title: &str) -> Block<'_> {
    let c = colors();
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused))
        .style(Style::default().bg(c.bg))
}

/// 渲染添加代理弹窗
fn render_add_proxies(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().modal.add_proxies;
    let c = colors();

    let block = modal_block(texts.title);
    let inner = block.inner(area).inner(ratatui::layout::Margin::new(1, 0));
    frame.render_widget(block, area);

    let [label_area, input_area, hint_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(texts.label, Style::default().fg(c.fg))).wrap(Wrap { trim: true }),
        label_area,
    );

    let form = &app.modal.add_proxies;
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.highlight));

    let lines: Vec<Line> = if form.text.is_empty() {
        vec![Line::from(vec![
            Span::styled("▎", Style::default().fg(c.highlight)),
            Span::styled(texts.placeholder, Styles::muted()),
        ])]
    } else {
        let mut lines: Vec<Line> = form
            .text
            .split('\n')
            .map(|line| Line::styled(line.to_string(), Style::default().fg(c.fg)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.push_span(Span::styled("▎", Style::default().fg(c.highlight)));
        }
        lines
    };

    // 保持最后一行可见
    let visible = input_area.height.saturating_sub(2);
    let overflow = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_sub(visible);

    frame.render_widget(
        Paragraph::new(lines).block(input_block).scroll((overflow, 0)),
        input_area,
    );

    frame.render_widget(
        Paragraph::new(Span::styled(texts.hint, Styles::muted())).alignment(Alignment::Center),
        hint_area,
    );
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame, area: Rect) {
    let texts = &t().modal.help;
    let c = colors();

    let block = modal_block(texts.title);
    let inner = block.inner(area).inner(ratatui::layout::Margin::new(1, 0));
    frame.render_widget(block, area);

    let section = |title: &'static str| {
        Line::styled(title, Style::default().fg(c.highlight).add_modifier(Modifier::BOLD))
    };
    let entry = |keys: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {keys:<10}"), Styles::hint_key()),
            Span::styled(desc, Style::default().fg(c.fg)),
        ])
    };

    let lines = vec![
        section(texts.global),
        entry("Tab ←→", texts.switch_panel),
        entry("↑↓ / jk", texts.move_selection),
        entry(":", texts.go_to),
        entry("Alt+←→", texts.history),
        entry("?", texts.title),
        entry("q", texts.quit),
        Line::from(""),
        section(texts.table),
        entry("[ ] PgUp", texts.change_page),
        entry("1-9", texts.jump_page),
        entry("/", texts.search),
        entry("Alt+a", texts.add_proxies),
        entry("Alt+e ↵", texts.edit),
        entry("Alt+d Del", texts.delete),
        entry("t", texts.test),
        Line::from(""),
        Line::styled(texts.close_hint, Styles::muted()),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
