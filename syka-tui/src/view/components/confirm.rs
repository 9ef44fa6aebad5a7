//! 确认对话框组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::state::{confirm_area, confirm_buttons, ConfirmButton};
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染队首的确认请求
pub fn render(app: &App, frame: &mut Frame) {
    let Some(request) = app.confirm.current() else {
        return;
    };
    let texts = t();
    let c = colors();

    let area = confirm_area(frame.area());
    frame.render_widget(Clear, area);

    let mut block = Block::default()
        .title(format!(" {} ", request.title))
        .title_alignment(Alignment::Center)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.error))
        .style(Style::default().bg(c.bg));

    // 还有排队的请求时在底边显示数量
    let queued = app.confirm.pending().saturating_sub(1);
    if queued > 0 {
        block = block.title_bottom(Line::styled(format!(" +{queued} "), Styles::muted()).right_aligned());
    }

    let body_area = Rect {
        x: area.x.saturating_add(2),
        y: area.y.saturating_add(2),
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(5),
    };
    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new(request.body.as_str())
            .style(Style::default().fg(c.fg))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        body_area,
    );

    let (cancel_area, ok_area) = confirm_buttons(area);
    let button = |label: &str, focused: bool, accent| {
        let style = if focused {
            Style::default().fg(c.selected_fg).bg(accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(accent)
        };
        Paragraph::new(format!("[ {label} ]"))
            .style(style)
            .alignment(Alignment::Center)
    };

    frame.render_widget(
        button(texts.common.cancel, app.confirm.focus == ConfirmButton::Cancel, c.fg),
        cancel_area,
    );
    frame.render_widget(
        button(texts.common.ok, app.confirm.focus == ConfirmButton::Ok, c.error),
        ok_area,
    );

    let hint_area = Rect {
        y: area.bottom().saturating_sub(2),
        height: 1,
        ..body_area
    };
    frame.render_widget(
        Paragraph::new(texts.modal.confirm_hint)
            .style(Styles::muted())
            .alignment(Alignment::Center),
        hint_area,
    );
}
