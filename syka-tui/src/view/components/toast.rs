//! 提示消息组件
//!
//! 显示在内容区右下角，宽度随消息的显示宽度变化。

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::state::Severity;
use crate::model::App;
use crate::view::theme::colors;

const MAX_WIDTH: u16 = 48;

/// 渲染提示消息
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let Some(toast) = app.toast.visible() else {
        return;
    };
    let c = colors();
    let accent = c.severity(toast.severity);

    let text = format!("{} {}", icon(toast.severity), toast.message);
    let toast_area = toast_rect(&text, area);
    frame.render_widget(Clear, toast_area);

    let paragraph = Paragraph::new(Line::from(Span::styled(text, Style::default().fg(c.fg))))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent))
                .style(Style::default().bg(c.bg)),
        );
    frame.render_widget(paragraph, toast_area);
}

fn icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "i",
        Severity::Success => "✓",
        Severity::Warning => "!",
        Severity::Danger => "✗",
    }
}

/// 右下角的区域：内容宽度 + 边框，超过最大宽度时换行
fn toast_rect(text: &str, area: Rect) -> Rect {
    let text_width = u16::try_from(text.width()).unwrap_or(u16::MAX);
    let inner_width = text_width.min(MAX_WIDTH - 2).max(1);
    let lines = text_width.div_ceil(inner_width).max(1);

    let width = inner_width.saturating_add(2).min(area.width);
    let height = lines.saturating_add(2).min(area.height);
    Rect::new(
        area.right().saturating_sub(width.saturating_add(1)),
        area.bottom().saturating_sub(height.saturating_add(1)),
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_message_hugs_its_text() {
        let area = Rect::new(0, 0, 100, 30);
        let rect = toast_rect("✓ 3 proxies added.", area);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 3);
        assert_eq!(rect.right(), 99);
        assert_eq!(rect.bottom(), 29);
    }

    #[test]
    fn long_message_wraps() {
        let area = Rect::new(0, 0, 100, 30);
        let message = "x".repeat(100);
        let rect = toast_rect(&message, area);
        assert_eq!(rect.width, MAX_WIDTH);
        assert_eq!(rect.height, 5);
    }

    #[test]
    fn stays_inside_areas_at_the_coordinate_limit() {
        let area = Rect::new(u16::MAX - 30, u16::MAX - 10, 30, 10);
        let rect = toast_rect("✓ 3 proxies added.", area);
        assert!(rect.x >= area.x && rect.right() <= area.right());
        assert!(rect.y >= area.y && rect.bottom() <= area.bottom());

        let tiny = Rect::new(0, 0, 2, 2);
        let rect = toast_rect(&"x".repeat(100), tiny);
        assert!(rect.width <= 2 && rect.height <= 2);
    }
}
