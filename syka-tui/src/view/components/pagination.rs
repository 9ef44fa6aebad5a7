//! 分页栏

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use syka_core::table::TablePage;

use crate::i18n::t;
use crate::view::theme::{colors, Styles};

/// 渲染页码信息和分页链接
///
/// 只有一页（或没有数据）时不显示链接。
pub fn render<T>(frame: &mut Frame, area: Rect, page: &TablePage<'_, T>) {
    let texts = t();
    let c = colors();

    let [info_area, links_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(area);

    let info = if page.total_pages == 0 {
        format!("0 {}", texts.common.records)
    } else {
        format!(
            "{} {} {} {} · {} {}",
            texts.common.page,
            page.page,
            texts.common.of,
            page.total_pages,
            page.filtered_count,
            texts.common.records
        )
    };
    frame.render_widget(Paragraph::new(Span::styled(info, Styles::muted())), info_area);

    let Some(pagination) = &page.pagination else {
        return;
    };

    let mut spans = vec![Span::styled("‹ ", Styles::muted())];
    for link in &pagination.links {
        if link.active {
            spans.push(Span::styled(
                format!("[{}]", link.number),
                Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(format!(" {} ", link.number), Style::default().fg(c.fg)));
        }
    }
    spans.push(Span::styled(" ›", Styles::muted()));

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(ratatui::layout::Alignment::Right),
        links_area,
    );
}
