//! 左侧导航面板组件

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染导航面板
///
/// 激活的区块始终标记 `▶`；焦点在导航栏时，光标所在项高亮。
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let is_focused = app.focus.is_navigation();
    let active = app.section();

    let block = Block::default()
        .title(format!(" {} ", texts.nav.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(is_focused));

    let items: Vec<ListItem> = app
        .navigation
        .items
        .iter()
        .map(|section| {
            let is_active = *section == active;
            let prefix = if is_active { "▶ " } else { "  " };
            let content = format!("{}{} {}", prefix, section.icon(), section.label());

            let style = if is_active {
                Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(c.fg)
            };

            ListItem::new(Line::from(Span::styled(content, style)))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(if is_focused {
        Styles::selected()
    } else {
        Style::default()
    });

    let mut state = ListState::default();
    state.select(Some(app.navigation.selected));

    frame.render_stateful_widget(list, area, &mut state);
}
