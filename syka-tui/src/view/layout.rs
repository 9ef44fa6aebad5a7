//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, SectionId, SIDEBAR_WIDTH};

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    let title_area = main_layout[0];
    let content_area = main_layout[1];
    let status_area = main_layout[2];

    render_title_bar(app, frame, title_area);

    // 左右分栏布局
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH), // 左侧导航
            Constraint::Min(1),     // 右侧内容
        ])
        .split(content_area);

    components::navigation::render(app, frame, columns[0]);
    render_section(app, frame, columns[1]);
    components::statusbar::render(app, frame, status_area);

    // 浮层（从下到上）：提示、弹窗、确认对话框
    components::toast::render(app, frame, content_area);
    components::modal::render(app, frame);
    components::confirm::render(app, frame);
}

/// 渲染标题栏：应用名 + 当前位置
fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let location = app.router.location.current();
    let location = if location.is_empty() { "#" } else { location };

    let mut spans = vec![
        Span::raw(format!(" {} ", t().common.app_name)),
        Span::raw("· "),
        Span::raw(location.to_string()),
    ];
    if app.router.location.can_go_back() || app.router.location.can_go_forward() {
        let back = if app.router.location.can_go_back() { "◀" } else { " " };
        let forward = if app.router.location.can_go_forward() { "▶" } else { " " };
        spans.push(Span::raw(format!("  {back}{forward}")));
    }

    let title = Paragraph::new(Line::from(spans)).style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 渲染当前区块
fn render_section(app: &App, frame: &mut Frame, area: Rect) {
    let section = app.section();

    let block = Block::default()
        .title(format!(" {} {} ", section.icon(), section.label()))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_content()));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match section {
        SectionId::Dashboard => pages::dashboard::render(app, frame, inner_area),
        SectionId::Accounts => pages::accounts::render(app, frame, inner_area),
        SectionId::Proxies => pages::proxies::render(app, frame, inner_area),
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::message::{AppMessage, NavigationMessage};
    use crate::test_utils::test_app;
    use crate::update;

    /// 渲染一帧，取内容区块标题所在行（侧边栏右侧部分）
    fn section_title(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        (SIDEBAR_WIDTH..buffer.area.width)
            .map(|x| buffer[(x, 1)].symbol())
            .collect()
    }

    fn go(app: &mut App, fragment: &str) {
        update::update(app, AppMessage::Navigation(NavigationMessage::GoTo(fragment.to_string())));
    }

    #[test]
    fn section_title_follows_the_route() {
        let (mut app, _rx) = test_app();
        assert!(section_title(&app).contains(SectionId::Dashboard.label()));

        go(&mut app, "#proxies");
        let title = section_title(&app);
        assert!(title.contains(SectionId::Proxies.label()), "{title}");
        assert!(!title.contains(SectionId::Dashboard.label()));

        go(&mut app, "#bogus");
        assert!(section_title(&app).contains(SectionId::Proxies.label()));
    }
}
