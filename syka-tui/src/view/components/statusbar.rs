//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::state::ModalId;
use crate::model::{App, FocusPanel, SectionId};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();

    // 位置栏打开时，整行用于输入
    if app.focus == FocusPanel::Location {
        let line = Line::from(vec![
            Span::styled(format!(" {}: ", texts.status_bar.location_prompt), Styles::hint_key()),
            Span::raw(format!("{}▎", app.location_input)),
        ]);
        frame.render_widget(Paragraph::new(line).style(Styles::statusbar()), area);
        return;
    }

    let hints = get_hints(app);

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let h = &t().hints;

    if app.confirm.is_open() {
        return vec![("y", t().common.ok), ("n", t().common.cancel), ("Tab", h.select)];
    }
    match app.modal.active {
        Some(ModalId::AddProxies) => return vec![("Ctrl+S", h.apply), ("Esc", h.cancel)],
        Some(ModalId::Help) => return vec![("Esc", h.cancel)],
        None => {}
    }
    if app.focus == FocusPanel::Search {
        return vec![("Enter", h.apply), ("Esc", h.cancel)];
    }

    let mut hints = vec![("Tab", h.switch_panel)];

    if app.focus.is_navigation() {
        hints.push(("↑↓", h.navigate));
        hints.push(("Enter", h.open));
    } else {
        match app.section() {
            SectionId::Dashboard => {}
            SectionId::Accounts => {
                hints.push(("↑↓", h.select));
                hints.push(("[ ]", h.page));
                hints.push(("/", h.search));
                hints.push(("Alt+e", h.edit));
                hints.push(("Alt+d", h.delete));
            }
            SectionId::Proxies => {
                hints.push(("↑↓", h.select));
                hints.push(("[ ]", h.page));
                hints.push(("/", h.search));
                hints.push(("Alt+a", h.add));
                hints.push(("t", h.test));
                hints.push(("Alt+d", h.delete));
            }
        }
    }

    hints.push((":", h.go_to));
    hints.push(("Alt+←→", h.history));
    hints.push(("?", h.help));
    hints.push(("q", h.quit));

    hints
}
