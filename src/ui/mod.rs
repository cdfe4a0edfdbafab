//! Rendering. The frame is a tab bar, the active tab's body, and a status
//! line, with modal overlays drawn last.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Tabs},
};

use crate::state::{AppState, StatusLevel, Tab};
use crate::theme::theme;

mod modals;
mod options;
mod themes;

/// Draw one frame.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();

    let bg = Block::default().style(Style::default().bg(th.base));
    f.render_widget(bg, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    // Tab bar
    let titles: Vec<Line> = (0..Tab::count())
        .map(|i| {
            let tab = Tab::from_index(i);
            let dirty = tab
                .category()
                .is_some_and(|c| category_has_dirty(app, c));
            let label = if dirty {
                format!(" {}* ", tab.title())
            } else {
                format!(" {} ", tab.title())
            };
            Line::from(Span::raw(label))
        })
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .style(Style::default().fg(th.subtext0).bg(th.mantle))
        .highlight_style(
            Style::default()
                .fg(th.mauve)
                .add_modifier(Modifier::BOLD),
        )
        .divider("│");
    f.render_widget(tabs, chunks[0]);

    match app.tab {
        Tab::Themes => themes::render(f, app, chunks[1]),
        Tab::Category(_) => options::render(f, app, chunks[1]),
    }

    // Status line: message if present, key hints otherwise.
    let status = if let Some((msg, level)) = &app.status {
        let color = match level {
            StatusLevel::Info => th.green,
            StatusLevel::Warning => th.yellow,
            StatusLevel::Error => th.red,
        };
        Line::from(Span::styled(
            msg.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            " Tab switch  ↑/↓ move  Enter edit  Space toggle  Ctrl+S save  ? help  q quit",
            Style::default().fg(th.overlay1),
        ))
    };
    f.render_widget(
        Paragraph::new(status).style(Style::default().bg(th.mantle)),
        chunks[2],
    );

    modals::render(f, app, area);
}

/// Whether any option in a category has unsaved changes (drives the `*` on
/// the tab label).
fn category_has_dirty(app: &AppState, category: &str) -> bool {
    app.store.dirty_names().iter().any(|name| {
        app.schema
            .lookup(name)
            .is_some_and(|d| d.category == category)
    })
}
