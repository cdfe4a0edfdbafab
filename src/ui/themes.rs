//! The theme browser: search box, filtered list with palette swatches, and a
//! count footer.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use crate::ghostty::Variant;
use crate::state::AppState;
use crate::theme::theme;
use crate::util::hex_to_color;

/// Render the Themes tab into `area`.
pub fn render(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    // Search box
    let search_active = app.theme_search_active;
    let search_line = Line::from(vec![
        Span::styled(
            "/ ",
            Style::default().fg(if search_active { th.sapphire } else { th.overlay1 }),
        ),
        Span::styled(
            app.theme_query.clone(),
            Style::default().fg(if search_active { th.text } else { th.subtext0 }),
        ),
    ]);
    let search_title = if search_active {
        "Search (esc/enter to leave)"
    } else {
        "Search (/)"
    };
    let search = Paragraph::new(search_line)
        .style(Style::default().bg(th.base))
        .block(
            Block::default()
                .title(Span::styled(
                    search_title,
                    Style::default().fg(if search_active { th.mauve } else { th.overlay1 }),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(if search_active {
                    th.mauve
                } else {
                    th.surface1
                })),
        );
    f.render_widget(search, chunks[0]);

    // Theme list
    let visible = app.visible_themes();
    let current = app.store.raw_of("theme").unwrap_or_default().to_string();
    let items: Vec<ListItem> = visible
        .iter()
        .map(|t| {
            let mut segs: Vec<Span> = Vec::new();
            // Palette strip: up to eight swatches from the theme's own colors.
            for color in t
                .palette
                .iter()
                .take(8)
                .filter_map(|c| hex_to_color(c))
            {
                segs.push(Span::styled("▀", Style::default().fg(color)));
            }
            if !segs.is_empty() {
                segs.push(Span::raw(" "));
            }
            let is_current = t.name == current;
            segs.push(Span::styled(
                t.name.clone(),
                if is_current {
                    Style::default().fg(th.green).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(th.text)
                },
            ));
            segs.push(Span::styled(
                match t.variant {
                    Variant::Dark => "  dark",
                    Variant::Light => "  light",
                },
                Style::default().fg(th.overlay2),
            ));
            if is_current {
                segs.push(Span::styled("  (current)", Style::default().fg(th.green)));
            }
            ListItem::new(Line::from(segs))
        })
        .collect();

    let title = if app.themes_loading {
        "Themes (loading…)".to_string()
    } else if app.preview.is_previewing() {
        "Themes — previewing (Enter keep, Esc revert)".to_string()
    } else {
        "Themes".to_string()
    };
    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(
            Block::default()
                .title(Span::styled(title, Style::default().fg(th.overlay1)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface2)),
        )
        .highlight_style(Style::default().fg(th.crust).bg(th.lavender))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, chunks[1], &mut app.theme_state);

    // Count footer, mirroring the filter state.
    let shown = app.visible_themes().len();
    let footer = format!(
        " {shown} of {} {} themes   d dark  l light  a all",
        app.themes.len(),
        app.variant_filter.label(),
    );
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            footer,
            Style::default().fg(th.overlay1),
        )))
        .style(Style::default().bg(th.base)),
        chunks[2],
    );
}
