//! Option rows for a category tab: name, value, dirty marker, swatches,
//! inline edit buffer, and a docs pane for the selected option.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::schema::{OptionDef, ValueType};
use crate::state::AppState;
use crate::theme::theme;
use crate::util::hex_to_color;

/// Render the active category tab into `area`.
pub fn render(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(9)])
        .split(area);

    let options = app.visible_options();
    let name_width = options
        .iter()
        .map(|d| d.name.width())
        .max()
        .unwrap_or(0);
    let selected = app.option_state.selected();

    let items: Vec<ListItem> = options
        .iter()
        .enumerate()
        .map(|(i, def)| {
            let editing_here = selected == Some(i) && app.editing.is_some();
            ListItem::new(row_line(app, def, name_width, editing_here))
        })
        .collect();

    let category = app.tab.category().unwrap_or("");
    let title = format!("{category} ({})", options.len());
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
    f.render_stateful_widget(list, chunks[0], &mut app.option_state);

    render_docs(f, app, chunks[1]);
}

/// One option row. While the row is being edited the value column shows the
/// edit buffer and a cursor; otherwise the stored value plus its state.
fn row_line(app: &AppState, def: &'static OptionDef, name_width: usize, editing: bool) -> Line<'static> {
    let th = theme();
    let state = app.store.get(def.name).ok();
    let dirty = app.store.is_dirty(def.name);

    let mut segs: Vec<Span> = vec![
        Span::styled(
            if dirty { "*" } else { " " }.to_string(),
            Style::default().fg(th.yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{:<name_width$}  ", def.name),
            Style::default().fg(th.text),
        ),
    ];

    if editing {
        let buf = app.editing.clone().unwrap_or_default();
        segs.push(Span::styled(
            buf,
            Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
        ));
        segs.push(Span::styled("▏", Style::default().fg(th.sapphire)));
        if let Some(reason) = &app.edit_error {
            segs.push(Span::raw("  "));
            segs.push(Span::styled(reason.clone(), Style::default().fg(th.red)));
        }
        return Line::from(segs);
    }

    let raw = state.map(|s| s.raw.clone()).unwrap_or_default();
    if def.value_type == ValueType::Color
        && let Some(color) = hex_to_color(&raw)
    {
        segs.push(Span::styled("■ ".to_string(), Style::default().fg(color)));
    }
    let value_style = if raw.is_empty() {
        Style::default().fg(th.overlay2)
    } else {
        Style::default().fg(th.subtext0)
    };
    let shown = if raw.is_empty() {
        "(unset)".to_string()
    } else {
        raw
    };
    segs.push(Span::styled(shown, value_style));

    if let Some(s) = state
        && let Err(reason) = &s.typed
        && !s.raw.is_empty()
    {
        segs.push(Span::raw("  "));
        segs.push(Span::styled(
            format!("✗ {reason}"),
            Style::default().fg(th.red),
        ));
    }
    Line::from(segs)
}

/// Docs pane: type/default/constraints header plus the Ghostty documentation
/// for the selected option.
fn render_docs(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    let mut lines: Vec<Line> = Vec::new();
    if let Some(def) = app.selected_option() {
        let mut meta = vec![
            Span::styled(
                format!("{:?}", def.value_type).to_lowercase(),
                Style::default().fg(th.sapphire),
            ),
            Span::styled(
                format!("  default: {}", if def.default.is_empty() { "(unset)" } else { def.default }),
                Style::default().fg(th.overlay2),
            ),
        ];
        if let (Some(lo), Some(hi)) = (def.min, def.max) {
            meta.push(Span::styled(
                format!("  range: {lo}..={hi}"),
                Style::default().fg(th.overlay2),
            ));
        }
        if !def.enum_values.is_empty() {
            meta.push(Span::styled(
                format!("  one of: {}", def.enum_values.join(", ")),
                Style::default().fg(th.overlay2),
            ));
        }
        if def.repeatable {
            meta.push(Span::styled("  repeatable", Style::default().fg(th.overlay2)));
        }
        meta.push(Span::styled(
            if def.reloadable {
                "  reloads live"
            } else {
                "  needs restart"
            },
            Style::default().fg(if def.reloadable { th.green } else { th.yellow }),
        ));
        lines.push(Line::from(meta));
        lines.push(Line::from(""));
        if let Some(doc) = app.docs.get(def.name) {
            for l in doc.lines().take(5) {
                lines.push(Line::from(Span::styled(
                    l.to_string(),
                    Style::default().fg(th.subtext0),
                )));
            }
        }
    }
    let title = app
        .selected_option()
        .map_or_else(|| "Docs".to_string(), |d| d.name.to_string());
    let docs = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.base))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(title, Style::default().fg(th.overlay1)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface2)),
        );
    f.render_widget(docs, area);
}
