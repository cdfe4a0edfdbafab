//! Modal overlays: alert, help, and the unsaved-changes quit confirm.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::state::{AppState, Modal};
use crate::theme::theme;
use crate::util::hex_to_color;

/// Centered rect of at most `w`×`h` within `area`.
fn centered(area: Rect, w: u16, h: u16) -> Rect {
    let w = w.min(area.width.saturating_sub(2));
    let h = h.min(area.height.saturating_sub(2));
    Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    }
}

/// Draw the active modal, if any, over the frame.
pub fn render(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();
    match &app.modal {
        Modal::None => {}
        Modal::Alert { title, message } => {
            let rect = centered(area, 70, 7);
            f.render_widget(Clear, rect);
            let lines = vec![
                Line::from(Span::styled(message.clone(), Style::default().fg(th.text))),
                Line::from(""),
                Line::from(Span::styled(
                    "Press Enter or Esc to close",
                    Style::default().fg(th.subtext0),
                )),
            ];
            let boxw = Paragraph::new(lines)
                .style(Style::default().fg(th.text).bg(th.mantle))
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .title(Span::styled(
                            format!(" {title} "),
                            Style::default().fg(th.red).add_modifier(Modifier::BOLD),
                        ))
                        .borders(Borders::ALL)
                        .border_type(BorderType::Double)
                        .border_style(Style::default().fg(th.red))
                        .style(Style::default().bg(th.mantle)),
                );
            f.render_widget(boxw, rect);
        }
        Modal::Picker {
            title,
            choices,
            selected,
            ..
        } => {
            let rect = centered(area, 44, 20);
            f.render_widget(Clear, rect);
            // Window the list around the cursor; choices can exceed the box.
            let visible = usize::from(rect.height.saturating_sub(2));
            let top = selected
                .saturating_sub(visible / 2)
                .min(choices.len().saturating_sub(visible));
            let lines: Vec<Line> = choices
                .iter()
                .enumerate()
                .skip(top)
                .take(visible)
                .map(|(i, (label, value))| {
                    let swatch = hex_to_color(value).map_or_else(
                        || Span::raw("  "),
                        |c| Span::styled("■ ", Style::default().fg(c)),
                    );
                    let style = if i == *selected {
                        Style::default()
                            .fg(th.crust)
                            .bg(th.mauve)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(th.text)
                    };
                    Line::from(vec![swatch, Span::styled(label.clone(), style)])
                })
                .collect();
            let boxw = Paragraph::new(lines)
                .style(Style::default().fg(th.text).bg(th.mantle))
                .block(
                    Block::default()
                        .title(Span::styled(
                            format!(" {title} "),
                            Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
                        ))
                        .borders(Borders::ALL)
                        .border_type(BorderType::Double)
                        .border_style(Style::default().fg(th.sapphire))
                        .style(Style::default().bg(th.mantle)),
                );
            f.render_widget(boxw, rect);
        }
        Modal::ConfirmQuit => {
            let rect = centered(area, 50, 7);
            f.render_widget(Clear, rect);
            let lines = vec![
                Line::from(Span::styled(
                    "You have unsaved changes.",
                    Style::default().fg(th.yellow).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "q / Enter discard and quit   Esc keep editing",
                    Style::default().fg(th.subtext0),
                )),
            ];
            let boxw = Paragraph::new(lines)
                .style(Style::default().fg(th.text).bg(th.mantle))
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .title(Span::styled(
                            " Quit? ",
                            Style::default().fg(th.yellow).add_modifier(Modifier::BOLD),
                        ))
                        .borders(Borders::ALL)
                        .border_type(BorderType::Double)
                        .border_style(Style::default().fg(th.yellow))
                        .style(Style::default().bg(th.mantle)),
                );
            f.render_widget(boxw, rect);
        }
        Modal::Help => {
            let rect = centered(area, 62, 18);
            f.render_widget(Clear, rect);
            let key = |k: &str, desc: &str| {
                Line::from(vec![
                    Span::styled(
                        format!("  {k:<14}"),
                        Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(desc.to_string(), Style::default().fg(th.text)),
                ])
            };
            let section = |t: &str| {
                Line::from(Span::styled(
                    t.to_string(),
                    Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
                ))
            };
            let lines = vec![
                section("Global"),
                key("Tab / S-Tab", "switch tab"),
                key("Ctrl+S", "save and reload ghostty"),
                key("?", "this overlay"),
                key("q", "quit (asks when unsaved)"),
                Line::from(""),
                section("Options"),
                key("↑/↓ j/k", "move"),
                key("Enter", "edit value (Enter apply, Esc cancel)"),
                key("Space", "toggle bool / cycle enum / pick color or font"),
                key("Ctrl+D", "reset to default"),
                Line::from(""),
                section("Themes"),
                key("↑/↓", "move and live-preview"),
                key("Enter / Esc", "keep / revert preview"),
                key("/", "search"),
                key("d l a", "dark / light / all"),
            ];
            let boxw = Paragraph::new(lines)
                .style(Style::default().fg(th.text).bg(th.mantle))
                .block(
                    Block::default()
                        .title(Span::styled(
                            " Keys ",
                            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
                        ))
                        .borders(Borders::ALL)
                        .border_type(BorderType::Double)
                        .border_style(Style::default().fg(th.mauve))
                        .style(Style::default().bg(th.mantle)),
                );
            f.render_widget(boxw, rect);
        }
    }
}
