//! Keys for the theme browser: navigation with live preview, confirm/revert,
//! variant filters, and search.

use crossterm::event::{KeyCode, KeyEvent};

use crate::preview::VariantFilter;
use crate::state::{AppState, StatusLevel};

use super::move_selection;

/// Handle a key on the Themes tab when the search box is not active.
pub fn handle_key(ke: KeyEvent, app: &mut AppState) {
    let len = app.visible_themes().len();
    match ke.code {
        KeyCode::Up | KeyCode::Char('k') => {
            move_selection(&mut app.theme_state, len, -1);
            preview_selected(app);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            move_selection(&mut app.theme_state, len, 1);
            preview_selected(app);
        }
        KeyCode::PageUp => {
            move_selection(&mut app.theme_state, len, -10);
            preview_selected(app);
        }
        KeyCode::PageDown => {
            move_selection(&mut app.theme_state, len, 10);
            preview_selected(app);
        }
        KeyCode::Enter => {
            if let Some(name) = app.preview.confirm(&mut app.store) {
                app.set_status(
                    format!("theme {name} selected (Ctrl+S to save)"),
                    StatusLevel::Info,
                );
            }
        }
        KeyCode::Esc => {
            if app.preview.is_previewing() {
                let revert = {
                    let AppState {
                        preview,
                        store,
                        schema,
                        gateway,
                        ..
                    } = app;
                    preview.revert(store, schema, gateway.as_ref())
                };
                if revert.is_err() {
                    app.set_status(
                        "reverted, but reload failed (PID not found)",
                        StatusLevel::Warning,
                    );
                }
            } else if !app.theme_query.is_empty() {
                app.theme_query.clear();
                app.theme_state.select(Some(0));
            }
        }
        KeyCode::Char('/') => app.theme_search_active = true,
        KeyCode::Char('d') => set_filter(app, VariantFilter::Dark),
        KeyCode::Char('l') => set_filter(app, VariantFilter::Light),
        KeyCode::Char('a') => set_filter(app, VariantFilter::All),
        _ => {}
    }
}

/// Handle a key while the theme search box is active.
pub fn handle_search_key(ke: KeyEvent, app: &mut AppState) {
    match ke.code {
        KeyCode::Esc | KeyCode::Enter => app.theme_search_active = false,
        KeyCode::Backspace => {
            app.theme_query.pop();
            app.theme_state.select(Some(0));
        }
        KeyCode::Char(c) => {
            app.theme_query.push(c);
            app.theme_state.select(Some(0));
        }
        _ => {}
    }
}

fn set_filter(app: &mut AppState, target: VariantFilter) {
    app.variant_filter = app.variant_filter.toggled(target);
    app.theme_state.select(Some(0));
}

/// Provisionally apply the theme under the cursor.
fn preview_selected(app: &mut AppState) {
    let Some(theme) = app.selected_theme() else {
        return;
    };
    let result = {
        let AppState {
            preview,
            store,
            schema,
            gateway,
            ..
        } = app;
        preview.preview(store, schema, gateway.as_ref(), &theme)
    };
    if result.is_err() {
        app.set_status(
            "previewing in memory only (no ghostty process found)",
            StatusLevel::Warning,
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::events::tests::{press, test_app};
    use crate::ghostty::themes::parse_theme_text;
    use crate::preview::VariantFilter;
    use crossterm::event::KeyCode;

    fn app_with_themes() -> crate::state::AppState {
        let mut app = test_app("theme = nord\nbackground = #2e3440\n");
        app.themes = vec![
            parse_theme_text("catppuccin-mocha", "background = #1e1e2e\n"),
            parse_theme_text("catppuccin-latte", "background = #eff1f5\n"),
            parse_theme_text("zenwritten-dark", "background = #191919\n"),
        ];
        app.themes_loading = false;
        app
    }

    #[test]
    fn themes_navigation_previews_and_esc_reverts() {
        let mut app = app_with_themes();
        press(&mut app, KeyCode::Down);
        assert!(app.preview.is_previewing());
        assert_eq!(app.store.raw_of("background"), Some("#eff1f5"));
        press(&mut app, KeyCode::Esc);
        assert!(!app.preview.is_previewing());
        assert_eq!(app.store.raw_of("background"), Some("#2e3440"));
        assert!(!app.store.any_dirty());
    }

    #[test]
    fn themes_enter_confirms_for_save() {
        let mut app = app_with_themes();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert!(!app.preview.is_previewing());
        assert!(app.store.is_dirty("theme"));
        assert_eq!(app.store.raw_of("theme"), Some("catppuccin-latte"));
    }

    #[test]
    fn themes_filters_toggle_and_narrow() {
        let mut app = app_with_themes();
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.variant_filter, VariantFilter::Dark);
        assert_eq!(app.visible_themes().len(), 2);
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.variant_filter, VariantFilter::All);
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.visible_themes().len(), 1);
    }

    #[test]
    fn themes_search_narrows_and_esc_clears() {
        let mut app = app_with_themes();
        press(&mut app, KeyCode::Char('/'));
        assert!(app.theme_search_active);
        press(&mut app, KeyCode::Char('z'));
        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.visible_themes().len(), 1);
        press(&mut app, KeyCode::Enter);
        assert!(!app.theme_search_active);
        press(&mut app, KeyCode::Esc);
        assert!(app.theme_query.is_empty());
        assert_eq!(app.visible_themes().len(), 3);
    }
}
