//! Keys for the option category tabs: navigation, inline editing, toggling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::options::{OptionValue, NAMED_COLORS};
use crate::schema::{OptionDef, ValueType};
use crate::state::{AppState, Modal, StatusLevel};

use super::move_selection;

/// Handle a key on a category tab when no edit is in progress.
pub fn handle_key(ke: KeyEvent, app: &mut AppState) {
    let len = app.visible_options().len();
    match (ke.code, ke.modifiers) {
        (KeyCode::Up | KeyCode::Char('k'), _) => move_selection(&mut app.option_state, len, -1),
        (KeyCode::Down | KeyCode::Char('j'), _) => move_selection(&mut app.option_state, len, 1),
        (KeyCode::PageUp, _) => move_selection(&mut app.option_state, len, -10),
        (KeyCode::PageDown, _) => move_selection(&mut app.option_state, len, 10),
        (KeyCode::Enter, _) => begin_edit(app),
        (KeyCode::Char(' '), _) => toggle_or_cycle(app),
        (KeyCode::Char('d'), m) if m.contains(KeyModifiers::CONTROL) => reset_selected(app),
        _ => {}
    }
}

/// Handle a key while the edit buffer is open.
pub fn handle_edit_key(ke: KeyEvent, app: &mut AppState) {
    match ke.code {
        KeyCode::Esc => {
            app.editing = None;
            app.edit_error = None;
        }
        KeyCode::Enter => commit_edit(app),
        KeyCode::Backspace => {
            if let Some(buf) = app.editing.as_mut() {
                buf.pop();
                app.edit_error = None;
            }
        }
        KeyCode::Char(c) => {
            if let Some(buf) = app.editing.as_mut() {
                buf.push(c);
                app.edit_error = None;
            }
        }
        _ => {}
    }
}

fn begin_edit(app: &mut AppState) {
    let Some(def) = app.selected_option() else {
        return;
    };
    let raw = app.store.raw_of(def.name).unwrap_or_default().to_string();
    app.editing = Some(raw);
    app.edit_error = None;
}

fn commit_edit(app: &mut AppState) {
    let Some(def) = app.selected_option() else {
        app.editing = None;
        return;
    };
    let Some(buf) = app.editing.clone() else {
        return;
    };
    match app.store.set(&app.schema, def.name, &buf) {
        Ok(()) => {
            app.editing = None;
            app.edit_error = None;
        }
        Err(err) => {
            // The store kept the prior value; the buffer stays open so the
            // user can fix the input.
            app.edit_error = Some(err.to_string());
        }
    }
}

/// Space: flip a bool, advance an enum to its next member, or open a picker
/// for colors and font families. Other types are unaffected.
fn toggle_or_cycle(app: &mut AppState) {
    let Some(def) = app.selected_option() else {
        return;
    };
    let next = match def.value_type {
        ValueType::Color => {
            open_color_picker(app, def);
            return;
        }
        ValueType::Str if def.name.starts_with("font-family") => {
            open_font_picker(app, def);
            return;
        }
        ValueType::Bool => {
            let on = matches!(
                app.store.get(def.name).map(|s| &s.typed),
                Ok(Ok(OptionValue::Bool(true)))
            );
            if on { "false" } else { "true" }.to_string()
        }
        ValueType::Enum => {
            let current = app.store.raw_of(def.name).unwrap_or(def.default);
            let pos = def
                .enum_values
                .iter()
                .position(|m| *m == current)
                .unwrap_or(def.enum_values.len().saturating_sub(1));
            def.enum_values[(pos + 1) % def.enum_values.len()].to_string()
        }
        _ => return,
    };
    if let Err(err) = app.store.set(&app.schema, def.name, &next) {
        app.set_status(err.to_string(), StatusLevel::Error);
    }
}

/// Open the named-color palette for a color option, with the cursor on the
/// current value when it is one of the named colors or their hex forms.
fn open_color_picker(app: &mut AppState, def: &'static OptionDef) {
    let current = app
        .store
        .raw_of(def.name)
        .unwrap_or_default()
        .to_ascii_lowercase();
    let choices: Vec<(String, String)> = NAMED_COLORS
        .iter()
        .map(|(name, (r, g, b))| ((*name).to_string(), format!("#{r:02x}{g:02x}{b:02x}")))
        .collect();
    let selected = choices
        .iter()
        .position(|(name, hex)| *name == current || *hex == current)
        .unwrap_or(0);
    app.modal = Modal::Picker {
        title: format!("Color: {}", def.name),
        option: def.name.to_string(),
        choices,
        selected,
    };
}

/// Open the installed-font list for a font-family option. The list loads in
/// the background at startup; until then the row falls back to free text.
fn open_font_picker(app: &mut AppState, def: &'static OptionDef) {
    if app.fonts.is_empty() {
        app.set_status("font list not loaded yet", StatusLevel::Info);
        return;
    }
    let current = app.store.raw_of(def.name).unwrap_or_default();
    let first = current.split(',').next().unwrap_or_default().trim();
    let choices: Vec<(String, String)> = app
        .fonts
        .iter()
        .map(|f| (f.clone(), f.clone()))
        .collect();
    let selected = choices.iter().position(|(name, _)| name == first).unwrap_or(0);
    app.modal = Modal::Picker {
        title: format!("Font: {}", def.name),
        option: def.name.to_string(),
        choices,
        selected,
    };
}

fn reset_selected(app: &mut AppState) {
    let Some(def) = app.selected_option() else {
        return;
    };
    match app.store.reset_to_default(&app.schema, def.name) {
        Ok(()) => app.set_status(
            format!("{} reset to default", def.name),
            StatusLevel::Info,
        ),
        Err(err) => app.set_status(err.to_string(), StatusLevel::Error),
    }
}

#[cfg(test)]
mod tests {
    use crate::events::tests::{press, test_app};
    use crate::state::{Modal, Tab};
    use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn options_edit_roundtrip() {
        let mut app = test_app("font-size = 12\n");
        app.tab = Tab::Category(1); // Font
        let options = app.visible_options();
        let idx = options
            .iter()
            .position(|d| d.name == "font-size")
            .expect("font-size in Font tab");
        app.option_state.select(Some(idx));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.editing.as_deref(), Some("12"));
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.editing, None);
        assert_eq!(app.store.raw_of("font-size"), Some("14"));
        assert!(app.store.is_dirty("font-size"));
    }

    #[test]
    fn options_invalid_edit_stays_open_with_reason() {
        let mut app = test_app("font-size = 12\n");
        app.tab = Tab::Category(1);
        let idx = app
            .visible_options()
            .iter()
            .position(|d| d.name == "font-size")
            .expect("font-size");
        app.option_state.select(Some(idx));

        press(&mut app, KeyCode::Enter);
        app.editing = Some("abc".to_string());
        press(&mut app, KeyCode::Enter);
        assert!(app.editing.is_some());
        assert_eq!(
            app.edit_error.as_deref(),
            Some("font-size: not an integer")
        );
        assert_eq!(app.store.raw_of("font-size"), Some("12"));
        // Esc abandons the edit.
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.editing, None);
        assert_eq!(app.edit_error, None);
    }

    #[test]
    fn options_space_toggles_bool_and_cycles_enum() {
        let mut app = test_app("");
        app.tab = Tab::Category(2); // Cursor
        let options = app.visible_options();
        let blink = options
            .iter()
            .position(|d| d.name == "cursor-style-blink")
            .expect("blink option");
        app.option_state.select(Some(blink));
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.store.raw_of("cursor-style-blink"), Some("false"));
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.store.raw_of("cursor-style-blink"), Some("true"));

        let style = options
            .iter()
            .position(|d| d.name == "cursor-style")
            .expect("style option");
        app.option_state.select(Some(style));
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.store.raw_of("cursor-style"), Some("bar"));
    }

    #[test]
    fn options_space_opens_color_picker_and_applies() {
        let mut app = test_app("background = #1e1e2e\n");
        app.tab = Tab::Category(0); // Appearance
        let idx = app
            .visible_options()
            .iter()
            .position(|d| d.name == "background")
            .expect("background in Appearance tab");
        app.option_state.select(Some(idx));

        press(&mut app, KeyCode::Char(' '));
        assert!(matches!(app.modal, Modal::Picker { .. }));
        // Esc cancels without touching the value.
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.modal, Modal::None);
        assert_eq!(app.store.raw_of("background"), Some("#1e1e2e"));
        assert!(!app.store.is_dirty("background"));

        // Reopen, pick the first entry (black).
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.modal, Modal::None);
        assert_eq!(app.store.raw_of("background"), Some("#000000"));
        assert!(app.store.is_dirty("background"));
    }

    #[test]
    fn options_space_opens_font_picker_when_fonts_loaded() {
        let mut app = test_app("font-family = Menlo\n");
        app.tab = Tab::Category(1); // Font
        let idx = app
            .visible_options()
            .iter()
            .position(|d| d.name == "font-family")
            .expect("font-family in Font tab");
        app.option_state.select(Some(idx));

        // Before the background worker delivers, Space stays in free text.
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.modal, Modal::None);
        assert!(app.status.is_some());

        app.fonts = vec!["Hack".to_string(), "Menlo".to_string()];
        press(&mut app, KeyCode::Char(' '));
        // The cursor starts on the current family.
        assert!(matches!(app.modal, Modal::Picker { selected: 1, .. }));
        press(&mut app, KeyCode::Char('k'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.store.raw_of("font-family"), Some("Hack"));
        assert!(app.store.is_dirty("font-family"));
    }

    #[test]
    fn options_ctrl_d_resets_to_default() {
        let mut app = test_app("font-size = 12\n");
        app.tab = Tab::Category(1);
        let idx = app
            .visible_options()
            .iter()
            .position(|d| d.name == "font-size")
            .expect("font-size");
        app.option_state.select(Some(idx));
        crate::events::handle_event(
            CEvent::Key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL)),
            &mut app,
        );
        assert_eq!(app.store.raw_of("font-size"), Some("13"));
        assert!(app.store.is_dirty("font-size"));
    }
}
