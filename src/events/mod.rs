//! Event handling for the TUI: modal dispatch, global keys, and per-tab
//! handlers in submodules.

use crossterm::event::{Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};

use crate::state::{AppState, Modal, Tab};

mod options;
mod themes;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(ev: CEvent, app: &mut AppState) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }

    // Modal handling first: an open modal swallows every key.
    match &app.modal {
        Modal::Alert { .. } => {
            if matches!(ke.code, KeyCode::Enter | KeyCode::Esc) {
                app.modal = Modal::None;
            }
            return false;
        }
        Modal::Help => {
            if matches!(ke.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('?')) {
                app.modal = Modal::None;
            }
            return false;
        }
        Modal::ConfirmQuit => {
            match ke.code {
                KeyCode::Char('q') | KeyCode::Enter => return true,
                KeyCode::Esc => app.modal = Modal::None,
                _ => {}
            }
            return false;
        }
        Modal::Picker { .. } => {
            picker_key(ke, app);
            return false;
        }
        Modal::None => {}
    }

    // Ctrl+C always exits, even mid-edit.
    if ke.code == KeyCode::Char('c') && ke.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    // Text-entry states take the keystroke before global shortcuts.
    if app.editing.is_some() {
        options::handle_edit_key(ke, app);
        return false;
    }
    if app.tab == Tab::Themes && app.theme_search_active {
        themes::handle_search_key(ke, app);
        return false;
    }

    // Global shortcuts.
    match (ke.code, ke.modifiers) {
        (KeyCode::Char('s'), m) if m.contains(KeyModifiers::CONTROL) => {
            app.save();
            return false;
        }
        (KeyCode::Char('q'), _) => {
            if app.store.any_dirty() {
                app.modal = Modal::ConfirmQuit;
                return false;
            }
            return true;
        }
        (KeyCode::Char('?'), _) => {
            app.modal = Modal::Help;
            return false;
        }
        (KeyCode::Tab, _) => {
            switch_tab(app, app.tab.next());
            return false;
        }
        (KeyCode::BackTab, _) => {
            switch_tab(app, app.tab.prev());
            return false;
        }
        _ => {}
    }

    match app.tab {
        Tab::Themes => themes::handle_key(ke, app),
        Tab::Category(_) => options::handle_key(ke, app),
    }
    false
}

/// Navigate the open picker; Enter applies the highlighted value through the
/// store's validated path, Esc closes without touching anything.
fn picker_key(ke: crossterm::event::KeyEvent, app: &mut AppState) {
    let Modal::Picker {
        option,
        choices,
        selected,
        ..
    } = &mut app.modal
    else {
        return;
    };
    match ke.code {
        KeyCode::Up | KeyCode::Char('k') => *selected = selected.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => {
            *selected = (*selected + 1).min(choices.len().saturating_sub(1));
        }
        KeyCode::PageUp => *selected = selected.saturating_sub(10),
        KeyCode::PageDown => {
            *selected = (*selected + 10).min(choices.len().saturating_sub(1));
        }
        KeyCode::Enter => {
            let name = option.clone();
            let value = choices
                .get(*selected)
                .map(|(_, v)| v.clone())
                .unwrap_or_default();
            app.modal = Modal::None;
            if let Err(err) = app.store.set(&app.schema, &name, &value) {
                app.set_status(err.to_string(), crate::state::StatusLevel::Error);
            }
        }
        KeyCode::Esc => app.modal = Modal::None,
        _ => {}
    }
}

/// Switch tabs, resetting the row cursor of the tab being entered.
fn switch_tab(app: &mut AppState, to: Tab) {
    app.tab = to;
    match to {
        Tab::Themes => {
            if app.theme_state.selected().is_none() {
                app.theme_state.select(Some(0));
            }
        }
        Tab::Category(_) => {
            app.option_state.select(Some(0));
        }
    }
}

/// Clamp-free list navigation shared by both tabs.
pub(crate) fn move_selection(state: &mut ratatui::widgets::ListState, len: usize, delta: i64) {
    if len == 0 {
        state.select(None);
        return;
    }
    let cur = state.selected().unwrap_or(0) as i64;
    let next = (cur + delta).clamp(0, len as i64 - 1) as usize;
    state.select(Some(next));
}
