//! Modal overlay state. A tagged union so only one modal is active at a time.

/// Active modal overlay, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Modal {
    /// No overlay.
    #[default]
    None,
    /// Informational alert; dismissed with Enter/Esc.
    Alert {
        /// Short title shown in the border.
        title: String,
        /// Body text.
        message: String,
    },
    /// Keybinding help overlay; dismissed with Esc/Enter/`?`.
    Help,
    /// Selection list over color or font choices for one option; Enter
    /// applies the highlighted value, Esc cancels.
    Picker {
        /// Title shown in the border.
        title: String,
        /// Option the chosen value is applied to.
        option: String,
        /// Label shown in the list paired with the value written on select.
        choices: Vec<(String, String)>,
        /// Cursor position into `choices`.
        selected: usize,
    },
    /// Quit requested with unsaved changes; `q`/Enter discards and quits,
    /// Esc returns to the editor.
    ConfirmQuit,
}
