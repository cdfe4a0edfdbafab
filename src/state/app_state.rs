//! The central mutable state driving the event loop and renderer.

use std::time::{Duration, Instant};

use fuzzy_matcher::skim::SkimMatcherV2;
use ratatui::widgets::ListState;

use crate::config::{ConfigFile, Document};
use crate::ghostty::docs::DocsMap;
use crate::ghostty::{ReloadGateway, Theme};
use crate::options::OptionStore;
use crate::preview::{filter_themes, PreviewController, VariantFilter};
use crate::schema::{OptionDef, SchemaRegistry};

use super::{Modal, StatusLevel, Tab};

/// How long a status-line message stays visible.
const STATUS_TTL: Duration = Duration::from_secs(5);

/// Everything the TUI needs to render and react: the parsed config, the
/// option store, the theme browser, and transient UI state.
pub struct AppState {
    /// Platform-filtered option catalog.
    pub schema: SchemaRegistry,
    /// Handle to the config file on disk.
    pub file: ConfigFile,
    /// Parsed config document.
    pub doc: Document,
    /// Editable option values with dirty tracking.
    pub store: OptionStore,
    /// Theme preview state machine.
    pub preview: PreviewController,
    /// Gateway used to ask Ghostty to reload.
    pub gateway: Box<dyn ReloadGateway + Send + Sync>,

    /// Active tab.
    pub tab: Tab,
    /// Selected row per option tab (kept when switching tabs).
    pub option_state: ListState,
    /// Edit buffer when a row is being edited.
    pub editing: Option<String>,
    /// Validation error for the current edit buffer, shown inline.
    pub edit_error: Option<String>,

    /// All known themes, loaded in the background.
    pub themes: Vec<Theme>,
    /// Whether the theme list is still being fetched.
    pub themes_loading: bool,
    /// Search text in the theme browser.
    pub theme_query: String,
    /// Whether keystrokes go to the theme search box.
    pub theme_search_active: bool,
    /// Dark/light narrowing in the theme browser.
    pub variant_filter: VariantFilter,
    /// Selected row in the filtered theme list.
    pub theme_state: ListState,

    /// Installed monospace fonts for the font picker, loaded in the
    /// background.
    pub fonts: Vec<String>,

    /// Option documentation, from cache or the background fetch.
    pub docs: DocsMap,
    /// Active modal overlay.
    pub modal: Modal,
    /// Status-line message with severity.
    pub status: Option<(String, StatusLevel)>,
    /// When the status message disappears.
    pub status_expires_at: Option<Instant>,

    /// Fuzzy matcher reused across frames.
    pub matcher: SkimMatcherV2,
}

impl AppState {
    /// Assemble the initial state from the loaded pieces.
    #[must_use]
    pub fn new(
        schema: SchemaRegistry,
        file: ConfigFile,
        doc: Document,
        store: OptionStore,
        gateway: Box<dyn ReloadGateway + Send + Sync>,
    ) -> Self {
        let mut option_state = ListState::default();
        option_state.select(Some(0));
        let mut theme_state = ListState::default();
        theme_state.select(Some(0));
        Self {
            schema,
            file,
            doc,
            store,
            preview: PreviewController::default(),
            gateway,
            tab: Tab::Themes,
            option_state,
            editing: None,
            edit_error: None,
            themes: Vec::new(),
            themes_loading: true,
            theme_query: String::new(),
            theme_search_active: false,
            variant_filter: VariantFilter::All,
            theme_state,
            fonts: Vec::new(),
            docs: DocsMap::new(),
            modal: Modal::None,
            status: None,
            status_expires_at: None,
            matcher: SkimMatcherV2::default(),
        }
    }

    /// Options shown by the active tab, in catalog order.
    #[must_use]
    pub fn visible_options(&self) -> Vec<&'static OptionDef> {
        match self.tab.category() {
            Some(category) => self.schema.options_for_category(category),
            None => Vec::new(),
        }
    }

    /// The option under the cursor on the active tab.
    #[must_use]
    pub fn selected_option(&self) -> Option<&'static OptionDef> {
        let options = self.visible_options();
        self.option_state
            .selected()
            .and_then(|i| options.get(i).copied())
    }

    /// Themes passing the current filter and query, best match first.
    #[must_use]
    pub fn visible_themes(&self) -> Vec<&Theme> {
        filter_themes(
            &self.themes,
            self.variant_filter,
            &self.theme_query,
            &self.matcher,
        )
    }

    /// The theme under the cursor in the browser.
    #[must_use]
    pub fn selected_theme(&self) -> Option<Theme> {
        let visible = self.visible_themes();
        self.theme_state
            .selected()
            .and_then(|i| visible.get(i))
            .map(|t| (*t).clone())
    }

    /// Show a status-line message for a few seconds.
    pub fn set_status(&mut self, text: impl Into<String>, level: StatusLevel) {
        self.status = Some((text.into(), level));
        self.status_expires_at = Some(Instant::now() + STATUS_TTL);
    }

    /// Tick housekeeping: expire the status message.
    pub fn on_tick(&mut self) {
        if let Some(deadline) = self.status_expires_at
            && Instant::now() >= deadline
        {
            self.status = None;
            self.status_expires_at = None;
        }
    }

    /// What: Persist all pending edits and ask Ghostty to reload.
    ///
    /// Inputs: none (operates on the store and document).
    ///
    /// Output:
    /// - None; the outcome lands in the status line.
    ///
    /// Details:
    /// - Commits into clones first, so a failed write leaves both the store
    ///   and the document untouched. On success the file is re-read to
    ///   refresh raw-line provenance, a reload is signaled, and options
    ///   Ghostty cannot hot-reload get a restart hint.
    pub fn save(&mut self) {
        if !self.store.any_dirty() {
            self.set_status("no changes to save", StatusLevel::Info);
            return;
        }
        let needs_restart: Vec<String> = self
            .store
            .dirty_names()
            .into_iter()
            .filter(|n| self.schema.lookup(n).is_some_and(|d| !d.reloadable))
            .collect();

        let mut doc = self.doc.clone();
        let mut store = self.store.clone();
        store.commit(&self.schema, &mut doc);
        if let Err(err) = self.file.save(&doc) {
            tracing::error!(%err, "save failed");
            self.set_status(format!("save failed: {err}"), StatusLevel::Error);
            return;
        }
        self.store = store;
        self.doc = match self.file.load(|k| self.schema.captures_trailing_comment(k)) {
            Ok(fresh) => fresh,
            Err(err) => {
                tracing::warn!(%err, "could not re-read config after save");
                doc
            }
        };
        tracing::info!(path = %self.file.path.display(), "config saved");

        match self.gateway.notify_reload() {
            Ok(()) if needs_restart.is_empty() => {
                self.set_status("saved and reloaded", StatusLevel::Info);
            }
            Ok(()) => {
                self.set_status(
                    format!("saved; restart ghostty to apply: {}", needs_restart.join(", ")),
                    StatusLevel::Info,
                );
            }
            Err(_) => {
                self.set_status(
                    "saved, but reload failed (PID not found)",
                    StatusLevel::Warning,
                );
            }
        }
    }
}
