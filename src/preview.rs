//! Theme preview: provisionally apply a theme's colors, then confirm or
//! revert.
//!
//! The controller is a two-state machine. Entering preview snapshots every
//! theme-controlled option; navigating between candidates always re-applies
//! from that snapshot first, so options one candidate sets and the next does
//! not cannot leak through. Nothing here touches the document: candidates go
//! through the store's ephemeral path, and only a confirm marks them dirty
//! for a later save.

use fuzzy_matcher::skim::SkimMatcherV2;

use crate::ghostty::{ProcessNotFound, ReloadGateway, Theme, Variant};
use crate::options::OptionStore;
use crate::schema::SchemaRegistry;
use crate::util::fuzzy_rank;

/// Options a theme controls. These are snapshotted on preview entry and
/// restored value-for-value on revert.
pub const THEME_KEYS: &[&str] = &[
    "theme",
    "background",
    "foreground",
    "bold-color",
    "cursor-color",
    "cursor-text",
    "selection-foreground",
    "selection-background",
    "split-divider-color",
    "unfocused-split-fill",
    "palette",
];

/// Narrowing of the theme list by variant. Changing the filter never touches
/// preview state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VariantFilter {
    /// Show every theme.
    #[default]
    All,
    /// Dark themes only.
    Dark,
    /// Light themes only.
    Light,
}

impl VariantFilter {
    /// Whether a theme of the given variant passes this filter.
    #[must_use]
    pub const fn admits(self, variant: Variant) -> bool {
        match self {
            Self::All => true,
            Self::Dark => matches!(variant, Variant::Dark),
            Self::Light => matches!(variant, Variant::Light),
        }
    }

    /// Status-line label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Toggle behavior of the `d`/`l` keys: pressing the active filter's key
    /// returns to `All`.
    #[must_use]
    pub const fn toggled(self, target: Self) -> Self {
        if matches!(
            (self, target),
            (Self::Dark, Self::Dark) | (Self::Light, Self::Light)
        ) {
            Self::All
        } else {
            target
        }
    }
}

/// Narrow the theme list by variant filter and fuzzy query.
///
/// With a query, results come back best-match first; without one, list order
/// is kept.
#[must_use]
pub fn filter_themes<'a>(
    themes: &'a [Theme],
    filter: VariantFilter,
    query: &str,
    matcher: &SkimMatcherV2,
) -> Vec<&'a Theme> {
    let admitted = themes.iter().filter(|t| filter.admits(t.variant));
    if query.trim().is_empty() {
        return admitted.collect();
    }
    let mut scored: Vec<(i64, &Theme)> = admitted
        .filter_map(|t| fuzzy_rank(&t.name, query, matcher).map(|s| (s, t)))
        .collect();
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, t)| t).collect()
}

/// Values of the theme-controlled options at preview entry.
type Snapshot = Vec<(String, String)>;

#[derive(Debug)]
enum State {
    Idle,
    Previewing {
        snapshot: Snapshot,
        candidate: String,
    },
}

/// The preview state machine.
#[derive(Debug)]
pub struct PreviewController {
    state: State,
}

impl Default for PreviewController {
    fn default() -> Self {
        Self { state: State::Idle }
    }
}

impl PreviewController {
    /// Whether a preview is in flight.
    #[must_use]
    pub const fn is_previewing(&self) -> bool {
        matches!(self.state, State::Previewing { .. })
    }

    /// Name of the theme currently being previewed.
    #[must_use]
    pub fn candidate(&self) -> Option<&str> {
        match &self.state {
            State::Previewing { candidate, .. } => Some(candidate),
            State::Idle => None,
        }
    }

    fn snapshot(store: &OptionStore) -> Snapshot {
        THEME_KEYS
            .iter()
            .map(|key| {
                let raw = store.raw_of(key).unwrap_or_default().to_string();
                ((*key).to_string(), raw)
            })
            .collect()
    }

    fn restore(snapshot: &Snapshot, store: &mut OptionStore, schema: &SchemaRegistry) {
        for (key, raw) in snapshot {
            store.apply_ephemeral(schema, key, raw);
        }
    }

    /// What: Apply a candidate theme provisionally.
    ///
    /// Inputs:
    /// - `store` / `schema`: Option store the colors are applied to.
    /// - `gateway`: Reload gateway asked to live-apply.
    /// - `theme`: Candidate.
    ///
    /// Output:
    /// - `Err(ProcessNotFound)` when the gateway could not reach Ghostty; the
    ///   in-memory preview still happened and the caller surfaces a warning.
    ///
    /// Details:
    /// - First call snapshots the theme-controlled options; later calls
    ///   restore from that snapshot before applying, so candidates never see
    ///   each other's colors.
    pub fn preview(
        &mut self,
        store: &mut OptionStore,
        schema: &SchemaRegistry,
        gateway: &dyn ReloadGateway,
        theme: &Theme,
    ) -> Result<(), ProcessNotFound> {
        let snapshot = match std::mem::replace(&mut self.state, State::Idle) {
            State::Idle => Self::snapshot(store),
            State::Previewing { snapshot, .. } => {
                Self::restore(&snapshot, store, schema);
                snapshot
            }
        };
        for (key, value) in theme.overrides() {
            store.apply_ephemeral(schema, &key, &value);
        }
        self.state = State::Previewing {
            snapshot,
            candidate: theme.name.clone(),
        };
        tracing::debug!(theme = %theme.name, "previewing theme");
        gateway.notify_reload()
    }

    /// What: Keep the previewed theme.
    ///
    /// Inputs:
    /// - `store`: Store whose ephemeral values get promoted.
    ///
    /// Output:
    /// - The candidate's name, or `None` when idle.
    ///
    /// Details:
    /// - Promotion means recomputing dirty flags: the previewed values now
    ///   count as pending edits and reach the file on the next save.
    pub fn confirm(&mut self, store: &mut OptionStore) -> Option<String> {
        match std::mem::replace(&mut self.state, State::Idle) {
            State::Idle => None,
            State::Previewing { candidate, .. } => {
                for key in THEME_KEYS {
                    store.sync_dirty(key);
                }
                tracing::info!(theme = %candidate, "theme confirmed");
                Some(candidate)
            }
        }
    }

    /// What: Abandon the preview and restore the snapshot value-for-value.
    ///
    /// Inputs:
    /// - `store` / `schema` / `gateway`: As for [`Self::preview`].
    ///
    /// Output:
    /// - `Err(ProcessNotFound)` when the live re-apply could not be signaled;
    ///   the in-memory state is fully restored either way.
    pub fn revert(
        &mut self,
        store: &mut OptionStore,
        schema: &SchemaRegistry,
        gateway: &dyn ReloadGateway,
    ) -> Result<(), ProcessNotFound> {
        match std::mem::replace(&mut self.state, State::Idle) {
            State::Idle => Ok(()),
            State::Previewing { snapshot, .. } => {
                Self::restore(&snapshot, store, schema);
                for key in THEME_KEYS {
                    store.sync_dirty(key);
                }
                tracing::debug!("theme preview reverted");
                gateway.notify_reload()
            }
        }
    }
}
