//! In-memory mapping of option name to current value, with dirty tracking.
//!
//! Built from the parsed document plus schema defaults. All user edits pass
//! through [`OptionStore::set`]; [`OptionStore::commit`] is the only path
//! that writes option edits back into the document. Theme preview uses the
//! separate ephemeral path, which never marks anything dirty.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::config::Document;
use crate::schema::SchemaRegistry;

use super::value::OptionValue;

/// Error from a store operation.
#[derive(Debug, PartialEq, Eq)]
pub enum StoreError {
    /// The name is not a schema-known, platform-applicable option.
    UnknownOption(String),
    /// The input failed validation; the stored value is unchanged.
    Invalid {
        /// Option that rejected the input.
        name: String,
        /// Which constraint failed.
        reason: String,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownOption(name) => write!(f, "unknown option: {name}"),
            Self::Invalid { name, reason } => write!(f, "{name}: {reason}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Current state of one editable option.
#[derive(Clone, Debug)]
pub struct OptionState {
    /// On-disk string form of the current value ("" means unset).
    pub raw: String,
    /// Typed value, or the reason it is invalid. Invalid states can only
    /// enter via the file; `set` rejects bad input before it lands here.
    pub typed: Result<OptionValue, String>,
    /// Whether the key was present in the config file at load/commit time.
    pub in_file: bool,
}

/// Editable view over all schema-known options for the current platform.
#[derive(Clone, Debug, Default)]
pub struct OptionStore {
    values: BTreeMap<String, OptionState>,
    /// Raw string last persisted to the document, per option.
    persisted: BTreeMap<String, String>,
    dirty: BTreeSet<String>,
}

impl OptionStore {
    /// What: Build the store from a parsed document and the schema.
    ///
    /// Inputs:
    /// - `doc`: Parsed config document.
    /// - `schema`: Platform-filtered option catalog.
    ///
    /// Output:
    /// - A store with one entry per applicable option: the file value when
    ///   present, else the schema default.
    ///
    /// Details:
    /// - Repeatable options aggregate all occurrences, comma-joined for
    ///   editing; they are split again on commit.
    /// - Keys in the file that the schema does not know stay inert in the
    ///   document and are not exposed here.
    #[must_use]
    pub fn load(doc: &Document, schema: &SchemaRegistry) -> Self {
        let mut store = Self::default();
        for def in schema.all() {
            let in_file = doc.contains_key(def.name);
            let raw = if def.repeatable {
                let vs = doc.get(def.name);
                if vs.is_empty() {
                    def.default.to_string()
                } else {
                    vs.join(", ")
                }
            } else {
                doc.get_last(def.name).unwrap_or(def.default).to_string()
            };
            let typed = OptionValue::parse(def, &raw);
            if let Err(reason) = &typed {
                if in_file {
                    tracing::warn!(option = def.name, %reason, "invalid value in config file");
                }
            }
            store.persisted.insert(def.name.to_string(), raw.clone());
            store.values.insert(
                def.name.to_string(),
                OptionState {
                    raw,
                    typed,
                    in_file,
                },
            );
        }
        store
    }

    /// Current state of an option.
    pub fn get(&self, name: &str) -> Result<&OptionState, StoreError> {
        self.values
            .get(name)
            .ok_or_else(|| StoreError::UnknownOption(name.to_string()))
    }

    /// Current raw value, if the option exists.
    #[must_use]
    pub fn raw_of(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(|s| s.raw.as_str())
    }

    /// What: Validate and apply a user edit.
    ///
    /// Inputs:
    /// - `schema`: Option catalog for validation.
    /// - `name`: Option to change.
    /// - `raw`: New value as typed by the user; empty input unsets the
    ///   option (the key is removed from the document on commit). Unsetting
    ///   a key that is not in the file restores the persisted value and is
    ///   not a change.
    ///
    /// Output:
    /// - `Ok(())` with the value normalized and dirty state updated, or a
    ///   [`StoreError`] leaving the prior value untouched (no partial
    ///   mutation).
    pub fn set(&mut self, schema: &SchemaRegistry, name: &str, raw: &str) -> Result<(), StoreError> {
        let def = schema
            .lookup(name)
            .ok_or_else(|| StoreError::UnknownOption(name.to_string()))?;
        if !self.values.contains_key(name) {
            return Err(StoreError::UnknownOption(name.to_string()));
        }
        let (normalized, typed) = if raw.trim().is_empty() {
            let in_file = self.values.get(name).is_some_and(|s| s.in_file);
            if in_file {
                (String::new(), OptionValue::parse(def, def.default))
            } else {
                // Nothing to remove: fall back to the persisted value (the
                // schema default on first load, "" after a prior removal).
                let prior = self.persisted.get(name).cloned().unwrap_or_default();
                let typed = if prior.is_empty() {
                    OptionValue::parse(def, def.default)
                } else {
                    OptionValue::parse(def, &prior)
                };
                (prior, typed)
            }
        } else {
            let value = OptionValue::parse(def, raw).map_err(|reason| StoreError::Invalid {
                name: name.to_string(),
                reason,
            })?;
            (value.to_disk_string(), Ok(value))
        };
        if let Some(state) = self.values.get_mut(name) {
            state.raw = normalized;
            state.typed = typed;
        }
        self.sync_dirty(name);
        Ok(())
    }

    /// Reset an option to its schema default and mark it dirty if that
    /// differs from the current value.
    pub fn reset_to_default(
        &mut self,
        schema: &SchemaRegistry,
        name: &str,
    ) -> Result<(), StoreError> {
        let def = schema
            .lookup(name)
            .ok_or_else(|| StoreError::UnknownOption(name.to_string()))?;
        self.set(schema, name, def.default)
    }

    /// Whether this option's current value differs from what was last
    /// persisted to the document.
    #[must_use]
    pub fn is_dirty(&self, name: &str) -> bool {
        self.dirty.contains(name)
    }

    /// Whether any option has unpersisted changes.
    #[must_use]
    pub fn any_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Names of all dirty options, sorted.
    #[must_use]
    pub fn dirty_names(&self) -> Vec<String> {
        self.dirty.iter().cloned().collect()
    }

    /// What: Write every dirty option into the document and clear dirty flags.
    ///
    /// Inputs:
    /// - `schema`: Catalog, for the repeatable flag.
    /// - `doc`: Document to patch via its minimal-diff `set`/`remove`.
    ///
    /// Output:
    /// - None; afterwards `any_dirty()` is false and the document reflects
    ///   the store.
    ///
    /// Details:
    /// - This is the only path by which option edits reach the document.
    ///   Empty raw values remove the key; repeatable values are split on
    ///   commas and written through `set_all`.
    pub fn commit(&mut self, schema: &SchemaRegistry, doc: &mut Document) {
        for name in self.dirty_names() {
            let Some(state) = self.values.get(&name) else {
                continue;
            };
            let raw = state.raw.clone();
            if raw.is_empty() {
                doc.remove(&name);
            } else if schema.lookup(&name).is_some_and(|d| d.repeatable) {
                let parts: Vec<&str> = raw
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .collect();
                doc.set_all(&name, &parts);
            } else {
                doc.set(&name, &raw);
            }
            self.persisted.insert(name.clone(), raw.clone());
            if let Some(state) = self.values.get_mut(&name) {
                state.in_file = !raw.is_empty();
            }
        }
        self.dirty.clear();
    }

    /// What: Apply a value to memory only, bypassing dirty tracking.
    ///
    /// Inputs:
    /// - `schema`: Catalog; unknown names are ignored with a debug log.
    /// - `name` / `raw`: Option and provisional value.
    ///
    /// Output:
    /// - None.
    ///
    /// Details:
    /// - This is the theme preview's write path. It never reaches the
    ///   document; revert re-applies the snapshot through the same path.
    pub fn apply_ephemeral(&mut self, schema: &SchemaRegistry, name: &str, raw: &str) {
        let Some(def) = schema.lookup(name) else {
            tracing::debug!(option = name, "ephemeral apply for unknown option ignored");
            return;
        };
        if let Some(state) = self.values.get_mut(name) {
            state.raw = raw.to_string();
            state.typed = if raw.is_empty() {
                OptionValue::parse(def, def.default)
            } else {
                OptionValue::parse(def, raw)
            };
        }
    }

    /// Recompute this option's dirty membership against the persisted value.
    ///
    /// Used after ephemeral values are promoted (preview confirm) or rolled
    /// back (preview revert).
    pub fn sync_dirty(&mut self, name: &str) {
        let current = self.values.get(name).map(|s| s.raw.as_str());
        let persisted = self.persisted.get(name).map(String::as_str);
        if current.is_some() && current != persisted {
            self.dirty.insert(name.to_string());
        } else {
            self.dirty.remove(name);
        }
    }

    /// All option names in the store, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.values.keys().map(String::as_str).collect()
    }
}
