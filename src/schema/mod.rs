//! Schema registry: the immutable catalog of known Ghostty options.
//!
//! Constructed once at startup for the detected platform and passed by
//! reference to the option store and UI. Options for other platforms are
//! excluded from all listings, but their values in the config file are never
//! dropped (roundtrip safety beats schema strictness).

/// The static option table and display categories.
mod catalog;
/// Option definition types and platform detection.
mod types;

use std::collections::HashMap;

pub use catalog::{CATEGORIES, SCHEMA};
pub use types::{OptionDef, Platform, ValueType};

/// Platform-filtered view over the static option catalog.
#[derive(Debug)]
pub struct SchemaRegistry {
    platform: Platform,
    by_name: HashMap<&'static str, &'static OptionDef>,
    ordered: Vec<&'static OptionDef>,
}

impl SchemaRegistry {
    /// Build the registry for a specific platform.
    #[must_use]
    pub fn new(platform: Platform) -> Self {
        let ordered: Vec<&'static OptionDef> = SCHEMA
            .iter()
            .filter(|d| d.applies_to(platform))
            .collect();
        let by_name = ordered.iter().map(|d| (d.name, *d)).collect();
        Self {
            platform,
            by_name,
            ordered,
        }
    }

    /// Build the registry for the platform this process runs on.
    #[must_use]
    pub fn current() -> Self {
        Self::new(Platform::current())
    }

    /// The platform this registry was built for.
    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// Find a known, platform-applicable option by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&'static OptionDef> {
        self.by_name.get(name).copied()
    }

    /// All applicable options, in catalog order.
    #[must_use]
    pub fn all(&self) -> &[&'static OptionDef] {
        &self.ordered
    }

    /// Applicable options belonging to one display category, in catalog order.
    #[must_use]
    pub fn options_for_category(&self, category: &str) -> Vec<&'static OptionDef> {
        self.ordered
            .iter()
            .filter(|d| d.category == category)
            .copied()
            .collect()
    }

    /// Whether a trailing `#...` on this key's line should be captured as an
    /// inline comment during parsing. Unknown keys never capture (their type
    /// might be able to contain `#`).
    #[must_use]
    pub fn captures_trailing_comment(&self, key: &str) -> bool {
        self.lookup(key)
            .is_some_and(|d| !d.value_type.may_contain_hash())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_platform_filtering_excludes_foreign_options() {
        let mac = SchemaRegistry::new(Platform::MacOs);
        let linux = SchemaRegistry::new(Platform::Linux);
        assert!(mac.lookup("macos-titlebar-style").is_some());
        assert!(mac.lookup("gtk-titlebar").is_none());
        assert!(linux.lookup("gtk-titlebar").is_some());
        assert!(linux.lookup("macos-titlebar-style").is_none());
        assert!(mac
            .all()
            .iter()
            .all(|d| d.applies_to(Platform::MacOs)));
    }

    #[test]
    fn schema_categories_are_populated() {
        let reg = SchemaRegistry::new(Platform::Linux);
        let font = reg.options_for_category("Font");
        assert!(!font.is_empty());
        assert!(font.iter().all(|d| d.category == "Font"));
    }

    #[test]
    fn schema_trailing_comment_rule() {
        let reg = SchemaRegistry::new(Platform::Linux);
        // Int cannot contain '#'.
        assert!(reg.captures_trailing_comment("font-size"));
        // Color literals start with '#'; the parser handles them, capture allowed.
        assert!(reg.captures_trailing_comment("background"));
        // Strings may contain '#': never captured.
        assert!(!reg.captures_trailing_comment("title"));
        // Unknown keys never capture.
        assert!(!reg.captures_trailing_comment("no-such-option"));
    }
}
