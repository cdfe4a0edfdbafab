//! Core types describing a single known Ghostty option.

/// Operating system family an option applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    /// macOS builds of Ghostty.
    MacOs,
    /// Linux builds of Ghostty.
    Linux,
}

impl Platform {
    /// Detect the platform this process runs on, evaluated once at startup.
    #[must_use]
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else {
            Self::Linux
        }
    }

    /// Short tag for logging ("macos" | "linux").
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::MacOs => "macos",
            Self::Linux => "linux",
        }
    }
}

/// Declared value type of an option, driving validation and widgets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueType {
    /// `true` / `false` (case-insensitive on input).
    Bool,
    /// One of a fixed set of member strings.
    Enum,
    /// Signed integer, optionally range-limited.
    Int,
    /// Floating point, optionally range-limited.
    Float,
    /// Free-form text (may itself contain `#`).
    Str,
    /// `#RRGGBB` hex or a recognized named color.
    Color,
}

impl ValueType {
    /// Whether a raw value of this type can legitimately contain `#`.
    ///
    /// Types that cannot allow an unquoted trailing `#...` to be captured as
    /// an inline comment during parsing; strings keep the `#` literal. Color
    /// literals start with `#` but never contain a second one, which the
    /// parser accounts for separately.
    #[must_use]
    pub const fn may_contain_hash(self) -> bool {
        matches!(self, Self::Str)
    }
}

/// Immutable definition of one known option. Unique by `name`; the full set
/// lives in [`super::catalog`] and never changes after startup.
#[derive(Debug)]
pub struct OptionDef {
    /// Option name exactly as written in the config file.
    pub name: &'static str,
    /// Display category (one of [`super::CATEGORIES`]).
    pub category: &'static str,
    /// Declared value type.
    pub value_type: ValueType,
    /// Members for `Enum`-typed options; empty otherwise.
    pub enum_values: &'static [&'static str],
    /// Inclusive lower bound for numeric types.
    pub min: Option<f64>,
    /// Inclusive upper bound for numeric types.
    pub max: Option<f64>,
    /// Default value in on-disk string form.
    pub default: &'static str,
    /// Platforms this option exists on.
    pub platforms: &'static [Platform],
    /// Whether the key may appear multiple times (e.g. `palette`).
    pub repeatable: bool,
    /// Whether Ghostty applies a change on SIGUSR2 without a restart.
    pub reloadable: bool,
}

impl OptionDef {
    /// Whether this option exists on the given platform.
    #[must_use]
    pub fn applies_to(&self, platform: Platform) -> bool {
        self.platforms.contains(&platform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_platform_tags() {
        assert_eq!(Platform::MacOs.tag(), "macos");
        assert_eq!(Platform::Linux.tag(), "linux");
    }

    #[test]
    fn types_hash_rule_per_value_type() {
        assert!(ValueType::Str.may_contain_hash());
        assert!(!ValueType::Color.may_contain_hash());
        assert!(!ValueType::Bool.may_contain_hash());
        assert!(!ValueType::Int.may_contain_hash());
        assert!(!ValueType::Enum.may_contain_hash());
    }
}
