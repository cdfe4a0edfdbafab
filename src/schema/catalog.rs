//! The static option catalog: every Ghostty option the editor knows about.
//!
//! One table, built at compile time, unique by name. Options missing from
//! this table are still preserved in the config file; they just are not
//! offered for editing.

use super::types::{OptionDef, Platform, ValueType};

/// Display categories, in tab order.
pub const CATEGORIES: &[&str] = &[
    "Appearance",
    "Font",
    "Cursor",
    "Window",
    "Mouse",
    "Clipboard",
    "Shell",
    "Advanced",
];

const BOTH: &[Platform] = &[Platform::MacOs, Platform::Linux];
const MACOS: &[Platform] = &[Platform::MacOs];
const LINUX: &[Platform] = &[Platform::Linux];

/// Baseline definition used with struct-update syntax below.
const BASE: OptionDef = OptionDef {
    name: "",
    category: "Advanced",
    value_type: ValueType::Str,
    enum_values: &[],
    min: None,
    max: None,
    default: "",
    platforms: BOTH,
    repeatable: false,
    reloadable: false,
};

/// The full option table, in category display order.
pub static SCHEMA: &[OptionDef] = &[
    // ── Appearance ──────────────────────────────────────────
    OptionDef {
        name: "theme",
        category: "Appearance",
        reloadable: true,
        ..BASE
    },
    OptionDef {
        name: "background",
        category: "Appearance",
        value_type: ValueType::Color,
        default: "#282c34",
        reloadable: true,
        ..BASE
    },
    OptionDef {
        name: "foreground",
        category: "Appearance",
        value_type: ValueType::Color,
        default: "#ffffff",
        reloadable: true,
        ..BASE
    },
    OptionDef {
        name: "background-opacity",
        category: "Appearance",
        value_type: ValueType::Float,
        default: "1",
        min: Some(0.0),
        max: Some(1.0),
        reloadable: true,
        ..BASE
    },
    OptionDef {
        name: "background-blur-radius",
        category: "Appearance",
        value_type: ValueType::Int,
        default: "0",
        min: Some(0.0),
        max: Some(100.0),
        platforms: MACOS,
        ..BASE
    },
    OptionDef {
        name: "palette",
        category: "Appearance",
        repeatable: true,
        reloadable: true,
        ..BASE
    },
    OptionDef {
        name: "bold-color",
        category: "Appearance",
        value_type: ValueType::Color,
        reloadable: true,
        ..BASE
    },
    OptionDef {
        name: "selection-foreground",
        category: "Appearance",
        value_type: ValueType::Color,
        reloadable: true,
        ..BASE
    },
    OptionDef {
        name: "selection-background",
        category: "Appearance",
        value_type: ValueType::Color,
        reloadable: true,
        ..BASE
    },
    OptionDef {
        name: "selection-invert-fg-bg",
        category: "Appearance",
        value_type: ValueType::Bool,
        default: "false",
        reloadable: true,
        ..BASE
    },
    OptionDef {
        name: "split-divider-color",
        category: "Appearance",
        value_type: ValueType::Color,
        reloadable: true,
        ..BASE
    },
    OptionDef {
        name: "unfocused-split-fill",
        category: "Appearance",
        value_type: ValueType::Color,
        reloadable: true,
        ..BASE
    },
    OptionDef {
        name: "unfocused-split-opacity",
        category: "Appearance",
        value_type: ValueType::Float,
        default: "0.7",
        min: Some(0.15),
        max: Some(1.0),
        reloadable: true,
        ..BASE
    },
    OptionDef {
        name: "minimum-contrast",
        category: "Appearance",
        value_type: ValueType::Float,
        default: "1",
        min: Some(1.0),
        max: Some(21.0),
        reloadable: true,
        ..BASE
    },
    OptionDef {
        name: "bold-is-bright",
        category: "Appearance",
        value_type: ValueType::Bool,
        default: "false",
        reloadable: true,
        ..BASE
    },
    // ── Font ────────────────────────────────────────────────
    OptionDef {
        name: "font-family",
        category: "Font",
        repeatable: true,
        ..BASE
    },
    OptionDef {
        name: "font-family-bold",
        category: "Font",
        ..BASE
    },
    OptionDef {
        name: "font-family-italic",
        category: "Font",
        ..BASE
    },
    OptionDef {
        name: "font-family-bold-italic",
        category: "Font",
        ..BASE
    },
    OptionDef {
        name: "font-size",
        category: "Font",
        value_type: ValueType::Int,
        default: "13",
        min: Some(1.0),
        max: Some(256.0),
        ..BASE
    },
    OptionDef {
        name: "font-feature",
        category: "Font",
        repeatable: true,
        ..BASE
    },
    OptionDef {
        name: "font-thicken",
        category: "Font",
        value_type: ValueType::Bool,
        default: "false",
        platforms: MACOS,
        ..BASE
    },
    // ── Cursor ──────────────────────────────────────────────
    OptionDef {
        name: "cursor-style",
        category: "Cursor",
        value_type: ValueType::Enum,
        enum_values: &["block", "bar", "underline", "block_hollow"],
        default: "block",
        reloadable: true,
        ..BASE
    },
    OptionDef {
        name: "cursor-style-blink",
        category: "Cursor",
        value_type: ValueType::Bool,
        default: "true",
        reloadable: true,
        ..BASE
    },
    OptionDef {
        name: "cursor-color",
        category: "Cursor",
        value_type: ValueType::Color,
        reloadable: true,
        ..BASE
    },
    OptionDef {
        name: "cursor-text",
        category: "Cursor",
        value_type: ValueType::Color,
        reloadable: true,
        ..BASE
    },
    OptionDef {
        name: "cursor-opacity",
        category: "Cursor",
        value_type: ValueType::Float,
        default: "1",
        min: Some(0.0),
        max: Some(1.0),
        reloadable: true,
        ..BASE
    },
    OptionDef {
        name: "cursor-click-to-move",
        category: "Cursor",
        value_type: ValueType::Bool,
        default: "true",
        ..BASE
    },
    // ── Window ──────────────────────────────────────────────
    OptionDef {
        name: "window-padding-x",
        category: "Window",
        value_type: ValueType::Int,
        default: "2",
        min: Some(0.0),
        max: Some(1000.0),
        ..BASE
    },
    OptionDef {
        name: "window-padding-y",
        category: "Window",
        value_type: ValueType::Int,
        default: "2",
        min: Some(0.0),
        max: Some(1000.0),
        ..BASE
    },
    OptionDef {
        name: "window-padding-balance",
        category: "Window",
        value_type: ValueType::Bool,
        default: "false",
        ..BASE
    },
    OptionDef {
        name: "window-decoration",
        category: "Window",
        value_type: ValueType::Enum,
        enum_values: &["auto", "client", "server", "none"],
        default: "auto",
        ..BASE
    },
    OptionDef {
        name: "window-theme",
        category: "Window",
        value_type: ValueType::Enum,
        enum_values: &["auto", "system", "dark", "light", "ghostty"],
        default: "auto",
        ..BASE
    },
    OptionDef {
        name: "window-inherit-working-directory",
        category: "Window",
        value_type: ValueType::Bool,
        default: "true",
        ..BASE
    },
    OptionDef {
        name: "window-inherit-font-size",
        category: "Window",
        value_type: ValueType::Bool,
        default: "true",
        ..BASE
    },
    OptionDef {
        name: "window-width",
        category: "Window",
        value_type: ValueType::Int,
        default: "0",
        min: Some(0.0),
        ..BASE
    },
    OptionDef {
        name: "window-height",
        category: "Window",
        value_type: ValueType::Int,
        default: "0",
        min: Some(0.0),
        ..BASE
    },
    OptionDef {
        name: "fullscreen",
        category: "Window",
        value_type: ValueType::Bool,
        default: "false",
        ..BASE
    },
    OptionDef {
        name: "window-save-state",
        category: "Window",
        value_type: ValueType::Enum,
        enum_values: &["default", "never", "always"],
        default: "default",
        platforms: MACOS,
        ..BASE
    },
    OptionDef {
        name: "macos-titlebar-style",
        category: "Window",
        value_type: ValueType::Enum,
        enum_values: &["native", "transparent", "tabs", "hidden"],
        default: "transparent",
        platforms: MACOS,
        ..BASE
    },
    OptionDef {
        name: "macos-non-native-fullscreen",
        category: "Window",
        value_type: ValueType::Enum,
        enum_values: &["false", "true", "visible-menu"],
        default: "false",
        platforms: MACOS,
        ..BASE
    },
    OptionDef {
        name: "macos-option-as-alt",
        category: "Window",
        value_type: ValueType::Enum,
        enum_values: &["false", "true", "left", "right"],
        default: "false",
        platforms: MACOS,
        ..BASE
    },
    OptionDef {
        name: "gtk-titlebar",
        category: "Window",
        value_type: ValueType::Bool,
        default: "true",
        platforms: LINUX,
        ..BASE
    },
    OptionDef {
        name: "gtk-single-instance",
        category: "Window",
        value_type: ValueType::Enum,
        enum_values: &["desktop", "true", "false"],
        default: "desktop",
        platforms: LINUX,
        ..BASE
    },
    OptionDef {
        name: "gtk-wide-tabs",
        category: "Window",
        value_type: ValueType::Bool,
        default: "true",
        platforms: LINUX,
        ..BASE
    },
    // ── Mouse ───────────────────────────────────────────────
    OptionDef {
        name: "mouse-hide-while-typing",
        category: "Mouse",
        value_type: ValueType::Bool,
        default: "false",
        ..BASE
    },
    OptionDef {
        name: "mouse-scroll-multiplier",
        category: "Mouse",
        value_type: ValueType::Float,
        default: "1",
        min: Some(0.01),
        max: Some(10000.0),
        ..BASE
    },
    OptionDef {
        name: "mouse-shift-capture",
        category: "Mouse",
        value_type: ValueType::Enum,
        enum_values: &["false", "true", "always", "never"],
        default: "false",
        ..BASE
    },
    OptionDef {
        name: "focus-follows-mouse",
        category: "Mouse",
        value_type: ValueType::Bool,
        default: "false",
        ..BASE
    },
    // ── Clipboard ───────────────────────────────────────────
    OptionDef {
        name: "copy-on-select",
        category: "Clipboard",
        value_type: ValueType::Enum,
        enum_values: &["false", "true", "clipboard"],
        default: "true",
        ..BASE
    },
    OptionDef {
        name: "clipboard-read",
        category: "Clipboard",
        value_type: ValueType::Enum,
        enum_values: &["ask", "allow", "deny"],
        default: "ask",
        ..BASE
    },
    OptionDef {
        name: "clipboard-write",
        category: "Clipboard",
        value_type: ValueType::Enum,
        enum_values: &["ask", "allow", "deny"],
        default: "allow",
        ..BASE
    },
    OptionDef {
        name: "clipboard-trim-trailing-spaces",
        category: "Clipboard",
        value_type: ValueType::Bool,
        default: "true",
        ..BASE
    },
    OptionDef {
        name: "clipboard-paste-protection",
        category: "Clipboard",
        value_type: ValueType::Bool,
        default: "true",
        ..BASE
    },
    // ── Shell ───────────────────────────────────────────────
    OptionDef {
        name: "command",
        category: "Shell",
        ..BASE
    },
    OptionDef {
        name: "working-directory",
        category: "Shell",
        ..BASE
    },
    OptionDef {
        name: "shell-integration",
        category: "Shell",
        value_type: ValueType::Enum,
        enum_values: &["none", "detect", "bash", "elvish", "fish", "zsh"],
        default: "detect",
        ..BASE
    },
    OptionDef {
        name: "shell-integration-features",
        category: "Shell",
        default: "cursor,sudo,title",
        ..BASE
    },
    OptionDef {
        name: "scrollback-limit",
        category: "Shell",
        value_type: ValueType::Int,
        default: "10000000",
        min: Some(0.0),
        ..BASE
    },
    // ── Advanced ────────────────────────────────────────────
    OptionDef {
        name: "confirm-close-surface",
        category: "Advanced",
        value_type: ValueType::Bool,
        default: "true",
        ..BASE
    },
    OptionDef {
        name: "quit-after-last-window-closed",
        category: "Advanced",
        value_type: ValueType::Bool,
        default: "false",
        ..BASE
    },
    OptionDef {
        name: "auto-update",
        category: "Advanced",
        value_type: ValueType::Enum,
        enum_values: &["off", "check", "download"],
        default: "check",
        platforms: MACOS,
        ..BASE
    },
    OptionDef {
        name: "custom-shader",
        category: "Advanced",
        repeatable: true,
        ..BASE
    },
    OptionDef {
        name: "custom-shader-animation",
        category: "Advanced",
        value_type: ValueType::Enum,
        enum_values: &["false", "true", "always"],
        default: "true",
        ..BASE
    },
    OptionDef {
        name: "term",
        category: "Advanced",
        default: "xterm-ghostty",
        ..BASE
    },
    OptionDef {
        name: "title",
        category: "Advanced",
        ..BASE
    },
    OptionDef {
        name: "keybind",
        category: "Advanced",
        repeatable: true,
        ..BASE
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_names_are_unique() {
        let mut seen = HashSet::new();
        for def in SCHEMA {
            assert!(seen.insert(def.name), "duplicate option: {}", def.name);
        }
    }

    #[test]
    fn catalog_every_option_has_known_category() {
        for def in SCHEMA {
            assert!(
                CATEGORIES.contains(&def.category),
                "{} has unknown category {}",
                def.name,
                def.category
            );
        }
    }

    #[test]
    fn catalog_enum_options_have_members_and_valid_default() {
        for def in SCHEMA {
            if def.value_type == ValueType::Enum {
                assert!(!def.enum_values.is_empty(), "{} has no members", def.name);
                assert!(
                    def.enum_values.contains(&def.default),
                    "{} default {} not a member",
                    def.name,
                    def.default
                );
            } else {
                assert!(def.enum_values.is_empty(), "{} has stray members", def.name);
            }
        }
    }

    #[test]
    fn catalog_platform_split_options_present() {
        let find = |n: &str| SCHEMA.iter().find(|d| d.name == n).expect("option");
        assert_eq!(find("macos-titlebar-style").platforms, MACOS);
        assert_eq!(find("gtk-titlebar").platforms, LINUX);
        assert_eq!(find("font-size").platforms, BOTH);
    }

    #[test]
    fn catalog_hot_reload_flags_match_ghostty() {
        let find = |n: &str| SCHEMA.iter().find(|d| d.name == n).expect("option");
        assert!(find("foreground").reloadable);
        assert!(find("background").reloadable);
        assert!(!find("font-size").reloadable);
    }

    #[test]
    fn catalog_repeatable_flags() {
        let find = |n: &str| SCHEMA.iter().find(|d| d.name == n).expect("option");
        assert!(find("font-family").repeatable);
        assert!(find("palette").repeatable);
        assert!(!find("font-size").repeatable);
    }
}
