//! The theme catalog: names from the `ghostty` CLI, colors from the theme
//! files themselves.

use std::process::Command;

use crate::schema::Platform;

use super::paths;

/// Whether a theme reads as dark or light.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Dark background.
    Dark,
    /// Light background.
    Light,
}

/// A Ghostty theme with the colors the preview pane needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Theme name as listed by `ghostty +list-themes`.
    pub name: String,
    /// Dark/light classification.
    pub variant: Variant,
    /// Background color literal (`#rrggbb`).
    pub background: String,
    /// Foreground color literal.
    pub foreground: String,
    /// Cursor color, when the theme sets one.
    pub cursor_color: String,
    /// Selection background, when the theme sets one.
    pub selection_background: String,
    /// The 16 ANSI palette entries (empty string when unset).
    pub palette: Vec<String>,
}

impl Theme {
    /// Key/value pairs this theme would apply to the config, in schema key
    /// names. Unset colors are omitted; palette entries come back in
    /// Ghostty's `N=#rrggbb` form.
    #[must_use]
    pub fn overrides(&self) -> Vec<(String, String)> {
        let mut out = vec![("theme".to_string(), self.name.clone())];
        for (key, value) in [
            ("background", &self.background),
            ("foreground", &self.foreground),
            ("cursor-color", &self.cursor_color),
            ("selection-background", &self.selection_background),
        ] {
            if !value.is_empty() {
                out.push((key.to_string(), value.clone()));
            }
        }
        let entries: Vec<String> = self
            .palette
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_empty())
            .map(|(i, c)| format!("{i}={c}"))
            .collect();
        if !entries.is_empty() {
            out.push(("palette".to_string(), entries.join(", ")));
        }
        out
    }
}

/// Name fragments that mark a theme as light. Anything else counts as dark,
/// matching how most theme collections name their variants.
const LIGHT_KEYWORDS: &[&str] = &["light", "latte", "day", "dawn", "morning", "white", "paper"];

/// What: Classify a theme as dark or light.
///
/// Inputs:
/// - `name`: Theme name, used as fallback.
/// - `background`: Background color literal when the theme file was parsed.
///
/// Output:
/// - Luminance of the background decides when it parses as hex; otherwise
///   the name keywords decide.
#[must_use]
pub fn classify_variant(name: &str, background: &str) -> Variant {
    let t = background.trim();
    let h = t.strip_prefix('#').unwrap_or(t);
    if h.len() == 6 && h.chars().all(|c| c.is_ascii_hexdigit()) {
        let channel = |r: std::ops::Range<usize>| {
            u32::from_str_radix(&h[r], 16).unwrap_or(0)
        };
        let (r, g, b) = (channel(0..2), channel(2..4), channel(4..6));
        // Rec. 601 luma, scaled by 1000 to stay in integers.
        let luma = 299 * r + 587 * g + 114 * b;
        return if luma < 128_000 {
            Variant::Dark
        } else {
            Variant::Light
        };
    }
    let lower = name.to_lowercase();
    if LIGHT_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        Variant::Light
    } else {
        Variant::Dark
    }
}

/// What: Parse a Ghostty theme file's text into a [`Theme`].
///
/// Inputs:
/// - `name`: Theme name (becomes `Theme::name`).
/// - `text`: File contents.
///
/// Output:
/// - A theme with whatever colors the file declared; never fails, unknown
///   lines are skipped.
///
/// Details:
/// - Theme files use the same `key = value` syntax as the config; `palette`
///   lines carry an `index=color` value.
#[must_use]
pub fn parse_theme_text(name: &str, text: &str) -> Theme {
    let mut background = String::new();
    let mut foreground = String::new();
    let mut cursor_color = String::new();
    let mut selection_background = String::new();
    let mut palette = vec![String::new(); 16];

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();
        match key {
            "background" => background = value.to_string(),
            "foreground" => foreground = value.to_string(),
            "cursor-color" => cursor_color = value.to_string(),
            "selection-background" => selection_background = value.to_string(),
            "palette" => {
                if let Some((idx, color)) = value.split_once('=')
                    && let Ok(i) = idx.trim().parse::<usize>()
                    && i < 16
                {
                    palette[i] = color.trim().to_string();
                }
            }
            _ => {}
        }
    }

    let variant = classify_variant(name, &background);
    Theme {
        name: name.to_string(),
        variant,
        background,
        foreground,
        cursor_color,
        selection_background,
        palette,
    }
}

/// Locate and parse a theme by name from the platform theme directories.
#[must_use]
pub fn load_theme(platform: Platform, name: &str) -> Option<Theme> {
    let path = paths::theme_file(platform, name)?;
    let text = std::fs::read_to_string(&path)
        .map_err(|err| tracing::warn!(path = %path.display(), %err, "unreadable theme file"))
        .ok()?;
    Some(parse_theme_text(name, &text))
}

/// What: List installed theme names via the `ghostty` CLI.
///
/// Inputs: none.
///
/// Output:
/// - Names from `ghostty +list-themes --plain`, with the trailing
///   `(resources)` / `(user)` origin markers stripped; empty when the CLI
///   is unavailable.
#[must_use]
pub fn list_theme_names() -> Vec<String> {
    let Ok(output) = Command::new("ghostty")
        .args(["+list-themes", "--plain"])
        .output()
    else {
        tracing::warn!("could not run ghostty +list-themes");
        return Vec::new();
    };
    parse_theme_listing(&String::from_utf8_lossy(&output.stdout))
}

/// Parse the `+list-themes --plain` output (one name per line, optionally
/// suffixed with its origin).
fn parse_theme_listing(out: &str) -> Vec<String> {
    out.lines()
        .filter_map(|line| {
            let mut name = line.trim();
            for suffix in ["(resources)", "(user)"] {
                if let Some(stripped) = name.strip_suffix(suffix) {
                    name = stripped.trim_end();
                    break;
                }
            }
            if name.is_empty() {
                None
            } else {
                Some(name.to_string())
            }
        })
        .collect()
}
