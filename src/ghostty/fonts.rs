//! Installed monospace fonts, for picking `font-family` values.

use std::collections::BTreeMap;
use std::process::Command;

/// Families bundled with common systems, merged into every listing so the
/// picker is never empty when fontconfig is missing.
const FALLBACK_FONTS: &[&str] = &[
    "SF Mono",
    "Menlo",
    "Monaco",
    "Courier New",
    "JetBrains Mono",
    "Fira Code",
    "Source Code Pro",
    "Hack",
    "Inconsolata",
];

/// What: List installed monospace font families.
///
/// Inputs: none.
///
/// Output:
/// - Family names from `fc-list :spacing=mono family` plus the fallback set,
///   deduplicated and sorted case-insensitively. The fallbacks alone when
///   `fc-list` is unavailable.
#[must_use]
pub fn list_fonts() -> Vec<String> {
    let out = Command::new("fc-list")
        .args([":spacing=mono", "family"])
        .output()
        .map_err(|err| tracing::warn!(%err, "could not run fc-list"))
        .ok()
        .map(|o| String::from_utf8_lossy(&o.stdout).into_owned())
        .unwrap_or_default();
    parse_font_listing(&out)
}

/// Parse `fc-list` family output: one family per line, alternate names
/// comma-separated after the primary one.
fn parse_font_listing(out: &str) -> Vec<String> {
    let mut by_lower: BTreeMap<String, String> = BTreeMap::new();
    let names = out
        .lines()
        .filter_map(|line| line.split(',').next())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .chain(FALLBACK_FONTS.iter().copied());
    for name in names {
        by_lower
            .entry(name.to_ascii_lowercase())
            .or_insert_with(|| name.to_string());
    }
    by_lower.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fonts_parse_listing_dedupes_and_merges_fallbacks() {
        let fonts = parse_font_listing(
            "DejaVu Sans Mono,DejaVu Sans Mono Book\nJetBrains Mono\n\njetbrains mono\n",
        );
        assert!(fonts.contains(&"DejaVu Sans Mono".to_string()));
        // First spelling wins; the lowercase duplicate is dropped.
        assert_eq!(
            fonts.iter().filter(|f| f.eq_ignore_ascii_case("jetbrains mono")).count(),
            1
        );
        assert!(fonts.contains(&"JetBrains Mono".to_string()));
        assert!(fonts.contains(&"Hack".to_string()));
        let mut sorted = fonts.clone();
        sorted.sort_by_key(|f| f.to_ascii_lowercase());
        assert_eq!(fonts, sorted);
    }

    #[test]
    fn fonts_empty_listing_yields_the_fallback_set() {
        let fonts = parse_font_listing("");
        assert_eq!(fonts.len(), FALLBACK_FONTS.len());
        assert!(fonts.contains(&"Menlo".to_string()));
    }
}
