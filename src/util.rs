//! Small shared helpers with no dependencies on application state.

use ratatui::style::Color;

/// What: Rank how well a theme or option name matches a query using fzf-style fuzzy matching.
///
/// Inputs:
/// - `name`: Candidate name to match against.
/// - `query`: Query string typed by the user.
/// - `matcher`: Reference to a `SkimMatcherV2` instance to reuse across calls.
///
/// Output:
/// - `Some(score)` if the query matches (higher is better); `None` when it does not match.
///
/// Details:
/// - An empty query never matches; callers treat that as "show everything".
#[must_use]
pub fn fuzzy_rank(
    name: &str,
    query: &str,
    matcher: &fuzzy_matcher::skim::SkimMatcherV2,
) -> Option<i64> {
    use fuzzy_matcher::FuzzyMatcher;

    if query.trim().is_empty() {
        return None;
    }
    matcher.fuzzy_match(name, query)
}

/// What: Parse a `#RRGGBB` (or bare `RRGGBB`) hex literal into a terminal color.
///
/// Inputs:
/// - `s`: Raw color text as it appears in a config or theme file.
///
/// Output:
/// - `Some(Color::Rgb)` for six-digit hex input; `None` otherwise.
///
/// Details:
/// - Used by the UI to render swatches next to color options; validation of
///   user input lives in the options layer and also accepts named colors.
#[must_use]
pub fn hex_to_color(s: &str) -> Option<Color> {
    let t = s.trim();
    let h = t.strip_prefix('#').unwrap_or(t);
    if h.len() == 6 && h.chars().all(|c| c.is_ascii_hexdigit()) {
        let r = u8::from_str_radix(&h[0..2], 16).ok()?;
        let g = u8::from_str_radix(&h[2..4], 16).ok()?;
        let b = u8::from_str_radix(&h[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    None
}

/// Format a unix timestamp as "YYYY-MM-DD HH:MM:SS" (UTC) without a date crate.
#[must_use]
pub fn ts_to_date(ts: Option<i64>) -> String {
    let Some(t) = ts else {
        return String::new();
    };
    if t < 0 {
        return t.to_string();
    }

    // Split into days and seconds-of-day
    let mut days = t / 86_400;
    let mut sod = t % 86_400; // 0..86399
    if sod < 0 {
        sod += 86_400;
        days -= 1;
    }

    let hour = u32::try_from(sod / 3600).unwrap_or(0);
    sod %= 3600;
    let minute = u32::try_from(sod / 60).unwrap_or(0);
    let second = u32::try_from(sod % 60).unwrap_or(0);

    let mut year: i32 = 1970;
    loop {
        let leap = is_leap(year);
        let diy = i64::from(if leap { 366 } else { 365 });
        if days >= diy {
            days -= diy;
            year += 1;
        } else {
            break;
        }
    }
    let leap = is_leap(year);
    let mut month: u32 = 1;
    let mdays = [
        31,
        if leap { 29 } else { 28 },
        31,
        30,
        31,
        30,
        31,
        31,
        30,
        31,
        30,
        31,
    ];
    for &len in &mdays {
        if days >= i64::from(len) {
            days -= i64::from(len);
            month += 1;
        } else {
            break;
        }
    }
    let day = u32::try_from(days + 1).unwrap_or(1);

    format!("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}")
}

fn is_leap(y: i32) -> bool {
    (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn util_hex_to_color_variants() {
        assert_eq!(hex_to_color("#ff0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(hex_to_color("1e1e2e"), Some(Color::Rgb(0x1e, 0x1e, 0x2e)));
        assert_eq!(hex_to_color("#fff"), None);
        assert_eq!(hex_to_color("not-a-color"), None);
    }

    #[test]
    fn util_fuzzy_rank_empty_query_never_matches() {
        let m = fuzzy_matcher::skim::SkimMatcherV2::default();
        assert!(fuzzy_rank("catppuccin-mocha", "", &m).is_none());
        assert!(fuzzy_rank("catppuccin-mocha", "moch", &m).is_some());
        assert!(fuzzy_rank("catppuccin-mocha", "zzz", &m).is_none());
    }

    #[test]
    fn util_ts_to_date_known_values() {
        assert_eq!(ts_to_date(Some(0)), "1970-01-01 00:00:00");
        assert_eq!(ts_to_date(Some(86_400)), "1970-01-02 00:00:00");
        assert_eq!(ts_to_date(Some(1_234_567_890)), "2009-02-13 23:31:30");
        assert_eq!(ts_to_date(None), "");
    }
}
