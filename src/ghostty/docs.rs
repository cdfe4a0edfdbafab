//! Per-option documentation from `ghostty +show-config --docs`.
//!
//! Fetching shells out to the CLI, so the result is cached as JSON under our
//! config dir and refreshed in the background after startup.

use std::collections::HashMap;
use std::path::PathBuf;
use std::process::Command;

use super::paths;

/// Option name to documentation text.
pub type DocsMap = HashMap<String, String>;

/// Location of the JSON docs cache.
#[must_use]
pub fn cache_path() -> PathBuf {
    paths::config_dir().join("option_docs.json")
}

/// What: Parse `ghostty +show-config --docs` output into name → doc text.
///
/// Inputs:
/// - `out`: Raw CLI stdout.
///
/// Output:
/// - One entry per option; repeated keys (repeatable options) keep the first
///   doc block, which is identical across occurrences.
///
/// Details:
/// - The format interleaves comment blocks with assignments: `# ` lines are
///   doc text, a bare `#` is a blank doc line, and a `key = value` line
///   closes the preceding block. Any other line discards the pending block.
#[must_use]
pub fn parse_docs(out: &str) -> DocsMap {
    let mut docs = DocsMap::new();
    let mut pending: Vec<&str> = Vec::new();

    for line in out.lines() {
        if let Some(text) = line.strip_prefix("# ") {
            pending.push(text);
        } else if line == "#" {
            pending.push("");
        } else if !line.starts_with('#') && line.contains('=') {
            let key = line
                .split_once('=')
                .map(|(k, _)| k.trim())
                .unwrap_or_default();
            let doc = pending.join("\n").trim().to_string();
            pending.clear();
            if !key.is_empty() {
                docs.entry(key.to_string()).or_insert(doc);
            }
        } else {
            pending.clear();
        }
    }
    docs
}

/// Run the CLI and parse its output; `None` when the CLI is unavailable.
#[must_use]
pub fn fetch() -> Option<DocsMap> {
    let output = Command::new("ghostty")
        .args(["+show-config", "--docs"])
        .output()
        .map_err(|err| tracing::warn!(%err, "could not run ghostty +show-config"))
        .ok()?;
    Some(parse_docs(&String::from_utf8_lossy(&output.stdout)))
}

/// Load the cached docs map, if a readable cache exists.
#[must_use]
pub fn load_cached() -> Option<DocsMap> {
    let text = std::fs::read_to_string(cache_path()).ok()?;
    serde_json::from_str(&text)
        .map_err(|err| tracing::warn!(%err, "discarding corrupt docs cache"))
        .ok()
}

/// Persist the docs map to the JSON cache. Failures are logged, never fatal.
pub fn save_cache(docs: &DocsMap) {
    let path = cache_path();
    match serde_json::to_string(docs) {
        Ok(json) => {
            if let Err(err) = crate::config::write_atomic(&path, &json) {
                tracing::warn!(%err, "could not write docs cache");
            }
        }
        Err(err) => tracing::warn!(%err, "could not serialize docs cache"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# The font families to use.
#
# You can generate the list of valid values using the CLI:
font-family = JetBrains Mono
font-family = Menlo

# Background color for the window.
background = #282c34
not a config line
orphan = value
";

    #[test]
    fn docs_parse_blocks_per_option() {
        let docs = parse_docs(SAMPLE);
        let font = docs.get("font-family").expect("font-family doc");
        assert!(font.starts_with("The font families to use."));
        assert!(font.contains("\n\n"));
        assert_eq!(
            docs.get("background").map(String::as_str),
            Some("Background color for the window.")
        );
        // The non-config line discarded the pending block.
        assert_eq!(docs.get("orphan").map(String::as_str), Some(""));
    }

    #[test]
    fn docs_repeated_key_keeps_first_block() {
        let docs = parse_docs("# doc\nkeybind = a\nkeybind = b\n");
        assert_eq!(docs.get("keybind").map(String::as_str), Some("doc"));
    }
}
