//! A single physical line of the Ghostty config file.

/// What: One parsed line of the config document.
///
/// - Input: Produced by [`crate::config::Document::parse`] line classification.
/// - Output: Consumed by serialization and by the option store's commit path.
/// - Details: Every variant that can stay untouched keeps its original source
///   text so an unedited document serializes byte-for-byte.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    /// A `key = value` line, possibly with a captured trailing comment.
    KeyValue(KeyValueEntry),
    /// A full-line `#` comment, stored verbatim.
    Comment {
        /// Original line text including the `#` marker and any indentation.
        raw: String,
    },
    /// An empty or whitespace-only line, stored verbatim.
    Blank {
        /// Original line text (may contain whitespace).
        raw: String,
    },
    /// A line that could not be classified. Preserved verbatim, never mutated.
    Unknown {
        /// Original line text.
        raw: String,
    },
}

/// A `key = value` entry with enough provenance for exact roundtrips.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyValueEntry {
    /// Option name as written in the file (trimmed).
    pub key: String,
    /// Value text after the first `=`, trimmed, quotes stripped.
    pub raw_value: String,
    /// Trailing inline comment text (without the `#`), when captured.
    pub trailing_comment: Option<String>,
    /// Original source line; `None` once the entry is mutated or was appended.
    raw: Option<String>,
}

impl KeyValueEntry {
    /// Build an entry freshly parsed from `raw` source text.
    pub(crate) fn from_source(
        key: String,
        raw_value: String,
        trailing_comment: Option<String>,
        raw: String,
    ) -> Self {
        Self {
            key,
            raw_value,
            trailing_comment,
            raw: Some(raw),
        }
    }

    /// Build a brand-new entry that has no source line.
    pub(crate) fn new(key: String, raw_value: String) -> Self {
        Self {
            key,
            raw_value,
            trailing_comment: None,
            raw: None,
        }
    }

    /// Whether this entry still serializes to its original source line.
    #[must_use]
    pub fn is_pristine(&self) -> bool {
        self.raw.is_some()
    }

    /// Replace the value, discarding the stored source line so serialization
    /// re-renders this entry canonically. The trailing comment survives.
    pub(crate) fn set_value(&mut self, value: &str) {
        self.raw_value = value.to_string();
        self.raw = None;
    }

    /// Render this entry to one line of config text.
    ///
    /// Pristine entries reproduce their source byte-for-byte; mutated or new
    /// entries render canonically as `key = value`, quoting values that are
    /// empty or carry leading/trailing whitespace (as Ghostty expects).
    #[must_use]
    pub fn render(&self) -> String {
        if let Some(raw) = &self.raw {
            return raw.clone();
        }
        let value = if self.raw_value.is_empty() || self.raw_value != self.raw_value.trim() {
            format!("\"{}\"", self.raw_value)
        } else {
            self.raw_value.clone()
        };
        match &self.trailing_comment {
            Some(c) => format!("{} = {} # {}", self.key, value, c),
            None => format!("{} = {}", self.key, value),
        }
    }
}

impl Entry {
    /// Render this entry back to a single line of text.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::KeyValue(kv) => kv.render(),
            Self::Comment { raw } | Self::Blank { raw } | Self::Unknown { raw } => raw.clone(),
        }
    }

    /// The option key when this is a key/value entry.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::KeyValue(kv) => Some(kv.key.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_pristine_renders_source_exactly() {
        let kv = KeyValueEntry::from_source(
            "font-size".into(),
            "12".into(),
            None,
            "font-size=12   ".into(),
        );
        assert!(kv.is_pristine());
        assert_eq!(kv.render(), "font-size=12   ");
    }

    #[test]
    fn entry_mutation_renders_canonically_and_keeps_comment() {
        let mut kv = KeyValueEntry::from_source(
            "font-size".into(),
            "12".into(),
            Some("pts".into()),
            "font-size = 12 # pts".into(),
        );
        kv.set_value("14");
        assert!(!kv.is_pristine());
        assert_eq!(kv.render(), "font-size = 14 # pts");
    }

    #[test]
    fn entry_quotes_whitespace_and_empty_values() {
        let mut kv = KeyValueEntry::new("font-family".into(), String::new());
        assert_eq!(kv.render(), "font-family = \"\"");
        kv.set_value(" JetBrains Mono ");
        assert_eq!(kv.render(), "font-family = \" JetBrains Mono \"");
    }
}
