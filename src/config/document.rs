//! Ordered, roundtrip-safe model of a Ghostty config file.
//!
//! The document is an ordered sequence of [`Entry`] values (insertion order is
//! file order and load-bearing) plus a derived key index. Parsing never fails:
//! any line that cannot be classified degrades to `Entry::Unknown` and is
//! preserved verbatim, so the model can represent arbitrary input.

use std::collections::HashMap;

use super::entry::{Entry, KeyValueEntry};

/// Parsed config file preserving comments, blanks, ordering, and unknown
/// directives exactly as written.
#[derive(Clone, Debug, Default)]
pub struct Document {
    entries: Vec<Entry>,
    /// Key name -> indices of its KeyValue entries, in file order.
    index: HashMap<String, Vec<usize>>,
    /// Whether the source text ended with a newline.
    ends_with_newline: bool,
}

/// Accept `[A-Za-z0-9_-]+` as a key name, matching Ghostty's option names.
fn is_key_name(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Strip one layer of matching single or double quotes.
fn unquote(v: &str) -> &str {
    if v.len() >= 2
        && ((v.starts_with('"') && v.ends_with('"')) || (v.starts_with('\'') && v.ends_with('\'')))
    {
        &v[1..v.len() - 1]
    } else {
        v
    }
}

impl Document {
    /// What: Parse config text into a document without consulting any schema.
    ///
    /// Inputs:
    /// - `text`: Full config file contents.
    ///
    /// Output:
    /// - A [`Document`] that serializes back to `text` byte-for-byte.
    ///
    /// Details:
    /// - Trailing inline comments are never split off in this mode; use
    ///   [`Document::parse_with`] with a schema-backed predicate for that.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::parse_with(text, |_| false)
    }

    /// What: Parse config text, capturing trailing `#` comments for keys the
    /// predicate approves.
    ///
    /// Inputs:
    /// - `text`: Full config file contents.
    /// - `capture_trailing`: Returns `true` for keys whose value type cannot
    ///   itself contain `#` (so an unquoted trailing `#...` is a comment).
    ///
    /// Output:
    /// - A [`Document`]; `serialize()` reproduces `text` exactly while no
    ///   entry has been mutated.
    ///
    /// Details:
    /// - Classification per line: whitespace-only -> Blank; leading `#` ->
    ///   Comment; first `=` with a well-formed key on the left -> KeyValue;
    ///   anything else -> Unknown. Never fails.
    pub fn parse_with(text: &str, capture_trailing: impl Fn(&str) -> bool) -> Self {
        let mut doc = Self::default();
        if text.is_empty() {
            return doc;
        }
        let mut lines: Vec<&str> = text.split('\n').collect();
        if lines.last() == Some(&"") {
            lines.pop();
            doc.ends_with_newline = true;
        }
        for line in lines {
            doc.entries.push(classify(line, &capture_trailing));
        }
        doc.rebuild_index();
        doc
    }

    /// Serialize the document back to config text.
    ///
    /// Untouched entries reproduce their source lines exactly; the trailing
    /// newline is restored only if the source had one (new documents always
    /// get one when non-empty).
    #[must_use]
    pub fn serialize(&self) -> String {
        if self.entries.is_empty() {
            return String::new();
        }
        let mut out = self
            .entries
            .iter()
            .map(Entry::render)
            .collect::<Vec<_>>()
            .join("\n");
        if self.ends_with_newline {
            out.push('\n');
        }
        out
    }

    /// All raw values for `key` in file order (repeatable keys supported).
    #[must_use]
    pub fn get(&self, key: &str) -> Vec<&str> {
        self.index
            .get(key)
            .map(|idxs| {
                idxs.iter()
                    .filter_map(|&i| match &self.entries[i] {
                        Entry::KeyValue(kv) => Some(kv.raw_value.as_str()),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The last occurrence of `key`, which is the one Ghostty honors for
    /// non-repeatable options.
    #[must_use]
    pub fn get_last(&self, key: &str) -> Option<&str> {
        self.get(key).last().copied()
    }

    /// Whether `key` appears anywhere in the document.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// What: Set `key` to `value`, touching as little of the document as possible.
    ///
    /// Inputs:
    /// - `key`: Option name.
    /// - `value`: New raw value in its on-disk string form.
    ///
    /// Output:
    /// - None (mutates the document in place).
    ///
    /// Details:
    /// - An existing key is rewritten in place at its original line position:
    ///   the *last* occurrence, since that is the one Ghostty applies.
    /// - An absent key is appended after the last KeyValue entry, before any
    ///   trailing blank lines. No unrelated line is modified either way.
    pub fn set(&mut self, key: &str, value: &str) {
        if let Some(&idx) = self.index.get(key).and_then(|v| v.last()) {
            if let Entry::KeyValue(kv) = &mut self.entries[idx] {
                kv.set_value(value);
            }
            return;
        }
        let entry = Entry::KeyValue(KeyValueEntry::new(key.to_string(), value.to_string()));
        let pos = self.append_position();
        self.entries.insert(pos, entry);
        if self.entries.len() == 1 {
            self.ends_with_newline = true;
        }
        self.rebuild_index();
    }

    /// What: Replace every occurrence of a repeatable `key` with `values`.
    ///
    /// Inputs:
    /// - `key`: Repeatable option name (e.g. `palette`, `font-family`).
    /// - `values`: New values, in order.
    ///
    /// Output:
    /// - None (mutates the document in place).
    ///
    /// Details:
    /// - Existing occurrences are rewritten pairwise in place; surplus old
    ///   entries are removed; surplus new values are inserted right after the
    ///   last original occurrence (or appended when the key was absent).
    pub fn set_all(&mut self, key: &str, values: &[&str]) {
        let positions: Vec<usize> = self.index.get(key).cloned().unwrap_or_default();
        let paired = positions.len().min(values.len());
        for (&idx, &val) in positions.iter().zip(values.iter()) {
            if let Entry::KeyValue(kv) = &mut self.entries[idx] {
                kv.set_value(val);
            }
        }
        if positions.len() > paired {
            // Remove surplus occurrences from the back to keep indices stable.
            for &idx in positions[paired..].iter().rev() {
                self.entries.remove(idx);
            }
        } else if values.len() > paired {
            let mut at = positions
                .last()
                .map_or_else(|| self.append_position(), |&last| last + 1);
            for &val in &values[paired..] {
                let entry =
                    Entry::KeyValue(KeyValueEntry::new(key.to_string(), val.to_string()));
                self.entries.insert(at, entry);
                at += 1;
            }
            if !self.entries.is_empty() && !self.ends_with_newline && positions.is_empty() {
                self.ends_with_newline = true;
            }
        }
        self.rebuild_index();
    }

    /// Remove every KeyValue entry for `key`. Other entries are untouched.
    pub fn remove(&mut self, key: &str) {
        let before = self.entries.len();
        self.entries
            .retain(|e| e.key().is_none_or(|k| k != key));
        if self.entries.len() != before {
            self.rebuild_index();
        }
    }

    /// All entries in file order (read-only).
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Keys present in the document, deduplicated, in no particular order.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.index.keys().map(String::as_str).collect()
    }

    /// Index at which a brand-new KeyValue entry should be inserted: right
    /// after the last existing KeyValue entry, else before trailing blanks.
    fn append_position(&self) -> usize {
        let last_kv = self
            .entries
            .iter()
            .rposition(|e| matches!(e, Entry::KeyValue(_)));
        if let Some(i) = last_kv {
            return i + 1;
        }
        let trailing_blanks = self
            .entries
            .iter()
            .rev()
            .take_while(|e| matches!(e, Entry::Blank { .. }))
            .count();
        self.entries.len() - trailing_blanks
    }

    fn rebuild_index(&mut self) {
        self.index.clear();
        for (i, e) in self.entries.iter().enumerate() {
            if let Entry::KeyValue(kv) = e {
                self.index.entry(kv.key.clone()).or_default().push(i);
            }
        }
    }
}

/// Classify one physical line into an [`Entry`].
fn classify(line: &str, capture_trailing: &impl Fn(&str) -> bool) -> Entry {
    let stripped = line.trim();
    if stripped.is_empty() {
        return Entry::Blank {
            raw: line.to_string(),
        };
    }
    if stripped.starts_with('#') {
        return Entry::Comment {
            raw: line.to_string(),
        };
    }
    let Some(eq) = stripped.find('=') else {
        return Entry::Unknown {
            raw: line.to_string(),
        };
    };
    let key = stripped[..eq].trim();
    if !is_key_name(key) {
        return Entry::Unknown {
            raw: line.to_string(),
        };
    }
    let mut value = stripped[eq + 1..].trim();
    let mut trailing = None;
    // Quoted values keep '#' literal; only unquoted values of hash-free types
    // can carry a trailing comment.
    if !value.starts_with('"') && !value.starts_with('\'') && capture_trailing(key) {
        // A leading '#' belongs to a color literal; search after the first char.
        let hash = if let Some(stripped) = value.strip_prefix('#') {
            stripped.find('#').map(|j| j + 1)
        } else {
            value.find('#')
        };
        if let Some(h) = hash {
            trailing = Some(value[h + 1..].trim().to_string());
            value = value[..h].trim();
        }
    }
    Entry::KeyValue(KeyValueEntry::from_source(
        key.to_string(),
        unquote(value).to_string(),
        trailing,
        line.to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "# Ghostty config\n\nfont-size = 12\n# my comment\nbackground = #1e1e2e\nfont-family = JetBrains Mono\nfont-family = Menlo\n???bogus line\n";

    #[test]
    fn document_roundtrip_is_exact() {
        let doc = Document::parse(SAMPLE);
        assert_eq!(doc.serialize(), SAMPLE);
    }

    #[test]
    fn document_roundtrip_without_trailing_newline() {
        let text = "font-size = 12\nbackground=#000000";
        let doc = Document::parse(text);
        assert_eq!(doc.serialize(), text);
    }

    #[test]
    fn document_roundtrip_preserves_odd_whitespace() {
        let text = "  font-size   =   12  \n\t\n#comment\n";
        let doc = Document::parse(text);
        assert_eq!(doc.serialize(), text);
    }

    #[test]
    fn document_empty_text_roundtrips() {
        assert_eq!(Document::parse("").serialize(), "");
        assert_eq!(Document::parse("\n").serialize(), "\n");
    }

    #[test]
    fn document_unparseable_lines_become_unknown() {
        let doc = Document::parse("???bogus line\n= no key\n-bad key! = x\n");
        assert!(doc
            .entries()
            .iter()
            .all(|e| matches!(e, Entry::Unknown { .. })));
    }

    #[test]
    fn document_get_supports_repeatable_keys_in_order() {
        let doc = Document::parse(SAMPLE);
        assert_eq!(doc.get("font-family"), vec!["JetBrains Mono", "Menlo"]);
        assert_eq!(doc.get_last("font-size"), Some("12"));
        assert!(doc.get("missing").is_empty());
    }

    #[test]
    fn document_set_rewrites_in_place_minimal_diff() {
        let mut doc = Document::parse(SAMPLE);
        doc.set("font-size", "14");
        let out = doc.serialize();
        let before: Vec<&str> = SAMPLE.lines().collect();
        let after: Vec<&str> = out.lines().collect();
        assert_eq!(before.len(), after.len());
        for (b, a) in before.iter().zip(after.iter()) {
            if b.contains("font-size") {
                assert_eq!(*a, "font-size = 14");
            } else {
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn document_set_rewrites_last_duplicate() {
        let mut doc = Document::parse("theme = nord\ntheme = dracula\n");
        doc.set("theme", "catppuccin-mocha");
        assert_eq!(
            doc.serialize(),
            "theme = nord\ntheme = catppuccin-mocha\n"
        );
    }

    #[test]
    fn document_set_appends_after_last_keyvalue_before_trailing_blanks() {
        let mut doc = Document::parse("font-size = 12\n\n# trailing comment\n\n");
        doc.set("theme", "nord");
        // Appended after the comment block would disturb trailing blanks; the
        // entry lands after the last key/value line.
        assert_eq!(
            doc.serialize(),
            "font-size = 12\ntheme = nord\n\n# trailing comment\n\n"
        );
    }

    #[test]
    fn document_set_on_empty_document() {
        let mut doc = Document::parse("");
        doc.set("theme", "nord");
        assert_eq!(doc.serialize(), "theme = nord\n");
    }

    #[test]
    fn document_remove_only_touches_named_key() {
        let mut doc = Document::parse(SAMPLE);
        doc.remove("font-family");
        let out = doc.serialize();
        assert!(!out.contains("font-family"));
        assert!(out.contains("# my comment"));
        assert!(out.contains("???bogus line"));
    }

    #[test]
    fn document_set_all_pairwise_then_insert_and_trim() {
        let mut doc = Document::parse("palette = 0=#000000\npalette = 1=#111111\n");
        doc.set_all("palette", &["0=#000001", "1=#111112", "2=#222222"]);
        assert_eq!(
            doc.serialize(),
            "palette = 0=#000001\npalette = 1=#111112\npalette = 2=#222222\n"
        );
        doc.set_all("palette", &["0=#0a0a0a"]);
        assert_eq!(doc.serialize(), "palette = 0=#0a0a0a\n");
    }

    #[test]
    fn document_trailing_comment_captured_only_when_allowed() {
        let doc = Document::parse_with("font-size = 12 # pts\n", |_| true);
        match &doc.entries()[0] {
            Entry::KeyValue(kv) => {
                assert_eq!(kv.raw_value, "12");
                assert_eq!(kv.trailing_comment.as_deref(), Some("pts"));
            }
            other => panic!("expected key/value, got {other:?}"),
        }
        // Same line parsed for a string-typed key keeps the hash in the value.
        let doc = Document::parse_with("window-title = build # 7\n", |_| false);
        match &doc.entries()[0] {
            Entry::KeyValue(kv) => {
                assert_eq!(kv.raw_value, "build # 7");
                assert!(kv.trailing_comment.is_none());
            }
            other => panic!("expected key/value, got {other:?}"),
        }
    }

    #[test]
    fn document_color_hash_not_treated_as_comment() {
        let doc = Document::parse_with("background = #1e1e2e\n", |_| true);
        match &doc.entries()[0] {
            Entry::KeyValue(kv) => {
                assert_eq!(kv.raw_value, "#1e1e2e");
                assert!(kv.trailing_comment.is_none());
            }
            other => panic!("expected key/value, got {other:?}"),
        }
        // A hash after the color is a comment.
        let doc = Document::parse_with("background = #1e1e2e # dark\n", |_| true);
        match &doc.entries()[0] {
            Entry::KeyValue(kv) => {
                assert_eq!(kv.raw_value, "#1e1e2e");
                assert_eq!(kv.trailing_comment.as_deref(), Some("dark"));
            }
            other => panic!("expected key/value, got {other:?}"),
        }
    }

    #[test]
    fn document_quoted_values_are_unquoted_but_roundtrip() {
        let text = "font-family = \" SF Mono \"\n";
        let doc = Document::parse(text);
        assert_eq!(doc.get_last("font-family"), Some(" SF Mono "));
        assert_eq!(doc.serialize(), text);
    }
}
