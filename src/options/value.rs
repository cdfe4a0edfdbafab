//! Typed option values and schema-driven validation.

use crate::schema::{OptionDef, ValueType};

/// A handful of named colors Ghostty accepts in place of hex literals.
///
/// Deliberately small: hex is the canonical form; names are a convenience.
pub const NAMED_COLORS: &[(&str, (u8, u8, u8))] = &[
    ("black", (0x00, 0x00, 0x00)),
    ("white", (0xff, 0xff, 0xff)),
    ("red", (0xff, 0x00, 0x00)),
    ("green", (0x00, 0x80, 0x00)),
    ("blue", (0x00, 0x00, 0xff)),
    ("yellow", (0xff, 0xff, 0x00)),
    ("cyan", (0x00, 0xff, 0xff)),
    ("magenta", (0xff, 0x00, 0xff)),
    ("gray", (0x80, 0x80, 0x80)),
    ("grey", (0x80, 0x80, 0x80)),
    ("silver", (0xc0, 0xc0, 0xc0)),
    ("maroon", (0x80, 0x00, 0x00)),
    ("olive", (0x80, 0x80, 0x00)),
    ("lime", (0x00, 0xff, 0x00)),
    ("teal", (0x00, 0x80, 0x80)),
    ("navy", (0x00, 0x00, 0x80)),
    ("purple", (0x80, 0x00, 0x80)),
    ("orange", (0xff, 0xa5, 0x00)),
    ("brown", (0xa5, 0x2a, 0x2a)),
    ("pink", (0xff, 0xc0, 0xcb)),
    ("gold", (0xff, 0xd7, 0x00)),
    ("salmon", (0xfa, 0x80, 0x72)),
    ("violet", (0xee, 0x82, 0xee)),
    ("coral", (0xff, 0x7f, 0x50)),
    ("crimson", (0xdc, 0x14, 0x3c)),
    ("indigo", (0x4b, 0x00, 0x82)),
    ("turquoise", (0x40, 0xe0, 0xd0)),
    ("lavender", (0xe6, 0xe6, 0xfa)),
];

/// Look up a named color's RGB triplet (case-insensitive).
#[must_use]
pub fn named_color(name: &str) -> Option<(u8, u8, u8)> {
    let lower = name.to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(n, _)| *n == lower)
        .map(|(_, rgb)| *rgb)
}

/// Tagged union of option values, discriminated by the schema's declared
/// value type. Consumers get compile-time exhaustiveness on every match.
#[derive(Clone, Debug, PartialEq)]
pub enum OptionValue {
    /// `true` / `false`.
    Bool(bool),
    /// Enum member, guaranteed to be one of the definition's members.
    Enum(String),
    /// Integer within the definition's range.
    Int(i64),
    /// Float within the definition's range.
    Float(f64),
    /// Free-form text (no embedded newline).
    Str(String),
    /// Color in `#rrggbb` or named form, as entered.
    Color(String),
}

impl OptionValue {
    /// What: Parse and validate raw input against an option definition.
    ///
    /// Inputs:
    /// - `def`: Schema definition supplying the type and constraints.
    /// - `raw`: User- or file-provided text.
    ///
    /// Output:
    /// - The typed value, or `Err(reason)` naming the violated constraint.
    ///
    /// Details:
    /// - bool accepts `true`/`false` case-insensitively; enum requires an
    ///   exact member; int/float must parse and satisfy min/max; color must
    ///   be six-digit hex or a recognized name; string rejects embedded
    ///   newlines and otherwise accepts anything.
    pub fn parse(def: &OptionDef, raw: &str) -> Result<Self, String> {
        let t = raw.trim();
        match def.value_type {
            ValueType::Bool => {
                if t.eq_ignore_ascii_case("true") {
                    Ok(Self::Bool(true))
                } else if t.eq_ignore_ascii_case("false") {
                    Ok(Self::Bool(false))
                } else {
                    Err("not a boolean (use true or false)".to_string())
                }
            }
            ValueType::Enum => {
                if def.enum_values.contains(&t) {
                    Ok(Self::Enum(t.to_string()))
                } else {
                    Err(format!(
                        "must be one of: {}",
                        def.enum_values.join(", ")
                    ))
                }
            }
            ValueType::Int => {
                let v: i64 = t.parse().map_err(|_| "not an integer".to_string())?;
                check_range(def, v as f64)?;
                Ok(Self::Int(v))
            }
            ValueType::Float => {
                let v: f64 = t.parse().map_err(|_| "not a number".to_string())?;
                if !v.is_finite() {
                    return Err("not a number".to_string());
                }
                check_range(def, v)?;
                Ok(Self::Float(v))
            }
            ValueType::Color => {
                let h = t.strip_prefix('#').unwrap_or(t);
                if h.len() == 6 && h.chars().all(|c| c.is_ascii_hexdigit()) {
                    Ok(Self::Color(t.to_string()))
                } else if named_color(t).is_some() {
                    Ok(Self::Color(t.to_string()))
                } else {
                    Err("not a color (use #RRGGBB or a named color)".to_string())
                }
            }
            ValueType::Str => {
                if raw.contains('\n') {
                    Err("must not contain newlines".to_string())
                } else {
                    Ok(Self::Str(raw.to_string()))
                }
            }
        }
    }

    /// Render the value in its on-disk string form.
    #[must_use]
    pub fn to_disk_string(&self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Int(v) => v.to_string(),
            Self::Float(v) => format!("{v}"),
            Self::Enum(s) | Self::Str(s) | Self::Color(s) => s.clone(),
        }
    }
}

/// Enforce the definition's inclusive min/max bounds.
fn check_range(def: &OptionDef, v: f64) -> Result<(), String> {
    match (def.min, def.max) {
        (Some(lo), _) if v < lo => Err(format!("must be at least {lo}")),
        (_, Some(hi)) if v > hi => Err(format!("must be at most {hi}")),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Platform, SchemaRegistry};

    fn def(name: &str) -> &'static OptionDef {
        SchemaRegistry::new(Platform::Linux)
            .lookup(name)
            .expect("known option")
    }

    #[test]
    fn value_bool_case_insensitive() {
        let d = def("cursor-style-blink");
        assert_eq!(OptionValue::parse(d, "TRUE"), Ok(OptionValue::Bool(true)));
        assert_eq!(OptionValue::parse(d, "false"), Ok(OptionValue::Bool(false)));
        assert!(OptionValue::parse(d, "yes").is_err());
    }

    #[test]
    fn value_int_rejects_non_numbers_and_out_of_range() {
        let d = def("font-size");
        assert_eq!(OptionValue::parse(d, "14"), Ok(OptionValue::Int(14)));
        assert_eq!(
            OptionValue::parse(d, "abc"),
            Err("not an integer".to_string())
        );
        assert_eq!(
            OptionValue::parse(d, "0"),
            Err("must be at least 1".to_string())
        );
        assert_eq!(
            OptionValue::parse(d, "999"),
            Err("must be at most 256".to_string())
        );
    }

    #[test]
    fn value_float_range() {
        let d = def("background-opacity");
        assert_eq!(OptionValue::parse(d, "0.85"), Ok(OptionValue::Float(0.85)));
        assert!(OptionValue::parse(d, "1.5").is_err());
        assert!(OptionValue::parse(d, "NaN").is_err());
    }

    #[test]
    fn value_enum_exact_member() {
        let d = def("cursor-style");
        assert_eq!(
            OptionValue::parse(d, "bar"),
            Ok(OptionValue::Enum("bar".to_string()))
        );
        let err = OptionValue::parse(d, "wedge").expect_err("invalid member");
        assert!(err.contains("block"));
    }

    #[test]
    fn value_color_hex_and_named() {
        let d = def("background");
        assert!(OptionValue::parse(d, "#1e1e2e").is_ok());
        assert!(OptionValue::parse(d, "1e1e2e").is_ok());
        assert!(OptionValue::parse(d, "Navy").is_ok());
        assert!(OptionValue::parse(d, "#12").is_err());
        assert!(OptionValue::parse(d, "blurple").is_err());
    }

    #[test]
    fn value_string_rejects_newlines() {
        let d = def("title");
        assert!(OptionValue::parse(d, "my # title").is_ok());
        assert!(OptionValue::parse(d, "two\nlines").is_err());
    }

    #[test]
    fn value_disk_form_is_normalized() {
        let d = def("cursor-style-blink");
        let v = OptionValue::parse(d, "TRUE").expect("valid");
        assert_eq!(v.to_disk_string(), "true");
        let d = def("background-opacity");
        let v = OptionValue::parse(d, "1.0").expect("valid");
        assert_eq!(v.to_disk_string(), "1");
    }
}
