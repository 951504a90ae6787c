//! Enumerations built from typed integer constants.

use std::num::ParseIntError;

use serde::Serialize;

use crate::error::CatalogError;
use crate::naming::to_enum_value_name;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumValue {
    /// Display name (SCREAMING_SNAKE_CASE unless a naming strategy says otherwise).
    pub name: String,
    value: i64,
    #[serde(skip)]
    source_name: String,
}

impl EnumValue {
    /// Build a value from a constant's identifier and literal text.
    pub fn parse(source_name: &str, literal: &str) -> Result<Self, CatalogError> {
        let value =
            parse_int_literal(literal).map_err(|source| CatalogError::InvalidEnumLiteral {
                name: source_name.to_string(),
                literal: literal.to_string(),
                source,
            })?;
        Ok(Self {
            name: to_enum_value_name(source_name),
            value,
            source_name: source_name.to_string(),
        })
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// Identifier of the constant this value came from.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enum {
    pub name: String,
    values: Vec<EnumValue>,
    allow_alias: bool,
    missing_default: bool,
    has_gaps: bool,
}

impl Enum {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
            allow_alias: false,
            missing_default: true,
            has_gaps: false,
        }
    }

    /// Parse `literal` and append the resulting value.
    pub fn add_value(
        &mut self,
        source_name: &str,
        literal: &str,
    ) -> Result<&EnumValue, CatalogError> {
        let value = EnumValue::parse(source_name, literal)?;
        Ok(self.push_value(value))
    }

    pub(crate) fn push_value(&mut self, value: EnumValue) -> &EnumValue {
        self.values.push(value);
        &self.values[self.values.len() - 1]
    }

    /// Sort values by (value, name) and recompute the alias/default flags.
    ///
    /// Re-running on an already canonical enum is a no-op.
    pub fn canonicalize(&mut self) {
        self.values
            .sort_by(|a, b| a.value.cmp(&b.value).then_with(|| a.name.cmp(&b.name)));

        self.missing_default = true;
        self.allow_alias = false;
        self.has_gaps = false;

        let mut previous: Option<i64> = None;
        for v in &self.values {
            if v.value == 0 {
                self.missing_default = false;
            }
            if let Some(prev) = previous {
                if v.value == prev {
                    self.allow_alias = true;
                    // Legacy heuristic kept for compatibility; see DESIGN.md.
                    if v.value > prev.saturating_add(1) {
                        self.has_gaps = true;
                    }
                }
            }
            previous = Some(v.value);
        }
    }

    pub fn values(&self) -> &[EnumValue] {
        &self.values
    }

    pub fn allow_alias(&self) -> bool {
        self.allow_alias
    }

    /// No value equals zero; renderers synthesize a zero member.
    pub fn missing_default(&self) -> bool {
        self.missing_default
    }

    pub fn has_gaps(&self) -> bool {
        self.has_gaps
    }
}

/// Signed 64-bit integer with base detection: `0x`/`0X` hex, `0o`/`0O` or a
/// leading `0` octal, `0b`/`0B` binary, decimal otherwise. Underscores are
/// accepted between digits.
pub fn parse_int_literal(literal: &str) -> Result<i64, ParseIntError> {
    let s = literal.trim();
    let (sign, unsigned) = match s.as_bytes().first() {
        Some(b'-') => ("-", &s[1..]),
        Some(b'+') => ("", &s[1..]),
        _ => ("", s),
    };

    let lower = unsigned.to_ascii_lowercase();
    let (radix, digits) = if lower.starts_with("0x") {
        (16, &unsigned[2..])
    } else if lower.starts_with("0o") {
        (8, &unsigned[2..])
    } else if lower.starts_with("0b") {
        (2, &unsigned[2..])
    } else if unsigned.len() > 1 && unsigned.starts_with('0') {
        (8, &unsigned[1..])
    } else {
        (10, unsigned)
    };

    let digits = strip_digit_separators(digits);
    // a sign after the base prefix ("0x-1") must not parse
    let guard = if digits.starts_with(['+', '-']) { "+" } else { "" };
    i64::from_str_radix(&format!("{guard}{sign}{digits}"), radix)
}

/// Drop `_` separators that sit between two digits; anything else is left in
/// place so the parse rejects it.
fn strip_digit_separators(digits: &str) -> String {
    let valid = !digits.starts_with('_') && !digits.ends_with('_') && !digits.contains("__");
    if valid {
        digits.replace('_', "")
    } else {
        digits.to_string()
    }
}
