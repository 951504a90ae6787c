//! Identifier normalization for proto output.
//!
//! Word boundaries follow the usual host-language conventions: a lower→upper
//! transition, a letter↔digit transition, the end of an acronym (`JSONData` →
//! `JSON`, `Data`) and any of ` `, `_`, `-`, `.`.

/// Proto field name: two-character identifiers are lower-cased verbatim so
/// short acronyms (`ID`, `OK`) are not split, everything else is snake_case.
pub fn to_field_name(name: &str) -> String {
    if name.chars().count() == 2 {
        return name.to_lowercase();
    }
    to_snake_case(name)
}

/// Proto enum value name.
pub fn to_enum_value_name(name: &str) -> String {
    to_screaming_snake_case(name)
}

pub fn to_snake_case(name: &str) -> String {
    split_words(name)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}

pub fn to_screaming_snake_case(name: &str) -> String {
    split_words(name)
        .iter()
        .map(|w| w.to_uppercase())
        .collect::<Vec<_>>()
        .join("_")
}

fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '_' | '-' | '.')
}

fn split_words(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.trim().chars().collect();
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if is_separator(c) {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if let Some(prev) = current.chars().last() {
            let next = chars.get(i + 1).copied();
            let boundary = (prev.is_lowercase() && c.is_uppercase())
                || (prev.is_alphabetic() && c.is_numeric())
                || (prev.is_numeric() && c.is_alphabetic())
                || (prev.is_uppercase()
                    && c.is_uppercase()
                    && next.is_some_and(char::is_lowercase));
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}
