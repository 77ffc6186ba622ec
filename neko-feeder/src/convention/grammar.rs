//! Stem grammar shared by every convention
//!
//! ```text
//! stem   := main ( " " group )*
//! main   := field ( " - " field )*
//! group  := "[" tag ( "," tag )* "]" | "(" extra ")" | "{" details "}"
//! ```
//!
//! Groups are peeled from the end of the stem, so a field may contain
//! brackets as long as it is not followed only by groups.

use super::ConventionError;

/// Separator between main fields
pub const FIELD_SEPARATOR: &str = " - ";

/// Separator inside list fields (singers, composers, artists)
pub const LIST_SEPARATOR: &str = ", ";

/// A trailing group of the stem
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Group<'a> {
    /// `[A, B]`
    Tags(Vec<&'a str>),
    /// `(Key value)`
    Extra(&'a str),
    /// `{free text}`
    Details(&'a str),
}

/// Stem split into main fields and trailing groups, in stem order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitStem<'a> {
    pub fields: Vec<&'a str>,
    pub groups: Vec<Group<'a>>,
}

/// Split a stem into its main fields and trailing groups
pub fn split_stem(stem: &str) -> Result<SplitStem<'_>, ConventionError> {
    let mut rest = stem.trim();
    if rest.is_empty() {
        return Err(ConventionError::EmptyStem);
    }

    let mut groups = Vec::new();

    while let Some(close) = rest.chars().last() {
        let open = match close {
            ']' => '[',
            ')' => '(',
            '}' => '{',
            _ => break,
        };

        let start = rest
            .rfind(open)
            .ok_or_else(|| ConventionError::MalformedGroup(rest.to_string()))?;
        let before = &rest[..start];
        let inner = &rest[start + 1..rest.len() - 1];

        // A group must be detached from the main part and must not nest
        if !before.ends_with(' ') || inner.contains(close) {
            return Err(ConventionError::MalformedGroup(rest[start..].to_string()));
        }

        let inner = inner.trim();
        if inner.is_empty() {
            return Err(ConventionError::EmptyGroup);
        }

        groups.push(match open {
            '[' => Group::Tags(inner.split(',').map(str::trim).collect()),
            '(' => Group::Extra(inner),
            _ => Group::Details(inner),
        });

        rest = before.trim_end();
    }

    groups.reverse();

    let fields: Vec<&str> = rest.split(FIELD_SEPARATOR).map(str::trim).collect();
    if fields.iter().any(|f| f.is_empty()) {
        return Err(ConventionError::EmptyField);
    }

    Ok(SplitStem { fields, groups })
}

/// Split a list field, dropping empty entries
pub fn split_list(field: &str) -> Vec<String> {
    field
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
