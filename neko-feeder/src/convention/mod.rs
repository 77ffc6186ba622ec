//! Karaoke file name conventions
//!
//! A convention is a naming grammar encoding song metadata in the file
//! stem. Three conventions exist:
//! - **Music**: `Title - Singers [- Composers]`
//! - **Anime**: `Anime - LINK - Title` (also used for live action and games)
//! - **Cartoon**: `Cartoon - LINK [- Title]`
//!
//! followed by optional `[tags]`, `(extras)` and `{details}` groups. See
//! [`grammar`] for the shared syntax.

pub mod anime;
pub mod cartoon;
pub mod extras;
pub mod grammar;
pub mod music;
pub mod tags;

use std::fmt;
use thiserror::Error;

pub use anime::AnimeFields;
pub use cartoon::CartoonFields;
pub use extras::{Extras, LinkCode};
pub use music::MusicFields;
pub use tags::{TagCategory, TagSet, TagSpec};

use grammar::Group;

/// File name does not follow a convention
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConventionError {
    #[error("Empty file name")]
    EmptyStem,

    /// Bracket group not separated by a space, nested or unopened
    #[error("Malformed group: {0}")]
    MalformedGroup(String),

    #[error("Empty group")]
    EmptyGroup,

    #[error("{convention} convention expects {expected} fields, found {found}")]
    FieldCount {
        convention: Convention,
        expected: &'static str,
        found: usize,
    },

    #[error("Empty field")]
    EmptyField,

    /// Link code where the convention does not allow one
    #[error("Unexpected link code: {0}")]
    UnexpectedLinkCode(String),

    /// Field that should be a link code is not one
    #[error("Expected link code, found: {0}")]
    MissingLinkCode(String),

    #[error("Unknown tag: {0}")]
    UnknownTag(String),

    #[error("Unknown extra: {0}")]
    UnknownExtra(String),

    #[error("Duplicate extra: {0}")]
    DuplicateExtra(&'static str),

    #[error("Details given more than once")]
    DuplicateDetails,

    #[error("Invalid ordinal: {0}")]
    InvalidOrdinal(String),
}

/// A file naming convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Convention {
    Music,
    Anime,
    Cartoon,
}

impl Convention {
    /// Order in which conventions are tried when the directory does not tell
    pub const TRIAL_ORDER: [Convention; 3] =
        [Convention::Music, Convention::Anime, Convention::Cartoon];

    /// Parse a file stem with this convention
    pub fn parse(self, stem: &str) -> Result<ParsedSong, ConventionError> {
        match self {
            Convention::Music => music::parse(stem).map(ParsedSong::Music),
            Convention::Anime => anime::parse(stem).map(ParsedSong::Anime),
            Convention::Cartoon => cartoon::parse(stem).map(ParsedSong::Cartoon),
        }
    }

    /// Tag table of the convention
    pub fn tag_table(self) -> &'static [TagSpec] {
        match self {
            Convention::Music => tags::MUSIC_TAGS,
            Convention::Anime | Convention::Cartoon => tags::ANIME_TAGS,
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Convention::Music => "Music",
            Convention::Anime => "Anime",
            Convention::Cartoon => "Cartoon",
        };
        f.write_str(name)
    }
}

/// Result of a successful parse, one variant per convention
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedSong {
    Music(MusicFields),
    Anime(AnimeFields),
    Cartoon(CartoonFields),
}

impl ParsedSong {
    pub fn convention(&self) -> Convention {
        match self {
            ParsedSong::Music(_) => Convention::Music,
            ParsedSong::Anime(_) => Convention::Anime,
            ParsedSong::Cartoon(_) => Convention::Cartoon,
        }
    }

    pub fn trailer(&self) -> &Trailer {
        match self {
            ParsedSong::Music(fields) => &fields.trailer,
            ParsedSong::Anime(fields) => &fields.trailer,
            ParsedSong::Cartoon(fields) => &fields.trailer,
        }
    }
}

/// Everything carried by the trailing groups of a stem
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trailer {
    pub tags: TagSet,
    pub extras: Extras,
    /// Free text of the `{...}` group, empty when absent
    pub details: String,
}

impl Trailer {
    /// Interpret trailing groups against a convention's tag table
    ///
    /// `Use` tags cannot be written in a tag group: they come from the
    /// link code only.
    pub(crate) fn from_groups(
        groups: &[Group<'_>],
        table: &'static [TagSpec],
    ) -> Result<Self, ConventionError> {
        let mut trailer = Trailer::default();
        let mut has_details = false;

        for group in groups {
            match group {
                Group::Tags(names) => {
                    for name in names {
                        let spec = tags::find_tag(table, name)
                            .filter(|spec| spec.category != TagCategory::Use)
                            .ok_or_else(|| ConventionError::UnknownTag(name.to_string()))?;
                        trailer.tags.insert(spec.name);
                    }
                }
                Group::Extra(raw) => trailer.extras.apply(raw)?,
                Group::Details(text) => {
                    if has_details {
                        return Err(ConventionError::DuplicateDetails);
                    }
                    has_details = true;
                    trailer.details = text.to_string();
                }
            }
        }

        Ok(trailer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailer_from_groups() {
        let groups = vec![
            Group::Tags(vec!["SPOIL", "LONG"]),
            Group::Extra("Version TV"),
            Group::Details("Sung live"),
        ];
        let trailer = Trailer::from_groups(&groups, tags::MUSIC_TAGS).unwrap();

        assert!(trailer.tags.is_set("SPOIL"));
        assert!(trailer.tags.is_set("LONG"));
        assert_eq!(trailer.extras.version.as_deref(), Some("TV"));
        assert_eq!(trailer.details, "Sung live");
    }

    #[test]
    fn test_use_tag_rejected_in_group() {
        let groups = vec![Group::Tags(vec!["OP"])];
        assert_eq!(
            Trailer::from_groups(&groups, tags::ANIME_TAGS),
            Err(ConventionError::UnknownTag("OP".to_string()))
        );
    }

    #[test]
    fn test_details_only_once() {
        let groups = vec![Group::Details("a"), Group::Details("b")];
        assert_eq!(
            Trailer::from_groups(&groups, tags::MUSIC_TAGS),
            Err(ConventionError::DuplicateDetails)
        );
    }

    #[test]
    fn test_parse_dispatches_to_variant() {
        let parsed = Convention::Music.parse("Song - Singer").unwrap();
        assert_eq!(parsed.convention(), Convention::Music);

        let parsed = Convention::Anime.parse("Naruto - OP1 - Haruka Kanata").unwrap();
        assert_eq!(parsed.convention(), Convention::Anime);

        let parsed = Convention::Cartoon.parse("Totoro - ED").unwrap();
        assert_eq!(parsed.convention(), Convention::Cartoon);
    }
}
