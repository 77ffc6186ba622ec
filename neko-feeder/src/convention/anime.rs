//! Anime convention: `Anime - LINK - Title`
//!
//! Also used for live action and game songs; the work type then comes from
//! the directory the file lives in.

use super::grammar::split_stem;
use super::tags::use_tag_name;
use super::{ConventionError, Convention, LinkCode, Trailer};

/// Fields of an anime file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimeFields {
    pub title_anime: String,
    pub title_music: String,
    /// Ordinal of the opening or ending
    pub link_number: Option<u32>,
    /// Tags, including the `Use` flag raised by the link code
    pub trailer: Trailer,
}

/// Parse a stem with the anime convention
pub fn parse(stem: &str) -> Result<AnimeFields, ConventionError> {
    let split = split_stem(stem)?;

    if split.fields.len() != 3 {
        return Err(ConventionError::FieldCount {
            convention: Convention::Anime,
            expected: "3",
            found: split.fields.len(),
        });
    }

    let link = LinkCode::parse(split.fields[1])?
        .ok_or_else(|| ConventionError::MissingLinkCode(split.fields[1].to_string()))?;

    let mut trailer = Trailer::from_groups(&split.groups, Convention::Anime.tag_table())?;
    trailer.tags.insert(use_tag_name(link.link_type));

    Ok(AnimeFields {
        title_anime: split.fields[0].to_string(),
        title_music: split.fields[2].to_string(),
        link_number: link.number,
        trailer,
    })
}
