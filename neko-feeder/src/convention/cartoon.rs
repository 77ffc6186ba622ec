//! Cartoon convention: `Cartoon - LINK [- Title]`

use super::grammar::split_stem;
use super::tags::use_tag_name;
use super::{ConventionError, Convention, LinkCode, Trailer};

/// Fields of a cartoon file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartoonFields {
    pub title_cartoon: String,
    /// Song title, often omitted for theme songs
    pub title_music: Option<String>,
    pub link_number: Option<u32>,
    pub trailer: Trailer,
}

/// Parse a stem with the cartoon convention
pub fn parse(stem: &str) -> Result<CartoonFields, ConventionError> {
    let split = split_stem(stem)?;

    if !(2..=3).contains(&split.fields.len()) {
        return Err(ConventionError::FieldCount {
            convention: Convention::Cartoon,
            expected: "2 or 3",
            found: split.fields.len(),
        });
    }

    let link = LinkCode::parse(split.fields[1])?
        .ok_or_else(|| ConventionError::MissingLinkCode(split.fields[1].to_string()))?;

    let mut trailer = Trailer::from_groups(&split.groups, Convention::Cartoon.tag_table())?;
    trailer.tags.insert(use_tag_name(link.link_type));

    Ok(CartoonFields {
        title_cartoon: split.fields[0].to_string(),
        title_music: split.fields.get(2).map(|f| f.to_string()),
        link_number: link.number,
        trailer,
    })
}
