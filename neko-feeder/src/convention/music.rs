//! Music convention: `Title - Singers [- Composers]`

use super::grammar::{split_list, split_stem};
use super::{ConventionError, Convention, LinkCode, Trailer};

/// Fields of a music file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MusicFields {
    pub title_music: String,
    pub singers: Vec<String>,
    pub composers: Vec<String>,
    pub trailer: Trailer,
}

/// Parse a stem with the music convention
///
/// No main field may be a link code: such names belong to the anime or
/// cartoon conventions.
pub fn parse(stem: &str) -> Result<MusicFields, ConventionError> {
    let split = split_stem(stem)?;

    if !(2..=3).contains(&split.fields.len()) {
        return Err(ConventionError::FieldCount {
            convention: Convention::Music,
            expected: "2 or 3",
            found: split.fields.len(),
        });
    }

    for field in &split.fields {
        if LinkCode::parse(field)?.is_some() {
            return Err(ConventionError::UnexpectedLinkCode(field.to_string()));
        }
    }

    let trailer = Trailer::from_groups(&split.groups, Convention::Music.tag_table())?;

    Ok(MusicFields {
        title_music: split.fields[0].to_string(),
        singers: split_list(split.fields[1]),
        composers: split.fields.get(2).map(|f| split_list(f)).unwrap_or_default(),
        trailer,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_and_singers() {
        let fields = parse("Haruka Kanata - Asian Kung-Fu Generation").unwrap();
        assert_eq!(fields.title_music, "Haruka Kanata");
        assert_eq!(fields.singers, vec!["Asian Kung-Fu Generation"]);
        assert!(fields.composers.is_empty());
    }

    #[test]
    fn test_composers_and_trailer() {
        let fields = parse(
            "Tank! - Seatbelts, Mai Yamane - Yoko Kanno [FULL] (OP1 Cowboy Bebop)",
        )
        .unwrap();
        assert_eq!(fields.singers, vec!["Seatbelts", "Mai Yamane"]);
        assert_eq!(fields.composers, vec!["Yoko Kanno"]);
        assert!(fields.trailer.tags.is_set("FULL"));
        assert_eq!(fields.trailer.extras.opening.as_deref(), Some("Cowboy Bebop"));
        assert_eq!(fields.trailer.extras.opening_nbr, Some(1));
    }

    #[test]
    fn test_field_count() {
        assert!(matches!(
            parse("Lonely title"),
            Err(ConventionError::FieldCount { found: 1, .. })
        ));
        assert!(matches!(
            parse("A - B - C - D"),
            Err(ConventionError::FieldCount { found: 4, .. })
        ));
    }

    #[test]
    fn test_link_code_rejected() {
        assert_eq!(
            parse("Naruto - OP1 - Haruka Kanata"),
            Err(ConventionError::UnexpectedLinkCode("OP1".to_string()))
        );
    }

    #[test]
    fn test_unknown_tag() {
        assert_eq!(
            parse("Song - Singer [KARAOKE]"),
            Err(ConventionError::UnknownTag("KARAOKE".to_string()))
        );
    }
}
