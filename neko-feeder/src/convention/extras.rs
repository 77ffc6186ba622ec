//! Optional keyed fields of a file name, and link codes
//!
//! An extra is written `(Key value)`, e.g. `(OP2 Naruto)`, `(Version Acoustic)`.

use super::ConventionError;
use super::grammar::split_list;
use neko_common::representation::LinkType;
use once_cell::sync::Lazy;
use regex::Regex;

static NUMBERED_EXTRA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(OP|ED)(\d*) (.+)$").expect("valid numbered extra pattern"));

static LINK_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:(OP|ED)(\d*)|INS|IS)$").expect("valid link code pattern"));

/// Keys of the unnumbered extras, matched as prefixes followed by a space
const KEYS: &[(&str, ExtraKey)] = &[
    ("Original artist", ExtraKey::OriginalArtist),
    ("Title video", ExtraKey::TitleVideo),
    ("Version", ExtraKey::Version),
    ("Video", ExtraKey::Video),
    ("AMV", ExtraKey::Amv),
    ("Artist", ExtraKey::Artist),
    ("Language", ExtraKey::Language),
    ("Episodes", ExtraKey::Episodes),
    ("Subtitle", ExtraKey::Subtitle),
    ("INS", ExtraKey::InsertSong),
    ("IS", ExtraKey::ImageSong),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExtraKey {
    OriginalArtist,
    TitleVideo,
    Version,
    Video,
    Amv,
    Artist,
    Language,
    Episodes,
    Subtitle,
    InsertSong,
    ImageSong,
}

/// Extras captured from a file name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extras {
    /// Work the song opens
    pub opening: Option<String>,
    pub opening_nbr: Option<u32>,
    /// Work the song ends
    pub ending: Option<String>,
    pub ending_nbr: Option<u32>,
    pub insert_song: Option<String>,
    pub image_song: Option<String>,
    pub version: Option<String>,
    pub video: Option<String>,
    pub amv: Option<String>,
    pub title_video: Option<String>,
    pub artist: Vec<String>,
    pub original_artist: Option<String>,
    pub language: Option<String>,
    pub episodes: Option<String>,
    /// Subtitle of the work
    pub subtitle: Option<String>,
}

impl Extras {
    /// Record the content of one `(...)` group
    pub fn apply(&mut self, raw: &str) -> Result<(), ConventionError> {
        if let Some(caps) = NUMBERED_EXTRA.captures(raw) {
            let number = parse_ordinal(&caps[2])?;
            let value = caps[3].trim().to_string();
            let (slot, nbr, name) = if &caps[1] == "OP" {
                (&mut self.opening, &mut self.opening_nbr, "OP")
            } else {
                (&mut self.ending, &mut self.ending_nbr, "ED")
            };
            set_once(slot, value, name)?;
            *nbr = number;
            return Ok(());
        }

        let (key, name, value) = KEYS
            .iter()
            .find_map(|(name, key)| {
                raw.strip_prefix(*name)
                    .and_then(|rest| rest.strip_prefix(' '))
                    .map(|value| (*key, *name, value.trim()))
            })
            .ok_or_else(|| ConventionError::UnknownExtra(raw.to_string()))?;

        if value.is_empty() {
            return Err(ConventionError::UnknownExtra(raw.to_string()));
        }

        let value = value.to_string();
        match key {
            ExtraKey::OriginalArtist => set_once(&mut self.original_artist, value, name),
            ExtraKey::TitleVideo => set_once(&mut self.title_video, value, name),
            ExtraKey::Version => set_once(&mut self.version, value, name),
            ExtraKey::Video => set_once(&mut self.video, value, name),
            ExtraKey::Amv => set_once(&mut self.amv, value, name),
            ExtraKey::Language => set_once(&mut self.language, value, name),
            ExtraKey::Episodes => set_once(&mut self.episodes, value, name),
            ExtraKey::Subtitle => set_once(&mut self.subtitle, value, name),
            ExtraKey::InsertSong => set_once(&mut self.insert_song, value, name),
            ExtraKey::ImageSong => set_once(&mut self.image_song, value, name),
            ExtraKey::Artist => {
                if !self.artist.is_empty() {
                    return Err(ConventionError::DuplicateExtra(name));
                }
                self.artist = split_list(&value);
                Ok(())
            }
        }
    }
}

fn set_once(
    slot: &mut Option<String>,
    value: String,
    name: &'static str,
) -> Result<(), ConventionError> {
    if slot.is_some() {
        return Err(ConventionError::DuplicateExtra(name));
    }
    *slot = Some(value);
    Ok(())
}

fn parse_ordinal(digits: &str) -> Result<Option<u32>, ConventionError> {
    if digits.is_empty() {
        return Ok(None);
    }
    digits
        .parse()
        .map(Some)
        .map_err(|_| ConventionError::InvalidOrdinal(digits.to_string()))
}

/// Link code of a main field: `OP`, `OP2`, `ED`, `ED1`, `INS` or `IS`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkCode {
    pub link_type: LinkType,
    /// Ordinal, openings and endings only
    pub number: Option<u32>,
}

impl LinkCode {
    /// Parse a main field as a link code
    ///
    /// Returns `Ok(None)` when the field is not a link code at all.
    pub fn parse(field: &str) -> Result<Option<Self>, ConventionError> {
        let Some(caps) = LINK_CODE.captures(field) else {
            return Ok(None);
        };

        let code = match caps.get(1).map(|m| m.as_str()) {
            Some("OP") => LinkCode {
                link_type: LinkType::Opening,
                number: parse_ordinal(&caps[2])?,
            },
            Some(_) => LinkCode {
                link_type: LinkType::Ending,
                number: parse_ordinal(&caps[2])?,
            },
            None if field == "INS" => LinkCode {
                link_type: LinkType::InsertSong,
                number: None,
            },
            None => LinkCode {
                link_type: LinkType::ImageSong,
                number: None,
            },
        };

        Ok(Some(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_extras() {
        let mut extras = Extras::default();
        extras.apply("OP2 Naruto Shippuden").unwrap();
        extras.apply("ED Bleach").unwrap();

        assert_eq!(extras.opening.as_deref(), Some("Naruto Shippuden"));
        assert_eq!(extras.opening_nbr, Some(2));
        assert_eq!(extras.ending.as_deref(), Some("Bleach"));
        assert_eq!(extras.ending_nbr, None);
    }

    #[test]
    fn test_keyed_extras() {
        let mut extras = Extras::default();
        extras.apply("Original artist Queen").unwrap();
        extras.apply("Artist Yoko Kanno, Maaya Sakamoto").unwrap();
        extras.apply("Title video Opening credits").unwrap();
        extras.apply("INS Cowboy Bebop").unwrap();
        extras.apply("IS Evangelion").unwrap();

        assert_eq!(extras.original_artist.as_deref(), Some("Queen"));
        assert_eq!(extras.artist, vec!["Yoko Kanno", "Maaya Sakamoto"]);
        assert_eq!(extras.title_video.as_deref(), Some("Opening credits"));
        assert_eq!(extras.insert_song.as_deref(), Some("Cowboy Bebop"));
        assert_eq!(extras.image_song.as_deref(), Some("Evangelion"));
    }

    #[test]
    fn test_unknown_and_duplicate_extras() {
        let mut extras = Extras::default();
        assert!(matches!(
            extras.apply("feat. Someone"),
            Err(ConventionError::UnknownExtra(_))
        ));
        assert!(matches!(
            extras.apply("Versionless"),
            Err(ConventionError::UnknownExtra(_))
        ));

        extras.apply("Version Acoustic").unwrap();
        assert!(matches!(
            extras.apply("Version Live"),
            Err(ConventionError::DuplicateExtra("Version"))
        ));
    }

    #[test]
    fn test_link_codes() {
        assert_eq!(
            LinkCode::parse("OP1").unwrap(),
            Some(LinkCode {
                link_type: LinkType::Opening,
                number: Some(1)
            })
        );
        assert_eq!(
            LinkCode::parse("ED").unwrap(),
            Some(LinkCode {
                link_type: LinkType::Ending,
                number: None
            })
        );
        assert_eq!(
            LinkCode::parse("INS").unwrap().map(|c| c.link_type),
            Some(LinkType::InsertSong)
        );
        assert_eq!(
            LinkCode::parse("IS").unwrap().map(|c| c.link_type),
            Some(LinkType::ImageSong)
        );
        assert_eq!(LinkCode::parse("OPENING").unwrap(), None);
        assert_eq!(LinkCode::parse("Naruto").unwrap(), None);
    }

    #[test]
    fn test_oversized_ordinal() {
        assert!(matches!(
            LinkCode::parse("OP99999999999"),
            Err(ConventionError::InvalidOrdinal(_))
        ));
    }
}
