//! Mapping of parsed file names to the catalog representation
//!
//! Every accessor goes through [`FieldMapper::parsed`]: an unparsed
//! description yields the default value of the field and its parse result
//! is never read.

use super::{Category, SongDescription};
use crate::convention::tags::use_tag_name;
use crate::convention::{Extras, ParsedSong, TagCategory, TagSet, TagSpec, Trailer};
use neko_common::representation::{
    Artist, LinkType, SongRepresentation, Tag, Work, WorkLink, WorkType,
};
use std::path::Component;
use tracing::debug;

/// Link types in the order their tag flags are checked
const LINK_TYPE_ORDER: [LinkType; 4] = [
    LinkType::Opening,
    LinkType::Ending,
    LinkType::InsertSong,
    LinkType::ImageSong,
];

/// Reads catalog fields out of a prepared song description
pub struct FieldMapper<'a> {
    description: &'a SongDescription,
}

impl<'a> FieldMapper<'a> {
    pub fn new(description: &'a SongDescription) -> Self {
        Self { description }
    }

    /// Parse result, `None` when every accessor must fall back to its default
    fn parsed(&self) -> Option<&'a ParsedSong> {
        self.description.parsed()
    }

    /// Build the complete representation, then finalize it
    pub fn representation(&self) -> SongRepresentation {
        let mut representation = SongRepresentation {
            filename: self.get_filename(),
            directory: self.get_directory(),
            title: self.get_title(),
            artists: self.get_artists(),
            tags: self.get_tags(),
            works: self.get_works(),
            version: self.get_version(),
            detail: self.get_detail(),
            detail_video: self.get_detail_video(),
        };
        self.post_process(&mut representation);
        representation
    }

    /// Final step once every field is known
    pub fn post_process(&self, representation: &mut SongRepresentation) {
        debug!(
            path = %self.description.paths().video.display(),
            parsed = self.description.can_parse(),
            title = %representation.title,
            artists = representation.artists.len(),
            works = representation.works.len(),
            "Song representation built"
        );
    }

    /// Video file name, extension included
    pub fn get_filename(&self) -> String {
        self.description
            .paths()
            .video
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Parent directory of the video, `/`-separated, empty at the root
    pub fn get_directory(&self) -> String {
        self.description
            .paths()
            .video
            .parent()
            .map(|parent| {
                parent
                    .components()
                    .filter_map(|c| match c {
                        Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
                        _ => None,
                    })
                    .collect::<Vec<_>>()
                    .join("/")
            })
            .unwrap_or_default()
    }

    /// Song title; the file stem when unparsed
    pub fn get_title(&self) -> String {
        match self.parsed() {
            None => self.description.stem(),
            Some(ParsedSong::Music(fields)) => fields.title_music.clone(),
            Some(ParsedSong::Anime(fields)) => fields.title_music.clone(),
            Some(ParsedSong::Cartoon(fields)) => fields
                .title_music
                .clone()
                .unwrap_or_else(|| fields.title_cartoon.clone()),
        }
    }

    pub fn get_artists(&self) -> Vec<Artist> {
        let Some(song) = self.parsed() else {
            return Vec::new();
        };

        let extras = &song.trailer().extras;
        let mut names: Vec<&str> = Vec::new();

        match song {
            ParsedSong::Music(fields) => {
                names.extend(fields.singers.iter().map(String::as_str));
                names.extend(fields.composers.iter().map(String::as_str));
            }
            ParsedSong::Anime(_) | ParsedSong::Cartoon(_) => {
                names.extend(extras.artist.iter().map(String::as_str));
            }
        }

        if let Some(original_artist) = &extras.original_artist {
            names.push(original_artist);
        }

        names.into_iter().map(Artist::new).collect()
    }

    /// Set tags, `Use` tags excepted for anime and cartoon
    pub fn get_tags(&self) -> Vec<Tag> {
        let Some(song) = self.parsed() else {
            return Vec::new();
        };

        let table = song.convention().tag_table();
        let keep_use = matches!(song, ParsedSong::Music(_));

        selected_tags(table, &song.trailer().tags, keep_use)
    }

    pub fn get_works(&self) -> Vec<WorkLink> {
        let Some(song) = self.parsed() else {
            return Vec::new();
        };

        let link = match song {
            ParsedSong::Music(fields) => music_work_link(&fields.trailer.extras),
            ParsedSong::Anime(fields) => {
                let work = Work {
                    title: fields.title_anime.clone(),
                    subtitle: fields.trailer.extras.subtitle.clone(),
                    work_type: WorkType::new(anime_work_type(self.description.category())),
                };
                common_work_link(&fields.trailer, fields.link_number, work)
            }
            ParsedSong::Cartoon(fields) => {
                let work = Work {
                    title: fields.title_cartoon.clone(),
                    subtitle: fields.trailer.extras.subtitle.clone(),
                    work_type: WorkType::new("cartoon"),
                };
                common_work_link(&fields.trailer, fields.link_number, work)
            }
        };

        link.into_iter().collect()
    }

    pub fn get_version(&self) -> String {
        let Some(song) = self.parsed() else {
            return String::new();
        };

        let extras = &song.trailer().extras;
        match song {
            ParsedSong::Cartoon(_) => join_present(&[&extras.version, &extras.language]),
            ParsedSong::Music(_) | ParsedSong::Anime(_) => {
                extras.version.clone().unwrap_or_default()
            }
        }
    }

    pub fn get_detail(&self) -> String {
        self.parsed()
            .map(|song| song.trailer().details.clone())
            .unwrap_or_default()
    }

    /// Video, AMV and video title extras, in that order
    pub fn get_detail_video(&self) -> String {
        let Some(song) = self.parsed() else {
            return String::new();
        };

        let extras = &song.trailer().extras;
        join_present(&[&extras.video, &extras.amv, &extras.title_video])
    }
}

/// Serialized names of the raised tags, in table order
fn selected_tags(table: &[TagSpec], tags: &TagSet, keep_use: bool) -> Vec<Tag> {
    table
        .iter()
        .filter(|spec| keep_use || spec.category != TagCategory::Use)
        .filter(|spec| tags.is_set(spec.name))
        .map(|spec| Tag::new(spec.serializer))
        .collect()
}

/// Work link of a music file, from the first work extra present
fn music_work_link(extras: &Extras) -> Option<WorkLink> {
    let (link_type, link_type_number, title) = if let Some(title) = &extras.opening {
        (LinkType::Opening, extras.opening_nbr, title)
    } else if let Some(title) = &extras.ending {
        (LinkType::Ending, extras.ending_nbr, title)
    } else if let Some(title) = &extras.insert_song {
        (LinkType::InsertSong, None, title)
    } else if let Some(title) = &extras.image_song {
        (LinkType::ImageSong, None, title)
    } else {
        return None;
    };

    Some(WorkLink {
        link_type,
        link_type_number,
        episodes: None,
        work: Work {
            title: title.clone(),
            subtitle: None,
            work_type: WorkType::new("anime"),
        },
    })
}

/// Work link of anime and cartoon files, typed by the first `Use` flag raised
fn common_work_link(trailer: &Trailer, link_number: Option<u32>, work: Work) -> Option<WorkLink> {
    let link_type = LINK_TYPE_ORDER
        .into_iter()
        .find(|link_type| trailer.tags.is_set(use_tag_name(*link_type)))?;

    Some(WorkLink {
        link_type,
        link_type_number: link_number.filter(|_| link_type.is_numbered()),
        episodes: trailer.extras.episodes.clone(),
        work,
    })
}

/// Work type of the anime convention, from the routing directory
fn anime_work_type(category: Option<Category>) -> &'static str {
    match category {
        Some(Category::LiveAction) => "live_action",
        Some(Category::Game) => "game",
        _ => "anime",
    }
}

/// Join the present, non-empty values with `", "`
fn join_present(values: &[&Option<String>]) -> String {
    values
        .iter()
        .filter_map(|value| value.as_deref())
        .filter(|value| !value.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
