//! Song representation sent to the karaoke catalog server
//!
//! Serialized as JSON. Optional fields are omitted rather than written as
//! `null`, matching what the catalog accepts for work links.

use serde::{Deserialize, Serialize};

/// Full representation of one song
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongRepresentation {
    /// Video file name, extension included
    pub filename: String,
    /// Parent directory of the video, relative to the scan root
    pub directory: String,
    pub title: String,
    pub artists: Vec<Artist>,
    pub tags: Vec<Tag>,
    pub works: Vec<WorkLink>,
    pub version: String,
    pub detail: String,
    pub detail_video: String,
}

/// Artist of a song
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub name: String,
}

impl Artist {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Tag attached to a song
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Role of a song inside a work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkType {
    /// Opening
    #[serde(rename = "OP")]
    Opening,
    /// Ending
    #[serde(rename = "ED")]
    Ending,
    /// Insert song
    #[serde(rename = "IN")]
    InsertSong,
    /// Image song
    #[serde(rename = "IS")]
    ImageSong,
}

impl LinkType {
    /// Only openings and endings are numbered (OP1, ED2, ...)
    pub fn is_numbered(self) -> bool {
        matches!(self, LinkType::Opening | LinkType::Ending)
    }
}

/// Link between a song and the work it comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkLink {
    pub link_type: LinkType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_type_number: Option<u32>,
    /// Episodes where the song is used (e.g. "1, 2, 5")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episodes: Option<String>,
    pub work: Work,
}

/// A work (anime, game, cartoon...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Work {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub work_type: WorkType,
}

/// Type of a work, referenced by its technical name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkType {
    pub query_name: String,
}

impl WorkType {
    pub fn new(query_name: impl Into<String>) -> Self {
        Self {
            query_name: query_name.into(),
        }
    }
}
