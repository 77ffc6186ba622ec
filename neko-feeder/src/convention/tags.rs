//! Tag tables of the conventions
//!
//! Each convention has a fixed, shared table mapping a tag name (as written
//! in file names) to the name serialized for the catalog, plus a category.
//! Tags of the `Use` category describe how a song is used in a work; they
//! become work links and are never output as tags for anime and cartoon.

use neko_common::representation::LinkType;
use std::collections::BTreeSet;

/// Category of a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagCategory {
    /// Role of the song in a work (OP, ED...)
    Use,
    Length,
    Version,
    Singing,
    Content,
    Video,
}

/// One entry of a tag table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSpec {
    /// Name as written in file names
    pub name: &'static str,
    /// Name sent to the catalog
    pub serializer: &'static str,
    pub category: TagCategory,
}

const fn tag(name: &'static str, serializer: &'static str, category: TagCategory) -> TagSpec {
    TagSpec {
        name,
        serializer,
        category,
    }
}

/// Tags of the music convention
pub static MUSIC_TAGS: &[TagSpec] = &[
    tag("FULL", "FULL", TagCategory::Length),
    tag("LONG", "LONG", TagCategory::Length),
    tag("SHORT", "SHORT", TagCategory::Length),
    tag("REMIX", "REMIX", TagCategory::Version),
    tag("COVER", "COVER", TagCategory::Version),
    tag("LIVE", "LIVE", TagCategory::Version),
    tag("DUET", "DUET", TagCategory::Singing),
    tag("NSFW", "NSFW", TagCategory::Content),
    tag("SPOIL", "SPOILER", TagCategory::Content),
    tag("PV", "PV", TagCategory::Video),
];

/// Tags of the anime and cartoon conventions
pub static ANIME_TAGS: &[TagSpec] = &[
    tag("OP", "OP", TagCategory::Use),
    tag("ED", "ED", TagCategory::Use),
    tag("IN", "INS", TagCategory::Use),
    tag("IS", "IS", TagCategory::Use),
    tag("FULL", "FULL", TagCategory::Length),
    tag("LONG", "LONG", TagCategory::Length),
    tag("SHORT", "SHORT", TagCategory::Length),
    tag("REMIX", "REMIX", TagCategory::Version),
    tag("COVER", "COVER", TagCategory::Version),
    tag("LIVE", "LIVE", TagCategory::Version),
    tag("DUET", "DUET", TagCategory::Singing),
    tag("NSFW", "NSFW", TagCategory::Content),
    tag("SPOIL", "SPOILER", TagCategory::Content),
    tag("PV", "PV", TagCategory::Video),
];

/// Name of the `Use` tag flagging a link type
pub fn use_tag_name(link_type: LinkType) -> &'static str {
    match link_type {
        LinkType::Opening => "OP",
        LinkType::Ending => "ED",
        LinkType::InsertSong => "IN",
        LinkType::ImageSong => "IS",
    }
}

/// Look up a tag by name in a table
pub fn find_tag(table: &'static [TagSpec], name: &str) -> Option<&'static TagSpec> {
    table.iter().find(|spec| spec.name == name)
}

/// Set of tag flags raised by a parsed file name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet(BTreeSet<&'static str>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise a flag
    pub fn insert(&mut self, name: &'static str) {
        self.0.insert(name);
    }

    /// Whether a flag is raised
    pub fn is_set(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
