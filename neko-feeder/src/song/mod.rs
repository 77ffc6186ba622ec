//! Song descriptions
//!
//! One [`SongDescription`] is built per discovered video. The
//! [`ConventionDispatcher`] parses its file name once, then the
//! [`FieldMapper`] turns the outcome into a catalog representation.

pub mod dispatcher;
pub mod mapper;

pub use dispatcher::{Category, ConventionDispatcher, SubdirectoryTable};
pub use mapper::FieldMapper;

use crate::convention::ParsedSong;
use std::path::{Component, Path, PathBuf};

/// Files of one song, relative to the scan root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongPaths {
    pub video: PathBuf,
    pub subtitle: Option<PathBuf>,
    pub others: Vec<PathBuf>,
}

impl SongPaths {
    pub fn new(video: impl Into<PathBuf>) -> Self {
        Self {
            video: video.into(),
            subtitle: None,
            others: Vec::new(),
        }
    }
}

/// Outcome of the single parse attempt of a description
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ParseOutcome {
    /// Not dispatched yet
    #[default]
    Pending,
    Parsed(ParsedSong),
    Unparsed,
}

/// A discovered song and the result of parsing its file name
#[derive(Debug, Clone)]
pub struct SongDescription {
    paths: SongPaths,
    subdirectory: String,
    category: Option<Category>,
    outcome: ParseOutcome,
}

impl SongDescription {
    pub fn new(paths: SongPaths) -> Self {
        let subdirectory = first_segment(&paths.video);
        Self {
            paths,
            subdirectory,
            category: None,
            outcome: ParseOutcome::Pending,
        }
    }

    pub fn paths(&self) -> &SongPaths {
        &self.paths
    }

    /// First path segment under the scan root, empty at the root
    pub fn subdirectory(&self) -> &str {
        &self.subdirectory
    }

    /// Category of the subdirectory, `None` when routed by trial
    pub fn category(&self) -> Option<Category> {
        self.category
    }

    /// Video file name without extension
    pub fn stem(&self) -> String {
        self.paths
            .video
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn outcome(&self) -> &ParseOutcome {
        &self.outcome
    }

    /// Parse result, only when parsing succeeded
    pub fn parsed(&self) -> Option<&ParsedSong> {
        match &self.outcome {
            ParseOutcome::Parsed(song) => Some(song),
            _ => None,
        }
    }

    pub fn can_parse(&self) -> bool {
        self.parsed().is_some()
    }

    pub(crate) fn set_category(&mut self, category: Option<Category>) {
        self.category = category;
    }

    pub(crate) fn set_outcome(&mut self, outcome: ParseOutcome) {
        self.outcome = outcome;
    }
}

/// First normal component of a relative path, when the path has a parent
fn first_segment(path: &Path) -> String {
    let has_parent = path
        .parent()
        .map(|p| !p.as_os_str().is_empty())
        .unwrap_or(false);
    if !has_parent {
        return String::new();
    }

    path.components()
        .find_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .unwrap_or_default()
}
