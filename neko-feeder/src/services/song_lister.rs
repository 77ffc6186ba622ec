//! Karaoke song discovery
//!
//! Recursively lists a scan root and groups files sharing a directory and a
//! stem: the video makes the song, a subtitle file is attached to it, any
//! other file (lyrics, cover...) is kept alongside.

use crate::song::SongPaths;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

/// Song listing errors
#[derive(Debug, Error)]
pub enum ScanError {
    /// Specified path does not exist
    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    /// Path exists but is not a directory
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Kind of a file, from its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Video,
    Subtitle,
    Other,
}

impl FileKind {
    pub fn of(path: &Path) -> Self {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "mp4" | "mkv" | "avi" | "webm" | "flv" | "ogv" | "mov" | "mpg" | "mpeg" | "wmv" => {
                FileKind::Video
            }
            "ass" | "ssa" | "srt" | "vtt" => FileKind::Subtitle,
            _ => FileKind::Other,
        }
    }
}

/// Files sharing a directory and a stem
#[derive(Debug, Default)]
struct FileGroup {
    videos: Vec<PathBuf>,
    subtitles: Vec<PathBuf>,
    others: Vec<PathBuf>,
}

/// Song lister
pub struct SongLister {
    ignore_patterns: Vec<String>,
    max_depth: Option<usize>,
}

impl SongLister {
    /// Create new lister with default ignore patterns
    ///
    /// Hidden entries are always skipped; system files like Thumbs.db too.
    pub fn new() -> Self {
        Self {
            ignore_patterns: vec!["Thumbs.db".to_string(), "desktop.ini".to_string()],
            max_depth: None,
        }
    }

    /// Limit the recursion depth (1 = files directly in the root)
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// List the songs under a root, paths relative to it, sorted by video
    pub fn list(&self, root_path: &Path) -> Result<Vec<SongPaths>, ScanError> {
        if !root_path.exists() {
            return Err(ScanError::PathNotFound(root_path.to_path_buf()));
        }

        if !root_path.is_dir() {
            return Err(ScanError::NotADirectory(root_path.to_path_buf()));
        }

        let mut groups: BTreeMap<(PathBuf, String), FileGroup> = BTreeMap::new();

        let walker = WalkDir::new(root_path)
            .follow_links(false)
            .max_depth(self.max_depth.unwrap_or(usize::MAX))
            .into_iter()
            .filter_entry(|e| self.should_process_entry(e));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Error accessing entry: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let Ok(relative) = entry.path().strip_prefix(root_path) else {
                continue;
            };
            let relative = relative.to_path_buf();

            let parent = relative.parent().map(Path::to_path_buf).unwrap_or_default();
            let stem = relative
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();

            let group = groups.entry((parent, stem)).or_default();
            match FileKind::of(&relative) {
                FileKind::Video => group.videos.push(relative),
                FileKind::Subtitle => group.subtitles.push(relative),
                FileKind::Other => group.others.push(relative),
            }
        }

        let mut songs = Vec::new();
        for ((parent, stem), mut group) in groups {
            if group.videos.is_empty() {
                tracing::debug!(
                    directory = %parent.display(),
                    stem = %stem,
                    "No video for these files, skipped"
                );
                continue;
            }

            group.videos.sort();
            group.subtitles.sort();
            group.others.sort();

            if group.subtitles.len() > 1 {
                tracing::warn!(
                    directory = %parent.display(),
                    stem = %stem,
                    count = group.subtitles.len(),
                    "Several subtitles for one song, using the first"
                );
            }
            let subtitle = group.subtitles.first().cloned();

            for video in &group.videos {
                songs.push(SongPaths {
                    video: video.clone(),
                    subtitle: subtitle.clone(),
                    others: group.others.clone(),
                });
            }
        }

        songs.sort_by(|a, b| a.video.cmp(&b.video));

        tracing::debug!(root = %root_path.display(), songs = songs.len(), "Listing complete");

        Ok(songs)
    }

    /// Check if entry should be processed
    fn should_process_entry(&self, entry: &DirEntry) -> bool {
        // The root itself may be hidden
        if entry.depth() == 0 {
            return true;
        }

        let file_name = entry.file_name().to_string_lossy();

        if file_name.starts_with('.') {
            return false;
        }

        !self
            .ignore_patterns
            .iter()
            .any(|pattern| file_name == pattern.as_str())
    }
}

impl Default for SongLister {
    fn default() -> Self {
        Self::new()
    }
}
