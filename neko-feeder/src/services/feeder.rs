//! Feeding pipeline
//!
//! Lists the songs of a scan root and builds the representation of each
//! one: prepare (parse the file name), read every field, post-process.
//! A file name that follows no convention only degrades its own song to
//! default values; the run always goes on.

use super::song_lister::{ScanError, SongLister};
use crate::song::{ConventionDispatcher, FieldMapper, SongDescription, SongPaths, SubdirectoryTable};
use neko_common::config::SubdirectoryNames;
use neko_common::representation::SongRepresentation;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Outcome of a feeding run
#[derive(Debug, Clone, Default)]
pub struct FeedReport {
    /// One representation per song, sorted by video path
    pub songs: Vec<SongRepresentation>,
    /// Songs whose file name follows a convention
    pub parsed: usize,
    /// Songs left with default values
    pub unparsed: usize,
}

/// Builds song representations for a directory tree
pub struct Feeder {
    lister: SongLister,
    dispatcher: ConventionDispatcher,
}

impl Feeder {
    pub fn new(names: &SubdirectoryNames) -> Self {
        Self {
            lister: SongLister::new(),
            dispatcher: ConventionDispatcher::new(SubdirectoryTable::new(names)),
        }
    }

    pub fn with_lister(mut self, lister: SongLister) -> Self {
        self.lister = lister;
        self
    }

    /// Build the representation of every song under a root
    pub fn run(&self, root: &Path) -> Result<FeedReport, ScanError> {
        let songs = self.lister.list(root)?;
        info!(root = %root.display(), songs = songs.len(), "Songs found");

        let mut report = FeedReport::default();
        for paths in songs {
            let (representation, parsed) = self.describe(paths);
            if parsed {
                report.parsed += 1;
            } else {
                report.unparsed += 1;
            }
            report.songs.push(representation);
        }

        info!(
            parsed = report.parsed,
            unparsed = report.unparsed,
            "Feeding complete"
        );

        Ok(report)
    }

    /// Build the representation of one song, and whether its name parsed
    pub fn describe(&self, paths: SongPaths) -> (SongRepresentation, bool) {
        let mut description = SongDescription::new(paths);
        self.dispatcher.prepare(&mut description);

        let representation = FieldMapper::new(&description).representation();
        (representation, description.can_parse())
    }
}

impl Default for Feeder {
    fn default() -> Self {
        Self::new(&SubdirectoryNames::default())
    }
}

/// Write representations as pretty JSON to a file, or stdout when `None`
pub fn write_json(songs: &[SongRepresentation], output: Option<&Path>) -> neko_common::Result<()> {
    match output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            serde_json::to_writer_pretty(&mut writer, songs)?;
            writeln!(writer)?;
            writer.flush()?;
            info!(path = %path.display(), songs = songs.len(), "Representations written");
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = stdout.lock();
            serde_json::to_writer_pretty(&mut writer, songs)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
