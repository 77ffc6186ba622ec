//! Convention selection
//!
//! The first directory under the scan root decides which convention parses
//! a file name. When that directory is unknown, every convention is tried
//! in [`Convention::TRIAL_ORDER`] and the first success wins.

use super::{ParseOutcome, SongDescription};
use crate::convention::Convention;
use neko_common::config::SubdirectoryNames;
use tracing::{debug, warn};

/// Routing category of a subdirectory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    CjkMusic,
    WesternMusic,
    Anime,
    LiveAction,
    Game,
    Cartoon,
    /// Files not meant to be parsed
    Other,
}

impl Category {
    /// Convention parsing files of this category, `None` for `Other`
    pub fn convention(self) -> Option<Convention> {
        match self {
            Category::CjkMusic | Category::WesternMusic => Some(Convention::Music),
            Category::Anime | Category::LiveAction | Category::Game => Some(Convention::Anime),
            Category::Cartoon => Some(Convention::Cartoon),
            Category::Other => None,
        }
    }
}

/// Subdirectory name → category lookup table
#[derive(Debug, Clone)]
pub struct SubdirectoryTable {
    entries: Vec<(String, Category)>,
}

impl SubdirectoryTable {
    pub fn new(names: &SubdirectoryNames) -> Self {
        Self {
            entries: vec![
                (names.cjk_music.clone(), Category::CjkMusic),
                (names.western_music.clone(), Category::WesternMusic),
                (names.anime.clone(), Category::Anime),
                (names.live_action.clone(), Category::LiveAction),
                (names.game.clone(), Category::Game),
                (names.cartoon.clone(), Category::Cartoon),
                (names.other.clone(), Category::Other),
            ],
        }
    }

    /// Category of a subdirectory; the empty name is never known
    pub fn lookup(&self, subdirectory: &str) -> Option<Category> {
        if subdirectory.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|(name, _)| name == subdirectory)
            .map(|(_, category)| *category)
    }
}

impl Default for SubdirectoryTable {
    fn default() -> Self {
        Self::new(&SubdirectoryNames::default())
    }
}

/// Selects and runs the convention parser of a song description
#[derive(Debug, Clone, Default)]
pub struct ConventionDispatcher {
    table: SubdirectoryTable,
}

impl ConventionDispatcher {
    pub fn new(table: SubdirectoryTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &SubdirectoryTable {
        &self.table
    }

    /// Parse the file name of a description, once
    ///
    /// A convention mismatch only marks this description as unparsed.
    pub fn prepare(&self, description: &mut SongDescription) {
        if description.outcome() != &ParseOutcome::Pending {
            debug!(
                path = %description.paths().video.display(),
                "Description already prepared, skipping"
            );
            return;
        }

        let category = self.table.lookup(description.subdirectory());
        description.set_category(category);

        let outcome = match category {
            Some(category) => self.parse_routed(description, category),
            None => self.parse_by_trial(description),
        };
        description.set_outcome(outcome);
    }

    fn parse_routed(&self, description: &SongDescription, category: Category) -> ParseOutcome {
        let path = description.paths().video.display();

        let Some(convention) = category.convention() else {
            debug!(path = %path, "File in the other directory, not parsed");
            return ParseOutcome::Unparsed;
        };

        match convention.parse(&description.stem()) {
            Ok(song) => {
                debug!(path = %path, convention = %convention, "File name parsed");
                ParseOutcome::Parsed(song)
            }
            Err(e) => {
                warn!(
                    path = %path,
                    convention = %convention,
                    error = %e,
                    "File name does not follow the convention of its directory"
                );
                ParseOutcome::Unparsed
            }
        }
    }

    fn parse_by_trial(&self, description: &SongDescription) -> ParseOutcome {
        let path = description.paths().video.display();
        let stem = description.stem();

        for convention in Convention::TRIAL_ORDER {
            match convention.parse(&stem) {
                Ok(song) => {
                    debug!(path = %path, convention = %convention, "File name parsed by trial");
                    return ParseOutcome::Parsed(song);
                }
                Err(e) => {
                    debug!(path = %path, convention = %convention, error = %e, "Convention rejected");
                }
            }
        }

        warn!(
            path = %path,
            subdirectory = %description.subdirectory(),
            "File name follows no known convention"
        );
        ParseOutcome::Unparsed
    }
}
