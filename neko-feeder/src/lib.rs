//! neko-feeder library interface
//!
//! Extracts karaoke song metadata from file names. The first directory
//! under the scan root selects the naming convention; the parsed fields are
//! mapped to the representation expected by the karaoke catalog.

pub mod convention;
pub mod services;
pub mod song;

pub use crate::convention::{Convention, ConventionError, ParsedSong};
pub use crate::services::{FeedReport, Feeder};
pub use crate::song::{ConventionDispatcher, FieldMapper, SongDescription, SongPaths};
