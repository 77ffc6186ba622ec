//! Feeder services
//!
//! - Song discovery on disk
//! - Feeding pipeline producing catalog representations

pub mod feeder;
pub mod song_lister;

pub use feeder::{FeedReport, Feeder};
pub use song_lister::{FileKind, ScanError, SongLister};
