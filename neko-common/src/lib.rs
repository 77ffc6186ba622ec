//! # neko-common
//!
//! Shared code for the neko feeder crates:
//! - Error type and result alias
//! - TOML configuration model and resolution
//! - Song representation sent to the karaoke catalog

pub mod config;
pub mod error;
pub mod representation;

pub use error::{Error, Result};
pub use representation::SongRepresentation;
