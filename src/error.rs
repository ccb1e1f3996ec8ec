//! Error types shared across the crate

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse data file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration in {path}: {message}")]
    Config { path: PathBuf, message: String },

    // Only reachable when an id comes from outside the fixed puzzle sets.
    #[error("Unknown circuit slot: {slot}")]
    InvalidSlotReference { slot: String },

    #[error("Unknown circuit component: {component}")]
    InvalidComponentReference { component: String },
}
