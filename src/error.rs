//! Error types shared by the library modules

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A temperature was below absolute zero (or not a number).
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("Temperature {value} below -273.15 is not possible")]
pub struct OutOfRangeError {
    pub value: f64,
}

/// A camera configuration could not be found, opened or parsed.
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    #[error("Failed opening config file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid camera config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown config '{name}'. Available: {}", .available.join(", "))]
    UnknownName { name: String, available: Vec<String> },
}
