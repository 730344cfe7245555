//! Camera configuration documents

use crate::error::ConfigLoadError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// On-disk shape of a camera config. Every field is required.
#[derive(Debug, Deserialize)]
struct RawCamConfig {
    socket_to_name: BTreeMap<String, String>,
    inverted: bool,
    fisheye: bool,
    mono: bool,
}

/// Fixed camera attributes loaded from a JSON document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CamConfig {
    pub path: PathBuf,
    pub socket_to_name: BTreeMap<String, String>,
    pub inverted: bool,
    pub fisheye: bool,
    pub mono: bool,
}

impl CamConfig {
    /// Load a camera config from `path`.
    ///
    /// The file handle is dropped before returning, whether parsing succeeds or not.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigLoadError> {
        let path = path.as_ref();
        let raw: RawCamConfig = {
            let file = File::open(path)
                .map_err(|source| ConfigLoadError::Open { path: path.to_path_buf(), source })?;
            serde_json::from_reader(BufReader::new(file))
                .map_err(|source| ConfigLoadError::Parse { path: path.to_path_buf(), source })?
        };

        tracing::debug!(path = %path.display(), sockets = raw.socket_to_name.len(), "loaded camera config");

        Ok(Self {
            path: path.to_path_buf(),
            socket_to_name: raw.socket_to_name,
            inverted: raw.inverted,
            fisheye: raw.fisheye,
            mono: raw.mono,
        })
    }

    /// Human-readable summary, one attribute per line, sockets in key order.
    pub fn describe(&self) -> String {
        let mut out = String::from("Camera Config: \n");
        let _ = writeln!(out, "Inverted: {}", self.inverted);
        let _ = writeln!(out, "Fisheye: {}", self.fisheye);
        let _ = writeln!(out, "Mono: {}", self.mono);
        for (socket, name) in &self.socket_to_name {
            let _ = writeln!(out, "Socket {}: {}", socket, name);
        }
        out
    }
}
