//! Small shared helpers

mod paths;

pub use paths::normalize_path;
