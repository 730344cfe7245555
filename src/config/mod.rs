//! Camera configuration documents and application settings
//!
//! Camera configs are JSON documents discovered by name under the bundled
//! `config_files/` tree. Settings decide where that tree lives.

pub mod cam;
pub mod catalog;
pub mod settings;

pub use cam::CamConfig;
pub use catalog::ConfigCatalog;
pub use settings::Settings;
