//! rust-template: a small, conventional Rust CLI project
//!
//! Shows the house style for validated value types ([`temperature::Celsius`]),
//! JSON configuration discovery and loading ([`config::ConfigCatalog`],
//! [`config::CamConfig`]), layered settings and structured logging.

pub mod cli;
pub mod config;
pub mod error;
pub mod temperature;
pub mod utils;

pub use error::{ConfigLoadError, OutOfRangeError};
