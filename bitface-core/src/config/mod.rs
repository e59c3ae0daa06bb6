//! Configuration
//!
//! The face is configured by a small `face.toml` file compiled into the
//! firmware. Everything has a default, so an empty file is valid.

pub mod toml;
pub mod types;

pub use self::toml::{parse_config, ConfigError};
pub use types::{FaceConfig, Theme, WatchConfig};
