//! Infrastructure layer for filesystem and environment interactions.
//!
//! Resolves where configuration is read from and where traces are written,
//! and normalizes user-supplied paths.

pub mod paths;

pub use paths::{expand_tilde, get_config_path, get_data_dir};
