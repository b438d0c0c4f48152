//! Configuration module for fintrack
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - Application settings persistence

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::Settings;
