//! Builder API and configuration for games.
//!
//! This module provides the fluent [`GameBuilder`], the serde-loadable
//! [`GameConfig`] and the errors either can report.

pub mod config;
pub mod error;
pub mod game;

pub use config::{BranchPolicy, GameConfig};
pub use error::BuildError;
pub use game::GameBuilder;
