//! # Replay Config
//!
//! Type-safe configuration loading and validation for the replay dashboard.
//!
//! This crate provides the TOML configuration schema, built-in defaults,
//! environment variable overrides, and value validation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validator;

pub use defaults::*;
pub use loader::*;
pub use schema::*;
pub use validator::*;
