//! # Replay Dashboard
//!
//! Command line dashboard for personal listening history exports.
//!
//! This is the main binary crate that loads the configured CSV export,
//! computes the report views, and writes charts plus a JSON report.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod error;

pub use app::*;
pub use error::*;
