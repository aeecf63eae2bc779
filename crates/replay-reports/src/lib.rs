//! # Replay Reports
//!
//! Report views and chart rendering for listening history data.
//!
//! This crate computes the summary metrics and report views of the
//! dashboard from a filtered history, then renders them to PNG charts
//! using plotters.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod chart;
pub mod dashboard;
pub mod day_of_week;
mod group;
pub mod hourly;
pub mod monthly;
pub mod render;
pub mod summary;
pub mod top;
pub mod top_items;
pub mod trend;
pub mod view;

pub use chart::*;
pub use dashboard::*;
pub use day_of_week::*;
pub use hourly::*;
pub use monthly::*;
pub use render::*;
pub use summary::*;
pub use top::*;
pub use top_items::*;
pub use trend::*;
pub use view::*;
