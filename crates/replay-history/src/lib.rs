//! # Replay History
//!
//! Loading, storage, and filtering of listening history CSV exports.
//!
//! A [`History`] is loaded once from disk, derives the time attributes
//! reports group by, and hands out borrowed [`FilteredView`]s per
//! selection without copying events.

pub mod event;
pub mod filter;
pub mod loader;
pub mod store;

pub use event::{ListeningEvent, RawRecord};
pub use filter::{FilterSelection, FilteredView, YearFilter};
pub use loader::{load_events, read_events};
pub use store::History;
