//! Shared foundations for the replay workspace: the workspace-wide error
//! type, tracing setup, and timestamp helpers used by every other crate.

pub mod error;
pub mod logging;
pub mod time;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

// Re-export commonly used types
pub use error::{ReplayError, Result};
pub use logging::{init_default_logging, init_logging, LoggingConfig};
pub use time::{
    format_date, month_label, parse_timestamp, weekday_abbr, weekday_index, weekday_name,
    WEEKDAY_ORDER,
};
