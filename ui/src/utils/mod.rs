//! Small presentation-layer helpers: display formatting and call-rate
//! limiting for chatty inputs such as search boxes and resize handlers.

pub mod format;
pub mod rate_limit;

pub use format::{format_date, format_file_size, DEFAULT_DATE_PATTERN};
pub use rate_limit::{Debouncer, Throttler};
