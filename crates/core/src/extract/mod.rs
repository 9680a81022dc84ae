//! Date and time extraction from a single text fragment.

pub mod date;
pub mod time;

pub use date::{DateMention, detect_date, extract_date};
pub use time::extract_time;
