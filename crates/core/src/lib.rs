//! # SlotMatch Core
//!
//! Extracts interview time slots from free-text availability such as
//! "завтра 15-18, послезавтра 14-15.30, на следующей неделе любой день с 12 до 19"
//! and matches a candidate's slots against a recruiter's.
//!
//! ## Pipeline
//!
//! - **Lexicon**: static spelling tables for relative days, weekdays, day periods
//! - **Extract**: date and time expressions in one fragment
//! - **Segmenter**: utterance to fragments, gluing date-only pieces forward
//! - **Parser**: fragment to [`Slot`] with a confidence score
//! - **Matcher**: candidate × recruiter slots to ranked [`Match`]es
//!
//! Everything here is synchronous and free of shared mutable state; the
//! lexicon is compiled once and read-only afterwards. Malformed input never
//! errors, it simply yields fewer slots.

pub mod anchor;
pub mod errors;
pub mod extract;
pub mod lexicon;
pub mod matcher;
pub mod models;
pub mod parser;
pub mod segmenter;

pub use matcher::match_slots;
pub use models::{Match, Slot};
pub use parser::parse_slots;
