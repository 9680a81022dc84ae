use thiserror::Error;

/// Errors raised at the edges of the engine.
///
/// Parsing and matching never fail; these only surface while loading
/// configuration or validating caller input around the two entry points.
#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown time zone: {0}")]
    InvalidTimezone(String),

    #[error("Configuration error: {0}")]
    Config(#[from] eyre::Report),
}

pub type SlotResult<T> = Result<T, SlotError>;
