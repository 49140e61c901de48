use crate::board::ItemId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BoardError {
    #[error("no item {0} on the board")]
    ItemNotFound(ItemId),
    #[error("item {0} is not a note")]
    NotANote(ItemId),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse board config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// A minutes or seconds field that is not a non-negative integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("countdown input {minutes:?}:{seconds:?} is not a number")]
pub struct TimeInputError {
    pub minutes: String,
    pub seconds: String,
}
