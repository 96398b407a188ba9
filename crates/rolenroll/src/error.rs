// ABOUTME: Error types for the rolenroll library.
// ABOUTME: Covers special-dice notation parsing failures.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid special dice token \"{0}\": use aX or nY, e.g. \"a1, n2\"")]
    MalformedToken(String),
}

pub type Result<T> = std::result::Result<T, Error>;
