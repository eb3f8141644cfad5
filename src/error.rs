use std::io;

use thiserror::Error;

/// Errors that end an interactive session early.
///
/// An unrecognized menu choice is not an error; the loop reports it and
/// keeps going.
#[derive(Error, Debug)]
pub enum MenuError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("input ended while waiting for {expected}")]
    EndOfInput { expected: &'static str },
    #[error("expected {expected}, got '{token}'")]
    NotANumber {
        expected: &'static str,
        token: String,
    },
}

pub type Result<T> = std::result::Result<T, MenuError>;
