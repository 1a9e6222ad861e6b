//! ## Errors
//! Error types for the different layers of the crate: [WordError] for malformed words handed to
//! the trie, [CommandError] for input lines that do not form a command and [SessionError] for
//! failures of the command loop itself.

use std::{io, num::ParseIntError, path::PathBuf};

use thiserror::Error;

/// A word or prefix that cannot be represented over the alphabet.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WordError {
    /// Insertion and removal need at least one letter.
    #[error("word is empty")]
    Empty,

    /// The character at `position` is not a lowercase ASCII letter.
    #[error("invalid character {ch:?} at position {position} of {word:?}")]
    InvalidChar {
        word: String,
        ch: char,
        position: usize,
    },
}

/// An input line that could not be turned into a [Command](crate::command::Command).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: '{0}'")]
    Unknown(String),

    #[error("{command} is missing its {argument} argument")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("{command}: invalid {argument} '{value}': {source}")]
    InvalidNumber {
        command: &'static str,
        argument: &'static str,
        value: String,
        source: ParseIntError,
    },

    /// Completion modes are `0` (all), `1`, `2` and `3`.
    #[error("unsupported completion mode {0}, expected 0-3")]
    InvalidMode(u32),

    #[error("{command}: unexpected trailing input '{rest}'")]
    TrailingInput { command: &'static str, rest: String },
}

/// Failures that stop a [Session](crate::session::Session).
#[derive(Debug, Error)]
pub enum SessionError {
    /// A dictionary file given to `LOAD` could not be read.
    #[error("failed to load {path:?}: {source}")]
    Load { path: PathBuf, source: io::Error },

    /// Reading commands or writing results failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}
