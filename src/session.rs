//! ## Session
//! A [Session] owns a [Trie] together with the sink results are written to and executes
//! [Command]s against them. Every query produces exactly one output line per result, queries
//! without a result print [NO_MATCH] instead.

use std::{
    fs,
    io::{BufRead, Write},
    path::Path,
};

use log::{debug, info, warn};

use crate::{
    command::Command,
    complete::{self, CompletionMode},
    correct,
    error::SessionError,
    trie::Trie,
};

/// Printed for a completion or correction query without an answer.
pub const NO_MATCH: &str = "No words found";

/// Whether to keep reading commands after the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Session<W> {
    trie: Trie,
    out: W,
}

impl<W: Write> Session<W> {
    /// Create a session with an empty trie writing its results to `out`.
    pub fn new(out: W) -> Self {
        Self {
            trie: Trie::new(),
            out,
        }
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Give back the output sink, tearing the trie down.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn report(&mut self, result: Option<&str>) -> Result<(), SessionError> {
        writeln!(self.out, "{}", result.unwrap_or(NO_MATCH))?;
        Ok(())
    }

    /// Insert every whitespace separated token of the file at `path`, returns how many words were
    /// inserted. Tokens which are not words are skipped.
    pub fn load(&mut self, path: &Path) -> Result<usize, SessionError> {
        info!("Loading {:?}", path);
        let contents = fs::read_to_string(path).map_err(|source| SessionError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        let mut inserted = 0;
        for token in contents.split_whitespace() {
            match self.trie.insert(token) {
                Ok(()) => inserted += 1,
                Err(err) => warn!("Skipping {token:?} in {path:?}: {err}"),
            }
        }
        info!("Loaded {inserted} words from {:?}", path);
        Ok(inserted)
    }

    fn autocomplete(&mut self, prefix: &str, mode: CompletionMode) -> Result<(), SessionError> {
        match complete::autocomplete(&self.trie, prefix, mode) {
            Ok(results) => {
                for (ranking, completion) in results {
                    debug!("Complete {prefix} ({ranking:?}): {completion:?}");
                    self.report(completion.as_deref())?;
                }
            }
            Err(err) => warn!("AUTOCOMPLETE: {err}"),
        }
        Ok(())
    }

    fn autocorrect(&mut self, word: &str, max_distance: i64) -> Result<(), SessionError> {
        // No word is within a negative distance of anything.
        let Ok(max_distance) = usize::try_from(max_distance) else {
            debug!("Correct {word} within {max_distance}: negative budget");
            return self.report(None);
        };
        match correct::correct(&self.trie, word, max_distance) {
            Ok(correction) => self.report(correction.as_deref())?,
            Err(err) => warn!("AUTOCORRECT: {err}"),
        }
        Ok(())
    }

    /// Execute a single command. Invalid words are logged and otherwise ignored, only failing I/O
    /// is reported as an error.
    pub fn execute(&mut self, command: Command) -> Result<Flow, SessionError> {
        match command {
            Command::Insert(word) => {
                if let Err(err) = self.trie.insert(&word) {
                    warn!("INSERT: {err}");
                }
            }
            Command::Remove(word) => {
                if let Err(err) = self.trie.remove(&word) {
                    warn!("REMOVE: {err}");
                }
            }
            Command::Load(path) => {
                self.load(&path)?;
            }
            Command::Autocorrect { word, max_distance } => self.autocorrect(&word, max_distance)?,
            Command::Autocomplete { prefix, mode } => self.autocomplete(&prefix, mode)?,
            Command::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    /// Execute one command per line of `input` until `EXIT` or the end of the input. Lines that
    /// do not parse are logged and skipped.
    pub fn run(&mut self, input: impl BufRead) -> Result<(), SessionError> {
        for (line_no, line) in input.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(err) => {
                    warn!("Line {}: {err}", line_no + 1);
                    continue;
                }
            };
            if self.execute(command)? == Flow::Exit {
                info!("EXIT on line {}", line_no + 1);
                break;
            }
        }
        self.out.flush()?;
        Ok(())
    }
}
