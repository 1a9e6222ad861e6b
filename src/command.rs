//! ## Commands
//! Parsing of the line based command language driving a [Session](crate::session::Session):
//!
//! | Line | Command |
//! |---|---|
//! | `INSERT <word>` | [Command::Insert] |
//! | `REMOVE <word>` | [Command::Remove] |
//! | `LOAD <path>` | [Command::Load] |
//! | `AUTOCORRECT <word> <k>` | [Command::Autocorrect] |
//! | `AUTOCOMPLETE <prefix> <mode>` | [Command::Autocomplete] |
//! | `EXIT` | [Command::Exit] |

use std::{path::PathBuf, str::SplitWhitespace};

use crate::{complete::CompletionMode, error::CommandError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Insert(String),
    Remove(String),
    /// Insert every whitespace separated token of a file.
    Load(PathBuf),
    /// A negative distance is accepted and simply matches nothing.
    Autocorrect {
        word: String,
        max_distance: i64,
    },
    Autocomplete {
        prefix: String,
        mode: CompletionMode,
    },
    Exit,
}

struct Args<'a> {
    command: &'static str,
    tokens: SplitWhitespace<'a>,
}

impl<'a> Args<'a> {
    fn next(&mut self, argument: &'static str) -> Result<&'a str, CommandError> {
        self.tokens.next().ok_or(CommandError::MissingArgument {
            command: self.command,
            argument,
        })
    }

    fn next_number<T: std::str::FromStr<Err = std::num::ParseIntError>>(
        &mut self,
        argument: &'static str,
    ) -> Result<T, CommandError> {
        let value = self.next(argument)?;
        value.parse().map_err(|source| CommandError::InvalidNumber {
            command: self.command,
            argument,
            value: value.to_string(),
            source,
        })
    }

    fn finish(mut self) -> Result<(), CommandError> {
        match self.tokens.next() {
            Some(first) => {
                let rest = std::iter::once(first)
                    .chain(self.tokens)
                    .collect::<Vec<_>>()
                    .join(" ");
                Err(CommandError::TrailingInput {
                    command: self.command,
                    rest,
                })
            }
            None => Ok(()),
        }
    }
}

impl Command {
    /// Parse a single input line.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut tokens = line.split_whitespace();
        let keyword = tokens.next().ok_or(CommandError::Empty)?;
        let args = |command| Args { command, tokens };

        let (parsed, rest) = match keyword {
            "INSERT" => {
                let mut args = args("INSERT");
                (Command::Insert(args.next("word")?.to_string()), args)
            }
            "REMOVE" => {
                let mut args = args("REMOVE");
                (Command::Remove(args.next("word")?.to_string()), args)
            }
            "LOAD" => {
                let mut args = args("LOAD");
                (Command::Load(PathBuf::from(args.next("path")?)), args)
            }
            "AUTOCORRECT" => {
                let mut args = args("AUTOCORRECT");
                let word = args.next("word")?.to_string();
                let max_distance = args.next_number("distance")?;
                (Command::Autocorrect { word, max_distance }, args)
            }
            "AUTOCOMPLETE" => {
                let mut args = args("AUTOCOMPLETE");
                let prefix = args.next("prefix")?.to_string();
                let mode = CompletionMode::try_from(args.next_number::<u32>("mode")?)?;
                (Command::Autocomplete { prefix, mode }, args)
            }
            "EXIT" => (Command::Exit, args("EXIT")),
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        rest.finish()?;
        Ok(parsed)
    }
}
