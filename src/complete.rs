//! ## Completion
//! This module implements prefix completion over a [Trie]. All three rankings descend along the
//! query prefix first and then run a depth first search over the subtree below it, visiting
//! children in alphabet order:
//! - [Ranking::Lexicographic] stops at the first stored word it meets, which is the smallest one
//! - [Ranking::Shortest] keeps the first word of minimal length
//! - [Ranking::MostFrequent] keeps the first word of maximal multiplicity
//!
//! The candidate word is built in a single buffer that grows and shrinks with the search depth.

use crate::{
    error::{CommandError, WordError},
    trie::{Trie, TrieNode},
};

/// The different ways of picking one completion among all words sharing a prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ranking {
    Lexicographic,
    Shortest,
    MostFrequent,
}

/// Which rankings an `AUTOCOMPLETE` request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompletionMode {
    /// Every ranking, in the order lexicographic, shortest, most frequent.
    All,
    Lexicographic,
    Shortest,
    MostFrequent,
}

impl CompletionMode {
    /// The rankings to evaluate, in output order.
    pub fn rankings(&self) -> &'static [Ranking] {
        match self {
            CompletionMode::All => &[
                Ranking::Lexicographic,
                Ranking::Shortest,
                Ranking::MostFrequent,
            ],
            CompletionMode::Lexicographic => &[Ranking::Lexicographic],
            CompletionMode::Shortest => &[Ranking::Shortest],
            CompletionMode::MostFrequent => &[Ranking::MostFrequent],
        }
    }
}

impl TryFrom<u32> for CompletionMode {
    type Error = CommandError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CompletionMode::All),
            1 => Ok(CompletionMode::Lexicographic),
            2 => Ok(CompletionMode::Shortest),
            3 => Ok(CompletionMode::MostFrequent),
            other => Err(CommandError::InvalidMode(other)),
        }
    }
}

fn lexicographic(node: &TrieNode, buf: &mut String) -> Option<String> {
    if node.is_terminal() {
        return Some(buf.clone());
    }
    for (letter, child) in node.iter_children() {
        buf.push(letter);
        let found = lexicographic(child, buf);
        buf.pop();
        if found.is_some() {
            return found;
        }
    }
    None
}

fn shortest(node: &TrieNode, buf: &mut String, best: &mut Option<String>) {
    if node.is_terminal() {
        // Ties keep the earlier word, and everything below is longer.
        if best.as_ref().is_none_or(|word| buf.len() < word.len()) {
            *best = Some(buf.clone());
        }
        return;
    }
    for (letter, child) in node.iter_children() {
        buf.push(letter);
        shortest(child, buf, best);
        buf.pop();
    }
}

fn most_frequent(node: &TrieNode, buf: &mut String, best: &mut Option<(u32, String)>) {
    if node.is_terminal()
        && best
            .as_ref()
            .is_none_or(|(count, _)| node.terminal_count() > *count)
    {
        *best = Some((node.terminal_count(), buf.clone()));
    }
    for (letter, child) in node.iter_children() {
        buf.push(letter);
        most_frequent(child, buf, best);
        buf.pop();
    }
}

/// Find the completion of `prefix` preferred by `ranking`. `Ok(None)` if no stored word starts
/// with `prefix`.
pub fn complete(trie: &Trie, prefix: &str, ranking: Ranking) -> Result<Option<String>, WordError> {
    let Some(start) = trie.find(prefix)? else {
        return Ok(None);
    };
    let mut buf = prefix.to_string();
    let completion = match ranking {
        Ranking::Lexicographic => lexicographic(start, &mut buf),
        Ranking::Shortest => {
            let mut best = None;
            shortest(start, &mut buf, &mut best);
            best
        }
        Ranking::MostFrequent => {
            let mut best = None;
            most_frequent(start, &mut buf, &mut best);
            best.map(|(_, word)| word)
        }
    };
    Ok(completion)
}

/// Evaluate every ranking requested by `mode`, in output order.
pub fn autocomplete(
    trie: &Trie,
    prefix: &str,
    mode: CompletionMode,
) -> Result<Vec<(Ranking, Option<String>)>, WordError> {
    mode.rankings()
        .iter()
        .map(|&ranking| complete(trie, prefix, ranking).map(|found| (ranking, found)))
        .collect()
}
