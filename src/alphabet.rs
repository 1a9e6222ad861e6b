//! ## Alphabet
//! The fixed alphabet every trie in this crate is built over: the 26 lowercase ASCII letters in
//! their natural order. Words are turned into sequences of letter indices by [Alphabet::encode]
//! before they touch the trie, which is where malformed input gets rejected.

use crate::error::WordError;

const LETTERS: &[u8; ALPHABET_SIZE] = b"abcdefghijklmnopqrstuvwxyz";

/// Number of letters, and therefore the branching factor of every trie node.
pub const ALPHABET_SIZE: usize = 26;

/// The ordered set of letters `a..=z`, index = letter - 'a'.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Alphabet;

impl Alphabet {
    pub fn size(&self) -> usize {
        ALPHABET_SIZE
    }

    /// Position of `ch` in the alphabet, `None` if it is not one of its letters.
    pub fn index_of(&self, ch: char) -> Option<usize> {
        if ch.is_ascii_lowercase() {
            Some((ch as u8 - b'a') as usize)
        } else {
            None
        }
    }

    /// The letter at `idx`, `None` past the end of the alphabet.
    pub fn letter(&self, idx: usize) -> Option<char> {
        LETTERS.get(idx).map(|&b| b as char)
    }

    /// Iterate over `(index, letter)` in alphabet order.
    pub fn letters(self) -> impl Iterator<Item = (usize, char)> {
        LETTERS.iter().enumerate().map(|(idx, &b)| (idx, b as char))
    }

    /// Translate `word` into letter indices. The empty string is a valid (empty) key, it is the
    /// prefix of everything.
    pub fn encode(&self, word: &str) -> Result<Vec<u8>, WordError> {
        word.chars()
            .enumerate()
            .map(|(position, ch)| match self.index_of(ch) {
                Some(idx) => Ok(idx as u8),
                None => Err(WordError::InvalidChar {
                    word: word.to_string(),
                    ch,
                    position,
                }),
            })
            .collect()
    }

    /// Like [Alphabet::encode] but for words that get stored, which may not be empty.
    pub fn encode_word(&self, word: &str) -> Result<Vec<u8>, WordError> {
        if word.is_empty() {
            return Err(WordError::Empty);
        }
        self.encode(word)
    }
}
