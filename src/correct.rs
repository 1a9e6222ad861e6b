//! ## Correction
//! Approximate lookup of a word: find stored words of the same length as the query that differ
//! from it in at most `k` positions (Hamming distance, substitutions only). The whole trie is
//! searched depth first in alphabet order, so "first match" means the smallest such word, not the
//! closest one.

use crate::{
    error::WordError,
    trie::{Trie, TrieNode},
};

struct Search<'a> {
    target: &'a [u8],
    max_distance: usize,
    first_only: bool,
    matches: Vec<String>,
}

impl Search<'_> {
    /// Returns `true` once the search is done.
    fn visit(&mut self, node: &TrieNode, buf: &mut String, mismatches: usize) -> bool {
        let depth = buf.len();
        if depth == self.target.len() {
            if node.is_terminal() {
                self.matches.push(buf.clone());
                return self.first_only;
            }
            return false;
        }

        for (letter, child) in node.iter_children() {
            let mismatches = mismatches + usize::from(letter as u8 != self.target[depth]);
            if mismatches > self.max_distance {
                continue;
            }
            buf.push(letter);
            let done = self.visit(child, buf, mismatches);
            buf.pop();
            if done {
                return true;
            }
        }
        false
    }
}

fn search(
    trie: &Trie,
    word: &str,
    max_distance: usize,
    first_only: bool,
) -> Result<Vec<String>, WordError> {
    // Validates `word`, the indices themselves are not needed.
    trie.alphabet().encode(word)?;
    let mut search = Search {
        target: word.as_bytes(),
        max_distance,
        first_only,
        matches: Vec::new(),
    };
    let mut buf = String::with_capacity(word.len());
    search.visit(trie.root(), &mut buf, 0);
    Ok(search.matches)
}

/// The first stored word, in alphabet order, of the same length as `word` and with at most
/// `max_distance` differing positions.
pub fn correct(trie: &Trie, word: &str, max_distance: usize) -> Result<Option<String>, WordError> {
    Ok(search(trie, word, max_distance, true)?.pop())
}

/// Every stored word of the same length as `word` within `max_distance` substitutions, in
/// alphabet order.
pub fn corrections(
    trie: &Trie,
    word: &str,
    max_distance: usize,
) -> Result<Vec<String>, WordError> {
    search(trie, word, max_distance, false)
}
