//! ## Trie
//! Contains the implementation of a counting [trie](https://en.wikipedia.org/wiki/Trie) over the
//! lowercase [Alphabet]. Every node knows how many stored word occurrences live below it, which
//! lets removal prune dead branches on the way back up and answers prefix counts in `O(|prefix|)`.
//! The key exported data structure is [Trie].

use std::array;

use log::debug;

use crate::{
    alphabet::{ALPHABET_SIZE, Alphabet},
    error::WordError,
};

/// A single branching point of a [Trie]. Children are owned exclusively by their parent's slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrieNode {
    /// How often the word ending here was inserted, `0` if no word ends here.
    terminal_count: u32,
    /// Word endings in the subtree rooted here, this node included.
    subtree_word_count: u32,
    children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
}

/// A prefix tree of words over the lowercase ASCII alphabet, counting multiplicities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trie {
    root: TrieNode,
    alphabet: Alphabet,
    node_count: usize,
}

impl TrieNode {
    fn new() -> Self {
        Self {
            terminal_count: 0,
            subtree_word_count: 0,
            children: array::from_fn(|_| None),
        }
    }

    /// Insert the word described by `key` below `self`, returns the number of nodes created.
    fn insert(&mut self, key: &[u8]) -> usize {
        self.subtree_word_count += 1;
        match key.split_first() {
            Some((&idx, rest)) => {
                let slot = &mut self.children[idx as usize];
                let created = usize::from(slot.is_none());
                let child = slot.get_or_insert_with(|| Box::new(Self::new()));
                created + child.insert(rest)
            }
            None => {
                self.terminal_count += 1;
                0
            }
        }
    }

    /// Remove one occurrence of the word described by `key` below `self`. Returns `None`, without
    /// touching any counter, if the word is not stored, otherwise the number of nodes pruned.
    fn remove(&mut self, key: &[u8]) -> Option<usize> {
        let pruned = match key.split_first() {
            Some((&idx, rest)) => {
                let slot = &mut self.children[idx as usize];
                let child = slot.as_mut()?;
                let mut pruned = child.remove(rest)?;
                if child.is_dead() {
                    *slot = None;
                    pruned += 1;
                }
                pruned
            }
            None => {
                if self.terminal_count == 0 {
                    return None;
                }
                self.terminal_count -= 1;
                0
            }
        };
        self.subtree_word_count -= 1;
        Some(pruned)
    }

    fn find(&self, key: &[u8]) -> Option<&Self> {
        key.iter()
            .try_fold(self, |node, &idx| node.children[idx as usize].as_deref())
    }

    // Nothing ends in this subtree anymore, so it can go.
    fn is_dead(&self) -> bool {
        self.subtree_word_count == 0 && !self.has_children()
    }

    pub fn terminal_count(&self) -> u32 {
        self.terminal_count
    }

    pub fn subtree_word_count(&self) -> u32 {
        self.subtree_word_count
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal_count > 0
    }

    pub fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }

    /// Iterate over the present children together with the letter on their edge, in alphabet
    /// order.
    pub fn iter_children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        Alphabet
            .letters()
            .filter_map(move |(idx, letter)| self.children[idx].as_deref().map(|c| (letter, c)))
    }

    /// Check the count invariant below `self` and return the number of nodes in the subtree, or
    /// `None` if some node is inconsistent.
    fn check(&self, is_root: bool) -> Option<usize> {
        if !is_root && self.subtree_word_count == 0 {
            return None;
        }
        let mut nodes = 1;
        let mut words = self.terminal_count;
        for (_, child) in self.iter_children() {
            nodes += child.check(false)?;
            words += child.subtree_word_count;
        }
        (words == self.subtree_word_count).then_some(nodes)
    }
}

impl Trie {
    /// Create an empty trie consisting of the root only.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
            alphabet: Alphabet,
            node_count: 1,
        }
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of nodes currently allocated, the root included.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of stored word occurrences, multiplicities included.
    pub fn len(&self) -> usize {
        self.root.subtree_word_count as usize
    }

    pub fn is_empty(&self) -> bool {
        self.root.subtree_word_count == 0
    }

    /// Store one more occurrence of `word`.
    pub fn insert(&mut self, word: &str) -> Result<(), WordError> {
        let key = self.alphabet.encode_word(word)?;
        let created = self.root.insert(&key);
        self.node_count += created;
        debug!("Insert {word}: {created} new nodes");
        Ok(())
    }

    /// Drop one occurrence of `word`. Returns whether anything was removed, removing a word that
    /// is not stored leaves the trie untouched.
    pub fn remove(&mut self, word: &str) -> Result<bool, WordError> {
        let key = self.alphabet.encode_word(word)?;
        match self.root.remove(&key) {
            Some(pruned) => {
                self.node_count -= pruned;
                debug!("Remove {word}: {pruned} nodes pruned");
                Ok(true)
            }
            None => {
                debug!("Remove {word}: not present");
                Ok(false)
            }
        }
    }

    /// The node reached by following `prefix` from the root, if that path exists.
    pub fn find(&self, prefix: &str) -> Result<Option<&TrieNode>, WordError> {
        let key = self.alphabet.encode(prefix)?;
        Ok(self.root.find(&key))
    }

    /// How often `word` is stored.
    pub fn frequency(&self, word: &str) -> Result<u32, WordError> {
        Ok(self.find(word)?.map_or(0, TrieNode::terminal_count))
    }

    pub fn contains(&self, word: &str) -> Result<bool, WordError> {
        Ok(self.frequency(word)? > 0)
    }

    /// Number of stored word occurrences that start with `prefix`.
    pub fn prefix_count(&self, prefix: &str) -> Result<u32, WordError> {
        Ok(self.find(prefix)?.map_or(0, TrieNode::subtree_word_count))
    }

    /// Verify that every node's subtree count equals its own multiplicity plus the counts of its
    /// children, that no empty branch hangs below the root and that [Trie::node_count] matches
    /// the reachable nodes.
    pub fn is_consistent(&self) -> bool {
        self.root.check(true) == Some(self.node_count)
    }

    /// All stored words in alphabet order, each once regardless of multiplicity.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::new();
        let mut frontier = vec![(String::new(), &self.root)];
        while let Some((word, node)) = frontier.pop() {
            if node.is_terminal() {
                words.push(word.clone());
            }
            // Reverse so that the smallest letter is popped first.
            let children: Vec<_> = node.iter_children().collect();
            frontier.extend(
                children
                    .into_iter()
                    .rev()
                    .map(|(letter, child)| (format!("{word}{letter}"), child)),
            );
        }
        words
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::Trie;
    use crate::error::WordError;

    fn trie_of(words: &[&str]) -> Trie {
        let mut trie = Trie::new();
        for word in words {
            trie.insert(word).unwrap();
        }
        trie
    }

    #[test]
    fn empty_trie() {
        let trie = Trie::new();
        assert!(trie.is_empty());
        assert_eq!(trie.len(), 0);
        assert_eq!(trie.node_count(), 1);
        assert!(trie.is_consistent());
        assert_eq!(trie.prefix_count("").unwrap(), 0);
    }

    #[test]
    fn insert_shares_prefixes() {
        let trie = trie_of(&["car", "care", "cat"]);
        // root, c, a, r, e, t
        assert_eq!(trie.node_count(), 6);
        assert_eq!(trie.len(), 3);
        assert_eq!(trie.prefix_count("ca").unwrap(), 3);
        assert_eq!(trie.prefix_count("car").unwrap(), 2);
        assert_eq!(trie.prefix_count("dog").unwrap(), 0);
        assert!(trie.contains("care").unwrap());
        assert!(!trie.contains("ca").unwrap());
        assert!(trie.is_consistent());
        assert_eq!(trie.words(), vec!["car", "care", "cat"]);
    }

    #[test]
    fn repeated_insert_raises_multiplicity() {
        let mut trie = trie_of(&["cat", "cat"]);
        let nodes = trie.node_count();
        trie.insert("cat").unwrap();
        assert_eq!(trie.node_count(), nodes);
        assert_eq!(trie.frequency("cat").unwrap(), 3);
        assert_eq!(trie.len(), 3);
        assert!(trie.is_consistent());
    }

    #[test]
    fn remove_round_trip() {
        let mut trie = trie_of(&["car", "cat"]);
        let before = trie.clone();
        trie.insert("carpet").unwrap();
        assert!(trie.remove("carpet").unwrap());
        assert_eq!(trie, before);
        assert!(trie.is_consistent());
    }

    #[test]
    fn remove_one_of_many_occurrences() {
        let mut trie = trie_of(&["cat", "cat"]);
        assert!(trie.remove("cat").unwrap());
        assert_eq!(trie.frequency("cat").unwrap(), 1);
        assert!(trie.contains("cat").unwrap());
        assert!(trie.is_consistent());
    }

    #[test]
    fn remove_prunes_dead_branch() {
        let mut trie = trie_of(&["car", "cart"]);
        assert!(trie.remove("cart").unwrap());
        assert_eq!(trie.node_count(), 4);
        assert!(!trie.find("car").unwrap().unwrap().has_children());
        assert!(trie.remove("car").unwrap());
        assert_eq!(trie.node_count(), 1);
        assert!(!trie.root().has_children());
        assert!(trie.is_empty());
        assert!(trie.is_consistent());
    }

    #[test]
    fn remove_inner_word_keeps_longer_one() {
        let mut trie = trie_of(&["car", "cart"]);
        assert!(trie.remove("car").unwrap());
        assert_eq!(trie.node_count(), 5);
        assert!(!trie.contains("car").unwrap());
        assert!(trie.contains("cart").unwrap());
        assert!(trie.is_consistent());
    }

    #[test]
    fn remove_absent_word_is_a_noop() {
        let mut trie = trie_of(&["car", "cart"]);
        let before = trie.clone();
        // Missing link in the middle of the path.
        assert!(!trie.remove("cot").unwrap());
        // Path exists but no word ends there.
        assert!(!trie.remove("ca").unwrap());
        // Path runs past the last node.
        assert!(!trie.remove("carts").unwrap());
        assert_eq!(trie, before);
        assert!(trie.is_consistent());
    }

    #[test]
    fn invalid_words_are_rejected() {
        let mut trie = Trie::new();
        assert_eq!(trie.insert(""), Err(WordError::Empty));
        assert!(matches!(
            trie.insert("Cat"),
            Err(WordError::InvalidChar { ch: 'C', position: 0, .. })
        ));
        assert_eq!(trie.remove(""), Err(WordError::Empty));
        assert!(trie.find("a1").is_err());
        assert_eq!(trie, Trie::new());
    }
}
