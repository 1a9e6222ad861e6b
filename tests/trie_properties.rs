//! Property-based tests for the counting trie and the searches running over it.

use proptest::prelude::*;
use rustc_hash::FxHashMap;
use wordtrielib::{
    complete::{Ranking, complete},
    correct::{correct, corrections},
    trie::Trie,
};

#[derive(Debug, Clone)]
enum Op {
    Insert(String),
    Remove(String),
}

// Short words over a few letters so that paths overlap a lot.
fn word_strategy() -> impl Strategy<Value = String> {
    "[abc]{1,5}"
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        2 => word_strategy().prop_map(Op::Insert),
        1 => word_strategy().prop_map(Op::Remove),
    ]
}

fn hamming(a: &str, b: &str) -> usize {
    a.bytes().zip(b.bytes()).filter(|(x, y)| x != y).count()
}

proptest! {
    #[test]
    fn consistent_after_every_mutation(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut trie = Trie::new();
        let mut model: FxHashMap<String, u32> = FxHashMap::default();
        for op in ops {
            match op {
                Op::Insert(word) => {
                    trie.insert(&word).unwrap();
                    *model.entry(word).or_default() += 1;
                }
                Op::Remove(word) => {
                    let expected = model.get(&word).copied().unwrap_or(0) > 0;
                    prop_assert_eq!(trie.remove(&word).unwrap(), expected);
                    if expected {
                        *model.get_mut(&word).unwrap() -= 1;
                    }
                }
            }
            prop_assert!(trie.is_consistent());
        }

        model.retain(|_, count| *count > 0);
        prop_assert_eq!(trie.len(), model.values().sum::<u32>() as usize);
        for (word, count) in &model {
            prop_assert_eq!(trie.frequency(word).unwrap(), *count);
        }
        let mut expected_words: Vec<_> = model.keys().cloned().collect();
        expected_words.sort();
        prop_assert_eq!(trie.words(), expected_words);
    }

    #[test]
    fn insert_then_remove_restores_structure(
        words in prop::collection::vec(word_strategy(), 0..20),
        extra in "[a-d]{1,6}",
    ) {
        let mut trie = Trie::new();
        for word in &words {
            trie.insert(word).unwrap();
        }
        prop_assume!(!trie.contains(&extra).unwrap());
        let before = trie.clone();
        trie.insert(&extra).unwrap();
        prop_assert!(trie.remove(&extra).unwrap());
        prop_assert_eq!(trie.node_count(), before.node_count());
        prop_assert_eq!(trie, before);
    }

    #[test]
    fn completions_agree_with_word_list(
        words in prop::collection::vec(word_strategy(), 1..20),
        prefix in "[abc]{0,2}",
    ) {
        let mut trie = Trie::new();
        for word in &words {
            trie.insert(word).unwrap();
        }
        let mut candidates: Vec<&String> = words.iter().filter(|w| w.starts_with(&prefix)).collect();
        candidates.sort();
        candidates.dedup();

        let lexicographic = complete(&trie, &prefix, Ranking::Lexicographic).unwrap();
        prop_assert_eq!(lexicographic.as_ref(), candidates.first().copied());

        // The first of minimal length in alphabet order.
        let shortest = complete(&trie, &prefix, Ranking::Shortest).unwrap();
        let expected = candidates.iter().copied().min_by_key(|w| w.len());
        prop_assert_eq!(shortest.as_ref(), expected);

        // The first of maximal multiplicity in alphabet order.
        let most_frequent = complete(&trie, &prefix, Ranking::MostFrequent).unwrap();
        let count = |w: &String| words.iter().filter(|x| *x == w).count();
        let mut expected = None;
        for candidate in &candidates {
            if expected.is_none_or(|best| count(*candidate) > count(best)) {
                expected = Some(*candidate);
            }
        }
        prop_assert_eq!(most_frequent.as_ref(), expected);
    }

    #[test]
    fn corrections_agree_with_word_list(
        words in prop::collection::vec(word_strategy(), 1..20),
        query in word_strategy(),
        max_distance in 0usize..3,
    ) {
        let mut trie = Trie::new();
        for word in &words {
            trie.insert(word).unwrap();
        }
        let mut expected: Vec<String> = words
            .iter()
            .filter(|w| w.len() == query.len() && hamming(w, &query) <= max_distance)
            .cloned()
            .collect();
        expected.sort();
        expected.dedup();

        prop_assert_eq!(correct(&trie, &query, max_distance).unwrap(), expected.first().cloned());
        prop_assert_eq!(corrections(&trie, &query, max_distance).unwrap(), expected);
    }
}
