//! # Wordtrie
//! This library contains an in-memory word store built on a counting trie over the lowercase
//! ASCII letters. On top of exact insertion and removal it answers two kinds of queries:
//! prefix completion under several rankings ([complete]) and fixed-length approximate lookup
//! bounded by a number of substitutions ([correct]). The [session] module drives these through
//! the small line based command language parsed by [command].

pub mod alphabet;
pub mod command;
pub mod complete;
pub mod correct;
pub mod error;
pub mod session;
pub mod trie;
