//! # radix-lexicon
//!
//! A mutable compressed radix trie storing a dynamic set of non-empty byte
//! strings.
//!
//! Edges carry multi-byte labels, so the tree always stays in fully
//! compressed form: inserting a word splits an edge at the common-prefix
//! boundary, and removing a word prunes orphaned nodes and re-merges any
//! single-child survivor.
//!
//! ## Features
//!
//! - **Exact and prefix queries**: membership tests, prefix checks, and
//!   prefix-bounded enumeration
//! - **Streaming ingestion**: bulk-load line-delimited text in fixed-size
//!   chunks, reassembling lines that straddle chunk boundaries while
//!   inserting in-chunk lines without copying
//! - **Analytics**: depth, memory-footprint, and word-length statistics
//! - **Wildcard search**: glob matching over the stored words with `*`
//!   and `?`
//!
//! ## Example
//!
//! ```rust
//! use radix_lexicon::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("hello");
//! trie.insert("help");
//! trie.insert("world");
//!
//! assert!(trie.contains("hello"));
//! assert!(trie.starts_with("hel"));
//! assert_eq!(trie.words_with_prefix("he").len(), 2);
//! assert_eq!(trie.pattern_search("h?l*").len(), 2);
//! ```
//!
//! Words are byte strings and ordering is by raw byte value; callers that
//! want case folding or Unicode normalization apply it before inserting.

mod error;
mod ingest;
mod node;
mod pattern;
mod stats;
mod trie;
mod util;

// Re-export public types
pub use crate::error::{Error, Result};
pub use crate::ingest::DEFAULT_BUFFER_SIZE;
pub use crate::stats::{HeightStats, MemoryStats, WordMetrics};
pub use crate::trie::{Trie, Words};
