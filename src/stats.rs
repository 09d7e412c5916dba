//! Analytic traversals over the trie.
//!
//! Each statistic walks the tree once from the root. The walks use an
//! explicit heap stack instead of recursion, so words tens of kilobytes
//! long cannot overflow the thread stack.

use std::collections::BTreeMap;
use std::mem;

use serde::{Deserialize, Serialize};

use crate::node::TrieNode;
use crate::trie::Trie;

/// Depth statistics over every stored word.
///
/// Depth counts nodes traversed from the root: the root sits at depth 0
/// and a word reached through a single edge sits at depth 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeightStats {
    /// Smallest terminal depth, 0 when the trie is empty
    pub min: usize,
    /// Largest terminal depth, 0 when the trie is empty
    pub max: usize,
    /// Arithmetic mean of the terminal depths
    pub mean: f64,
    /// Most frequent terminal depth; ties break toward the lowest value
    pub mode: usize,
    /// Every terminal depth, in byte-ascending traversal order
    pub samples: Vec<usize>,
}

/// Estimated memory footprint of the trie.
///
/// Totals approximate the live allocation as the trie header plus one node
/// record per reachable node plus the bytes of every edge label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryStats {
    /// Estimated total bytes held by the trie
    pub total_bytes: usize,
    /// Number of nodes reachable from the root, root included
    pub node_count: usize,
    /// Sum of edge-label lengths over all nodes
    pub string_bytes: usize,
    /// Total minus label bytes
    pub overhead_bytes: usize,
    /// Total divided by the word count, 0.0 when the trie is empty
    pub bytes_per_word: f64,
}

/// Length statistics over every stored word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordMetrics {
    /// Shortest stored word length, 0 when the trie is empty
    pub min: usize,
    /// Longest stored word length, 0 when the trie is empty
    pub max: usize,
    /// Arithmetic mean of the word lengths
    pub mean: f64,
    /// Most frequent word length; ties break toward the lowest value
    pub mode: usize,
    /// `distribution[l]` counts stored words of length `l`, indexed up to
    /// the longest word; empty when the trie is empty
    pub distribution: Vec<usize>,
    /// Sum of all word lengths
    pub total_chars: usize,
}

impl Trie {
    /// Computes depth statistics over every stored word.
    pub fn height_stats(&self) -> HeightStats {
        let mut samples = Vec::with_capacity(self.len());
        let mut stack = vec![(&self.root, 0usize)];

        while let Some((node, depth)) = stack.pop() {
            if node.is_end {
                samples.push(depth);
            }
            for (_, child) in node.children.iter().rev() {
                stack.push((child.as_ref(), depth + 1));
            }
        }

        let (min, max, mean, mode) = summarize(&samples);
        HeightStats {
            min,
            max,
            mean,
            mode,
            samples,
        }
    }

    /// Estimates the memory footprint of the trie.
    ///
    /// `node_count` counts every node reachable from the root, so an empty
    /// trie reports one node and zero label bytes.
    pub fn memory_stats(&self) -> MemoryStats {
        let mut node_count = 0usize;
        let mut string_bytes = 0usize;
        let mut stack = vec![&self.root];

        while let Some(node) = stack.pop() {
            node_count += 1;
            string_bytes += node.key.len();
            for (_, child) in &node.children {
                stack.push(child.as_ref());
            }
        }

        let total_bytes =
            mem::size_of::<Trie>() + node_count * mem::size_of::<TrieNode>() + string_bytes;
        let bytes_per_word = if self.is_empty() {
            0.0
        } else {
            total_bytes as f64 / self.len() as f64
        };

        MemoryStats {
            total_bytes,
            node_count,
            string_bytes,
            overhead_bytes: total_bytes - string_bytes,
            bytes_per_word,
        }
    }

    /// Computes length statistics over every stored word.
    ///
    /// A word's length is the sum of the edge-label lengths along its path
    /// from the root.
    pub fn word_metrics(&self) -> WordMetrics {
        let mut lengths = Vec::with_capacity(self.len());
        let mut stack = vec![(&self.root, 0usize)];

        while let Some((node, prefix_len)) = stack.pop() {
            let len = prefix_len + node.key.len();
            if node.is_end {
                lengths.push(len);
            }
            for (_, child) in node.children.iter().rev() {
                stack.push((child.as_ref(), len));
            }
        }

        let (min, max, mean, mode) = summarize(&lengths);
        let total_chars: usize = lengths.iter().sum();

        let mut distribution = vec![0usize; if lengths.is_empty() { 0 } else { max + 1 }];
        for &len in &lengths {
            distribution[len] += 1;
        }

        WordMetrics {
            min,
            max,
            mean,
            mode,
            distribution,
            total_chars,
        }
    }
}

/// Min, max, mean, and mode of a sample set; all zeros when empty. The
/// mode breaks frequency ties toward the lowest value.
fn summarize(samples: &[usize]) -> (usize, usize, f64, usize) {
    if samples.is_empty() {
        return (0, 0, 0.0, 0);
    }

    let mut min = usize::MAX;
    let mut max = 0usize;
    let mut sum = 0usize;
    for &value in samples {
        min = min.min(value);
        max = max.max(value);
        sum += value;
    }

    let mut frequency = BTreeMap::new();
    for &value in samples {
        *frequency.entry(value).or_insert(0usize) += 1;
    }

    // Ascending iteration makes the first maximum the lowest-valued mode
    let mut mode = 0usize;
    let mut best = 0usize;
    for (&value, &count) in &frequency {
        if count > best {
            best = count;
            mode = value;
        }
    }

    (min, max, sum as f64 / samples.len() as f64, mode)
}
