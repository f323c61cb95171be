use tracing::{debug, debug_span};

use crate::lexicon::LexiconTrie;

use super::TokenKind;

/// A directed edge `start -> end` over char boundary positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Start position (char index, inclusive)
    pub start: usize,
    /// End position (char index, exclusive)
    pub end: usize,
    pub kind: TokenKind,
}

impl Edge {
    pub fn char_len(&self) -> usize {
        self.end - self.start
    }

    /// Characters covered by a dictionary match; fallback edges cover none.
    pub fn matched_coverage(&self) -> usize {
        match self.kind {
            TokenKind::Dictionary => self.char_len(),
            TokenKind::Unknown => 0,
        }
    }
}

/// All candidate segmentations of a text, as a DAG over positions `0..=N`.
pub struct SegmentGraph<'t> {
    /// The original input
    pub text: &'t str,
    /// The input as chars, for trie walks
    pub chars: Vec<char>,
    /// All edges
    pub edges: Vec<Edge>,
    /// edges_by_start[i] = indices of edges leaving position i, ascending by end
    pub edges_by_start: Vec<Vec<usize>>,
    /// byte_offsets[i] = byte offset of char i; has N + 1 slots
    byte_offsets: Vec<usize>,
}

impl<'t> SegmentGraph<'t> {
    /// Number of chars in the input (`N`).
    pub fn char_count(&self) -> usize {
        self.chars.len()
    }

    /// The input substring an edge spans.
    pub fn surface(&self, edge: &Edge) -> &'t str {
        &self.text[self.byte_offsets[edge.start]..self.byte_offsets[edge.end]]
    }

    /// Edges leaving `pos`, shortest first.
    pub fn outgoing(&self, pos: usize) -> impl Iterator<Item = (usize, &Edge)> + '_ {
        self.edges_by_start
            .get(pos)
            .into_iter()
            .flatten()
            .map(move |&idx| (idx, &self.edges[idx]))
    }
}

/// Build the segmentation graph of `text` against `trie`.
///
/// One dictionary edge per entry that is a prefix of `text[i..]`, for every
/// position `i`. A position with no dictionary edge gets exactly one
/// single-char fallback edge, so every position below `N` has an outgoing
/// edge and a path from 0 to `N` always exists.
pub fn build_graph<'t>(trie: &LexiconTrie, text: &'t str) -> SegmentGraph<'t> {
    let chars: Vec<char> = text.chars().collect();
    let char_count = chars.len();
    let _span = debug_span!("build_graph", char_count).entered();

    let mut byte_offsets: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    byte_offsets.push(text.len());

    let mut edges = Vec::new();
    let mut edges_by_start: Vec<Vec<usize>> = vec![Vec::new(); char_count];
    let mut fallback_count = 0usize;

    for start in 0..char_count {
        for end in trie.lookup_prefixes(&chars, start) {
            edges_by_start[start].push(edges.len());
            edges.push(Edge {
                start,
                end,
                kind: TokenKind::Dictionary,
            });
        }

        if edges_by_start[start].is_empty() {
            edges_by_start[start].push(edges.len());
            edges.push(Edge {
                start,
                end: start + 1,
                kind: TokenKind::Unknown,
            });
            fallback_count += 1;
        }
    }

    debug!(edge_count = edges.len(), fallback_count);
    SegmentGraph {
        text,
        chars,
        edges,
        edges_by_start,
        byte_offsets,
    }
}
