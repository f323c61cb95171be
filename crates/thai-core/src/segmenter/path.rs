use std::fmt;
use std::str::FromStr;

use tracing::{debug, debug_span};

use super::graph::SegmentGraph;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    #[error("unsupported path-selection policy: {0:?}")]
    Unsupported(String),
}

/// How a path through the segmentation graph is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PathPolicy {
    /// Fewest tokens overall (dynamic programming).
    #[default]
    MaximumMatching,
    /// Longest dictionary match at each position, no backtracking.
    GreedyLongestMatch,
}

impl PathPolicy {
    pub fn name(self) -> &'static str {
        match self {
            Self::MaximumMatching => "maximum-matching",
            Self::GreedyLongestMatch => "greedy-longest-match",
        }
    }

    pub(crate) fn selector(self) -> &'static dyn PathSelector {
        match self {
            Self::MaximumMatching => &MaximumMatching,
            Self::GreedyLongestMatch => &GreedyLongestMatch,
        }
    }
}

impl fmt::Display for PathPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PathPolicy {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "maximum-matching" | "mm" | "newmm" => Ok(Self::MaximumMatching),
            "greedy-longest-match" | "longest-matching" => Ok(Self::GreedyLongestMatch),
            _ => Err(PolicyError::Unsupported(s.to_string())),
        }
    }
}

/// Chooses one path from position 0 to `N`.
///
/// Returns edge indices into `graph.edges`, in text order. An empty graph
/// yields an empty path.
pub(crate) trait PathSelector: Send + Sync {
    fn select_path(&self, graph: &SegmentGraph<'_>) -> Vec<usize>;
}

/// Best suffix from a position: (tokens, matched coverage, chosen edge).
#[derive(Clone, Copy)]
struct Best {
    tokens: usize,
    coverage: usize,
    edge: Option<usize>,
}

impl Best {
    /// Fewer tokens wins, then more coverage. Equal candidates do not
    /// replace, so the first-enumerated (shortest) edge is kept.
    fn improves_on(&self, current: &Best) -> bool {
        if current.edge.is_none() {
            return true;
        }
        (self.tokens, std::cmp::Reverse(self.coverage))
            < (current.tokens, std::cmp::Reverse(current.coverage))
    }
}

pub(crate) struct MaximumMatching;

impl PathSelector for MaximumMatching {
    fn select_path(&self, graph: &SegmentGraph<'_>) -> Vec<usize> {
        let n = graph.char_count();
        let _span =
            debug_span!("select_path", policy = "maximum-matching", char_count = n).entered();
        if n == 0 {
            return Vec::new();
        }

        let mut best = vec![
            Best {
                tokens: usize::MAX,
                coverage: 0,
                edge: None,
            };
            n + 1
        ];
        best[n] = Best {
            tokens: 0,
            coverage: 0,
            edge: None,
        };

        for pos in (0..n).rev() {
            for (idx, edge) in graph.outgoing(pos) {
                let next = best[edge.end];
                let candidate = Best {
                    tokens: next.tokens + 1,
                    coverage: next.coverage + edge.matched_coverage(),
                    edge: Some(idx),
                };
                if candidate.improves_on(&best[pos]) {
                    best[pos] = candidate;
                }
            }
        }

        let mut path = Vec::with_capacity(best[0].tokens);
        let mut pos = 0;
        while pos < n {
            // Every position below n has an outgoing edge.
            let Some(idx) = best[pos].edge else { break };
            path.push(idx);
            pos = graph.edges[idx].end;
        }
        debug!(tokens = path.len(), coverage = best[0].coverage);
        path
    }
}

pub(crate) struct GreedyLongestMatch;

impl PathSelector for GreedyLongestMatch {
    fn select_path(&self, graph: &SegmentGraph<'_>) -> Vec<usize> {
        let n = graph.char_count();
        let _span =
            debug_span!("select_path", policy = "greedy-longest-match", char_count = n).entered();

        let mut path = Vec::new();
        let mut pos = 0;
        while pos < n {
            // Outgoing edges are ascending by end, and a fallback edge only
            // exists where there is no dictionary edge.
            let Some((idx, edge)) = graph.outgoing(pos).last() else {
                break;
            };
            path.push(idx);
            pos = edge.end;
        }
        debug!(tokens = path.len());
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LexiconTrie;
    use crate::segmenter::graph::build_graph;

    fn segment(words: &[&str], policy: PathPolicy, text: &str) -> Vec<String> {
        let trie = LexiconTrie::build(words).unwrap();
        let graph = build_graph(&trie, text);
        policy
            .selector()
            .select_path(&graph)
            .into_iter()
            .map(|idx| graph.surface(&graph.edges[idx]).to_string())
            .collect()
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!(
            "maximum-matching".parse::<PathPolicy>(),
            Ok(PathPolicy::MaximumMatching)
        );
        assert_eq!("newmm".parse::<PathPolicy>(), Ok(PathPolicy::MaximumMatching));
        assert_eq!("MM".parse::<PathPolicy>(), Ok(PathPolicy::MaximumMatching));
        assert_eq!(
            "longest-matching".parse::<PathPolicy>(),
            Ok(PathPolicy::GreedyLongestMatch)
        );
        assert_eq!(
            "deepcut".parse::<PathPolicy>(),
            Err(PolicyError::Unsupported("deepcut".to_string()))
        );
    }

    #[test]
    fn test_policy_display_roundtrip() {
        for policy in [PathPolicy::MaximumMatching, PathPolicy::GreedyLongestMatch] {
            assert_eq!(policy.to_string().parse::<PathPolicy>(), Ok(policy));
        }
    }

    #[test]
    fn test_maximum_matching_basic() {
        let out = segment(&["กิน", "ข้าว"], PathPolicy::MaximumMatching, "กินข้าว");
        assert_eq!(out, vec!["กิน", "ข้าว"]);
    }

    #[test]
    fn test_greedy_is_not_optimal() {
        // Greedy takes "abc" and is left with "d", "e" (3 tokens);
        // maximum matching finds "ab" + "cde" (2 tokens).
        let words = ["ab", "abc", "cde"];
        assert_eq!(
            segment(&words, PathPolicy::GreedyLongestMatch, "abcde"),
            vec!["abc", "d", "e"]
        );
        assert_eq!(
            segment(&words, PathPolicy::MaximumMatching, "abcde"),
            vec!["ab", "cde"]
        );
    }

    #[test]
    fn test_coverage_breaks_token_ties() {
        // "ab|cx" and "abc|x" are both two tokens; the first matches four
        // chars, the second three.
        let words = ["ab", "abc", "cx"];
        assert_eq!(
            segment(&words, PathPolicy::MaximumMatching, "abcx"),
            vec!["ab", "cx"]
        );
    }

    #[test]
    fn test_shortest_edge_breaks_full_ties() {
        // "a|bc" and "ab|c" tie on tokens and coverage; the shorter first
        // edge wins.
        let words = ["a", "ab", "bc", "c"];
        assert_eq!(
            segment(&words, PathPolicy::MaximumMatching, "abc"),
            vec!["a", "bc"]
        );
    }

    #[test]
    fn test_unknown_prefix_then_match() {
        let words = ["ab"];
        assert_eq!(
            segment(&words, PathPolicy::MaximumMatching, "xab"),
            vec!["x", "ab"]
        );
    }

    #[test]
    fn test_empty_lexicon_every_char_falls_back() {
        for policy in [PathPolicy::MaximumMatching, PathPolicy::GreedyLongestMatch] {
            assert_eq!(segment(&[], policy, "abc"), vec!["a", "b", "c"]);
        }
    }

    #[test]
    fn test_empty_graph_empty_path() {
        for policy in [PathPolicy::MaximumMatching, PathPolicy::GreedyLongestMatch] {
            assert!(segment(&["a"], policy, "").is_empty());
        }
    }

    #[test]
    fn test_dead_end_prefix_is_avoided() {
        // "กิน" leads to "ข" with no match; "กิ" + "นข้าว" is fewer tokens
        let words = ["กิ", "กิน", "นข้าว"];
        assert_eq!(
            segment(&words, PathPolicy::MaximumMatching, "กินข้าว"),
            vec!["กิ", "นข้าว"]
        );
    }
}
