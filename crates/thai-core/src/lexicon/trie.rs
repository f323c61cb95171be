use std::collections::BTreeMap;

use super::{Lexicon, LexiconError};

#[derive(Debug, Default)]
struct TrieNode {
    children: BTreeMap<char, u32>,
    terminal: bool,
}

/// Immutable character trie over a `Lexicon`.
///
/// Nodes live in one arena; node 0 is the root. Nothing is mutated after
/// construction, so a store can be shared across threads behind an `Arc`.
#[derive(Debug)]
pub struct LexiconTrie {
    nodes: Vec<TrieNode>,
    entries: Vec<String>,
    max_entry_chars: usize,
}

impl LexiconTrie {
    /// Build a store from raw entries. Fails on an empty entry; duplicates
    /// are dropped.
    pub fn build<I, S>(entries: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::from_lexicon(Lexicon::new(entries)?))
    }

    pub fn from_lexicon(lexicon: Lexicon) -> Self {
        let mut trie = Self {
            nodes: vec![TrieNode::default()],
            entries: Vec::with_capacity(lexicon.len()),
            max_entry_chars: 0,
        };
        for entry in lexicon.into_entries() {
            trie.insert(&entry);
            trie.entries.push(entry);
        }
        trie
    }

    fn insert(&mut self, word: &str) {
        let mut node = 0usize;
        let mut chars = 0usize;
        for c in word.chars() {
            chars += 1;
            node = match self.nodes[node].children.get(&c) {
                Some(&child) => child as usize,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node].children.insert(c, child as u32);
                    child
                }
            };
        }
        self.nodes[node].terminal = true;
        self.max_entry_chars = self.max_entry_chars.max(chars);
    }

    fn child(&self, node: usize, c: char) -> Option<usize> {
        self.nodes[node].children.get(&c).map(|&i| i as usize)
    }

    /// Exact membership.
    pub fn contains(&self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let mut node = 0;
        for c in word.chars() {
            match self.child(node, c) {
                Some(next) => node = next,
                None => return false,
            }
        }
        self.nodes[node].terminal
    }

    /// Every `end > start` such that `text[start..end]` is an entry,
    /// shortest match first. Cost is bounded by the longest match, not by
    /// lexicon size.
    pub fn lookup_prefixes(&self, text: &[char], start: usize) -> Vec<usize> {
        let Some(rest) = text.get(start..) else {
            return Vec::new();
        };
        self.prefix_lengths(rest.iter().copied())
            .into_iter()
            .map(|len| start + len)
            .collect()
    }

    /// Char lengths of all entries that are prefixes of `query`, ascending.
    pub fn common_prefix_search(&self, query: &str) -> Vec<usize> {
        self.prefix_lengths(query.chars())
    }

    fn prefix_lengths(&self, chars: impl Iterator<Item = char>) -> Vec<usize> {
        let mut lengths = Vec::new();
        let mut node = 0;
        for (i, c) in chars.enumerate() {
            match self.child(node, c) {
                Some(next) => node = next,
                None => break,
            }
            if self.nodes[node].terminal {
                lengths.push(i + 1);
            }
        }
        lengths
    }

    /// Entries in insertion order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub(super) fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length in chars of the longest entry.
    pub fn max_entry_chars(&self) -> usize {
        self.max_entry_chars
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_trie() -> LexiconTrie {
        LexiconTrie::build(["กิน", "กิ", "ข้าว", "ข้าวผัด", "น้ำ"]).unwrap()
    }

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_contains() {
        let trie = sample_trie();
        assert!(trie.contains("กิน"));
        assert!(trie.contains("ข้าวผัด"));
        assert!(!trie.contains("ข้า"));
        assert!(!trie.contains("ข้าวผั"));
        assert!(!trie.contains(""));
        assert!(!trie.contains("abc"));
    }

    #[test]
    fn test_lookup_prefixes_shortest_first() {
        let trie = sample_trie();
        let text = chars("ข้าวผัดกิน");
        // ข้าว = 4 chars, ข้าวผัด = 7 chars
        assert_eq!(trie.lookup_prefixes(&text, 0), vec![4, 7]);
        // กิ, กิน start at char 7
        assert_eq!(trie.lookup_prefixes(&text, 7), vec![9, 10]);
        assert!(trie.lookup_prefixes(&text, 1).is_empty());
    }

    #[test]
    fn test_lookup_prefixes_out_of_range() {
        let trie = sample_trie();
        let text = chars("กิน");
        assert!(trie.lookup_prefixes(&text, 3).is_empty());
        assert!(trie.lookup_prefixes(&text, 10).is_empty());
    }

    #[test]
    fn test_common_prefix_search() {
        let trie = sample_trie();
        assert_eq!(trie.common_prefix_search("กินข้าว"), vec![2, 3]);
        assert!(trie.common_prefix_search("").is_empty());
    }

    #[test]
    fn test_build_rejects_empty() {
        let err = LexiconTrie::build(["กิน", ""]).unwrap_err();
        assert!(matches!(err, LexiconError::InvalidEntry { index: 1 }));
    }

    #[test]
    fn test_duplicates_collapsed() {
        let trie = LexiconTrie::build(["กิน", "กิน", "กิน"]).unwrap();
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.words().collect::<Vec<_>>(), vec!["กิน"]);
    }

    #[test]
    fn test_empty_trie() {
        let trie = LexiconTrie::build(Vec::<String>::new()).unwrap();
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);
        assert!(trie.lookup_prefixes(&chars("abc"), 0).is_empty());
    }

    #[test]
    fn test_max_entry_chars() {
        let trie = sample_trie();
        assert_eq!(trie.max_entry_chars(), 7);
    }

    #[test]
    fn test_shared_prefix_nodes() {
        // ข้าว and ข้าวผัด share the first four nodes
        let trie = LexiconTrie::build(["ข้าว", "ข้าวผัด"]).unwrap();
        assert_eq!(trie.node_count(), 1 + 7);
    }
}
