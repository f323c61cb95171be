use std::path::Path;

use thai_core::lexicon::{Lexicon, LexiconTrie};

use super::{die, open_lexicon};

pub fn lookup(dict_file: &str, word: &str) {
    let trie = die!(open_lexicon(dict_file), "Error opening lexicon: {}");
    println!("{word}: {}", if trie.contains(word) { "found" } else { "not found" });

    let prefixes = trie.common_prefix_search(word);
    if prefixes.is_empty() {
        println!("no prefix matches");
        return;
    }
    println!("prefix matches:");
    for len in prefixes {
        let prefix: String = word.chars().take(len).collect();
        println!("  {prefix} ({len} chars)");
    }
}

pub fn compile(input_file: &str, output_file: &str) {
    let lexicon = die!(Lexicon::load(input_file), "Error reading lexicon: {}");
    let trie = LexiconTrie::from_lexicon(lexicon);
    die!(trie.save(Path::new(output_file)), "Error writing compiled lexicon: {}");
    eprintln!("Compiled {} entries into {output_file}", trie.len());
}

pub fn info(file: &str) {
    let trie = die!(open_lexicon(file), "Error opening lexicon: {}");
    println!("entries:       {}", trie.len());
    println!("trie nodes:    {}", trie.node_count());
    println!("longest entry: {} chars", trie.max_entry_chars());
}
