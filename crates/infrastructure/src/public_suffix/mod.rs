pub mod list;
pub mod suffix_trie;

pub use list::PublicSuffixListAdapter;
pub use suffix_trie::{parse_rule_line, SuffixRule, SuffixTrie};
