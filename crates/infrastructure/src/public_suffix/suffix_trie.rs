use compact_str::CompactString;
use rustc_hash::FxBuildHasher;
use smallvec::SmallVec;
use std::collections::HashMap;

/// One rule line of the public suffix list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuffixRule {
    /// `co.uk`
    Normal(String),
    /// `*.ck`, stored without the leading `*.`
    Wildcard(String),
    /// `!www.ck`, stored without the leading `!`
    Exception(String),
}

/// Parse one line of `public_suffix_list.dat`.
///
/// - blank or `// comment` → None
/// - only the first whitespace-separated token counts
pub fn parse_rule_line(line: &str) -> Option<SuffixRule> {
    let token = line.split_whitespace().next()?;
    if token.starts_with("//") {
        return None;
    }

    let token = token.trim_end_matches('.').to_lowercase();
    if let Some(rest) = token.strip_prefix('!') {
        return (!rest.is_empty()).then(|| SuffixRule::Exception(rest.to_string()));
    }
    if let Some(rest) = token.strip_prefix("*.") {
        return (!rest.is_empty()).then(|| SuffixRule::Wildcard(rest.to_string()));
    }
    (!token.is_empty()).then_some(SuffixRule::Normal(token))
}

#[derive(Default)]
struct TrieNode {
    children: HashMap<CompactString, TrieNode, FxBuildHasher>,
    /// The labels up to here are a public suffix.
    rule: bool,
    /// Every direct child label of this node is a public suffix.
    wildcard: bool,
    /// The labels up to here are *not* a public suffix, overriding a wildcard.
    exception: bool,
}

/// Public suffix rules stored as reversed label paths.
///
/// `co.uk` → traverse ["uk", "co"], mark "co" as a rule.
/// `*.ck`  → traverse ["ck"], mark "ck" as wildcard.
/// `!www.ck` → traverse ["ck", "www"], mark "www" as exception.
///
/// Built once from a downloaded list and replaced via ArcSwap.
#[derive(Default)]
pub struct SuffixTrie {
    root: TrieNode,
    rules: usize,
}

impl SuffixTrie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(list: &str) -> Self {
        let mut trie = Self::new();
        for rule in list.lines().filter_map(parse_rule_line) {
            trie.insert(&rule);
        }
        trie
    }

    pub fn len(&self) -> usize {
        self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules == 0
    }

    pub fn insert(&mut self, rule: &SuffixRule) {
        let name = match rule {
            SuffixRule::Normal(name) | SuffixRule::Wildcard(name) | SuffixRule::Exception(name) => {
                name
            }
        };

        let mut node = &mut self.root;
        for label in name.split('.').rev() {
            node = node.children.entry(CompactString::new(label)).or_default();
        }

        match rule {
            SuffixRule::Normal(_) => node.rule = true,
            SuffixRule::Wildcard(_) => node.wildcard = true,
            SuffixRule::Exception(_) => node.exception = true,
        }
        self.rules += 1;
    }

    /// Number of trailing labels of `domain` that form its public suffix.
    ///
    /// The longest matching rule wins, an exception beats everything, and a
    /// name no rule matches has a one-label suffix (the implicit `*` rule).
    pub fn suffix_labels(&self, domain: &str) -> usize {
        let labels: SmallVec<[&str; 8]> = domain.split('.').rev().collect();
        let mut node = &self.root;
        let mut suffix = 1;

        for (i, label) in labels.iter().enumerate() {
            if node.wildcard {
                suffix = suffix.max(i + 1);
            }
            match node.children.get(*label) {
                Some(child) => {
                    if child.exception {
                        return i;
                    }
                    if child.rule {
                        suffix = suffix.max(i + 1);
                    }
                    node = child;
                }
                None => break,
            }
        }

        suffix
    }

    /// The public suffix plus one label, or `None` when `domain` has no
    /// label left over.
    pub fn registrable_domain(&self, domain: &str) -> Option<String> {
        let domain = domain.trim_end_matches('.').to_lowercase();
        let labels: Vec<&str> = domain.split('.').collect();
        if labels.iter().any(|label| label.is_empty()) {
            return None;
        }

        let suffix = self.suffix_labels(&domain);
        if labels.len() <= suffix {
            return None;
        }
        Some(labels[labels.len() - suffix - 1..].join("."))
    }
}
