//! Token trie: the route storage and lookup core.
//!
//! One tree level per path segment. Literal children are keyed by exact
//! segment text; each node additionally carries at most one child per
//! wildcard kind, because two same-kind wildcards at the same position are
//! indistinguishable and must collapse into one subtree. The branching factor
//! per node is therefore the literal map plus at most three wildcard
//! children, and both insertion and lookup are O(path depth).
//!
//! ## Matching precedence
//!
//! At every depth the most specific branch wins: an exact literal child
//! first, then `{int}` if the concrete segment has integer syntax, then
//! `{float}` if it parses as a finite number, then `{str}` as the most
//! general fallback. When a preferred branch dead-ends deeper in the path,
//! the recursion unwinds and tries the next-preferred branch at that depth,
//! so `/files/readme` being registered does not shadow
//! `/files/{str}/meta` for the request `/files/readme/meta`.
//!
//! The trie owns every leaf payload reachable from it; dropping the trie
//! drops all payloads.

// Keep allocations out of lookup: it runs per request.
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::format_push_string)]
#![deny(clippy::unnecessary_to_owned)]

use std::collections::HashMap;

use crate::token::{is_float_segment, is_int_segment, Token, TokenKind};

#[derive(Debug, Clone)]
struct TrieNode<T> {
    /// Present only when a registered route terminates exactly here.
    leaf: Option<T>,
    /// Literal children keyed by exact segment text.
    literal: HashMap<String, TrieNode<T>>,
    int_wildcard: Option<Box<TrieNode<T>>>,
    float_wildcard: Option<Box<TrieNode<T>>>,
    str_wildcard: Option<Box<TrieNode<T>>>,
}

impl<T> TrieNode<T> {
    fn new() -> Self {
        TrieNode {
            leaf: None,
            literal: HashMap::new(),
            int_wildcard: None,
            float_wildcard: None,
            str_wildcard: None,
        }
    }

    /// Child reached by `token`, created on first use. Wildcard tokens of the
    /// same kind land on the same child regardless of spelling context.
    fn child_mut(&mut self, token: &Token) -> &mut TrieNode<T> {
        match token.kind() {
            TokenKind::Literal => self
                .literal
                .entry(token.text().to_string())
                .or_insert_with(TrieNode::new),
            TokenKind::IntWildcard => self.int_wildcard.get_or_insert_with(Default::default),
            TokenKind::FloatWildcard => self.float_wildcard.get_or_insert_with(Default::default),
            TokenKind::StrWildcard => self.str_wildcard.get_or_insert_with(Default::default),
        }
    }

    /// Backtracking search over the concrete request tokens. `None` from a
    /// preferred branch means "keep trying siblings", which is all the
    /// tri-state the recursion needs.
    fn search(&self, tokens: &[Token]) -> Option<&T> {
        let Some((head, rest)) = tokens.split_first() else {
            // End of the request path: a node without a leaf is no route,
            // even if children exist below it.
            return self.leaf.as_ref();
        };
        let segment = head.text();

        // Wildcard spellings never appear as concrete request segments, so a
        // literal child is only tried for plain literal tokens.
        if head.kind() == TokenKind::Literal {
            if let Some(child) = self.literal.get(segment) {
                if let Some(found) = child.search(rest) {
                    return Some(found);
                }
            }
        }
        if is_int_segment(segment) {
            if let Some(child) = &self.int_wildcard {
                if let Some(found) = child.search(rest) {
                    return Some(found);
                }
            }
        }
        if is_float_segment(segment) {
            if let Some(child) = &self.float_wildcard {
                if let Some(found) = child.search(rest) {
                    return Some(found);
                }
            }
        }
        match &self.str_wildcard {
            Some(child) => child.search(rest),
            None => None,
        }
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a T>) {
        if let Some(leaf) = &self.leaf {
            out.push(leaf);
        }
        for child in self.literal.values() {
            child.collect_leaves(out);
        }
        for child in [&self.int_wildcard, &self.float_wildcard, &self.str_wildcard]
            .into_iter()
            .flatten()
        {
            child.collect_leaves(out);
        }
    }
}

impl<T> Default for TrieNode<T> {
    fn default() -> Self {
        TrieNode::new()
    }
}

/// Trie keyed by token equivalence: literal tokens compare by text, wildcard
/// tokens by kind. Generic over the leaf payload it owns.
#[derive(Debug, Clone)]
pub struct TokenTrie<T> {
    root: TrieNode<T>,
}

impl<T> TokenTrie<T> {
    #[must_use]
    pub fn new() -> Self {
        TokenTrie {
            root: TrieNode::new(),
        }
    }

    /// Walk (creating as needed) the node path for `tokens` and return its
    /// leaf, calling `make` only when no route has terminated there before.
    ///
    /// An existing leaf is returned for in-place mutation; it is never
    /// replaced, so bindings already stored in it survive re-insertion of the
    /// same token sequence.
    pub fn insert_with(&mut self, tokens: &[Token], make: impl FnOnce() -> T) -> &mut T {
        let mut node = &mut self.root;
        for token in tokens {
            node = node.child_mut(token);
        }
        node.leaf.get_or_insert_with(make)
    }

    /// Find the leaf for a concrete request token sequence, applying the
    /// literal-over-wildcard precedence and backtracking described in the
    /// module docs. An empty sequence never matches: no route terminates at
    /// the root.
    #[must_use]
    pub fn lookup(&self, tokens: &[Token]) -> Option<&T> {
        self.root.search(tokens)
    }

    /// Find the leaf for `tokens` by the node-keying equivalence used at
    /// insertion (literals by text, wildcards by kind). No precedence, no
    /// backtracking: this is the registration-side view of the tree.
    #[must_use]
    pub fn lookup_exact(&self, tokens: &[Token]) -> Option<&T> {
        let mut node = &self.root;
        for token in tokens {
            node = match token.kind() {
                TokenKind::Literal => node.literal.get(token.text())?,
                TokenKind::IntWildcard => node.int_wildcard.as_deref()?,
                TokenKind::FloatWildcard => node.float_wildcard.as_deref()?,
                TokenKind::StrWildcard => node.str_wildcard.as_deref()?,
            };
        }
        node.leaf.as_ref()
    }

    /// All leaf payloads, in no particular order.
    #[must_use]
    pub fn leaves(&self) -> Vec<&T> {
        let mut out = Vec::new();
        self.root.collect_leaves(&mut out);
        out
    }
}

impl<T> Default for TokenTrie<T> {
    fn default() -> Self {
        TokenTrie::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::tokenize;

    fn insert(trie: &mut TokenTrie<&'static str>, path: &str, value: &'static str) {
        trie.insert_with(&tokenize(path), || value);
    }

    #[test]
    fn test_literal_insert_and_lookup() {
        let mut trie = TokenTrie::new();
        insert(&mut trie, "/path/to/file", "file");
        assert_eq!(trie.lookup(&tokenize("/path/to/file")), Some(&"file"));
        assert_eq!(trie.lookup(&tokenize("/path/to/other")), None);
    }

    #[test]
    fn test_prefix_without_leaf_is_no_route() {
        let mut trie = TokenTrie::new();
        insert(&mut trie, "/a/b/c", "deep");
        assert_eq!(trie.lookup(&tokenize("/a/b")), None);
    }

    #[test]
    fn test_empty_sequence_never_matches() {
        let mut trie = TokenTrie::new();
        insert(&mut trie, "/a", "a");
        assert_eq!(trie.lookup(&tokenize("/")), None);
    }

    #[test]
    fn test_existing_leaf_is_kept() {
        let mut trie = TokenTrie::new();
        insert(&mut trie, "/x", "first");
        insert(&mut trie, "/x", "second");
        assert_eq!(trie.lookup(&tokenize("/x")), Some(&"first"));
    }

    #[test]
    fn test_same_kind_wildcards_collapse() {
        let mut trie = TokenTrie::new();
        insert(&mut trie, "/users/{int}", "first");
        insert(&mut trie, "/users/{int}", "second");
        assert_eq!(trie.leaves().len(), 1);
        assert_eq!(trie.lookup(&tokenize("/users/7")), Some(&"first"));
    }

    #[test]
    fn test_int_wildcard_requires_integer_syntax() {
        let mut trie = TokenTrie::new();
        insert(&mut trie, "/users/{int}", "by_id");
        assert_eq!(trie.lookup(&tokenize("/users/42")), Some(&"by_id"));
        assert_eq!(trie.lookup(&tokenize("/users/-3")), Some(&"by_id"));
        assert_eq!(trie.lookup(&tokenize("/users/4.2")), None);
        assert_eq!(trie.lookup(&tokenize("/users/abc")), None);
    }

    #[test]
    fn test_float_wildcard_requires_numeric_syntax() {
        let mut trie = TokenTrie::new();
        insert(&mut trie, "/price/{float}", "by_price");
        assert_eq!(trie.lookup(&tokenize("/price/4.2")), Some(&"by_price"));
        assert_eq!(trie.lookup(&tokenize("/price/42")), Some(&"by_price"));
        assert_eq!(trie.lookup(&tokenize("/price/cheap")), None);
    }

    #[test]
    fn test_literal_beats_every_wildcard() {
        let mut trie = TokenTrie::new();
        insert(&mut trie, "/users/42", "literal");
        insert(&mut trie, "/users/{int}", "int");
        insert(&mut trie, "/users/{str}", "str");
        assert_eq!(trie.lookup(&tokenize("/users/42")), Some(&"literal"));
        assert_eq!(trie.lookup(&tokenize("/users/7")), Some(&"int"));
        assert_eq!(trie.lookup(&tokenize("/users/me")), Some(&"str"));
    }

    #[test]
    fn test_wildcard_precedence_narrowest_first() {
        let mut trie = TokenTrie::new();
        insert(&mut trie, "/v/{int}", "int");
        insert(&mut trie, "/v/{float}", "float");
        insert(&mut trie, "/v/{str}", "str");
        assert_eq!(trie.lookup(&tokenize("/v/42")), Some(&"int"));
        assert_eq!(trie.lookup(&tokenize("/v/4.2")), Some(&"float"));
        assert_eq!(trie.lookup(&tokenize("/v/abc")), Some(&"str"));
    }

    #[test]
    fn test_backtracks_from_literal_dead_end() {
        let mut trie = TokenTrie::new();
        insert(&mut trie, "/files/readme", "readme");
        insert(&mut trie, "/files/{str}/meta", "meta");
        // The literal branch matches "readme" but has nothing below it; the
        // walk must back out and take the {str} branch instead.
        assert_eq!(trie.lookup(&tokenize("/files/readme/meta")), Some(&"meta"));
        assert_eq!(trie.lookup(&tokenize("/files/readme")), Some(&"readme"));
    }

    #[test]
    fn test_backtracks_across_wildcard_kinds() {
        let mut trie = TokenTrie::new();
        insert(&mut trie, "/n/{int}/x", "int_x");
        insert(&mut trie, "/n/{float}/y", "float_y");
        insert(&mut trie, "/n/{str}/z", "str_z");
        // "42" satisfies all three kinds; only the subtree shape decides.
        assert_eq!(trie.lookup(&tokenize("/n/42/x")), Some(&"int_x"));
        assert_eq!(trie.lookup(&tokenize("/n/42/y")), Some(&"float_y"));
        assert_eq!(trie.lookup(&tokenize("/n/42/z")), Some(&"str_z"));
    }

    #[test]
    fn test_wildcard_spelling_in_request_is_not_literal() {
        let mut trie = TokenTrie::new();
        insert(&mut trie, "/users/{str}", "any");
        // A request whose segment is literally "{str}" still only matches
        // through the wildcard branch.
        assert_eq!(trie.lookup(&tokenize("/users/{str}")), Some(&"any"));
    }

    #[test]
    fn test_exact_lookup_follows_token_equivalence() {
        let mut trie = TokenTrie::new();
        insert(&mut trie, "/users/{int}", "int");
        insert(&mut trie, "/users/{str}", "str");
        assert_eq!(trie.lookup_exact(&tokenize("/users/{int}")), Some(&"int"));
        assert_eq!(trie.lookup_exact(&tokenize("users/{str}/")), Some(&"str"));
        assert_eq!(trie.lookup_exact(&tokenize("/users/{float}")), None);
        assert_eq!(trie.lookup_exact(&tokenize("/users/42")), None);
    }

    #[test]
    fn test_leaves_collects_every_entry() {
        let mut trie = TokenTrie::new();
        insert(&mut trie, "/a", "a");
        insert(&mut trie, "/a/b", "ab");
        insert(&mut trie, "/c/{int}", "ci");
        let mut leaves = trie.leaves();
        leaves.sort_unstable();
        assert_eq!(leaves, vec![&"a", &"ab", &"ci"]);
    }
}
