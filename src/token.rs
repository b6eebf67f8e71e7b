//! Path tokenizer.
//!
//! Converts a route or request path into an ordered sequence of typed
//! segments. Splitting on `/` discards empty segments, so `/a//b/` and `a/b`
//! tokenize identically and a leading slash is always optional.
//! Classification recognizes the exact wildcard spellings `{int}`, `{float}`
//! and `{str}` as whole segments; every other segment, including other
//! `{...}` text, is a literal. There is no case folding and no
//! percent-decoding: the tokenizer is pure, and identical inputs always yield
//! identical sequences.
//!
//! A path that tokenizes to an empty sequence (`""`, `"/"`, `"///"`) is a
//! valid tokenizer *output*; the router rejects it at bind time because no
//! route can terminate at the tree root.

use smallvec::SmallVec;

/// Wildcard spelling matching any integer-syntax segment.
pub const WILDCARD_INT: &str = "{int}";
/// Wildcard spelling matching any finite-number segment.
pub const WILDCARD_FLOAT: &str = "{float}";
/// Wildcard spelling matching any non-empty segment.
pub const WILDCARD_STR: &str = "{str}";

/// Maximum path depth before the token sequence spills to the heap.
/// Most REST paths have well under 8 segments.
pub const MAX_INLINE_TOKENS: usize = 8;

/// A full path as an ordered token list, stack-allocated for shallow paths.
pub type TokenSequence = SmallVec<[Token; MAX_INLINE_TOKENS]>;

/// Classification of one `/`-delimited path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Matches only a segment with identical text.
    Literal,
    /// `{int}`: matches segments with integer syntax.
    IntWildcard,
    /// `{float}`: matches segments that parse as a finite number.
    FloatWildcard,
    /// `{str}`: matches any non-empty segment.
    StrWildcard,
}

impl TokenKind {
    fn classify(segment: &str) -> TokenKind {
        match segment {
            WILDCARD_INT => TokenKind::IntWildcard,
            WILDCARD_FLOAT => TokenKind::FloatWildcard,
            WILDCARD_STR => TokenKind::StrWildcard,
            _ => TokenKind::Literal,
        }
    }
}

/// One classified path segment. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    text: String,
}

impl Token {
    fn new(segment: &str) -> Self {
        Token {
            kind: TokenKind::classify(segment),
            text: segment.to_string(),
        }
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The raw segment text as it appeared in the path.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Fixed textual form used when rendering canonical paths. Literals
    /// render verbatim; wildcards render as their canonical spelling.
    #[must_use]
    pub fn canonical_text(&self) -> &str {
        match self.kind {
            TokenKind::Literal => &self.text,
            TokenKind::IntWildcard => WILDCARD_INT,
            TokenKind::FloatWildcard => WILDCARD_FLOAT,
            TokenKind::StrWildcard => WILDCARD_STR,
        }
    }
}

/// Tokenize a path into its segment sequence.
///
/// # Example
///
/// ```
/// use pathtrie::token::{tokenize, TokenKind};
///
/// let tokens = tokenize("/users/{int}/profile");
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1].kind(), TokenKind::IntWildcard);
/// ```
#[must_use]
pub fn tokenize(path: &str) -> TokenSequence {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(Token::new)
        .collect()
}

/// Render the canonical textual form of a token sequence: `/`-joined with a
/// leading slash, no trailing slash, wildcards in their fixed spelling.
///
/// Two route spellings that tokenize identically render to the same canonical
/// path, which is why the canonical path works as the tree's effective key.
#[must_use]
pub fn canonical_path(tokens: &[Token]) -> String {
    let mut out = String::with_capacity(tokens.iter().map(|t| t.canonical_text().len() + 1).sum());
    for token in tokens {
        out.push('/');
        out.push_str(token.canonical_text());
    }
    out
}

/// Whether a concrete request segment satisfies the `{int}` wildcard.
#[inline]
#[must_use]
pub fn is_int_segment(segment: &str) -> bool {
    segment.parse::<i64>().is_ok()
}

/// Whether a concrete request segment satisfies the `{float}` wildcard.
/// Integer-syntax segments qualify too; `inf` and `NaN` spellings do not.
#[inline]
#[must_use]
pub fn is_float_segment(segment: &str) -> bool {
    segment.parse::<f64>().is_ok_and(f64::is_finite)
}
