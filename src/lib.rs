//! # pathtrie
//!
//! A typed-wildcard path trie router: the dispatch core of an HTTP-serving
//! stack. Given a request method and path, it decides which registered
//! handler runs, in O(path depth) time, with deterministic precedence when
//! several registered patterns could match the same concrete path.
//!
//! ## Overview
//!
//! Paths are tokenized into `/`-delimited segments. A segment spelled exactly
//! `{int}`, `{float}` or `{str}` is a typed wildcard; everything else is a
//! literal. Routes live in a trie with one level per segment, and each
//! distinct route owns a fixed dispatch table indexed by the closed set of
//! six HTTP methods (GET, POST, PUT, DELETE, PATCH, HEAD).
//!
//! Matching prefers the most specific branch at every depth (exact literal,
//! then `{int}` for integer-syntax segments, then `{float}` for finite
//! numbers, then `{str}` for any segment) and backtracks out of dead ends, so
//! `/users/me` wins over `/users/{str}` for the concrete path `/users/me`
//! without shadowing deeper wildcard routes.
//!
//! A miss is reported precisely: [`RouterError::NotFound`] when no route
//! matches the path at all, [`RouterError::MethodNotAllowed`] when a route
//! exists but the method slot is empty. That distinction is what upstream
//! code needs to answer 404 vs 405.
//!
//! ## Example
//!
//! ```
//! use pathtrie::{Method, Router, RouterError};
//!
//! # fn main() -> Result<(), RouterError> {
//! let mut router = Router::new();
//! router.bind("/pets", Method::Get, "list_pets")?;
//! router.bind("/pets/{int}", Method::Get, "get_pet")?;
//! router.bind("/pets/{int}", Method::Delete, "delete_pet")?;
//!
//! let m = router.match_route("/pets/42", Method::Get)?;
//! assert_eq!(*m.handler, "get_pet");
//! assert_eq!(m.path, "/pets/{int}");
//!
//! assert!(matches!(
//!     router.match_route("/pets/42", Method::Post),
//!     Err(RouterError::MethodNotAllowed { .. })
//! ));
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`token`] - tokenizer: segment splitting, wildcard classification,
//!   canonical path rendering
//! - [`trie`] - the token trie: insertion and backtracking lookup
//! - [`method`] - closed HTTP method enumeration and wire-name mapping
//! - [`router`] - the [`Router`] facade tying the pieces together
//!
//! The library performs no I/O, installs no global state and no tracing
//! subscriber; it emits structured `tracing` events that the embedding
//! service can collect or ignore.

pub mod method;
pub mod router;
pub mod token;
pub mod trie;

pub use method::{Method, MethodParseError};
pub use router::{MethodList, RouteEntry, RouteMatch, Router, RouterError};
pub use token::{canonical_path, tokenize, Token, TokenKind, TokenSequence};
pub use trie::TokenTrie;
