//! Router facade: binds handlers to paths and matches requests to handlers.
//!
//! ## Overview
//!
//! The router composes the tokenizer and the token trie behind two
//! operations: [`Router::bind`] registers a handler for a (path, method)
//! pair, and [`Router::match_route`] resolves a concrete request to the
//! handler that should run. Each distinct token sequence owns exactly one
//! [`RouteEntry`] holding a method-indexed dispatch table, so binding the
//! same path under a second method mutates that entry instead of creating a
//! duplicate.
//!
//! A router is an explicit value, not process state: construct as many as
//! you need (one per test, one per virtual host) and drop them normally.
//!
//! ## Example
//!
//! ```
//! use pathtrie::{Method, Router, RouterError};
//!
//! # fn main() -> Result<(), RouterError> {
//! let mut router = Router::new();
//! router.bind("/users/{int}", Method::Get, "get_user")?;
//! router.bind("/users/me", Method::Get, "get_self")?;
//!
//! assert_eq!(*router.match_route("/users/42", Method::Get)?.handler, "get_user");
//! assert_eq!(*router.match_route("/users/me", Method::Get)?.handler, "get_self");
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! No operation suspends or performs I/O. Binding takes `&mut Router`, so
//! the borrow checker enforces that registration happens before shared
//! matching begins; once behind `&Router` (or `Arc<Router>`) any number of
//! threads may match concurrently. Runtime re-registration needs external
//! synchronization chosen by the embedder, e.g. `RwLock<Router<H>>`.

use std::fmt;

use smallvec::SmallVec;
use tracing::{debug, info, warn};

use crate::method::Method;
use crate::token::{self, TokenSequence};
use crate::trie::TokenTrie;

/// Method list sized to the closed method set, stack-allocated.
pub type MethodList = SmallVec<[Method; Method::COUNT]>;

/// Leaf payload stored in the trie: one record per distinct token sequence
/// ever bound.
///
/// The `path` is the canonical rendering of the token sequence, not the
/// caller's original spelling, so `/x//y/` and `x/y` share one entry. The
/// originating tokens are kept for re-derivation and debugging.
#[derive(Debug, Clone)]
pub struct RouteEntry<H> {
    path: String,
    tokens: TokenSequence,
    handlers: [Option<H>; Method::COUNT],
}

impl<H> RouteEntry<H> {
    fn new(path: String, tokens: TokenSequence) -> Self {
        RouteEntry {
            path,
            tokens,
            handlers: std::array::from_fn(|_| None),
        }
    }

    /// Canonical path this entry was registered under.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Token sequence the canonical path derives from.
    #[must_use]
    pub fn tokens(&self) -> &[token::Token] {
        &self.tokens
    }

    /// Handler bound for `method`, if any.
    #[must_use]
    pub fn handler(&self, method: Method) -> Option<&H> {
        self.handlers[method.index()].as_ref()
    }

    /// Methods with a handler bound, in dispatch-table order.
    #[must_use]
    pub fn allowed_methods(&self) -> MethodList {
        Method::ALL
            .into_iter()
            .filter(|m| self.handlers[m.index()].is_some())
            .collect()
    }
}

/// Result of successfully matching a request to a route.
#[derive(Debug)]
pub struct RouteMatch<'a, H> {
    /// The handler that should process this request.
    pub handler: &'a H,
    /// Canonical path of the matched route (e.g. `/users/{int}`), not the
    /// concrete request path.
    pub path: &'a str,
    /// The method the match was made for.
    pub method: Method,
}

/// Routing outcomes that are not a match. All are local and recoverable;
/// `NotFound` and `MethodNotAllowed` stay distinct so the transport layer
/// can answer 404 vs 405 correctly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// The path tokenized to an empty sequence; nothing was registered.
    InvalidRoute {
        /// The path as the caller spelled it.
        path: String,
    },
    /// No registered route matches the request path.
    NotFound {
        /// The concrete request path.
        path: String,
    },
    /// A route exists at this path, but not for the requested method.
    MethodNotAllowed {
        /// Canonical path of the route that matched.
        path: String,
        /// Methods that are bound at this path, for an `Allow` header.
        allowed: MethodList,
    },
}

impl fmt::Display for RouterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouterError::InvalidRoute { path } => {
                write!(f, "invalid route '{path}': path has no segments")
            }
            RouterError::NotFound { path } => {
                write!(f, "no route matches '{path}'")
            }
            RouterError::MethodNotAllowed { path, allowed } => {
                write!(f, "method not allowed on '{path}' (allowed:")?;
                for method in allowed {
                    write!(f, " {method}")?;
                }
                write!(f, ")")
            }
        }
    }
}

impl std::error::Error for RouterError {}

/// Trie-backed request router, generic over the handler reference type.
///
/// Handlers are stored by value; use a cheap reference type (`fn` pointer,
/// `Arc<dyn Fn...>`, a handler-name string) when the caller keeps ownership.
#[derive(Debug, Clone)]
pub struct Router<H> {
    trie: TokenTrie<RouteEntry<H>>,
    route_count: usize,
}

impl<H> Router<H> {
    /// Create an empty router.
    #[must_use]
    pub fn new() -> Self {
        Router {
            trie: TokenTrie::new(),
            route_count: 0,
        }
    }

    /// Register `handler` for `path` under `method`.
    ///
    /// Re-binding the same (path, method) pair silently replaces the previous
    /// handler; binding a different method on the same path extends the
    /// existing entry's dispatch table.
    ///
    /// # Errors
    ///
    /// `InvalidRoute` when the path tokenizes to an empty sequence (`""`,
    /// `"/"`, `"///"`). No state is mutated on failure.
    pub fn bind(&mut self, path: &str, method: Method, handler: H) -> Result<(), RouterError> {
        let tokens = token::tokenize(path);
        if tokens.is_empty() {
            warn!(method = %method, path = %path, "Rejected bind of unroutable path");
            return Err(RouterError::InvalidRoute {
                path: path.to_string(),
            });
        }
        let canonical = token::canonical_path(&tokens);
        let mut created = false;
        let entry = self.trie.insert_with(&tokens, || {
            created = true;
            RouteEntry::new(canonical, tokens.clone())
        });
        entry.handlers[method.index()] = Some(handler);
        info!(
            method = %method,
            route = %entry.path,
            new_entry = created,
            "Route bound"
        );
        if created {
            self.route_count += 1;
        }
        Ok(())
    }

    /// Match a concrete request path and method to a handler.
    ///
    /// The path gets the same normalization as `bind` (leading slash
    /// optional, duplicate slashes collapsed), then the trie is walked with
    /// literal-over-wildcard precedence and backtracking.
    ///
    /// # Errors
    ///
    /// `NotFound` when no registered route matches the path;
    /// `MethodNotAllowed` when a route matches but has no handler for
    /// `method` (the error carries the methods that are bound).
    pub fn match_route(&self, path: &str, method: Method) -> Result<RouteMatch<'_, H>, RouterError> {
        debug!(method = %method, path = %path, "Route match attempt");
        let tokens = token::tokenize(path);
        let Some(entry) = self.trie.lookup(&tokens) else {
            warn!(method = %method, path = %path, "No route matched");
            return Err(RouterError::NotFound {
                path: path.to_string(),
            });
        };
        match entry.handler(method) {
            Some(handler) => {
                info!(
                    method = %method,
                    path = %path,
                    route = %entry.path,
                    "Route matched"
                );
                Ok(RouteMatch {
                    handler,
                    path: entry.path(),
                    method,
                })
            }
            None => {
                let allowed = entry.allowed_methods();
                warn!(
                    method = %method,
                    path = %path,
                    route = %entry.path,
                    allowed = ?allowed,
                    "Route matched but method is not bound"
                );
                Err(RouterError::MethodNotAllowed {
                    path: entry.path.clone(),
                    allowed,
                })
            }
        }
    }

    /// Number of distinct routes (token sequences) registered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.route_count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.route_count == 0
    }

    /// Canonical paths of every registered route, sorted.
    ///
    /// Useful for startup diagnostics and metrics pre-registration.
    #[must_use]
    pub fn paths(&self) -> Vec<String> {
        let mut out: Vec<String> = self
            .trie
            .leaves()
            .into_iter()
            .map(|entry| entry.path.clone())
            .collect();
        out.sort_unstable();
        out
    }

    /// Look up the route entry for a registered path spelling, if any.
    ///
    /// This is a registration-side query: tokens are compared by equivalence
    /// (literals by text, wildcards by kind), so `/users/{int}` finds the
    /// entry bound under that pattern rather than wildcard-matching `{int}`
    /// as a concrete segment.
    #[must_use]
    pub fn entry(&self, path: &str) -> Option<&RouteEntry<H>> {
        self.trie.lookup_exact(&token::tokenize(path))
    }
}

impl<H> Default for Router<H> {
    fn default() -> Self {
        Router::new()
    }
}
