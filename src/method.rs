//! Closed HTTP method enumeration and wire-name mapping.
//!
//! The router dispatches on a fixed set of six methods. Each variant owns one
//! slot in a route's dispatch table, so the mapping between variants and table
//! indices is part of the type. The string mapping is total in both
//! directions: [`Method::as_str`] never fails, and parsing rejects anything
//! outside the case-sensitive six-name set instead of falling back to a
//! default method.

use std::fmt;
use std::str::FromStr;

/// HTTP methods the dispatch table supports.
///
/// The set is closed. Custom verbs are not an extension point; an
/// unrecognized wire name fails to parse with [`MethodParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
}

impl Method {
    /// Number of supported methods; also the dispatch table length.
    pub const COUNT: usize = 6;

    /// All supported methods in dispatch-table order.
    pub const ALL: [Method; Method::COUNT] = [
        Method::Get,
        Method::Post,
        Method::Put,
        Method::Delete,
        Method::Patch,
        Method::Head,
    ];

    /// Dispatch-table slot for this method.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Case-sensitive wire name (`"GET"`, `"POST"`, ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
            Method::Head => "HEAD",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a wire name is outside the supported method set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodParseError {
    name: String,
}

impl MethodParseError {
    /// The rejected wire name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for MethodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unsupported HTTP method '{}': expected one of GET, POST, PUT, DELETE, PATCH, HEAD",
            self.name
        )
    }
}

impl std::error::Error for MethodParseError {}

impl FromStr for Method {
    type Err = MethodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "DELETE" => Ok(Method::Delete),
            "PATCH" => Ok(Method::Patch),
            "HEAD" => Ok(Method::Head),
            other => Err(MethodParseError {
                name: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_name_round_trip() {
        for method in Method::ALL {
            let parsed: Method = method.as_str().parse().unwrap();
            assert_eq!(parsed, method);
        }
    }

    #[test]
    fn test_indices_are_distinct_and_in_range() {
        for (i, method) in Method::ALL.iter().enumerate() {
            assert_eq!(method.index(), i);
            assert!(method.index() < Method::COUNT);
        }
    }

    #[test]
    fn test_unknown_method_is_rejected() {
        let err = "TRACE".parse::<Method>().unwrap_err();
        assert_eq!(err.name(), "TRACE");
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("get".parse::<Method>().is_err());
        assert!("Post".parse::<Method>().is_err());
    }

    #[test]
    fn test_empty_string_is_rejected() {
        assert!("".parse::<Method>().is_err());
    }
}
