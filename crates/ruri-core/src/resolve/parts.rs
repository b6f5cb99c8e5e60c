//! URL component split and reassembly.

use serde::Serialize;
use std::fmt;

use super::scan;

/// A reference or base broken into its five components.
///
/// `scheme` keeps its trailing `:`, `query` its leading `?` and `hash` its
/// leading `#`. `authority` is the host portion without the `//` marker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UrlParts {
    pub scheme: Option<String>,
    pub authority: Option<String>,
    pub path: String,
    pub query: Option<String>,
    pub hash: Option<String>,
}

impl UrlParts {
    /// Splits `s` into components, accepting bare absolute or relative paths.
    ///
    /// Never fails: components that are not present are `None` (or an empty
    /// path). Backslashes in the path portion become `/`.
    pub fn parse(s: &str) -> Self {
        let (scheme, rest) = match scan::scheme_len(s) {
            Some(n) => (Some(&s[..n]), &s[n..]),
            None => (None, s),
        };
        let (body, query, hash) = scan::split_query_hash(rest);
        let body = scan::to_slashes(body);

        let split = scan::split_authority(&body).map(|(a, p)| (a.to_string(), p.to_string()));
        let (authority, path) = match split {
            Some((authority, path)) => (Some(authority), path),
            None => (None, body),
        };

        Self {
            scheme: scheme.map(str::to_string),
            authority,
            path,
            query: query.map(str::to_string),
            hash: hash.map(str::to_string),
        }
    }

    /// True when the scheme is exactly `file:`.
    pub fn is_file(&self) -> bool {
        self.scheme.as_deref() == Some("file:")
    }
}

impl fmt::Display for UrlParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.scheme {
            f.write_str(scheme)?;
        }
        if let Some(authority) = &self.authority {
            write!(f, "//{}", authority)?;
        }
        f.write_str(&self.path)?;
        if let Some(query) = &self.query {
            f.write_str(query)?;
        }
        if let Some(hash) = &self.hash {
            f.write_str(hash)?;
        }
        Ok(())
    }
}
