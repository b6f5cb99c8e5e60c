//! Combine a classified reference with its decomposed base.

use super::classify::InputKind;
use super::parts::UrlParts;
use super::scan;

/// Builds the pre-normalization result for `reference` (of kind `kind`) against `base`.
pub(crate) fn merge(kind: InputKind, reference: UrlParts, base: UrlParts) -> UrlParts {
    match kind {
        InputKind::Absolute => reference,
        InputKind::ProtocolRelative => UrlParts {
            scheme: base.scheme,
            ..reference
        },
        InputKind::WindowsAbsolute => {
            let path = windows_path(&reference.path, base.is_file());
            UrlParts {
                scheme: base.scheme,
                authority: base.authority,
                path,
                query: reference.query,
                hash: reference.hash,
            }
        }
        InputKind::AbsolutePath => UrlParts {
            scheme: base.scheme,
            authority: base.authority,
            ..reference
        },
        InputKind::Relative => {
            let path = merge_paths(&base, &reference.path);
            UrlParts {
                scheme: base.scheme,
                authority: base.authority,
                path,
                query: reference.query,
                hash: reference.hash,
            }
        }
        InputKind::Query => UrlParts {
            query: reference.query,
            hash: reference.hash,
            ..base
        },
        InputKind::Hash => UrlParts {
            hash: reference.hash,
            ..base
        },
        InputKind::Empty => base,
    }
}

/// RFC 3986 §5.3 merge, also applied to plain filesystem-style bases.
fn merge_paths(base: &UrlParts, rel: &str) -> String {
    match base.path.rfind('/') {
        Some(i) => format!("{}{}", &base.path[..=i], rel),
        None if base.authority.is_some() => format!("/{}", rel),
        None => rel.to_string(),
    }
}

/// `C:/assets/x` becomes `/assets/x`, or `/C:/assets/x` under a `file:` base.
fn windows_path(path: &str, keep_drive: bool) -> String {
    if keep_drive {
        return format!("/{}", path);
    }
    match scan::drive_prefix_len(path) {
        Some(n) => format!("/{}", &path[n..]),
        None => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn merged(kind: InputKind, input: &str, base: &str) -> UrlParts {
        merge(kind, UrlParts::parse(input), UrlParts::parse(base))
    }

    #[test]
    fn relative_against_directory() {
        assert_eq!(
            merged(InputKind::Relative, "x.js", "/root/dir/").path,
            "/root/dir/x.js"
        );
    }

    #[test]
    fn relative_against_file_drops_last_segment() {
        assert_eq!(
            merged(InputKind::Relative, "x.js", "/root/dir/a.js").path,
            "/root/dir/x.js"
        );
    }

    #[test]
    fn relative_against_bare_host() {
        let p = merged(InputKind::Relative, "x.js", "//foo.com");
        assert_eq!(p.authority.as_deref(), Some("foo.com"));
        assert_eq!(p.path, "/x.js");
    }

    #[test]
    fn relative_against_slashless_base() {
        assert_eq!(merged(InputKind::Relative, "x.js", "base").path, "x.js");
    }

    #[test]
    fn protocol_relative_takes_base_scheme() {
        let p = merged(InputKind::ProtocolRelative, "//cdn.com/x", "https://foo.com/a");
        assert_eq!(p.scheme.as_deref(), Some("https:"));
        assert_eq!(p.authority.as_deref(), Some("cdn.com"));
        assert_eq!(p.path, "/x");
    }

    #[test]
    fn windows_drive_dropped_for_non_file_base() {
        let p = merged(InputKind::WindowsAbsolute, "C:\\assets\\x.js", "https://foo.com/a/");
        assert_eq!(p.authority.as_deref(), Some("foo.com"));
        assert_eq!(p.path, "/assets/x.js");
    }

    #[test]
    fn windows_drive_kept_for_file_base() {
        let p = merged(InputKind::WindowsAbsolute, "C:\\assets\\x.js", "file:///root/");
        assert_eq!(p.path, "/C:/assets/x.js");
    }

    #[test]
    fn query_drops_base_hash() {
        let p = merged(InputKind::Query, "?q", "/root?bq#bh");
        assert_eq!(p.path, "/root");
        assert_eq!(p.query.as_deref(), Some("?q"));
        assert!(p.hash.is_none());
    }

    #[test]
    fn hash_keeps_base_query() {
        let p = merged(InputKind::Hash, "#h", "/root?bq#bh");
        assert_eq!(p.query.as_deref(), Some("?bq"));
        assert_eq!(p.hash.as_deref(), Some("#h"));
    }
}
