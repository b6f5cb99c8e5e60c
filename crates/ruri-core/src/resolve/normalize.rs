//! Dot-segment removal and `file:` canonicalization.

use super::parts::UrlParts;
use super::scan;

/// Normalizes the merged path and canonicalizes `file:` URLs.
pub(crate) fn normalize(mut parts: UrlParts) -> UrlParts {
    let file = parts.is_file();
    let rooted = file || parts.authority.is_some();
    parts.path = normalize_path(&parts.path, rooted);
    if file {
        canonicalize_file(&mut parts);
    }
    parts
}

/// Collapses `.` and `..` segments with an explicit output stack.
///
/// `..` never climbs above the root; in a relative path surplus `..` are
/// dropped. A drive such as `C:` is an ordinary segment here. A path ending
/// in `/`, `.` or `..` keeps a trailing `/`.
pub(crate) fn normalize_path(path: &str, rooted: bool) -> String {
    let (mut out, rest) = split_root(path, rooted);
    if rest.is_empty() {
        return out;
    }

    let mut stack: Vec<&str> = Vec::new();
    let mut trailing = false;
    for segment in rest.split('/') {
        match segment {
            "" | "." => trailing = true,
            ".." => {
                stack.pop();
                trailing = true;
            }
            s => {
                stack.push(s);
                trailing = false;
            }
        }
    }

    out.push_str(&stack.join("/"));
    if trailing {
        if !stack.is_empty() {
            out.push('/');
        } else if out.is_empty() {
            out.push_str("./");
        }
    }
    out
}

/// Splits off the leading `/` that `..` may never remove.
fn split_root(path: &str, rooted: bool) -> (String, &str) {
    match path.strip_prefix('/') {
        Some(rest) => (String::from("/"), rest),
        None if rooted => (String::from("/"), path),
        None => (String::new(), path),
    }
}

/// Renders `file:` URLs with three slashes unless a real host is present.
fn canonicalize_file(parts: &mut UrlParts) {
    match parts.authority.as_deref() {
        Some(host) if scan::is_drive_letter(host) => {
            parts.path = format!("/{}{}", host, parts.path);
            parts.authority = Some(String::new());
        }
        Some(host) if !host.is_empty() => {}
        _ => parts.authority = Some(String::new()),
    }
}
