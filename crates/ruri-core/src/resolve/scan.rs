//! Low-level scanners shared by the classifier and the base decomposer.

/// Byte length of the scheme prefix of `s`, including the trailing `:`.
///
/// A scheme is `[a-zA-Z][a-zA-Z0-9+.-]*` followed by `:`. A single letter
/// followed by `:` and a path separator is a Windows drive, not a scheme.
pub(crate) fn scheme_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    if !bytes.first()?.is_ascii_alphabetic() {
        return None;
    }
    for (i, &b) in bytes.iter().enumerate().skip(1) {
        match b {
            b':' if i == 1 && is_windows_drive(s) => return None,
            b':' => return Some(i + 1),
            b if b.is_ascii_alphanumeric() || matches!(b, b'+' | b'.' | b'-') => {}
            _ => return None,
        }
    }
    None
}

/// True for `C:\...` and `C:/...`.
pub(crate) fn is_windows_drive(s: &str) -> bool {
    matches!(s.as_bytes(), [letter, b':', b'/' | b'\\', ..] if letter.is_ascii_alphabetic())
}

/// True when `s` is exactly a drive designator such as `C:`.
pub(crate) fn is_drive_letter(s: &str) -> bool {
    matches!(s.as_bytes(), [letter, b':'] if letter.is_ascii_alphabetic())
}

/// Length of a leading drive prefix: `C:` at the end of `s`, or `C:/`.
pub(crate) fn drive_prefix_len(s: &str) -> Option<usize> {
    match s.as_bytes() {
        [letter, b':'] if letter.is_ascii_alphabetic() => Some(2),
        [letter, b':', b'/', ..] if letter.is_ascii_alphabetic() => Some(3),
        _ => None,
    }
}

/// Splits `s` into `(body, query, hash)`. Query keeps its `?`, hash its `#`.
pub(crate) fn split_query_hash(s: &str) -> (&str, Option<&str>, Option<&str>) {
    let (rest, hash) = match s.find('#') {
        Some(i) => (&s[..i], Some(&s[i..])),
        None => (s, None),
    };
    match rest.find('?') {
        Some(i) => (&rest[..i], Some(&rest[i..]), hash),
        None => (rest, None, hash),
    }
}

/// Splits a leading `//authority` off `s`, returning `(authority, remainder)`.
pub(crate) fn split_authority(s: &str) -> Option<(&str, &str)> {
    let rest = s.strip_prefix("//")?;
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    Some((&rest[..end], &rest[end..]))
}

/// Backslash is always a path separator.
pub(crate) fn to_slashes(path: &str) -> String {
    path.replace('\\', "/")
}
