//! Input classification: which of the eight resolution modes applies.

use serde::Serialize;
use std::fmt;

use super::scan;

/// Shape of a reference, checked in declaration order (first match wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputKind {
    /// `""`
    Empty,
    /// `#hash`
    Hash,
    /// `?query`
    Query,
    /// `scheme:rest`
    Absolute,
    /// `//host/path` (or `\\host\share`)
    ProtocolRelative,
    /// `C:\path` or `C:/path`
    WindowsAbsolute,
    /// `/path`
    AbsolutePath,
    /// Anything else: `./x`, `../x`, `x/y`, `@scope/name`, `a\b`.
    Relative,
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Empty => "empty",
            InputKind::Hash => "hash",
            InputKind::Query => "query",
            InputKind::Absolute => "absolute",
            InputKind::ProtocolRelative => "protocol-relative",
            InputKind::WindowsAbsolute => "windows-absolute",
            InputKind::AbsolutePath => "absolute-path",
            InputKind::Relative => "relative",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_separator(b: u8) -> bool {
    b == b'/' || b == b'\\'
}

/// Classifies `input` into exactly one [`InputKind`].
pub fn classify(input: &str) -> InputKind {
    let bytes = input.as_bytes();
    match bytes {
        [] => InputKind::Empty,
        [b'#', ..] => InputKind::Hash,
        [b'?', ..] => InputKind::Query,
        _ if scan::scheme_len(input).is_some() => InputKind::Absolute,
        [a, b, ..] if is_separator(*a) && is_separator(*b) => InputKind::ProtocolRelative,
        _ if scan::is_windows_drive(input) => InputKind::WindowsAbsolute,
        [a, ..] if is_separator(*a) => InputKind::AbsolutePath,
        _ => InputKind::Relative,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence() {
        assert_eq!(classify(""), InputKind::Empty);
        assert_eq!(classify("#h"), InputKind::Hash);
        assert_eq!(classify("#?h"), InputKind::Hash);
        assert_eq!(classify("?q#h"), InputKind::Query);
        assert_eq!(classify("https://a.com"), InputKind::Absolute);
        assert_eq!(classify("file:root"), InputKind::Absolute);
        assert_eq!(classify("//a.com/x"), InputKind::ProtocolRelative);
        assert_eq!(classify("C:\\x\\y"), InputKind::WindowsAbsolute);
        assert_eq!(classify("c:/x"), InputKind::WindowsAbsolute);
        assert_eq!(classify("/root"), InputKind::AbsolutePath);
        assert_eq!(classify("x/y"), InputKind::Relative);
    }

    #[test]
    fn backslash_shapes() {
        assert_eq!(classify("\\root\\x"), InputKind::AbsolutePath);
        assert_eq!(classify("\\\\host\\share"), InputKind::ProtocolRelative);
        assert_eq!(classify("dir\\file.js"), InputKind::Relative);
    }

    #[test]
    fn relative_shapes() {
        assert_eq!(classify("./x"), InputKind::Relative);
        assert_eq!(classify("../x"), InputKind::Relative);
        assert_eq!(classify("@scope/name"), InputKind::Relative);
        assert_eq!(classify("1abc:x"), InputKind::Relative);
    }

    #[test]
    fn single_letter_scheme_without_separator() {
        assert_eq!(classify("c:foo"), InputKind::Absolute);
    }

    #[test]
    fn display_is_kebab_case() {
        assert_eq!(InputKind::ProtocolRelative.to_string(), "protocol-relative");
        assert_eq!(InputKind::WindowsAbsolute.to_string(), "windows-absolute");
    }
}
