//! Reference resolution: a relaxed RFC 3986 resolver for URLs and paths.
//!
//! Accepts absolute URLs, protocol-relative URLs, posix and Windows paths,
//! relative paths and bare `?query` / `#hash` references. Resolution is total:
//! every pair of strings produces a string.
//!
//! Stages: [`classify`] the input, [`UrlParts::parse`] the base, merge the
//! two, then normalize dot segments and `file:` slashes.

mod classify;
mod merge;
mod normalize;
mod parts;
mod scan;

pub use classify::{classify, InputKind};
pub use parts::UrlParts;

/// Resolves `input` against `base` and returns the normalized string.
///
/// # Examples
///
/// - `resolve("../bar/main.js.map", "/root/dir/")` → `"/root/bar/main.js.map"`
/// - `resolve("C:\\assets\\main.js.map", "//foo.com")` → `"//foo.com/assets/main.js.map"`
/// - `resolve("file:root/x", "")` → `"file:///root/x"`
pub fn resolve(input: &str, base: &str) -> String {
    resolve_parts(input, base).to_string()
}

/// Like [`resolve`], but returns the resolved components.
pub fn resolve_parts(input: &str, base: &str) -> UrlParts {
    let kind = classify(input);
    let reference = UrlParts::parse(input);
    let merged = match kind {
        InputKind::Absolute => reference,
        _ => merge::merge(kind, reference, UrlParts::parse(base)),
    };
    let resolved = normalize::normalize(merged);
    tracing::trace!(input, base, %kind, resolved = %resolved, "resolved reference");
    resolved
}

#[cfg(test)]
mod tests;
