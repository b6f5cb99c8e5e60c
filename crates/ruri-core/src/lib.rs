pub mod config;
pub mod logging;

pub mod batch;
pub mod resolve;

pub use resolve::{classify, resolve, resolve_parts, InputKind, UrlParts};
