//! CLI command handlers. Each command is in its own file.

mod batch;
mod classify;
mod completions;
mod config;
mod man;
mod parts;
mod resolve;

pub use batch::run_batch;
pub use classify::run_classify;
pub use completions::run_completions;
pub use config::run_config;
pub use man::run_man;
pub use parts::run_parts;
pub use resolve::run_resolve;
