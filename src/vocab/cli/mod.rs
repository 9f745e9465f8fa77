//! # CLI Behavior
//!
//! This is **one possible UI client** for vocab, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! ### Naked Execution (`vocab`)
//!
//! Running `vocab` with no arguments defaults to `vocab list`.
//!
//! ### Backend Selection
//!
//! - `--server <URL>` overrides the configured `server-url` for one run.
//! - `--mock` (or `mock = true` in the config) serves the built-in sample notebooks,
//!   no backend needed. `mock-delay-ms` adds simulated latency.
//!
//! ### Pages
//!
//! `list`, `show` and `open` render a full page: a title line, then the loaded
//! content, or a static alert if loading failed. `words` prints bare words, one per line,
//! for piping.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `render`: Page rendering through templates
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal theme
//! - `templates`: Output templates

mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
