//! # Vocab Architecture
//!
//! Vocab is a **UI-agnostic client library** for a vocabulary-notebook backend. The `vocab`
//! binary is one client of it; the same core could sit behind a TUI or a web frontend.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders pages, handles terminal I/O    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs, router.rs)                              │
//! │  - Resolves client routes to pages                          │
//! │  - Returns ViewStates, never errors                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  View Layer (views/, query.rs)                              │
//! │  - Memoized, deduplicated fetches keyed by query key        │
//! │  - Joins the queries a page needs into one ViewState        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Service Layer (service.rs, schema.rs)                      │
//! │  - GET → status check → JSON decode → shape validation      │
//! │  - Maps backend payloads into Notebook / NotebookDetails    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Transport Layer (transport/)                               │
//! │  - Abstract Transport trait                                 │
//! │  - HttpTransport (production), InMemoryTransport (testing)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr, never exits the process and
//! never assumes a terminal. Diagnostics go through `tracing`; installing a subscriber is
//! the client's job.
//!
//! ## Testing Strategy
//!
//! 1. **Service and schema**: the bulk of the tests, against `InMemoryTransport`.
//! 2. **Query client and views**: dedup, memoization and state joins.
//! 3. **HTTP transport** (`tests/http_transport.rs`): a `wiremock` server.
//! 4. **CLI** (`tests/cli.rs`): the binary in `--mock` mode.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for UI clients
//! - [`router`]: Client routes and page titles
//! - [`views`]: `ViewState` and the list/detail views
//! - [`query`]: Deduplicating, memoizing query client
//! - [`service`]: Data access service
//! - [`schema`]: Response shape validation
//! - [`transport`]: Transport abstraction and implementations
//! - [`model`]: Domain and payload types
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing and templated rendering for the binary (not part of the lib API)

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod router;
pub mod schema;
pub mod service;
pub mod transport;
pub mod views;
