//! Expense Tracker MCP Server
//!
//! A Rust MCP server for personal expense tracking, backed by a single
//! `SQLite` file.
//!
//! # Features
//!
//! - `add_expense`, `list_expenses` and `summarize` tools
//! - `expense:///categories` resource with ten suggested category labels
//! - `SQLite` persistence in WAL mode via `sqlx`
//!
//! # Quick Start
//!
//! ```bash
//! DATABASE_PATH=./expenses.db ./expense-tracker
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     stdin      ┌─────────────────┐
//! │  MCP host   │───────────────▶│   MCP Server    │
//! │  (agent)    │◀───────────────│     (Rust)      │
//! └─────────────┘     stdout     └────────┬────────┘
//!                                         │
//!                                         ▼
//!                                   SQLite (expenses)
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod server;
pub mod storage;
pub mod traits;
