//! # Taskdeck
//!
//! A lightweight command-line task manager built around partial updates.
//!
//! ## Features
//!
//! - **Task Management**: Create, look up, update, and delete tasks
//! - **Partial Updates**: Field-level patch merging with a configurable
//!   status policy
//! - **Status Tracking**: Filter tasks by their lifecycle status
//! - **Pluggable Storage**: Service logic is written against a store trait,
//!   backed by an in-memory store
//! - **Interactive Menu**: Terminal session for browsing and editing tasks
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdeck::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
pub mod store;
