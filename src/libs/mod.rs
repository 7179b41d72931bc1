//! Core library modules for taskdeck.
//!
//! - **Model**: task record, status enum, and patch shapes
//! - **Service**: lookup, listing, deletion, and the patch-merge update
//! - **Messaging**: message catalog and display macros
//! - **View**: terminal table rendering

pub mod error;
pub mod messages;
pub mod service;
pub mod task;
pub mod view;
