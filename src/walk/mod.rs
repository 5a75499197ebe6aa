//! Depth-first directory walking and predicate evaluation
//!
//! The walker visits every node under a root, asks the predicate whether it
//! matches the active filters, and streams results through a [`WalkSink`].
//! Filtering decides what is reported, never what is descended into.

mod config;
mod filter;
mod walker;

pub use config::{FilterConfig, OwnerFilter};
pub use filter::matches;
pub use walker::{WalkOp, WalkSink, Walker};
