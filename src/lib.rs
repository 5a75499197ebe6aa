//! Finch - a small `find`: walk a directory tree and print matching entries

pub mod entry;
pub mod error;
pub mod output;
pub mod owner;
pub mod paths;
pub mod walk;

pub use entry::{Entry, FileKind, TypeSet};
pub use error::ConfigError;
pub use output::{OutputMode, Printer};
pub use walk::{FilterConfig, OwnerFilter, WalkOp, WalkSink, Walker};
