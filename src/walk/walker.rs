//! Depth-first traversal engine

use std::fs;
use std::io;

use crate::entry::Entry;
use crate::paths::join_paths;

use super::config::FilterConfig;
use super::filter;

/// The traversal operation that produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkOp {
    ReadMetadata,
    OpenDir,
    ReadDir,
}

impl WalkOp {
    /// Human-readable verb for diagnostic lines.
    pub fn describe(self) -> &'static str {
        match self {
            WalkOp::ReadMetadata => "reading metadata of",
            WalkOp::OpenDir => "opening directory",
            WalkOp::ReadDir => "reading directory",
        }
    }
}

/// Receives matches and diagnostics as the walk discovers them.
///
/// Every filesystem error the engine hits becomes a single `diagnostic`
/// call and is then absorbed; only I/O errors returned by the sink itself
/// (a closed output pipe, say) propagate out of the walk.
pub trait WalkSink {
    fn matched(&mut self, entry: &Entry) -> io::Result<()>;
    fn diagnostic(&mut self, path: &str, op: WalkOp, err: &io::Error) -> io::Result<()>;
}

/// Sequential depth-first walker.
///
/// At most one directory handle is open at any time: each directory is
/// drained into an in-memory name listing and the handle dropped before
/// any child is visited, so handle usage stays constant on arbitrarily
/// deep or wide trees. Symbolic links are never followed; a link is
/// classified and reported as itself, and never descended into.
pub struct Walker {
    config: FilterConfig,
}

impl Walker {
    pub fn new(config: FilterConfig) -> Walker {
        Walker { config }
    }

    /// Visit `path` and everything below it.
    ///
    /// Unreadable nodes are reported through the sink and skipped along
    /// with their subtrees; the rest of the walk continues. Directories are
    /// always descended into whether or not they matched the filters.
    pub fn walk<S: WalkSink>(&self, path: &str, sink: &mut S) -> io::Result<()> {
        let metadata = match fs::symlink_metadata(path) {
            Ok(m) => m,
            Err(e) => return sink.diagnostic(path, WalkOp::ReadMetadata, &e),
        };
        let is_dir = metadata.is_dir();

        let entry = Entry::new(path.to_string(), metadata);
        if filter::matches(&entry, &self.config) {
            sink.matched(&entry)?;
        }

        if is_dir {
            if let Some(names) = read_listing(path, sink)? {
                for name in names {
                    let child = join_paths(path, &name);
                    self.walk(&child, sink)?;
                }
            }
        }
        Ok(())
    }
}

/// Drain one directory stream into a listing of child names, in read order.
///
/// The stream handle is dropped here, before the caller recurses into any
/// child. An open failure yields `None` (subtree abandoned); a failure
/// mid-stream is reported but does not discard names already collected.
/// `read_dir` already omits the `.` and `..` pseudo-entries.
fn read_listing<S: WalkSink>(path: &str, sink: &mut S) -> io::Result<Option<Vec<String>>> {
    let stream = match fs::read_dir(path) {
        Ok(s) => s,
        Err(e) => {
            sink.diagnostic(path, WalkOp::OpenDir, &e)?;
            return Ok(None);
        }
    };

    let mut names = Vec::new();
    for item in stream {
        match item {
            Ok(child) => names.push(child.file_name().to_string_lossy().into_owned()),
            Err(e) => sink.diagnostic(path, WalkOp::ReadDir, &e)?,
        }
    }
    Ok(Some(names))
}
