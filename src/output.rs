//! Output formatting for matched entries and walk diagnostics

use std::fs;
use std::io::{self, Write};
use std::os::unix::fs::MetadataExt;

use chrono::{DateTime, Local, TimeZone, Utc};

use crate::entry::{Entry, FileKind};
use crate::owner;
use crate::walk::{WalkOp, WalkSink};

/// Seconds after which a modification time is "old" and shown with a year
/// instead of a clock time, following `ls -l`.
const RECENT_SECONDS: i64 = 183 * 24 * 60 * 60;

/// How matched entries are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// One bare path per line.
    #[default]
    Simple,
    /// One `ls -l`-style record per line.
    Long,
}

impl OutputMode {
    /// `--ls` switches to long records; `--print` names the default action
    /// and changes nothing.
    pub fn from_flags(_print: bool, ls: bool) -> OutputMode {
        if ls {
            OutputMode::Long
        } else {
            OutputMode::Simple
        }
    }
}

/// Sink that writes matches to `out` and diagnostics to `err`.
pub struct Printer<W: Write, E: Write> {
    mode: OutputMode,
    out: W,
    err: E,
}

impl<W: Write, E: Write> Printer<W, E> {
    pub fn new(mode: OutputMode, out: W, err: E) -> Printer<W, E> {
        Printer { mode, out, err }
    }
}

impl<W: Write, E: Write> WalkSink for Printer<W, E> {
    fn matched(&mut self, entry: &Entry) -> io::Result<()> {
        match self.mode {
            OutputMode::Simple => writeln!(self.out, "{}", entry.path),
            OutputMode::Long => writeln!(self.out, "{}", long_record(entry)),
        }
    }

    fn diagnostic(&mut self, path: &str, op: WalkOp, err: &io::Error) -> io::Result<()> {
        writeln!(self.err, "finch: {} '{}': {}", op.describe(), path, err)
    }
}

/// Render one entry the way `ls -l` would: mode string, link count, owner,
/// group, size, modification time, path, and the target for symlinks.
pub fn long_record(entry: &Entry) -> String {
    let meta = &entry.metadata;
    let user = owner::name_for_uid(meta.uid()).unwrap_or_else(|| meta.uid().to_string());
    let group = owner::name_for_gid(meta.gid()).unwrap_or_else(|| meta.gid().to_string());

    let mut record = format!(
        "{} {:>3} {:<8} {:<8} {:>8} {} {}",
        mode_string(entry.kind, meta.mode()),
        meta.nlink(),
        user,
        group,
        meta.size(),
        mtime_string(meta.mtime(), Local::now().timestamp()),
        entry.path,
    );
    if entry.kind == FileKind::Symlink {
        if let Ok(target) = fs::read_link(&entry.path) {
            record.push_str(" -> ");
            record.push_str(&target.to_string_lossy());
        }
    }
    record
}

/// The ten-character mode column: type char plus three permission triads,
/// with setuid/setgid/sticky folded into the execute slots.
fn mode_string(kind: FileKind, mode: u32) -> String {
    let mut s = String::with_capacity(10);
    s.push(kind.mode_char());
    push_triad(&mut s, mode >> 6, mode & 0o4000 != 0, 's');
    push_triad(&mut s, mode >> 3, mode & 0o2000 != 0, 's');
    push_triad(&mut s, mode, mode & 0o1000 != 0, 't');
    s
}

fn push_triad(s: &mut String, bits: u32, special: bool, special_char: char) {
    s.push(if bits & 0o4 != 0 { 'r' } else { '-' });
    s.push(if bits & 0o2 != 0 { 'w' } else { '-' });
    s.push(match (bits & 0o1 != 0, special) {
        (true, false) => 'x',
        (true, true) => special_char,
        (false, true) => special_char.to_ascii_uppercase(),
        (false, false) => '-',
    });
}

/// `ls -l` time column: `Mmm dd HH:MM` for recent times, `Mmm dd  yyyy`
/// for old or future ones.
fn mtime_string(mtime: i64, now: i64) -> String {
    let stamp: DateTime<Local> = match Utc.timestamp_opt(mtime, 0) {
        chrono::LocalResult::Single(utc) => utc.with_timezone(&Local),
        _ => return String::from("            "),
    };
    if mtime > now || now - mtime > RECENT_SECONDS {
        stamp.format("%b %e  %Y").to_string()
    } else {
        stamp.format("%b %e %H:%M").to_string()
    }
}
