//! Filesystem entry model: what the walker hands to the predicate

use std::fs::Metadata;
use std::os::unix::fs::{FileTypeExt, MetadataExt};

use crate::error::ConfigError;

/// The seven file classifications the walker distinguishes.
///
/// Classification never follows symbolic links: a link pointing at a
/// directory is a [`FileKind::Symlink`], not a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    BlockDevice,
    CharDevice,
    Directory,
    Fifo,
    File,
    Symlink,
    Socket,
}

impl FileKind {
    /// Classify from a file type obtained via `symlink_metadata`.
    pub fn from_file_type(ft: std::fs::FileType) -> FileKind {
        if ft.is_symlink() {
            FileKind::Symlink
        } else if ft.is_dir() {
            FileKind::Directory
        } else if ft.is_block_device() {
            FileKind::BlockDevice
        } else if ft.is_char_device() {
            FileKind::CharDevice
        } else if ft.is_fifo() {
            FileKind::Fifo
        } else if ft.is_socket() {
            FileKind::Socket
        } else {
            FileKind::File
        }
    }

    /// The `--type` specifier character for this kind.
    pub fn specifier(self) -> char {
        match self {
            FileKind::BlockDevice => 'b',
            FileKind::CharDevice => 'c',
            FileKind::Directory => 'd',
            FileKind::Fifo => 'p',
            FileKind::File => 'f',
            FileKind::Symlink => 'l',
            FileKind::Socket => 's',
        }
    }

    /// The kind selected by a `--type` specifier character, if any.
    pub fn from_specifier(c: char) -> Option<FileKind> {
        match c {
            'b' => Some(FileKind::BlockDevice),
            'c' => Some(FileKind::CharDevice),
            'd' => Some(FileKind::Directory),
            'p' => Some(FileKind::Fifo),
            'f' => Some(FileKind::File),
            'l' => Some(FileKind::Symlink),
            's' => Some(FileKind::Socket),
            _ => None,
        }
    }

    /// The leading character of an `ls -l` mode string.
    pub fn mode_char(self) -> char {
        match self {
            FileKind::File => '-',
            other => other.specifier(),
        }
    }

    fn index(self) -> usize {
        match self {
            FileKind::BlockDevice => 0,
            FileKind::CharDevice => 1,
            FileKind::Directory => 2,
            FileKind::Fifo => 3,
            FileKind::File => 4,
            FileKind::Symlink => 5,
            FileKind::Socket => 6,
        }
    }
}

/// A set of file kinds, backed by a boolean per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeSet([bool; 7]);

impl TypeSet {
    /// Build a set from a `--type` specifier string such as `"fd"`.
    pub fn parse(spec: &str) -> Result<TypeSet, ConfigError> {
        let mut set = TypeSet::default();
        for c in spec.chars() {
            let kind = FileKind::from_specifier(c).ok_or(ConfigError::InvalidTypeChar(c))?;
            set.insert(kind);
        }
        Ok(set)
    }

    pub fn insert(&mut self, kind: FileKind) {
        self.0[kind.index()] = true;
    }

    pub fn contains(&self, kind: FileKind) -> bool {
        self.0[kind.index()]
    }

    pub fn is_empty(&self) -> bool {
        !self.0.iter().any(|&b| b)
    }
}

/// One filesystem node visited during the walk.
///
/// Built fresh immediately before predicate evaluation and discarded once
/// the visit completes; nothing is retained across siblings.
#[derive(Debug)]
pub struct Entry {
    /// The full path used to reach this node, exactly as constructed.
    pub path: String,
    /// The base name component, used only for name-pattern matching.
    pub name: String,
    pub kind: FileKind,
    /// Owning user id.
    pub uid: u32,
    /// Full stat metadata, read without following symlinks.
    pub metadata: Metadata,
}

impl Entry {
    pub fn new(path: String, metadata: Metadata) -> Entry {
        let name = base_name(&path);
        Entry {
            kind: FileKind::from_file_type(metadata.file_type()),
            uid: metadata.uid(),
            name,
            path,
            metadata,
        }
    }
}

/// The last non-empty path segment, or the path itself when it has none
/// (`/`, `.`). A trailing separator on the input does not hide the name.
fn base_name(path: &str) -> String {
    path.rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or(path)
        .to_string()
}
