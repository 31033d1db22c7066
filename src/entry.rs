//! Entry descriptors and metadata reading
//!
//! An [`Entry`] is an immutable snapshot of one filesystem path as listed:
//! everything both output formats need, read once via `lstat` and never
//! mutated afterwards.

use std::ffi::CStr;
use std::fs;
use std::mem::MaybeUninit;
use std::os::unix::fs::MetadataExt;
use std::path::{Path, PathBuf};
use std::ptr;

use crate::error::{Error, Result};

/// The kind of filesystem object an entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Regular,
    Directory,
    Symlink,
    Other,
}

/// One filesystem path's metadata as surfaced to the listing engine.
///
/// Immutable after construction; every component only reads it.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Name shown to the user: `.`, `..`, or the basename.
    pub display_name: String,
    /// Resolved filesystem path, used for recursion and symlink targets.
    pub path: PathBuf,
    pub kind: EntryKind,
    pub size: u64,
    /// Allocation in 512-byte units, as `st_blocks` reports it.
    pub blocks: u64,
    /// `-rwxr-xr-x` style mode string.
    pub mode_string: String,
    pub link_count: u64,
    pub owner: String,
    pub group: String,
    /// Modification time in seconds since the epoch.
    pub mtime: i64,
    /// Where a symlink points, resolved; `None` for everything else.
    pub link_target: Option<PathBuf>,
}

impl Entry {
    /// Read the metadata for `path` into a descriptor.
    ///
    /// Uses `lstat` semantics: symlinks describe themselves, not their
    /// targets. Fails with the classified error for the path (`NotFound`,
    /// `AccessDenied`, or a plain I/O error).
    pub fn read(path: &Path, display_name: String) -> Result<Self> {
        let meta = fs::symlink_metadata(path).map_err(|e| Error::for_path(e, path))?;
        let file_type = meta.file_type();

        let kind = if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::Regular
        } else {
            EntryKind::Other
        };

        let link_target = if kind == EntryKind::Symlink {
            // Resolve to the real target; dangling links keep the raw text.
            path.canonicalize()
                .ok()
                .or_else(|| fs::read_link(path).ok())
        } else {
            None
        };

        Ok(Self {
            display_name,
            path: path.to_path_buf(),
            kind,
            size: meta.size(),
            blocks: meta.blocks(),
            mode_string: mode_string(meta.mode()),
            link_count: meta.nlink(),
            owner: user_name(meta.uid()),
            group: group_name(meta.gid()),
            mtime: meta.mtime(),
            link_target,
        })
    }

    /// Descriptor with fabricated metadata, for tests and benches.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn fake(name: &str, size: u64) -> Self {
        Self {
            display_name: name.to_string(),
            path: PathBuf::from(name),
            kind: EntryKind::Regular,
            size,
            blocks: size.div_ceil(512),
            mode_string: "-rw-r--r--".to_string(),
            link_count: 1,
            owner: "user".to_string(),
            group: "group".to_string(),
            mtime: 0,
            link_target: None,
        }
    }
}

/// Build the ten-character mode string for a raw `st_mode`.
///
/// Matches `strmode(3)`/GNU `filemode`: a type character followed by the
/// nine permission bits, with setuid/setgid/sticky folded into the
/// execute positions.
pub fn mode_string(mode: u32) -> String {
    let type_char = match mode & libc::S_IFMT {
        libc::S_IFDIR => 'd',
        libc::S_IFLNK => 'l',
        libc::S_IFREG => '-',
        libc::S_IFBLK => 'b',
        libc::S_IFCHR => 'c',
        libc::S_IFIFO => 'p',
        libc::S_IFSOCK => 's',
        _ => '?',
    };

    let bit = |mask: u32, ch: char| if mode & mask != 0 { ch } else { '-' };

    let user_x = match (mode & 0o100 != 0, mode & libc::S_ISUID as u32 != 0) {
        (true, true) => 's',
        (false, true) => 'S',
        (true, false) => 'x',
        (false, false) => '-',
    };
    let group_x = match (mode & 0o010 != 0, mode & libc::S_ISGID as u32 != 0) {
        (true, true) => 's',
        (false, true) => 'S',
        (true, false) => 'x',
        (false, false) => '-',
    };
    let other_x = match (mode & 0o001 != 0, mode & libc::S_ISVTX as u32 != 0) {
        (true, true) => 't',
        (false, true) => 'T',
        (true, false) => 'x',
        (false, false) => '-',
    };

    [
        type_char,
        bit(0o400, 'r'),
        bit(0o200, 'w'),
        user_x,
        bit(0o040, 'r'),
        bit(0o020, 'w'),
        group_x,
        bit(0o004, 'r'),
        bit(0o002, 'w'),
        other_x,
    ]
    .iter()
    .collect()
}

/// Resolve a uid to its user name, falling back to the numeric id.
pub fn user_name(uid: u32) -> String {
    let mut pwd = MaybeUninit::<libc::passwd>::uninit();
    let mut buf = [0 as libc::c_char; 4096];
    let mut result: *mut libc::passwd = ptr::null_mut();

    let rc = unsafe {
        libc::getpwuid_r(uid, pwd.as_mut_ptr(), buf.as_mut_ptr(), buf.len(), &mut result)
    };
    if rc == 0 && !result.is_null() {
        let pwd = unsafe { pwd.assume_init() };
        if !pwd.pw_name.is_null() {
            return unsafe { CStr::from_ptr(pwd.pw_name) }
                .to_string_lossy()
                .into_owned();
        }
    }
    uid.to_string()
}

/// Resolve a gid to its group name, falling back to the numeric id.
pub fn group_name(gid: u32) -> String {
    let mut grp = MaybeUninit::<libc::group>::uninit();
    let mut buf = [0 as libc::c_char; 4096];
    let mut result: *mut libc::group = ptr::null_mut();

    let rc = unsafe {
        libc::getgrgid_r(gid, grp.as_mut_ptr(), buf.as_mut_ptr(), buf.len(), &mut result)
    };
    if rc == 0 && !result.is_null() {
        let grp = unsafe { grp.assume_init() };
        if !grp.gr_name.is_null() {
            return unsafe { CStr::from_ptr(grp.gr_name) }
                .to_string_lossy()
                .into_owned();
        }
    }
    gid.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_string_regular_file() {
        assert_eq!(mode_string(libc::S_IFREG | 0o644), "-rw-r--r--");
        assert_eq!(mode_string(libc::S_IFREG | 0o755), "-rwxr-xr-x");
    }

    #[test]
    fn test_mode_string_directory_and_symlink() {
        assert_eq!(mode_string(libc::S_IFDIR | 0o755), "drwxr-xr-x");
        assert_eq!(mode_string(libc::S_IFLNK | 0o777), "lrwxrwxrwx");
    }

    #[test]
    fn test_mode_string_special_bits() {
        let setuid = libc::S_IFREG | libc::S_ISUID as u32 | 0o755;
        assert_eq!(mode_string(setuid), "-rwsr-xr-x");

        let setuid_no_x = libc::S_IFREG | libc::S_ISUID as u32 | 0o644;
        assert_eq!(mode_string(setuid_no_x), "-rwSr--r--");

        let sticky_dir = libc::S_IFDIR | libc::S_ISVTX as u32 | 0o777;
        assert_eq!(mode_string(sticky_dir), "drwxrwxrwt");
    }

    #[test]
    fn test_read_regular_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("hello.txt");
        std::fs::write(&file, b"hello").expect("write");

        let entry = Entry::read(&file, "hello.txt".to_string()).expect("read entry");
        assert_eq!(entry.display_name, "hello.txt");
        assert_eq!(entry.kind, EntryKind::Regular);
        assert_eq!(entry.size, 5);
        assert!(entry.mode_string.starts_with('-'));
        assert!(entry.link_target.is_none());
    }

    #[test]
    fn test_read_missing_path_is_not_found() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("nope");
        let err = Entry::read(&missing, "nope".to_string()).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)), "got {err:?}");
    }

    #[cfg(unix)]
    #[test]
    fn test_read_symlink_records_target() {
        let dir = tempfile::tempdir().expect("tempdir");
        let target = dir.path().join("target.txt");
        std::fs::write(&target, b"x").expect("write");
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(&target, &link).expect("symlink");

        let entry = Entry::read(&link, "link".to_string()).expect("read entry");
        assert_eq!(entry.kind, EntryKind::Symlink);
        let resolved = entry.link_target.expect("target recorded");
        assert_eq!(resolved, target.canonicalize().expect("canonicalize"));
    }
}
