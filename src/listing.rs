//! Single-directory listing
//!
//! Reads one directory's children, applies hidden-entry filtering,
//! synthesizes the `.` and `..` pseudo-entries, and sorts the result.

use std::fs;
use std::path::Path;

use crate::config::{ListConfig, SortOrder};
use crate::entry::Entry;
use crate::error::{Error, Result};

/// List one directory as an ordered sequence of entries.
///
/// Hidden entries (names starting with `.`) are dropped unless
/// `config.show_hidden`. With `show_hidden`, `.` and `..` are synthesized
/// from the directory's own metadata and its parent's: under `ByName` they
/// come first, under `BySize` they are sorted among the rest like any
/// other entry.
///
/// Fails with `NotFound` or `AccessDenied` when the directory itself
/// cannot be read; a metadata failure on any child propagates and aborts
/// the whole call.
pub fn list_dir(path: &Path, config: &ListConfig) -> Result<Vec<Entry>> {
    let reader = fs::read_dir(path).map_err(|e| Error::for_path(e, path))?;

    let mut entries = Vec::new();
    for child in reader {
        let child = child.map_err(|e| Error::for_path(e, path))?;
        let name = child.file_name().to_string_lossy().into_owned();
        if !config.show_hidden && name.starts_with('.') {
            continue;
        }
        entries.push(Entry::read(&child.path(), name)?);
    }

    match config.order {
        SortOrder::ByName => {
            config.collator.sort_entries(&mut entries, config.order);
            if config.show_hidden {
                // . and .. lead the listing; they are not sorted among the rest.
                entries.insert(0, Entry::read(&path.join(".."), "..".to_string())?);
                entries.insert(0, Entry::read(path, ".".to_string())?);
            }
        }
        SortOrder::BySize => {
            if config.show_hidden {
                entries.push(Entry::read(path, ".".to_string())?);
                entries.push(Entry::read(&path.join(".."), "..".to_string())?);
            }
            config.collator.sort_entries(&mut entries, config.order);
        }
    }

    Ok(entries)
}
