//! Directory traversal
//!
//! Drives the whole listing run over an explicit stack of pending
//! directories. Roots are pushed in reverse name order so popping yields
//! ascending order; recursion pushes child directories the same way, which
//! gives a depth-first, ascending-name pre-order walk without native
//! recursion. Header emission and blank-line placement depend on this
//! strict sequencing, so the walk is single-threaded by contract.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::config::{ListConfig, OutputFormat};
use crate::entry::{Entry, EntryKind};
use crate::error::{Error, Result};
use crate::listing::list_dir;
use crate::output::{columns, long};

/// Run a full listing and return the complete output string.
///
/// Lines are joined with `\n`; non-empty output gets a single trailing
/// newline, empty output stays empty.
pub fn ls_string(config: &ListConfig) -> Result<String> {
    let lines = ls_lines(config)?;
    let mut joined = lines.join("\n");
    if !joined.is_empty() {
        joined.push('\n');
    }
    Ok(joined)
}

/// Run a full listing and return its output as an ordered line sequence.
///
/// When more than one root was requested or recursion is enabled, each
/// directory's section is introduced by a `"{path}:"` header; every header
/// after the first carries a leading blank line, encoded as a `\n` prefix
/// on the header line itself.
pub fn ls_lines(config: &ListConfig) -> Result<Vec<String>> {
    let mut stack: Vec<PathBuf> = config.roots.clone();
    stack.sort_by_cached_key(|p| config.collator.key(&p.display().to_string()));
    stack.reverse();

    let show_headers = stack.len() > 1 || config.recursive;
    let now = Local::now().timestamp();

    let mut lines = Vec::new();
    let mut first = true;
    while let Some(dir) = stack.pop() {
        if show_headers {
            let separator = if first { "" } else { "\n" };
            lines.push(format!("{separator}{}:", dir.display()));
        }
        first = false;

        let entries = list_dir(&dir, config)?;
        match config.format {
            OutputFormat::Long => lines.extend(long::render(&entries, now)),
            OutputFormat::Short => {
                let names: Vec<String> =
                    entries.iter().map(|e| e.display_name.clone()).collect();
                lines.extend(columns::pack(&names, config.layout_width));
            }
        }

        if config.recursive {
            push_subdirectories(&dir, &entries, config, &mut stack)?;
        }
    }

    Ok(lines)
}

/// Queue a listed directory's children for recursive descent.
///
/// Symlinks are never expanded, so directories reached only through links
/// cannot introduce cycles. The synthesized `.` and `..` entries are
/// skipped for the same reason.
fn push_subdirectories(
    dir: &Path,
    entries: &[Entry],
    config: &ListConfig,
    stack: &mut Vec<PathBuf>,
) -> Result<()> {
    let meta = fs::symlink_metadata(dir).map_err(|e| Error::for_path(e, dir))?;
    if meta.file_type().is_symlink() {
        return Ok(());
    }

    let mut subdirs: Vec<&Entry> = entries
        .iter()
        .filter(|e| e.kind == EntryKind::Directory)
        .filter(|e| e.display_name != "." && e.display_name != "..")
        .collect();
    subdirs.sort_by_cached_key(|e| config.collator.key(&e.display_name));
    for entry in subdirs.iter().rev() {
        stack.push(entry.path.clone());
    }
    Ok(())
}
