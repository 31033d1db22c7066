//! Long-format row rendering
//!
//! Renders the `-l` view: a `total` line followed by one seven-field row
//! per entry (mode, links, owner, group, size, mtime, name), with column
//! widths computed once over the whole listing.

use chrono::{DateTime, Local};

use crate::entry::Entry;

/// Half a Gregorian year in seconds, the cutoff `ls` uses to switch
/// between the time-of-day and year timestamp formats.
const RECENT_CUTOFF_SECONDS: i64 = 31_556_952 / 2;

/// Render entries as long-format lines.
///
/// The first line is `total {blocks}` with the block sum converted from
/// the 512-byte units `st_blocks` reports to the 1024-byte units `ls`
/// prints. Alignment per column: mode unpadded, link count right, owner
/// and group left, size right, mtime left, name unpadded. Fields join
/// with single spaces.
pub fn render(entries: &[Entry], now: i64) -> Vec<String> {
    let total: u64 = entries.iter().map(|e| e.blocks).sum();
    let mut lines = vec![format!("total {}", total / 2)];

    let rows: Vec<[String; 7]> = entries.iter().map(|e| row(e, now)).collect();
    if rows.is_empty() {
        return lines;
    }

    let width = |col: usize| {
        rows.iter()
            .map(|r| r[col].chars().count())
            .max()
            .unwrap_or(0)
    };
    let links_w = width(1);
    let owner_w = width(2);
    let group_w = width(3);
    let size_w = width(4);
    let mtime_w = width(5);

    for r in &rows {
        lines.push(format!(
            "{} {:>links_w$} {:<owner_w$} {:<group_w$} {:>size_w$} {:<mtime_w$} {}",
            r[0], r[1], r[2], r[3], r[4], r[5], r[6],
        ));
    }
    lines
}

fn row(entry: &Entry, now: i64) -> [String; 7] {
    let mut name = entry.display_name.clone();
    if let Some(target) = &entry.link_target {
        name.push_str(" -> ");
        name.push_str(&target.display().to_string());
    }
    [
        entry.mode_string.clone(),
        entry.link_count.to_string(),
        entry.owner.clone(),
        entry.group.clone(),
        entry.size.to_string(),
        format_mtime(entry.mtime, now),
        name,
    ]
}

/// Format a modification time the way `ls -l` does.
///
/// Timestamps less than half a year old (including anything in the
/// future) show the time of day; older ones show the year, with two
/// spaces before it.
pub fn format_mtime(mtime: i64, now: i64) -> String {
    let Some(utc) = DateTime::from_timestamp(mtime, 0) else {
        return String::new();
    };
    let local = utc.with_timezone(&Local);
    if now - mtime < RECENT_CUTOFF_SECONDS {
        local.format("%b %e %H:%M").to_string()
    } else {
        local.format("%b %e  %Y").to_string()
    }
}
