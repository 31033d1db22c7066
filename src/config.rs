//! Configuration for listing behavior

use std::path::PathBuf;

use crate::collate::Collator;

/// How entries within a directory are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Collated by name (the default `ls` order).
    #[default]
    ByName,
    /// Largest first, name collation breaking ties.
    BySize,
}

/// Which of the two output formats to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Multi-column names (or one per line without a layout width).
    #[default]
    Short,
    /// One detailed row per entry, preceded by a `total` line.
    Long,
}

/// Configuration for a listing run.
///
/// Passed by reference into every core call; there is no process-wide
/// configuration state.
#[derive(Debug, Clone)]
pub struct ListConfig {
    /// Include dot-prefixed entries and synthesize `.` and `..`.
    pub show_hidden: bool,
    pub order: SortOrder,
    pub format: OutputFormat,
    /// Descend into subdirectories, depth-first in ascending name order.
    pub recursive: bool,
    /// Starting paths, in the order the user gave them.
    pub roots: Vec<PathBuf>,
    /// Name comparator used for every ordering decision.
    pub collator: Collator,
    /// Width available for short-format column packing.
    /// `None` disables packing entirely (one name per line).
    pub layout_width: Option<usize>,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            show_hidden: false,
            order: SortOrder::ByName,
            format: OutputFormat::Short,
            recursive: false,
            roots: vec![PathBuf::from(".")],
            collator: Collator::Ascii,
            layout_width: None,
        }
    }
}
