//! Output rendering for both listing formats

pub mod columns;
pub mod long;

use std::io::{self, IsTerminal};

use terminal_size::{Width, terminal_size};

/// Width used when the terminal reports no size of its own.
pub const DEFAULT_WIDTH: usize = 80;

/// Determine the width available for short-format column packing.
///
/// Returns `None` when stdout is not a terminal, which disables packing
/// entirely (one name per line), matching how `ls` behaves when piped.
pub fn detect_layout_width() -> Option<usize> {
    if !io::stdout().is_terminal() {
        return None;
    }
    match terminal_size() {
        Some((Width(w), _)) => Some(w as usize),
        None => Some(DEFAULT_WIDTH),
    }
}
