//! lsr - An ls clone that reproduces GNU ls output byte for byte

pub mod collate;
pub mod config;
pub mod entry;
pub mod error;
pub mod listing;
pub mod output;
pub mod traverse;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use collate::{Collator, init_locale};
pub use config::{ListConfig, OutputFormat, SortOrder};
pub use entry::{Entry, EntryKind};
pub use error::{Error, Result};
pub use listing::list_dir;
pub use output::detect_layout_width;
pub use traverse::{ls_lines, ls_string};
