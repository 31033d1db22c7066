//! Short-format column packing
//!
//! Port of the incremental column-fitting heuristic `ls` uses: candidate
//! layouts for every column count are updated in a single walk over the
//! names, each tracking per-column widths and a running line length, and
//! the widest candidate still under the terminal width wins. Entries are
//! placed column-major, so entry `i` lands in row `i % rows`, column
//! `i / rows`.

/// Narrowest line a candidate column can occupy (one character plus the
/// two-space gap), which caps the candidate count at `width / 3`.
const MIN_SLOT_WIDTH: usize = 3;

/// An ephemeral column layout for one directory listing.
#[derive(Debug)]
struct Layout {
    num_columns: usize,
    /// Width per column, gap included.
    column_widths: Vec<usize>,
    total_line_width: usize,
    /// False only for the 1-column fallback when nothing fits.
    feasible: bool,
}

/// Arrange names into rows for the given layout width.
///
/// `None` means column layout is disabled (non-interactive output): every
/// name becomes its own line, unchanged.
pub fn pack(names: &[String], layout_width: Option<usize>) -> Vec<String> {
    let Some(width) = layout_width else {
        return names.to_vec();
    };
    if names.is_empty() {
        return Vec::new();
    }

    let layout = compute_layout(names, width);
    let rows = names.len().div_ceil(layout.num_columns);

    let mut lines = Vec::with_capacity(rows);
    for row in 0..rows {
        let mut line = String::new();
        for col in 0..layout.num_columns {
            let idx = col * rows + row;
            if idx >= names.len() {
                break;
            }
            line.push_str(&names[idx]);
            // Pad to the column width unless nothing follows on this line.
            if idx + rows < names.len() {
                let used = names[idx].chars().count();
                for _ in used..layout.column_widths[col] {
                    line.push(' ');
                }
            }
        }
        lines.push(line);
    }
    lines
}

/// Pick the layout with the most columns that still fits.
///
/// Every name occupies its display length plus a two-space gap, last
/// column included; a candidate is feasible while the sum of its column
/// widths stays strictly below `width`. If no candidate fits, fall back
/// to a single column.
fn compute_layout(names: &[String], width: usize) -> Layout {
    let max_columns = (width / MIN_SLOT_WIDTH).max(1).min(names.len());

    let mut feasible = vec![true; max_columns];
    let mut line_widths = vec![0usize; max_columns];
    let mut column_widths: Vec<Vec<usize>> =
        (0..max_columns).map(|i| vec![0; i + 1]).collect();

    for (idx, name) in names.iter().enumerate() {
        let slot = name.chars().count() + 2;
        for candidate in 0..max_columns {
            if !feasible[candidate] {
                continue;
            }
            let rows = names.len().div_ceil(candidate + 1);
            let col = idx / rows;
            if column_widths[candidate][col] < slot {
                line_widths[candidate] += slot - column_widths[candidate][col];
                column_widths[candidate][col] = slot;
                feasible[candidate] = line_widths[candidate] < width;
            }
        }
    }

    let best = (0..max_columns).rev().find(|&c| feasible[c]).unwrap_or(0);
    Layout {
        num_columns: best + 1,
        column_widths: column_widths.swap_remove(best),
        total_line_width: line_widths[best],
        feasible: feasible[best],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_disabled_layout_is_one_per_line() {
        let input = names(&["alpha", "beta", "a-much-longer-name"]);
        assert_eq!(pack(&input, None), input);
    }

    #[test]
    fn test_empty_input_has_no_rows() {
        assert!(pack(&[], Some(80)).is_empty());
        assert!(pack(&names(&[]), None).is_empty());
    }

    #[test]
    fn test_two_columns_fit_width_twenty() {
        // 13 names of length 5 take slot width 7: two columns (14 < 20)
        // fit, three (21) do not, so we get ceil(13 / 2) = 7 rows.
        let input: Vec<String> = (0..13).map(|i| format!("nm{:03}", i)).collect();
        let lines = pack(&input, Some(20));
        assert_eq!(lines.len(), 7);
        // Column-major: row 0 holds entries 0 and 7.
        assert_eq!(lines[0], "nm000  nm007");
        assert_eq!(lines[1], "nm001  nm008");
        // The last row holds only the bottom of the first column.
        assert_eq!(lines[6], "nm006");
    }

    #[test]
    fn test_everything_on_one_row_when_wide_enough() {
        let input = names(&["a", "b", "c"]);
        let lines = pack(&input, Some(80));
        assert_eq!(lines, vec!["a  b  c"]);
    }

    #[test]
    fn test_oversized_names_fall_back_to_one_column() {
        let input = names(&["first-very-long-name", "second-very-long-name"]);
        let lines = pack(&input, Some(10));
        assert_eq!(lines, vec!["first-very-long-name", "second-very-long-name"]);
    }

    #[test]
    fn test_feasibility_is_strict() {
        // Two names of length 3 give slot width 5 each; a width of 10 is
        // not strictly greater than 10, so they stack in one column.
        let input = names(&["abc", "def"]);
        assert_eq!(pack(&input, Some(10)), vec!["abc", "def"]);
        // One character more and they sit side by side.
        assert_eq!(pack(&input, Some(11)), vec!["abc  def"]);
    }

    #[test]
    fn test_single_name() {
        assert_eq!(pack(&names(&["only"]), Some(80)), vec!["only"]);
    }

    #[test]
    fn test_layout_reports_fallback_as_infeasible() {
        let input = names(&["stretched-out-name"]);
        let layout = compute_layout(&input, 5);
        assert_eq!(layout.num_columns, 1);
        assert!(!layout.feasible);
        assert_eq!(layout.total_line_width, 20);
    }
}
