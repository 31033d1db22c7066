//! Name collation for entry ordering
//!
//! `ls` orders names with the locale's collation rules, which is what makes
//! `a`, `.b`, `c` come out in that order rather than the byte order a plain
//! string comparison would give. The locale-backed path transforms names
//! with `strxfrm(3)` so keys compare bytewise; the ASCII fallback mimics the
//! observable effect for plain names by lower-casing and stripping a single
//! leading dot.

use std::cmp::Ordering;
use std::ffi::CString;
use std::ptr;

use crate::config::SortOrder;
use crate::entry::Entry;

/// Apply the user's locale to the process.
///
/// Must run before any [`Collator::Locale`] comparison; without it the C
/// locale is in effect and `strxfrm` degenerates to byte order.
pub fn init_locale() {
    unsafe {
        libc::setlocale(libc::LC_ALL, c"".as_ptr());
    }
}

/// A pluggable name comparator.
///
/// `Locale` matches the platform collation standard and is what the CLI
/// uses. `Ascii` is the documented portable fallback; tests pin behavior
/// to it so they pass regardless of the host locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Collator {
    Locale,
    #[default]
    Ascii,
}

impl Collator {
    /// Compute the comparison key for a display name.
    ///
    /// Keys order bytewise; equal keys must keep insertion order, so all
    /// sorts over these keys are stable.
    pub fn key(&self, name: &str) -> Vec<u8> {
        match self {
            Collator::Locale => strxfrm_key(name).unwrap_or_else(|| ascii_key(name)),
            Collator::Ascii => ascii_key(name),
        }
    }

    /// Sort entries in place for the given order.
    ///
    /// `BySize` puts the largest entries first and falls back to the name
    /// key to break ties deterministically.
    pub fn sort_entries(&self, entries: &mut [Entry], order: SortOrder) {
        match order {
            SortOrder::ByName => {
                entries.sort_by_cached_key(|e| self.key(&e.display_name));
            }
            SortOrder::BySize => {
                entries.sort_by(|a, b| self.compare_by_size(a, b));
            }
        }
    }

    fn compare_by_size(&self, a: &Entry, b: &Entry) -> Ordering {
        b.size
            .cmp(&a.size)
            .then_with(|| self.key(&a.display_name).cmp(&self.key(&b.display_name)))
    }
}

/// Locale collation key via `strxfrm(3)`.
///
/// Returns `None` for names that cannot cross the C boundary (embedded
/// NUL) or when the transform fails.
fn strxfrm_key(name: &str) -> Option<Vec<u8>> {
    let c_name = CString::new(name).ok()?;
    unsafe {
        let needed = libc::strxfrm(ptr::null_mut(), c_name.as_ptr(), 0);
        if needed == usize::MAX {
            return None;
        }
        let mut buf = vec![0u8; needed + 1];
        libc::strxfrm(buf.as_mut_ptr() as *mut libc::c_char, c_name.as_ptr(), buf.len());
        buf.truncate(needed);
        Some(buf)
    }
}

/// Case- and dot-insensitive fallback key.
fn ascii_key(name: &str) -> Vec<u8> {
    let lowered = name.to_lowercase();
    let stripped = lowered.strip_prefix('.').unwrap_or(&lowered);
    stripped.as_bytes().to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&str]) -> Vec<String> {
        let collator = Collator::Ascii;
        let mut names: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        names.sort_by_cached_key(|n| collator.key(n));
        names
    }

    #[test]
    fn test_dot_names_interleave() {
        // .bar sorts before foo because bar < foo once the dot is stripped
        assert_eq!(sorted(&["foo", ".bar"]), vec![".bar", "foo"]);
        assert_eq!(sorted(&["a", ".b", "c"]), vec!["a", ".b", "c"]);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(sorted(&["Zeta", "alpha"]), vec!["alpha", "Zeta"]);
    }

    #[test]
    fn test_key_is_total() {
        let collator = Collator::Ascii;
        let names = ["foo", ".foo", "Foo", "bar", ""];
        for a in names {
            assert_eq!(collator.key(a), collator.key(a), "reflexive for {a:?}");
            for b in names {
                for c in names {
                    let ab = collator.key(a) <= collator.key(b);
                    let bc = collator.key(b) <= collator.key(c);
                    let ac = collator.key(a) <= collator.key(c);
                    if ab && bc {
                        assert!(ac, "transitivity broke on {a:?} {b:?} {c:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_size_sort_breaks_ties_by_name() {
        let collator = Collator::Ascii;
        let mut entries = vec![
            Entry::fake("b.txt", 3),
            Entry::fake("c.txt", 1),
            Entry::fake("a.txt", 2),
            Entry::fake("d.txt", 1),
        ];
        collator.sort_entries(&mut entries, SortOrder::BySize);
        let names: Vec<&str> = entries.iter().map(|e| e.display_name.as_str()).collect();
        assert_eq!(names, vec!["b.txt", "a.txt", "c.txt", "d.txt"]);
    }

    #[test]
    fn test_name_sort_is_stable_for_equal_keys() {
        let collator = Collator::Ascii;
        // "FOO" and ".foo" share the same fallback key
        let mut entries = vec![Entry::fake("FOO", 0), Entry::fake(".foo", 0)];
        collator.sort_entries(&mut entries, SortOrder::ByName);
        assert_eq!(entries[0].display_name, "FOO");
        assert_eq!(entries[1].display_name, ".foo");
    }
}
