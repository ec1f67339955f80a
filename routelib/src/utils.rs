//! Various utility functions.

use crate::types::Index;

/// Manhattan (taxicab) distance between two `(row, column)` positions.
#[inline]
pub fn manhattan_distance(a: (Index, Index), b: (Index, Index)) -> usize {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

/// Apply a signed offset to a `(row, column)` position.
/// Returns `None` if the result would be negative or lie outside of a grid with given `shape`.
#[inline]
pub fn offset_within(
    position: (Index, Index),
    delta: (isize, isize),
    shape: (usize, usize),
) -> Option<(Index, Index)> {
    let row = position.0.checked_add_signed(delta.0)?;
    let col = position.1.checked_add_signed(delta.1)?;
    if row < shape.0 && col < shape.1 {
        Some((row, col))
    } else {
        None
    }
}

/// Split text into lines, dropping the blank lines at the beginning and the end.
/// Interior blank lines and trailing spaces on a line are kept.
pub fn trim_blank_lines(text: &str) -> Vec<&str> {
    let lines: Vec<&str> = text.lines().collect();
    let is_blank = |line: &&str| line.trim().is_empty();
    let first = match lines.iter().position(|l| !is_blank(l)) {
        Some(i) => i,
        None => return Vec::new(),
    };
    // There is at least one non-blank line at this point.
    let last = lines.iter().rposition(|l| !is_blank(l)).unwrap_or(first);
    lines[first..=last].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan() {
        assert_eq!(manhattan_distance((0, 0), (0, 0)), 0);
        assert_eq!(manhattan_distance((1, 5), (4, 2)), 6);
        assert_eq!(manhattan_distance((4, 2), (1, 5)), 6);
    }

    #[test]
    fn offsets() {
        assert_eq!(offset_within((0, 0), (-1, 0), (3, 3)), None);
        assert_eq!(offset_within((0, 0), (0, -1), (3, 3)), None);
        assert_eq!(offset_within((2, 2), (1, 0), (3, 3)), None);
        assert_eq!(offset_within((2, 2), (0, 1), (3, 3)), None);
        assert_eq!(offset_within((1, 1), (-1, 1), (3, 3)), Some((0, 2)));
    }

    #[test]
    fn blank_lines() {
        let text = "\n   \n S G \n\n X  \n  \n";
        assert_eq!(trim_blank_lines(text), vec![" S G ", "", " X  "]);
        assert!(trim_blank_lines("\n \n").is_empty());
        assert!(trim_blank_lines("").is_empty());
    }
}
