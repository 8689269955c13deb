//! The fixed three-peak board layout: 28 positions in rows of 3, 6, 9 and 10.
//!
//! Positions are indexed row by row, peaks first. Every position above the
//! bottom row is covered by exactly two positions in the row below it; a
//! position is playable only once both coverers are gone.

pub const TABLEAU_SIZE: usize = 28;

/// First index of the bottom row, the 10 positions dealt face-up.
pub const FIRST_UNCOVERED: usize = 18;

#[rustfmt::skip]
const COVERING: [[usize; 2]; FIRST_UNCOVERED] = [
    // peaks
    [3, 4], [5, 6], [7, 8],
    // second row
    [9, 10], [10, 11], [12, 13], [13, 14], [15, 16], [16, 17],
    // third row
    [18, 19], [19, 20], [20, 21], [21, 22], [22, 23], [23, 24],
    [24, 25], [25, 26], [26, 27],
];

/// The positions covering `i`; empty for the bottom row.
pub fn covering_positions(i: usize) -> &'static [usize] {
    if i < FIRST_UNCOVERED {
        &COVERING[i]
    } else {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bottom_row_is_uncovered() {
        for i in FIRST_UNCOVERED..TABLEAU_SIZE {
            assert!(covering_positions(i).is_empty());
        }
    }

    #[test]
    fn test_covered_rows() {
        assert_eq!(covering_positions(0), &[3, 4]);
        assert_eq!(covering_positions(13), &[22, 23]);
        assert_eq!(covering_positions(17), &[26, 27]);
        for i in 0..FIRST_UNCOVERED {
            let [a, b] = covering_positions(i) else {
                panic!("position {i} must have two coverers");
            };
            assert!(a < b, "coverers of {i} must be distinct and ordered");
            assert!(*a > i && *b < TABLEAU_SIZE, "coverers of {i} lie below it");
        }
    }
}
