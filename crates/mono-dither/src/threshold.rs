//! Threshold matrices for ordered dithering.
//!
//! A matrix is tiled over the image by addressing it with `(x mod N, y mod N)`.
//! The threshold for a cell value `v` is `(v + 0.5) / N² × 255`, so a pixel
//! prints when its brightness is below that threshold.

/// An `N×N` threshold matrix stored row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdMatrix {
    pub name: &'static str,
    pub size: usize,
    pub cells: &'static [u8],
}

#[rustfmt::skip]
pub const BAYER_2X2: ThresholdMatrix = ThresholdMatrix {
    name: "Bayer 2x2",
    size: 2,
    cells: &[
        0, 2,
        3, 1,
    ],
};

#[rustfmt::skip]
pub const BAYER_4X4: ThresholdMatrix = ThresholdMatrix {
    name: "Bayer 4x4",
    size: 4,
    cells: &[
         0,  8,  2, 10,
        12,  4, 14,  6,
         3, 11,  1,  9,
        15,  7, 13,  5,
    ],
};

#[rustfmt::skip]
pub const BAYER_8X8: ThresholdMatrix = ThresholdMatrix {
    name: "Bayer 8x8",
    size: 8,
    cells: &[
         0, 32,  8, 40,  2, 34, 10, 42,
        48, 16, 56, 24, 50, 18, 58, 26,
        12, 44,  4, 36, 14, 46,  6, 38,
        60, 28, 52, 20, 62, 30, 54, 22,
         3, 35, 11, 43,  1, 33,  9, 41,
        51, 19, 59, 27, 49, 17, 57, 25,
        15, 47,  7, 39, 13, 45,  5, 37,
        63, 31, 55, 23, 61, 29, 53, 21,
    ],
};

/// Clustered-dot screen. Cell values run 1..=16 rather than 0..=15, so the
/// centre cell's threshold sits above 255 and always prints.
#[rustfmt::skip]
pub const HALFTONE_4X4: ThresholdMatrix = ThresholdMatrix {
    name: "Halftone 4x4",
    size: 4,
    cells: &[
         7, 13, 11,  4,
        12, 16, 14,  8,
        10, 15,  6,  2,
         5,  9,  3,  1,
    ],
};

impl ThresholdMatrix {
    /// Number of cells (`N²`), used to normalize cell values.
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Raw cell value covering pixel `(x, y)`.
    pub fn cell(&self, x: usize, y: usize) -> u8 {
        self.cells[(y % self.size) * self.size + (x % self.size)]
    }

    /// Brightness threshold for pixel `(x, y)`.
    pub fn threshold(&self, x: usize, y: usize) -> f32 {
        let v = f64::from(self.cell(x, y));
        ((v + 0.5) / self.cell_count() as f64 * 255.0) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_cells(matrix: &ThresholdMatrix) -> Vec<u8> {
        let mut cells = matrix.cells.to_vec();
        cells.sort_unstable();
        cells
    }

    #[test]
    fn test_bayer_matrices_are_permutations() {
        for matrix in [BAYER_2X2, BAYER_4X4, BAYER_8X8] {
            assert_eq!(matrix.cells.len(), matrix.cell_count());
            let expected: Vec<u8> = (0..matrix.cell_count() as u8).collect();
            assert_eq!(sorted_cells(&matrix), expected, "{}", matrix.name);
        }
    }

    #[test]
    fn test_halftone_is_one_based_permutation() {
        let expected: Vec<u8> = (1..=16).collect();
        assert_eq!(sorted_cells(&HALFTONE_4X4), expected);
        assert!(HALFTONE_4X4.threshold(1, 1) > 255.0);
    }

    /// Each Bayer matrix is four quadrants of the next smaller one, scaled by 4
    /// and offset by the 2x2 pattern.
    #[test]
    fn test_bayer_matrices_follow_recursion() {
        for (small, large) in [(BAYER_2X2, BAYER_4X4), (BAYER_4X4, BAYER_8X8)] {
            let n = small.size;
            assert_eq!(large.size, 2 * n);
            for y in 0..large.size {
                for x in 0..large.size {
                    let expected = 4 * small.cell(x, y) + BAYER_2X2.cell(x / n, y / n);
                    assert_eq!(large.cell(x, y), expected, "{} ({x}, {y})", large.name);
                }
            }
        }
    }

    #[rustfmt::skip]
    #[test]
    fn test_halftone_growth_order() {
        // Positions in the order the cluster darkens, for cell values 1..=16.
        let order = [
            (3, 3), (3, 2), (2, 3), (3, 0), (0, 3), (2, 2), (0, 0), (3, 1),
            (1, 3), (0, 2), (2, 0), (0, 1), (1, 0), (2, 1), (1, 2), (1, 1),
        ];
        for (value, &(x, y)) in (1u8..).zip(order.iter()) {
            assert_eq!(HALFTONE_4X4.cell(x, y), value, "({x}, {y})");
        }
    }

    #[test]
    fn test_bayer_2x2_thresholds() {
        assert_eq!(BAYER_2X2.threshold(0, 0), 31.875);
        assert_eq!(BAYER_2X2.threshold(1, 0), 159.375);
        assert_eq!(BAYER_2X2.threshold(0, 1), 223.125);
        assert_eq!(BAYER_2X2.threshold(1, 1), 95.625);
    }

    #[test]
    fn test_tiling_wraps_each_axis() {
        for matrix in [BAYER_2X2, BAYER_4X4, BAYER_8X8, HALFTONE_4X4] {
            let n = matrix.size;
            for y in 0..n {
                for x in 0..n {
                    let t = matrix.threshold(x, y);
                    assert_eq!(matrix.threshold(x + n, y), t);
                    assert_eq!(matrix.threshold(x, y + 3 * n), t);
                }
            }
        }
    }

    #[test]
    fn test_thresholds_stay_inside_range() {
        for matrix in [BAYER_2X2, BAYER_4X4, BAYER_8X8] {
            for y in 0..matrix.size {
                for x in 0..matrix.size {
                    let t = matrix.threshold(x, y);
                    assert!(t > 0.0 && t < 255.0, "{} ({x}, {y}) = {t}", matrix.name);
                }
            }
        }
    }
}
