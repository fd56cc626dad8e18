//! Error-diffusion kernels.
//!
//! Each kernel lists the neighbours (relative to the current pixel) that
//! receive a share of the quantization error. A neighbour at `(dx, dy)` gets
//! `error * weight / divisor`. Neighbours outside the buffer are skipped;
//! there is no wraparound or reflection at the edges.

use crate::brightness::GrayscaleBuffer;

/// An error-diffusion kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel {
    /// Human-readable kernel name.
    pub name: &'static str,

    /// `(dx, dy, weight)` entries. `dy` is never negative and entries on the
    /// current row always have `dx > 0`, so only unvisited pixels are touched.
    pub entries: &'static [(i32, i32, u8)],

    /// Divisor applied to every weight.
    pub divisor: u8,
}

/// Floyd-Steinberg.
///
/// ```text
///        X   7
///    3   5   1     (/16)
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    name: "Floyd-Steinberg",
    entries: &[(1, 0, 7), (-1, 1, 3), (0, 1, 5), (1, 1, 1)],
    divisor: 16,
};

/// Jarvis, Judice and Ninke.
///
/// ```text
///            X   7   5
///    3   5   7   5   3
///    1   3   5   3   1     (/48)
/// ```
pub const JARVIS: Kernel = Kernel {
    name: "Jarvis",
    entries: &[
        (1, 0, 7),
        (2, 0, 5),
        (-2, 1, 3),
        (-1, 1, 5),
        (0, 1, 7),
        (1, 1, 5),
        (2, 1, 3),
        (-2, 2, 1),
        (-1, 2, 3),
        (0, 2, 5),
        (1, 2, 3),
        (2, 2, 1),
    ],
    divisor: 48,
};

/// Stucki: the Jarvis footprint with sharper weights.
///
/// ```text
///            X   8   4
///    2   4   8   4   2
///    1   2   4   2   1     (/42)
/// ```
pub const STUCKI: Kernel = Kernel {
    name: "Stucki",
    entries: &[
        (1, 0, 8),
        (2, 0, 4),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 8),
        (1, 1, 4),
        (2, 1, 2),
        (-2, 2, 1),
        (-1, 2, 2),
        (0, 2, 4),
        (1, 2, 2),
        (2, 2, 1),
    ],
    divisor: 42,
};

/// Burkes: Stucki without the third row.
///
/// ```text
///            X   8   4
///    2   4   8   4   2     (/32)
/// ```
pub const BURKES: Kernel = Kernel {
    name: "Burkes",
    entries: &[
        (1, 0, 8),
        (2, 0, 4),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 8),
        (1, 1, 4),
        (2, 1, 2),
    ],
    divisor: 32,
};

/// Sierra Lite.
///
/// ```text
///        X   2
///    1   1         (/4)
/// ```
pub const SIERRA_LITE: Kernel = Kernel {
    name: "Sierra Lite",
    entries: &[(1, 0, 2), (-1, 1, 1), (0, 1, 1)],
    divisor: 4,
};

/// Atkinson. Only 6/8 of the error is propagated; the rest is dropped.
///
/// ```text
///        X   1   1
///    1   1   1
///        1         (/8)
/// ```
pub const ATKINSON: Kernel = Kernel {
    name: "Atkinson",
    entries: &[
        (1, 0, 1),
        (2, 0, 1),
        (-1, 1, 1),
        (0, 1, 1),
        (1, 1, 1),
        (0, 2, 1),
    ],
    divisor: 8,
};

impl Kernel {
    /// Fraction of the error this kernel propagates.
    pub fn weight_sum(&self) -> f32 {
        let total: u32 = self.entries.iter().map(|&(_, _, w)| u32::from(w)).sum();
        total as f32 / f32::from(self.divisor)
    }

    /// In-bounds neighbours of `(x, y)` with their weight numerators.
    pub fn targets(
        &self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        self.entries.iter().filter_map(move |&(dx, dy, weight)| {
            let tx = x.checked_add_signed(dx as isize)?;
            let ty = y.checked_add_signed(dy as isize)?;
            (tx < width && ty < height).then_some((tx, ty, weight))
        })
    }

    /// Spread `error` from `(x, y)` onto its unvisited neighbours.
    ///
    /// With `clamp` set, each perturbed neighbour is clamped to `[0, 255]`.
    pub fn diffuse(&self, buffer: &mut GrayscaleBuffer, x: usize, y: usize, error: f32, clamp: bool) {
        let divisor = f32::from(self.divisor);
        let (width, height) = (buffer.width(), buffer.height());

        for (tx, ty, weight) in self.targets(x, y, width, height) {
            buffer.add(tx, ty, error * f32::from(weight) / divisor);
            if clamp {
                let v = buffer.get(tx, ty);
                buffer.set(tx, ty, v.clamp(0.0, 255.0));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Kernel; 6] = [FLOYD_STEINBERG, JARVIS, STUCKI, BURKES, SIERRA_LITE, ATKINSON];

    #[test]
    fn test_weight_sums() {
        for kernel in ALL {
            let expected = if kernel == ATKINSON { 0.75 } else { 1.0 };
            assert!(
                (kernel.weight_sum() - expected).abs() < 1e-6,
                "{} sums to {}",
                kernel.name,
                kernel.weight_sum()
            );
        }
    }

    #[test]
    fn test_entries_only_reach_forward() {
        for kernel in ALL {
            for &(dx, dy, _) in kernel.entries {
                assert!(dy > 0 || (dy == 0 && dx > 0), "{} reaches back", kernel.name);
            }
        }
    }

    #[test]
    fn test_targets_stay_in_bounds_at_corners() {
        let (w, h) = (5, 4);
        for kernel in ALL {
            for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1), (1, h - 2)] {
                for (tx, ty, _) in kernel.targets(x, y, w, h) {
                    assert!(tx < w && ty < h, "{} wrote ({tx}, {ty})", kernel.name);
                }
            }
            assert_eq!(kernel.targets(w - 1, h - 1, w, h).count(), 0);
        }
    }

    #[test]
    fn test_targets_clip_left_edge() {
        // (-2, 1) and (-1, 1) fall off the left edge at x = 0.
        let kept: Vec<_> = JARVIS.targets(0, 0, 8, 8).collect();
        assert_eq!(kept.len(), 12 - 4);
        assert!(kept.iter().all(|&(tx, _, _)| tx <= 2));
    }

    #[test]
    fn test_floyd_steinberg_scenario() {
        let mut buffer = GrayscaleBuffer::uniform(3, 2, 0.0).unwrap();
        buffer.set(1, 0, 128.0);

        // 128 quantizes to 255, leaving an error of -127.
        FLOYD_STEINBERG.diffuse(&mut buffer, 1, 0, -127.0, false);

        assert_eq!(buffer.get(2, 0), -55.5625);
        assert_eq!(buffer.get(0, 1), -23.8125);
        assert_eq!(buffer.get(1, 1), -39.6875);
        assert_eq!(buffer.get(2, 1), -7.9375);
    }

    /// Diffuse `error` from (2, 0) on a zeroed 5x3 buffer.
    fn spread(kernel: &Kernel, error: f32) -> Vec<f32> {
        let mut buffer = GrayscaleBuffer::uniform(5, 3, 0.0).unwrap();
        kernel.diffuse(&mut buffer, 2, 0, error, false);
        buffer.as_slice().to_vec()
    }

    // Errors equal to the divisor make every neighbour receive its weight.

    #[rustfmt::skip]
    #[test]
    fn test_floyd_steinberg_footprint() {
        assert_eq!(spread(&FLOYD_STEINBERG, 16.0), [
            0.0, 0.0, 0.0, 7.0, 0.0,
            0.0, 3.0, 5.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 0.0, 0.0,
        ]);
    }

    #[rustfmt::skip]
    #[test]
    fn test_jarvis_footprint() {
        assert_eq!(spread(&JARVIS, 48.0), [
            0.0, 0.0, 0.0, 7.0, 5.0,
            3.0, 5.0, 7.0, 5.0, 3.0,
            1.0, 3.0, 5.0, 3.0, 1.0,
        ]);
    }

    #[rustfmt::skip]
    #[test]
    fn test_stucki_footprint() {
        assert_eq!(spread(&STUCKI, 42.0), [
            0.0, 0.0, 0.0, 8.0, 4.0,
            2.0, 4.0, 8.0, 4.0, 2.0,
            1.0, 2.0, 4.0, 2.0, 1.0,
        ]);
    }

    #[rustfmt::skip]
    #[test]
    fn test_burkes_footprint() {
        assert_eq!(spread(&BURKES, 32.0), [
            0.0, 0.0, 0.0, 8.0, 4.0,
            2.0, 4.0, 8.0, 4.0, 2.0,
            0.0, 0.0, 0.0, 0.0, 0.0,
        ]);
    }

    #[rustfmt::skip]
    #[test]
    fn test_sierra_lite_footprint() {
        assert_eq!(spread(&SIERRA_LITE, 4.0), [
            0.0, 0.0, 0.0, 2.0, 0.0,
            0.0, 1.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 0.0, 0.0, 0.0,
        ]);
    }

    #[rustfmt::skip]
    #[test]
    fn test_atkinson_footprint() {
        assert_eq!(spread(&ATKINSON, 8.0), [
            0.0, 0.0, 0.0, 1.0, 1.0,
            0.0, 1.0, 1.0, 1.0, 0.0,
            0.0, 0.0, 1.0, 0.0, 0.0,
        ]);
    }

    #[test]
    fn test_atkinson_drops_a_quarter() {
        let mut buffer = GrayscaleBuffer::uniform(5, 3, 0.0).unwrap();
        ATKINSON.diffuse(&mut buffer, 2, 0, 80.0, false);

        let spread: f32 = buffer.as_slice().iter().sum();
        assert_eq!(spread, 60.0);
        assert_eq!(buffer.get(2, 2), 10.0);
    }

    #[test]
    fn test_clamp_keeps_samples_in_range() {
        let mut buffer = GrayscaleBuffer::uniform(2, 2, 10.0).unwrap();
        SIERRA_LITE.diffuse(&mut buffer, 0, 0, -200.0, true);
        assert_eq!(buffer.get(1, 0), 0.0);
        assert_eq!(buffer.get(0, 1), 0.0);

        let mut unclamped = GrayscaleBuffer::uniform(2, 2, 10.0).unwrap();
        SIERRA_LITE.diffuse(&mut unclamped, 0, 0, -200.0, false);
        assert_eq!(unclamped.get(1, 0), -90.0);
        assert_eq!(unclamped.get(0, 1), -40.0);
    }
}
