//! Intensity histogram over 16 linear groups.
//!
//! A sample's group is its top four bits, so group `g` covers intensities
//! `16 * g ..= 16 * g + 15`.

use crate::ImageView;
use std::fmt;

/// Number of intensity groups.
pub const GROUPS: usize = 16;

/// Per-group sample counts for one image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntensityHistogram {
    counts: [u64; GROUPS],
    total: u64,
}

impl IntensityHistogram {
    /// Counts every sample of `image`.
    pub fn from_view(image: ImageView<'_, u8>) -> Self {
        let mut counts = [0u64; GROUPS];
        for y in 0..image.height() {
            let Some(row) = image.row(y) else {
                break;
            };
            for &value in row {
                counts[usize::from(value >> 4)] += 1;
            }
        }
        let total = counts.iter().sum();
        Self { counts, total }
    }

    /// Raw count per group.
    pub fn counts(&self) -> &[u64; GROUPS] {
        &self.counts
    }

    /// Number of samples counted.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Share of samples per group; sums to 1.
    pub fn fractions(&self) -> [f64; GROUPS] {
        let mut out = [0.0f64; GROUPS];
        if self.total == 0 {
            return out;
        }
        for (frac, &count) in out.iter_mut().zip(self.counts.iter()) {
            *frac = count as f64 / self.total as f64;
        }
        out
    }
}

impl fmt::Display for IntensityHistogram {
    /// One `<group> <fraction>` line per group.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (group, frac) in self.fractions().iter().enumerate() {
            writeln!(f, "{group} {frac:.6}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{IntensityHistogram, GROUPS};
    use crate::ImageView;

    #[test]
    fn groups_use_top_four_bits() {
        let data = [0u8, 15, 16, 255];
        let view = ImageView::from_slice(&data, 2, 2).unwrap();
        let hist = IntensityHistogram::from_view(view);
        assert_eq!(hist.counts()[0], 2);
        assert_eq!(hist.counts()[1], 1);
        assert_eq!(hist.counts()[GROUPS - 1], 1);
        assert_eq!(hist.total(), 4);
    }

    #[test]
    fn display_prints_sixteen_lines() {
        let data = [128u8; 4];
        let view = ImageView::from_slice(&data, 2, 2).unwrap();
        let text = IntensityHistogram::from_view(view).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), GROUPS);
        assert_eq!(lines[8], "8 1.000000");
        assert_eq!(lines[0], "0 0.000000");
    }
}
