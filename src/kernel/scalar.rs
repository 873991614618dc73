//! Scalar reference kernel.

use crate::kernel::{overlap, MadKernel};
use crate::ImageView;

/// Scalar mean absolute difference.
pub struct MadScalar;

impl MadKernel for MadScalar {
    fn sad(a: ImageView<'_, u8>, b: ImageView<'_, u8>) -> u64 {
        let (width, height) = overlap(a, b);
        let mut sum = 0u64;
        for y in 0..height {
            let (Some(row_a), Some(row_b)) = (a.row(y), b.row(y)) else {
                break;
            };
            for (&va, &vb) in row_a[..width].iter().zip(&row_b[..width]) {
                sum += u64::from(va.abs_diff(vb));
            }
        }
        sum
    }
}

#[cfg(test)]
mod tests {
    use super::MadScalar;
    use crate::kernel::MadKernel;
    use crate::ImageView;

    #[test]
    fn mad_uses_overlapping_region_only() {
        let a = [10u8, 20, 30, 40, 50, 60];
        let b = [12u8, 16, 30, 44];
        let va = ImageView::from_slice(&a, 3, 2).unwrap();
        let vb = ImageView::from_slice(&b, 2, 2).unwrap();

        // Overlap is 2x2: |10-12| + |20-16| + |40-30| + |50-44| = 22.
        assert_eq!(MadScalar::sad(va, vb), 22);
        assert!((MadScalar::mad(va, vb) - 5.5).abs() < 1e-12);
    }
}
