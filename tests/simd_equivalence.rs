#![cfg(feature = "simd")]

use blockmotion::lowlevel::{MadKernel, MadScalar, MadSimd};
use blockmotion::ImageView;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_buffer(rng: &mut StdRng, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.random_range(0..=255)).collect()
}

#[test]
fn simd_mad_matches_scalar_bit_for_bit() {
    let mut rng = StdRng::seed_from_u64(99);
    for (width, height) in [(16, 16), (8, 3), (7, 7), (33, 12), (1, 16)] {
        let a = random_buffer(&mut rng, width * height);
        let b = random_buffer(&mut rng, width * height);
        let va = ImageView::from_slice(&a, width, height).unwrap();
        let vb = ImageView::from_slice(&b, width, height).unwrap();

        assert_eq!(MadSimd::sad(va, vb), MadScalar::sad(va, vb));
        assert_eq!(MadSimd::mad(va, vb), MadScalar::mad(va, vb));
    }
}

#[test]
fn simd_respects_strided_views() {
    let mut rng = StdRng::seed_from_u64(3);
    let big = random_buffer(&mut rng, 40 * 40);
    let view = ImageView::from_slice(&big, 40, 40).unwrap();
    let a = view.roi(3, 5, 16, 16).unwrap();
    let b = view.roi(20, 11, 16, 16).unwrap();
    assert_eq!(MadSimd::sad(a, b), MadScalar::sad(a, b));
}
