use blockmotion::{
    extract_block, extract_block_clipped, Block, ImageView, MotionError, OwnedImage,
};

#[test]
fn image_view_rejects_invalid_dimensions() {
    let data = [0u8; 4];

    let err = ImageView::from_slice(&data, 0, 1).err().unwrap();
    assert_eq!(
        err,
        MotionError::InvalidDimensions {
            width: 0,
            height: 1,
        }
    );

    let err = ImageView::from_slice(&data, 1, 0).err().unwrap();
    assert_eq!(
        err,
        MotionError::InvalidDimensions {
            width: 1,
            height: 0,
        }
    );
}

#[test]
fn image_view_rejects_invalid_stride_and_small_buffer() {
    let data = [0u8; 8];
    let err = ImageView::new(&data, 4, 1, 3).err().unwrap();
    assert_eq!(
        err,
        MotionError::InvalidStride {
            width: 4,
            stride: 3,
        }
    );

    let err = ImageView::new(&data[..3], 2, 2, 2).err().unwrap();
    assert_eq!(err, MotionError::BufferTooSmall { needed: 4, got: 3 });
}

#[test]
fn image_view_roi_matches_expected_values() {
    let data: Vec<u8> = (0u8..16).collect();
    let view = ImageView::from_slice(&data, 4, 4).unwrap();

    let roi = view.roi(1, 1, 2, 2).unwrap();
    assert_eq!((roi.width(), roi.height(), roi.stride()), (2, 2, 4));
    assert_eq!(roi.row(0).unwrap(), &[5u8, 6u8]);
    assert_eq!(roi.row(1).unwrap(), &[9u8, 10u8]);
    assert_eq!(roi.get(0, 0).copied(), Some(5u8));
    assert!(roi.get(2, 0).is_none());

    let err = view.roi(3, 3, 2, 2).err().unwrap();
    assert_eq!(
        err,
        MotionError::BlockOutOfBounds {
            x: 3,
            y: 3,
            width: 2,
            height: 2,
            img_width: 4,
            img_height: 4,
        }
    );
}

#[test]
fn owned_image_requires_exact_length() {
    assert!(OwnedImage::new(vec![0u8; 6], 3, 2).is_ok());
    assert_eq!(
        OwnedImage::new(vec![0u8; 5], 3, 2).unwrap_err(),
        MotionError::BufferTooSmall { needed: 6, got: 5 }
    );
    assert!(OwnedImage::new(vec![0u8; 7], 3, 2).is_err());
}

#[test]
fn extract_block_copies_region() {
    let img = OwnedImage::from_fn(8, 8, |x, y| (y * 8 + x) as u8).unwrap();
    let block = extract_block(img.view(), 2, 3, 3, 2).unwrap();

    assert_eq!((block.width(), block.height()), (3, 2));
    assert_eq!(block.view().row(0).unwrap(), &[26u8, 27, 28]);
    assert_eq!(block.view().row(1).unwrap(), &[34u8, 35, 36]);
    assert_eq!(block, Block::new(vec![26, 27, 28, 34, 35, 36], 3, 2).unwrap());
}

#[test]
fn extract_block_rejects_out_of_bounds_rectangle() {
    let img = OwnedImage::new(vec![0u8; 32 * 32], 32, 32).unwrap();
    let err = extract_block(img.view(), 20, 0, 16, 16).unwrap_err();
    assert!(matches!(err, MotionError::BlockOutOfBounds { x: 20, .. }));
}

#[test]
fn extract_block_clipped_shrinks_at_edges() {
    let img = OwnedImage::new(vec![7u8; 32 * 24], 32, 24).unwrap();
    let block = extract_block_clipped(img.view(), 20, 16, 16, 16).unwrap();
    assert_eq!((block.width(), block.height()), (12, 8));

    let full = extract_block_clipped(img.view(), 0, 0, 16, 16).unwrap();
    assert_eq!((full.width(), full.height()), (16, 16));
}

#[test]
fn block_rejects_zero_area() {
    assert_eq!(
        Block::new(Vec::new(), 0, 16).unwrap_err(),
        MotionError::InvalidDimensions {
            width: 0,
            height: 16,
        }
    );
}
