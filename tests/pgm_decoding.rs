use blockmotion::lowlevel::decode_pgm_with;
use blockmotion::{
    decode_pgm, encode_pgm, load_pgm, BodyPolicy, DecodeOptions, MotionError, OwnedImage,
};
use std::io::Cursor;

fn pgm_bytes(header: &str, body: &[u8]) -> Vec<u8> {
    let mut bytes = header.as_bytes().to_vec();
    bytes.extend_from_slice(body);
    bytes
}

#[test]
fn decodes_rows_verbatim() {
    let body: Vec<u8> = (0u8..12).collect();
    let bytes = pgm_bytes("P5\n4\n3\n255\n", &body);

    let img = decode_pgm(Cursor::new(bytes)).unwrap();
    assert_eq!((img.width(), img.height()), (4, 3));
    let view = img.view();
    assert_eq!(view.row(0).unwrap(), &[0u8, 1, 2, 3]);
    assert_eq!(view.row(2).unwrap(), &[8u8, 9, 10, 11]);
}

#[test]
fn body_may_contain_newline_bytes() {
    let body = [b'\n', 0, 255, b'\n'];
    let bytes = pgm_bytes("P5\n2\n2\n255\n", &body);
    let img = decode_pgm(Cursor::new(bytes)).unwrap();
    assert_eq!(img.data(), &body);
}

#[test]
fn encoded_image_decodes_to_same_grid() {
    let img = OwnedImage::from_fn(17, 5, |x, y| ((x * 31 + y * 7) % 256) as u8).unwrap();
    let mut bytes = Vec::new();
    encode_pgm(&img, &mut bytes).unwrap();
    assert!(bytes.starts_with(b"P5\n17\n5\n255\n"));

    let decoded = decode_pgm(Cursor::new(bytes)).unwrap();
    assert_eq!(decoded, img);
}

#[test]
fn max_value_is_not_applied() {
    let bytes = pgm_bytes("P5\n2\n1\n15\n", &[200, 255]);
    let img = decode_pgm(Cursor::new(bytes)).unwrap();
    assert_eq!(img.data(), &[200, 255]);
}

#[test]
fn truncated_header_reports_line() {
    for (input, line) in [("", 1), ("P5\n", 2), ("P5\n4\n", 3), ("P5\n4\n4\n", 4)] {
        let err = decode_pgm(Cursor::new(input.as_bytes())).unwrap_err();
        assert_eq!(err, MotionError::TruncatedHeader { line });
    }
}

#[test]
fn non_numeric_dimensions_are_malformed() {
    let bytes = pgm_bytes("P5\nwide\n4\n255\n", &[0; 16]);
    let err = decode_pgm(Cursor::new(bytes)).unwrap_err();
    assert!(matches!(err, MotionError::MalformedImage { .. }));

    let bytes = pgm_bytes("P5\n4\n0\n255\n", &[]);
    let err = decode_pgm(Cursor::new(bytes)).unwrap_err();
    assert!(matches!(err, MotionError::MalformedImage { .. }));
}

#[test]
fn empty_format_tag_is_malformed() {
    let bytes = pgm_bytes("\n4\n2\n255\n", &[0; 8]);
    let err = decode_pgm(Cursor::new(bytes)).unwrap_err();
    assert_eq!(
        err,
        MotionError::MalformedImage {
            reason: "missing format tag".to_owned(),
        }
    );
}

#[test]
fn oversized_dimensions_with_short_body_are_malformed() {
    let header = "P5\n4000000000\n4000000000\n255\n";
    let err = decode_pgm(Cursor::new(pgm_bytes(header, &[1, 2]))).unwrap_err();
    assert!(matches!(err, MotionError::MalformedImage { .. }));

    let options = DecodeOptions {
        body: BodyPolicy::ZeroFill,
    };
    let err = decode_pgm_with(Cursor::new(pgm_bytes(header, &[1, 2])), options).unwrap_err();
    assert!(matches!(err, MotionError::MalformedImage { .. }));
}

#[test]
fn truncated_body_is_rejected_by_default() {
    let bytes = pgm_bytes("P5\n4\n2\n255\n", &[1, 2, 3, 4, 5]);
    let err = decode_pgm(Cursor::new(bytes)).unwrap_err();
    assert_eq!(
        err,
        MotionError::MalformedImage {
            reason: "body has 5 bytes, expected 8".to_owned(),
        }
    );
}

#[test]
fn truncated_body_can_be_zero_filled() {
    let bytes = pgm_bytes("P5\n4\n2\n255\n", &[1, 2, 3, 4, 5]);
    let options = DecodeOptions {
        body: BodyPolicy::ZeroFill,
    };
    let img = decode_pgm_with(Cursor::new(bytes), options).unwrap();
    assert_eq!(img.data(), &[1, 2, 3, 4, 5, 0, 0, 0]);
}

#[test]
fn trailing_bytes_are_ignored() {
    let bytes = pgm_bytes("P5\n2\n1\n255\n", &[9, 8, 7, 6]);
    let img = decode_pgm(Cursor::new(bytes)).unwrap();
    assert_eq!(img.data(), &[9, 8]);
}

#[test]
fn missing_file_is_reported() {
    let path = std::env::temp_dir().join("blockmotion-does-not-exist.pgm");
    let err = load_pgm(&path).unwrap_err();
    assert!(matches!(err, MotionError::FileNotFound { .. }));
    assert!(err.to_string().contains("blockmotion-does-not-exist.pgm"));
}

#[test]
fn load_reads_file_from_disk() {
    let img = OwnedImage::from_fn(6, 4, |x, y| (x * y) as u8).unwrap();
    let path = std::env::temp_dir().join(format!("blockmotion-load-{}.pgm", std::process::id()));
    let mut bytes = Vec::new();
    encode_pgm(&img, &mut bytes).unwrap();
    std::fs::write(&path, bytes).unwrap();

    let loaded = load_pgm(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(loaded, img);
}
