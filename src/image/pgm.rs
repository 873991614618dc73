//! Binary PGM-style decoding and encoding.
//!
//! The header is four text lines: a format tag, the width, the height and the
//! maximum sample value. Each line is whitespace-trimmed. Only the width and
//! height are interpreted; the tag must be present and the maximum sample
//! value is read but not applied. The body follows immediately as
//! `width * height` raw bytes, row-major, no padding.

use crate::image::OwnedImage;
use crate::trace::{trace_event, trace_span};
use crate::util::{MotionError, MotionResult};
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::Path;

const HEADER_LINES: usize = 4;

/// How to treat a body shorter than `width * height` bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BodyPolicy {
    /// Reject the image with [`MotionError::MalformedImage`].
    #[default]
    Strict,
    /// Keep whatever was read and fill the remaining samples with zero.
    ZeroFill,
}

/// Decoder options.
#[derive(Clone, Copy, Debug, Default)]
pub struct DecodeOptions {
    /// Truncated body handling.
    pub body: BodyPolicy,
}

/// Parsed header fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PgmHeader {
    /// Format tag, e.g. `P5`.
    pub tag: String,
    pub width: usize,
    pub height: usize,
    /// Declared maximum sample value, kept verbatim.
    pub max_value: String,
}

/// Opens `path` and decodes it with strict body handling.
pub fn load_pgm<P: AsRef<Path>>(path: P) -> MotionResult<OwnedImage> {
    load_pgm_with(path, DecodeOptions::default())
}

/// Opens `path` and decodes it with the given options.
pub fn load_pgm_with<P: AsRef<Path>>(
    path: P,
    options: DecodeOptions,
) -> MotionResult<OwnedImage> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| MotionError::FileNotFound {
        path: path.display().to_string(),
        reason: err.to_string(),
    })?;
    decode_pgm_with(BufReader::new(file), options)
}

/// Decodes an image from a buffered reader with strict body handling.
pub fn decode_pgm<R: BufRead>(reader: R) -> MotionResult<OwnedImage> {
    decode_pgm_with(reader, DecodeOptions::default())
}

/// Decodes an image from a buffered reader.
pub fn decode_pgm_with<R: BufRead>(
    mut reader: R,
    options: DecodeOptions,
) -> MotionResult<OwnedImage> {
    let _span = trace_span!("decode_pgm").entered();

    let header = read_header(&mut reader)?;
    let len = header
        .width
        .checked_mul(header.height)
        .ok_or_else(|| MotionError::malformed("image dimensions overflow"))?;

    // Grows with the bytes actually present, never with the declared size.
    let mut data = Vec::new();
    reader.take(len as u64).read_to_end(&mut data)?;
    if data.len() < len {
        match options.body {
            BodyPolicy::Strict => {
                return Err(MotionError::malformed(format!(
                    "body has {} bytes, expected {len}",
                    data.len()
                )))
            }
            BodyPolicy::ZeroFill => {
                data.try_reserve_exact(len - data.len()).map_err(|_| {
                    MotionError::malformed(format!("cannot allocate {len} samples"))
                })?;
                data.resize(len, 0);
            }
        }
    }

    trace_event!("image_decoded", width = header.width, height = header.height);
    OwnedImage::new(data, header.width, header.height)
}

/// Reads and validates the four header lines.
pub fn read_header<R: BufRead>(reader: &mut R) -> MotionResult<PgmHeader> {
    let mut fields: Vec<String> = Vec::with_capacity(HEADER_LINES);
    let mut buf = Vec::new();
    for line in 1..=HEADER_LINES {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Err(MotionError::TruncatedHeader { line });
        }
        fields.push(String::from_utf8_lossy(&buf).trim().to_owned());
    }

    let max_value = fields.pop().unwrap_or_default();
    let height = parse_dimension(fields.pop().unwrap_or_default(), "height")?;
    let width = parse_dimension(fields.pop().unwrap_or_default(), "width")?;
    let tag = fields.pop().unwrap_or_default();
    if tag.is_empty() {
        return Err(MotionError::malformed("missing format tag"));
    }

    Ok(PgmHeader {
        tag,
        width,
        height,
        max_value,
    })
}

fn parse_dimension(field: String, name: &str) -> MotionResult<usize> {
    let value: usize = field.parse().map_err(|_| {
        MotionError::malformed(format!("{name} `{field}` is not a decimal integer"))
    })?;
    if value == 0 {
        return Err(MotionError::malformed(format!("{name} must be positive")));
    }
    Ok(value)
}

/// Writes `image` as a binary `P5` file with a maximum value of 255.
pub fn encode_pgm<W: Write>(image: &OwnedImage, mut writer: W) -> MotionResult<()> {
    write!(writer, "P5\n{}\n{}\n255\n", image.width(), image.height())?;
    writer.write_all(image.data())?;
    writer.flush()?;
    Ok(())
}

/// Encodes `image` into `path`, replacing any existing file.
pub fn save_pgm<P: AsRef<Path>>(image: &OwnedImage, path: P) -> MotionResult<()> {
    let file = File::create(path)?;
    encode_pgm(image, std::io::BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::read_header;
    use crate::util::MotionError;

    #[test]
    fn header_fields_are_trimmed() {
        let mut input: &[u8] = b"  P5 \r\n 4\t\n3 \n 255\n";
        let header = read_header(&mut input).unwrap();
        assert_eq!(header.tag, "P5");
        assert_eq!((header.width, header.height), (4, 3));
        assert_eq!(header.max_value, "255");
    }

    #[test]
    fn header_reports_first_missing_line() {
        let mut input: &[u8] = b"P5\n4\n";
        assert_eq!(
            read_header(&mut input).unwrap_err(),
            MotionError::TruncatedHeader { line: 3 }
        );
    }

    #[test]
    fn last_header_line_without_newline_still_counts() {
        let mut input: &[u8] = b"P5\n1\n1\n255";
        assert!(read_header(&mut input).is_ok());
    }
}
