//! Portable pixmap (PPM) support.
//!
//! Writes binary `P6` with 8-bit samples, clamping each channel to `[0, 1]`
//! and truncating `255 * v`. Reads both `P6` and ASCII `P3`, 8 or 16 bit,
//! normalizing samples by the header's maxval.

use crate::{IoError, IoResult};
use lfd_core::{Color, Image};
use std::fs;
use std::path::Path;

/// Reads a PPM file.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let bytes = fs::read(path.as_ref())?;
    decode(&bytes)
}

/// Writes an image as binary PPM.
pub fn write<P: AsRef<Path>>(path: P, image: &Image) -> IoResult<()> {
    fs::write(path.as_ref(), encode(image)?)?;
    Ok(())
}

/// Encodes an image as binary `P6`.
pub fn encode(image: &Image) -> IoResult<Vec<u8>> {
    if image.is_empty() {
        return Err(IoError::EncodeError("cannot write an empty image".into()));
    }

    let header = format!("P6\n{} {}\n255\n", image.width(), image.height());
    let mut out = Vec::with_capacity(header.len() + image.data().len() * 3);
    out.extend_from_slice(header.as_bytes());
    for c in image.data() {
        out.push(to_u8(c.x));
        out.push(to_u8(c.y));
        out.push(to_u8(c.z));
    }
    Ok(out)
}

/// Decodes `P6` or `P3` data.
pub fn decode(data: &[u8]) -> IoResult<Image> {
    let mut header = Header::new(data);

    let magic = header.token()?;
    let binary = match magic {
        b"P6" => true,
        b"P3" => false,
        other => {
            return Err(IoError::InvalidFile(format!(
                "not a pixmap, magic {:?}",
                String::from_utf8_lossy(other)
            )));
        }
    };

    let width = header.number()?;
    let height = header.number()?;
    let maxval = header.number()?;
    if width == 0 || height == 0 {
        return Err(IoError::InvalidFile(format!("image size {}x{}", width, height)));
    }
    if maxval == 0 || maxval > 65535 {
        return Err(IoError::InvalidFile(format!("maxval {} out of range", maxval)));
    }

    let count = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(3))
        .ok_or_else(|| IoError::InvalidFile(format!("image size {}x{} overflows", width, height)))?;
    let maxval_f = maxval as f32;
    let samples = if binary {
        // Exactly one whitespace byte separates the header from the raster
        let start = header.pos + 1;
        let raster = data.get(start..).unwrap_or_default();
        read_binary(raster, count, maxval)?
    } else {
        // Every ASCII sample takes a digit and a separator, bar the last
        let remaining = data.len().saturating_sub(header.pos);
        if remaining / 2 + 1 < count {
            return Err(IoError::DecodeError(format!(
                "raster truncated: {} bytes for {} samples",
                remaining, count
            )));
        }
        let mut samples = Vec::with_capacity(count);
        for _ in 0..count {
            samples.push(header.number()?);
        }
        samples
    };

    let pixels = samples
        .chunks_exact(3)
        .map(|s| Color::new(s[0] as f32, s[1] as f32, s[2] as f32) / maxval_f)
        .collect();
    Ok(Image::from_data(width, height, pixels)?)
}

fn to_u8(v: f32) -> u8 {
    (255.0 * v.clamp(0.0, 1.0)) as u8
}

fn read_binary(raster: &[u8], count: usize, maxval: usize) -> IoResult<Vec<usize>> {
    let wide = maxval > 255;
    let needed = if wide { count.checked_mul(2) } else { Some(count) };
    let Some(needed) = needed.filter(|&n| n <= raster.len()) else {
        return Err(IoError::DecodeError(format!(
            "raster truncated: {} bytes for {} samples",
            raster.len(),
            count
        )));
    };
    Ok(if wide {
        raster[..needed]
            .chunks_exact(2)
            .map(|b| u16::from_be_bytes([b[0], b[1]]) as usize)
            .collect()
    } else {
        raster[..needed].iter().map(|&b| b as usize).collect()
    })
}

/// Whitespace-separated header tokenizer that skips `#` comments.
struct Header<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Header<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn token(&mut self) -> IoResult<&'a [u8]> {
        loop {
            match self.data.get(self.pos) {
                Some(b'#') => {
                    while let Some(&b) = self.data.get(self.pos) {
                        if b == b'\n' {
                            break;
                        }
                        self.pos += 1;
                    }
                }
                Some(b) if b.is_ascii_whitespace() => self.pos += 1,
                Some(_) => break,
                None => return Err(IoError::DecodeError("unexpected end of data".into())),
            }
        }
        let start = self.pos;
        while let Some(b) = self.data.get(self.pos) {
            if b.is_ascii_whitespace() {
                break;
            }
            self.pos += 1;
        }
        Ok(&self.data[start..self.pos])
    }

    fn number(&mut self) -> IoResult<usize> {
        let token = self.token()?;
        std::str::from_utf8(token)
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| {
                IoError::DecodeError(format!(
                    "expected a number, found {:?}",
                    String::from_utf8_lossy(token)
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_encode_clamps_and_truncates() {
        let image = Image::from_data(
            2,
            1,
            vec![Color::new(-0.5, 0.5, 1.5), Color::new(1.0, 0.0, 0.999)],
        )
        .unwrap();
        let bytes = encode(&image).unwrap();
        assert!(bytes.starts_with(b"P6\n2 1\n255\n"));
        let raster = &bytes[bytes.len() - 6..];
        assert_eq!(raster, &[0, 127, 255, 255, 0, 254]);
    }

    #[test]
    fn test_binary_roundtrip_quantized() {
        let image = Image::filled(3, 2, Color::new(1.0, 0.0, 1.0));
        let decoded = decode(&encode(&image).unwrap()).unwrap();
        assert_eq!(decoded, image);
    }

    #[test]
    fn test_ascii_with_comments() {
        let text = b"P3\n# made by hand\n2 1\n# max\n4\n4 0 2  1 1 1\n";
        let image = decode(text).unwrap();
        assert_eq!(image.dimensions(), (2, 1));
        assert_relative_eq!(image.at(0, 0).x, 1.0);
        assert_relative_eq!(image.at(0, 0).z, 0.5);
        assert_relative_eq!(image.at(1, 0).y, 0.25);
    }

    #[test]
    fn test_sixteen_bit_binary() {
        let mut data = b"P6 1 1 65535\n".to_vec();
        data.extend_from_slice(&[0xff, 0xff, 0x00, 0x00, 0x80, 0x00]);
        let image = decode(&data).unwrap();
        assert_relative_eq!(image.at(0, 0).x, 1.0);
        assert_relative_eq!(image.at(0, 0).y, 0.0);
        assert_relative_eq!(image.at(0, 0).z, 32768.0 / 65535.0);
    }

    #[test]
    fn test_truncated_raster() {
        let data = b"P6\n2 2\n255\n\x01\x02";
        assert!(matches!(decode(data), Err(IoError::DecodeError(_))));
    }

    #[test]
    fn test_oversized_binary_header() {
        let data = b"P6\n4294967296 4294967296\n255\n\0\0\0";
        assert!(matches!(decode(data), Err(IoError::InvalidFile(_))));
    }

    #[test]
    fn test_oversized_ascii_header() {
        let data = b"P3\n3000000 3000000 255\n1 2 3";
        assert!(matches!(decode(data), Err(IoError::DecodeError(_))));
    }

    #[test]
    fn test_huge_binary_raster_truncated() {
        let data = b"P6\n100000 100000\n65535\n\0\0";
        assert!(matches!(decode(data), Err(IoError::DecodeError(_))));
    }

    #[test]
    fn test_bad_magic() {
        assert!(matches!(decode(b"P5\n1 1\n255\n\0"), Err(IoError::InvalidFile(_))));
    }
}
