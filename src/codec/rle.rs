//! 24-bit RLE decoder (component I).
//!
//! Frame layout: 1 ignored flags byte, a 24-bit chunk size that must equal
//! the sample size, then a 2-byte header. Only `0x0008` (partial update:
//! `start_line`/`num_lines` follow, each padded by 2 reserved bytes) is
//! implemented — any other header is framing this crate does not
//! understand and is reported rather than guessed at.
//!
//! Per line: a skip count (stored as `count + 1`, so `0` is never skipped by
//! itself), then signed 8-bit codes — `-1` ends the line, `0` is an in-line
//! skip (another skip count follows), positive is a literal run of that many
//! pixels, and anything `< -1` is one pixel repeated `-code` times.

use crate::codec::Tile;
use crate::error::{Error, Result};
use crate::fourcc::FourCC;
use crate::reader::ByteReader;

const PARTIAL_HEADER: u16 = 0x0008;

fn err(offset: u64, reason: impl Into<String>) -> Error {
    Error::DecodeError { codec: FourCC::Rle, offset, reason: reason.into() }
}

pub fn decode(sample: &[u8], width: u16, height: u16, depth: i16) -> Result<Tile> {
    if depth != 24 {
        return Err(err(0, format!("unsupported bit depth {depth}, only 24 is implemented")));
    }

    let mut r = ByteReader::new(sample);
    let _flags = r.u8()?;
    let chunk_size = r.u24_be()? as usize;
    if chunk_size != sample.len() {
        return Err(err(0, format!("chunk size {chunk_size} does not match sample size {}", sample.len())));
    }
    let header = r.u16_be()?;
    if header != PARTIAL_HEADER {
        return Err(err(r.tell(), format!("unrecognized frame header 0x{header:04x}")));
    }
    let start_line = r.u16_be()? as usize;
    let _reserved = r.bytes(2)?;
    let num_lines = r.u16_be()? as usize;
    let _reserved = r.bytes(2)?;

    let (w, h) = (width as usize, height as usize);
    if start_line + num_lines > h {
        return Err(err(r.tell(), "line range exceeds frame height"));
    }
    let mut rgb = vec![0u8; w * h * 3];

    for line in start_line..start_line + num_lines {
        let skip_count = r.u8()? as usize;
        let mut x = skip_count.saturating_sub(1);

        loop {
            let offset = r.tell();
            let code = r.i8()?;
            if code == -1 {
                break;
            } else if code == 0 {
                let skip = r.u8()? as usize;
                x += skip.saturating_sub(1);
            } else if code > 0 {
                let count = code as usize;
                for _ in 0..count {
                    if x >= w {
                        return Err(err(offset, "literal run overruns line width"));
                    }
                    let pixel = r.bytes(3)?;
                    write_pixel(&mut rgb, w, x, line, pixel);
                    x += 1;
                }
            } else {
                let count = (-(code as i32)) as usize;
                let pixel = r.bytes(3)?;
                for _ in 0..count {
                    if x >= w {
                        return Err(err(offset, "repeat run overruns line width"));
                    }
                    write_pixel(&mut rgb, w, x, line, pixel);
                    x += 1;
                }
            }
        }
    }

    Ok(Tile { width, height, rgb })
}

fn write_pixel(rgb: &mut [u8], width: usize, x: usize, y: usize, pixel: &[u8]) {
    let idx = (y * width + x) * 3;
    rgb[idx..idx + 3].copy_from_slice(pixel);
}
