//! Track header atom (`tkhd`).
//!
//! Location: `moov/trak[multiple]/tkhd`. Only `track_width`/`track_height`
//! (both 16.16 fixed-point) are load-bearing for the mosaic compositor, but
//! the full fixed layout is kept so the struct round-trips any `tkhd`.

use std::io::Cursor;

use binrw::BinRead;

use crate::error::Result;
use crate::fixed::decode_fixed;
use crate::reader::ByteReader;

/// Fixed byte size of the `tkhd` field layout this struct decodes (no trailing variable data).
pub const SIZE: usize = 84;

#[derive(Debug, BinRead)]
#[br(big)]
pub struct Tkhd {
    _version: u8,
    _flags: [u8; 3],
    pub(crate) creation_time: u32,
    pub(crate) modification_time: u32,
    pub(crate) track_id: u32,
    _reserved1: [u8; 4],
    pub(crate) duration: u32,
    _reserved2: [u8; 8],
    layer: u16,
    alternate_group: u16,
    volume: u16,
    _reserved3: [u8; 2],
    matrix_structure: [u8; 36],
    track_width: i32,
    track_height: i32,
}

impl Tkhd {
    /// Decode a `Tkhd` from the crate's bounds-checked reader, bridging to
    /// `binrw`'s `Read + Seek` requirement via an in-memory cursor.
    pub fn read_from(r: &mut ByteReader) -> Result<Self> {
        let bytes = r.bytes(SIZE)?;
        let mut cursor = Cursor::new(bytes);
        Ok(Self::read(&mut cursor)?)
    }

    pub fn track_id(&self) -> u32 {
        self.track_id
    }

    /// Track width in pixels.
    pub fn width(&self) -> f64 {
        decode_fixed(self.track_width)
    }

    /// Track height in pixels.
    pub fn height(&self) -> f64 {
        decode_fixed(self.track_height)
    }
}
