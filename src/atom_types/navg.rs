//! Object-movie grid descriptor atom (`NAVG`), 48 bytes, found under `moov/udta`.

use std::io::Cursor;

use binrw::BinRead;

use crate::error::Result;
use crate::reader::ByteReader;

/// Fixed byte size of the `NAVG` record.
pub const SIZE: usize = 48;

#[derive(Debug, BinRead)]
#[br(big)]
pub struct Navg {
    pub version: u16,
    pub columns: u16,
    pub rows: u16,
    _reserved0: u16,
    pub loop_size: u32,
    pub frame_duration: u16,
    pub movie_type: u16,
    pub loop_ticks: u16,
    pub field_of_view: u16,
    pub start_h_pan: i32,
    pub end_h_pan: i32,
    pub end_v_pan: i32,
    pub start_v_pan: i32,
    pub initial_h_pan: i32,
    pub initial_v_pan: i32,
    _reserved1: u32,
}

impl Navg {
    pub fn read_from(r: &mut ByteReader) -> Result<Self> {
        let bytes = r.bytes(SIZE)?;
        let mut cursor = Cursor::new(bytes);
        Ok(Self::read(&mut cursor)?)
    }

    pub fn grid(&self) -> (u16, u16) {
        (self.columns, self.rows)
    }
}
