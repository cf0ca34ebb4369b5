//! Chunk offset atoms (`stco`/`co64`).
//!
//! Both variants normalize to the same in-memory representation: a plain
//! `Vec<u64>` of absolute chunk offsets, regardless of whether the file used
//! 32-bit or 64-bit storage.

use crate::error::Result;
use crate::reader::ByteReader;

#[derive(Debug, Clone, Default)]
pub struct ChunkOffsets(pub Vec<u64>);

impl ChunkOffsets {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `stco`: 32-bit offsets.
    pub fn parse_stco(r: &mut ByteReader) -> Result<Self> {
        let _version = r.u8()?;
        let _flags = r.bytes(3)?;
        let count = r.u32_be()?;
        let mut offsets = Vec::with_capacity(count as usize);
        for _ in 0..count {
            offsets.push(r.u32_be()? as u64);
        }
        Ok(Self(offsets))
    }

    /// `co64`: 64-bit offsets, for movies whose `mdat` exceeds 4 GiB.
    pub fn parse_co64(r: &mut ByteReader) -> Result<Self> {
        let _version = r.u8()?;
        let _flags = r.bytes(3)?;
        let count = r.u32_be()?;
        let mut offsets = Vec::with_capacity(count as usize);
        for _ in 0..count {
            offsets.push(r.u64_be()?);
        }
        Ok(Self(offsets))
    }
}
