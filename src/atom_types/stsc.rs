//! Sample-to-chunk atom (`stsc`).
//!
//! Location: `moov/trak/mdia/minf/stbl/stsc`. A run-length schedule of
//! `(first_chunk, samples_per_chunk, sample_description_id)` triples.

use crate::error::Result;
use crate::reader::ByteReader;

#[derive(Debug, Clone, Copy)]
pub struct StscRun {
    pub first_chunk: u32,
    pub samples_per_chunk: u32,
    pub sample_description_id: u32,
}

#[derive(Debug, Clone)]
pub struct Stsc {
    pub runs: Vec<StscRun>,
}

impl Stsc {
    pub fn parse(r: &mut ByteReader) -> Result<Self> {
        let _version = r.u8()?;
        let _flags = r.bytes(3)?;
        let entry_count = r.u32_be()?;
        let mut runs = Vec::with_capacity(entry_count as usize);
        for _ in 0..entry_count {
            runs.push(StscRun {
                first_chunk: r.u32_be()?,
                samples_per_chunk: r.u32_be()?,
                sample_description_id: r.u32_be()?,
            });
        }
        Ok(Self { runs })
    }
}
