//! Sample size atom (`stsz`).
//!
//! Location: `moov/trak[multiple]/mdia/minf/stbl/stsz`. If `sample_size` is
//! nonzero every sample shares that size and the per-sample table is absent;
//! otherwise `sample_count` entries follow.

use crate::error::Result;
use crate::reader::ByteReader;

#[derive(Debug, Clone)]
pub struct SampleSizes(pub Vec<u32>);

impl SampleSizes {
    pub fn parse(r: &mut ByteReader) -> Result<Self> {
        let _version = r.u8()?;
        let _flags = r.bytes(3)?;
        let sample_size = r.u32_be()?;
        let sample_count = r.u32_be()?;
        let sizes = if sample_size != 0 {
            vec![sample_size; sample_count as usize]
        } else {
            let mut sizes = Vec::with_capacity(sample_count as usize);
            for _ in 0..sample_count {
                sizes.push(r.u32_be()?);
            }
            sizes
        };
        Ok(Self(sizes))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_size_expands_to_count() {
        let mut buf = vec![0u8, 0, 0, 0];
        buf.extend_from_slice(&64u32.to_be_bytes()); // sample_size
        buf.extend_from_slice(&3u32.to_be_bytes()); // sample_count
        let mut r = ByteReader::new(&buf);
        let sizes = SampleSizes::parse(&mut r).unwrap();
        assert_eq!(sizes.0, vec![64, 64, 64]);
    }

    #[test]
    fn per_sample_table() {
        let mut buf = vec![0u8, 0, 0, 0];
        buf.extend_from_slice(&0u32.to_be_bytes()); // sample_size = 0 -> table follows
        buf.extend_from_slice(&2u32.to_be_bytes());
        buf.extend_from_slice(&10u32.to_be_bytes());
        buf.extend_from_slice(&20u32.to_be_bytes());
        let mut r = ByteReader::new(&buf);
        let sizes = SampleSizes::parse(&mut r).unwrap();
        assert_eq!(sizes.0, vec![10, 20]);
    }
}
