//! Sample locator (component F): from `stsc` + `stco`/`co64` + `stsz`,
//! compute the absolute file offset and byte length of every sample in a
//! track.

use crate::atom_types::{ChunkOffsets, SampleSizes, Stsc, StscRun};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleLocation {
    pub sample_id: u32,
    pub offset: u64,
    pub size: u32,
}

/// The `samples_per_chunk` in effect for `chunk_id` (1-based), per the last
/// `stsc` run whose `first_chunk` is `<= chunk_id`. Runs are required by the
/// container format to be sorted ascending by `first_chunk`.
fn samples_per_chunk_for(runs: &[StscRun], chunk_id: u32) -> u32 {
    let mut current = runs.first().map(|r| r.samples_per_chunk).unwrap_or(0);
    for run in runs {
        if run.first_chunk <= chunk_id {
            current = run.samples_per_chunk;
        } else {
            break;
        }
    }
    current
}

/// Emit `(sample_id, absolute_offset, size)` for every sample in ascending
/// `sample_id` order. Unlike the reference expansion, chunk and sample
/// counters are independent locals, never a loop variable shared across
/// nested loops, so there is no accidental double-increment at chunk
/// boundaries.
pub fn locate_samples(chunk_offsets: &ChunkOffsets, sample_sizes: &SampleSizes, stsc: &Stsc) -> Vec<SampleLocation> {
    let mut locations = Vec::with_capacity(sample_sizes.len());
    let mut sample_id: u32 = 0;

    'chunks: for (chunk_index, &chunk_offset) in chunk_offsets.0.iter().enumerate() {
        let chunk_id = chunk_index as u32 + 1;
        let samples_per_chunk = samples_per_chunk_for(&stsc.runs, chunk_id);
        let mut running_offset: u64 = 0;

        for _ in 0..samples_per_chunk {
            if sample_id as usize >= sample_sizes.len() {
                break 'chunks;
            }
            let size = sample_sizes.0[sample_id as usize];
            locations.push(SampleLocation { sample_id, offset: chunk_offset + running_offset, size });
            running_offset += size as u64;
            sample_id += 1;
        }
    }

    locations
}
