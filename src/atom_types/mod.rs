//! Typed leaf atom payloads, one module per QTVR/QuickTime atom kind the
//! core depends on.

pub mod navg;
pub mod stco;
pub mod stsc;
pub mod stsd;
pub mod stsz;
pub mod tkhd;

pub use navg::Navg;
pub use stco::ChunkOffsets;
pub use stsc::{Stsc, StscRun};
pub use stsd::{DataFormat, PanoSampleDescription, SampleDescriptionEntry, Stsd, VideoSampleDescription};
pub use stsz::SampleSizes;
pub use tkhd::Tkhd;
