//! Plug-in point for codecs whose pixel reconstruction this crate does not
//! implement (Cinepak, SMC). The dispatcher (§4.G) only recognizes these
//! FourCCs and, for SMC, attaches the default palette to whatever indexed
//! surface comes back; the bitstream decode itself is the caller's problem.

use crate::error::Result;

/// What an external decoder hands back for one sample.
pub enum ExternalOutput {
    /// Already-resolved RGB pixels (e.g. a Cinepak decoder).
    Rgb { width: u16, height: u16, rgb: Vec<u8> },
    /// Palette indices with no color information of their own (e.g. SMC8);
    /// the dispatcher applies the canonical QuickTime palette (§4.K).
    Indexed { width: u16, height: u16, indices: Vec<u8> },
}

/// A pluggable decoder for a codec this crate treats as an external
/// collaborator. Registered by the caller (see [`crate::codec::Codecs`]);
/// with none registered, that codec's samples fail with `UnsupportedCodec`.
/// `Sync` so a registered decoder can be shared across the optional
/// `parallel` rayon decode path (§10.5) without extra synchronization.
pub trait ExternalDecoder: Sync {
    fn decode(&self, sample: &[u8], width: u16, height: u16, depth: i16) -> Result<ExternalOutput>;
}
