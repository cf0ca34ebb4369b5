//! Codec dispatch (component G): decode one sample into RGB pixels, routing
//! to an in-house decoder for `rpza`/`rle ` and to a registered
//! [`ExternalDecoder`] for `cvid`/`smc `.

pub mod external;
pub mod rle;
pub mod rpza;

use crate::atom_types::DataFormat;
use crate::error::{Error, Result};
use crate::fourcc::FourCC;
use crate::palette;

pub use external::{ExternalDecoder, ExternalOutput};

/// A single decoded frame: tightly packed 8-bit RGB, row-major.
pub struct Tile {
    pub width: u16,
    pub height: u16,
    pub rgb: Vec<u8>,
}

/// Decoders registered for the codecs this crate does not implement itself.
/// Either field left `None` means samples of that format fail with
/// `UnsupportedCodec` rather than being silently skipped.
#[derive(Default)]
pub struct Codecs<'a> {
    pub cvid: Option<&'a dyn ExternalDecoder>,
    pub smc: Option<&'a dyn ExternalDecoder>,
}

/// Decode one sample, dispatching on `data_format`.
pub fn decode_sample(data_format: DataFormat, sample: &[u8], width: u16, height: u16, depth: i16, codecs: &Codecs) -> Result<Tile> {
    match data_format {
        DataFormat::Rpza => rpza::decode(sample, width, height),
        DataFormat::Rle => rle::decode(sample, width, height, depth),
        DataFormat::Cvid => {
            let decoder = codecs.cvid.ok_or(Error::UnsupportedCodec(FourCC::Cvid))?;
            match decoder.decode(sample, width, height, depth)? {
                ExternalOutput::Rgb { width, height, rgb } => Ok(Tile { width, height, rgb }),
                ExternalOutput::Indexed { width, height, indices } => {
                    Ok(Tile { width, height, rgb: palette::apply_default_palette(&indices) })
                }
            }
        }
        DataFormat::Smc => {
            let decoder = codecs.smc.ok_or(Error::UnsupportedCodec(FourCC::Smc))?;
            match decoder.decode(sample, width, height, depth)? {
                ExternalOutput::Rgb { width, height, rgb } => Ok(Tile { width, height, rgb }),
                ExternalOutput::Indexed { width, height, indices } => {
                    Ok(Tile { width, height, rgb: palette::apply_default_palette(&indices) })
                }
            }
        }
        DataFormat::Pano | DataFormat::Other => Err(Error::UnsupportedCodec(FourCC::Custom(format!("{data_format:?}")))),
    }
}
