//! QuickTime / QTVR atom and codec FourCC.
//! See atom types in Apple's QuickTime File Format 2007-09-04 reference,
//! and the QTVR extensions layered on top of it.

use std::fmt::Display;

/// A four-byte type tag, used both as an atom's kind and as a codec / controller identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FourCC {
    // Containers
    Moov,
    Trak,
    Mdia,
    Minf,
    Stbl,
    Edts,
    Udta,
    Dinf,
    Gmhd,
    /// Panorama track info container, `STpn` (capitalized, distinct from the `ctyp` value `stpn`).
    STpn,
    Mdat,
    Free,

    // stbl leaves
    Stsd,
    Stsc,
    Stco,
    Co64,
    Stsz,
    Stts,
    Stss,

    // minf leaves
    Hdlr,
    Smhd,
    Vmhd,
    Dref,
    Gmin,
    Pinf,

    // udta leaves
    Ctyp,
    Navg,
    Wloc,

    // track header
    Tkhd,

    // panorama sample description / sample payload sub-atoms
    Pano,
    PHdr,
    PHot,
    StrT,
    PLnk,
    PNav,

    // codec data formats
    Rpza,
    Rle,
    Cvid,
    Smc,

    /// Any FourCC not enumerated above, preserved byte-for-byte (ISO-8859-1 mapped so bytes
    /// above 127 round-trip, matching how vendor-specific tags like GoPro's `©xyz` are handled).
    Custom(String),
}

impl Display for FourCC {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FourCC {
    pub fn from_slice(fourcc: &[u8]) -> Self {
        assert_eq!(fourcc.len(), 4, "FourCC must have size 4.");
        match fourcc {
            b"moov" => Self::Moov,
            b"trak" => Self::Trak,
            b"mdia" => Self::Mdia,
            b"minf" => Self::Minf,
            b"stbl" => Self::Stbl,
            b"edts" => Self::Edts,
            b"udta" => Self::Udta,
            b"dinf" => Self::Dinf,
            b"gmhd" => Self::Gmhd,
            b"STpn" => Self::STpn,
            b"mdat" => Self::Mdat,
            b"free" => Self::Free,

            b"stsd" => Self::Stsd,
            b"stsc" => Self::Stsc,
            b"stco" => Self::Stco,
            b"co64" => Self::Co64,
            b"stsz" => Self::Stsz,
            b"stts" => Self::Stts,
            b"stss" => Self::Stss,

            b"hdlr" => Self::Hdlr,
            b"smhd" => Self::Smhd,
            b"vmhd" => Self::Vmhd,
            b"dref" => Self::Dref,
            b"gmin" => Self::Gmin,
            b"pInf" => Self::Pinf,

            b"ctyp" => Self::Ctyp,
            b"NAVG" => Self::Navg,
            b"WLOC" => Self::Wloc,

            b"tkhd" => Self::Tkhd,

            b"pano" => Self::Pano,
            b"pHdr" => Self::PHdr,
            b"pHot" => Self::PHot,
            b"strT" => Self::StrT,
            b"pLnk" => Self::PLnk,
            b"pNav" => Self::PNav,

            b"rpza" => Self::Rpza,
            b"rle " => Self::Rle,
            b"cvid" => Self::Cvid,
            b"smc " => Self::Smc,

            // UTF-8 does not work for single-byte char above 127,
            // but ISO-8859-1 mapping round-trips for the 128-255 range
            // (e.g. copyright-prefixed vendor atoms).
            _ => Self::Custom(fourcc.iter().map(|n| *n as char).collect::<String>()),
        }
    }

    pub fn from_u32(value: u32) -> Self {
        Self::from_slice(&value.to_be_bytes())
    }

    pub fn to_str(&self) -> &str {
        match self {
            Self::Moov => "moov",
            Self::Trak => "trak",
            Self::Mdia => "mdia",
            Self::Minf => "minf",
            Self::Stbl => "stbl",
            Self::Edts => "edts",
            Self::Udta => "udta",
            Self::Dinf => "dinf",
            Self::Gmhd => "gmhd",
            Self::STpn => "STpn",
            Self::Mdat => "mdat",
            Self::Free => "free",

            Self::Stsd => "stsd",
            Self::Stsc => "stsc",
            Self::Stco => "stco",
            Self::Co64 => "co64",
            Self::Stsz => "stsz",
            Self::Stts => "stts",
            Self::Stss => "stss",

            Self::Hdlr => "hdlr",
            Self::Smhd => "smhd",
            Self::Vmhd => "vmhd",
            Self::Dref => "dref",
            Self::Gmin => "gmin",
            Self::Pinf => "pInf",

            Self::Ctyp => "ctyp",
            Self::Navg => "NAVG",
            Self::Wloc => "WLOC",

            Self::Tkhd => "tkhd",

            Self::Pano => "pano",
            Self::PHdr => "pHdr",
            Self::PHot => "pHot",
            Self::StrT => "strT",
            Self::PLnk => "pLnk",
            Self::PNav => "pNav",

            Self::Rpza => "rpza",
            Self::Rle => "rle ",
            Self::Cvid => "cvid",
            Self::Smc => "smc ",

            Self::Custom(s) => s.as_str(),
        }
    }

    /// Whether this kind is always a container atom (payload = child atoms), used by
    /// the parser to decide whether to recurse. Leaf kinds not in this table, and any
    /// `Custom` kind, are treated as opaque unless a leaf schema claims them explicitly.
    pub fn is_known_container(&self) -> bool {
        matches!(
            self,
            Self::Moov
                | Self::Trak
                | Self::Mdia
                | Self::Minf
                | Self::Stbl
                | Self::Edts
                | Self::Udta
                | Self::Dinf
                | Self::Gmhd
                | Self::STpn
        )
    }
}

impl Default for FourCC {
    fn default() -> Self {
        Self::Custom("????".to_owned())
    }
}
