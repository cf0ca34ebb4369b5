//! Crate-wide error type.

use std::fmt;

use crate::fourcc::FourCC;

/// Every way a QTVR parse, classification, or decode can fail.
#[derive(Debug)]
pub enum Error {
    /// File open/read failure.
    Io(std::io::Error),
    /// A `BinRead` derived leaf parser choked on its fixed field layout.
    BinRead(binrw::Error),
    /// PNG encode/save failure from the mosaic compositor.
    Image(image::ImageError),
    /// A byte reader operation ran past the end of its buffer.
    UnexpectedEof { wanted: usize, available: usize },
    /// An atom's `size` header was smaller than 8 or extended past its parent.
    MalformedAtom { kind: FourCC, offset: u64, reason: String },
    /// No decoder registered for this sample description's data format.
    UnsupportedCodec(FourCC),
    /// `ctyp` identified a QTVR version this crate does not implement (v2+).
    UnsupportedQtvr(FourCC),
    /// `ctyp` is missing or does not identify a QTVR 1 movie at all.
    NotQtvr,
    /// A codec recognized its own framing bytes as invalid.
    DecodeError { codec: FourCC, offset: u64, reason: String },
    /// A byte sequence that was expected to be UTF-8 (or close enough) was not.
    Utf8Error,
    /// `find_one` found no descendant of the requested kind.
    NoSuchAtom(String),
    /// `find_one` found more than one descendant of the requested kind.
    AmbiguousAtom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io error: {e}"),
            Self::BinRead(e) => write!(f, "binary layout error: {e}"),
            Self::Image(e) => write!(f, "image encode error: {e}"),
            Self::UnexpectedEof { wanted, available } => {
                write!(f, "unexpected end of buffer: wanted {wanted} bytes, {available} available")
            }
            Self::MalformedAtom { kind, offset, reason } => {
                write!(f, "malformed atom '{kind}' at offset {offset}: {reason}")
            }
            Self::UnsupportedCodec(fourcc) => write!(f, "unsupported codec '{fourcc}'"),
            Self::UnsupportedQtvr(fourcc) => write!(f, "unsupported QTVR version (ctyp '{fourcc}')"),
            Self::NotQtvr => write!(f, "not a QTVR 1 movie"),
            Self::DecodeError { codec, offset, reason } => {
                write!(f, "decode error in '{codec}' at sample offset {offset}: {reason}")
            }
            Self::Utf8Error => write!(f, "invalid UTF-8 in string field"),
            Self::NoSuchAtom(kind) => write!(f, "no atom of kind '{kind}' found"),
            Self::AmbiguousAtom(kind) => write!(f, "more than one atom of kind '{kind}' found"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::BinRead(e) => Some(e),
            Self::Image(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<binrw::Error> for Error {
    fn from(e: binrw::Error) -> Self {
        Self::BinRead(e)
    }
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Self::Image(e)
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(_: std::string::FromUtf8Error) -> Self {
        Self::Utf8Error
    }
}

impl From<Error> for std::io::Error {
    fn from(e: Error) -> Self {
        std::io::Error::other(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
