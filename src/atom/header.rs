use crate::fourcc::FourCC;

/// An atom's 8-byte header plus its absolute position in the file.
#[derive(Debug, Clone)]
pub struct AtomHeader {
    pub kind: FourCC,
    /// Absolute byte offset of this atom's `size` field in the input file.
    pub offset: u64,
    /// Total size of the atom, including the 8-byte header.
    pub size: u64,
}

impl AtomHeader {
    pub fn payload_offset(&self) -> u64 {
        self.offset + 8
    }

    pub fn payload_size(&self) -> u64 {
        self.size - 8
    }
}
