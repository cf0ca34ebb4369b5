//! Recursive-descent atom tree parser.
//!
//! Atoms are represented as a tagged tree rather than the duck-typed runtime
//! registry the reference implementation used: every node is either a
//! [`Atom::Container`] (payload is itself a sequence of atoms), a
//! [`Atom::Leaf`] with a typed, known field layout, or an opaque
//! [`Atom::Gobble`] for anything this crate doesn't need to understand.
//! Parsing never aborts on an unrecognized FourCC; it falls back to `Gobble`
//! and records the kind for diagnostics.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::atom::header::AtomHeader;
use crate::atom_types::{ChunkOffsets, Navg, SampleSizes, Stsc, Stsd, Tkhd};
use crate::error::{Error, Result};
use crate::fourcc::FourCC;
use crate::reader::ByteReader;

/// Decoded payload of a known leaf atom.
#[derive(Debug)]
pub enum LeafFields {
    Tkhd(Tkhd),
    Stsd(Stsd),
    Stsc(Stsc),
    Stco(ChunkOffsets),
    Stsz(SampleSizes),
    Navg(Navg),
    /// Controller type atom (`ctyp`): a bare 4-byte identifier.
    Ctyp(FourCC),
    /// Default window location (`WLOC`): x, y in pixels.
    Wloc { x: u16, y: u16 },
}

/// One node of the parsed atom tree.
#[derive(Debug)]
pub enum Atom {
    Container { header: AtomHeader, children: Vec<Atom> },
    Leaf { header: AtomHeader, fields: LeafFields },
    Gobble { header: AtomHeader, bytes: Vec<u8> },
}

impl Atom {
    pub fn header(&self) -> &AtomHeader {
        match self {
            Self::Container { header, .. } => header,
            Self::Leaf { header, .. } => header,
            Self::Gobble { header, .. } => header,
        }
    }

    pub fn kind(&self) -> &FourCC {
        &self.header().kind
    }

    pub fn children(&self) -> &[Atom] {
        match self {
            Self::Container { children, .. } => children,
            _ => &[],
        }
    }

    pub fn leaf_fields(&self) -> Option<&LeafFields> {
        match self {
            Self::Leaf { fields, .. } => Some(fields),
            _ => None,
        }
    }

    /// Depth-first, pre-order walk over this atom and every descendant
    /// (self included first). A tree-shape dump is just `iter().map(Atom::kind)`.
    pub fn iter(&self) -> AtomIter<'_> {
        AtomIter { stack: vec![self] }
    }
}

/// Depth-first pre-order iterator produced by [`Atom::iter`].
pub struct AtomIter<'a> {
    stack: Vec<&'a Atom>,
}

impl<'a> Iterator for AtomIter<'a> {
    type Item = &'a Atom;

    fn next(&mut self) -> Option<&'a Atom> {
        let node = self.stack.pop()?;
        for child in node.children().iter().rev() {
            self.stack.push(child);
        }
        Some(node)
    }
}

/// Result of parsing a whole file: the root container plus every unknown
/// FourCC encountered, for diagnostics (never treated as an error).
pub struct ParsedFile {
    pub root: Atom,
    pub unknown_fourccs: HashSet<FourCC>,
}

/// Parse an entire QuickTime byte buffer into an atom tree.
pub fn parse_file(buf: &[u8]) -> Result<ParsedFile> {
    let mut r = ByteReader::new(buf);
    let mut unknown = HashSet::new();
    let children = parse_children(&mut r, buf.len() as u64, &FourCC::Moov, &mut unknown)?;
    let root = Atom::Container {
        header: AtomHeader { kind: FourCC::Custom("root".to_owned()), offset: 0, size: buf.len() as u64 },
        children,
    };
    Ok(ParsedFile { root, unknown_fourccs: unknown })
}

/// Parse a run of sibling atoms up to `end` (absolute offset, exclusive).
/// `parent_kind` enables the `udta` zero-terminator quirk (§4.C.6): a run of
/// four zero bytes inside a `udta`'s child list ends that list early rather
/// than being parsed as a malformed zero-size atom.
fn parse_children(
    r: &mut ByteReader,
    end: u64,
    parent_kind: &FourCC,
    unknown: &mut HashSet<FourCC>,
) -> Result<Vec<Atom>> {
    let mut children = Vec::new();
    while r.tell() < end {
        if matches!(parent_kind, FourCC::Udta) {
            if let Some(0) = r.peek_u32_be() {
                break;
            }
        }
        children.push(parse_one(r, end, unknown)?);
    }
    Ok(children)
}

fn parse_one(r: &mut ByteReader, parent_end: u64, unknown: &mut HashSet<FourCC>) -> Result<Atom> {
    let offset = r.tell();
    let size = r.u32_be()? as u64;
    let kind = r.fourcc()?;
    if size < 8 || offset + size > parent_end {
        return Err(Error::MalformedAtom {
            kind,
            offset,
            reason: format!("size {size} invalid for atom starting at {offset} within parent ending at {parent_end}"),
        });
    }
    debug!(kind = %kind, offset, size, "descending into atom");
    let header = AtomHeader { kind: kind.clone(), offset, size };
    let payload_end = offset + size;

    if kind.is_known_container() {
        let children = parse_children(r, payload_end, &kind, unknown)?;
        return Ok(Atom::Container { header, children });
    }

    let atom = match kind {
        FourCC::Tkhd => Atom::Leaf { fields: LeafFields::Tkhd(Tkhd::read_from(r)?), header },
        FourCC::Stsd => Atom::Leaf { fields: LeafFields::Stsd(Stsd::parse(r)?), header },
        FourCC::Stsc => Atom::Leaf { fields: LeafFields::Stsc(Stsc::parse(r)?), header },
        FourCC::Stco => Atom::Leaf { fields: LeafFields::Stco(ChunkOffsets::parse_stco(r)?), header },
        FourCC::Co64 => Atom::Leaf { fields: LeafFields::Stco(ChunkOffsets::parse_co64(r)?), header },
        FourCC::Stsz => Atom::Leaf { fields: LeafFields::Stsz(SampleSizes::parse(r)?), header },
        FourCC::Navg => Atom::Leaf { fields: LeafFields::Navg(Navg::read_from(r)?), header },
        FourCC::Ctyp => {
            let id = r.fourcc()?;
            Atom::Leaf { fields: LeafFields::Ctyp(id), header }
        }
        FourCC::Wloc => {
            let x = r.u16_be()?;
            let y = r.u16_be()?;
            Atom::Leaf { fields: LeafFields::Wloc { x, y }, header }
        }
        // Recognized but unused by any operation here: no field is extracted,
        // but they're acknowledged paths, not gobble-and-warn unknowns.
        FourCC::Stts | FourCC::Stss | FourCC::Pinf => {
            r.seek(header.payload_offset())?;
            let bytes = r.bytes(header.payload_size() as usize)?.to_vec();
            Atom::Gobble { header, bytes }
        }
        other => {
            if unknown.insert(other.clone()) {
                warn!(kind = %other, "unrecognized atom kind, gobbling payload");
            }
            r.seek(header.payload_offset())?;
            let bytes = r.bytes(header.payload_size() as usize)?.to_vec();
            Atom::Gobble { header, bytes }
        }
    };

    // Known leaf kinds may under-read their declared size (reserved trailing
    // bytes); always land exactly on the next sibling's offset.
    r.seek(payload_end)?;
    Ok(atom)
}
