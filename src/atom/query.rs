//! Typed lookup across the atom tree.

use crate::atom::tree::Atom;
use crate::error::{Error, Result};
use crate::fourcc::FourCC;

/// Every descendant (not including `root` itself) whose kind is `kind`, in document order.
/// Traversal only descends into container atoms.
pub fn find_all<'a>(root: &'a Atom, kind: &FourCC) -> Vec<&'a Atom> {
    let mut out = Vec::new();
    find_all_into(root, kind, &mut out);
    out
}

fn find_all_into<'a>(node: &'a Atom, kind: &FourCC, out: &mut Vec<&'a Atom>) {
    for child in node.children() {
        if child.kind() == kind {
            out.push(child);
        }
        find_all_into(child, kind, out);
    }
}

/// The unique descendant of `kind`, or `None` if absent. `Error::AmbiguousAtom`
/// if more than one exists — asserting uniqueness is the caller's responsibility.
pub fn find_one<'a>(root: &'a Atom, kind: &FourCC) -> Result<Option<&'a Atom>> {
    let mut matches = find_all(root, kind);
    match matches.len() {
        0 => Ok(None),
        1 => Ok(matches.pop()),
        _ => Err(Error::AmbiguousAtom(kind.to_str().to_owned())),
    }
}
