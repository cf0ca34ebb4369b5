//! QTVR classification (component E).

use crate::atom::{find_all, find_one, Atom, LeafFields};
use crate::error::{Error, Result};
use crate::fourcc::FourCC;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QtvrKind {
    Object,
    Panorama,
}

/// Inspect the `ctyp` controller-type atom (and, for panorama, confirm a
/// panoramic `gmhd` track exists) to classify the movie. `Err(NotQtvr)` and
/// `Err(UnsupportedQtvr)` are both "not an error" outcomes at the process
/// boundary (exit code 0), but are still represented as errors here so the
/// caller cannot accidentally proceed with a classification it never checked.
pub fn classify(root: &Atom) -> Result<QtvrKind> {
    let udta = find_one(root, &FourCC::Udta)?.ok_or(Error::NotQtvr)?;
    let ctyp_atom = find_one(udta, &FourCC::Ctyp)?.ok_or(Error::NotQtvr)?;
    let id = match ctyp_atom.leaf_fields() {
        Some(LeafFields::Ctyp(id)) => id.clone(),
        _ => return Err(Error::NotQtvr),
    };

    match id.to_str() {
        "stna" => {
            if find_all(root, &FourCC::Navg).len() != 1 {
                return Err(Error::NotQtvr);
            }
            Ok(QtvrKind::Object)
        }
        "stpn" | "STpn" => {
            if find_one(root, &FourCC::Gmhd)?.is_none() {
                return Err(Error::NotQtvr);
            }
            Ok(QtvrKind::Panorama)
        }
        "qtvr" => Err(Error::UnsupportedQtvr(id)),
        _ => Err(Error::NotQtvr),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::parse_file;

    fn atom(kind: &[u8; 4], payload: &[u8]) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&((8 + payload.len()) as u32).to_be_bytes());
        buf.extend_from_slice(kind);
        buf.extend_from_slice(payload);
        buf
    }

    #[test]
    fn classifies_object_movie() {
        let ctyp = atom(b"ctyp", b"stna");
        let navg = atom(b"NAVG", &[0u8; 48]);
        let mut udta_payload = ctyp.clone();
        udta_payload.extend_from_slice(&navg);
        let udta = atom(b"udta", &udta_payload);
        let moov = atom(b"moov", &udta);
        let parsed = parse_file(&moov).unwrap();
        assert_eq!(classify(&parsed.root).unwrap(), QtvrKind::Object);
    }

    #[test]
    fn object_without_navg_is_not_qtvr() {
        let ctyp = atom(b"ctyp", b"stna");
        let udta = atom(b"udta", &ctyp);
        let moov = atom(b"moov", &udta);
        let parsed = parse_file(&moov).unwrap();
        assert!(matches!(classify(&parsed.root), Err(Error::NotQtvr)));
    }

    #[test]
    fn object_with_multiple_navg_is_not_qtvr() {
        let ctyp = atom(b"ctyp", b"stna");
        let navg = atom(b"NAVG", &[0u8; 48]);
        let mut udta_payload = ctyp.clone();
        udta_payload.extend_from_slice(&navg);
        udta_payload.extend_from_slice(&navg);
        let udta = atom(b"udta", &udta_payload);
        let moov = atom(b"moov", &udta);
        let parsed = parse_file(&moov).unwrap();
        assert!(matches!(classify(&parsed.root), Err(Error::NotQtvr)));
    }

    #[test]
    fn rejects_v2() {
        let ctyp = atom(b"ctyp", b"qtvr");
        let udta = atom(b"udta", &ctyp);
        let moov = atom(b"moov", &udta);
        let parsed = parse_file(&moov).unwrap();
        assert!(matches!(classify(&parsed.root), Err(Error::UnsupportedQtvr(_))));
    }

    #[test]
    fn not_qtvr_without_ctyp() {
        let udta = atom(b"udta", &[]);
        let moov = atom(b"moov", &udta);
        let parsed = parse_file(&moov).unwrap();
        assert!(matches!(classify(&parsed.root), Err(Error::NotQtvr)));
    }

    #[test]
    fn panorama_requires_gmhd_track() {
        let ctyp = atom(b"ctyp", b"stpn");
        let udta = atom(b"udta", &ctyp);
        let moov = atom(b"moov", &udta);
        let parsed = parse_file(&moov).unwrap();
        assert!(matches!(classify(&parsed.root), Err(Error::NotQtvr)));
    }
}
