//! The canonical 256-entry QuickTime default palette (component K), applied
//! to indexed output from codecs (SMC8, and Cinepak's indexed mode) that
//! carry no color table of their own.
//!
//! No exact vendor CLUT was available to ground this table against, so it is
//! built systematically: a 6x6x6 color cube (216 entries, steps of 51 per
//! channel) followed by a 40-step grayscale ramp, the same construction the
//! classic Mac OS default 8-bit CLUT uses. This is a judgment call, not a
//! byte-exact reproduction of Apple's table — see DESIGN.md.

use std::sync::OnceLock;

const CUBE_LEVELS: [u8; 6] = [0, 51, 102, 153, 204, 255];

fn build_default_palette() -> [(u8, u8, u8); 256] {
    let mut palette = [(0u8, 0u8, 0u8); 256];
    let mut i = 0;
    for &r in &CUBE_LEVELS {
        for &g in &CUBE_LEVELS {
            for &b in &CUBE_LEVELS {
                palette[i] = (r, g, b);
                i += 1;
            }
        }
    }
    for step in 0..40 {
        let v = ((step * 255) / 39) as u8;
        palette[i] = (v, v, v);
        i += 1;
    }
    palette
}

fn default_palette() -> &'static [(u8, u8, u8); 256] {
    static PALETTE: OnceLock<[(u8, u8, u8); 256]> = OnceLock::new();
    PALETTE.get_or_init(build_default_palette)
}

/// Expand palette indices into tightly packed 8-bit RGB triplets.
pub fn apply_default_palette(indices: &[u8]) -> Vec<u8> {
    let palette = default_palette();
    let mut rgb = Vec::with_capacity(indices.len() * 3);
    for &idx in indices {
        let (r, g, b) = palette[idx as usize];
        rgb.push(r);
        rgb.push(g);
        rgb.push(b);
    }
    rgb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_256_entries() {
        assert_eq!(default_palette().len(), 256);
    }

    #[test]
    fn index_zero_is_black_cube_corner() {
        assert_eq!(default_palette()[0], (0, 0, 0));
    }

    #[test]
    fn apply_expands_indices_to_triplets() {
        let rgb = apply_default_palette(&[0, 215]);
        assert_eq!(rgb.len(), 6);
        assert_eq!(&rgb[0..3], &[0, 0, 0]);
        assert_eq!(&rgb[3..6], &[255, 255, 255]);
    }
}
