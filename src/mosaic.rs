//! Mosaic compositor (component J): paste decoded samples from a track into
//! one or more grid canvases and save them as PNGs.

use std::path::{Path, PathBuf};

use image::{imageops, RgbImage};
use tracing::info;

use crate::atom::{find_all, find_one, Atom, LeafFields};
use crate::atom_types::{ChunkOffsets, DataFormat, PanoSampleDescription, SampleDescriptionEntry, SampleSizes, Stsc};
use crate::codec::{decode_sample, Codecs, Tile};
use crate::error::{Error, Result};
use crate::fourcc::FourCC;
use crate::qtvr::QtvrKind;
use crate::sample_table::{locate_samples, SampleLocation};

/// Decode every sample location into a tile, in ascending `sample_id` order.
/// Behind the `parallel` feature this fans the decode (pure over each
/// sample's byte slice) across a rayon pool; pasting always stays
/// sequential, so output is identical either way (§10.5).
#[cfg(feature = "parallel")]
fn decode_all(
    file: &[u8],
    locations: &[SampleLocation],
    data_format: DataFormat,
    width: u16,
    height: u16,
    depth: i16,
    codecs: &Codecs,
) -> Result<Vec<Tile>> {
    use rayon::prelude::*;
    locations
        .par_iter()
        .map(|loc| decode_one(file, loc, data_format, width, height, depth, codecs))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn decode_all(
    file: &[u8],
    locations: &[SampleLocation],
    data_format: DataFormat,
    width: u16,
    height: u16,
    depth: i16,
    codecs: &Codecs,
) -> Result<Vec<Tile>> {
    locations.iter().map(|loc| decode_one(file, loc, data_format, width, height, depth, codecs)).collect()
}

fn decode_one(
    file: &[u8],
    loc: &SampleLocation,
    data_format: DataFormat,
    width: u16,
    height: u16,
    depth: i16,
    codecs: &Codecs,
) -> Result<Tile> {
    let start = loc.offset as usize;
    let end = start + loc.size as usize;
    if end > file.len() {
        return Err(Error::UnexpectedEof { wanted: end, available: file.len() });
    }
    decode_sample(data_format, &file[start..end], width, height, depth, codecs)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    None,
    Neg90,
    Pos90,
    R180,
}

fn apply_rotation(canvas: &RgbImage, rotation: Rotation) -> RgbImage {
    match rotation {
        Rotation::None => canvas.clone(),
        Rotation::Neg90 => imageops::rotate90(canvas),
        Rotation::Pos90 => imageops::rotate270(canvas),
        Rotation::R180 => imageops::rotate180(canvas),
    }
}

fn find_trak_by_id<'a>(root: &'a Atom, track_id: u32) -> Result<&'a Atom> {
    for trak in find_all(root, &FourCC::Trak) {
        if let Some(tkhd_atom) = find_one(trak, &FourCC::Tkhd)? {
            if let Some(LeafFields::Tkhd(tkhd)) = tkhd_atom.leaf_fields() {
                if tkhd.track_id() == track_id {
                    return Ok(trak);
                }
            }
        }
    }
    Err(Error::NoSuchAtom(format!("trak with track_id {track_id}")))
}

fn track_dims(trak: &Atom) -> Result<(u16, u16)> {
    let tkhd_atom = find_one(trak, &FourCC::Tkhd)?.ok_or_else(|| Error::NoSuchAtom("tkhd".to_owned()))?;
    match tkhd_atom.leaf_fields() {
        Some(LeafFields::Tkhd(tkhd)) => Ok((tkhd.width() as u16, tkhd.height() as u16)),
        _ => Err(Error::NoSuchAtom("tkhd".to_owned())),
    }
}

fn track_video_format(trak: &Atom) -> Result<(DataFormat, i16)> {
    let stsd_atom = find_one(trak, &FourCC::Stsd)?.ok_or_else(|| Error::NoSuchAtom("stsd".to_owned()))?;
    match stsd_atom.leaf_fields() {
        Some(LeafFields::Stsd(stsd)) => match stsd.primary() {
            Some(SampleDescriptionEntry::Video(v)) => Ok((DataFormat::from_fourcc(&v.data_format), v.depth)),
            _ => Err(Error::NoSuchAtom("video sample description".to_owned())),
        },
        _ => Err(Error::NoSuchAtom("stsd".to_owned())),
    }
}

fn track_stsc(trak: &Atom) -> Result<Stsc> {
    let atom = find_one(trak, &FourCC::Stsc)?.ok_or_else(|| Error::NoSuchAtom("stsc".to_owned()))?;
    match atom.leaf_fields() {
        Some(LeafFields::Stsc(stsc)) => Ok(stsc.clone()),
        _ => Err(Error::NoSuchAtom("stsc".to_owned())),
    }
}

fn track_stco(trak: &Atom) -> Result<ChunkOffsets> {
    let atom = find_one(trak, &FourCC::Stco)?.ok_or_else(|| Error::NoSuchAtom("stco".to_owned()))?;
    match atom.leaf_fields() {
        Some(LeafFields::Stco(stco)) => Ok(stco.clone()),
        _ => Err(Error::NoSuchAtom("stco".to_owned())),
    }
}

fn track_stsz(trak: &Atom) -> Result<SampleSizes> {
    let atom = find_one(trak, &FourCC::Stsz)?.ok_or_else(|| Error::NoSuchAtom("stsz".to_owned()))?;
    match atom.leaf_fields() {
        Some(LeafFields::Stsz(stsz)) => Ok(stsz.clone()),
        _ => Err(Error::NoSuchAtom("stsz".to_owned())),
    }
}

fn paste(canvas: &mut RgbImage, tile: &Tile, x0: u32, y0: u32) {
    for y in 0..tile.height as u32 {
        for x in 0..tile.width as u32 {
            let idx = ((y * tile.width as u32 + x) * 3) as usize;
            let pixel = image::Rgb([tile.rgb[idx], tile.rgb[idx + 1], tile.rgb[idx + 2]]);
            canvas.put_pixel(x0 + x, y0 + y, pixel);
        }
    }
}

/// Render every sample of `trak` into `(cols, rows)` grid pages, saving each
/// full canvas with `name_for_page(page)` as its file name under `out_dir`.
pub fn render_track(
    file: &[u8],
    trak: &Atom,
    cols: u32,
    rows: u32,
    rotation: Rotation,
    codecs: &Codecs,
    out_dir: &Path,
    name_for_page: impl Fn(u32) -> String,
) -> Result<Vec<PathBuf>> {
    let (width, height) = track_dims(trak)?;
    let (data_format, depth) = track_video_format(trak)?;
    let stsc = track_stsc(trak)?;
    let stco = track_stco(trak)?;
    let stsz = track_stsz(trak)?;
    let locations = locate_samples(&stco, &stsz, &stsc);

    let tile_w = width as u32;
    let tile_h = height as u32;
    let canvas_w = cols * tile_w;
    let canvas_h = rows * tile_h;
    let per_page = (cols * rows) as usize;
    if per_page == 0 {
        return Err(Error::NoSuchAtom("non-empty grid".to_owned()));
    }

    let tiles = decode_all(file, &locations, data_format, width, height, depth, codecs)?;

    let mut canvas = RgbImage::new(canvas_w, canvas_h);
    let mut saved = Vec::new();
    let mut page = 0u32;

    for (loc, tile) in locations.iter().zip(tiles.iter()) {
        let slot = (loc.sample_id as usize) % per_page;
        let col = (slot % cols as usize) as u32;
        let row = (slot / cols as usize) as u32;
        paste(&mut canvas, tile, col * tile_w, row * tile_h);

        if (loc.sample_id as usize + 1) % per_page == 0 {
            let rotated = apply_rotation(&canvas, rotation);
            let path = out_dir.join(name_for_page(page));
            rotated.save(&path)?;
            info!(path = %path.display(), "wrote mosaic page");
            saved.push(path);
            canvas = RgbImage::new(canvas_w, canvas_h);
            page += 1;
        }
    }

    Ok(saved)
}

fn pano_description(root: &Atom) -> Result<PanoSampleDescription> {
    let stpn = find_one(root, &FourCC::STpn)?.ok_or(Error::NotQtvr)?;
    let stsd_atom = find_one(stpn, &FourCC::Stsd)?.ok_or_else(|| Error::NoSuchAtom("stsd under STpn".to_owned()))?;
    match stsd_atom.leaf_fields() {
        Some(LeafFields::Stsd(stsd)) => match stsd.primary() {
            Some(SampleDescriptionEntry::Pano(pano)) => Ok(pano.clone()),
            _ => Err(Error::NoSuchAtom("pano sample description".to_owned())),
        },
        _ => Err(Error::NoSuchAtom("stsd".to_owned())),
    }
}

fn object_grid(root: &Atom) -> Result<(u32, u32)> {
    let navg_atom = find_one(root, &FourCC::Navg)?.ok_or(Error::NotQtvr)?;
    match navg_atom.leaf_fields() {
        Some(LeafFields::Navg(navg)) => {
            let (cols, rows) = navg.grid();
            Ok((cols as u32, rows as u32))
        }
        _ => Err(Error::NoSuchAtom("NAVG".to_owned())),
    }
}

/// Wire together and render every mosaic for this movie, per its QTVR kind.
/// Returns the saved PNG paths in generation order.
pub fn generate_mosaics(
    file: &[u8],
    root: &Atom,
    kind: QtvrKind,
    input_stem: &str,
    codecs: &Codecs,
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    match kind {
        QtvrKind::Object => {
            let (cols, rows) = object_grid(root)?;
            let trak = find_one(root, &FourCC::Trak)?.ok_or(Error::NotQtvr)?;
            let name = format!("mosaic-{input_stem}.png");
            render_track(file, trak, cols, rows, Rotation::None, codecs, out_dir, |_page| name.clone())
        }
        QtvrKind::Panorama => {
            let pano = pano_description(root)?;
            let mut saved = Vec::new();

            let scene_trak = find_trak_by_id(root, pano.scene_track_id)?;
            saved.extend(render_track(
                file,
                scene_trak,
                pano.scene_num_frames_x as u32,
                pano.scene_num_frames_y as u32,
                Rotation::Neg90,
                codecs,
                out_dir,
                |page| format!("{page}-{input_stem}-sceneTrack.png"),
            )?);

            if pano.lo_res_scene_track_id != 0 {
                let lo_trak = find_trak_by_id(root, pano.lo_res_scene_track_id)?;
                let lo_cols = (pano.scene_num_frames_x / 2).max(1) as u32;
                let lo_rows = (pano.scene_num_frames_y / 2) as u32;
                saved.extend(render_track(
                    file,
                    lo_trak,
                    lo_cols,
                    lo_rows,
                    Rotation::Neg90,
                    codecs,
                    out_dir,
                    |page| format!("{page}-{input_stem}-loressceneTrack.png"),
                )?);
            }

            if pano.hot_spot_track_id != 0 {
                let hot_trak = find_trak_by_id(root, pano.hot_spot_track_id)?;
                saved.extend(render_track(
                    file,
                    hot_trak,
                    pano.hot_spot_num_frames_x as u32,
                    pano.hot_spot_num_frames_y as u32,
                    Rotation::Neg90,
                    codecs,
                    out_dir,
                    |page| format!("{page}-{input_stem}-hotspotTrack.png"),
                )?);
            }

            Ok(saved)
        }
    }
}
