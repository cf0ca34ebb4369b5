//! Sample description atom (`stsd`).
//!
//! Location: `moov/trak[multiple]/mdia/minf/stbl/stsd`. A count followed by
//! a table of sample description entries, each itself a length-prefixed
//! record keyed by a four-byte `data_format`. Only entry index 0 is decoded;
//! later entries are permitted by the container format but no code path in
//! this crate acts on them (matching the reference implementation).

use crate::error::Result;
use crate::fourcc::FourCC;
use crate::reader::ByteReader;

/// The codec / content-type tag of a sample description entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Rpza,
    Rle,
    Cvid,
    Smc,
    Pano,
    Other,
}

impl DataFormat {
    pub fn from_fourcc(fourcc: &FourCC) -> Self {
        match fourcc {
            FourCC::Rpza => Self::Rpza,
            FourCC::Rle => Self::Rle,
            FourCC::Cvid => Self::Cvid,
            FourCC::Smc => Self::Smc,
            FourCC::Pano => Self::Pano,
            _ => Self::Other,
        }
    }
}

/// A video sample description: `rpza`, `rle `, `cvid`, or `smc ` framed exactly
/// like Apple's `VideoSampleDescription`.
#[derive(Debug, Clone)]
pub struct VideoSampleDescription {
    pub data_format: FourCC,
    pub width: u16,
    pub height: u16,
    pub depth: i16,
}

/// A panorama sample description (`pano`), carrying the scene/lo-res/hot-spot
/// track wiring the mosaic compositor needs.
#[derive(Debug, Clone)]
pub struct PanoSampleDescription {
    pub major_version: u16,
    pub minor_version: u16,
    pub scene_track_id: u32,
    pub lo_res_scene_track_id: u32,
    pub hot_spot_track_id: u32,
    pub h_pan_start: i32,
    pub h_pan_end: i32,
    pub v_pan_top: i32,
    pub v_pan_bottom: i32,
    pub minimum_zoom: i32,
    pub maximum_zoom: i32,
    pub scene_size_x: u32,
    pub scene_size_y: u32,
    pub num_frames: u32,
    pub scene_num_frames_x: u16,
    pub scene_num_frames_y: u16,
    pub scene_color_depth: u16,
    pub hot_spot_size_x: u32,
    pub hot_spot_size_y: u32,
    pub hot_spot_num_frames_x: u16,
    pub hot_spot_num_frames_y: u16,
    pub hot_spot_color_depth: u16,
}

#[derive(Debug, Clone)]
pub enum SampleDescriptionEntry {
    Video(VideoSampleDescription),
    Pano(PanoSampleDescription),
    Other { data_format: FourCC },
}

#[derive(Debug, Clone)]
pub struct Stsd {
    pub entry_count: u32,
    pub entries: Vec<SampleDescriptionEntry>,
}

impl Stsd {
    pub fn parse(r: &mut ByteReader) -> Result<Self> {
        let _version = r.u8()?;
        let _flags = r.bytes(3)?;
        let entry_count = r.u32_be()?;
        let mut entries = Vec::with_capacity(entry_count as usize);
        for _ in 0..entry_count {
            let entry_size = r.u32_be()?;
            let data_format = r.fourcc()?;
            let entry_start = r.tell();
            let entry = match DataFormat::from_fourcc(&data_format) {
                DataFormat::Pano => SampleDescriptionEntry::Pano(parse_pano(r, &data_format)?),
                DataFormat::Other => SampleDescriptionEntry::Other { data_format },
                _ => SampleDescriptionEntry::Video(parse_video(r, &data_format)?),
            };
            entries.push(entry);
            // entry_size includes its own 4-byte size + 4-byte data_format header.
            r.seek(entry_start + (entry_size as u64 - 8))?;
        }
        Ok(Self { entry_count, entries })
    }

    /// Entry index 0, the only one any operation acts on.
    pub fn primary(&self) -> Option<&SampleDescriptionEntry> {
        self.entries.first()
    }
}

fn parse_video(r: &mut ByteReader, data_format: &FourCC) -> Result<VideoSampleDescription> {
    let _reserved = r.bytes(6)?;
    let _data_reference_index = r.u16_be()?;
    let _version = r.u16_be()?;
    let _revision = r.u16_be()?;
    let _vendor = r.u32_be()?;
    let _temporal_quality = r.u32_be()?;
    let _spatial_quality = r.u32_be()?;
    let width = r.u16_be()?;
    let height = r.u16_be()?;
    let _horizontal_resolution = r.u32_be()?;
    let _vertical_resolution = r.u32_be()?;
    let _data_size = r.u32_be()?;
    let _frame_count = r.u16_be()?;
    let _compressor_name = r.bytes(32)?;
    let depth = r.i16_be()?;
    let _color_table_id = r.i16_be()?;
    Ok(VideoSampleDescription { data_format: data_format.clone(), width, height, depth })
}

fn parse_pano(r: &mut ByteReader, _data_format: &FourCC) -> Result<PanoSampleDescription> {
    let _reserved1 = r.u32_be()?;
    let _reserved2 = r.u32_be()?;
    let major_version = r.u16_be()?;
    let minor_version = r.u16_be()?;
    let scene_track_id = r.u32_be()?;
    let lo_res_scene_track_id = r.u32_be()?;
    let _reserved3 = r.bytes(24)?;
    let hot_spot_track_id = r.u32_be()?;
    let _reserved4 = r.bytes(36)?;
    let h_pan_start = r.i32_be()?;
    let h_pan_end = r.i32_be()?;
    let v_pan_top = r.i32_be()?;
    let v_pan_bottom = r.i32_be()?;
    let minimum_zoom = r.i32_be()?;
    let maximum_zoom = r.i32_be()?;
    let scene_size_x = r.u32_be()?;
    let scene_size_y = r.u32_be()?;
    let num_frames = r.u32_be()?;
    let _reserved5 = r.u16_be()?;
    let scene_num_frames_x = r.u16_be()?;
    let scene_num_frames_y = r.u16_be()?;
    let scene_color_depth = r.u16_be()?;
    let hot_spot_size_x = r.u32_be()?;
    let hot_spot_size_y = r.u32_be()?;
    let _reserved6 = r.u16_be()?;
    let hot_spot_num_frames_x = r.u16_be()?;
    let hot_spot_num_frames_y = r.u16_be()?;
    let hot_spot_color_depth = r.u16_be()?;
    Ok(PanoSampleDescription {
        major_version,
        minor_version,
        scene_track_id,
        lo_res_scene_track_id,
        hot_spot_track_id,
        h_pan_start,
        h_pan_end,
        v_pan_top,
        v_pan_bottom,
        minimum_zoom,
        maximum_zoom,
        scene_size_x,
        scene_size_y,
        num_frames,
        scene_num_frames_x,
        scene_num_frames_y,
        scene_color_depth,
        hot_spot_size_x,
        hot_spot_size_y,
        hot_spot_num_frames_x,
        hot_spot_num_frames_y,
        hot_spot_color_depth,
    })
}
