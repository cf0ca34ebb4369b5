//! Shared byte-buffer builders for assembling synthetic QuickTime VR movies
//! in end-to-end tests. Mirrors the byte layouts the library itself parses;
//! kept here (rather than reused from the library's own unit tests) since
//! integration tests only see the public API.

pub fn atom(kind: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&((8 + payload.len()) as u32).to_be_bytes());
    buf.extend_from_slice(kind);
    buf.extend_from_slice(payload);
    buf
}

pub fn tkhd_payload(width: i32, height: i32, track_id: u32) -> Vec<u8> {
    let mut buf = vec![0u8; 4]; // version + flags
    buf.extend_from_slice(&0u32.to_be_bytes()); // creation_time
    buf.extend_from_slice(&0u32.to_be_bytes()); // modification_time
    buf.extend_from_slice(&track_id.to_be_bytes());
    buf.extend_from_slice(&[0u8; 4]); // reserved1
    buf.extend_from_slice(&0u32.to_be_bytes()); // duration
    buf.extend_from_slice(&[0u8; 8]); // reserved2
    buf.extend_from_slice(&[0u8; 6]); // layer+alt_group+volume
    buf.extend_from_slice(&[0u8; 2]); // reserved3
    buf.extend_from_slice(&[0u8; 36]); // matrix
    buf.extend_from_slice(&(width << 16).to_be_bytes());
    buf.extend_from_slice(&(height << 16).to_be_bytes());
    buf
}

/// One `stsd` entry for a video sample description (`rpza`, `rle `, `cvid`, `smc `).
pub fn video_stsd_entry(data_format: &[u8; 4], width: u16, height: u16, depth: i16) -> Vec<u8> {
    let mut buf = vec![0u8; 4];
    buf.extend_from_slice(&1u32.to_be_bytes()); // entry_count
    let entry_size: u32 = 8 + 6 + 2 + 2 + 2 + 4 + 4 + 4 + 2 + 2 + 4 + 4 + 4 + 2 + 32 + 2 + 2;
    buf.extend_from_slice(&entry_size.to_be_bytes());
    buf.extend_from_slice(data_format);
    buf.extend_from_slice(&[0u8; 6]); // reserved
    buf.extend_from_slice(&[0u8; 2]); // data_reference_index
    buf.extend_from_slice(&[0u8; 2]); // version
    buf.extend_from_slice(&[0u8; 2]); // revision
    buf.extend_from_slice(&[0u8; 4]); // vendor
    buf.extend_from_slice(&[0u8; 4]); // temporal_quality
    buf.extend_from_slice(&[0u8; 4]); // spatial_quality
    buf.extend_from_slice(&width.to_be_bytes());
    buf.extend_from_slice(&height.to_be_bytes());
    buf.extend_from_slice(&[0u8; 4]); // h res
    buf.extend_from_slice(&[0u8; 4]); // v res
    buf.extend_from_slice(&[0u8; 4]); // data_size
    buf.extend_from_slice(&[0u8; 2]); // frame_count
    buf.extend_from_slice(&[0u8; 32]); // compressor name
    buf.extend_from_slice(&depth.to_be_bytes());
    buf.extend_from_slice(&[0u8; 2]); // color_table_id
    buf
}

#[allow(clippy::too_many_arguments)]
pub fn pano_stsd_entry(
    scene_track_id: u32,
    lo_res_scene_track_id: u32,
    hot_spot_track_id: u32,
    scene_num_frames_x: u16,
    scene_num_frames_y: u16,
    hot_spot_num_frames_x: u16,
    hot_spot_num_frames_y: u16,
) -> Vec<u8> {
    let mut buf = vec![0u8; 4];
    buf.extend_from_slice(&1u32.to_be_bytes()); // entry_count
    let entry_size: u32 = 8 + 144;
    buf.extend_from_slice(&entry_size.to_be_bytes());
    buf.extend_from_slice(b"pano");
    buf.extend_from_slice(&[0u8; 4]); // reserved1
    buf.extend_from_slice(&[0u8; 4]); // reserved2
    buf.extend_from_slice(&1u16.to_be_bytes()); // major_version
    buf.extend_from_slice(&0u16.to_be_bytes()); // minor_version
    buf.extend_from_slice(&scene_track_id.to_be_bytes());
    buf.extend_from_slice(&lo_res_scene_track_id.to_be_bytes());
    buf.extend_from_slice(&[0u8; 24]); // reserved3
    buf.extend_from_slice(&hot_spot_track_id.to_be_bytes());
    buf.extend_from_slice(&[0u8; 36]); // reserved4
    buf.extend_from_slice(&0i32.to_be_bytes()); // h_pan_start
    buf.extend_from_slice(&0i32.to_be_bytes()); // h_pan_end
    buf.extend_from_slice(&0i32.to_be_bytes()); // v_pan_top
    buf.extend_from_slice(&0i32.to_be_bytes()); // v_pan_bottom
    buf.extend_from_slice(&0i32.to_be_bytes()); // minimum_zoom
    buf.extend_from_slice(&0i32.to_be_bytes()); // maximum_zoom
    buf.extend_from_slice(&0u32.to_be_bytes()); // scene_size_x
    buf.extend_from_slice(&0u32.to_be_bytes()); // scene_size_y
    buf.extend_from_slice(&0u32.to_be_bytes()); // num_frames
    buf.extend_from_slice(&[0u8; 2]); // reserved5
    buf.extend_from_slice(&scene_num_frames_x.to_be_bytes());
    buf.extend_from_slice(&scene_num_frames_y.to_be_bytes());
    buf.extend_from_slice(&0u16.to_be_bytes()); // scene_color_depth
    buf.extend_from_slice(&0u32.to_be_bytes()); // hot_spot_size_x
    buf.extend_from_slice(&0u32.to_be_bytes()); // hot_spot_size_y
    buf.extend_from_slice(&[0u8; 2]); // reserved6
    buf.extend_from_slice(&hot_spot_num_frames_x.to_be_bytes());
    buf.extend_from_slice(&hot_spot_num_frames_y.to_be_bytes());
    buf.extend_from_slice(&0u16.to_be_bytes()); // hot_spot_color_depth
    buf
}

pub fn stsc_payload(runs: &[(u32, u32)]) -> Vec<u8> {
    let mut buf = vec![0u8; 4];
    buf.extend_from_slice(&(runs.len() as u32).to_be_bytes());
    for &(first_chunk, samples_per_chunk) in runs {
        buf.extend_from_slice(&first_chunk.to_be_bytes());
        buf.extend_from_slice(&samples_per_chunk.to_be_bytes());
        buf.extend_from_slice(&1u32.to_be_bytes()); // sample_description_id
    }
    buf
}

pub fn stco_payload(offsets: &[u32]) -> Vec<u8> {
    let mut buf = vec![0u8; 4];
    buf.extend_from_slice(&(offsets.len() as u32).to_be_bytes());
    for &offset in offsets {
        buf.extend_from_slice(&offset.to_be_bytes());
    }
    buf
}

pub fn stsz_payload(sizes: &[u32]) -> Vec<u8> {
    let mut buf = vec![0u8; 4];
    buf.extend_from_slice(&0u32.to_be_bytes()); // sample_size = 0 -> table follows
    buf.extend_from_slice(&(sizes.len() as u32).to_be_bytes());
    for &size in sizes {
        buf.extend_from_slice(&size.to_be_bytes());
    }
    buf
}

/// One `trak` atom: `tkhd` + `mdia/minf/stbl(stsd,stsc,stco,stsz)`, with all
/// samples in a single chunk starting at `chunk_offset`.
pub fn trak(track_id: u32, width: u16, height: u16, depth: i16, data_format: &[u8; 4], chunk_offset: u32, sample_sizes: &[u32]) -> Vec<u8> {
    let tkhd_atom = atom(b"tkhd", &tkhd_payload(width as i32, height as i32, track_id));
    let stsd_atom = atom(b"stsd", &video_stsd_entry(data_format, width, height, depth));
    let stsc_atom = atom(b"stsc", &stsc_payload(&[(1, sample_sizes.len() as u32)]));
    let stco_atom = atom(b"stco", &stco_payload(&[chunk_offset]));
    let stsz_atom = atom(b"stsz", &stsz_payload(sample_sizes));

    let mut stbl_payload = stsd_atom;
    stbl_payload.extend_from_slice(&stsc_atom);
    stbl_payload.extend_from_slice(&stco_atom);
    stbl_payload.extend_from_slice(&stsz_atom);
    let stbl_atom = atom(b"stbl", &stbl_payload);
    let minf_atom = atom(b"minf", &stbl_atom);
    let mdia_atom = atom(b"mdia", &minf_atom);

    let mut trak_payload = tkhd_atom;
    trak_payload.extend_from_slice(&mdia_atom);
    atom(b"trak", &trak_payload)
}

pub fn navg_payload(columns: u16, rows: u16) -> Vec<u8> {
    let mut buf = vec![0u8; 2]; // version
    buf.extend_from_slice(&columns.to_be_bytes());
    buf.extend_from_slice(&rows.to_be_bytes());
    buf.extend_from_slice(&[0u8; 48 - 6]);
    buf
}

pub fn rpza_solid_sample(color: u16) -> Vec<u8> {
    let mut buf = vec![0xE1u8, 0, 0, 0];
    buf.push(0xA0); // ONE color, 1 block
    buf.extend_from_slice(&color.to_be_bytes());
    let len = buf.len() as u32;
    buf[1..4].copy_from_slice(&len.to_be_bytes()[1..]);
    buf
}

pub fn ctyp_atom(id: &[u8; 4]) -> Vec<u8> {
    atom(b"ctyp", id)
}

pub fn gmhd_atom() -> Vec<u8> {
    atom(b"gmhd", &[])
}

/// `rle ` 24-bit frame: `line_color` for every line of an 8-wide, `height`-tall frame.
pub fn rle_solid_frame(width: u16, height: u16, line_colors: &[(u8, u8, u8)]) -> Vec<u8> {
    let mut buf = vec![0u8]; // flags
    buf.extend_from_slice(&[0, 0, 0]); // chunk size placeholder
    buf.extend_from_slice(&0x0008u16.to_be_bytes());
    buf.extend_from_slice(&0u16.to_be_bytes()); // start_line
    buf.extend_from_slice(&[0, 0]);
    buf.extend_from_slice(&height.to_be_bytes()); // num_lines
    buf.extend_from_slice(&[0, 0]);
    for &(r, g, b) in line_colors {
        buf.push(1); // skip_count = 1 -> no leading skip
        buf.push(width as u8); // literal run covering the whole line
        for _ in 0..width {
            buf.extend_from_slice(&[r, g, b]);
        }
        buf.push((-1i8) as u8); // end of line
    }
    let len = buf.len() as u32;
    buf[1..4].copy_from_slice(&len.to_be_bytes()[1..]);
    buf
}
