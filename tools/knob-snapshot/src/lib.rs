// Copyright 2025. Frame capture library for plug-ui.
//
// Renders knob and placeholder frames into host-style BGRA buffers and writes
// them out as BMP.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use plug_ui::{KnobCtrl, RenderError, UiRenderer};

// ============================================================================
// Snapshot
// ============================================================================

/// A rendered frame: BGRA premultiplied pixels, row-major, stride = width.
#[derive(Clone)]
pub struct Snapshot {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u32>,
}

impl Snapshot {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0u32; width as usize * height as usize],
        }
    }
}

/// Render the placeholder frame.
pub fn render_placeholder(width: u32, height: u32) -> Result<Snapshot, RenderError> {
    let mut snap = Snapshot::new(width, height);
    UiRenderer::new().render(&mut snap.pixels, width, height)?;
    Ok(snap)
}

/// Render a `size × size` knob at `value` (in `[0, 1]`).
///
/// Each entry of `drags` is replayed as a pointer move of that many pixels
/// upward from the centre between a press and a release, after the value is
/// set, so the snapshot shows the clamped result of the gesture.
pub fn render_knob(size: u32, value: f32, drags: &[f32]) -> Result<(Snapshot, KnobCtrl), RenderError> {
    let s = size as f32;
    let mut knob = KnobCtrl::new(0.0, 0.0, s, s);
    knob.set_value(value);

    if !drags.is_empty() {
        let (cx, mut cy) = (s / 2.0, s / 2.0);
        knob.on_pointer_down(cx, cy);
        for dy in drags {
            cy -= dy;
            knob.on_pointer_drag(cx, cy);
        }
        knob.on_pointer_up(cx, cy);
    }

    let mut snap = Snapshot::new(size, size);
    UiRenderer::new().render_ctrl(&mut snap.pixels, size, size, &knob)?;
    Ok((snap, knob))
}

// ============================================================================
// BMP output (32-bit BGRA, top-down)
// ============================================================================

/// Save a snapshot as a 32-bit top-down BMP.
///
/// The buffer is already in BMP's byte order, so pixels are written as-is.
pub fn save_bmp(path: &Path, snap: &Snapshot) -> io::Result<()> {
    let f = File::create(path)?;
    let mut w = BufWriter::new(f);
    write_bmp(&mut w, snap)?;
    w.flush()
}

/// Size of the BMP pixel array and of the whole file, or `None` when either
/// does not fit the format's 32-bit size fields.
fn bmp_sizes(width: u32, height: u32) -> Option<(u32, u32)> {
    let image_size = u64::from(width) * u64::from(height) * 4;
    let file_size = image_size + 14 + 40;
    if height > i32::MAX as u32 {
        return None;
    }
    Some((u32::try_from(image_size).ok()?, u32::try_from(file_size).ok()?))
}

pub fn write_bmp<W: Write>(out: &mut W, snap: &Snapshot) -> io::Result<()> {
    let (image_size, file_size) = bmp_sizes(snap.width, snap.height).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{}x{} frame is too large for a BMP file", snap.width, snap.height),
        )
    })?;

    // BMP file header (14 bytes)
    out.write_all(b"BM")?;
    out.write_all(&file_size.to_le_bytes())?;
    out.write_all(&[0u8; 4])?; // reserved
    out.write_all(&(14u32 + 40).to_le_bytes())?; // pixel data offset

    // BITMAPINFOHEADER (40 bytes)
    out.write_all(&40u32.to_le_bytes())?;
    out.write_all(&snap.width.to_le_bytes())?;
    out.write_all(&(-(snap.height as i32)).to_le_bytes())?; // top-down
    out.write_all(&1u16.to_le_bytes())?; // planes
    out.write_all(&32u16.to_le_bytes())?; // bits per pixel
    out.write_all(&0u32.to_le_bytes())?; // BI_RGB
    out.write_all(&image_size.to_le_bytes())?;
    out.write_all(&[0u8; 8])?; // pixels per meter
    out.write_all(&0u32.to_le_bytes())?; // colors used
    out.write_all(&0u32.to_le_bytes())?; // important colors

    for p in &snap.pixels {
        out.write_all(&p.to_le_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmp_header_and_size() {
        let snap = render_placeholder(8, 4).unwrap();
        let mut out = Vec::new();
        write_bmp(&mut out, &snap).unwrap();
        assert_eq!(out.len(), 54 + 8 * 4 * 4);
        assert_eq!(&out[0..2], b"BM");
        assert_eq!(i32::from_le_bytes([out[22], out[23], out[24], out[25]]), -4);
        assert_eq!(u16::from_le_bytes([out[28], out[29]]), 32);
    }

    #[test]
    fn test_bmp_sizes_use_wide_arithmetic() {
        assert_eq!(bmp_sizes(8, 4), Some((128, 182)));
        // 40000 * 40000 * 4 overflows u32 but the frame is still rejected cleanly.
        assert_eq!(bmp_sizes(40_000, 40_000), None);
        assert_eq!(bmp_sizes(u32::MAX, 1), None);
        assert!(bmp_sizes(16_000, 16_000).is_some());
    }

    #[test]
    fn test_write_bmp_rejects_oversized_frame() {
        let snap = Snapshot {
            width: 70_000,
            height: 70_000,
            pixels: Vec::new(),
        };
        let mut out = Vec::new();
        let err = write_bmp(&mut out, &snap).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert!(out.is_empty());
    }

    #[test]
    fn test_bmp_pixels_are_bgra() {
        let mut snap = Snapshot::new(1, 1);
        snap.pixels[0] = plug_ui::rendering_buffer::bgra(10, 20, 30, 255);
        let mut out = Vec::new();
        write_bmp(&mut out, &snap).unwrap();
        assert_eq!(&out[54..58], &[30, 20, 10, 255]);
    }

    #[test]
    fn test_render_knob_replays_drags() {
        let (_, knob) = render_knob(64, 0.25, &[10.0, 10.0]).unwrap();
        assert!((knob.normalized_value() - 0.45).abs() < 1e-5);
        assert!(!knob.is_dragging());

        let (_, knob) = render_knob(64, 0.9, &[50.0]).unwrap();
        assert_eq!(knob.normalized_value(), 1.0);
    }

    #[test]
    fn test_render_placeholder_zero_width_fails() {
        assert!(render_placeholder(0, 10).is_err());
    }
}
