//! Off-screen rendering into a host-owned pixel buffer.
//!
//! Each pass acquires a surface sized to the target, clears it to
//! transparent, draws, and copies the premultiplied pixels out as BGRA with a
//! row stride equal to the width. The surface lives only for the pass and is
//! dropped on every exit path. When anything fails the host buffer is left
//! exactly as it was.

use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, PixmapMut, Transform};
use tracing::error;

use crate::ctrl::{render_ctrl, Ctrl};
use crate::error::RenderError;
use crate::rendering_buffer::BgraBuffer;

/// Stateless renderer producing frames for a host compositor.
#[derive(Debug, Default, Clone, Copy)]
pub struct UiRenderer;

impl UiRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the placeholder frame: a solid red disc of radius `height / 4`
    /// centred on a transparent `width × height` image.
    ///
    /// Centre and radius use integer division. Below 8 px of height the disc
    /// is at most a couple of pixels wide, so its centre pixel is only
    /// partially covered (heights 4 to 7) or nothing is drawn at all
    /// (heights 1 to 3, and any height where `height / 4` rounds to zero).
    pub fn render(&self, buffer: &mut [u32], width: u32, height: u32) -> Result<(), RenderError> {
        self.render_pass(buffer, width, height, |pixmap| {
            let mut paint = Paint::default();
            paint.set_color(Color::from_rgba8(255, 0, 0, 255));
            paint.anti_alias = true;
            let cx = (width / 2) as f32;
            let cy = (height / 2) as f32;
            let r = (height / 4) as f32;
            if let Some(circle) = PathBuilder::from_circle(cx, cy, r) {
                pixmap.fill_path(&circle, &paint, FillRule::Winding, Transform::identity(), None);
            }
        })
    }

    /// Render a single control over a transparent background.
    pub fn render_ctrl(
        &self,
        buffer: &mut [u32],
        width: u32,
        height: u32,
        ctrl: &dyn Ctrl,
    ) -> Result<(), RenderError> {
        self.render_pass(buffer, width, height, |pixmap| render_ctrl(pixmap, ctrl))
    }

    fn render_pass<F>(&self, buffer: &mut [u32], width: u32, height: u32, draw: F) -> Result<(), RenderError>
    where
        F: FnOnce(&mut PixmapMut),
    {
        let mut target = BgraBuffer::new(buffer, width, height, width).map_err(|e| {
            error!(width, height, "cannot render into host buffer: {e}");
            e
        })?;

        let mut surface = Pixmap::new(width, height).ok_or_else(|| {
            error!(width, height, "failed to create render surface");
            RenderError::SurfaceAllocation { width, height }
        })?;

        surface.fill(Color::TRANSPARENT);
        draw(&mut surface.as_mut());
        target.copy_from_pixmap(surface.as_ref());
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
