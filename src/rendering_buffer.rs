//! Rendering buffer — row-oriented access to a host-owned BGRA pixel buffer.
//!
//! The host compositor hands us a slice of 32-bit pixels whose bytes sit in
//! memory as B, G, R, A with premultiplied alpha. [`BgraBuffer`] borrows that
//! slice with an explicit row stride (in pixels, not bytes) and copies
//! rendered pixmaps into it. The canvas itself works in premultiplied RGBA,
//! so the copy is a channel swizzle and nothing more.

use tiny_skia::PixmapRef;

use crate::error::RenderError;

/// Pack premultiplied components into a pixel with B, G, R, A memory order.
#[inline]
pub fn bgra(r: u8, g: u8, b: u8, a: u8) -> u32 {
    u32::from_le_bytes([b, g, r, a])
}

/// Split a BGRA pixel back into its bytes, in memory order `[b, g, r, a]`.
#[inline]
pub fn unpack_bgra(pixel: u32) -> [u8; 4] {
    pixel.to_le_bytes()
}

/// Number of pixels a buffer needs to hold `height` rows of `width` pixels
/// spaced `stride` pixels apart. The last row does not need padding.
pub fn required_len(width: u32, height: u32, stride: u32) -> usize {
    if width == 0 || height == 0 {
        return 0;
    }
    (height as usize - 1)
        .checked_mul(stride as usize)
        .and_then(|n| n.checked_add(width as usize))
        .unwrap_or(usize::MAX)
}

// ============================================================================
// BgraBuffer
// ============================================================================

/// Mutable view of a caller-owned BGRA premultiplied pixel buffer.
pub struct BgraBuffer<'a> {
    data: &'a mut [u32],
    width: u32,
    height: u32,
    stride: u32,
}

impl<'a> BgraBuffer<'a> {
    /// Attach to `data`, validating that `height` rows of `stride` pixels fit.
    pub fn new(data: &'a mut [u32], width: u32, height: u32, stride: u32) -> Result<Self, RenderError> {
        if stride < width {
            return Err(RenderError::InvalidStride { width, stride });
        }
        let required = required_len(width, height, stride);
        if data.len() < required {
            return Err(RenderError::BufferTooSmall {
                len: data.len(),
                required,
            });
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Mutable access to the `width` visible pixels of row `y`.
    pub fn row_mut(&mut self, y: u32) -> &mut [u32] {
        assert!(y < self.height, "row {} out of bounds (height={})", y, self.height);
        let start = y as usize * self.stride as usize;
        &mut self.data[start..start + self.width as usize]
    }

    /// Copy premultiplied pixels out of `src`, converting RGBA to BGRA.
    ///
    /// Only the overlapping region is written; padding between rows and
    /// pixels outside the source are left as they were.
    pub fn copy_from_pixmap(&mut self, src: PixmapRef) {
        let w = self.width().min(src.width()) as usize;
        let h = self.height().min(src.height());
        let src_w = src.width() as usize;
        let pixels = src.pixels();
        for y in 0..h {
            let src_row = &pixels[y as usize * src_w..y as usize * src_w + w];
            for (dst, p) in self.row_mut(y).iter_mut().zip(src_row) {
                *dst = bgra(p.red(), p.green(), p.blue(), p.alpha());
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
