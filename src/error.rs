//! Error type for the rendering path.
//!
//! Only rendering can fail. Hit testing and the pointer handlers are total:
//! presses outside the control, drags without a press and repeated releases
//! are no-ops.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The off-screen surface could not be created (zero or overflowing size).
    #[error("failed to allocate a {width}x{height} render surface")]
    SurfaceAllocation { width: u32, height: u32 },

    /// The caller's pixel buffer cannot hold the requested image.
    #[error("pixel buffer holds {len} pixels, {required} required")]
    BufferTooSmall { len: usize, required: usize },

    /// Row stride is narrower than a row.
    #[error("row stride {stride} is smaller than width {width}")]
    InvalidStride { width: u32, stride: u32 },
}
