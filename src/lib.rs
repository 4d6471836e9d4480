//! # plug-ui
//!
//! A rotary knob control and a minimal pixel-buffer renderer for audio
//! plugin user interfaces, drawn on the `tiny-skia` vector canvas.
//!
//! - [`ctrl::KnobCtrl`] keeps a normalized value, turns vertical pointer
//!   drags into value changes and paints itself as a dial with an indicator.
//! - [`renderer::UiRenderer`] renders into a caller-owned buffer of 32-bit
//!   BGRA premultiplied pixels for a host compositor.
//!
//! ## Rendering
//!
//! 1. **Control** — exposes colored fill/stroke paths ([`ctrl::Ctrl`])
//! 2. **Canvas** — `tiny-skia` rasterizes them antialiased into a pixmap
//! 3. **Buffer** — pixels are swizzled to BGRA into the host buffer
//!    ([`rendering_buffer::BgraBuffer`])
//!
//! Everything runs on the UI thread; nothing here is shared across threads.

pub mod ctrl;
pub mod error;
pub mod renderer;
pub mod rendering_buffer;

pub use ctrl::{render_ctrl, Ctrl, KnobCtrl};
pub use error::RenderError;
pub use renderer::UiRenderer;
