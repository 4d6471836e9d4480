//! Interactive UI controls rendered onto a vector canvas.
//!
//! A control exposes a fixed number of colored paths. [`render_ctrl`] walks
//! them in order and fills or strokes each one with its color, so drawing a
//! control is a pure read of its state.
//!
//! Controls receive pointer events in their own coordinate space (the same
//! space as their bounds). The handlers return `true` when the event changed
//! something the host should redraw.

use tiny_skia::{Color, FillRule, Paint, Path, PathBuilder, PixmapMut, Stroke, Transform};
use tracing::{debug, trace};

// ============================================================================
// render_ctrl — render any control with its multi-path color scheme
// ============================================================================

/// How a control path is painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathStyle {
    Fill,
    /// Stroke with the given line width.
    Stroke(f32),
}

/// One renderable path of a control.
#[derive(Debug, Clone)]
pub struct CtrlPath {
    pub path: Path,
    pub style: PathStyle,
}

/// Trait for controls that can be rendered as a sequence of colored paths.
pub trait Ctrl {
    fn num_paths(&self) -> u32;
    fn color(&self, path_id: u32) -> Color;
    /// Geometry of path `path_id`, or `None` when it has nothing to draw.
    fn path(&self, path_id: u32) -> Option<CtrlPath>;
}

/// Render a control by iterating its paths and painting each with its color.
pub fn render_ctrl(pixmap: &mut PixmapMut, ctrl: &dyn Ctrl) {
    let mut paint = Paint::default();
    paint.anti_alias = true;
    for i in 0..ctrl.num_paths() {
        let Some(p) = ctrl.path(i) else {
            continue;
        };
        paint.set_color(ctrl.color(i));
        match p.style {
            PathStyle::Fill => {
                pixmap.fill_path(&p.path, &paint, FillRule::Winding, Transform::identity(), None);
            }
            PathStyle::Stroke(width) => {
                let stroke = Stroke {
                    width,
                    ..Stroke::default()
                };
                pixmap.stroke_path(&p.path, &paint, &stroke, Transform::identity(), None);
            }
        }
    }
}

// ============================================================================
// KnobCtrl — rotary dial
// ============================================================================

/// Pixels of vertical drag that sweep the full value range.
pub const DRAG_SENSITIVITY: f32 = 100.0;
/// Inset between the bounds circle and the painted dial.
pub const KNOB_MARGIN: f32 = 2.0;
/// Indicator length as a fraction of the dial radius.
pub const INDICATOR_LENGTH: f32 = 0.8;
/// Total angular travel of the indicator, in degrees.
pub const SWEEP_DEGREES: f32 = 270.0;
/// Indicator angle at the bottom of the range, in degrees (0 = +x, y down).
///
/// The sweep runs clockwise from up-left through right to down-left, leaving
/// the unused 90° centred on the left.
pub const START_DEGREES: f32 = -135.0;

/// Rotary knob driven by vertical pointer drags.
///
/// Renders 3 paths: background disc, indicator line, outer ring.
///
/// The value is kept normalized to the range `[min, max]`. Drags clamp it to
/// `[0, 1]`; [`KnobCtrl::set_value`] stores whatever it is given, so a host
/// can push the dial past either end.
#[derive(Debug, Clone)]
pub struct KnobCtrl {
    // Bounds
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    // Value
    value: f32,
    min: f32,
    max: f32,
    // Drag state
    dragging: bool,
    last_x: f32,
    last_y: f32,
    // Colors (3 paths)
    colors: [Color; 3],
}

impl KnobCtrl {
    /// Knob over `[0, 1]` starting at 0.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::with_range(x, y, width, height, 0.0, 1.0, 0.0)
    }

    /// Knob over `[min, max]` starting at `initial`. `min` must be below `max`.
    pub fn with_range(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        min: f32,
        max: f32,
        initial: f32,
    ) -> Self {
        let mut k = Self {
            x1: x,
            y1: y,
            x2: x + width,
            y2: y + height,
            value: 0.0,
            min,
            max,
            dragging: false,
            last_x: 0.0,
            last_y: 0.0,
            colors: [
                Color::from_rgba8(60, 60, 60, 255),    // 0: background disc
                Color::from_rgba8(200, 200, 200, 255), // 1: indicator
                Color::from_rgba8(100, 100, 100, 255), // 2: outer ring
            ],
        };
        k.set_value(initial);
        k
    }

    /// Bounds as `(x, y, width, height)`.
    pub fn bounds(&self) -> (f32, f32, f32, f32) {
        (self.x1, self.y1, self.x2 - self.x1, self.y2 - self.y1)
    }

    pub fn range(&self) -> (f32, f32) {
        (self.min, self.max)
    }

    /// Get the current value (in user range).
    pub fn value(&self) -> f32 {
        self.min + self.value * (self.max - self.min)
    }

    /// Set the current value (in user range). Not clamped.
    pub fn set_value(&mut self, v: f32) {
        self.value = (v - self.min) / (self.max - self.min);
    }

    pub fn normalized_value(&self) -> f32 {
        self.value
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn center(&self) -> (f32, f32) {
        ((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }

    fn hit_radius(&self) -> f32 {
        (self.x2 - self.x1).min(self.y2 - self.y1) / 2.0
    }

    /// Radius of the painted dial.
    pub fn dial_radius(&self) -> f32 {
        self.hit_radius() - KNOB_MARGIN
    }

    /// Indicator direction in radians.
    pub fn indicator_angle(&self) -> f32 {
        (self.value * SWEEP_DEGREES + START_DEGREES).to_radians()
    }

    /// Outer end point of the indicator line.
    pub fn indicator_end(&self) -> (f32, f32) {
        let (cx, cy) = self.center();
        let angle = self.indicator_angle();
        let len = self.dial_radius() * INDICATOR_LENGTH;
        (cx + angle.cos() * len, cy + angle.sin() * len)
    }

    // --- Color setters ---

    pub fn background_color(&mut self, c: Color) {
        self.colors[0] = c;
    }
    pub fn indicator_color(&mut self, c: Color) {
        self.colors[1] = c;
    }
    pub fn outline_color(&mut self, c: Color) {
        self.colors[2] = c;
    }

    // --- Pointer interaction ---

    /// True if `(x, y)` lies inside the circle inscribed in the bounds.
    pub fn hit_test(&self, x: f32, y: f32) -> bool {
        let (cx, cy) = self.center();
        let r = self.hit_radius();
        let dist_sq = (x - cx) * (x - cx) + (y - cy) * (y - cy);
        dist_sq <= r * r
    }

    pub fn on_pointer_down(&mut self, x: f32, y: f32) -> bool {
        if !self.hit_test(x, y) {
            return false;
        }
        self.dragging = true;
        self.last_x = x;
        self.last_y = y;
        debug!(x, y, value = self.value(), "knob drag started");
        true
    }

    /// Moving up raises the value by `1 / DRAG_SENSITIVITY` per pixel.
    pub fn on_pointer_drag(&mut self, x: f32, y: f32) -> bool {
        if !self.dragging {
            return false;
        }
        let delta = (self.last_y - y) / DRAG_SENSITIVITY;
        self.value = (self.value + delta).clamp(0.0, 1.0);
        self.last_x = x;
        self.last_y = y;
        trace!(delta, normalized = self.value, "knob drag");
        true
    }

    pub fn on_pointer_up(&mut self, _x: f32, _y: f32) -> bool {
        let was_dragging = self.dragging;
        self.dragging = false;
        if was_dragging {
            debug!(value = self.value(), "knob drag ended");
        }
        was_dragging
    }

    /// Paint the knob onto `pixmap`.
    pub fn draw(&self, pixmap: &mut PixmapMut) {
        render_ctrl(pixmap, self);
    }

    fn calc_disc(&self) -> Option<Path> {
        let (cx, cy) = self.center();
        let r = self.dial_radius();
        if r <= 0.0 {
            return None;
        }
        PathBuilder::from_circle(cx, cy, r)
    }

    fn calc_indicator(&self) -> Option<Path> {
        if self.dial_radius() <= 0.0 {
            return None;
        }
        let (cx, cy) = self.center();
        let (ex, ey) = self.indicator_end();
        let mut pb = PathBuilder::new();
        pb.move_to(cx, cy);
        pb.line_to(ex, ey);
        pb.finish()
    }
}

impl Ctrl for KnobCtrl {
    fn num_paths(&self) -> u32 {
        3
    }

    fn color(&self, path_id: u32) -> Color {
        self.colors[path_id.min(2) as usize]
    }

    fn path(&self, path_id: u32) -> Option<CtrlPath> {
        match path_id {
            0 => self.calc_disc().map(|path| CtrlPath {
                path,
                style: PathStyle::Fill,
            }),
            1 => self.calc_indicator().map(|path| CtrlPath {
                path,
                style: PathStyle::Stroke(2.0),
            }),
            2 => self.calc_disc().map(|path| CtrlPath {
                path,
                style: PathStyle::Stroke(1.0),
            }),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
