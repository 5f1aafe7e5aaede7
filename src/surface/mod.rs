mod canvas;

pub use canvas::Canvas;

use rgb::RGB8;

use crate::error::{RenderError, Result};
use crate::math::Complex;

slotmap::new_key_type! {
    /// Unique identifier for a polyline on a surface.
    pub struct LineId;
}

slotmap::new_key_type! {
    /// Unique identifier for an arrow on a surface.
    pub struct ArrowId;
}

slotmap::new_key_type! {
    /// Unique identifier for a point marker on a surface.
    pub struct MarkerId;
}

/// Dash pattern of a polyline stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineDash {
    #[default]
    Solid,
    Dashed,
}

/// Caller-facing style for a polyline.
///
/// A `None` color requests automatic assignment by the surface; the
/// resolved color is reported back through [`LineData`].
#[derive(Debug, Clone)]
pub struct LineStyle {
    pub color: Option<RGB8>,
    pub width: f64,
    pub dash: LineDash,
    pub label: Option<String>,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl LineStyle {
    /// Creates a solid style with the default width and automatic color.
    #[must_use]
    pub fn new() -> Self {
        Self {
            color: None,
            width: 1.5,
            dash: LineDash::Solid,
            label: None,
        }
    }
}

/// A polyline as recorded on a surface, with its resolved color and
/// stacking order.
#[derive(Debug, Clone)]
pub struct LineData {
    pub points: Vec<Complex>,
    pub color: RGB8,
    pub width: f64,
    pub dash: LineDash,
    pub label: Option<String>,
    pub z_order: i32,
}

/// An arrow drawable: position, direction, and screen-space head sizing.
///
/// Plain immutable value record; the surface owns the placed instances
/// and hands out [`ArrowId`] handles so the geometry engine can locate
/// and replace them when the view rescales.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowPlacement {
    pub position: Complex,
    pub direction: Complex,
    pub head_width: f64,
    pub head_length: f64,
    pub color: RGB8,
    pub z_order: i32,
}

/// A filled or hollow point marker (discontinuity indicator).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMarker {
    pub position: Complex,
    pub filled: bool,
    pub color: RGB8,
    pub size: f64,
    pub z_order: i32,
}

/// Visible extent of a surface's view: the width and height of the
/// currently visible rectangle, in data units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub dx: f64,
    pub dy: f64,
}

impl Extent {
    /// Length of the view rectangle's diagonal.
    #[must_use]
    pub fn diagonal(&self) -> f64 {
        self.dx.hypot(self.dy)
    }
}

/// Abstraction over a 2-D rendering surface.
///
/// The plotting core is backend-agnostic: it only needs to add
/// polylines, arrows, and point markers, look placed drawables up by
/// handle, and read the visible extent. Arrows get a dedicated registry
/// (`arrow_ids`) because the geometry engine re-derives every placed
/// arrow whenever the view rescales.
pub trait Surface {
    /// Adds a polyline and returns its handle. The surface resolves an
    /// automatic color if the style requests one, and assigns the
    /// stacking order.
    fn draw_polyline(&mut self, points: Vec<Complex>, style: &LineStyle) -> LineId;

    /// Looks up a placed polyline.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::DrawableNotFound`] for a stale handle.
    fn line(&self, id: LineId) -> Result<&LineData>;

    /// Adds an arrow and returns its handle.
    fn draw_arrow(&mut self, arrow: ArrowPlacement) -> ArrowId;

    /// Looks up a placed arrow.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::DrawableNotFound`] for a stale handle.
    fn arrow(&self, id: ArrowId) -> Result<&ArrowPlacement>;

    /// Returns the handles of all currently placed arrows.
    fn arrow_ids(&self) -> Vec<ArrowId>;

    /// Removes an arrow and returns its record.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::DrawableNotFound`] for a stale handle.
    fn remove_arrow(&mut self, id: ArrowId) -> Result<ArrowPlacement>;

    /// Adds a point marker and returns its handle.
    fn draw_marker(&mut self, marker: PointMarker) -> MarkerId;

    /// Returns the visible extent of the current view.
    fn visible_extent(&self) -> Extent;
}

pub(crate) fn not_found(kind: &'static str) -> crate::error::PlotError {
    RenderError::DrawableNotFound(kind).into()
}
