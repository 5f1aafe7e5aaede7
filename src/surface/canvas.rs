use rgb::RGB8;
use slotmap::SlotMap;

use crate::error::{GeometryError, Result};
use crate::math::Complex;

use super::{
    not_found, ArrowId, ArrowPlacement, Extent, LineData, LineId, LineStyle, MarkerId,
    PointMarker, Surface,
};

/// Default color cycle for lines whose style requests automatic color.
const PALETTE: [RGB8; 10] = [
    RGB8 { r: 31, g: 119, b: 180 },
    RGB8 { r: 255, g: 127, b: 14 },
    RGB8 { r: 44, g: 160, b: 44 },
    RGB8 { r: 214, g: 39, b: 40 },
    RGB8 { r: 148, g: 103, b: 189 },
    RGB8 { r: 140, g: 86, b: 75 },
    RGB8 { r: 227, g: 119, b: 194 },
    RGB8 { r: 127, g: 127, b: 127 },
    RGB8 { r: 188, g: 189, b: 34 },
    RGB8 { r: 23, g: 190, b: 207 },
];

/// Fraction of the data span added as margin on each side of an
/// autoscaled view.
const AUTOSCALE_MARGIN: f64 = 0.05;

#[derive(Debug, Clone, Copy)]
struct DataBounds {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl DataBounds {
    fn expand(&mut self, z: Complex) {
        self.x_min = self.x_min.min(z.re);
        self.x_max = self.x_max.max(z.re);
        self.y_min = self.y_min.min(z.im);
        self.y_max = self.y_max.max(z.im);
    }
}

/// In-memory rendering surface.
///
/// Records every drawable in a slotmap keyed store, assigns colors from
/// a fixed palette cycle and stacking orders monotonically, and derives
/// its visible extent from the recorded data bounds (5% margin per
/// side) unless a fixed view has been set with [`Canvas::set_view`].
#[derive(Debug, Default)]
pub struct Canvas {
    lines: SlotMap<LineId, LineData>,
    arrows: SlotMap<ArrowId, ArrowPlacement>,
    markers: SlotMap<MarkerId, PointMarker>,
    bounds: Option<DataBounds>,
    view: Option<(f64, f64, f64, f64)>,
    next_z: i32,
    next_color: usize,
}

impl Canvas {
    /// Creates a new, empty canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixes the visible view to `[x_min, x_max] x [y_min, y_max]`,
    /// disabling autoscale. Placed arrows keep their old head geometry
    /// until the next `update_arrows` pass.
    ///
    /// # Errors
    ///
    /// Returns an error if either range is empty or inverted.
    pub fn set_view(&mut self, x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<()> {
        if x_max <= x_min || y_max <= y_min {
            return Err(GeometryError::Degenerate(format!(
                "empty view [{x_min}, {x_max}] x [{y_min}, {y_max}]"
            ))
            .into());
        }
        self.view = Some((x_min, x_max, y_min, y_max));
        Ok(())
    }

    /// Reverts to an autoscaled view derived from the data bounds.
    pub fn autoscale(&mut self) {
        self.view = None;
    }

    /// Iterates over all placed polylines.
    pub fn lines(&self) -> impl Iterator<Item = (LineId, &LineData)> {
        self.lines.iter()
    }

    /// Iterates over all placed arrows.
    pub fn arrows(&self) -> impl Iterator<Item = (ArrowId, &ArrowPlacement)> {
        self.arrows.iter()
    }

    /// Iterates over all placed point markers.
    pub fn markers(&self) -> impl Iterator<Item = (MarkerId, &PointMarker)> {
        self.markers.iter()
    }

    fn expand_bounds(&mut self, points: impl IntoIterator<Item = Complex>) {
        for z in points {
            match &mut self.bounds {
                Some(b) => b.expand(z),
                None => {
                    self.bounds = Some(DataBounds {
                        x_min: z.re,
                        x_max: z.re,
                        y_min: z.im,
                        y_max: z.im,
                    });
                }
            }
        }
    }

    fn take_z(&mut self) -> i32 {
        let z = self.next_z;
        self.next_z += 1;
        z
    }

    fn next_auto_color(&mut self) -> RGB8 {
        let color = PALETTE[self.next_color % PALETTE.len()];
        self.next_color += 1;
        color
    }
}

impl Surface for Canvas {
    fn draw_polyline(&mut self, points: Vec<Complex>, style: &LineStyle) -> LineId {
        let color = match style.color {
            Some(c) => c,
            None => self.next_auto_color(),
        };
        self.expand_bounds(points.iter().copied());
        let z_order = self.take_z();
        self.lines.insert(LineData {
            points,
            color,
            width: style.width,
            dash: style.dash,
            label: style.label.clone(),
            z_order,
        })
    }

    fn line(&self, id: LineId) -> Result<&LineData> {
        self.lines.get(id).ok_or_else(|| not_found("line"))
    }

    fn draw_arrow(&mut self, arrow: ArrowPlacement) -> ArrowId {
        self.expand_bounds([arrow.position]);
        self.arrows.insert(arrow)
    }

    fn arrow(&self, id: ArrowId) -> Result<&ArrowPlacement> {
        self.arrows.get(id).ok_or_else(|| not_found("arrow"))
    }

    fn arrow_ids(&self) -> Vec<ArrowId> {
        self.arrows.keys().collect()
    }

    fn remove_arrow(&mut self, id: ArrowId) -> Result<ArrowPlacement> {
        self.arrows.remove(id).ok_or_else(|| not_found("arrow"))
    }

    fn draw_marker(&mut self, marker: PointMarker) -> MarkerId {
        self.expand_bounds([marker.position]);
        self.markers.insert(marker)
    }

    fn visible_extent(&self) -> Extent {
        if let Some((x_min, x_max, y_min, y_max)) = self.view {
            return Extent {
                dx: x_max - x_min,
                dy: y_max - y_min,
            };
        }
        match self.bounds {
            Some(b) => {
                let dx = b.x_max - b.x_min;
                let dy = b.y_max - b.y_min;
                // Degenerate spans (single point, vertical line) fall
                // back to a unit span on that axis, like an empty view.
                let dx = if dx > 0.0 { dx * (1.0 + 2.0 * AUTOSCALE_MARGIN) } else { 1.0 };
                let dy = if dy > 0.0 { dy * (1.0 + 2.0 * AUTOSCALE_MARGIN) } else { 1.0 };
                Extent { dx, dy }
            }
            None => Extent { dx: 1.0, dy: 1.0 },
        }
    }
}
