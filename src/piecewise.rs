use rgb::RGB8;

use crate::error::{RenderError, Result};
use crate::math::{Complex, Interval};
use crate::surface::{LineDash, LineId, LineStyle, PointMarker, Surface};

/// Trait for real-valued functions of one real variable.
///
/// Implementations must be pure: safe to call at arbitrary, possibly
/// repeated, arguments.
pub trait RealFn {
    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if evaluation fails at `x`.
    fn evaluate(&self, x: f64) -> Result<f64>;
}

impl<F> RealFn for F
where
    F: Fn(f64) -> Result<f64>,
{
    fn evaluate(&self, x: f64) -> Result<f64> {
        self(x)
    }
}

/// Options for [`plot_piecewise`].
#[derive(Debug, Clone)]
pub struct PiecewiseOptions {
    /// Color for all pieces. `None` reuses whatever color the surface
    /// assigns to the first piece.
    pub color: Option<RGB8>,
    /// Stroke width of the pieces.
    pub line_width: f64,
    /// Legend label, attached to the first piece only.
    pub label: Option<String>,
    /// Draw a dashed connecting segment across each jump. Disabling
    /// this also disables the jump markers.
    pub jump_line: bool,
    /// Stroke width of the jump segments.
    pub jump_line_width: f64,
    /// Color of the jump segments; defaults to the piece color.
    pub jump_line_color: Option<RGB8>,
    /// Draw the filled/hollow marker pair at each jump.
    pub jump_markers: bool,
    /// Size of the jump markers.
    pub jump_marker_size: f64,
    /// Color of the jump markers; defaults to the piece color.
    pub jump_marker_color: Option<RGB8>,
}

impl Default for PiecewiseOptions {
    fn default() -> Self {
        Self {
            color: None,
            line_width: 1.5,
            label: None,
            jump_line: true,
            jump_line_width: 1.0,
            jump_line_color: None,
            jump_markers: true,
            jump_marker_size: 20.0,
            jump_marker_color: None,
        }
    }
}

/// Right-boundary state carried from one piece to the next. The
/// boundary value itself is not evaluated until a successor piece
/// actually draws a jump.
struct PrevBoundary<'a> {
    x: f64,
    function: &'a dyn RealFn,
    right_closed: bool,
}

/// Plots a piecewise-defined function over the point grid `x`.
///
/// Each `(interval, function)` pair is rendered over the grid points
/// the interval contains. Between consecutive pieces a dashed jump
/// segment connects the previous piece's right boundary value to the
/// current piece's left boundary value, with a marker at each end:
/// filled when the owning piece includes its boundary (closed
/// endpoint), hollow when it excludes it (open endpoint). All four
/// filled/hollow combinations render independently.
///
/// Jump boundary values come from evaluating the two adjoining pieces'
/// functions at the shared boundary itself, so a function must be
/// defined at an open endpoint when a jump is rendered there. No
/// boundary evaluation happens with `jump_line` disabled, and a piece's
/// right boundary is only ever evaluated when a successor piece draws a
/// jump against it.
///
/// Pieces are processed in list order. Intervals are expected to be
/// sorted by lower bound and pairwise disjoint; this is not validated,
/// and violating it produces undefined visual overlap.
///
/// Returns the handles of the per-piece polylines, in order.
///
/// # Errors
///
/// Returns an error if a piece selects no grid points (the jump state
/// machine needs its boundary values) or if a function evaluation
/// fails.
pub fn plot_piecewise<S>(
    surface: &mut S,
    x: &[f64],
    pieces: &[(Interval, &dyn RealFn)],
    options: &PiecewiseOptions,
) -> Result<Vec<LineId>>
where
    S: Surface + ?Sized,
{
    let mut line_ids = Vec::with_capacity(pieces.len());
    let mut resolved_color = options.color;
    let mut prev: Option<PrevBoundary> = None;

    for (i, (interval, function)) in pieces.iter().enumerate() {
        let mask = interval.classify(x);
        let points: Vec<f64> = x
            .iter()
            .zip(&mask)
            .filter_map(|(&xi, &inside)| inside.then_some(xi))
            .collect();
        if points.is_empty() {
            return Err(RenderError::InvalidInput(format!(
                "piece {i} selects no sample points"
            ))
            .into());
        }

        let values = points
            .iter()
            .map(|&p| function.evaluate(p))
            .collect::<Result<Vec<f64>>>()?;

        let style = LineStyle {
            color: resolved_color,
            width: options.line_width,
            dash: LineDash::Solid,
            label: if i == 0 { options.label.clone() } else { None },
        };
        let curve_points: Vec<Complex> = points
            .iter()
            .zip(&values)
            .map(|(&px, &py)| Complex::new(px, py))
            .collect();
        let line_id = surface.draw_polyline(curve_points, &style);
        let line = surface.line(line_id)?;
        let line_z = line.z_order;
        let piece_color = *resolved_color.get_or_insert(line.color);
        line_ids.push(line_id);

        if options.jump_line {
            if let Some(prev) = &prev {
                let prev_value = prev.function.evaluate(prev.x)?;
                let boundary_x = interval.lower();
                let left_value = function.evaluate(boundary_x)?;
                let jump_color = options.jump_line_color.unwrap_or(piece_color);

                surface.draw_polyline(
                    vec![
                        Complex::new(prev.x, prev_value),
                        Complex::new(boundary_x, left_value),
                    ],
                    &LineStyle {
                        color: Some(jump_color),
                        width: options.jump_line_width,
                        dash: LineDash::Dashed,
                        label: None,
                    },
                );

                if options.jump_markers {
                    let marker_color = options.jump_marker_color.unwrap_or(piece_color);
                    surface.draw_marker(PointMarker {
                        position: Complex::new(prev.x, prev_value),
                        filled: prev.right_closed,
                        color: marker_color,
                        size: options.jump_marker_size,
                        z_order: line_z,
                    });
                    surface.draw_marker(PointMarker {
                        position: Complex::new(boundary_x, left_value),
                        filled: interval.left().is_closed(),
                        color: marker_color,
                        size: options.jump_marker_size,
                        z_order: line_z,
                    });
                }
            }
        }

        prev = Some(PrevBoundary {
            x: interval.upper(),
            function: *function,
            right_closed: interval.right().is_closed(),
        });
    }

    Ok(line_ids)
}
