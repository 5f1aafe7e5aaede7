use rgb::RGB8;

use crate::error::{GeometryError, Result};
use crate::math::{upper_bracket, Complex};
use crate::surface::{ArrowPlacement, Extent, LineId, Surface};

use super::{Curve, SampledCurve};

/// Head-length to head-width ratio of every placed arrow
/// (golden-ratio derived, for a visually balanced triangular head).
pub const HEAD_LENGTH_TO_WIDTH_RATIO: f64 = 1.0 / 0.618;

/// Fraction of the view diagonal used as the arrow head width.
const HEAD_SIZE_EXTENT_FRACTION: f64 = 0.015;

/// Returns the arrow head width for a view with the given visible
/// extent. Heads are sized in screen space: a constant fraction of the
/// view diagonal, independent of the data's numeric scale.
#[must_use]
pub fn head_size(extent: Extent) -> f64 {
    extent.diagonal() * HEAD_SIZE_EXTENT_FRACTION
}

/// Computes the forward-difference direction `curve(t + step) - curve(t)`.
///
/// With a vanishingly small explicit `step` this approaches the
/// analytic tangent; with the local grid spacing (see
/// [`derived_step`]) it matches the secant direction of the rendered
/// polyline segment.
///
/// # Errors
///
/// Propagates curve evaluation failures.
pub fn tangent<C>(curve: &C, t: f64, step: f64) -> Result<Complex>
where
    C: Curve + ?Sized,
{
    Ok(curve.evaluate(t + step)? - curve.evaluate(t)?)
}

/// Returns the local grid spacing around `t`: the width of the
/// bracketing segment `[t0, t1)` that contains `t`. A parameter equal
/// to a grid point uses the segment starting at that point.
///
/// Callers must have verified `t` against `[t_min, t_max)` of the grid
/// beforehand; a failed bracket here is an internal invariant
/// violation, not a recoverable error.
pub(crate) fn derived_step(t: f64, grid: &[f64]) -> f64 {
    match upper_bracket(t, grid) {
        Some(end) if end > 0 => grid[end] - grid[end - 1],
        _ => unreachable!("no bracketing pair for in-domain parameter {t}"),
    }
}

/// Checks an arrow placement parameter against the sampled range.
///
/// The domain is half-open: `t == t_max` has no bracketing segment
/// beyond the last sample and is rejected, never clamped.
pub(crate) fn check_arrow_parameter(t: f64, sampled: &SampledCurve) -> Result<()> {
    if t >= sampled.t_min() && t < sampled.t_max() {
        return Ok(());
    }
    Err(GeometryError::ParameterOutOfRange {
        parameter: "arrow point t",
        value: t,
        min: sampled.t_min(),
        max: sampled.t_max(),
    }
    .into())
}

/// Places an arrow at `position` pointing along `direction`, inheriting
/// the color and stacking order of the line it annotates, then runs the
/// update pass (drawing the arrow may have rescaled the view).
///
/// # Errors
///
/// Returns an error if `line_id` is stale.
pub fn add_arrow_to_line<S>(
    surface: &mut S,
    line_id: LineId,
    position: Complex,
    direction: Complex,
) -> Result<()>
where
    S: Surface + ?Sized,
{
    let line = surface.line(line_id)?;
    annotate_arrow(surface, position, position + direction, line.color, line.z_order)
}

/// Generic annotation placer: draws an arrow from `start` to `end` with
/// screen-space head sizing, then refreshes every placed arrow against
/// the (possibly rescaled) view.
///
/// # Errors
///
/// Returns an error if the update pass encounters a stale handle.
pub fn annotate_arrow<S>(
    surface: &mut S,
    start: Complex,
    end: Complex,
    color: RGB8,
    z_order: i32,
) -> Result<()>
where
    S: Surface + ?Sized,
{
    let width = head_size(surface.visible_extent());
    surface.draw_arrow(ArrowPlacement {
        position: start,
        direction: end - start,
        head_width: width,
        head_length: width * HEAD_LENGTH_TO_WIDTH_RATIO,
        color,
        z_order,
    });
    update_arrows(surface)
}

/// Re-derives the head geometry of every arrow on the surface from the
/// current visible extent.
///
/// Each arrow is removed and re-added with recomputed head sizing;
/// position, direction, color, and stacking order are preserved
/// verbatim. The pass is order-independent and idempotent, so it is
/// safe to invoke repeatedly (e.g. from view-change callbacks firing in
/// quick succession).
///
/// # Errors
///
/// Returns an error if an enumerated arrow handle is stale.
pub fn update_arrows<S>(surface: &mut S) -> Result<()>
where
    S: Surface + ?Sized,
{
    let width = head_size(surface.visible_extent());
    let length = width * HEAD_LENGTH_TO_WIDTH_RATIO;
    for id in surface.arrow_ids() {
        let old = surface.remove_arrow(id)?;
        surface.draw_arrow(ArrowPlacement {
            head_width: width,
            head_length: length,
            ..old
        });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::curve::sample;
    use crate::surface::Canvas;
    use approx::assert_relative_eq;

    const TOL: f64 = 1e-12;

    #[test]
    fn head_ratio_is_constant_across_viewports() {
        for extent in [
            Extent { dx: 1.0, dy: 1.0 },
            Extent { dx: 1e-6, dy: 3e-7 },
            Extent { dx: 4e9, dy: 2e8 },
        ] {
            let width = head_size(extent);
            let length = width * HEAD_LENGTH_TO_WIDTH_RATIO;
            assert_relative_eq!(length / width, 1.0 / 0.618, epsilon = TOL);
        }
    }

    #[test]
    fn head_size_scales_with_view_diagonal() {
        let e = Extent { dx: 3.0, dy: 4.0 };
        assert_relative_eq!(head_size(e), 5.0 * 0.015, epsilon = TOL);
    }

    #[test]
    fn explicit_step_gives_near_analytic_tangent() {
        let circle = |t: f64| -> crate::error::Result<Complex> { Ok(Complex::new(t.cos(), t.sin())) };
        let dz = tangent(&circle, 0.0, 1e-9).unwrap();
        // d/dt (cos t, sin t) at t=0 is (0, 1).
        assert!(dz.re.abs() < 1e-9);
        assert!(dz.im > 0.0);
    }

    #[test]
    fn derived_step_uses_local_grid_spacing() {
        let grid = [0.0, 1.0, 3.0, 6.0];
        assert_relative_eq!(derived_step(0.5, &grid), 1.0);
        assert_relative_eq!(derived_step(2.0, &grid), 2.0);
        // Exact grid hit belongs to the segment starting there.
        assert_relative_eq!(derived_step(1.0, &grid), 2.0);
        assert_relative_eq!(derived_step(0.0, &grid), 1.0);
    }

    #[test]
    fn parameter_domain_is_half_open() {
        let circle = |t: f64| -> crate::error::Result<Complex> { Ok(Complex::new(t.cos(), t.sin())) };
        let s = sample(&circle, 0.0, 1.0, 10).unwrap();
        assert!(check_arrow_parameter(0.0, &s).is_ok());
        assert!(check_arrow_parameter(0.999, &s).is_ok());
        assert!(check_arrow_parameter(1.0, &s).is_err());
        assert!(check_arrow_parameter(-0.1, &s).is_err());
        assert!(check_arrow_parameter(f64::NAN, &s).is_err());
    }

    #[test]
    fn update_pass_is_idempotent() {
        let mut canvas = Canvas::new();
        canvas.set_view(0.0, 10.0, 0.0, 5.0).unwrap();
        annotate_arrow(
            &mut canvas,
            Complex::new(1.0, 1.0),
            Complex::new(2.0, 1.0),
            rgb::RGB8 { r: 0, g: 0, b: 0 },
            3,
        )
        .unwrap();

        update_arrows(&mut canvas).unwrap();
        let first: Vec<ArrowPlacement> = canvas.arrows().map(|(_, a)| *a).collect();
        update_arrows(&mut canvas).unwrap();
        let second: Vec<ArrowPlacement> = canvas.arrows().map(|(_, a)| *a).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn update_pass_resizes_heads_on_view_change() {
        let mut canvas = Canvas::new();
        canvas.set_view(0.0, 3.0, 0.0, 4.0).unwrap();
        annotate_arrow(
            &mut canvas,
            Complex::new(1.0, 1.0),
            Complex::new(1.5, 1.0),
            rgb::RGB8 { r: 0, g: 0, b: 0 },
            0,
        )
        .unwrap();
        let (_, arrow) = canvas.arrows().next().unwrap();
        assert_relative_eq!(arrow.head_width, 5.0 * 0.015, epsilon = TOL);
        let old_position = arrow.position;
        let old_direction = arrow.direction;

        // Zoom out by 2x: heads double, placement fields stay verbatim.
        canvas.set_view(0.0, 6.0, 0.0, 8.0).unwrap();
        update_arrows(&mut canvas).unwrap();
        let (_, arrow) = canvas.arrows().next().unwrap();
        assert_relative_eq!(arrow.head_width, 10.0 * 0.015, epsilon = TOL);
        assert_relative_eq!(
            arrow.head_length,
            10.0 * 0.015 * HEAD_LENGTH_TO_WIDTH_RATIO,
            epsilon = TOL
        );
        assert_eq!(arrow.position, old_position);
        assert_eq!(arrow.direction, old_direction);
    }
}
