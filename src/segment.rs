use crate::curve::{annotate_arrow, plot_curve, CurveOptions};
use crate::error::{GeometryError, Result};
use crate::math::{Complex, TOLERANCE};
use crate::surface::{LineId, LineStyle, Surface};

/// Which side of a directed segment the annotation arrow sits on,
/// relative to the direction of travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowSide {
    Left,
    Right,
}

/// Placement of the side-offset annotation arrow.
#[derive(Debug, Clone, Copy)]
pub struct SegmentAnnotation {
    /// Side of the segment the arrow is offset to.
    pub side: ArrowSide,
    /// Perpendicular distance from the segment's midpoint.
    pub distance: f64,
    /// Length of the annotation arrow.
    pub length: f64,
}

impl SegmentAnnotation {
    /// Creates an annotation on the given side with the default offset
    /// distance and arrow length.
    #[must_use]
    pub fn on(side: ArrowSide) -> Self {
        Self {
            side,
            distance: 0.5,
            length: 0.5,
        }
    }
}

/// Options for [`plot_directed_segment`].
#[derive(Debug, Clone, Default)]
pub struct SegmentOptions {
    /// Stroke style of the segment.
    pub style: LineStyle,
    /// Optional side-offset annotation arrow.
    pub annotation: Option<SegmentAnnotation>,
}

/// Plots the directed straight segment from `z0` to `z1`, optionally
/// annotated with an arrow offset to its left or right.
///
/// The annotation arrow is parallel to the segment, centered on
/// `midpoint ± normal * distance` (`+` for left, `-` for right), where
/// the unit normal is the unit tangent rotated 90° counter-clockwise
/// (multiplication by `i`). The arrow takes the segment's color.
///
/// # Errors
///
/// Returns [`GeometryError::Degenerate`] if `z0 == z1` (the tangent and
/// normal are undefined); nothing is drawn in that case.
pub fn plot_directed_segment<S>(
    surface: &mut S,
    z0: Complex,
    z1: Complex,
    options: &SegmentOptions,
) -> Result<LineId>
where
    S: Surface + ?Sized,
{
    let chord = z1 - z0;
    let chord_len = chord.norm();
    if chord_len < TOLERANCE {
        return Err(GeometryError::Degenerate(format!(
            "zero-length directed segment at ({}, {})",
            z0.re, z0.im
        ))
        .into());
    }

    let curve_options = CurveOptions {
        num_samples: 2,
        style: options.style.clone(),
        ..CurveOptions::default()
    };
    let line_id = plot_curve(
        surface,
        &|t: f64| -> Result<Complex> { Ok(z0 * (1.0 - t) + z1 * t) },
        0.0,
        1.0,
        &curve_options,
    )?;

    let Some(annotation) = options.annotation else {
        return Ok(line_id);
    };

    let tangent = chord / chord_len;
    let normal = tangent * Complex::i();
    let midpoint = (z0 + z1) / 2.0;
    let arrow_mid = match annotation.side {
        ArrowSide::Left => midpoint + normal * annotation.distance,
        ArrowSide::Right => midpoint - normal * annotation.distance,
    };
    let half = tangent * (annotation.length / 2.0);
    let start = arrow_mid - half;
    let end = arrow_mid + half;

    let line = surface.line(line_id)?;
    annotate_arrow(surface, start, end, line.color, line.z_order)?;

    Ok(line_id)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::surface::Canvas;
    use approx::assert_relative_eq;

    #[test]
    fn segment_polyline_spans_endpoints() {
        let mut canvas = Canvas::new();
        let id = plot_directed_segment(
            &mut canvas,
            Complex::new(1.0, 2.0),
            Complex::new(3.0, -1.0),
            &SegmentOptions::default(),
        )
        .unwrap();
        let line = canvas.line(id).unwrap();
        assert_eq!(line.points.len(), 2);
        assert_relative_eq!(line.points[0].re, 1.0);
        assert_relative_eq!(line.points[1].im, -1.0);
    }

    #[test]
    fn no_annotation_places_no_arrow() {
        let mut canvas = Canvas::new();
        plot_directed_segment(
            &mut canvas,
            Complex::new(0.0, 0.0),
            Complex::new(1.0, 0.0),
            &SegmentOptions::default(),
        )
        .unwrap();
        assert_eq!(canvas.arrows().count(), 0);
    }

    #[test]
    fn left_annotation_of_horizontal_segment() {
        // Segment 0 -> 4: tangent (1, 0), normal (0, 1), arrow midpoint
        // (2, 0.5) for a left offset of 0.5.
        let mut canvas = Canvas::new();
        let options = SegmentOptions {
            annotation: Some(SegmentAnnotation::on(ArrowSide::Left)),
            ..SegmentOptions::default()
        };
        plot_directed_segment(
            &mut canvas,
            Complex::new(0.0, 0.0),
            Complex::new(4.0, 0.0),
            &options,
        )
        .unwrap();

        let (_, arrow) = canvas.arrows().next().unwrap();
        let mid = arrow.position + arrow.direction / 2.0;
        assert_relative_eq!(mid.re, 2.0, epsilon = 1e-12);
        assert_relative_eq!(mid.im, 0.5, epsilon = 1e-12);
        // Arrow runs along the segment direction.
        assert_relative_eq!(arrow.direction.re, 0.5, epsilon = 1e-12);
        assert_relative_eq!(arrow.direction.im, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn right_annotation_mirrors_left() {
        let mut canvas = Canvas::new();
        let options = SegmentOptions {
            annotation: Some(SegmentAnnotation::on(ArrowSide::Right)),
            ..SegmentOptions::default()
        };
        plot_directed_segment(
            &mut canvas,
            Complex::new(0.0, 0.0),
            Complex::new(4.0, 0.0),
            &options,
        )
        .unwrap();
        let (_, arrow) = canvas.arrows().next().unwrap();
        let mid = arrow.position + arrow.direction / 2.0;
        assert_relative_eq!(mid.im, -0.5, epsilon = 1e-12);
    }

    #[test]
    fn annotation_matches_segment_color() {
        let mut canvas = Canvas::new();
        let options = SegmentOptions {
            annotation: Some(SegmentAnnotation::on(ArrowSide::Left)),
            ..SegmentOptions::default()
        };
        let id = plot_directed_segment(
            &mut canvas,
            Complex::new(0.0, 0.0),
            Complex::new(0.0, 2.0),
            &options,
        )
        .unwrap();
        let (_, arrow) = canvas.arrows().next().unwrap();
        assert_eq!(arrow.color, canvas.line(id).unwrap().color);
    }

    #[test]
    fn degenerate_segment_fails_without_drawing() {
        let mut canvas = Canvas::new();
        let z = Complex::new(1.0, 1.0);
        let err = plot_directed_segment(&mut canvas, z, z, &SegmentOptions::default());
        assert!(err.is_err());
        assert_eq!(canvas.lines().count(), 0);
        assert_eq!(canvas.arrows().count(), 0);
    }
}
