use crate::error::{GeometryError, Result};

/// Whether an interval endpoint includes its boundary value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The boundary value is excluded.
    Open,
    /// The boundary value is included.
    Closed,
}

impl Bound {
    /// Returns whether this endpoint includes its boundary value.
    #[must_use]
    pub fn is_closed(self) -> bool {
        matches!(self, Bound::Closed)
    }
}

/// A real interval with independently open or closed endpoints.
///
/// A point interval (`lower == upper`) is non-empty only when both
/// endpoints are closed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    lower: f64,
    upper: f64,
    left: Bound,
    right: Bound,
}

impl Interval {
    /// Creates a new interval.
    ///
    /// # Errors
    ///
    /// Returns an error if `lower > upper` or either bound is NaN.
    pub fn new(lower: f64, upper: f64, left: Bound, right: Bound) -> Result<Self> {
        if lower.is_nan() || upper.is_nan() {
            return Err(GeometryError::Degenerate("interval bound is NaN".into()).into());
        }
        if lower > upper {
            return Err(GeometryError::Degenerate(format!(
                "interval lower bound {lower} exceeds upper bound {upper}"
            ))
            .into());
        }
        Ok(Self {
            lower,
            upper,
            left,
            right,
        })
    }

    /// Creates the closed interval `[lower, upper]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the bounds are invalid.
    pub fn closed(lower: f64, upper: f64) -> Result<Self> {
        Self::new(lower, upper, Bound::Closed, Bound::Closed)
    }

    /// Creates the open interval `(lower, upper)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the bounds are invalid.
    pub fn open(lower: f64, upper: f64) -> Result<Self> {
        Self::new(lower, upper, Bound::Open, Bound::Open)
    }

    /// Creates the half-open interval `[lower, upper)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the bounds are invalid.
    pub fn closed_open(lower: f64, upper: f64) -> Result<Self> {
        Self::new(lower, upper, Bound::Closed, Bound::Open)
    }

    /// Creates the half-open interval `(lower, upper]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the bounds are invalid.
    pub fn open_closed(lower: f64, upper: f64) -> Result<Self> {
        Self::new(lower, upper, Bound::Open, Bound::Closed)
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns the openness of the left endpoint.
    #[must_use]
    pub fn left(&self) -> Bound {
        self.left
    }

    /// Returns the openness of the right endpoint.
    #[must_use]
    pub fn right(&self) -> Bound {
        self.right
    }

    /// Returns whether the interval contains no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lower == self.upper && !(self.left.is_closed() && self.right.is_closed())
    }

    /// Returns whether `x` belongs to the interval under its openness
    /// flags. Boundary-exact, no tolerance.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        let left_ok = match self.left {
            Bound::Open => x > self.lower,
            Bound::Closed => x >= self.lower,
        };
        let right_ok = match self.right {
            Bound::Open => x < self.upper,
            Bound::Closed => x <= self.upper,
        };
        left_ok && right_ok
    }

    /// Returns the membership mask of `xs` against this interval.
    #[must_use]
    pub fn classify(&self, xs: &[f64]) -> Vec<bool> {
        xs.iter().map(|&x| self.contains(x)).collect()
    }
}
