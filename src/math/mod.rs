pub mod bracket;
pub mod interval;

pub use bracket::upper_bracket;
pub use interval::{Bound, Interval};

/// Complex number representing a point in the plane
/// (real part = x, imaginary part = y).
pub type Complex = nalgebra::Complex<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
