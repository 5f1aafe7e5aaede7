pub mod curve;
pub mod error;
pub mod math;
pub mod piecewise;
pub mod segment;
pub mod surface;

pub use error::{PlotError, Result};
