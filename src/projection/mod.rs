//! Cumulative cost projection for manual vs. automated drafting

mod points;
mod series;

pub use points::{BreakEvenPoint, Phase, Projection, ProjectionPoint};
pub use series::{break_even_point, build_series, build_series_with};
