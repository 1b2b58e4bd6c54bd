#![allow(dead_code)]
use crate::error::BoundaryError;
use serde::Serialize;

/// Fixed Dirichlet potentials imposed on the four edges of the square domain.
///
/// Edge naming follows the physical layout: row index is the x direction
/// (row 0 = left edge, row N-1 = right edge), column index is the y direction
/// (column 0 = bottom edge, column N-1 = top edge).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct BoundaryValues {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl BoundaryValues {
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Result<Self, BoundaryError> {
        for (name, value) in [
            ("left", left),
            ("right", right),
            ("top", top),
            ("bottom", bottom),
        ] {
            if !value.is_finite() {
                return Err(BoundaryError::InvalidBoundaryCondition(format!(
                    "{} edge: value must be finite, got {}",
                    name, value
                )));
            }
        }
        Ok(Self {
            left,
            right,
            top,
            bottom,
        })
    }

    /// All four edges held at the same potential.
    pub fn uniform(value: f64) -> Result<Self, BoundaryError> {
        Self::new(value, value, value, value)
    }
}
