use crate::boundary::bc2d::BoundaryValues;
use crate::error::GridError;
use nalgebra::DMatrix;

/// Square potential grid for the finite-difference Laplace problem.
///
/// The domain is the unit square discretized into `n` points per side, so the
/// spacing is `h = 1 / (n - 1)`. Row index `i` runs along x (row 0 is the
/// left edge), column index `j` runs along y (column 0 is the bottom edge).
#[derive(Debug, Clone)]
pub struct Grid2D {
    pub n: usize,
    pub h: f64,
    pub potential: DMatrix<f64>,
}

impl Grid2D {
    /// Creates a zero-filled `n x n` grid.
    ///
    /// `n == 2` is accepted and degenerate: every cell lies on the boundary
    /// ring and relaxation has nothing to update.
    pub fn new(n: usize) -> Result<Self, GridError> {
        if n < 2 {
            return Err(GridError::InvalidGridSize(format!(
                "grid must be at least 2x2 to carry boundary values, got {}",
                n
            )));
        }
        Ok(Self {
            n,
            h: 1.0 / (n - 1) as f64,
            potential: DMatrix::<f64>::zeros(n, n),
        })
    }

    /// Writes the four Dirichlet edges into the potential matrix.
    ///
    /// Write order is fixed: left/right rows first, then bottom/top columns.
    /// The four corner cells are therefore owned by the bottom/top values:
    /// `(0, 0)` and `(n-1, 0)` read `bottom`, `(0, n-1)` and `(n-1, n-1)`
    /// read `top`. Interior cells are left untouched.
    pub fn apply_dirichlet_bcs(&mut self, bcs: &BoundaryValues) {
        let n = self.n;

        // Left (x = 0) and right (x = 1) edges.
        for j in 0..n {
            self.potential[(0, j)] = bcs.left;
            self.potential[(n - 1, j)] = bcs.right;
        }

        // Bottom (y = 0) and top (y = 1) edges, overwriting the corners.
        for i in 0..n {
            self.potential[(i, 0)] = bcs.bottom;
            self.potential[(i, n - 1)] = bcs.top;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::dmatrix;

    #[test]
    fn test_grid_creation() {
        let grid = Grid2D::new(5).unwrap();
        assert_eq!(grid.n, 5);
        assert_relative_eq!(grid.h, 0.25, epsilon = 1e-12);
        assert_eq!(grid.potential.nrows(), 5);
        assert_eq!(grid.potential.ncols(), 5);
        assert!(grid.potential.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_grid_creation_invalid_size() {
        assert!(Grid2D::new(0).is_err());
        assert!(Grid2D::new(1).is_err());
        assert!(Grid2D::new(2).is_ok());
    }

    #[test]
    fn test_apply_dirichlet_bcs() {
        let mut grid = Grid2D::new(4).unwrap();
        let bcs = BoundaryValues::new(1.0, 2.0, 3.0, 4.0).unwrap();
        grid.apply_dirichlet_bcs(&bcs);

        // left/right rows, bottom/top columns, corners taken by bottom/top
        let expected = dmatrix![
            4.0, 1.0, 1.0, 3.0;
            4.0, 0.0, 0.0, 3.0;
            4.0, 0.0, 0.0, 3.0;
            4.0, 2.0, 2.0, 3.0
        ];
        assert_relative_eq!(grid.potential, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_corner_ownership() {
        let mut grid = Grid2D::new(6).unwrap();
        let bcs = BoundaryValues::new(-1.0, -2.0, 30.0, 40.0).unwrap();
        grid.apply_dirichlet_bcs(&bcs);

        assert_eq!(grid.potential[(0, 0)], 40.0);
        assert_eq!(grid.potential[(5, 0)], 40.0);
        assert_eq!(grid.potential[(0, 5)], 30.0);
        assert_eq!(grid.potential[(5, 5)], 30.0);
    }

    #[test]
    fn test_bcs_leave_interior_untouched() {
        let mut grid = Grid2D::new(5).unwrap();
        grid.potential[(2, 2)] = 9.5;
        grid.apply_dirichlet_bcs(&BoundaryValues::uniform(1.0).unwrap());
        assert_eq!(grid.potential[(2, 2)], 9.5);
    }

    #[test]
    fn test_degenerate_grid_is_all_boundary() {
        let mut grid = Grid2D::new(2).unwrap();
        let bcs = BoundaryValues::new(1.0, 2.0, 3.0, 4.0).unwrap();
        grid.apply_dirichlet_bcs(&bcs);
        let expected = dmatrix![
            4.0, 3.0;
            4.0, 3.0
        ];
        assert_relative_eq!(grid.potential, expected, epsilon = 1e-12);
    }
}
