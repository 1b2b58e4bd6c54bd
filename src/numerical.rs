pub mod derive;

use nalgebra::DMatrix;

/// Performs one in-place Gauss-Seidel sweep over the interior of `v` and
/// returns the maximum absolute per-cell change.
///
/// Interior cells `(i, j)` with `i, j in 1..n-1` are visited in row-major
/// order and replaced by the arithmetic mean of their four neighbors.
/// Updates are immediately visible to later cells in the same sweep, which
/// is what distinguishes Gauss-Seidel from Jacobi: no copy of the previous
/// sweep is kept. Boundary cells are never written.
///
/// A grid without interior cells (n < 3) yields a zero-change sweep.
pub fn gauss_seidel_sweep(v: &mut DMatrix<f64>) -> f64 {
    let n = v.nrows();
    debug_assert_eq!(n, v.ncols(), "potential grid must be square");

    let mut max_diff = 0.0_f64;
    if n < 3 {
        return max_diff;
    }

    for i in 1..n - 1 {
        for j in 1..n - 1 {
            let old_val = v[(i, j)];
            let new_val =
                0.25 * (v[(i + 1, j)] + v[(i - 1, j)] + v[(i, j + 1)] + v[(i, j - 1)]);
            v[(i, j)] = new_val;
            max_diff = max_diff.max((new_val - old_val).abs());
        }
    }

    max_diff
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::dmatrix;

    #[test]
    fn test_sweep_single_interior_cell() {
        let mut v = dmatrix![
            0.0, 1.0, 0.0;
            2.0, 0.0, 4.0;
            0.0, 3.0, 0.0
        ];
        let diff = gauss_seidel_sweep(&mut v);
        assert_relative_eq!(v[(1, 1)], 2.5, epsilon = 1e-12);
        assert_relative_eq!(diff, 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_sweep_uses_updated_neighbors() {
        // Row-major order: (1,1) is updated before (1,2), so (1,2) must see
        // the fresh value of its left neighbor, not the initial one.
        let mut v = dmatrix![
            8.0, 8.0, 8.0, 8.0;
            0.0, 0.0, 0.0, 0.0;
            0.0, 0.0, 0.0, 0.0;
            0.0, 0.0, 0.0, 0.0
        ];
        gauss_seidel_sweep(&mut v);
        // (1,1): (0 + 8 + 0 + 0)/4 = 2; (1,2): (0 + 8 + 0 + 2)/4 = 2.5
        assert_relative_eq!(v[(1, 1)], 2.0, epsilon = 1e-12);
        assert_relative_eq!(v[(1, 2)], 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_sweep_preserves_boundary() {
        let mut v = DMatrix::<f64>::zeros(5, 5);
        for j in 0..5 {
            v[(0, j)] = 1.0;
            v[(4, j)] = 2.0;
        }
        gauss_seidel_sweep(&mut v);
        for j in 0..5 {
            assert_eq!(v[(0, j)], 1.0);
            assert_eq!(v[(4, j)], 2.0);
        }
    }

    #[test]
    fn test_sweep_fixed_point_has_zero_change() {
        // A linear field satisfies the five-point stencil exactly.
        let mut v = DMatrix::<f64>::from_fn(6, 6, |i, j| 2.0 * i as f64 + 3.0 * j as f64);
        let diff = gauss_seidel_sweep(&mut v);
        assert_relative_eq!(diff, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sweep_empty_interior() {
        let mut v = dmatrix![
            1.0, 2.0;
            3.0, 4.0
        ];
        let before = v.clone();
        let diff = gauss_seidel_sweep(&mut v);
        assert_eq!(diff, 0.0);
        assert_eq!(v, before);
    }
}
