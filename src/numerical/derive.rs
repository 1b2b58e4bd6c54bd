use nalgebra::DMatrix;

/// Derives the electric field `E = -grad V` from a potential grid with
/// spacing `h`, using central differences on the interior.
///
/// For interior cells:
///
/// ```text
/// Ex[i][j] = -(V[i+1][j] - V[i-1][j]) / (2h)
/// Ey[i][j] = -(V[i][j+1] - V[i][j-1]) / (2h)
/// ```
///
/// Border cells have no symmetric neighbor pair, so the outer ring of both
/// components is zero-filled. That policy is part of the contract: callers
/// plotting the field can rely on exact zeros on the ring rather than a
/// lower-order one-sided estimate.
///
/// The potential is read as-is; no convergence state is assumed.
pub fn electric_field(v: &DMatrix<f64>, h: f64) -> (DMatrix<f64>, DMatrix<f64>) {
    let n = v.nrows();
    debug_assert_eq!(n, v.ncols(), "potential grid must be square");

    let mut ex = DMatrix::<f64>::zeros(n, n);
    let mut ey = DMatrix::<f64>::zeros(n, n);
    if n < 3 {
        return (ex, ey);
    }

    let inv_2h = 1.0 / (2.0 * h);
    for i in 1..n - 1 {
        for j in 1..n - 1 {
            ex[(i, j)] = -(v[(i + 1, j)] - v[(i - 1, j)]) * inv_2h;
            ey[(i, j)] = -(v[(i, j + 1)] - v[(i, j - 1)]) * inv_2h;
        }
    }

    (ex, ey)
}
