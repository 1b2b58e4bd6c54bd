#![allow(dead_code)]
use crate::boundary::bc2d::BoundaryValues;
use crate::domain::grid2d::Grid2D;
use crate::error::SolverError;
use crate::numerical::derive::electric_field;
use crate::numerical::gauss_seidel_sweep;
use nalgebra::DMatrix;
use serde::Serialize;
use tracing::{debug, info, info_span, warn};

/// Outcome of a relaxation run.
///
/// `iterations` is the number of sweeps actually performed
/// (`1..=max_iterations`). `converged` disambiguates the case where the run
/// used every allowed sweep: a bare iteration count cannot tell "converged
/// exactly on the last sweep" from "ran out of budget". `max_diff` is the
/// largest per-cell change of the final sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolveReport {
    pub iterations: usize,
    pub converged: bool,
    pub max_diff: f64,
}

/// Gauss-Seidel solver for the 2D Laplace equation on a square grid with
/// Dirichlet boundary conditions.
///
/// Usage is configure -> resolve -> read: set the edge potentials, relax the
/// interior to (approximate) steady state, then take a potential snapshot or
/// derive the electric field. The grid persists between calls, so boundaries
/// may be reassigned and the problem re-solved on the same instance.
#[derive(Debug)]
pub struct LaplaceSolver {
    pub grid: Grid2D,
    pub bcs: BoundaryValues,
}

impl LaplaceSolver {
    /// Creates a solver over a zero-filled `n x n` grid.
    pub fn new(n: usize) -> Result<Self, SolverError> {
        Ok(Self {
            grid: Grid2D::new(n)?,
            bcs: BoundaryValues::default(),
        })
    }

    /// Assigns the four edge potentials and writes them into the grid.
    ///
    /// Interior cells are untouched, so calling this between solves reuses
    /// the previous interior as the starting guess.
    pub fn set_boundary_conditions(
        &mut self,
        left: f64,
        right: f64,
        top: f64,
        bottom: f64,
    ) -> Result<(), SolverError> {
        let bcs = BoundaryValues::new(left, right, top, bottom)?;
        self.grid.apply_dirichlet_bcs(&bcs);
        self.bcs = bcs;
        Ok(())
    }

    /// Relaxes the interior until the maximum per-sweep change drops below
    /// `tolerance` or `max_iterations` sweeps have run.
    ///
    /// Exhausting the budget is not an error; it is reported through
    /// `SolveReport::converged`. The grid is left in whatever state the last
    /// sweep produced.
    pub fn resolve(
        &mut self,
        tolerance: f64,
        max_iterations: usize,
    ) -> Result<SolveReport, SolverError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(SolverError::InvalidParameter(format!(
                "tolerance must be a positive finite number, got {}",
                tolerance
            )));
        }
        if max_iterations == 0 {
            return Err(SolverError::InvalidParameter(
                "max_iterations must be at least 1".to_string(),
            ));
        }

        let span = info_span!("resolve", n = self.grid.n, tolerance, max_iterations).entered();
        let start = std::time::Instant::now();

        let mut iterations = 0;
        let mut converged = false;
        let mut max_diff = 0.0;
        for sweep in 1..=max_iterations {
            max_diff = gauss_seidel_sweep(&mut self.grid.potential);
            iterations = sweep;
            debug!(sweep, max_diff, "completed Gauss-Seidel sweep");
            if max_diff < tolerance {
                converged = true;
                break;
            }
        }

        if converged {
            info!(
                iterations,
                max_diff,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "relaxation converged"
            );
        } else {
            warn!(
                iterations,
                max_diff,
                "relaxation exhausted iteration budget without converging"
            );
        }
        drop(span);

        Ok(SolveReport {
            iterations,
            converged,
            max_diff,
        })
    }

    /// Returns a deep copy of the current potential grid.
    pub fn potential(&self) -> DMatrix<f64> {
        self.grid.potential.clone()
    }

    /// Derives `(Ex, Ey)` from the current potential via central differences.
    ///
    /// The grid is read as-is; whether it has been relaxed to convergence is
    /// the caller's concern.
    pub fn electric_field(&self) -> (DMatrix<f64>, DMatrix<f64>) {
        electric_field(&self.grid.potential, self.grid.h)
    }
}
