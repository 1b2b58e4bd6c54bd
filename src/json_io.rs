use crate::boundary::bc2d::BoundaryValues;
use crate::solver::{LaplaceSolver, SolveReport};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use tracing::info;

// --- Data structures for serialization ---

#[derive(Serialize, Debug)]
struct Metadata {
    n: usize,
    h: f64,
    boundary: BoundaryValues,
    tolerance: f64,
    max_iterations: usize,
    iterations: usize,
    converged: bool,
}

/// Full solved case: metadata plus the potential and field components,
/// flattened column-major (nalgebra's native layout).
#[derive(Serialize, Debug)]
struct SolutionOutput {
    metadata: Metadata,
    potential: Vec<f64>,
    ex: Vec<f64>,
    ey: Vec<f64>,
}

// --- Output writer ---

/// Writes a solved case to a pretty-printed JSON file for the external
/// plotting layer.
#[derive(Debug)]
pub struct SolutionWriter {
    pub output_filepath: String,
}

impl SolutionWriter {
    /// Creates a writer, ensuring the parent directory of the output file
    /// exists.
    pub fn new(output_filepath: String) -> Result<Self, io::Error> {
        let path = Path::new(&output_filepath);
        if let Some(parent_dir) = path.parent() {
            if !parent_dir.as_os_str().is_empty() {
                fs::create_dir_all(parent_dir)?;
                info!("Ensured output directory exists: {}", parent_dir.display());
            }
        }
        Ok(Self { output_filepath })
    }

    /// Serializes the solver's current potential and derived field together
    /// with the run parameters and convergence report.
    pub fn write_solution(
        &self,
        solver: &LaplaceSolver,
        report: &SolveReport,
        tolerance: f64,
        max_iterations: usize,
    ) -> Result<(), io::Error> {
        info!("Writing solution to JSON file: {}...", self.output_filepath);
        let output_start = Instant::now();

        let (ex, ey) = solver.electric_field();
        let output = SolutionOutput {
            metadata: Metadata {
                n: solver.grid.n,
                h: solver.grid.h,
                boundary: solver.bcs,
                tolerance,
                max_iterations,
                iterations: report.iterations,
                converged: report.converged,
            },
            potential: solver.grid.potential.as_slice().to_vec(),
            ex: ex.as_slice().to_vec(),
            ey: ey.as_slice().to_vec(),
        };

        let json_string = serde_json::to_string_pretty(&output).map_err(|e| {
            io::Error::new(
                io::ErrorKind::Other,
                format!("Failed to serialize solution: {}", e),
            )
        })?;
        let file = File::create(&self.output_filepath)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(json_string.as_bytes())?;
        writer.flush()?;

        info!(
            "JSON output finished in {:.2}ms",
            output_start.elapsed().as_millis()
        );
        Ok(())
    }
}
