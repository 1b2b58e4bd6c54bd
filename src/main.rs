use solver::LaplaceSolver;
use tracing::info;

mod boundary;
mod domain;
mod error;
mod json_io;
mod numerical;
mod solver;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();

    // Canonical demonstration case: grounded box with the right edge held
    // at 10 V.
    let n = 50;
    let tolerance = 1e-5;
    let max_iterations = 10_000;

    let mut solver = LaplaceSolver::new(n)?;
    solver.set_boundary_conditions(0.0, 10.0, 0.0, 0.0)?;

    let report = solver.resolve(tolerance, max_iterations)?;
    info!(
        iterations = report.iterations,
        converged = report.converged,
        max_diff = report.max_diff,
        "solve finished"
    );

    let writer = json_io::SolutionWriter::new("output/solution.json".to_string())?;
    writer.write_solution(&solver, &report, tolerance, max_iterations)?;

    println!(
        "Solved {}x{} grid in {} iterations (converged: {})",
        n, n, report.iterations, report.converged
    );

    Ok(())
}
