// src/main.rs
use std::process::ExitCode;

use cstep_greeks::error::{GreeksError, GreeksResult};
use cstep_greeks::math_utils::Timer;
use cstep_greeks::output::write_sweep_to_csv;
use cstep_greeks::sweep::{run_sweep, ScenarioParams, StepGrid};

fn run_validation_sweep(
    params: ScenarioParams,
    grid: &StepGrid,
    filename: &str,
) -> GreeksResult<()> {
    let records = run_sweep(&params, grid)?;
    write_sweep_to_csv(filename, &records).map_err(|e| GreeksError::OutputError {
        filename: filename.to_string(),
        reason: e.to_string(),
    })?;
    println!("  File {} generated.", filename);
    Ok(())
}

fn main() -> ExitCode {
    println!("-- Black-Scholes Greeks validation sweeps --");

    let grid = StepGrid::default();

    let scenarios = [
        (
            "scenario 1",
            // At-the-money, 20% vol, one year
            ScenarioParams {
                s: 100.0,
                k: 100.0,
                r: 0.0,
                q: 0.0,
                sigma: 0.20,
                t: 1.0,
            },
            "bs_fd_vs_complex_scenario1.csv",
        ),
        (
            "scenario 2",
            // Near expiry, low vol: the stress case for the stable primitives
            ScenarioParams {
                s: 100.0,
                k: 100.0,
                r: 0.0,
                q: 0.0,
                sigma: 0.01,
                t: 1.0 / 365.0,
            },
            "bs_fd_vs_complex_scenario2.csv",
        ),
    ];

    let timer = Timer::new();
    let mut failed: Vec<&str> = Vec::new();
    for (name, params, filename) in scenarios {
        if let Err(e) = run_validation_sweep(params, &grid, filename) {
            eprintln!("Error: {}", e);
            failed.push(name);
        }
    }

    println!("  Validation sweeps complete in {:.1} ms.", timer.elapsed_ms());
    if failed.is_empty() {
        println!("-- Exiting program --");
        ExitCode::SUCCESS
    } else {
        let which = if failed.len() == scenarios.len() {
            "both scenarios".to_string()
        } else {
            failed.join(" and ")
        };
        println!("    Failure running {}", which);
        println!("-- Exiting program --");
        ExitCode::FAILURE
    }
}
