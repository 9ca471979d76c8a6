use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use cpu_sched_sim::loader::{LoadError, Workload};
use cpu_sched_sim::report;
use cpu_sched_sim::scheduler::Algorithm;
use cpu_sched_sim::simulation::Simulator;
use cpu_sched_sim::workload::WorkloadGenerator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AlgorithmArg {
    Fcfs,
    Srt,
    Rr,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Simulate FCFS, SRT and Round-Robin CPU scheduling.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Workload file (`n quantum` then `n` lines of `arrival burst`, or .json)
    #[arg(required_unless_present = "random")]
    input: Option<PathBuf>,

    /// Override the Round-Robin quantum from the workload
    #[arg(short, long)]
    quantum: Option<i64>,

    /// Which discipline(s) to run
    #[arg(short, long, value_enum, default_value_t = AlgorithmArg::All)]
    algorithm: AlgorithmArg,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Merge contiguous Gantt slices of the same process
    #[arg(long)]
    coalesce: bool,

    /// Generate a random workload with this many processes instead of reading one
    #[arg(long, conflicts_with = "input")]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long, default_value_t = 42, requires = "random")]
    seed: u64,
}

fn load_workload(cli: &Cli) -> Result<Workload, LoadError> {
    // clap guarantees one of `input` / `--random`
    let workload = match &cli.input {
        Some(path) => Workload::load(path)?,
        None => {
            let mut rng = SmallRng::seed_from_u64(cli.seed);
            WorkloadGenerator::new(cli.random.unwrap_or_default()).generate(&mut rng)
        }
    };

    match cli.quantum {
        Some(quantum) => {
            let workload = workload.with_quantum(quantum);
            workload.validate().map_err(LoadError::Invalid)?;
            Ok(workload)
        }
        None => Ok(workload),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let workload = match load_workload(&cli) {
        Ok(workload) => workload,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut simulator = Simulator::from_workload(&workload);
    let results = match cli.algorithm {
        AlgorithmArg::All => simulator.run_all(),
        AlgorithmArg::Fcfs => vec![simulator.run(Algorithm::Fcfs)],
        AlgorithmArg::Srt => vec![simulator.run(Algorithm::Srt)],
        AlgorithmArg::Rr => vec![simulator.run(Algorithm::round_robin(workload.quantum))],
    };

    match cli.format {
        OutputFormat::Text => {
            for result in &results {
                print!("{}", report::render_text(result, cli.coalesce));
            }
        }
        OutputFormat::Json => match report::render_json(&results) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("Error: {err}");
                return ExitCode::FAILURE;
            }
        },
    }

    ExitCode::SUCCESS
}
