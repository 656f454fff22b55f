use clap::Parser;
use schedsim::{input, report, Fcfs, Priority, RoundRobin, Sim, Sjf};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// Batch CPU-scheduling simulator.
///
/// Runs FCFS, SJF, Priority and Round-Robin over the same workload and
/// prints one report per policy.
#[derive(Debug, Parser)]
#[command(name = "schedsim", version)]
struct Cli {
    /// Workload file: one `pid arrival burst priority` line per process.
    input: PathBuf,

    /// Round-robin time quantum in ticks.
    #[arg(long, default_value_t = 2)]
    quantum: u64,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("schedsim: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> schedsim::Result<()> {
    let round_robin = RoundRobin::new(cli.quantum)?;
    let workload = input::load(&cli.input)?;
    info!(
        processes = workload.len(),
        input = %cli.input.display(),
        "workload loaded"
    );

    let sim = Sim::new(workload);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    report::render(&mut out, &sim.run(&Fcfs))?;
    report::render(&mut out, &sim.run(&Sjf))?;
    report::render(&mut out, &sim.run(&Priority))?;
    report::render(&mut out, &sim.run(&round_robin))?;
    out.flush()?;

    Ok(())
}
