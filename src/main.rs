use std::path::PathBuf;
use std::process::ExitCode;

use schedsim::config::SimulationConfig;
use schedsim::loader::load_batch;
use schedsim::models::Process;
use schedsim::scheduler::Algorithm;
use schedsim::simulation::Simulation;
use schedsim::validation::validate_batch;
use schedsim::workload::{generate, WorkloadSpec};
use schedsim::{Error, Result};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: schedsim <input-file-path> [options]
       schedsim --random <count> [--seed <seed>] [options]

Options:
  -q, --quantum <n>       Round-Robin quantum (default 2)
  -a, --algorithm <name>  fcfs | sjf | priority | rr (repeatable, comma-separated)
  -c, --config <file>     JSON configuration file
      --json              Print reports as JSON
  -h, --help              Show this message";

enum Source {
    File(PathBuf),
    Random { count: usize, seed: u64 },
}

struct Args {
    source: Source,
    quantum: Option<i64>,
    algorithms: Vec<Algorithm>,
    config: Option<PathBuf>,
    json: bool,
}

enum Parsed {
    Run(Args),
    Help,
}

fn parse_args(mut argv: impl Iterator<Item = String>) -> Result<Parsed> {
    let usage = |msg: &str| Error::Config(msg.to_string());

    let mut input: Option<PathBuf> = None;
    let mut random: Option<usize> = None;
    let mut seed: u64 = 0;
    let mut quantum = None;
    let mut algorithms = Vec::new();
    let mut config = None;
    let mut json = false;

    while let Some(arg) = argv.next() {
        let mut value = |name: &str| {
            argv.next()
                .ok_or_else(|| usage(&format!("missing value for {name}")))
        };

        match arg.as_str() {
            "-h" | "--help" => return Ok(Parsed::Help),
            "-q" | "--quantum" => {
                let v = value("--quantum")?;
                quantum = Some(
                    v.parse()
                        .map_err(|_| usage(&format!("invalid quantum '{v}'")))?,
                );
            }
            "-a" | "--algorithm" => {
                for name in value("--algorithm")?.split(',') {
                    algorithms.push(name.trim().parse()?);
                }
            }
            "-c" | "--config" => config = Some(PathBuf::from(value("--config")?)),
            "--random" => {
                let v = value("--random")?;
                // Ids are u32, so larger counts would repeat ids
                let count: u32 = v.parse().map_err(|_| usage(&format!("invalid count '{v}'")))?;
                random = Some(count as usize);
            }
            "--seed" => {
                let v = value("--seed")?;
                seed = v.parse().map_err(|_| usage(&format!("invalid seed '{v}'")))?;
            }
            "--json" => json = true,
            flag if flag.starts_with('-') => {
                return Err(usage(&format!("unknown option '{flag}'")));
            }
            path => {
                if input.replace(PathBuf::from(path)).is_some() {
                    return Err(usage("more than one input file given"));
                }
            }
        }
    }

    let source = match (input, random) {
        (Some(path), None) => Source::File(path),
        (None, Some(count)) => Source::Random { count, seed },
        (Some(_), Some(_)) => return Err(usage("an input file and --random are exclusive")),
        (None, None) => return Err(usage("missing input file")),
    };

    Ok(Parsed::Run(Args {
        source,
        quantum,
        algorithms,
        config,
        json,
    }))
}

fn build_config(args: &Args) -> Result<SimulationConfig> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_json_file(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(q) = args.quantum {
        config.quantum = q;
    }
    if !args.algorithms.is_empty() {
        config.algorithms = args.algorithms.clone();
    }
    Ok(config)
}

fn load(source: &Source) -> Result<Vec<Process>> {
    match source {
        Source::File(path) => load_batch(path),
        Source::Random { count, seed } => {
            let batch = generate(&WorkloadSpec::new(*count).with_seed(*seed));
            validate_batch(&batch)?;
            Ok(batch)
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = build_config(&args)?;
    let batch = load(&args.source)?;
    let simulation = Simulation::new(batch, config)?;
    let reports = simulation.run_all()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!("\n{report}");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(Parsed::Run(args)) => args,
        Ok(Parsed::Help) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("{e}\n\n{USAGE}");
            return ExitCode::from(1);
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "simulation failed");
            eprintln!("error: {e}");
            ExitCode::from(1)
        }
    }
}
