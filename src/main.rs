mod interactive;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use serde::Serialize;

use cpu_sched::input::{parse_json_request, parse_text};
use cpu_sched::models::{Algorithm, Schedule, Ticks};
use cpu_sched::report::Report;
use cpu_sched::scheduler::{
    simulate, IdleStrategy, PriorityMode, ScheduleKpi, SimulationRequest,
};
use cpu_sched::validation::ValidationError;
use cpu_sched::workload::WorkloadGenerator;
use interactive::Prompter;

/// Simulate CPU scheduling (FCFS, SJF, Round Robin, Priority) on a
/// discrete clock and print the results table and Gantt chart.
#[derive(Debug, Parser)]
#[command(name = "cpu-sched", version)]
struct Args {
    /// Algorithm: fcfs, sjf, rr, priority, or menu number 1-4
    #[arg(short, long)]
    algorithm: Option<Algorithm>,

    /// Round Robin time quantum
    #[arg(short, long)]
    quantum: Option<Ticks>,

    /// Workload file: text lines `arrival burst [priority]`, or a .json request
    #[arg(short, long, conflicts_with = "random")]
    input: Option<PathBuf>,

    /// Generate N random processes instead of prompting
    #[arg(long, value_name = "N")]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// How the clock moves while the CPU is idle
    #[arg(long, value_enum)]
    idle: Option<IdleArg>,

    /// Use arrival-aware priority selection instead of a static sort
    #[arg(long)]
    dynamic_priority: bool,

    /// Print the schedule and KPIs as JSON
    #[arg(long)]
    json: bool,

    /// Log scheduling decisions to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum IdleArg {
    Tick,
    Jump,
}

impl From<IdleArg> for IdleStrategy {
    fn from(arg: IdleArg) -> Self {
        match arg {
            IdleArg::Tick => IdleStrategy::Tick,
            IdleArg::Jump => IdleStrategy::Jump,
        }
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    schedule: &'a Schedule,
    kpi: &'a ScheduleKpi,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    // Keep stdout clean for the JSON document
    let prompts: Box<dyn io::Write> = if args.json {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), prompts);

    let request = build_request(&args, &mut prompter)?;
    let schedule = simulate(&request).map_err(describe_errors)?;
    info!("simulation complete, makespan {}", schedule.makespan());

    let report = Report::new(&schedule);
    if args.json {
        let output = JsonOutput {
            schedule: &schedule,
            kpi: report.kpi(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("\n{report}");
    }
    Ok(())
}

fn build_request<R, W>(args: &Args, prompter: &mut Prompter<R, W>) -> Result<SimulationRequest>
where
    R: io::BufRead,
    W: io::Write,
{
    let mut request = match (&args.input, args.random) {
        (Some(path), _) if is_json(path) => {
            let text = read_file(path)?;
            let mut request = parse_json_request(&text)
                .with_context(|| format!("parsing {}", path.display()))?;
            if let Some(algorithm) = args.algorithm {
                request.algorithm = algorithm;
            }
            request
        }
        (Some(path), _) => {
            let text = read_file(path)?;
            let processes = parse_text(&text)
                .map_err(describe_errors)
                .with_context(|| format!("parsing {}", path.display()))?;
            let algorithm = choose_algorithm(args, prompter)?;
            SimulationRequest::new(algorithm, processes)
        }
        (None, Some(count)) => {
            let processes = WorkloadGenerator::new(count).with_seed(args.seed).generate();
            let algorithm = choose_algorithm(args, prompter)?;
            SimulationRequest::new(algorithm, processes)
        }
        (None, None) => {
            let mut processes = prompter.collect_processes()?;
            let algorithm = choose_algorithm(args, prompter)?;
            if algorithm.uses_priority() {
                prompter.read_priorities(&mut processes)?;
            }
            SimulationRequest::new(algorithm, processes)
        }
    };

    if let Some(quantum) = args.quantum {
        request.quantum = Some(quantum);
    }
    if request.algorithm.needs_quantum() && request.quantum.is_none() {
        request.quantum = Some(prompter.read_quantum()?);
    }
    if let Some(idle) = args.idle {
        request.idle_strategy = idle.into();
    }
    if args.dynamic_priority {
        request.priority_mode = PriorityMode::Dynamic;
    }
    Ok(request)
}

fn choose_algorithm<R, W>(args: &Args, prompter: &mut Prompter<R, W>) -> Result<Algorithm>
where
    R: io::BufRead,
    W: io::Write,
{
    match args.algorithm {
        Some(algorithm) => Ok(algorithm),
        None => prompter.choose_algorithm(),
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn describe_errors(errors: Vec<ValidationError>) -> anyhow::Error {
    let lines: Vec<String> = errors.iter().map(ToString::to_string).collect();
    anyhow!(lines.join("\n"))
}
