use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use projectile_sim::config::AppConfig;
use projectile_sim::interpret;
use projectile_sim::io::csv;
use projectile_sim::io::json::{self, FlightSummary};
use projectile_sim::physics::{Environment, ENVIRONMENTS};
use projectile_sim::scenario::{presets, ParameterSet};
use projectile_sim::sim::event::{self, EventKind};
use projectile_sim::sim::{self, query, SimulationResult};

/// Simulate a projectile launch and print its flight report
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to configuration file (TOML format)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Start from a sample scenario (oblique, horizontal, cliff)
    #[arg(long, value_name = "ID")]
    preset: Option<String>,

    /// Take parameters from a scenario interpreter reply (JSON)
    #[arg(long, value_name = "FILE", conflicts_with = "preset")]
    response: Option<PathBuf>,

    /// Initial speed, m/s
    #[arg(long, value_name = "M/S", allow_hyphen_values = true)]
    velocity: Option<f64>,

    /// Launch angle above horizontal, degrees
    #[arg(long, value_name = "DEG", allow_hyphen_values = true)]
    angle: Option<f64>,

    /// Gravitational acceleration, m/s^2
    #[arg(short = 'g', long, value_name = "M/S2", allow_hyphen_values = true)]
    gravity: Option<f64>,

    /// Take gravity from a preset world (earth, moon, mars, jupiter)
    #[arg(short = 'e', long, value_name = "WORLD", value_parser = parse_environment, conflicts_with = "gravity")]
    environment: Option<Environment>,

    /// Object mass, kg
    #[arg(long, value_name = "KG", allow_hyphen_values = true)]
    mass: Option<f64>,

    /// Launch height above ground, m
    #[arg(long = "height", value_name = "M", allow_hyphen_values = true)]
    initial_height: Option<f64>,

    /// Enable linear air resistance
    #[arg(long)]
    air_resistance: bool,

    /// Run the launch on every preset world and compare
    #[arg(long)]
    compare: bool,

    /// Report each pass through this height above ground (repeatable)
    #[arg(long = "cross-height", value_name = "M", allow_hyphen_values = true)]
    cross_height: Vec<f64>,

    /// Print the sample shown at this playback time (repeatable)
    #[arg(long = "at", value_name = "SECONDS")]
    at: Vec<f64>,

    /// Number of rows in the trajectory table (0 hides it)
    #[arg(long, value_name = "COUNT", default_value_t = 20)]
    rows: usize,

    /// Write the trajectory to CSV
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Write the flight summary to JSON
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_environment(name: &str) -> Result<Environment, String> {
    Environment::by_name(name).copied().ok_or_else(|| {
        let known: Vec<String> = ENVIRONMENTS.iter().map(|e| e.name.to_lowercase()).collect();
        format!("unknown environment '{name}' (expected one of: {})", known.join(", "))
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AppConfig::default(),
    };
    debug!(?config, "configuration resolved");

    let (params, derivation) = resolve_parameters(&cli, &config)?;
    let result = sim::try_integrate_with(&params, &config.simulation)
        .context("invalid launch parameters")?;

    print_report(&params, &result, derivation.as_deref(), &cli.cross_height, cli.rows);

    if !cli.at.is_empty() {
        print_queries(&result, &cli.at);
    }

    if cli.compare {
        let runs = sim::compare_environments(&params, &ENVIRONMENTS, &config.simulation);
        print_comparison(&runs);
    }

    if let Some(path) = &cli.csv {
        csv::write_trajectory_file(path, result.trajectory())
            .with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "trajectory exported");
        println!("  Exported trajectory: {}", path.display());
    }
    if let Some(path) = &cli.json {
        let summary = FlightSummary::from_result(&result);
        json::write_summary_file(path, &params, &summary)
            .with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "summary exported");
        println!("  Exported summary: {}", path.display());
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Config launch, then preset or interpreter reply, then individual flags.
fn resolve_parameters(cli: &Cli, config: &AppConfig) -> Result<(ParameterSet, Option<String>)> {
    let mut params = config.launch;
    let mut derivation = None;

    if let Some(id) = &cli.preset {
        let category = presets::by_id(id).with_context(|| format!("unknown preset '{id}'"))?;
        info!(preset = category.id, prompt = category.prompt, "using sample scenario");
        params = category.parameters;
    }

    if let Some(path) = &cli.response {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading interpreter reply {}", path.display()))?;
        let interpretation = interpret::parse_response(&text)
            .context("scenario interpretation failed")?
            .with_air_resistance(params.air_resistance);
        params = interpretation.parameters;
        if !interpretation.derivation.is_empty() {
            derivation = Some(interpretation.derivation);
        }
    }

    if let Some(v) = cli.velocity {
        params.velocity = v;
    }
    if let Some(v) = cli.angle {
        params.angle = v;
    }
    if let Some(v) = cli.gravity {
        params.gravity = v;
    }
    if let Some(env) = cli.environment {
        params.gravity = env.gravity;
    }
    if let Some(v) = cli.mass {
        params.mass = v;
    }
    if let Some(v) = cli.initial_height {
        params.initial_height = v;
    }
    if cli.air_resistance {
        params.air_resistance = true;
    }

    Ok((params, derivation))
}

const RULE: &str = "====================================================================";
const THIN: &str = "──────────────────────────────────────────────────────────────────";

fn print_report(
    params: &ParameterSet,
    result: &SimulationResult,
    derivation: Option<&str>,
    heights: &[f64],
    rows: usize,
) {
    println!();
    println!("{RULE}");
    println!(
        "  PROJECTILE FLIGHT: {} (g = {:.2} m/s^2)",
        Environment::label_for(params.gravity),
        params.gravity
    );
    println!("{RULE}");
    println!();

    println!("  Launch Parameters");
    println!("  {THIN}");
    println!(
        "  Velocity:      {:>8.2} m/s   Angle:        {:>8.2} deg",
        params.velocity, params.angle
    );
    println!(
        "  Mass:          {:>8.2} kg    Height:       {:>8.2} m",
        params.mass, params.initial_height
    );
    println!(
        "  Air drag:      {:>8}",
        if params.air_resistance { "on" } else { "off" }
    );
    println!();

    if let Some(text) = derivation {
        println!("  Derivation");
        println!("  {THIN}");
        for line in text.lines() {
            println!("  {line}");
        }
        println!();
    }

    println!("  Flight Events");
    println!("  {THIN}");
    for ev in event::crossing_events(result, heights) {
        let label = match ev.kind {
            EventKind::Launch => "LAUNCH",
            EventKind::Apex => "APEX",
            EventKind::GroundContact => "LANDING",
            EventKind::Cutoff => "CUTOFF",
            EventKind::Height { ascending: true, .. } => "RISE",
            EventKind::Height { ascending: false, .. } => "FALL",
        };
        println!(
            "  {:<8}  t={:>7.2}s   x={:>9.2}m   y={:>8.2}m   v={:>7.2}m/s",
            label, ev.time, ev.sample.x, ev.sample.y, ev.sample.v
        );
    }
    println!();

    println!("  Performance Summary");
    println!("  {THIN}");
    println!("  Max height:    {:>9.2} m", result.max_height());
    println!("  Range:         {:>9.2} m", result.range());
    println!("  Flight time:   {:>9.2} s", result.time_of_flight());
    println!();

    if rows > 0 {
        print_table(result, rows);
    }

    println!("  Simulation: {} samples", result.len());
    println!("{RULE}");
    println!();
}

fn print_table(result: &SimulationResult, rows: usize) {
    println!("  Trajectory");
    println!("  {THIN}");
    println!(
        "  {:>7}  {:>9}  {:>9}  {:>9}  {:>8}  {:>8}",
        "t (s)", "x (m)", "y (m)", "v (m/s)", "vx", "vy"
    );
    println!("  {}", "─".repeat(60));

    let samples = result.trajectory();
    let interval = (samples.len() / rows).max(1);
    for (i, s) in samples.iter().enumerate() {
        if i % interval != 0 && i != samples.len() - 1 {
            continue;
        }
        println!(
            "  {:>7.2}  {:>9.2}  {:>9.2}  {:>9.2}  {:>8.2}  {:>8.2}",
            s.t, s.x, s.y, s.v, s.vx, s.vy
        );
    }
    println!();
}

fn print_queries(result: &SimulationResult, times: &[f64]) {
    println!("  Playback Samples");
    println!("  {THIN}");
    for &t in times {
        let idx = query::progress_index(result, t);
        let s = query::sample_at(result, t);
        println!(
            "  at {:>7.2}s -> #{:<5} t={:>6.2}s  x={:>8.2}m  y={:>7.2}m  v={:>6.2}m/s",
            t, idx, s.t, s.x, s.y, s.v
        );
    }
    println!();
}

fn print_comparison(runs: &[sim::Comparison]) {
    println!("  Environment Comparison");
    println!("  {THIN}");
    println!(
        "  {:<8}  {:>7}  {:>10}  {:>10}  {:>9}  {:>9}",
        "world", "g", "height (m)", "range (m)", "time (s)", "impact"
    );
    for run in runs {
        let r = &run.result;
        println!(
            "  {:<8}  {:>7.2}  {:>10.2}  {:>10.2}  {:>9.2}  {:>9.2}",
            run.environment.name,
            run.environment.gravity,
            r.max_height(),
            r.range(),
            r.time_of_flight(),
            r.last().v
        );
    }
    println!();
}
