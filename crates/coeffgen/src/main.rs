use anyhow::{bail, Context};
use clap::Parser;
use coeffgen::emit::{EmitConfig, Target};
use coeffgen::{Output, Scenario};
use tracing_subscriber::EnvFilter;

/// Prints polynomial coefficients for a minimal multi-view solver.
#[derive(Debug, Parser)]
#[command(author, version, about = "Derives closed-form polynomial coefficients")]
struct Args {
    /// Equation to eliminate: fundamental, fundamental-convex or panography.
    #[arg(long, default_value_t = Scenario::Fundamental)]
    scenario: Scenario,

    /// Output language: c, rust or python.
    #[arg(long, default_value_t = Target::C)]
    target: Target,

    /// Name of the emitted array.
    #[arg(long, default_value = "P")]
    array_name: String,

    /// Replaces the default comment line.
    #[arg(long)]
    comment: Option<String>,

    /// Fails instead of warning when the leading coefficient vanishes.
    #[arg(long)]
    strict: bool,

    /// Lists the available scenarios and exits.
    #[arg(long)]
    list: bool,

    /// Raises log verbosity on stderr (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn list_scenarios() -> String {
    Scenario::ALL
        .iter()
        .map(|s| format!("{:<20}{}\n", s.name(), s.description()))
        .collect()
}

fn main() {
    match try_main() {
        Ok(text) => print!("{text}"),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn try_main() -> anyhow::Result<String> {
    let args = Args::parse();
    init_tracing(args.verbose);
    execute(args)
}

/// Produces the complete stdout text; nothing is printed on failure.
fn execute(args: Args) -> anyhow::Result<String> {
    if args.list {
        return Ok(list_scenarios());
    }

    let scenario = args.scenario;
    let config = EmitConfig {
        array_name: args.array_name,
        comment: args.comment,
        target: args.target,
        ..EmitConfig::default()
    };

    let output =
        coeffgen::run(scenario, &config).with_context(|| format!("scenario `{scenario}`"))?;
    finish(scenario, output, args.strict)
}

fn finish(scenario: Scenario, output: Output, strict: bool) -> anyhow::Result<String> {
    if strict && output.table.is_degenerate() {
        bail!(
            "scenario `{scenario}`: coefficient collector: leading coefficient of `{}^{}` vanishes identically",
            output.table.pivot(),
            output.table.max_degree()
        );
    }

    Ok(output.text)
}
