use std::fmt;

use clap::{Parser, ValueEnum};
use kc_core::KcError;
use kc_kinematics::{Projection, Scenario, project};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "kc-cli")]
#[command(
    about = "Kinematics calculator - velocity, distance and fuel projection for the built-in vehicle scenario",
    long_about = None
)]
struct Cli {
    /// Output format for the projection
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Also report the scenario inputs
    #[arg(long)]
    show_inputs: bool,
    /// Log every computed value to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Yaml,
}

#[derive(thiserror::Error)]
enum CliError {
    #[error("{} computation failed: {0}", .0.computation())]
    Kinematics(#[from] KcError),

    #[error("Failed to serialize report as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to serialize report as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

// `main` reports errors through `Debug`; show the readable message instead.
impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

type CliResult<T> = Result<T, CliError>;

#[derive(Serialize)]
struct Report<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    scenario: Option<&'a Scenario>,
    projection: &'a Projection,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let output = run(&Scenario::baseline(), cli.format, cli.show_inputs)?;
    println!("{output}");
    Ok(())
}

fn run(scenario: &Scenario, format: OutputFormat, show_inputs: bool) -> CliResult<String> {
    let projection = project(scenario)?;
    render(scenario, &projection, format, show_inputs)
}

fn render(
    scenario: &Scenario,
    projection: &Projection,
    format: OutputFormat,
    show_inputs: bool,
) -> CliResult<String> {
    let report = Report {
        scenario: show_inputs.then_some(scenario),
        projection,
    };

    let out = match format {
        OutputFormat::Text => match report.scenario {
            Some(s) => format!("{s}\n\n{projection}"),
            None => projection.to_string(),
        },
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
        OutputFormat::Yaml => serde_yaml::to_string(&report)?,
    };
    Ok(out)
}
