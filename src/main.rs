use analytics::{
    Calculator, ComparisonAnalyzer, FinancingAnalyzer, FlipAnalyzer, MaoAnalyzer,
    ProjectFinancingAnalyzer,
};
use anyhow::Context;
use clap::Parser;
use comfy_table::Table;
use engine::{PersistedInputs, Workbench};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod cli;
mod render;

use cli::{Cli, Commands};
use render::Report;

/// The main entry point for the Cornerstone calculators.
fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; it only supplies overrides.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = configuration::load_config_from(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;

    init_tracing(&config.logging.filter)?;
    tracing::debug!(config = %cli.config.display(), "Using configuration.");

    let workbench = Workbench::from_settings(&config.storage);
    let report = Report::new(config.report.decimal_places);

    match cli.command {
        Commands::Financing(args) => run(
            &workbench,
            FinancingAnalyzer,
            args.reset,
            |inputs| args.apply(inputs),
            |_, results| report.financing(results),
        ),
        Commands::Flip(args) => run(
            &workbench,
            FlipAnalyzer,
            args.reset,
            |inputs| args.apply(inputs),
            |_, results| report.flip(results),
        ),
        Commands::Mao(args) => run(
            &workbench,
            MaoAnalyzer,
            args.reset,
            |inputs| args.apply(inputs),
            |_, results| report.mao(results),
        ),
        Commands::Compare(args) => run(
            &workbench,
            ComparisonAnalyzer,
            args.reset,
            |inputs| args.apply(inputs),
            |inputs, results| report.comparison(inputs, results),
        ),
        Commands::Project(args) => run(
            &workbench,
            ProjectFinancingAnalyzer,
            args.reset,
            |inputs| args.apply(inputs),
            |inputs, results| report.project(inputs, results),
        ),
        Commands::ResetAll => {
            workbench.reset_all();
            println!("Cleared the saved inputs of every calculator.");
        }
    }

    Ok(())
}

/// `RUST_LOG` wins over the configured filter. Logs go to stderr so tables
/// on stdout stay clean.
fn init_tracing(configured_filter: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured_filter))
        .with_context(|| format!("Invalid logging filter '{configured_filter}'"))?;

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install the tracing subscriber")?;
    Ok(())
}

/// Opens a session, applies the command-line edits and prints either the
/// results table or the validation message.
///
/// With `reset`, the calculator goes back to its defaults and nothing is
/// calculated.
fn run<C>(
    workbench: &Workbench,
    calculator: C,
    reset: bool,
    edit: impl FnOnce(&mut C::Inputs),
    render: impl FnOnce(&C::Inputs, &C::Results) -> Table,
) where
    C: Calculator,
    C::Inputs: PersistedInputs,
{
    let mut session = workbench.open(calculator);

    if reset {
        session.reset();
        println!("Inputs restored to defaults.");
        return;
    }

    edit(session.inputs_mut());

    let outcome = session.calculate().map(|_| ());
    match outcome {
        Ok(()) => println!("{}", render(session.inputs(), session.results())),
        Err(e) => eprintln!("Error: {e}"),
    }
}
