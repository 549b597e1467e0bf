use crate::demo::{run_batch, run_demo, run_report, run_score, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use credit_ai::error::AppError;
use credit_ai::scoring::{CreditHistory, FormulaVersion};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Hybrid Credit Scoring Console",
    about = "Run and demonstrate the hybrid credit scoring service from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a single customer profile
    Score(ScoreArgs),
    /// Score a CSV export of customer profiles
    Batch(BatchArgs),
    /// Print the static model validation report
    Report,
    /// Run an end-to-end demo covering scoring and reporting
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Monthly income in dollars (200-5000)
    #[arg(long)]
    pub(crate) income: i64,
    /// Total outstanding debt in dollars (0-20000)
    #[arg(long)]
    pub(crate) debt: i64,
    /// Applicant age in years (18-70)
    #[arg(long)]
    pub(crate) age: i64,
    /// Credit history band: no_history, good, bad, or excellent
    #[arg(long, value_parser = crate::infra::parse_history)]
    pub(crate) history: CreditHistory,
    /// Formula release to apply (v1, v2, or v3; defaults to the configured release)
    #[arg(long, value_parser = crate::infra::parse_formula_version)]
    pub(crate) formula_version: Option<FormulaVersion>,
    /// Emit the decision view as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// CSV file with monthly_income,total_debt,age,credit_history columns
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Formula release applied to every row (defaults to the configured release)
    #[arg(long, value_parser = crate::infra::parse_formula_version)]
    pub(crate) formula_version: Option<FormulaVersion>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Batch(args) => run_batch(args),
        Command::Report => run_report(),
        Command::Demo(args) => run_demo(args).await,
    }
}
