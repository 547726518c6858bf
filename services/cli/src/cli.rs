use crate::commands::{run_check, run_render, run_submit, CheckArgs, RenderArgs, SubmitArgs};
use clap::{Parser, Subcommand};
use snap_prescreener::config::AppConfig;
use snap_prescreener::error::AppError;
use snap_prescreener::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "prescreener",
    about = "Validate SNAP prescreener answers, submit them for an estimate, and render results",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a set of answers and report the errors a visitor would see
    Check(CheckArgs),
    /// Validate answers and, when valid, request an eligibility estimate
    Submit(SubmitArgs),
    /// Render the results page sections for a saved engine response
    Render(RenderArgs),
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Check(args) => run_check(&config, args),
        Command::Submit(args) => run_submit(&config, args).await,
        Command::Render(args) => run_render(&config, args),
    }
}
