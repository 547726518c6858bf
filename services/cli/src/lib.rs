mod cli;
mod commands;
mod infra;

use snap_prescreener::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
