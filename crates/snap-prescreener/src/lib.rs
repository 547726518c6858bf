pub mod config;
pub mod error;
pub mod prescreener;
pub mod telemetry;
