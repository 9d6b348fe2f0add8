use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Workday calendar HTTP service.
#[derive(Parser)]
#[command(
    name = "workday-calendar",
    version,
    about = "Workday arithmetic over configurable work hours and holidays"
)]
pub struct Cli {
    /// Directory holding work_hours.yaml and holidays.yaml.
    #[arg(short, long, default_value = "./config/default")]
    pub config: PathBuf,

    /// Address the HTTP server listens on.
    #[arg(short, long, default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
