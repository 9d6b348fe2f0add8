mod cli;
mod logging;

use std::error::Error;
use std::process;

use clap::Parser;
use tracing::info;

use workday_calendar::api::{AppState, create_router};
use workday_calendar::config::ConfigLoader;
use workday_calendar::models::WorkHourProvider;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let calendar = ConfigLoader::load(&cli.config)?.into_calendar();
    info!(
        config = %cli.config.display(),
        work_window = %calendar.work_window(),
        holidays = calendar.holidays().len(),
        "Configuration loaded"
    );

    let router = create_router(AppState::new(calendar));
    let listener = tokio::net::TcpListener::bind(cli.bind).await?;
    info!(address = %listener.local_addr()?, "Listening");

    axum::serve(listener, router).await?;
    Ok(())
}
