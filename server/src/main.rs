use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::{error, info};

use server::access::LogAccessLog;
use server::config::{Cli, Config};
use server::error::ServerError;
use server::server::Server;
use server::{logger, shutdown};

fn main() -> ExitCode {
    logger::init(&logger::default_path());

    let cli = Cli::parse();
    let config = Config::from_cli(&cli);

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Server closed due to an error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: Config) -> Result<(), ServerError> {
    config.prepare()?;
    info!("[main] serving files from {}", config.files.display());

    let stop = shutdown::on_ctrl_c()?;
    let server = Server::bind(config, Arc::new(LogAccessLog))?;

    info!("Server is active on {}", server.local_addr()?);
    server.run(&stop)?;

    info!("Server interrupted manually, closing server");
    Ok(())
}
