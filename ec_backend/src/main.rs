use crate::config::BackendConfig;
use ec_core::logger::init_tracing;

mod application;
mod clients;
mod config;
mod domain;
mod error;
mod server;
#[cfg(test)]
mod test_support;
mod use_cases;

fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let config = BackendConfig::from_env()?;
    server::http_server::http_server_backend(config)?;
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Application error: {e}");
        std::process::exit(1);
    }
}
