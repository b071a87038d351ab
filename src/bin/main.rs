use std::io;
use std::process;

use rpratt::{config::Config, repl};
use tracing_subscriber::EnvFilter;

fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("rpratt: {}", err);
            process::exit(2);
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    println!("Enter a line of code:");

    let stdin = io::stdin();
    let stdout = io::stdout();

    if let Err(err) = repl::start(stdin.lock(), stdout.lock(), &config) {
        tracing::error!(error = %err, "REPL terminated");
        eprintln!("rpratt: {}", err);
        process::exit(1);
    }
}
