use caesar_core::config::AppConfig;
use caesar_core::menu::Session;
use std::io::{stdin, stdout};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> ExitCode {
    // Logs go to stderr so they never interleave with the menu on stdout.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let config_path = AppConfig::default_path();
    let config = match AppConfig::from_file_or_default(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!(path = %config_path.display(), error = %e, "could not load config");
            eprintln!("[ERROR] Could not load config '{}': {}", config_path.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let mut session = Session::new(stdin().lock(), stdout().lock(), config);
    if let Err(e) = session.run() {
        error!(error = %e, "menu stopped");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
