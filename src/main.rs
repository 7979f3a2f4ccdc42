use std::process::ExitCode;

use anyhow::Result;
use planetsim::config::{Config, DEFAULT_CONFIG_FILE};
use planetsim::engine::EngineApp;
use planetsim::game::TwoBodyGame;

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "startup failed");
            println!("ERROR: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = Config::load_or_default(DEFAULT_CONFIG_FILE)?;
    let game = TwoBodyGame::new(&config);
    EngineApp::new(config.engine.clone(), game).run()
}

fn init_tracing() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }
}
