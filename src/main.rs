use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use uniflow::config::Config;
use uniflow::counter::{CounterReducer, CounterState};
use uniflow::devtools::DispatchRecorder;
use uniflow::flow::{Enhancer, Store};
use uniflow::logging::init_tracing;
use uniflow::ui::{run, App};

/// Terminal demo for the uniflow counter store.
#[derive(Debug, Parser)]
#[command(name = "uniflow", version, about = "Unidirectional counter store demo")]
struct Cli {
    /// Path to a config file (default: platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Starting count, overriding the config file.
    #[arg(long)]
    count: Option<u64>,

    /// Force the devtools history panel on or off.
    #[arg(long)]
    devtools: Option<bool>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load configuration")?;

    if let Some(count) = cli.count {
        config.demo.initial_count = count;
    }
    if let Some(devtools) = cli.devtools {
        config.devtools.enabled = devtools;
    }
    config
        .validate()
        .context("invalid configuration after CLI overrides")?;

    let initial = CounterState::with_count(config.demo.initial_count);
    let (store, recorder) = if config.devtools.enabled {
        let recorder = Arc::new(DispatchRecorder::new(config.devtools.history_limit));
        let enhancer: Arc<dyn Enhancer<CounterReducer>> = recorder.clone();
        (
            Store::with_state_and_enhancer(initial, enhancer),
            Some(recorder),
        )
    } else {
        (Store::with_state(initial), None)
    };

    let app = App::new(store, recorder);
    let tick_rate = Duration::from_millis(config.demo.tick_rate_ms);
    run(app, tick_rate).context("terminal UI failed")?;
    Ok(())
}
