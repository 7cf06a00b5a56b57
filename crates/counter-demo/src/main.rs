mod actions;
mod commands;
mod config;
mod logger;
mod middleware;
mod reducers;
mod store;

use anyhow::{Context, Result};
use commands::Command;
use config::AppConfig;
use redux_helpers::bind_action_creators;
use std::io::{self, BufRead, Write};

fn main() -> Result<()> {
    let loaded = AppConfig::load();
    logger::init(loaded.config.log_file.as_deref())?;
    loaded.log();
    let config = loaded.config;
    log::debug!("Starting with {:?}", config);

    let store = store::build_store(&config);
    let creators = bind_action_creators(actions::action_creators(), store.dispatch.clone())
        .context("Failed to bind action creators")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", store.state())?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        match commands::parse(&line, config.step) {
            Ok(Command::Quit) => break,
            Ok(Command::Show) => {}
            Ok(Command::Dispatch { name, amount }) => match creators.get(name) {
                Some(bound) => {
                    bound.call(amount);
                }
                None => log::warn!("No action creator named {}", name),
            },
            Err(e) => {
                log::warn!("{}", e);
                continue;
            }
        }
        writeln!(out, "{}", store.state())?;
    }

    log::info!("Final state: {}", store.state());
    Ok(())
}
