//! Prism studio: the command-line host around `prism-engine`.
//!
//! The engine performs no I/O. This crate supplies saved-gradient storage,
//! clipboard access and notifications, and drives one engine per invocation.

pub mod cli;
pub mod host;
pub mod session;
pub mod store;

use anyhow::Result;
use clap::Parser;

use prism_engine::logging::{init_logging, LoggingConfig};
use prism_engine::GradientEngine;

use crate::cli::Cli;
use crate::host::{Host, LogNotifier, SystemClipboard};
use crate::session::Session;
use crate::store::JsonFileStore;

pub fn run_from_env() -> Result<()> {
    run(Cli::parse())
}

pub fn run(cli: Cli) -> Result<()> {
    init_logging(if cli.verbose { LoggingConfig::verbose() } else { LoggingConfig::default() });

    let host = Host::detached()
        .with_notifier(LogNotifier)
        .with_clipboard(SystemClipboard::default());
    host.on_enter(&serde_json::json!({ "store": cli.store.display().to_string() }));

    let store = JsonFileStore::new(cli.store);
    let mut session = Session::new(GradientEngine::new(), host, store);

    let output = session.run(cli.command)?;
    println!("{output}");
    Ok(())
}
