// Chunk: docs/chunks/terminal_host - ratatui/crossterm presentation layer
//!
//! noots binary: load config, take over the terminal, run the event loop.

use std::fs;
use std::io::Stdout;

use anyhow::{Context, Result};
use crossterm::event;
use noots::{Config, SessionController, TerminalHost};
use ratatui::backend::CrosstermBackend;

fn main() -> Result<()> {
    let config = Config::load().context("loading configuration")?;
    fs::create_dir_all(&config.note_path)
        .with_context(|| format!("creating note directory {}", config.note_path.display()))?;

    let log_path = noots::logging::init();
    tracing::info!(
        note_path = %config.note_path.display(),
        log = ?log_path,
        "starting noots"
    );

    let mut controller = SessionController::new(&config);
    let mut host = TerminalHost::stdout().context("setting up terminal")?;
    let result = run(&mut controller, &mut host);
    host.restore().context("restoring terminal")?;
    result
}

fn run(
    controller: &mut SessionController,
    host: &mut TerminalHost<CrosstermBackend<Stdout>>,
) -> Result<()> {
    controller.startup().apply(host);

    loop {
        if let Err(err) = host.draw() {
            // Keep the previous frame and wait for the next event.
            tracing::error!(%err, "render failed");
        }

        let raw = event::read().context("reading terminal event")?;
        let Some(session_event) = host.handle_terminal_event(raw) else {
            continue;
        };
        let intent = controller.handle(session_event, host);
        intent.apply(host);
        if intent.quit {
            tracing::info!("quitting");
            return Ok(());
        }
    }
}
