//! casebook - A terminal browser for customer case studies
//!
//! This is the main entry point for the casebook TUI.
//! It uses the Component Architecture pattern from ratatui.

use anyhow::{Context, Result};
use casebook::action::Action;
use casebook::app::App;
use casebook::component::Component;
use casebook::config::Config;
use casebook::tui::Tui;
use crossterm::event::Event;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logging cannot share stdout with the terminal in raw mode.
    if let Err(err) = init_logging() {
        eprintln!("Warning: logging disabled: {}", err);
    }

    // Setup terminal
    let mut tui = Tui::new()?.with_tick_rate(Duration::from_millis(100));
    tui.enter()?;

    // Create app state
    let mut app = App::new();
    app.init()?;

    // Main event loop
    let result = run_app(&mut tui, &mut app);

    // Cleanup terminal
    tui.exit()?;

    // Handle any errors
    if let Err(err) = result {
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }

    Ok(())
}

/// Route tracing output to ~/.casebook/casebook.log.
/// CASEBOOK_LOG sets the filter, defaulting to info.
fn init_logging() -> Result<()> {
    let dir = Config::config_dir().context("home directory not set")?;
    std::fs::create_dir_all(&dir)?;

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("casebook.log"))?;

    let filter = std::env::var("CASEBOOK_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit {
        // Draw the UI
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                tracing::error!(error = %e, "draw failed");
            }
        })?;

        // Poll for events
        if let Some(event) = tui.next_event()? {
            // Convert event to action
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // Process the action
            if let Some(action) = action {
                // Action might produce a follow-up action
                let mut current_action = Some(action);
                while let Some(a) = current_action {
                    current_action = app.update(a)?;
                }
            }
        } else {
            // No event - send a tick for time-based updates
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}
