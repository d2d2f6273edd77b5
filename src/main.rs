//! Terminal tile walker (default binary).
//!
//! Loads the built-in map, then walks the `@` marker around with the arrow
//! keys until `q`, `Esc` or `Ctrl-C`. Logs go to a file because the terminal
//! is in raw mode on the alternate screen.

use std::path::PathBuf;

use anyhow::Result;
use crossterm::event::{self, Event};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use tile_walker::core::{Grid, MovementController, SAMPLE_MAP};
use tile_walker::input::{handle_key_event, should_quit};
use tile_walker::term::{FrameBuffer, MapView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let _guard = setup_logging()?;

    // Map and spawn problems abort before the terminal is touched.
    let grid = Grid::parse(SAMPLE_MAP)?;
    let mut game = MovementController::new(grid)?;
    tracing::info!(
        width = game.grid().width(),
        height = game.grid().height(),
        "map loaded"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        tracing::warn!("failed to restore terminal: {err:#}");
    }
    if let Err(err) = &result {
        tracing::error!("exiting with error: {err:#}");
    } else {
        let player = game.player();
        tracing::info!(x = player.x, y = player.y, "quit");
    }
    result
}

fn run(term: &mut TerminalRenderer, game: &mut MovementController) -> Result<()> {
    let view = MapView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game.current_state(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(direction) = handle_key_event(key) {
                    game.handle_input(direction);
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}

/// Send logs to `tile-walker.log` in the platform cache directory.
///
/// The returned guard flushes the background writer when dropped, so it must
/// live until `main` returns.
fn setup_logging() -> Result<WorkerGuard> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "tile-walker.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!("Log file: {}", log_dir.join("tile-walker.log").display());
    Ok(guard)
}

/// Get the platform-specific log directory
fn get_log_directory() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Caches")
                .join("tile-walker")
                .join("logs");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(xdg_cache) = std::env::var_os("XDG_CACHE_HOME") {
            return PathBuf::from(xdg_cache).join("tile-walker").join("logs");
        } else if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".cache")
                .join("tile-walker")
                .join("logs");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(local_appdata) = std::env::var_os("LOCALAPPDATA") {
            return PathBuf::from(local_appdata).join("tile-walker").join("logs");
        }
    }

    // Fallback
    std::env::temp_dir().join("tile-walker").join("logs")
}
