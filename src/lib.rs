pub mod app;
pub mod button;
pub mod clipboard;
pub mod config;
pub mod driver;
pub mod error;
pub mod event_log;
pub mod history;
pub mod input;
pub mod logging;
pub mod theme;
pub mod ui;
pub mod windows;

pub use app::{Intent, Playground, PlaygroundSettings, PlaygroundState};
pub use error::{AppError, AppResult};

/// Entrypoint used by the `susplay` binary: drives one session from stdin.
pub fn run() -> AppResult<()> {
    logging::init();
    tracing::info!("starting susplay");

    let config = config::load_app_config();
    let mut playground = Playground::new(config.settings());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let report = driver::run_session(&mut playground, stdin.lock(), stdout.lock())?;

    tracing::info!(
        dispatched = report.dispatched,
        version = playground.state().version(),
        "session complete"
    );
    Ok(())
}
