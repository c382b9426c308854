//! Tracing subscriber setup for embedding callers.
//!
//! When `PLANK_DEBUG_LOG` is set, everything at debug level and above is
//! appended to that file; otherwise only warnings and errors go to stderr
//! so a terminal UI owns the screen.

pub fn init() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("PLANK_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .init();
    }
    Ok(())
}
