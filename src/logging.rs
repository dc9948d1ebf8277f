use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming the log file for interactive mode.
pub const LOG_PATH_ENV: &str = "GAMEDECK_LOG";

/// Initialize tracing for the interactive UI.
///
/// The terminal belongs to the UI, so nothing is logged unless
/// `GAMEDECK_LOG` names a file. The actual file is `{path}.{timestamp}.{pid}`
/// so concurrent instances never share one.
pub fn init_ui_tracing() {
    let Some(log_path) = std::env::var(LOG_PATH_ENV).ok() else {
        return;
    };

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

/// Initialize tracing for one-shot commands: stderr, `RUST_LOG` or `warn`.
pub fn init_cli_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}
