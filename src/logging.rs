use crate::config::logs_dir;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Environment variable consulted when no `--log-level` is given
pub const LOG_ENV: &str = "TASKDESK_LOG";

/// Set up file logging under `<taskdesk dir>/logs/`.
///
/// The terminal is owned by the TUI, so nothing goes to stdout/stderr.
/// The returned guard flushes the writer when dropped; hold it for the
/// life of the process. Returns `None` if the log directory is unusable.
pub fn init_logging(log_level: Option<&str>) -> Option<WorkerGuard> {
    let dir = logs_dir().ok()?;

    let file_appender = tracing_appender::rolling::daily(&dir, "taskdesk.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let subscriber = tracing_subscriber::registry()
        .with(build_env_filter(log_level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        );

    // Already set (tests, embedding): keep the guard anyway
    let _ = tracing::subscriber::set_global_default(subscriber);

    Some(guard)
}

/// Precedence: explicit level > TASKDESK_LOG > "warn"
fn build_env_filter(log_level: Option<&str>) -> EnvFilter {
    if let Some(level) = log_level {
        if let Ok(filter) = EnvFilter::try_new(level) {
            return filter;
        }
    }
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_level_wins() {
        let filter = build_env_filter(Some("debug"));
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn test_taskdesk_scoped_directive() {
        let filter = build_env_filter(Some("taskdesk=trace"));
        assert_eq!(filter.to_string(), "taskdesk=trace");
    }
}
