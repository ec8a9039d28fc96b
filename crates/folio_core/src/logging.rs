//! Process-wide rolling file logs for portfolio sessions.
//!
//! # Responsibility
//! - Start the `flexi_logger` backend once per process.
//! - Resolve the session level from [`FolioConfig::log_level`].
//! - Capture panics as sanitized, metadata-only log events.
//!
//! # Invariants
//! - Init never panics.
//! - A second init succeeds only for the active level and directory.

use crate::config::FolioConfig;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "folio";
const LOG_FILE_MAX_BYTES: u64 = 4 * 1024 * 1024;
const LOG_FILES_KEPT: usize = 3;
const PANIC_PAYLOAD_MAX_CHARS: usize = 160;

static ACTIVE_LOGGER: OnceCell<ActiveLogger> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

/// Level and directory a logger writes with.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LogTarget {
    level: &'static str,
    dir: PathBuf,
}

impl LogTarget {
    fn parse(level: &str, log_dir: &str) -> Result<Self, String> {
        Ok(Self {
            level: normalize_level(level)?,
            dir: normalize_log_dir(log_dir)?,
        })
    }

    /// Accepts `requested` only when it matches this active target.
    fn accept(&self, requested: &LogTarget) -> Result<(), String> {
        if self.dir != requested.dir {
            return Err(format!(
                "logging already writes to `{}`; refusing to switch to `{}`",
                self.dir.display(),
                requested.dir.display()
            ));
        }
        if self.level != requested.level {
            return Err(format!(
                "logging already runs at `{}`; refusing to switch to `{}`",
                self.level, requested.level
            ));
        }
        Ok(())
    }
}

struct ActiveLogger {
    target: LogTarget,
    _handle: LoggerHandle,
}

/// Starts file logging at `level` under the absolute directory `log_dir`.
///
/// # Errors
/// - Unsupported `level`, or an empty or relative `log_dir`.
/// - The directory cannot be created or the backend fails to start.
/// - Logging already runs with another level or directory.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let requested = LogTarget::parse(level, log_dir)?;
    let active = ACTIVE_LOGGER.get_or_try_init(|| start_logger(&requested))?;
    active.target.accept(&requested)
}

/// Starts logging for a session at the configured level, or the build
/// default when the config names none.
pub fn init_session_logging(config: &FolioConfig, log_dir: &str) -> Result<(), String> {
    let level = match config.log_level.as_deref() {
        Some(level) => normalize_level(level)?,
        None => default_log_level(),
    };
    init_logging(level, log_dir)
}

/// `debug` in debug builds, `info` otherwise.
pub(crate) fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

pub(crate) fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

fn normalize_log_dir(log_dir: &str) -> Result<PathBuf, String> {
    let trimmed = log_dir.trim();
    if trimmed.is_empty() {
        return Err("log_dir cannot be empty".to_string());
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(format!("log_dir must be an absolute path, got `{trimmed}`"));
    }
    Ok(path.to_path_buf())
}

fn start_logger(target: &LogTarget) -> Result<ActiveLogger, String> {
    std::fs::create_dir_all(&target.dir).map_err(|err| {
        format!(
            "failed to create log directory `{}`: {err}",
            target.dir.display()
        )
    })?;

    let handle = Logger::try_with_str(target.level)
        .map_err(|err| format!("invalid log level `{}`: {err}", target.level))?
        .log_to_file(
            FileSpec::default()
                .directory(target.dir.as_path())
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(LOG_FILE_MAX_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(LOG_FILES_KEPT),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    install_panic_hook();
    info!(
        "event=logging_start module=logging status=ok version={} os={} debug_build={} level={} dir={}",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        cfg!(debug_assertions),
        target.level,
        target.dir.display()
    );

    Ok(ActiveLogger {
        target: target.clone(),
        _handle: handle,
    })
}

fn install_panic_hook() {
    if PANIC_HOOK.set(()).is_err() {
        return;
    }
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let location = info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        let thread = std::thread::current()
            .name()
            .unwrap_or("unnamed")
            .to_string();
        error!(
            "event=panic module=folio status=error thread={} location={} payload={}",
            thread,
            location,
            panic_summary(info)
        );
        previous(info);
    }));
}

fn panic_summary(info: &std::panic::PanicHookInfo<'_>) -> String {
    let payload = info
        .payload()
        .downcast_ref::<&str>()
        .map(|message| (*message).to_string())
        .or_else(|| info.payload().downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string());
    single_line(&payload, PANIC_PAYLOAD_MAX_CHARS)
}

fn single_line(value: &str, max_chars: usize) -> String {
    let flat = value.replace(['\n', '\r'], " ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let mut cut: String = flat.chars().take(max_chars).collect();
    cut.push_str("...");
    cut
}

#[cfg(test)]
mod tests {
    use super::{
        init_logging, init_session_logging, normalize_level, normalize_log_dir, single_line,
        LogTarget, ACTIVE_LOGGER,
    };
    use crate::config::FolioConfig;
    use std::path::PathBuf;

    fn log_dir(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!("folio-logging-{label}-{}", std::process::id()))
    }

    #[test]
    fn levels_normalize_with_aliases() {
        assert_eq!(normalize_level(" WARNING "), Ok("warn"));
        assert_eq!(normalize_level("Trace"), Ok("trace"));
        let error = normalize_level("verbose").expect_err("unknown level");
        assert!(error.contains("trace|debug|info|warn|error"));
    }

    #[test]
    fn relative_log_dir_is_rejected() {
        let error = normalize_log_dir("logs/dev").expect_err("relative path");
        assert!(error.contains("absolute"));
        assert!(normalize_log_dir("  ").is_err());
    }

    #[test]
    fn targets_accept_only_identical_requests() {
        let active = LogTarget::parse("info", "/tmp/folio-a").expect("valid target");
        assert!(active
            .accept(&LogTarget::parse("INFO", "/tmp/folio-a").expect("valid target"))
            .is_ok());
        let level = active
            .accept(&LogTarget::parse("debug", "/tmp/folio-a").expect("valid target"))
            .expect_err("level switch");
        assert!(level.contains("refusing to switch"));
        assert!(active
            .accept(&LogTarget::parse("info", "/tmp/folio-b").expect("valid target"))
            .is_err());
    }

    #[test]
    fn panic_payloads_are_flattened_and_cut() {
        let flat = single_line("line1\nline2\rline3", 8);
        assert_eq!(flat, "line1 li...");
        assert_eq!(single_line("short", 8), "short");
    }

    // The only test that starts the process-wide logger.
    #[test]
    fn session_logging_uses_configured_level_once() {
        let dir = log_dir("session");
        let dir_str = dir.to_str().expect("utf-8 temp dir").to_string();
        let config = FolioConfig {
            log_level: Some("warning".to_string()),
            ..FolioConfig::default()
        };

        init_session_logging(&config, &dir_str).expect("first init");
        init_logging("warn", &dir_str).expect("same target is idempotent");
        assert!(init_logging("error", &dir_str).is_err());
        assert!(init_logging("warn", "/tmp/folio-elsewhere").is_err());

        let active = ACTIVE_LOGGER.get().expect("logger active");
        assert_eq!(active.target.level, "warn");
        assert_eq!(active.target.dir, dir);
    }
}
