//! Tracing setup for the `stylus` binary and its tests.
//!
//! Two sinks are installed. A per-process log file receives `warn` and above
//! unless a filter is set in the environment. A terminal sink on stderr is
//! added for debug builds or when a filter is set; stdout is reserved for the
//! markup and JSON the commands print.
//!
//! Filter sources, first match wins:
//!
//! - `STYLUS_LOG=debug` raises every stylus crate to `debug` and leaves
//!   dependencies at `warn`. A value containing `=`, `:` or `,` is passed to
//!   [`EnvFilter`] verbatim, e.g. `STYLUS_LOG=stylus_text=trace`.
//! - `RUST_LOG`, passed verbatim.
//! - `warn` globally, `info` for stylus crates.
//!
//! The file lands in `<data_local_dir>/stylus/logs/stylus-<pid>.log` unless
//! `--log-file` / `STYLUS_LOG_FILE` names a file (has an extension) or a
//! directory (does not).

use std::{
    env,
    path::{Path, PathBuf},
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

type Error = Box<dyn std::error::Error + Send + Sync>;

/// Crates whose level follows a bare `STYLUS_LOG=<level>`.
const CRATES: [&str; 4] = ["stylus", "stylus_bin", "stylus_text", "stylus_log"];

/// Returned from [`init`]; must be held alive to ensure log file flushing.
pub struct LogGuard {
    _file_guard: WorkerGuard,
    pub log_file: PathBuf,
}

#[derive(Debug, Default)]
pub struct LogConfig {
    pub log_file_path: Option<PathBuf>,
}

/// Install the file sink and, when enabled, the stderr sink.
///
/// Fails if the log directory cannot be created or a global subscriber is
/// already set.
pub fn init(config: LogConfig) -> Result<LogGuard, Error> {
    let path = LogPath::resolve(config.log_file_path);
    std::fs::create_dir_all(&path.dir)?;

    let (writer, file_guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(&path.dir, &path.file));

    let requested = requested_directives();
    let file_directives = requested.clone().unwrap_or_else(|| "warn".to_string());
    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_filter(EnvFilter::new(file_directives));

    let stderr_layer = (requested.is_some() || cfg!(debug_assertions)).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_filter(EnvFilter::new(
                requested.unwrap_or_else(|| crate_directives("info")),
            ))
    });

    Registry::default()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()?;

    Ok(LogGuard {
        _file_guard: file_guard,
        log_file: path.dir.join(path.file),
    })
}

/// Route logs through the test writer. Safe to call from every test.
pub fn test() {
    let directives = requested_directives().unwrap_or_else(|| crate_directives("info"));
    let _ = fmt()
        .with_env_filter(EnvFilter::new(directives))
        .with_test_writer()
        .try_init();
}

/// Where the log file is written.
#[derive(Debug, PartialEq, Eq)]
struct LogPath {
    dir: PathBuf,
    file: String,
}

impl LogPath {
    /// An override with an extension names the file; without one it names
    /// the directory.
    fn resolve(override_path: Option<PathBuf>) -> Self {
        let file = format!("stylus-{}.log", std::process::id());

        let Some(path) = override_path else {
            let dir = dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("stylus")
                .join("logs");
            return Self { dir, file };
        };

        match (path.extension(), path.file_name()) {
            (Some(_), Some(name)) => Self {
                dir: path.parent().unwrap_or_else(|| Path::new(".")).to_path_buf(),
                file: name.to_string_lossy().into_owned(),
            },
            _ => Self { dir: path, file },
        }
    }
}

/// Directives asked for by the environment, if any.
fn requested_directives() -> Option<String> {
    directives_from(
        env::var("STYLUS_LOG").ok().as_deref(),
        env::var("RUST_LOG").ok().as_deref(),
    )
}

/// `STYLUS_LOG` wins over `RUST_LOG`. A bare level in `STYLUS_LOG` applies to
/// every stylus crate; anything with `=`, `:` or `,` is used verbatim.
fn directives_from(stylus_log: Option<&str>, rust_log: Option<&str>) -> Option<String> {
    match (stylus_log, rust_log) {
        (Some(value), _) if value.contains(['=', ':', ',']) => Some(value.to_string()),
        (Some(level), _) => Some(crate_directives(level)),
        (None, Some(value)) => Some(value.to_string()),
        (None, None) => None,
    }
}

fn crate_directives(level: &str) -> String {
    let mut directives = String::from("warn");
    for name in CRATES {
        directives.push_str(&format!(",{name}={level}"));
    }
    directives
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directives_cover_every_crate() {
        assert_eq!(
            crate_directives("info"),
            "warn,stylus=info,stylus_bin=info,stylus_text=info,stylus_log=info"
        );
    }

    #[test]
    fn stylus_log_level_expands_over_crates() {
        assert_eq!(
            directives_from(Some("debug"), Some("trace")),
            Some(crate_directives("debug"))
        );
    }

    #[test]
    fn stylus_log_directives_pass_through() {
        assert_eq!(
            directives_from(Some("stylus_text=trace"), None).as_deref(),
            Some("stylus_text=trace")
        );
    }

    #[test]
    fn rust_log_used_when_stylus_log_unset() {
        assert_eq!(directives_from(None, Some("info")).as_deref(), Some("info"));
        assert_eq!(directives_from(None, None), None);
    }

    #[test]
    fn override_with_extension_names_the_file() {
        let tmp_dir = tempfile::tempdir().unwrap();

        let path = LogPath::resolve(Some(tmp_dir.path().join("run.log")));
        assert_eq!(path.dir, tmp_dir.path());
        assert_eq!(path.file, "run.log");
    }

    #[test]
    fn override_without_extension_names_the_directory() {
        let tmp_dir = tempfile::tempdir().unwrap();

        let path = LogPath::resolve(Some(tmp_dir.path().join("logs")));
        assert_eq!(path.dir, tmp_dir.path().join("logs"));
        assert_eq!(path.file, format!("stylus-{}.log", std::process::id()));
    }

    #[test]
    fn default_path_is_under_stylus_logs() {
        let path = LogPath::resolve(None);
        assert!(path.dir.ends_with(Path::new("stylus").join("logs")));
    }
}
