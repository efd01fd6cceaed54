use std::{panic, path::PathBuf, sync::OnceLock};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt::writer::BoxMakeWriter, EnvFilter};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const DEFAULT_FILTER: &str = "info";

/// Logging knobs, normally read from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    /// `SP_LOG_DIR`: write daily rotated files here instead of stderr.
    pub log_dir: Option<PathBuf>,
    /// `SP_LOG_INCLUDE_BACKTRACE`: also run the default panic hook.
    pub include_backtrace: bool,
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            log_dir: lookup("SP_LOG_DIR")
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from),
            include_backtrace: lookup("SP_LOG_INCLUDE_BACKTRACE")
                .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }
}

/// Installs the global subscriber (filtered by `RUST_LOG`, default `info`)
/// and the panic hook. Calling it again is a no-op.
pub fn init_tracing(app_name: &'static str, config: &LogConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false);

    let installed = match file_writer(app_name, config) {
        Some(writer) => builder.with_ansi(false).with_writer(writer).try_init(),
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    if installed.is_ok() {
        install_panic_hook(app_name, config.include_backtrace);
    }
}

fn file_writer(app_name: &'static str, config: &LogConfig) -> Option<BoxMakeWriter> {
    let dir = config.log_dir.as_ref()?;
    if let Err(err) = std::fs::create_dir_all(dir) {
        eprintln!(
            "{app_name}: cannot create log dir {}: {err}; logging to stderr",
            dir.display()
        );
        return None;
    }

    let appender = tracing_appender::rolling::daily(dir, format!("{app_name}.log"));
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let _ = LOG_GUARD.set(guard);
    Some(BoxMakeWriter::new(writer))
}

fn install_panic_hook(app_name: &'static str, include_backtrace: bool) {
    static INSTALLED: OnceLock<()> = OnceLock::new();

    INSTALLED.get_or_init(|| {
        let default_hook = panic::take_hook();

        panic::set_hook(Box::new(move |info| {
            let location = info
                .location()
                .map(|loc| format!("{}:{}", loc.file(), loc.line()))
                .unwrap_or_else(|| "unknown".into());
            let message = info
                .payload()
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| info.payload().downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "non-string panic payload".into());

            tracing::error!(application = app_name, %location, panic_message = %message, "panic");

            if include_backtrace {
                default_hook(info);
            }
        }));
    });
}
