use tracing::{Event, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt::format, layer::Context, Layer};

use crate::log::CustomEventFormat;

const DEFAULT_LOG_SIZE: u64 = 7 * 1024 * 1024;
pub const LOG_FILE_NAME: &str = "user-smoke.log";

pub static LOG_GUARD: once_cell::sync::Lazy<once_cell::sync::OnceCell<WorkerGuard>> =
    once_cell::sync::Lazy::new(once_cell::sync::OnceCell::new);

/// Console plus file logging under `dir`. The file is truncated once it grows past 7 MiB.
pub fn init_log(dir: &str, level: Option<&str>) -> Result<(), crate::Error> {
    let level = level.unwrap_or(super::DEFAULT_LOG_LEVEL);
    crate::parse_func::level_from_str(level)?;
    std::fs::create_dir_all(dir)?;

    LOG_GUARD.get_or_init(|| _init_log(level, dir));

    Ok(())
}

fn _init_log(level: &str, dir: &str) -> WorkerGuard {
    use tracing_subscriber::{
        fmt, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt, EnvFilter,
        Registry,
    };
    let file_appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let formatting_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .event_format(CustomEventFormat)
        .fmt_fields(format::DefaultFields::new());

    let res = Registry::default()
        .with(env_filter)
        .with(FileCheckLayer {
            log_file_path: std::path::Path::new(dir).join(LOG_FILE_NAME),
            size_limit: DEFAULT_LOG_SIZE,
        })
        .with(fmt::layer().event_format(CustomEventFormat))
        .with(formatting_layer)
        .try_init();
    match res {
        Ok(()) => tracing::info!("[init log] Init log success"),
        Err(e) => eprintln!("log already initialized: {e}"),
    }
    guard
}

struct FileCheckLayer {
    log_file_path: std::path::PathBuf,
    size_limit: u64,
}

impl<S> Layer<S> for FileCheckLayer
where
    S: Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_event(&self, _event: &Event<'_>, _ctx: Context<'_, S>) {
        if let Ok(metadata) = std::fs::metadata(&self.log_file_path) {
            if metadata.len() > self.size_limit {
                let _ = std::fs::write(&self.log_file_path, b"");
            }
        }
    }
}
