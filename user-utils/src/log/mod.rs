pub mod file;

use chrono::Local;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Test subscriber. Safe to call from every test, only the first call installs it.
pub fn init_test_log() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Console subscriber with the compact `time level target fields` line format.
pub fn init_log(level: tracing::Level) {
    let res = tracing_subscriber::fmt()
        .with_max_level(level)
        .event_format(CustomEventFormat)
        .try_init();
    if let Err(e) = res {
        eprintln!("log already initialized: {e}");
    }
}

pub(crate) struct CustomEventFormat;

impl<S, N> FormatEvent<S, N> for CustomEventFormat
where
    S: tracing::Subscriber + for<'lookup> LookupSpan<'lookup>,
    N: for<'writer> FormatFields<'writer> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        write!(writer, "{} ", Local::now().format("%Y-%m-%d %H:%M:%S"))?;
        write!(writer, "{:<5} ", meta.level())?;
        write!(writer, "{} ", meta.target())?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}
