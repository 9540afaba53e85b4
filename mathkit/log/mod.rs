use time::format_description::well_known::Rfc3339;
use tracing::Level;
use tracing_subscriber::{filter::LevelFilter, fmt::time::OffsetTime, prelude::*};

use crate::prelude::*;

/// Register a stdout logger as the global tracing subscriber, can only be done once during the lifetime of the program.
///
/// Works with the tracing crates (info!, debug!, warn!, error!) and span funcs and decorators.
/// Should only be used for quick logging, examples and testing, downstream binaries will usually
/// want to compose their own subscriber instead.
///
/// Arguments:
/// - `level_from`: Events at this level and up are logged, everything below discarded.
pub fn setup_quick_stdout_logging(level_from: Level) -> RResult<(), AnyErr> {
    let timer = match OffsetTime::local_rfc_3339() {
        Ok(timer) => timer,
        // The local offset can't be found once threads have spawned:
        Err(_) => OffsetTime::new(time::UtcOffset::UTC, Rfc3339),
    };

    let layer = tracing_subscriber::fmt::layer()
        .with_timer(timer)
        .with_filter(LevelFilter::from_level(level_from));

    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .change_context(AnyErr)
        .attach_printable("A global subscriber has already been registered.")?;

    Ok(())
}

/// Record an exception as an error event on the current span.
///
/// Arguments:
/// - `message`: The error message.
/// - `stacktrace`: E.g. `format!("{:?}", report)`.
pub fn record_exception(message: impl Into<String>, stacktrace: impl Into<String>) {
    let message = message.into();
    let stacktrace = stacktrace.into();
    error!(exception.message = %message, exception.stacktrace = %stacktrace);
}
