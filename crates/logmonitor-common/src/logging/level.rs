use chrono::{DateTime, Utc};
use strum_macros::{Display, EnumIter};

use crate::time::format_timestamp;

/// Severity of a leveled trace line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
pub enum TraceLevel {
    Error,
    Warning,
    Info,
}

impl TraceLevel {
    /// Maps a `log` facade level onto a trace level. `Debug` and `Trace`
    /// records have no counterpart.
    pub fn from_log_level(level: log::Level) -> Option<Self> {
        match level {
            log::Level::Error => Some(TraceLevel::Error),
            log::Level::Warn => Some(TraceLevel::Warning),
            log::Level::Info => Some(TraceLevel::Info),
            log::Level::Debug | log::Level::Trace => None,
        }
    }
}

/// Renders `[<timestamp>][<tag>] <LEVEL>: <message>`, without a line terminator.
pub fn format_trace_line(
    at: &DateTime<Utc>,
    tag: &str,
    level: TraceLevel,
    message: &str,
) -> String {
    format!("[{}][{tag}] {level}: {message}", format_timestamp(at))
}
