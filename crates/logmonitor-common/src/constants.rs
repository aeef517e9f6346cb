/// Identifier embedded in every leveled trace line.
pub const COMPONENT_TAG: &str = "LOGMONITOR";

/// Appended exactly once to every line-oriented write.
pub const LINE_TERMINATOR: char = '\n';

/// Wall-clock rendering used inside the bracketed prefix of trace lines.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

pub const ENV_LOG_FILE: &str = "LOGMONITOR_LOG_FILE";
pub const ENV_STDERR: &str = "LOGMONITOR_STDERR";
