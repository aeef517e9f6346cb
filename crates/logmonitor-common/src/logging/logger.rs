use std::sync::Arc;

use log::{LevelFilter, Metadata, Record};

use crate::logging::level::TraceLevel;
use crate::logging::writer::LogWriter;
use crate::{ErrorCode, LmResult};

/// Routes records of the `log` facade into a [LogWriter] as leveled traces.
///
/// Only `Error`, `Warn` and `Info` records are enabled.
pub struct WriterLogger {
    writer: Arc<LogWriter>,
}

impl WriterLogger {
    pub fn new(writer: Arc<LogWriter>) -> Self {
        Self { writer }
    }
}

impl log::Log for WriterLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        TraceLevel::from_log_level(metadata.level()).is_some()
    }

    fn log(&self, record: &Record) {
        if let Some(level) = TraceLevel::from_log_level(record.level()) {
            self.writer.trace(level, &record.args().to_string());
        }
    }

    // Every trace is handed to the sink as soon as it is written.
    fn flush(&self) {}
}

/// Installs a [WriterLogger] over `writer` as the process' `log` backend.
///
/// Can only succeed once per process.
pub fn init_logger(writer: Arc<LogWriter>) -> LmResult<()> {
    log::set_logger(Box::leak(Box::new(WriterLogger::new(writer)))).map_err(|e| {
        lm_err!(
            ErrorCode::AlreadyInitialized,
            "Failed to install the log writer as logger: {e}"
        )
    })?;
    log::set_max_level(LevelFilter::Info);
    Ok(())
}
