//! Process-wide writer.
//!
//! The monitor builds one [LogWriter] at startup and registers it here so any
//! part of the process can reach it. Components should still prefer taking the
//! `Arc` they were handed; the registry only exists for code that cannot be
//! given one.

use std::sync::{Arc, OnceLock};

use crate::logging::writer::LogWriter;
use crate::{ErrorCode, LmResult};

static GLOBAL_WRITER: OnceLock<Arc<LogWriter>> = OnceLock::new();

/// Registers `writer` as the process-wide writer.
///
/// Fails if a writer was already registered; the first one stays in place.
pub fn install(writer: LogWriter) -> LmResult<Arc<LogWriter>> {
    let writer = Arc::new(writer);
    if GLOBAL_WRITER.set(writer.clone()).is_err() {
        return err!(
            ErrorCode::AlreadyInitialized,
            "A process-wide log writer is already installed"
        );
    }
    Ok(writer)
}

/// The registered writer, if any.
pub fn writer() -> Option<Arc<LogWriter>> {
    GLOBAL_WRITER.get().cloned()
}
