use std::fmt;
use std::io::{self, IsTerminal, Write};

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use crate::constants::{COMPONENT_TAG, LINE_TERMINATOR};
use crate::logging::level::{TraceLevel, format_trace_line};
use crate::logging::sink::{ConsoleSink, OutputTarget, StreamSink, TerminalSink};
use crate::time;
use crate::{ErrorCode, LmError, LmResult};

/// Outcome of a raw write.
///
/// `bytes_written` is what the target accepted in its single write call. It is
/// zero whenever `error` is set and may be short of the requested length on
/// success.
#[derive(Debug)]
pub struct RawWrite {
    pub bytes_written: usize,
    pub error: Option<io::Error>,
}

impl RawWrite {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn into_result(self) -> LmResult<usize> {
        match self.error {
            None => Ok(self.bytes_written),
            Some(e) => Err(Box::new(
                LmError::new(ErrorCode::IoError, "Raw write failed").with_cause(e),
            )),
        }
    }
}

/// Thread-safe writer shared by every thread of the monitor.
///
/// All output, raw or line-oriented and whatever handle it targets, goes
/// through one exclusive lock, so no two writes ever interleave. Whether the
/// console is an interactive terminal is decided once at construction.
pub struct LogWriter {
    sink: Mutex<Box<dyn ConsoleSink>>,
    is_interactive: bool,
}

impl fmt::Debug for LogWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogWriter")
            .field("is_interactive", &self.is_interactive)
            .finish()
    }
}

impl Default for LogWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl LogWriter {
    /// Writer bound to the process' standard output.
    pub fn new() -> Self {
        Self::for_target(OutputTarget::Stdout)
    }

    /// Writer bound to a standard stream. Falls back to plain stream writes
    /// when the stream is redirected or cannot be queried.
    pub fn for_target(target: OutputTarget) -> Self {
        Self::from_boxed(target.sink())
    }

    /// Writer over an arbitrary handle, checked with [IsTerminal].
    pub fn from_stream<W>(stream: W) -> Self
    where
        W: Write + IsTerminal + Send + 'static,
    {
        if stream.is_terminal() {
            Self::with_sink(TerminalSink::new(stream))
        } else {
            Self::with_sink(StreamSink::new(stream))
        }
    }

    /// Writer over an explicit sink; the interactive flag is the sink's.
    pub fn with_sink<S: ConsoleSink + 'static>(sink: S) -> Self {
        Self::from_boxed(Box::new(sink))
    }

    fn from_boxed(sink: Box<dyn ConsoleSink>) -> Self {
        let is_interactive = sink.is_terminal();
        Self {
            sink: Mutex::new(sink),
            is_interactive,
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.is_interactive
    }

    /// Writes `buf` to `target` while holding the writer's lock.
    ///
    /// `target` may be any handle, including the one the console sink writes
    /// to. `target` sees a single `write` call (repeated only on
    /// `Interrupted`), so a short write comes back as a success with
    /// `bytes_written < buf.len()` and the caller decides what to do with the
    /// rest. Nothing is flushed.
    pub fn write_log<W>(&self, target: &mut W, buf: &[u8]) -> RawWrite
    where
        W: Write + ?Sized,
    {
        let _guard = self.sink.lock();
        write_once(target, buf)
    }

    /// Writes `message` plus one line terminator to the console.
    ///
    /// Transmission errors are dropped: logging never fails its caller.
    pub fn write_console_log(&self, message: &str) {
        let mut line = String::with_capacity(message.len() + 1);
        line.push_str(message);
        line.push(LINE_TERMINATOR);

        let mut sink = self.sink.lock();
        sink.write_line(&line).ok();
    }

    pub fn trace_error(&self, message: &str) {
        self.trace(TraceLevel::Error, message);
    }

    pub fn trace_warning(&self, message: &str) {
        self.trace(TraceLevel::Warning, message);
    }

    pub fn trace_info(&self, message: &str) {
        self.trace(TraceLevel::Info, message);
    }

    pub fn trace(&self, level: TraceLevel, message: &str) {
        self.trace_at(level, message, &time::now());
    }

    pub fn trace_at(&self, level: TraceLevel, message: &str, at: &DateTime<Utc>) {
        self.write_console_log(&format_trace_line(at, COMPONENT_TAG, level, message));
    }
}

fn write_once<W: Write + ?Sized>(target: &mut W, buf: &[u8]) -> RawWrite {
    loop {
        match target.write(buf) {
            Ok(0) if !buf.is_empty() => {
                return RawWrite {
                    bytes_written: 0,
                    error: Some(io::Error::from(io::ErrorKind::WriteZero)),
                };
            }
            Ok(bytes_written) => {
                return RawWrite {
                    bytes_written,
                    error: None,
                };
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => {
                return RawWrite {
                    bytes_written: 0,
                    error: Some(e),
                };
            }
        }
    }
}
