pub mod global;
mod level;
mod logger;
mod sink;
mod writer;

#[cfg(test)]
pub(crate) mod test_utils;

pub use level::{TraceLevel, format_trace_line};
pub use logger::{WriterLogger, init_logger};
pub use sink::{ConsoleSink, OutputTarget, StreamSink, TerminalSink};
pub use writer::{LogWriter, RawWrite};
