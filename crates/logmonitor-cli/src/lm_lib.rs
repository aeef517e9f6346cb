use std::io::{BufRead, Write};

use logmonitor_common::logging::{LogWriter, TraceLevel};
use logmonitor_common::{ErrorCode, LiftableResult, LmResult, ectx};

/// Counters reported once stdin is exhausted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ForwardSummary {
    pub lines: usize,
    pub raw_failures: usize,
}

/// Forwards every line of `input` to the console through `writer`.
///
/// Lines are written bare when `level` is `None` and as leveled traces
/// otherwise. When `log_file` is given each line is also appended to it
/// verbatim with a single raw write; a failed or short append is traced and
/// counted but does not stop forwarding.
pub fn forward_lines<R, F>(
    writer: &LogWriter,
    level: Option<TraceLevel>,
    input: R,
    mut log_file: Option<F>,
) -> LmResult<ForwardSummary>
where
    R: BufRead,
    F: Write,
{
    let mut summary = ForwardSummary::default();
    for line in input.lines() {
        let line = line.lift(ectx!(code => ErrorCode::IoError, "Failed to read input"))?;
        summary.lines += 1;

        match level {
            Some(level) => writer.trace(level, &line),
            None => writer.write_console_log(&line),
        }

        if let Some(file) = log_file.as_mut() {
            let mut payload = line.into_bytes();
            payload.push(b'\n');
            match writer.write_log(file, &payload).into_result() {
                Ok(written) if written == payload.len() => {}
                Ok(written) => {
                    summary.raw_failures += 1;
                    writer.trace_error(&format!(
                        "Short write to log file: {written} of {} bytes",
                        payload.len()
                    ));
                }
                Err(err) => {
                    summary.raw_failures += 1;
                    writer.trace_error(&format!("Failed to append to log file: {err}"));
                }
            }
        }
    }
    Ok(summary)
}
