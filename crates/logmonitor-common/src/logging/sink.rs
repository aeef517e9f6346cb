use std::io::{self, Write};

use console::Term;
use strum_macros::Display;

/// Destination of line-oriented writes.
///
/// A sink is picked once, when the owning [super::LogWriter] is built, and is
/// only ever driven while the writer's lock is held.
pub trait ConsoleSink: Send {
    /// Transmits `line`, which already carries its line terminator.
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// True if this sink writes to an interactive terminal.
    fn is_terminal(&self) -> bool;
}

/// Sink for an interactive terminal.
///
/// Each line goes out in a single write and the handle is flushed right
/// after, so nothing lingers in a buffer between lines. Lines are UTF-8; on a
/// Windows console the std handle behind [Term] transcodes them to UTF-16.
pub struct TerminalSink<W> {
    out: W,
}

impl<W: Write + Send> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write + Send> ConsoleSink for TerminalSink<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.out.write_all(line.as_bytes())?;
        self.out.flush()
    }

    fn is_terminal(&self) -> bool {
        true
    }
}

/// Sink for redirected output (files, pipes, in-memory buffers).
///
/// Never flushes on its own; the underlying stream's buffering policy applies.
pub struct StreamSink<W> {
    out: W,
}

impl<W: Write + Send> StreamSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write + Send> ConsoleSink for StreamSink<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.out.write_all(line.as_bytes())
    }

    fn is_terminal(&self) -> bool {
        false
    }
}

/// Standard stream a writer binds to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum OutputTarget {
    #[default]
    Stdout,
    Stderr,
}

impl OutputTarget {
    pub fn term(self) -> Term {
        match self {
            OutputTarget::Stdout => Term::stdout(),
            OutputTarget::Stderr => Term::stderr(),
        }
    }

    pub fn stream(self) -> Box<dyn Write + Send> {
        match self {
            OutputTarget::Stdout => Box::new(io::stdout()),
            OutputTarget::Stderr => Box::new(io::stderr()),
        }
    }

    /// Picks the sink for this target.
    ///
    /// A target that is not attached to a terminal, or whose terminal query
    /// fails, is written through the plain stream.
    pub fn sink(self) -> Box<dyn ConsoleSink> {
        let term = self.term();
        if term.is_term() {
            Box::new(TerminalSink::new(term))
        } else {
            Box::new(StreamSink::new(self.stream()))
        }
    }
}
