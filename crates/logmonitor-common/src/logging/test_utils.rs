use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Mock writer that captures output.
///
/// Clones share the same buffer, so one clone can be handed to a sink while
/// the test keeps another to inspect what was written.
#[derive(Clone, Default)]
pub(crate) struct CaptureWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
    flushes: Arc<AtomicUsize>,
    writes: Arc<AtomicUsize>,
    /// Accept at most this many bytes per `write` call
    chunk_size: Option<usize>,
    /// Start failing once this many bytes have been accepted
    fail_after_bytes: Option<usize>,
}

impl CaptureWriter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Accept one byte per `write` and yield in between, which makes any
    /// unsynchronized writer interleave almost immediately.
    pub(crate) fn trickling(mut self) -> Self {
        self.chunk_size = Some(1);
        self
    }

    pub(crate) fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = Some(size);
        self
    }

    pub(crate) fn with_fail_after_bytes(mut self, count: usize) -> Self {
        self.fail_after_bytes = Some(count);
        self
    }

    pub(crate) fn bytes(&self) -> Vec<u8> {
        self.buffer.lock().unwrap().clone()
    }

    pub(crate) fn contents(&self) -> String {
        String::from_utf8(self.bytes()).expect("captured output is utf-8")
    }

    pub(crate) fn flush_count(&self) -> usize {
        self.flushes.load(Ordering::SeqCst)
    }

    /// Number of `write` calls seen, including failed ones
    pub(crate) fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut buffer = self.buffer.lock().unwrap();

        let mut len = buf.len();
        if let Some(chunk) = self.chunk_size {
            len = len.min(chunk);
        }
        if let Some(limit) = self.fail_after_bytes {
            let room = limit.saturating_sub(buffer.len());
            if room == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::BrokenPipe,
                    "Mock write error",
                ));
            }
            len = len.min(room);
        }

        buffer.extend_from_slice(&buf[..len]);
        drop(buffer);

        if self.chunk_size == Some(1) {
            std::thread::yield_now();
        }
        Ok(len)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
