//! Output sinks and the write pipeline

use super::error::{LoggerError, Result};
use parking_lot::Mutex;
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// A writable destination shared by every entry cloned from one logger
///
/// The lock is held for one line at a time, so lines written through
/// different entries never interleave.
#[derive(Clone)]
pub struct Sink {
    name: Arc<str>,
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl Sink {
    /// Process standard output
    pub fn stdout() -> Self {
        Self::named("stdout", io::stdout())
    }

    /// Process standard error
    pub fn stderr() -> Self {
        Self::named("stderr", io::stderr())
    }

    /// Append to a file, creating it if missing
    pub fn file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::sink(path.display().to_string(), e.to_string()))?;
        Ok(Self::named(path.display().to_string(), file))
    }

    /// Wrap an arbitrary writer
    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self::named("writer", writer)
    }

    pub fn named<W: Write + Send + 'static>(name: impl Into<String>, writer: W) -> Self {
        Self {
            name: Arc::from(name.into()),
            writer: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Write one formatted line followed by `\n`
    pub fn write_line(&self, line: &[u8]) -> Result<()> {
        let mut buf = Vec::with_capacity(line.len() + 1);
        buf.extend_from_slice(line);
        buf.push(b'\n');

        let mut writer = self.writer.lock();
        writer
            .write_all(&buf)
            .and_then(|()| writer.flush())
            .map_err(|e| LoggerError::io_operation("writing log line", self.name.to_string(), e))
    }

    pub fn flush(&self) -> Result<()> {
        self.writer
            .lock()
            .flush()
            .map_err(|e| LoggerError::io_operation("flushing sink", self.name.to_string(), e))
    }

    /// Whether both handles point at the same underlying writer
    pub fn same_as(&self, other: &Sink) -> bool {
        Arc::ptr_eq(&self.writer, &other.writer)
    }
}

impl Default for Sink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink").field("name", &self.name).finish()
    }
}

/// In-memory writer that keeps everything written to it
///
/// Clones share the same buffer, so one clone can be handed to a [`Sink`]
/// while another inspects the output.
///
/// # Example
///
/// ```
/// use plumbing_logging::{Logger, MemoryWriter, Sink};
///
/// let memory = MemoryWriter::new();
/// let mut logger = Logger::new("svc");
/// logger.sink = Sink::from_writer(memory.clone());
///
/// logger.entry().info(["starting", "up"]).unwrap();
/// assert_eq!(memory.lines().len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct MemoryWriter {
    buf: Arc<Mutex<Vec<u8>>>,
    writes: Arc<AtomicUsize>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    /// Number of `write` calls received
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::Relaxed)
    }

    pub fn is_empty(&self) -> bool {
        self.buf.lock().is_empty()
    }

    pub fn clear(&self) {
        self.buf.lock().clear();
    }
}

impl Write for MemoryWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.writes.fetch_add(1, Ordering::Relaxed);
        self.buf.lock().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
