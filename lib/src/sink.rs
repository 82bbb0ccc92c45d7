use std::io::{self, Write};

/// Duplicates writes across a list of sinks.
///
/// Every sink receives every byte, in order; the first sink that fails
/// fails the whole write and later sinks are skipped for that call.
/// There is no partial-failure recovery — a fan-out write either lands
/// everywhere or the conversion aborts.
///
/// Typically wrapped in a `BufWriter` so the rasterizer's per-row
/// writes are batched before being duplicated.
pub struct FanoutWriter {
    sinks: Vec<Box<dyn Write>>,
}

impl FanoutWriter {
    /// Build a fan-out over the given sinks.
    pub fn new(sinks: Vec<Box<dyn Write>>) -> Self {
        Self { sinks }
    }
}

impl Write for FanoutWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for sink in &mut self.sinks {
            sink.write_all(buf)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        for sink in &mut self.sinks {
            sink.flush()?;
        }
        Ok(())
    }
}
