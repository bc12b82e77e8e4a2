use std::io::{ErrorKind, Write};

use bytes::BytesMut;

use crate::codec::{encode_record, ControlWidth};
use crate::error::{RecordError, Result};

const INITIAL_BUFFER_CAPACITY: usize = 8 * 1024;

/// Writes complete records to any `Write` stream.
///
/// Each record is staged in full before the first byte reaches the stream,
/// so a rejected record (e.g. control-word overflow) leaves the stream
/// untouched. Once emission starts, a downstream failure can leave a partial
/// record behind; that is inherent to sequential-append formats.
pub struct RecordWriter<T> {
    inner: T,
    width: ControlWidth,
    buf: BytesMut,
}

impl<T: Write> RecordWriter<T> {
    /// Create a record writer with the given control-word width.
    pub fn new(inner: T, width: ControlWidth) -> Self {
        Self {
            inner,
            width,
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
        }
    }

    /// Write one payload as a single framed record (blocking).
    pub fn write_record(&mut self, payload: &[u8]) -> Result<()> {
        self.write_record_parts(&[payload])
    }

    /// Write several buffers, concatenated in order, as one framed record.
    ///
    /// The control words carry the summed length; the overflow check covers
    /// the sum and runs before any byte is emitted.
    pub fn write_record_parts(&mut self, parts: &[&[u8]]) -> Result<()> {
        self.buf.clear();
        encode_record(self.width, parts, &mut self.buf)?;

        let mut offset = 0usize;
        while offset < self.buf.len() {
            match self.inner.write(&self.buf[offset..]) {
                Ok(0) => {
                    return Err(RecordError::Io(std::io::Error::from(ErrorKind::WriteZero)))
                }
                Ok(n) => offset += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(RecordError::Io(err)),
            }
        }

        self.flush()
    }

    /// Flush the underlying stream.
    pub fn flush(&mut self) -> Result<()> {
        loop {
            match self.inner.flush() {
                Ok(()) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(RecordError::Io(err)),
            }
        }
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the writer and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// The control-word width this writer was configured with.
    pub fn width(&self) -> ControlWidth {
        self.width
    }
}
