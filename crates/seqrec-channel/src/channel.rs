use std::fmt;
use std::path::{Path, PathBuf};

use bytes::BytesMut;
use tracing::debug;

use seqrec_dtype::{ElementType, Value};
use seqrec_record::{ControlWidth, RecordReader, RecordWriter};
use seqrec_stream::FileStream;

use crate::error::{ChannelError, Result};
use crate::record::Record;

/// Access mode of a record channel, fixed for the channel's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Read,
    Write,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Read => f.write_str("read"),
            Mode::Write => f.write_str("write"),
        }
    }
}

enum Endpoint {
    Reader(RecordReader<FileStream>),
    Writer(RecordWriter<FileStream>),
}

/// A channel of unformatted sequential records over one file.
///
/// Construction stores the path, mode and control-word width but does not
/// touch the filesystem; [`open`](Self::open) acquires the handle and
/// [`close`](Self::close) releases it. Dropping the channel releases any
/// held handle, so the file is never leaked on early-return paths; use
/// [`with_open`](Self::with_open) for explicit scoped acquisition.
///
/// The channel owns the handle exclusively while open and is not safe for
/// concurrent use; callers must serialize access externally.
pub struct RecordChannel {
    path: PathBuf,
    mode: Mode,
    width: ControlWidth,
    endpoint: Option<Endpoint>,
}

impl RecordChannel {
    /// Create a closed channel for `path` with the given mode and width.
    pub fn new(path: impl Into<PathBuf>, mode: Mode, width: ControlWidth) -> Self {
        Self {
            path: path.into(),
            mode,
            width,
            endpoint: None,
        }
    }

    /// The file path this channel operates on.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The channel's access mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The channel's control-word width.
    pub fn width(&self) -> ControlWidth {
        self.width
    }

    /// Whether the channel currently holds an open handle.
    pub fn is_open(&self) -> bool {
        self.endpoint.is_some()
    }

    /// Acquire the file handle in the configured mode.
    ///
    /// Opening twice is a programming error: the stale handle is released
    /// and `AlreadyOpen` is returned.
    pub fn open(&mut self) -> Result<()> {
        if self.endpoint.take().is_some() {
            return Err(ChannelError::AlreadyOpen);
        }

        let endpoint = match self.mode {
            Mode::Read => {
                let stream = FileStream::open_read(&self.path)?;
                Endpoint::Reader(RecordReader::new(stream, self.width))
            }
            Mode::Write => {
                let stream = FileStream::create(&self.path)?;
                Endpoint::Writer(RecordWriter::new(stream, self.width))
            }
        };
        debug!(path = ?self.path, mode = %self.mode, "record channel opened");

        self.endpoint = Some(endpoint);
        Ok(())
    }

    /// Release the file handle. Fails with `NotOpen` if none is held.
    pub fn close(&mut self) -> Result<()> {
        match self.endpoint.take() {
            Some(_) => {
                debug!(path = ?self.path, "record channel closed");
                Ok(())
            }
            None => Err(ChannelError::NotOpen),
        }
    }

    /// Open the channel, run `f`, and close on every exit path.
    pub fn with_open<F, R>(&mut self, f: F) -> Result<R>
    where
        F: FnOnce(&mut Self) -> Result<R>,
    {
        self.open()?;
        let result = f(self);
        let closed = self.close();
        let value = result?;
        closed?;
        Ok(value)
    }

    /// Read the next record, decoded as elements of `ty`.
    ///
    /// A payload holding exactly one element is unwrapped to
    /// [`Record::Scalar`]; anything else is [`Record::Values`] in file
    /// order. On failure the cursor stays wherever the failing step reached.
    pub fn read_record(&mut self, ty: ElementType) -> Result<Record> {
        let payload = self.reader()?.read_record_aligned(ty.size())?;

        let count = payload.len() / ty.size();
        if count == 1 {
            return Ok(Record::Scalar(ty.decode(&payload)?));
        }
        let mut values = Vec::with_capacity(count);
        for chunk in payload.chunks_exact(ty.size()) {
            values.push(ty.decode(chunk)?);
        }
        Ok(Record::Values(values))
    }

    /// Write one payload as a single framed record.
    pub fn write_record(&mut self, payload: &[u8]) -> Result<()> {
        self.writer()?.write_record(payload)?;
        Ok(())
    }

    /// Write several buffers, concatenated in order, as one framed record.
    pub fn write_record_parts(&mut self, parts: &[&[u8]]) -> Result<()> {
        self.writer()?.write_record_parts(parts)?;
        Ok(())
    }

    /// Write a single value of type `ty` as a one-element record.
    pub fn write_value(&mut self, value: Value, ty: ElementType) -> Result<()> {
        let mut buf = BytesMut::with_capacity(ty.size());
        ty.encode(&value, &mut buf)?;
        self.write_record(&buf)
    }

    /// Write a homogeneous sequence of values as one record.
    pub fn write_values(&mut self, values: &[Value], ty: ElementType) -> Result<()> {
        let mut buf = BytesMut::with_capacity(values.len() * ty.size());
        for value in values {
            ty.encode(value, &mut buf)?;
        }
        self.write_record(&buf)
    }

    /// Write a heterogeneous packed record: one buffer, one control-word
    /// pair, each value encoded per its corresponding element type.
    pub fn write_values_with(&mut self, values: &[Value], types: &[ElementType]) -> Result<()> {
        if values.len() != types.len() {
            return Err(ChannelError::ArityMismatch {
                values: values.len(),
                types: types.len(),
            });
        }
        let mut buf = BytesMut::new();
        for (value, ty) in values.iter().zip(types) {
            ty.encode(value, &mut buf)?;
        }
        self.write_record(&buf)
    }

    /// Current byte offset in the underlying file. Pure query.
    pub fn tell(&mut self) -> Result<u64> {
        let position = match self.endpoint.as_mut() {
            Some(Endpoint::Reader(reader)) => reader.get_mut().position()?,
            Some(Endpoint::Writer(writer)) => writer.get_mut().position()?,
            None => return Err(ChannelError::NotOpen),
        };
        Ok(position)
    }

    fn reader(&mut self) -> Result<&mut RecordReader<FileStream>> {
        if self.mode != Mode::Read {
            return Err(ChannelError::Mode {
                required: Mode::Read,
            });
        }
        match self.endpoint.as_mut() {
            Some(Endpoint::Reader(reader)) => Ok(reader),
            _ => Err(ChannelError::NotOpen),
        }
    }

    fn writer(&mut self) -> Result<&mut RecordWriter<FileStream>> {
        if self.mode != Mode::Write {
            return Err(ChannelError::Mode {
                required: Mode::Write,
            });
        }
        match self.endpoint.as_mut() {
            Some(Endpoint::Writer(writer)) => Ok(writer),
            _ => Err(ChannelError::NotOpen),
        }
    }
}

impl fmt::Debug for RecordChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordChannel")
            .field("path", &self.path)
            .field("mode", &self.mode)
            .field("width", &self.width)
            .field("open", &self.is_open())
            .finish()
    }
}
