use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Result, StreamError};

/// A mode-specific handle on a record file.
///
/// Opened either for reading or for writing, never both. The handle owns a
/// single cursor; all I/O is sequential and blocking. The file is released
/// when the stream is dropped.
pub struct FileStream {
    inner: File,
    path: PathBuf,
}

impl FileStream {
    /// Open an existing file for reading.
    pub fn open_read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let inner = File::open(&path).map_err(|source| StreamError::Open {
            path: path.clone(),
            source,
        })?;
        debug!(?path, "opened record file for reading");
        Ok(Self { inner, path })
    }

    /// Create a file for writing, truncating any existing contents.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let inner = File::create(&path).map_err(|source| StreamError::Create {
            path: path.clone(),
            source,
        })?;
        debug!(?path, "created record file for writing");
        Ok(Self { inner, path })
    }

    /// The path this stream was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current byte offset of the cursor.
    pub fn position(&mut self) -> Result<u64> {
        Ok(self.inner.stream_position()?)
    }
}

impl Read for FileStream {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.inner.read(buf)
    }
}

impl Write for FileStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

impl Seek for FileStream {
    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
        self.inner.seek(pos)
    }
}

impl std::fmt::Debug for FileStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileStream")
            .field("path", &self.path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_write_then_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");

        let mut stream = FileStream::create(&path).unwrap();
        stream.write_all(b"sequential").unwrap();
        stream.flush().unwrap();
        drop(stream);

        let mut stream = FileStream::open_read(&path).unwrap();
        let mut buf = Vec::new();
        stream.read_to_end(&mut buf).unwrap();
        assert_eq!(buf, b"sequential");
    }

    #[test]
    fn open_read_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = FileStream::open_read(dir.path().join("absent.bin"));
        assert!(matches!(result, Err(StreamError::Open { .. })));
    }

    #[test]
    fn create_truncates_existing_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        std::fs::write(&path, b"previous contents").unwrap();

        let stream = FileStream::create(&path).unwrap();
        drop(stream);

        assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);
    }

    #[test]
    fn position_tracks_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");

        let mut stream = FileStream::create(&path).unwrap();
        assert_eq!(stream.position().unwrap(), 0);
        stream.write_all(&[0u8; 12]).unwrap();
        assert_eq!(stream.position().unwrap(), 12);
    }

    #[test]
    fn path_accessor() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        let stream = FileStream::create(&path).unwrap();
        assert_eq!(stream.path(), path);
    }
}
