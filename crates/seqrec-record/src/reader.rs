use std::io::{ErrorKind, Read};

use bytes::Bytes;

use crate::codec::{decode_control, ControlWidth};
use crate::error::{RecordError, Result};

/// Reads complete records from any `Read` stream.
///
/// Every read is exact-length (control word, payload, control word), so on
/// success the underlying cursor always rests on a record boundary and the
/// stream's own position query stays truthful. On failure the cursor is left
/// wherever the failing step reached; no rollback is attempted.
pub struct RecordReader<T> {
    inner: T,
    width: ControlWidth,
}

impl<T: Read> RecordReader<T> {
    /// Create a record reader with the given control-word width.
    pub fn new(inner: T, width: ControlWidth) -> Self {
        Self { inner, width }
    }

    /// Read the next complete record's payload (blocking).
    ///
    /// Returns `Err(RecordError::EndOfFile)` when the stream ends cleanly at
    /// a record boundary, which is how callers looping over a whole file
    /// detect completion.
    pub fn read_record(&mut self) -> Result<Bytes> {
        self.read_record_aligned(1)
    }

    /// Read the next record, requiring its length to be a multiple of
    /// `element_size`.
    ///
    /// The alignment check runs after the leading control word and before the
    /// payload, so a wrong element type fails without consuming the payload.
    pub fn read_record_aligned(&mut self, element_size: usize) -> Result<Bytes> {
        let leading = self.read_control(true)?;
        if leading < 0 {
            return Err(RecordError::NegativeLength(leading));
        }
        let length = leading as u64;
        if element_size == 0 || length % element_size as u64 != 0 {
            return Err(RecordError::LengthNotMultiple {
                length,
                element_size,
            });
        }

        // On 32-bit targets a corrupt control word past usize range must be
        // rejected, not truncated into a smaller allocation.
        let size = usize::try_from(length).map_err(|_| RecordError::PayloadTooLarge {
            size: length,
            max: usize::MAX as u64,
        })?;
        let mut payload = vec![0u8; size];
        self.fill(&mut payload)?;

        let trailing = self.read_control(false)?;
        if trailing != leading {
            return Err(RecordError::TrailerMismatch { leading, trailing });
        }

        Ok(Bytes::from(payload))
    }

    fn read_control(&mut self, at_boundary: bool) -> Result<i64> {
        let mut word = [0u8; 8];
        let count = self.width.byte_count();

        // The first byte tells a clean end-of-file apart from truncation.
        let got = self.read_some(&mut word[..count])?;
        if got == 0 {
            return Err(if at_boundary {
                RecordError::EndOfFile
            } else {
                RecordError::TruncatedRecord
            });
        }
        self.fill(&mut word[got..count])?;

        Ok(decode_control(self.width, word))
    }

    fn read_some(&mut self, buf: &mut [u8]) -> Result<usize> {
        loop {
            match self.inner.read(buf) {
                Ok(n) => return Ok(n),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(RecordError::Io(err)),
            }
        }
    }

    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        let mut offset = 0usize;
        while offset < buf.len() {
            match self.read_some(&mut buf[offset..])? {
                0 => return Err(RecordError::TruncatedRecord),
                n => offset += n,
            }
        }
        Ok(())
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the reader and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// The control-word width this reader was configured with.
    pub fn width(&self) -> ControlWidth {
        self.width
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use bytes::BytesMut;

    use super::*;
    use crate::codec::{encode_control, encode_record};

    fn wire(width: ControlWidth, payloads: &[&[u8]]) -> Vec<u8> {
        let mut buf = BytesMut::new();
        for &payload in payloads {
            encode_record(width, &[payload], &mut buf).unwrap();
        }
        buf.to_vec()
    }

    fn wire_one(width: ControlWidth, payload: &[u8]) -> Vec<u8> {
        wire(width, &[payload])
    }

    #[test]
    fn read_single_record() {
        let bytes = wire_one(ControlWidth::Four, b"hello");
        let mut reader = RecordReader::new(Cursor::new(bytes), ControlWidth::Four);

        let payload = reader.read_record().unwrap();
        assert_eq!(payload.as_ref(), b"hello");
    }

    #[test]
    fn read_multiple_records_in_order() {
        let payloads: &[&[u8]] = &[b"one", b"two", b"three"];
        let bytes = wire(ControlWidth::Eight, payloads);
        let mut reader = RecordReader::new(Cursor::new(bytes), ControlWidth::Eight);

        assert_eq!(reader.read_record().unwrap().as_ref(), b"one");
        assert_eq!(reader.read_record().unwrap().as_ref(), b"two");
        assert_eq!(reader.read_record().unwrap().as_ref(), b"three");
        assert!(matches!(
            reader.read_record().unwrap_err(),
            RecordError::EndOfFile
        ));
    }

    #[test]
    fn empty_stream_is_clean_end_of_file() {
        let mut reader = RecordReader::new(Cursor::new(Vec::<u8>::new()), ControlWidth::Four);
        assert!(matches!(
            reader.read_record().unwrap_err(),
            RecordError::EndOfFile
        ));
    }

    #[test]
    fn zero_length_record_reads_as_empty_payload() {
        let bytes = wire_one(ControlWidth::Four, b"");
        let mut reader = RecordReader::new(Cursor::new(bytes), ControlWidth::Four);
        assert!(reader.read_record().unwrap().is_empty());
    }

    #[test]
    fn alignment_check_rejects_wrong_element_size() {
        // 10-byte payload cannot hold whole 3-byte elements.
        let bytes = wire_one(ControlWidth::Four, &[0u8; 10]);
        let mut reader = RecordReader::new(Cursor::new(bytes), ControlWidth::Four);

        let err = reader.read_record_aligned(3).unwrap_err();
        assert!(matches!(
            err,
            RecordError::LengthNotMultiple {
                length: 10,
                element_size: 3
            }
        ));
    }

    #[test]
    fn alignment_failure_leaves_cursor_after_control_word() {
        let bytes = wire_one(ControlWidth::Four, &[0u8; 10]);
        let mut reader = RecordReader::new(Cursor::new(bytes), ControlWidth::Four);

        let _ = reader.read_record_aligned(3).unwrap_err();
        assert_eq!(reader.get_ref().position(), 4);
    }

    #[test]
    fn trailer_mismatch_detected() {
        let mut bytes = wire_one(ControlWidth::Four, b"data");
        // Corrupt the trailing control word.
        let last = bytes.len() - 1;
        bytes[last] ^= 0xFF;

        let mut reader = RecordReader::new(Cursor::new(bytes), ControlWidth::Four);
        let err = reader.read_record().unwrap_err();
        assert!(matches!(
            err,
            RecordError::TrailerMismatch { leading: 4, .. }
        ));
    }

    #[test]
    fn negative_control_word_rejected() {
        let mut buf = BytesMut::new();
        encode_control(ControlWidth::Four, -12, &mut buf);

        let mut reader = RecordReader::new(Cursor::new(buf.to_vec()), ControlWidth::Four);
        assert!(matches!(
            reader.read_record().unwrap_err(),
            RecordError::NegativeLength(-12)
        ));
    }

    #[test]
    fn truncated_payload_detected() {
        let mut bytes = wire_one(ControlWidth::Four, b"longer payload");
        bytes.truncate(4 + 5);

        let mut reader = RecordReader::new(Cursor::new(bytes), ControlWidth::Four);
        assert!(matches!(
            reader.read_record().unwrap_err(),
            RecordError::TruncatedRecord
        ));
    }

    #[test]
    fn truncated_trailing_control_word_detected() {
        let mut bytes = wire_one(ControlWidth::Eight, b"data");
        bytes.truncate(8 + 4 + 3);

        let mut reader = RecordReader::new(Cursor::new(bytes), ControlWidth::Eight);
        assert!(matches!(
            reader.read_record().unwrap_err(),
            RecordError::TruncatedRecord
        ));
    }

    #[test]
    fn missing_trailing_control_word_detected() {
        let mut bytes = wire_one(ControlWidth::Four, b"data");
        bytes.truncate(4 + 4);

        let mut reader = RecordReader::new(Cursor::new(bytes), ControlWidth::Four);
        assert!(matches!(
            reader.read_record().unwrap_err(),
            RecordError::TruncatedRecord
        ));
    }

    #[test]
    fn partial_reads_are_assembled() {
        let bytes = wire_one(ControlWidth::Four, b"slow");
        let reader = ByteByByteReader { bytes, pos: 0 };
        let mut reader = RecordReader::new(reader, ControlWidth::Four);

        assert_eq!(reader.read_record().unwrap().as_ref(), b"slow");
    }

    #[test]
    fn interrupted_read_retries() {
        let bytes = wire_one(ControlWidth::Four, b"ok");
        let reader = InterruptedThenData {
            interrupted: false,
            bytes,
            pos: 0,
        };
        let mut reader = RecordReader::new(reader, ControlWidth::Four);

        assert_eq!(reader.read_record().unwrap().as_ref(), b"ok");
    }

    #[test]
    fn io_error_propagates() {
        struct FailingReader;
        impl Read for FailingReader {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::from(ErrorKind::PermissionDenied))
            }
        }

        let mut reader = RecordReader::new(FailingReader, ControlWidth::Four);
        assert!(matches!(
            reader.read_record().unwrap_err(),
            RecordError::Io(err) if err.kind() == ErrorKind::PermissionDenied
        ));
    }

    #[test]
    fn wrong_width_misframes_the_stream() {
        // A file written with 8-byte control words read back as 4-byte ones
        // must fail structurally rather than return garbage silently.
        let bytes = wire_one(ControlWidth::Eight, b"abcdefgh");
        let mut reader = RecordReader::new(Cursor::new(bytes), ControlWidth::Four);
        assert!(reader.read_record().is_err());
    }

    #[test]
    fn accessors_and_into_inner() {
        let cursor = Cursor::new(Vec::<u8>::new());
        let mut reader = RecordReader::new(cursor, ControlWidth::Eight);

        assert_eq!(reader.width(), ControlWidth::Eight);
        let _ = reader.get_ref();
        let _ = reader.get_mut();
        let _inner = reader.into_inner();
    }

    struct ByteByByteReader {
        bytes: Vec<u8>,
        pos: usize,
    }

    impl Read for ByteByByteReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.pos >= self.bytes.len() || buf.is_empty() {
                return Ok(0);
            }
            buf[0] = self.bytes[self.pos];
            self.pos += 1;
            Ok(1)
        }
    }

    struct InterruptedThenData {
        interrupted: bool,
        bytes: Vec<u8>,
        pos: usize,
    }

    impl Read for InterruptedThenData {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(std::io::Error::from(ErrorKind::Interrupted));
            }
            let remaining = self.bytes.len() - self.pos;
            let n = remaining.min(buf.len());
            buf[..n].copy_from_slice(&self.bytes[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }
}
