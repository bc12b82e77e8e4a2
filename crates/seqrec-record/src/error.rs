/// Errors that can occur while framing or de-framing records.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// The control word width selector is neither 4 nor 8 bytes.
    #[error("control word width must be 4 or 8 bytes, got {0}")]
    UnsupportedWidth(usize),

    /// The record payload exceeds what the signed control word can represent.
    #[error("record payload too large ({size} bytes, control word max {max})")]
    PayloadTooLarge { size: u64, max: u64 },

    /// The payload length is not a multiple of the requested element size.
    #[error("record length {length} is not a multiple of element size {element_size}")]
    LengthNotMultiple { length: u64, element_size: usize },

    /// Leading and trailing control words disagree; the file is corrupt or
    /// is being read with the wrong element type or control width.
    #[error("record head and tail control words disagree ({leading} vs {trailing})")]
    TrailerMismatch { leading: i64, trailing: i64 },

    /// The leading control word is negative, which no valid record produces.
    #[error("negative record length {0}")]
    NegativeLength(i64),

    /// Clean end of file reached before the next record's control word.
    #[error("end of file")]
    EndOfFile,

    /// End of file reached inside a record.
    #[error("unexpected end of file inside a record")]
    TruncatedRecord,

    /// An I/O error occurred while reading or writing a record.
    #[error("record I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RecordError>;
