use crate::channel::Mode;

/// Errors that can occur in record channel operations.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    /// Stream-level error (open, create, raw I/O).
    #[error("stream error: {0}")]
    Stream(#[from] seqrec_stream::StreamError),

    /// Framing-level error (control words, truncation, overflow).
    #[error("record error: {0}")]
    Record(#[from] seqrec_record::RecordError),

    /// Element conversion error (encode/decode of typed values).
    #[error("element error: {0}")]
    Element(#[from] seqrec_dtype::ElementError),

    /// The channel already holds an open handle. The stale handle has been
    /// released by the time this error surfaces.
    #[error("channel is already open")]
    AlreadyOpen,

    /// The operation requires an open handle and none is held.
    #[error("channel is not open")]
    NotOpen,

    /// The operation is not valid for the channel's access mode.
    #[error("channel is not a {required} channel")]
    Mode { required: Mode },

    /// Heterogeneous write with a descriptor count that does not match the
    /// value count.
    #[error("value count {values} does not match element type count {types}")]
    ArityMismatch { values: usize, types: usize },
}

impl ChannelError {
    /// True when the error is the clean end-of-file marker, which callers
    /// looping over a whole file treat as normal termination.
    pub fn is_end_of_file(&self) -> bool {
        matches!(
            self,
            ChannelError::Record(seqrec_record::RecordError::EndOfFile)
        )
    }
}

pub type Result<T> = std::result::Result<T, ChannelError>;
