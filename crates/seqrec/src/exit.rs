use std::fmt;
use std::io;

use seqrec_channel::ChannelError;
use seqrec_record::RecordError;
use seqrec_stream::StreamError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::NotFound => FAILURE,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn stream_error(context: &str, err: StreamError) -> CliError {
    match err {
        StreamError::Open { source, .. }
        | StreamError::Create { source, .. }
        | StreamError::Io(source) => io_error(context, source),
    }
}

pub fn record_error(context: &str, err: RecordError) -> CliError {
    match err {
        RecordError::Io(source) => io_error(context, source),
        RecordError::UnsupportedWidth(_) => CliError::new(USAGE, format!("{context}: {err}")),
        RecordError::PayloadTooLarge { .. }
        | RecordError::LengthNotMultiple { .. }
        | RecordError::TrailerMismatch { .. }
        | RecordError::NegativeLength(_)
        | RecordError::TruncatedRecord => CliError::new(DATA_INVALID, format!("{context}: {err}")),
        RecordError::EndOfFile => CliError::new(FAILURE, format!("{context}: {err}")),
    }
}

pub fn channel_error(context: &str, err: ChannelError) -> CliError {
    match err {
        ChannelError::Stream(err) => stream_error(context, err),
        ChannelError::Record(err) => record_error(context, err),
        ChannelError::Element(err) => CliError::new(DATA_INVALID, format!("{context}: {err}")),
        ChannelError::ArityMismatch { .. } => CliError::new(USAGE, format!("{context}: {err}")),
        other => CliError::new(INTERNAL, format!("{context}: {other}")),
    }
}
