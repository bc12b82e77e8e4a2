//! Lifecycle-managed record channel over unformatted sequential files.
//!
//! This is the "just works" layer. A [`RecordChannel`] owns one file handle
//! in either read or write mode (never both) and exposes typed record
//! operations on top of the framing protocol: read the next record, write a
//! record from bytes or values, query the current offset.
//!
//! One quirk is preserved on purpose: a record whose payload holds exactly
//! one element comes back as [`Record::Scalar`], not a one-element sequence.
//! The file format cannot distinguish the two, and existing readers of these
//! files rely on the unwrap.

pub mod channel;
pub mod error;
pub mod record;

pub use channel::{Mode, RecordChannel};
pub use error::{ChannelError, Result};
pub use record::Record;

pub use seqrec_dtype::{ElementType, Value};
pub use seqrec_record::ControlWidth;
