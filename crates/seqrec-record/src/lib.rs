//! Control-word framing for Fortran unformatted sequential records.
//!
//! This is the core value-add layer of seqrec. Every record on the wire is:
//! - A leading control word: signed length, 4 or 8 bytes, host-native order
//! - The raw payload, exactly that many bytes
//! - A trailing control word that must equal the leading one
//!
//! The trailing word is the structural-integrity check: a disagreement means
//! the file is corrupt, truncated, or being read with the wrong width.

pub mod codec;
pub mod error;
pub mod reader;
pub mod writer;

pub use codec::{decode_control, encode_control, encode_record, ControlWidth};
pub use error::{RecordError, Result};
pub use reader::RecordReader;
pub use writer::RecordWriter;
