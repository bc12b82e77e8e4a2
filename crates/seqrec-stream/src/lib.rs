//! Blocking byte-stream layer for sequential record files.
//!
//! Provides [`FileStream`], the mode-specific file handle everything else
//! builds on: read-only or write-truncate, sequential blocking I/O, offset
//! query via `Seek`. This is the lowest layer of seqrec.

pub mod error;
pub mod file;

pub use error::{Result, StreamError};
pub use file::FileStream;
