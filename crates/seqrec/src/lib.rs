//! Fortran unformatted sequential record I/O.
//!
//! seqrec reads and writes files made of length-bracketed binary records:
//! every payload is preceded and followed by a signed control word carrying
//! its exact byte length, in host-native order, 4 or 8 bytes wide.
//!
//! # Crate Structure
//!
//! - [`stream`]: mode-specific file handle (read-only / write-truncate)
//! - [`record`]: control-word framing: codec, reader, writer
//! - [`dtype`]: element type descriptors and scalar values
//! - [`channel`]: lifecycle-managed typed record channel (behind `channel`
//!   feature, on by default)

/// Re-export stream types.
pub mod stream {
    pub use seqrec_stream::*;
}

/// Re-export record framing types.
pub mod record {
    pub use seqrec_record::*;
}

/// Re-export element type descriptors.
pub mod dtype {
    pub use seqrec_dtype::*;
}

/// Re-export channel types (requires `channel` feature).
#[cfg(feature = "channel")]
pub mod channel {
    pub use seqrec_channel::*;
}
