use bytes::{BufMut, BytesMut};

use crate::error::{RecordError, Result};

/// Width of the control words bracketing every record.
///
/// Fixed for a whole file; the format carries no self-describing marker, so
/// reader and file must agree on the width out-of-band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlWidth {
    /// 4-byte signed control words (`i4`), the common compiler default.
    Four,
    /// 8-byte signed control words (`i8`), used for records past 2 GiB.
    Eight,
}

impl ControlWidth {
    /// Width of one control word in bytes.
    pub fn byte_count(self) -> usize {
        match self {
            ControlWidth::Four => 4,
            ControlWidth::Eight => 8,
        }
    }

    /// Largest payload length the signed control word can represent.
    pub fn max_payload(self) -> u64 {
        match self {
            ControlWidth::Four => i32::MAX as u64,
            ControlWidth::Eight => i64::MAX as u64,
        }
    }

    /// Resolve a raw byte-count selector. Only 4 and 8 are supported.
    pub fn from_byte_count(bytes: usize) -> Result<Self> {
        match bytes {
            4 => Ok(ControlWidth::Four),
            8 => Ok(ControlWidth::Eight),
            other => Err(RecordError::UnsupportedWidth(other)),
        }
    }
}

/// Append one control word to `dst` in host-native byte order.
///
/// `value` must already be validated against [`ControlWidth::max_payload`];
/// with a 4-byte width the value is truncated to its low 32 bits.
pub fn encode_control(width: ControlWidth, value: i64, dst: &mut BytesMut) {
    match width {
        ControlWidth::Four => dst.put_i32_ne(value as i32),
        ControlWidth::Eight => dst.put_i64_ne(value),
    }
}

/// Decode one control word from the first `byte_count` bytes of `word`.
pub fn decode_control(width: ControlWidth, word: [u8; 8]) -> i64 {
    match width {
        ControlWidth::Four => {
            let mut w = [0u8; 4];
            w.copy_from_slice(&word[..4]);
            i64::from(i32::from_ne_bytes(w))
        }
        ControlWidth::Eight => i64::from_ne_bytes(word),
    }
}

/// Encode one complete record into `dst` and return the payload length.
///
/// The payload is the concatenation of `parts` in order, bracketed by two
/// identical control words. The overflow check runs before anything is
/// staged, so a failed call leaves `dst` untouched.
pub fn encode_record(width: ControlWidth, parts: &[&[u8]], dst: &mut BytesMut) -> Result<u64> {
    // Summing in u128 cannot overflow for any slice lengths, so the error
    // always reports the real total.
    let total: u128 = parts.iter().map(|part| part.len() as u128).sum();
    if total > u128::from(width.max_payload()) {
        return Err(RecordError::PayloadTooLarge {
            size: u64::try_from(total).unwrap_or(u64::MAX),
            max: width.max_payload(),
        });
    }
    let total = total as u64;

    dst.reserve(2 * width.byte_count() + total as usize);
    encode_control(width, total as i64, dst);
    for part in parts {
        dst.put_slice(part);
    }
    encode_control(width, total as i64, dst);
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_selector_accepts_only_supported_values() {
        assert_eq!(ControlWidth::from_byte_count(4).unwrap(), ControlWidth::Four);
        assert_eq!(
            ControlWidth::from_byte_count(8).unwrap(),
            ControlWidth::Eight
        );
        for bad in [0, 1, 2, 6, 16] {
            assert!(matches!(
                ControlWidth::from_byte_count(bad),
                Err(RecordError::UnsupportedWidth(b)) if b == bad
            ));
        }
    }

    #[test]
    fn max_payload_matches_signed_range() {
        assert_eq!(ControlWidth::Four.max_payload(), 2_147_483_647);
        assert_eq!(ControlWidth::Eight.max_payload(), i64::MAX as u64);
    }

    #[test]
    fn control_word_roundtrip_both_widths() {
        for width in [ControlWidth::Four, ControlWidth::Eight] {
            let mut buf = BytesMut::new();
            encode_control(width, 1234, &mut buf);
            assert_eq!(buf.len(), width.byte_count());

            let mut word = [0u8; 8];
            word[..width.byte_count()].copy_from_slice(&buf);
            assert_eq!(decode_control(width, word), 1234);
        }
    }

    #[test]
    fn record_layout_brackets_payload() {
        let parts: &[&[u8]] = &[b"abcde"];
        let mut buf = BytesMut::new();
        let len = encode_record(ControlWidth::Four, parts, &mut buf).unwrap();

        assert_eq!(len, 5);
        assert_eq!(buf.len(), 4 + 5 + 4);
        assert_eq!(&buf[..4], 5i32.to_ne_bytes());
        assert_eq!(&buf[4..9], b"abcde");
        assert_eq!(&buf[9..], 5i32.to_ne_bytes());
    }

    #[test]
    fn parts_concatenate_in_order() {
        let parts: &[&[u8]] = &[b"ab", b"", b"cd"];
        let mut buf = BytesMut::new();
        let len = encode_record(ControlWidth::Eight, parts, &mut buf).unwrap();

        assert_eq!(len, 4);
        assert_eq!(&buf[8..12], b"abcd");
        assert_eq!(&buf[..8], &buf[12..]);
    }

    #[test]
    fn empty_record_is_two_control_words() {
        let mut buf = BytesMut::new();
        let len = encode_record(ControlWidth::Four, &[], &mut buf).unwrap();

        assert_eq!(len, 0);
        assert_eq!(buf.len(), 8);
        assert!(buf.iter().all(|&b| b == 0));
    }

    #[test]
    fn oversized_payload_rejected_before_staging() {
        // 2049 MiB of references to the same 1 MiB block crosses the i32 max
        // without allocating more than the block itself.
        let block = vec![0u8; 1 << 20];
        let parts = vec![block.as_slice(); 2049];

        let mut buf = BytesMut::new();
        let err = encode_record(ControlWidth::Four, &parts, &mut buf).unwrap_err();

        assert!(matches!(err, RecordError::PayloadTooLarge { size, max }
            if size == 2049 << 20 && max == i32::MAX as u64));
        assert!(buf.is_empty());
    }

}
