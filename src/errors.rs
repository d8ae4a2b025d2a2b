//! Error types returned by the wire codec.

use thiserror::Error;

/// Everything that can go wrong while encoding or decoding a resource
/// record. Each variant names one protocol violation; none of them are
/// recoverable by retrying the same bytes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("read past the end of the buffer")]
    BufferUnderrun,

    #[error("write outside the bounds of the buffer")]
    BufferOverrun,

    /// The top two bits of a label length octet were `01` or `10`, which
    /// RFC 1035 reserves.
    #[error("reserved label encoding {0:#04x}")]
    ReservedLabelEncoding(u8),

    #[error("label of {0} octets exceeds the 63 octet limit")]
    LabelTooLong(usize),

    #[error("name of {0} octets exceeds the 255 octet limit")]
    NameTooLong(usize),

    #[error("empty label")]
    EmptyLabel,

    #[error("compression pointer chain exceeds {0} hops")]
    PointerLoop(usize),

    /// A compression pointer must target an offset strictly before the
    /// position where the current name began.
    #[error("compression pointer to offset {target} at or past name start {start}")]
    ForwardPointer { target: usize, start: usize },

    #[error("rdata declared as {declared} bytes but only {remaining} remain")]
    TruncatedRdata { declared: usize, remaining: usize },

    #[error("rdata declared as {declared} bytes but decoding consumed {consumed}")]
    RdataLengthMismatch { declared: usize, consumed: usize },

    #[error("rdata of {0} bytes exceeds the u16 length field")]
    RdataTooLong(usize),

    #[error("character-string of {0} octets exceeds the 255 octet limit")]
    CharacterStringTooLong(usize),

    #[error("unknown class ({0})")]
    UnknownClass(u16),

    /// TTLs above `i32::MAX` would be negative on the wire.
    #[error("ttl {0} is not representable as a 32 bit signed integer")]
    InvalidTtl(u32),
}
