#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A read would extend past the end of the payload.
    #[error("read of {wanted} bytes at offset {offset} exceeds payload length {len}")]
    OutOfRange {
        offset: usize,
        wanted: usize,
        len: usize,
    },

    /// A set header bit has no group assigned in the device profile.
    ///
    /// Only produced in strict mode; the default is to ignore unknown bits
    /// so payloads from newer firmware still decode.
    #[error("unsupported header bit {bit}")]
    UnsupportedHeaderBit { bit: u8 },
}

pub type Result<T> = std::result::Result<T, Error>;
