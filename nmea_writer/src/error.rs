use core::fmt;

/// Error reported when checking a received sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceError {
    /// No `*` delimiter, so there is no checksum to check against
    MissingChecksum,
    /// The characters after `*` are not exactly two hexadecimal digits
    MalformedChecksum,
    InvalidChecksum {
        expect: u8,
        got: u8,
    },
}

impl fmt::Display for SentenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentenceError::MissingChecksum => f.write_str("Sentence has no checksum delimiter"),
            SentenceError::MalformedChecksum => {
                f.write_str("Sentence checksum is not two hexadecimal digits")
            }
            SentenceError::InvalidChecksum { expect, got } => write!(
                f,
                "Not valid sentence's checksum, expect {:02X}, got {:02X}",
                expect, got
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SentenceError {}

/// An XDR sentence was built from an empty list of readings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyReadingsError;

impl fmt::Display for EmptyReadingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("XDR sentence needs at least one transducer reading")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EmptyReadingsError {}
