use core::fmt;

use crate::{
    constants::{NMEA_CHECKSUM_DELIMITER, NMEA_ENCAPSULATION_CHAR, NMEA_SYNC_CHAR},
    SentenceError,
};

/// NMEA-0183 checksum calculator: the exclusive-OR of every byte between `$` and `*`,
/// usable both streaming and single-shot
#[derive(Default, Debug, Clone, Copy)]
pub struct NmeaChecksum {
    value: u8,
}

impl NmeaChecksum {
    pub const fn new() -> Self {
        Self { value: 0 }
    }

    /// Update checksum with new bytes
    pub const fn update(&mut self, bytes: &[u8]) {
        let mut i = 0;
        while i < bytes.len() {
            self.update_byte(bytes[i]);
            i += 1;
        }
    }

    /// Update checksum with a single byte
    pub const fn update_byte(&mut self, byte: u8) {
        self.value ^= byte;
    }

    /// Get the current checksum result
    pub const fn result(self) -> u8 {
        self.value
    }

    /// Validate checksum against the value found in a sentence
    pub const fn validate_result(self, received: u8) -> Result<(), SentenceError> {
        if self.is_valid(received) {
            Ok(())
        } else {
            Err(SentenceError::InvalidChecksum {
                expect: received,
                got: self.value,
            })
        }
    }

    const fn is_valid(&self, received: u8) -> bool {
        self.value == received
    }
}

/// Checksum of an unframed sentence body, e.g. `IIMTA,20.5,C`
pub fn checksum(body: &str) -> u8 {
    let mut calc = NmeaChecksum::new();
    calc.update(body.as_bytes());
    calc.result()
}

/// Check a complete sentence such as `$IIMTA,20.5,C*02`.
///
/// The start delimiter (`$` or `!`) is optional and a trailing `<CR><LF>` is ignored. The checksum
/// is recomputed over everything between the start delimiter and the last `*`.
pub fn validate_sentence(sentence: &str) -> Result<(), SentenceError> {
    let sentence = sentence.trim_end_matches(|c: char| c == '\r' || c == '\n');
    let body = sentence
        .strip_prefix(|c: char| {
            c == char::from(NMEA_SYNC_CHAR) || c == char::from(NMEA_ENCAPSULATION_CHAR)
        })
        .unwrap_or(sentence);
    let (body, trailer) = body
        .rsplit_once(char::from(NMEA_CHECKSUM_DELIMITER))
        .ok_or(SentenceError::MissingChecksum)?;
    let received = parse_hex_byte(trailer).ok_or(SentenceError::MalformedChecksum)?;

    let mut calc = NmeaChecksum::new();
    calc.update(body.as_bytes());
    calc.validate_result(received)
}

/// Boolean form of [`validate_sentence`]
pub fn is_valid_sentence(sentence: &str) -> bool {
    validate_sentence(sentence).is_ok()
}

fn parse_hex_byte(s: &str) -> Option<u8> {
    if s.len() != 2 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(s, 16).ok()
}

/// Forwards everything to `inner` while feeding it into the checksum, so a sentence body is
/// checksummed as it is written.
pub(crate) struct ChecksumWriter<'a, W: fmt::Write> {
    inner: &'a mut W,
    calc: NmeaChecksum,
    written: usize,
}

impl<'a, W: fmt::Write> ChecksumWriter<'a, W> {
    pub(crate) fn new(inner: &'a mut W) -> Self {
        Self {
            inner,
            calc: NmeaChecksum::new(),
            written: 0,
        }
    }

    /// Append `*hh` and return the number of body bytes that went through the checksum
    pub(crate) fn finish(self) -> Result<usize, fmt::Error> {
        write!(
            self.inner,
            "{}{:02X}",
            char::from(NMEA_CHECKSUM_DELIMITER),
            self.calc.result()
        )?;
        Ok(self.written)
    }
}

impl<W: fmt::Write> fmt::Write for ChecksumWriter<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.calc.update(s.as_bytes());
        self.written += s.len();
        self.inner.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use core::fmt::Write;

    const VALID_BODY: &str = "GNTXT,01,01,02,upcounting timer is at 1";
    const VALID_CHECKSUM: u8 = 0x0C;

    #[test]
    fn test_single_shot_checksum() {
        assert_eq!(checksum(VALID_BODY), VALID_CHECKSUM);
        assert_eq!(checksum("GNTXT,01,01,02,upcounting timer is at 2"), 0x0F);
        assert_eq!(checksum("IIMTA,20.5,C"), 0x02);
    }

    #[test]
    fn test_empty_body_checksum() {
        assert_eq!(checksum(""), 0);
    }

    #[test]
    fn test_streaming_checksum_chunks() {
        let mut calc = NmeaChecksum::new();
        let (head, tail) = VALID_BODY.as_bytes().split_at(5);
        calc.update(head);
        calc.update(tail);
        assert_eq!(calc.validate_result(VALID_CHECKSUM), Ok(()));
    }

    #[test]
    fn test_streaming_checksum_incremental() {
        let mut calc = NmeaChecksum::new();
        for byte in VALID_BODY.bytes() {
            calc.update_byte(byte);
        }
        assert_eq!(calc.result(), VALID_CHECKSUM);
    }

    #[test]
    fn test_streaming_checksum_invalid() {
        let mut calc = NmeaChecksum::new();
        calc.update(VALID_BODY.as_bytes());
        assert_eq!(
            calc.validate_result(0x0D),
            Err(SentenceError::InvalidChecksum {
                expect: 0x0D,
                got: VALID_CHECKSUM
            })
        );
    }

    #[test]
    fn test_validate_sentence() {
        assert_eq!(validate_sentence("$IIMTA,20.5,C*02"), Ok(()));
        assert_eq!(
            validate_sentence("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47"),
            Ok(())
        );
    }

    #[test]
    fn test_validate_sentence_framing_variants() {
        // no start delimiter
        assert!(is_valid_sentence("IIMTA,20.5,C*02"));
        // transport line ending
        assert!(is_valid_sentence("$IIMTA,20.5,C*02\r\n"));
        // lowercase hex
        assert!(is_valid_sentence("$GNTXT,01,01,02,upcounting timer is at 1*0c"));
        assert!(is_valid_sentence("!GNTXT,01,01,02,upcounting timer is at 1*0C"));
    }

    #[test]
    fn test_validate_sentence_flipped_digit() {
        assert_eq!(
            validate_sentence("$IIMTA,20.5,C*03"),
            Err(SentenceError::InvalidChecksum {
                expect: 0x03,
                got: 0x02
            })
        );
        assert!(!is_valid_sentence("$IIMTA,20.5,C*12"));
    }

    #[test]
    fn test_validate_sentence_malformed() {
        assert_eq!(
            validate_sentence("$IIMTA,20.5,C"),
            Err(SentenceError::MissingChecksum)
        );
        assert_eq!(
            validate_sentence("$IIMTA,20.5,C*2"),
            Err(SentenceError::MalformedChecksum)
        );
        assert_eq!(
            validate_sentence("$IIMTA,20.5,C*+2"),
            Err(SentenceError::MalformedChecksum)
        );
        assert_eq!(
            validate_sentence("$IIMTA,20.5,C*0G"),
            Err(SentenceError::MalformedChecksum)
        );
    }

    #[test]
    fn test_checksum_writer() {
        let mut out = String::from("$");
        let mut writer = ChecksumWriter::new(&mut out);
        writer.write_str("IIMTA").unwrap();
        write!(writer, ",{},C", "20.5").unwrap();
        assert_eq!(writer.finish(), Ok(12));
        assert_eq!(out, "$IIMTA,20.5,C*02");
    }

    // Compute checksum at compile time
    #[allow(dead_code, reason = "constant time evaluated")]
    const fn is_checksum_valid(bytes: &[u8], expected: u8) -> bool {
        let mut calc = NmeaChecksum::new();
        calc.update(bytes);
        calc.is_valid(expected)
    }

    #[test]
    fn test_const_checksum_computation() {
        // Compile-time assertion
        const _: () = {
            assert!(is_checksum_valid(b"IIMTA,20.5,C", 0x02));
        };
    }
}
