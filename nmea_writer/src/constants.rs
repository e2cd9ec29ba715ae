pub const NMEA_SYNC_CHAR: u8 = 0x24; // '$'
pub const NMEA_ENCAPSULATION_CHAR: u8 = 0x21; // '!'
pub const NMEA_CHECKSUM_DELIMITER: u8 = 0x2a; // '*'
pub const NMEA_FIELD_DELIMITER: u8 = 0x2c; // ','
pub const NMEA_MAX_SENTENCE_LENGTH: usize = 82; // Maximum NMEA sentence length, <CR><LF> included
pub(crate) const NMEA_END_CHARS_LEN: usize = 2; // <CR><LF>, appended by the transport

/// hPa (millibar) in one inch of mercury
pub const HPA_PER_INHG: f64 = 33.86;
/// Millibar in one bar
pub const MBAR_PER_BAR: f64 = 1000.0;
/// Kilometres in one nautical mile, knots to km/h
pub const KM_PER_NAUTICAL_MILE: f64 = 1.852;
/// km/h in one metre per second
pub const KMH_PER_METER_PER_SECOND: f64 = 3.6;

/// Common talker identifiers
pub mod talker {
    /// Global Positioning System receiver
    pub const GP: &str = "GP";
    /// Loran-C receiver
    pub const LC: &str = "LC";
    /// Integrated Instrumentation
    pub const II: &str = "II";
    /// Integrated Navigation
    pub const IN: &str = "IN";
    /// Electronic Chart Display & Information System (ECDIS)
    pub const EC: &str = "EC";
    /// Digital Selective Calling (DSC)
    pub const CD: &str = "CD";
    /// GLONASS, according to IEC 61162-1
    pub const GL: &str = "GL";
    /// Mixed GPS and GLONASS data, according to IEC 61162-1
    pub const GN: &str = "GN";
}
