use chrono::{Datelike, NaiveDateTime, Timelike};
use core::fmt::{self, Write};

use super::{FieldWriter, NmeaSentence};
use crate::{
    format::FieldFormat,
    types::{Hemisphere, Position},
};

/// Recommended Minimum Navigation Information
///
/// ```text
/// $--RMC,hhmmss,A,llll.lll,a,yyyyy.yyy,a,x.x,x.x,ddmmyy,x.x,a*hh
///        |      | |        | |         | |   |   |      |   |
///        |      | |        | |         | |   |   |      +---+- Magnetic variation, E/W
///        |      | |        | |         | |   |   +- Date
///        |      | |        | |         | |   +- Course over ground, degrees true
///        |      | |        | |         | +- Speed over ground, knots
///        |      | |        | +---------+- Longitude, E/W
///        |      | +--------+- Latitude, N/S
///        |      +- Status, A = valid
///        +- UTC time
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rmc {
    /// UTC time of the fix, the sub-second part is dropped
    pub timestamp: NaiveDateTime,

    pub position: Position,

    /// Speed over ground in knots
    pub speed_over_ground: f64,

    /// Course over ground in degrees
    pub course_over_ground: f64,

    /// Magnetic variation in degrees, negative West
    pub magnetic_variation: f64,
}

impl NmeaSentence for Rmc {
    const SENTENCE_ID: &'static str = "RMC";

    fn write_fields<W: Write>(&self, fields: &mut FieldWriter<'_, W>) -> fmt::Result {
        let ts = &self.timestamp;
        fields.args(format_args!(
            "{:02}{:02}{:02}",
            ts.hour(),
            ts.minute(),
            ts.second()
        ))?;
        fields.text("A")?;
        fields.degrees_minutes(self.position.lat, FieldFormat::LAT_DEGREES)?;
        fields.hemisphere(self.position.lat_hemisphere())?;
        fields.degrees_minutes(self.position.lon, FieldFormat::LON_DEGREES)?;
        fields.hemisphere(self.position.lon_hemisphere())?;
        fields.number(self.speed_over_ground, FieldFormat::COURSE)?;
        fields.number(self.course_over_ground, FieldFormat::COURSE)?;
        fields.args(format_args!(
            "{:02}{:02}{:02}",
            ts.day(),
            ts.month(),
            ts.year().rem_euclid(100)
        ))?;
        fields.number(self.magnetic_variation, FieldFormat::MAGNETIC_VARIATION)?;
        fields.hemisphere(Hemisphere::east_west(self.magnetic_variation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generate_rmc, is_valid_sentence};
    use chrono::NaiveDate;

    fn timestamp(y: i32, m: u32, d: u32, hh: u32, mm: u32, ss: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(hh, mm, ss)
            .unwrap()
    }

    #[test]
    fn test_rmc_north_west() {
        let ts = timestamp(2026, 10, 18, 12, 34, 56);
        assert_eq!(
            generate_rmc("II", ts, 38.25, -122.5, 6.7, 210.0, 3.0),
            "$IIRMC,123456,A,3815.000,N,12230.000,W,006.7,210.0,181026,003.0,E*74"
        );
    }

    #[test]
    fn test_rmc_south_east_west_variation() {
        let rmc = Rmc {
            timestamp: timestamp(2026, 1, 1, 0, 0, 0),
            position: Position::new(-33.8568, 151.2153),
            speed_over_ground: 0.0,
            course_over_ground: 359.96,
            magnetic_variation: -12.34,
        };
        // course is not wrapped, 359.96 rounds to 360.0
        assert_eq!(
            rmc.to_sentence("GP"),
            "$GPRMC,000000,A,3351.408,S,15112.918,E,000.0,360.0,010126,012.3,W*76"
        );
    }

    #[test]
    fn test_rmc_drops_sub_seconds() {
        let ts = NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_milli_opt(12, 34, 56, 999)
            .unwrap();
        let sentence = generate_rmc("II", ts, 38.25, -122.5, 6.7, 210.0, 3.0);
        assert!(sentence.starts_with("$IIRMC,123456,A,"));
        assert!(is_valid_sentence(&sentence));
    }

    #[test]
    fn test_rmc_small_degrees_are_padded() {
        let ts = timestamp(2026, 10, 18, 1, 2, 3);
        let sentence = generate_rmc("GP", ts, 8.5, 5.25, 0.0, 0.0, 0.0);
        let prefix = "$GPRMC,010203,A,0830.000,N,00515.000,E,000.0,000.0,181026,000.0,E*";
        assert!(sentence.starts_with(prefix), "{}", sentence);
    }
}
