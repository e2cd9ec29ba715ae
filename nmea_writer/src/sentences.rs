use alloc::string::String;
use chrono::NaiveDateTime;
use core::fmt::{self, Write};
use log::{trace, warn};

use crate::{
    checksum::ChecksumWriter,
    constants::{
        NMEA_END_CHARS_LEN, NMEA_FIELD_DELIMITER, NMEA_MAX_SENTENCE_LENGTH, NMEA_SYNC_CHAR,
    },
    format::{degrees_minutes, write_plain, FieldFormat},
    types::Hemisphere,
    TransducerReading,
};

mod hdm;
mod mda;
mod mmb;
mod mta;
mod mwv;
mod rmc;
mod vhw;
mod xdr;

pub use hdm::Hdm;
pub use mda::Mda;
pub use mmb::Mmb;
pub use mta::Mta;
pub use mwv::Mwv;
pub use rmc::Rmc;
pub use vhw::Vhw;
pub use xdr::Xdr;

/// `$` and `*hh` around the body
const FRAMING_LEN: usize = 4;

/// A sentence type that can be encoded after a talker id.
///
/// Implementors only describe their fields; framing and checksum are added by
/// [`write_sentence`](NmeaSentence::write_sentence).
pub trait NmeaSentence {
    /// Three-letter sentence formatter, e.g. `RMC`
    const SENTENCE_ID: &'static str;

    /// Write the fields following the sentence id
    fn write_fields<W: Write>(&self, fields: &mut FieldWriter<'_, W>) -> fmt::Result;

    /// Write `$<talker><id>,<fields>*<hh>` into `out`. No `<CR><LF>` is appended.
    fn write_sentence<W: Write>(&self, talker: &str, out: &mut W) -> fmt::Result {
        out.write_char(char::from(NMEA_SYNC_CHAR))?;
        let mut body = ChecksumWriter::new(out);
        body.write_str(talker)?;
        body.write_str(Self::SENTENCE_ID)?;
        self.write_fields(&mut FieldWriter::new(&mut body))?;
        let body_len = body.finish()?;

        let framed_len = body_len + FRAMING_LEN + NMEA_END_CHARS_LEN;
        if framed_len > NMEA_MAX_SENTENCE_LENGTH {
            warn!(
                "{}{} sentence is {} bytes long, over the {} bytes NMEA-0183 limit",
                talker,
                Self::SENTENCE_ID,
                framed_len,
                NMEA_MAX_SENTENCE_LENGTH
            );
        }
        trace!("encoded {}{} sentence", talker, Self::SENTENCE_ID);
        Ok(())
    }

    /// Encode into a freshly allocated `String`
    fn to_sentence(&self, talker: &str) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_sentence(talker, &mut out);
        out
    }
}

/// Writes comma-delimited fields of a sentence body
pub struct FieldWriter<'a, W: Write> {
    out: &'a mut W,
}

impl<'a, W: Write> FieldWriter<'a, W> {
    pub(crate) fn new(out: &'a mut W) -> Self {
        Self { out }
    }

    fn delimiter(&mut self) -> fmt::Result {
        self.out.write_char(char::from(NMEA_FIELD_DELIMITER))
    }

    /// Null field
    pub fn empty(&mut self) -> fmt::Result {
        self.delimiter()
    }

    pub fn text(&mut self, text: &str) -> fmt::Result {
        self.delimiter()?;
        self.out.write_str(text)
    }

    pub fn number(&mut self, value: f64, format: FieldFormat) -> fmt::Result {
        self.delimiter()?;
        format.write(value, &mut *self.out)
    }

    /// Shortest decimal text with at least one fractional digit
    pub fn plain(&mut self, value: f64) -> fmt::Result {
        self.delimiter()?;
        write_plain(value, &mut *self.out)
    }

    pub fn hemisphere(&mut self, hemisphere: Hemisphere) -> fmt::Result {
        self.text(hemisphere.as_str())
    }

    /// Whole degrees with `degree_format` directly followed by decimal minutes, `3815.000`
    pub fn degrees_minutes(&mut self, value: f64, degree_format: FieldFormat) -> fmt::Result {
        let (degrees, minutes) = degrees_minutes(value);
        self.delimiter()?;
        degree_format.write(degrees, &mut *self.out)?;
        FieldFormat::MINUTES.write(minutes, &mut *self.out)
    }

    pub fn args(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        self.delimiter()?;
        self.out.write_fmt(args)
    }
}

/// RMC, recommended minimum position, course and speed.
///
/// `timestamp` is taken as UTC, `magnetic_variation` is negative West.
pub fn generate_rmc(
    talker: &str,
    timestamp: NaiveDateTime,
    lat: f64,
    lon: f64,
    speed_over_ground: f64,
    course_over_ground: f64,
    magnetic_variation: f64,
) -> String {
    Rmc {
        timestamp,
        position: crate::Position::new(lat, lon),
        speed_over_ground,
        course_over_ground,
        magnetic_variation,
    }
    .to_sentence(talker)
}

/// MWV, relative wind speed (knots) and angle
pub fn generate_mwv(talker: &str, wind_speed_knots: f64, wind_angle: f64) -> String {
    Mwv {
        wind_speed_knots,
        wind_angle,
    }
    .to_sentence(talker)
}

/// VHW, speed through water (knots) and compass heading
pub fn generate_vhw(talker: &str, boat_speed_knots: f64, compass_heading: f64) -> String {
    Vhw {
        boat_speed_knots,
        compass_heading,
    }
    .to_sentence(talker)
}

/// HDM, magnetic heading
pub fn generate_hdm(talker: &str, compass_heading: f64) -> String {
    Hdm { compass_heading }.to_sentence(talker)
}

/// MMB, barometric pressure from millibars
pub fn generate_mmb(talker: &str, pressure_mbar: f64) -> String {
    Mmb { pressure_mbar }.to_sentence(talker)
}

/// MTA, air temperature in Celsius
pub fn generate_mta(talker: &str, temperature_celsius: f64) -> String {
    Mta {
        temperature_celsius,
    }
    .to_sentence(talker)
}

/// MDA, meteorological composite
#[allow(clippy::too_many_arguments)]
pub fn generate_mda(
    talker: &str,
    pressure_hpa: f64,
    air_temperature: f64,
    water_temperature: f64,
    relative_humidity: f64,
    absolute_humidity: f64,
    dew_point: f64,
    wind_direction_true: f64,
    wind_direction_magnetic: f64,
    wind_speed_knots: f64,
) -> String {
    Mda {
        pressure_hpa,
        air_temperature,
        water_temperature,
        relative_humidity,
        absolute_humidity,
        dew_point,
        wind_direction_true,
        wind_direction_magnetic,
        wind_speed_knots,
    }
    .to_sentence(talker)
}

/// XDR, transducer measurements: `first`, then every reading of `next` in order
pub fn generate_xdr(talker: &str, first: &TransducerReading, next: &[TransducerReading]) -> String {
    xdr::Readings(core::iter::once(first).chain(next)).to_sentence(talker)
}
