use core::fmt::{self, Write};

use super::{FieldWriter, NmeaSentence};
use crate::{
    constants::{HPA_PER_INHG, KMH_PER_METER_PER_SECOND, KM_PER_NAUTICAL_MILE, MBAR_PER_BAR},
    format::FieldFormat,
};

/// Meteorological Composite
///
/// ```text
/// $--MDA,x.x,I,x.x,B,x.x,C,x.x,C,x.x,x.x,x.x,C,x.x,T,x.x,M,x.x,N,x.x,M*hh
///        |   | |   | |   | |   | |   |   |   | |   | |   | |   | |   |
///        |   | |   | |   | |   | |   |   |   | |   | |   | |   | +---+- Wind speed, m/s
///        |   | |   | |   | |   | |   |   |   | |   | |   | +---+- Wind speed, knots
///        |   | |   | |   | |   | |   |   |   | |   | +---+- Wind direction, magnetic
///        |   | |   | |   | |   | |   |   |   | +---+- Wind direction, true
///        |   | |   | |   | |   | |   |   +---+- Dew point, degrees C
///        |   | |   | |   | |   | |   +- Absolute humidity, percent
///        |   | |   | |   | |   | +- Relative humidity, percent
///        |   | |   | |   | +---+- Water temperature, degrees C
///        |   | |   | +---+- Air temperature, degrees C
///        |   | +---+- Barometric pressure, bars
///        +---+- Barometric pressure, inches of mercury
/// ```
///
/// Values are written as given, so a negative wind direction keeps its sign.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mda {
    /// Barometric pressure in hPa (millibars)
    pub pressure_hpa: f64,

    /// Degrees Celsius
    pub air_temperature: f64,

    /// Degrees Celsius
    pub water_temperature: f64,

    /// Percent
    pub relative_humidity: f64,

    /// Percent
    pub absolute_humidity: f64,

    /// Degrees Celsius
    pub dew_point: f64,

    pub wind_direction_true: f64,
    pub wind_direction_magnetic: f64,
    pub wind_speed_knots: f64,
}

impl Mda {
    pub fn wind_speed_meters_per_second(&self) -> f64 {
        self.wind_speed_knots * KM_PER_NAUTICAL_MILE / KMH_PER_METER_PER_SECOND
    }
}

impl NmeaSentence for Mda {
    const SENTENCE_ID: &'static str = "MDA";

    fn write_fields<W: Write>(&self, fields: &mut FieldWriter<'_, W>) -> fmt::Result {
        fields.number(self.pressure_hpa / HPA_PER_INHG, FieldFormat::PRESSURE_BARS)?;
        fields.text("I")?;
        fields.number(self.pressure_hpa / MBAR_PER_BAR, FieldFormat::PRESSURE_BARS)?;
        fields.text("B")?;
        fields.number(self.air_temperature, FieldFormat::TEMPERATURE)?;
        fields.text("C")?;
        fields.number(self.water_temperature, FieldFormat::TEMPERATURE)?;
        fields.text("C")?;
        fields.number(self.relative_humidity, FieldFormat::PERCENT)?;
        fields.number(self.absolute_humidity, FieldFormat::PERCENT)?;
        fields.number(self.dew_point, FieldFormat::TEMPERATURE)?;
        fields.text("C")?;
        fields.number(self.wind_direction_true, FieldFormat::DIRECTION)?;
        fields.text("T")?;
        fields.number(self.wind_direction_magnetic, FieldFormat::DIRECTION)?;
        fields.text("M")?;
        fields.number(self.wind_speed_knots, FieldFormat::SPEED)?;
        fields.text("N")?;
        fields.number(self.wind_speed_meters_per_second(), FieldFormat::SPEED)?;
        fields.text("M")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate_mda;

    #[test]
    fn test_mda() {
        assert_eq!(
            generate_mda("II", 1013.25, 25.0, 12.0, 75.0, 50.0, 9.0, 270.0, 255.0, 12.0),
            "$IIMDA,29.9247,I,1.0133,B,25.0,C,12.0,C,75,50,9.0,C,270,T,255,M,12.0,N,6.2,M*3D"
        );
    }

    #[test]
    fn test_mda_field_count() {
        let sentence = generate_mda("WI", 1000.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        let body = &sentence[1..sentence.find('*').unwrap()];
        // sentence id then 20 fields
        assert_eq!(body.split(',').count(), 21);
    }

    #[test]
    fn test_mda_negative_directions_keep_sign() {
        let sentence = generate_mda("WI", 1000.0, 0.0, 0.0, 0.0, 0.0, 0.0, -90.0, -75.0, 0.0);
        assert!(sentence.contains(",0.0,C,-90,T,-75,M,0.0,N,"), "{}", sentence);
        assert!(crate::is_valid_sentence(&sentence));
    }

    #[test]
    fn test_wind_speed_conversion() {
        let mda = Mda {
            pressure_hpa: 1013.25,
            air_temperature: 25.0,
            water_temperature: 12.0,
            relative_humidity: 75.0,
            absolute_humidity: 50.0,
            dew_point: 9.0,
            wind_direction_true: 270.0,
            wind_direction_magnetic: 255.0,
            wind_speed_knots: 10.0,
        };
        assert!((mda.wind_speed_meters_per_second() - 5.144_444).abs() < 1e-6);
    }
}
