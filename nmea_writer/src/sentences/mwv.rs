use core::fmt::{self, Write};

use super::{FieldWriter, NmeaSentence};
use crate::format::FieldFormat;

/// Wind Speed and Angle, relative to the bow, speed in knots
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mwv {
    pub wind_speed_knots: f64,
    pub wind_angle: f64,
}

impl NmeaSentence for Mwv {
    const SENTENCE_ID: &'static str = "MWV";

    fn write_fields<W: Write>(&self, fields: &mut FieldWriter<'_, W>) -> fmt::Result {
        fields.number(self.wind_angle, FieldFormat::COURSE)?;
        fields.text("R")?;
        fields.number(self.wind_speed_knots, FieldFormat::SPEED)?;
        fields.text("N")?;
        fields.text("A")
    }
}
