use core::fmt::{self, Write};

use super::{FieldWriter, NmeaSentence};
use crate::format::FieldFormat;

/// Water Speed and Heading
///
/// Only the magnetic compass heading and the speed in knots are reported, true heading and
/// km/h fields are left null.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vhw {
    pub boat_speed_knots: f64,
    pub compass_heading: f64,
}

impl NmeaSentence for Vhw {
    const SENTENCE_ID: &'static str = "VHW";

    fn write_fields<W: Write>(&self, fields: &mut FieldWriter<'_, W>) -> fmt::Result {
        fields.empty()?;
        fields.empty()?;
        fields.number(self.compass_heading, FieldFormat::HEADING)?;
        fields.text("M")?;
        fields.number(self.boat_speed_knots, FieldFormat::BOAT_SPEED)?;
        fields.text("N")?;
        fields.empty()?;
        fields.empty()
    }
}
