use core::fmt::{self, Write};

use super::{FieldWriter, NmeaSentence};
use crate::{
    constants::{HPA_PER_INHG, MBAR_PER_BAR},
    format::FieldFormat,
};

/// Barometer, in inches of mercury and in bars
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mmb {
    /// Pressure in millibars (hPa)
    pub pressure_mbar: f64,
}

impl NmeaSentence for Mmb {
    const SENTENCE_ID: &'static str = "MMB";

    fn write_fields<W: Write>(&self, fields: &mut FieldWriter<'_, W>) -> fmt::Result {
        fields.number(self.pressure_mbar / HPA_PER_INHG, FieldFormat::PRESSURE_BARS)?;
        fields.text("I")?;
        fields.number(self.pressure_mbar / MBAR_PER_BAR, FieldFormat::PRESSURE_BARS)?;
        fields.text("B")
    }
}
