use core::fmt::{self, Write};

use super::{FieldWriter, NmeaSentence};
use crate::format::FieldFormat;

/// Air Temperature
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mta {
    pub temperature_celsius: f64,
}

impl NmeaSentence for Mta {
    const SENTENCE_ID: &'static str = "MTA";

    fn write_fields<W: Write>(&self, fields: &mut FieldWriter<'_, W>) -> fmt::Result {
        fields.number(self.temperature_celsius, FieldFormat::TEMPERATURE)?;
        fields.text("C")
    }
}
