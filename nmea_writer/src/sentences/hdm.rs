use core::fmt::{self, Write};

use super::{FieldWriter, NmeaSentence};
use crate::format::FieldFormat;

/// Heading, Magnetic
///
/// The heading is written as given, a negative value keeps its sign (`-010`).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hdm {
    /// Compass heading in integer degrees
    pub compass_heading: f64,
}

impl NmeaSentence for Hdm {
    const SENTENCE_ID: &'static str = "HDM";

    fn write_fields<W: Write>(&self, fields: &mut FieldWriter<'_, W>) -> fmt::Result {
        fields.number(self.compass_heading, FieldFormat::HEADING)?;
        fields.text("M")
    }
}
