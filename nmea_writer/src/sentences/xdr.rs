use alloc::vec::Vec;
use core::{
    borrow::Borrow,
    fmt::{self, Write},
};

use super::{FieldWriter, NmeaSentence};
use crate::{EmptyReadingsError, TransducerReading};

const XDR_ID: &str = "XDR";

/// Transducer Measurements
///
/// ```text
/// $--XDR,a,x.x,a,c--c,...,a,x.x,a,c--c*hh
///        | |   | |        |         |
///        | |   | |        +---------+- Transducer 'n'
///        | |   | +- Transducer #1 ID
///        | |   +- Units of measure, Transducer #1
///        | +- Measurement data, Transducer #1
///        +- Transducer type, Transducer #1
/// ```
///
/// Always holds at least one reading. With the `serde` feature it is (de)serialized as the
/// plain array of readings, and an empty array is rejected.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "Vec<TransducerReading>",
        into = "Vec<TransducerReading>"
    )
)]
#[derive(Debug, Clone, PartialEq)]
pub struct Xdr {
    readings: Vec<TransducerReading>,
}

impl Xdr {
    pub fn new(
        first: TransducerReading,
        rest: impl IntoIterator<Item = TransducerReading>,
    ) -> Self {
        let mut readings = Vec::from([first]);
        readings.extend(rest);
        Self { readings }
    }

    pub fn push(&mut self, reading: TransducerReading) {
        self.readings.push(reading);
    }

    pub fn readings(&self) -> &[TransducerReading] {
        &self.readings
    }
}

impl TryFrom<Vec<TransducerReading>> for Xdr {
    type Error = EmptyReadingsError;

    fn try_from(readings: Vec<TransducerReading>) -> Result<Self, Self::Error> {
        if readings.is_empty() {
            return Err(EmptyReadingsError);
        }
        Ok(Self { readings })
    }
}

impl From<Xdr> for Vec<TransducerReading> {
    fn from(xdr: Xdr) -> Self {
        xdr.readings
    }
}

impl NmeaSentence for Xdr {
    const SENTENCE_ID: &'static str = XDR_ID;

    fn write_fields<W: Write>(&self, fields: &mut FieldWriter<'_, W>) -> fmt::Result {
        Readings(self.readings.iter()).write_fields(fields)
    }
}

/// XDR over borrowed readings, used by `generate_xdr`
pub(super) struct Readings<I>(pub(super) I);

impl<I> NmeaSentence for Readings<I>
where
    I: Iterator + Clone,
    I::Item: Borrow<TransducerReading>,
{
    const SENTENCE_ID: &'static str = XDR_ID;

    fn write_fields<W: Write>(&self, fields: &mut FieldWriter<'_, W>) -> fmt::Result {
        for reading in self.0.clone() {
            let reading: &TransducerReading = reading.borrow();
            fields.text(reading.measurement.type_code())?;
            match reading.measurement.value_format() {
                Some(format) => fields.number(reading.value, format)?,
                None => fields.plain(reading.value)?,
            }
            fields.text(reading.measurement.unit_code())?;
            fields.text(&reading.name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generate_xdr, MeasurementType};

    fn bmp180_pressure() -> TransducerReading {
        TransducerReading::new(MeasurementType::PressureBar, 1.0136, "BMP180")
    }

    #[test]
    fn test_xdr_single_reading() {
        assert_eq!(
            generate_xdr("II", &bmp180_pressure(), &[]),
            "$IIXDR,P,1.0136,B,BMP180*21"
        );
    }

    #[test]
    fn test_xdr_two_readings() {
        let temperature = TransducerReading::new(MeasurementType::Temperature, 15.5, "BMP180");
        assert_eq!(
            generate_xdr("II", &bmp180_pressure(), &[temperature]),
            "$IIXDR,P,1.0136,B,BMP180,C,15.5,C,BMP180*58"
        );
    }

    #[test]
    fn test_xdr_plain_and_unitless_values() {
        let xdr = Xdr::new(
            TransducerReading::new(MeasurementType::PressurePascal, 101325.0, "BARO"),
            [
                TransducerReading::new(MeasurementType::Humidity, 75.0, "HTU21D"),
                TransducerReading::new(MeasurementType::Generic, 12.0, "ENGINE"),
                TransducerReading::new(MeasurementType::SwitchOrValve, 1.0, "BILGE"),
            ],
        );
        assert_eq!(
            xdr.to_sentence("II"),
            "$IIXDR,P,101325,P,BARO,H,75.0,P,HTU21D,G,12.0,,ENGINE,S,1.0,,BILGE*33"
        );
    }

    #[test]
    fn test_try_from_readings() {
        let empty: Vec<TransducerReading> = Vec::new();
        assert_eq!(Xdr::try_from(empty), Err(EmptyReadingsError));

        let xdr = Xdr::try_from(Vec::from([bmp180_pressure()])).unwrap();
        assert_eq!(xdr, Xdr::new(bmp180_pressure(), Vec::new()));
        let readings: Vec<TransducerReading> = xdr.into();
        assert_eq!(readings, [bmp180_pressure()]);
    }

    #[test]
    fn test_owned_and_borrowed_agree() {
        let rest = [
            TransducerReading::new(MeasurementType::Voltage, 12.6, "HOUSE"),
            TransducerReading::new(MeasurementType::Current, -3.2, "HOUSE"),
        ];
        let mut xdr = Xdr::new(bmp180_pressure(), rest[..1].iter().cloned());
        xdr.push(rest[1].clone());
        assert_eq!(xdr.readings().len(), 3);
        assert_eq!(
            xdr.to_sentence("YX"),
            generate_xdr("YX", &bmp180_pressure(), &rest)
        );
    }
}
