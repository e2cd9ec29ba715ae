use alloc::string::String;
use core::fmt;

use crate::format::{write_plain, FieldFormat};

/// Transducer classes that can be reported in an XDR sentence, each with its fixed type code and
/// unit of measure.
///
/// | Transducer           | Type | Unit                   | Comments                   |
/// |----------------------|------|------------------------|----------------------------|
/// | temperature          | C    | C = degrees Celsius    |                            |
/// | angular displacement | A    | D = degrees            | "-" = anti-clockwise       |
/// | linear displacement  | D    | M = meters             | "-" = compression          |
/// | frequency            | F    | H = Hertz              |                            |
/// | force                | N    | N = Newton             | "-" = compression          |
/// | pressure             | P    | B = Bars, P = Pascal   | "-" = vacuum               |
/// | flow rate            | R    | l = liters/second      |                            |
/// | tachometer           | T    | R = RPM                |                            |
/// | humidity             | H    | P = Percent            |                            |
/// | volume               | V    | M = cubic meters       |                            |
/// | generic              | G    | none (null)            | x.x = variable data        |
/// | current              | I    | A = Amperes            |                            |
/// | voltage              | U    | V = Volts              |                            |
/// | switch or valve      | S    | none (null)            | 1 = ON/CLOSED, 0 = OFF/OPEN|
/// | salinity             | L    | S = ppt                | ppt = parts per thousand   |
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasurementType {
    Temperature,
    AngularDisplacement,
    LinearDisplacement,
    Frequency,
    Force,
    PressureBar,
    PressurePascal,
    FlowRate,
    Tachometer,
    Humidity,
    Volume,
    Generic,
    Current,
    Voltage,
    SwitchOrValve,
    Salinity,
}

impl MeasurementType {
    pub const ALL: [MeasurementType; 16] = [
        MeasurementType::Temperature,
        MeasurementType::AngularDisplacement,
        MeasurementType::LinearDisplacement,
        MeasurementType::Frequency,
        MeasurementType::Force,
        MeasurementType::PressureBar,
        MeasurementType::PressurePascal,
        MeasurementType::FlowRate,
        MeasurementType::Tachometer,
        MeasurementType::Humidity,
        MeasurementType::Volume,
        MeasurementType::Generic,
        MeasurementType::Current,
        MeasurementType::Voltage,
        MeasurementType::SwitchOrValve,
        MeasurementType::Salinity,
    ];

    /// One-letter transducer type
    pub const fn type_code(self) -> &'static str {
        match self {
            MeasurementType::Temperature => "C",
            MeasurementType::AngularDisplacement => "A",
            MeasurementType::LinearDisplacement => "D",
            MeasurementType::Frequency => "F",
            MeasurementType::Force => "N",
            MeasurementType::PressureBar | MeasurementType::PressurePascal => "P",
            MeasurementType::FlowRate => "R",
            MeasurementType::Tachometer => "T",
            MeasurementType::Humidity => "H",
            MeasurementType::Volume => "V",
            MeasurementType::Generic => "G",
            MeasurementType::Current => "I",
            MeasurementType::Voltage => "U",
            MeasurementType::SwitchOrValve => "S",
            MeasurementType::Salinity => "L",
        }
    }

    /// Unit of measure, empty for unit-less types
    pub const fn unit_code(self) -> &'static str {
        match self {
            MeasurementType::Temperature => "C",
            MeasurementType::AngularDisplacement => "D",
            MeasurementType::LinearDisplacement => "M",
            MeasurementType::Frequency => "H",
            MeasurementType::Force => "N",
            MeasurementType::PressureBar => "B",
            MeasurementType::PressurePascal => "P",
            MeasurementType::FlowRate => "l",
            MeasurementType::Tachometer => "R",
            MeasurementType::Humidity => "P",
            MeasurementType::Volume => "M",
            MeasurementType::Generic => "",
            MeasurementType::Current => "A",
            MeasurementType::Voltage => "V",
            MeasurementType::SwitchOrValve => "",
            MeasurementType::Salinity => "S",
        }
    }

    /// Reverse lookup from the codes found in a received XDR group
    pub fn from_codes(type_code: &str, unit_code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.type_code() == type_code && t.unit_code() == unit_code)
    }

    /// Dedicated value pattern, `None` for types reported as plain decimal text
    pub const fn value_format(self) -> Option<FieldFormat> {
        match self {
            MeasurementType::PressureBar => Some(FieldFormat::PRESSURE_BARS),
            MeasurementType::PressurePascal => Some(FieldFormat::PRESSURE_PASCALS),
            MeasurementType::Temperature => Some(FieldFormat::TEMPERATURE),
            _ => None,
        }
    }
}

/// One measurement reported in an XDR sentence.
///
/// The transducer name should be non-empty and must not contain `,` or `*`, which would break the
/// sentence layout.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct TransducerReading {
    pub measurement: MeasurementType,
    pub value: f64,
    pub name: String,
}

impl TransducerReading {
    pub fn new(measurement: MeasurementType, value: f64, name: impl Into<String>) -> Self {
        Self {
            measurement,
            value,
            name: name.into(),
        }
    }
}

impl fmt::Display for TransducerReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {:?}, {}, ",
            self.name,
            self.measurement,
            self.measurement.type_code()
        )?;
        write_plain(self.value, f)?;
        write!(f, " {}", self.measurement.unit_code())
    }
}
