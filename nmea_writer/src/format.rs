use alloc::{string::String, vec::Vec};
use core::{
    fmt::{self, Write},
    iter,
};
use num_traits::float::FloatCore;

/// Fixed-width, fixed-precision rendering of a numeric field.
///
/// Values are rounded half-up on their shortest decimal representation, so `23.45` with one
/// decimal gives `23.5` even though the closest `f64` is slightly below it. Non-finite values
/// render as a null (empty) field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldFormat {
    /// Minimum count of integer digits, zero-padded on the left
    pub min_int_digits: u8,
    /// Exact count of decimal digits
    pub decimals: u8,
    /// Unsigned formats render the magnitude only, the sign travels in another field
    pub signed: bool,
}

impl FieldFormat {
    /// Whole degrees of a latitude, `08`
    pub const LAT_DEGREES: Self = Self::unsigned(2, 0);
    /// Whole degrees of a longitude, `122`
    pub const LON_DEGREES: Self = Self::unsigned(3, 0);
    /// Decimal minutes of a latitude/longitude, `30.000`
    pub const MINUTES: Self = Self::unsigned(2, 3);
    /// Course and speed over ground, wind angle, `210.0`
    pub const COURSE: Self = Self::signed(3, 1);
    /// Magnetic variation, direction carried by the `E`/`W` field
    pub const MAGNETIC_VARIATION: Self = Self::unsigned(3, 1);
    /// Compass heading in integer degrees, `110`
    pub const HEADING: Self = Self::signed(3, 0);
    /// Temperature and dew point, `15.5`
    pub const TEMPERATURE: Self = Self::signed(1, 1);
    /// Wind speed, in knots or m/s, `23.5`
    pub const SPEED: Self = Self::signed(1, 1);
    /// Speed through water, `08.500`
    pub const BOAT_SPEED: Self = Self::signed(2, 3);
    /// Pressure in bars or inches of mercury, `1.0136`
    pub const PRESSURE_BARS: Self = Self::signed(1, 4);
    /// Pressure in pascals, `101`
    pub const PRESSURE_PASCALS: Self = Self::signed(1, 0);
    /// Humidity percentage, `75`
    pub const PERCENT: Self = Self::signed(1, 0);
    /// Wind direction in integer degrees, `270`
    pub const DIRECTION: Self = Self::signed(1, 0);

    pub const fn signed(min_int_digits: u8, decimals: u8) -> Self {
        Self {
            min_int_digits,
            decimals,
            signed: true,
        }
    }

    pub const fn unsigned(min_int_digits: u8, decimals: u8) -> Self {
        Self {
            min_int_digits,
            decimals,
            signed: false,
        }
    }

    pub fn write<W: Write>(&self, value: f64, out: &mut W) -> fmt::Result {
        if !value.is_finite() {
            return Ok(());
        }
        let decimals = usize::from(self.decimals);

        let mut shortest = String::new();
        write!(shortest, "{}", FloatCore::abs(value))?;
        let (int_part, frac_part) = shortest
            .split_once('.')
            .unwrap_or((shortest.as_str(), ""));

        let mut digits: Vec<u8> = Vec::with_capacity(int_part.len() + decimals + 1);
        digits.extend(int_part.bytes());
        digits.extend(frac_part.bytes().chain(iter::repeat(b'0')).take(decimals));
        if frac_part
            .as_bytes()
            .get(decimals)
            .is_some_and(|&first_dropped| first_dropped >= b'5')
        {
            round_up(&mut digits);
        }

        let is_zero = digits.iter().all(|&d| d == b'0');
        if self.signed && value < 0.0 && !is_zero {
            out.write_char('-')?;
        }
        let int_len = digits.len() - decimals;
        for _ in int_len..usize::from(self.min_int_digits) {
            out.write_char('0')?;
        }
        for &d in &digits[..int_len] {
            out.write_char(char::from(d))?;
        }
        if decimals > 0 {
            out.write_char('.')?;
            for &d in &digits[int_len..] {
                out.write_char(char::from(d))?;
            }
        }
        Ok(())
    }

    pub fn format(&self, value: f64) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write(value, &mut out);
        out
    }
}

/// Add one unit in the last place of a string of ASCII digits
fn round_up(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Shortest decimal text of `value` with at least one fractional digit, `75.0`, `1.0136`
pub(crate) fn write_plain<W: Write>(value: f64, out: &mut W) -> fmt::Result {
    if !value.is_finite() {
        return Ok(());
    }
    let mut text = String::new();
    write!(text, "{}", value)?;
    out.write_str(&text)?;
    if !text.contains('.') {
        out.write_str(".0")?;
    }
    Ok(())
}

/// Split signed decimal degrees into whole degrees and decimal minutes of the magnitude
pub(crate) fn degrees_minutes(value: f64) -> (f64, f64) {
    let magnitude = FloatCore::abs(value);
    let degrees = FloatCore::trunc(magnitude);
    // fractional degrees as a percentage, then scaled to 60 minutes
    let minutes = 0.6 * ((magnitude - degrees) * 100.0);
    (degrees, minutes)
}
