// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Conversion between kerosene mass and volume.
//!
//! A conversion normalizes the value to liters with the source unit's density
//! ratio and scales it to the target unit with the target's ratio. Unreadable
//! input is not an error but converts as zero, leaving a distinct source and
//! target unit as the only requirement a conversion has.

use std::fmt;

use log::{debug, trace};
use rust_decimal::{Decimal, RoundingStrategy};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::unit::Unit;

/// An amount of kerosene in a unit.
///
/// Displays with two decimals followed by the unit's symbol unless another
/// precision is requested:
///
/// ```
/// use kerosene::kg;
///
/// assert_eq!(kg!(45.35924).to_string(), "45.36 Kg");
/// assert_eq!(format!("{:.1}", kg!(45.35924)), "45.4 Kg");
/// ```
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quantity {
    pub value: f64,
    pub unit: Unit,
}

impl Quantity {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Returns a zero quantity in the `unit`.
    pub fn zero(unit: Unit) -> Self {
        Self { value: 0.0, unit }
    }

    /// Converts the quantity into the `unit`.
    ///
    /// # Errors
    ///
    /// Returns [`SameUnit`] if the quantity is already in `unit`.
    ///
    /// [`SameUnit`]: Error::SameUnit
    pub fn convert_to(&self, unit: Unit) -> Result<Self> {
        ConversionRequest::new(self.value, self.unit, unit).evaluate()
    }

    /// Returns the value rounded to two decimals without the symbol.
    pub fn magnitude(&self) -> String {
        format_decimals(self.value, 2)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        write!(f, "{} {}", format_decimals(self.value, precision), self.unit)
    }
}

/// A value to convert from one unit into another.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct ConversionRequest {
    pub value: f64,
    pub from: Unit,
    pub to: Unit,
}

impl ConversionRequest {
    pub fn new(value: f64, from: Unit, to: Unit) -> Self {
        Self { value, from, to }
    }

    /// Reads the `value` from user input.
    ///
    /// Input without a leading number is read as zero. See [`parse_value`].
    pub fn parse(raw: &str, from: Unit, to: Unit) -> Self {
        let value = parse_value(raw).unwrap_or_else(|| {
            debug!("input {raw:?} is not a number, converting zero");
            0.0
        });

        Self::new(value, from, to)
    }

    /// Converts the value into the target unit.
    ///
    /// # Errors
    ///
    /// Returns [`SameUnit`] if the source and target unit are equal.
    ///
    /// [`SameUnit`]: Error::SameUnit
    pub fn evaluate(&self) -> Result<Quantity> {
        if self.from == self.to {
            return Err(Error::SameUnit);
        }

        // this also maps -0 to 0
        if self.value == 0.0 {
            return Ok(Quantity::zero(self.to));
        }

        let liters = self.from.to_liters(self.value);
        let value = self.to.from_liters(liters);
        trace!(
            "converted {} {} ({liters} L) to {value} {}",
            self.value,
            self.from,
            self.to
        );

        Ok(Quantity::new(value, self.to))
    }
}

/// Converts the user input `raw` from one unit into another.
///
/// Returns the converted value with two decimals followed by the symbol of
/// the target unit. Input that doesn't start with a number converts as zero.
///
/// # Examples
///
/// ```
/// use kerosene::{convert, Error, Unit};
///
/// assert_eq!(convert("100", Unit::Pounds, Unit::Kilograms), Ok("45.36 Kg".to_string()));
/// assert_eq!(convert("abc", Unit::Pounds, Unit::Kilograms), Ok("0.00 Kg".to_string()));
/// assert_eq!(convert("100", Unit::Liters, Unit::Liters), Err(Error::SameUnit));
/// ```
///
/// # Errors
///
/// Returns [`SameUnit`] if `from` and `to` are equal, regardless of the input.
///
/// [`SameUnit`]: Error::SameUnit
pub fn convert(raw: &str, from: Unit, to: Unit) -> Result<String> {
    ConversionRequest::parse(raw, from, to)
        .evaluate()
        .map(|q| q.to_string())
}

/// Formats `value` with `precision` decimals, rounding halves away from zero.
///
/// The rounding works on the exact binary value, so `0.625` becomes `0.63`
/// while `0.615` (stored slightly below) becomes `0.61`.
fn format_decimals(value: f64, precision: usize) -> String {
    // scale of a Decimal is limited to 28 digits
    let scale = precision.min(28) as u32;

    match Decimal::from_f64_retain(value) {
        Some(d) => {
            let mut d = d.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
            d.rescale(scale);
            d.to_string()
        }
        None => format!("{value:.precision$}"),
    }
}

/// Reads a number from the start of `raw`.
///
/// Leading whitespace is skipped and the longest prefix that forms a decimal
/// number with an optional sign, fraction and exponent is taken. Anything
/// after it is ignored, so `"12.5 kg"` reads as `12.5`. Returns `None` if
/// there is no such prefix or the number is not finite.
///
/// Unlike a browser's `parseFloat`, `"Infinity"` and numbers overflowing to
/// infinity (e.g. `"1e400"`) are rejected on purpose, so they convert as zero
/// and every result keeps two decimals.
pub fn parse_value(raw: &str) -> Option<f64> {
    fn digits(bytes: &[u8]) -> usize {
        bytes.iter().take_while(|b| b.is_ascii_digit()).count()
    }

    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_digits = digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    // an exponent counts only if digits follow
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }

        let exp_digits = digits(&bytes[exp..]);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_unit_fails() {
        for unit in Unit::ALL {
            assert_eq!(convert("100", unit, unit), Err(Error::SameUnit));
            assert_eq!(convert("abc", unit, unit), Err(Error::SameUnit));
            assert_eq!(convert("", unit, unit), Err(Error::SameUnit));
        }
    }

    #[test]
    fn unreadable_input_is_zero() {
        assert_eq!(
            convert("abc", Unit::Pounds, Unit::Kilograms),
            Ok("0.00 Kg".to_string())
        );
        assert_eq!(
            convert("", Unit::Kilograms, Unit::Liters),
            Ok("0.00 L".to_string())
        );
        assert_eq!(
            convert("-", Unit::Liters, Unit::Pounds),
            Ok("0.00 Lbs".to_string())
        );
    }

    #[test]
    fn zero_input() {
        assert_eq!(
            convert("0", Unit::Liters, Unit::Pounds),
            Ok("0.00 Lbs".to_string())
        );
        assert_eq!(
            convert("-0.0", Unit::Pounds, Unit::Liters),
            Ok("0.00 L".to_string())
        );
    }

    #[test]
    fn pounds_to_kilograms() {
        assert_eq!(
            convert("100", Unit::Pounds, Unit::Kilograms),
            Ok("45.36 Kg".to_string())
        );
    }

    #[test]
    fn each_conversion_of_hundred() {
        let expected = [
            (Unit::Pounds, Unit::Liters, "56.70 L"),
            (Unit::Liters, Unit::Pounds, "176.37 Lbs"),
            (Unit::Liters, Unit::Kilograms, "80.00 Kg"),
            (Unit::Kilograms, Unit::Liters, "125.00 L"),
            (Unit::Kilograms, Unit::Pounds, "220.46 Lbs"),
        ];

        for (from, to, result) in expected {
            assert_eq!(convert("100", from, to), Ok(result.to_string()));
        }
    }

    #[test]
    fn halves_round_away_from_zero() {
        assert_eq!(
            convert("0.5", Unit::Kilograms, Unit::Liters),
            Ok("0.63 L".to_string())
        );
        assert_eq!(
            convert("0.1", Unit::Kilograms, Unit::Liters),
            Ok("0.13 L".to_string())
        );
        assert_eq!(
            convert("-0.5", Unit::Kilograms, Unit::Liters),
            Ok("-0.63 L".to_string())
        );
        assert_eq!(
            convert("1234.5", Unit::Kilograms, Unit::Liters),
            Ok("1543.13 L".to_string())
        );
        assert_eq!(Quantity::new(0.625, Unit::Liters).magnitude(), "0.63");
        assert_eq!(format!("{:.1}", Quantity::new(0.25, Unit::Liters)), "0.3 L");
    }

    #[test]
    fn non_finite_input_converts_as_zero() {
        assert_eq!(
            convert("Infinity", Unit::Liters, Unit::Kilograms),
            Ok("0.00 Kg".to_string())
        );
        assert_eq!(
            convert("1e400", Unit::Liters, Unit::Kilograms),
            Ok("0.00 Kg".to_string())
        );
    }

    #[test]
    fn negative_values_convert() {
        assert_eq!(
            convert("-100", Unit::Liters, Unit::Kilograms),
            Ok("-80.00 Kg".to_string())
        );
    }

    #[test]
    fn parse_leading_number() {
        assert_eq!(parse_value("100"), Some(100.0));
        assert_eq!(parse_value("  12.5 kg"), Some(12.5));
        assert_eq!(parse_value(".5"), Some(0.5));
        assert_eq!(parse_value("5."), Some(5.0));
        assert_eq!(parse_value("+3"), Some(3.0));
        assert_eq!(parse_value("-2.25"), Some(-2.25));
        assert_eq!(parse_value("1e3"), Some(1000.0));
        assert_eq!(parse_value("2E-2"), Some(0.02));
        assert_eq!(parse_value("7e"), Some(7.0));
        assert_eq!(parse_value("7e+"), Some(7.0));
        assert_eq!(parse_value("1,5"), Some(1.0));
    }

    #[test]
    fn parse_rejects_non_numbers() {
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("   "), None);
        assert_eq!(parse_value("."), None);
        assert_eq!(parse_value("-"), None);
        assert_eq!(parse_value("abc"), None);
        assert_eq!(parse_value("e5"), None);
        assert_eq!(parse_value("inf"), None);
        assert_eq!(parse_value("NaN"), None);
        assert_eq!(parse_value("1e400"), None);
    }

    #[test]
    fn quantity_convert_to() {
        let fuel = Quantity::new(100.0, Unit::Liters);
        assert_eq!(
            fuel.convert_to(Unit::Kilograms),
            Ok(Quantity::new(80.0, Unit::Kilograms))
        );
        assert_eq!(fuel.convert_to(Unit::Liters), Err(Error::SameUnit));
    }

    #[test]
    fn magnitude_without_symbol() {
        assert_eq!(Quantity::new(176.369_81, Unit::Pounds).magnitude(), "176.37");
        assert_eq!(Quantity::zero(Unit::Liters).magnitude(), "0.00");
    }
}
