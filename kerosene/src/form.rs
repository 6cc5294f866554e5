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

//! State of the converter screen.
//!
//! [`ConverterForm`] holds what the user entered: the source unit, the value
//! as typed and the target unit. Its [`output`] is evaluated from that state
//! on every read, so it always reflects the latest input without a separate
//! update step.
//!
//! [`output`]: ConverterForm::output

use std::fmt;

use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::engine::{ConversionRequest, Quantity};
use crate::error::Error;
use crate::unit::Unit;

/// The value shown when the form opens.
const INITIAL_VALUE: &str = "100.00";

/// What the result display of the form shows.
#[derive(Clone, PartialEq, Debug)]
pub enum Output {
    Result(Quantity),
    Error(Error),
}

impl Output {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Returns the converted value with two decimals, if there is one.
    pub fn magnitude(&self) -> Option<String> {
        match self {
            Self::Result(q) => Some(q.magnitude()),
            Self::Error(_) => None,
        }
    }

    /// Returns the symbol of the converted value's unit, if there is one.
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            Self::Result(q) => Some(q.unit.symbol()),
            Self::Error(_) => None,
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Result(q) => write!(f, "{q}"),
            Self::Error(e) => write!(f, "{e}"),
        }
    }
}

/// Input of a kerosene conversion as entered by the user.
///
/// # Examples
///
/// ```
/// use kerosene::{ConverterForm, Unit};
///
/// let mut form = ConverterForm::new();
/// assert_eq!(form.output().to_string(), "45.36 Kg");
///
/// form.set_to_unit(Unit::Liters);
/// form.set_value("200");
/// assert_eq!(form.output().to_string(), "113.40 L");
///
/// form.reset();
/// assert_eq!(form.output().to_string(), "0.00 Kg");
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConverterForm {
    from_unit: Unit,
    value: String,
    to_unit: Unit,
}

impl ConverterForm {
    /// Constructs the form as it opens, converting 100 pounds to kilograms.
    pub fn new() -> Self {
        Self {
            from_unit: Unit::Pounds,
            value: INITIAL_VALUE.to_string(),
            to_unit: Unit::Kilograms,
        }
    }

    /// Returns the units to select from.
    pub fn units() -> &'static [Unit] {
        &Unit::ALL
    }

    pub fn from_unit(&self) -> Unit {
        self.from_unit
    }

    pub fn to_unit(&self) -> Unit {
        self.to_unit
    }

    /// Returns the value as it was entered.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_from_unit(&mut self, unit: Unit) {
        debug!("source unit set to {unit}");
        self.from_unit = unit;
    }

    pub fn set_to_unit(&mut self, unit: Unit) {
        debug!("target unit set to {unit}");
        self.to_unit = unit;
    }

    pub fn set_value<S: Into<String>>(&mut self, value: S) {
        self.value = value.into();
        debug!("value set to {:?}", self.value);
    }

    /// Exchanges the source and target unit.
    pub fn swap_units(&mut self) {
        std::mem::swap(&mut self.from_unit, &mut self.to_unit);
        debug!("units swapped to {} -> {}", self.from_unit, self.to_unit);
    }

    /// Clears the value and selects pounds to kilograms.
    pub fn reset(&mut self) {
        debug!("form reset");
        self.from_unit = Unit::Pounds;
        self.value.clear();
        self.to_unit = Unit::Kilograms;
    }

    /// Converts the current input.
    pub fn output(&self) -> Output {
        match ConversionRequest::parse(&self.value, self.from_unit, self.to_unit).evaluate() {
            Ok(q) => Output::Result(q),
            Err(e) => Output::Error(e),
        }
    }
}

impl Default for ConverterForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_with_pounds_to_kilograms() {
        let form = ConverterForm::new();
        assert_eq!(form.from_unit(), Unit::Pounds);
        assert_eq!(form.to_unit(), Unit::Kilograms);
        assert_eq!(form.value(), "100.00");
        assert_eq!(form.output().magnitude(), Some("45.36".to_string()));
        assert_eq!(form.output().symbol(), Some("Kg"));
    }

    #[test]
    fn output_follows_input() {
        let mut form = ConverterForm::new();

        form.set_from_unit(Unit::Liters);
        assert_eq!(form.output().to_string(), "80.00 Kg");

        form.set_to_unit(Unit::Pounds);
        form.set_value("10");
        assert_eq!(form.output().to_string(), "17.64 Lbs");

        form.set_value("ten");
        assert_eq!(form.output().to_string(), "0.00 Lbs");
    }

    #[test]
    fn same_unit_shows_error() {
        let mut form = ConverterForm::new();
        form.set_to_unit(Unit::Pounds);

        let output = form.output();
        assert!(output.is_error());
        assert_eq!(output, Output::Error(Error::SameUnit));
        assert_eq!(output.to_string(), "select different units");
        assert_eq!(output.magnitude(), None);
        assert_eq!(output.symbol(), None);
    }

    #[test]
    fn swap_units() {
        let mut form = ConverterForm::new();
        form.swap_units();
        assert_eq!(form.from_unit(), Unit::Kilograms);
        assert_eq!(form.to_unit(), Unit::Pounds);
        assert_eq!(form.output().to_string(), "220.46 Lbs");
    }

    #[test]
    fn reset_clears_value_and_units() {
        let mut form = ConverterForm::new();
        form.set_from_unit(Unit::Kilograms);
        form.set_to_unit(Unit::Kilograms);
        form.set_value("42");
        assert!(form.output().is_error());

        form.reset();
        assert_eq!(form.from_unit(), Unit::Pounds);
        assert_eq!(form.to_unit(), Unit::Kilograms);
        assert_eq!(form.value(), "");
        assert_eq!(form.output(), Output::Result(Quantity::zero(Unit::Kilograms)));
        assert_eq!(form.output().to_string(), "0.00 Kg");
    }

    #[test]
    fn units_in_selector_order() {
        assert_eq!(
            ConverterForm::units(),
            &[Unit::Pounds, Unit::Liters, Unit::Kilograms]
        );
    }
}
