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

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::Error;

/// Unit in which an amount of kerosene is given.
///
/// Mass units are related to the volume by the fuel density. Every conversion
/// goes through liters, so a unit only needs to know its own ratio to a liter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Unit {
    Pounds,
    Liters,
    Kilograms,
}

impl Unit {
    /// All units in the order they are offered for selection.
    pub const ALL: [Unit; 3] = [Self::Pounds, Self::Liters, Self::Kilograms];

    /// Returns the abbreviation that follows a converted value.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Pounds => "Lbs",
            Self::Liters => "L",
            Self::Kilograms => "Kg",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Pounds => "Pounds",
            Self::Liters => "Liters",
            Self::Kilograms => "Kilograms",
        }
    }

    /// Returns how many of this unit make up one liter of kerosene.
    pub fn per_liter(&self) -> f64 {
        match self {
            Self::Pounds => constants::POUNDS_PER_LITER,
            Self::Liters => 1.0,
            Self::Kilograms => constants::KILOGRAMS_PER_LITER,
        }
    }

    /// Converts a `value` given in this unit to liters.
    pub fn to_liters(&self, value: f64) -> f64 {
        match self {
            Self::Liters => value,
            _ => value / self.per_liter(),
        }
    }

    /// Converts a `value` in liters to this unit.
    pub fn from_liters(&self, value: f64) -> f64 {
        match self {
            Self::Liters => value,
            _ => value * self.per_liter(),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.symbol())
    }
}

impl FromStr for Unit {
    type Err = Error;

    /// Parses a unit from its symbol or name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        Self::ALL
            .into_iter()
            .find(|unit| {
                unit.symbol().eq_ignore_ascii_case(s) || unit.name().eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| Error::UnknownUnit(s.to_string()))
    }
}
