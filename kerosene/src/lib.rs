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

//! Conversion of aviation kerosene between mass and volume.
//!
//! Kerosene is given in pounds, kilograms or liters. Mass and volume are
//! related by a fixed density at ISA conditions (see [`constants`]), and every
//! conversion goes through liters:
//!
//! ```
//! use kerosene::{convert, Unit};
//!
//! let kg = convert("100", Unit::Pounds, Unit::Kilograms)?;
//! assert_eq!(kg, "45.36 Kg");
//! # Ok::<(), kerosene::Error>(())
//! ```
//!
//! The [`ConverterForm`] keeps the input of a converter screen and evaluates
//! its output on demand.
//!
//! # Features
//!
//! - `serde`: derives `Serialize` and `Deserialize` for the units, quantities
//!   and the form input.

pub mod constants;
mod engine;
mod error;
mod form;
mod macros;
mod unit;

pub use engine::{convert, parse_value, ConversionRequest, Quantity};
pub use error::{Error, Result};
pub use form::{ConverterForm, Output};
pub use unit::Unit;

pub mod prelude {
    pub use crate::convert;
    pub use crate::ConverterForm;
    pub use crate::Quantity;
    pub use crate::Unit;
}
