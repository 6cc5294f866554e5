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

use kerosene::prelude::*;
use kerosene::Output;
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(js_name = Unit)]
#[derive(Debug, Clone, Copy)]
pub struct JsUnit {
    inner: Unit,
}

#[wasm_bindgen(js_class = Unit)]
impl JsUnit {
    /// Reads the unit from its symbol or name, e.g. `"Lbs"` or `"liters"`.
    #[wasm_bindgen(constructor)]
    pub fn new(unit: &str) -> Result<Self, JsError> {
        let inner = unit.parse::<Unit>()?;
        Ok(Self { inner })
    }

    pub fn pounds() -> Self {
        Self {
            inner: Unit::Pounds,
        }
    }

    pub fn liters() -> Self {
        Self {
            inner: Unit::Liters,
        }
    }

    pub fn kilograms() -> Self {
        Self {
            inner: Unit::Kilograms,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.inner.name().to_string()
    }

    #[wasm_bindgen(js_name = toString)]
    pub fn symbol(&self) -> String {
        self.inner.symbol().to_string()
    }
}

impl From<JsUnit> for Unit {
    fn from(value: JsUnit) -> Self {
        value.inner
    }
}

impl From<Unit> for JsUnit {
    fn from(value: Unit) -> Self {
        Self { inner: value }
    }
}

/// The result panel as plain object.
#[derive(Serialize)]
struct ResultDisplay {
    magnitude: Option<String>,
    symbol: Option<&'static str>,
    error: Option<String>,
}

impl From<Output> for ResultDisplay {
    fn from(output: Output) -> Self {
        Self {
            magnitude: output.magnitude(),
            symbol: output.symbol(),
            error: match output {
                Output::Error(e) => Some(e.to_string()),
                Output::Result(_) => None,
            },
        }
    }
}

#[wasm_bindgen(js_name = Converter)]
pub struct JsConverter {
    inner: ConverterForm,
}

#[wasm_bindgen(js_class = Converter)]
impl JsConverter {
    #[wasm_bindgen(constructor)]
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            inner: ConverterForm::new(),
        }
    }

    #[wasm_bindgen(getter = fromUnit)]
    pub fn from_unit(&self) -> JsUnit {
        self.inner.from_unit().into()
    }

    #[wasm_bindgen(setter = fromUnit)]
    pub fn set_from_unit(&mut self, unit: &JsUnit) {
        self.inner.set_from_unit((*unit).into());
    }

    #[wasm_bindgen(getter = toUnit)]
    pub fn to_unit(&self) -> JsUnit {
        self.inner.to_unit().into()
    }

    #[wasm_bindgen(setter = toUnit)]
    pub fn set_to_unit(&mut self, unit: &JsUnit) {
        self.inner.set_to_unit((*unit).into());
    }

    #[wasm_bindgen(getter)]
    pub fn value(&self) -> String {
        self.inner.value().to_string()
    }

    #[wasm_bindgen(setter)]
    pub fn set_value(&mut self, value: String) {
        self.inner.set_value(value);
    }

    /// The converted value followed by the unit symbol.
    ///
    /// Throws if both units are the same.
    #[wasm_bindgen(getter)]
    pub fn result(&self) -> Result<String, JsError> {
        match self.inner.output() {
            Output::Result(q) => Ok(q.to_string()),
            Output::Error(e) => Err(e.into()),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn magnitude(&self) -> Option<String> {
        self.inner.output().magnitude()
    }

    #[wasm_bindgen(getter)]
    pub fn symbol(&self) -> Option<String> {
        self.inner.output().symbol().map(String::from)
    }

    #[wasm_bindgen(getter)]
    pub fn error(&self) -> Option<String> {
        match self.inner.output() {
            Output::Error(e) => Some(e.to_string()),
            Output::Result(_) => None,
        }
    }

    /// Returns `{ magnitude, symbol, error }` of the current output.
    #[wasm_bindgen(getter)]
    pub fn display(&self) -> Result<JsValue, JsValue> {
        let display = ResultDisplay::from(self.inner.output());
        Ok(serde_wasm_bindgen::to_value(&display)?)
    }

    /// Returns the converted quantity as `{ value, unit }`.
    #[wasm_bindgen(getter)]
    pub fn quantity(&self) -> Result<JsValue, JsValue> {
        match self.inner.output() {
            Output::Result(q) => Ok(serde_wasm_bindgen::to_value(&q)?),
            Output::Error(_) => Ok(JsValue::UNDEFINED),
        }
    }

    #[wasm_bindgen(js_name = swapUnits)]
    pub fn swap_units(&mut self) {
        self.inner.swap_units();
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }
}

/// Returns the unit symbols in the order they are offered for selection.
#[wasm_bindgen]
pub fn units() -> Vec<String> {
    ConverterForm::units()
        .iter()
        .map(|unit| unit.symbol().to_string())
        .collect()
}

/// Converts the `value` from one unit into another.
#[wasm_bindgen]
pub fn convert(value: &str, from: &JsUnit, to: &JsUnit) -> Result<String, JsError> {
    Ok(kerosene::convert(value, (*from).into(), (*to).into())?)
}
