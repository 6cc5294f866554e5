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

/// Creates a [`Quantity`] in pounds.
///
/// [`Quantity`]: crate::Quantity
#[macro_export]
macro_rules! lbs {
    ($value:expr) => {
        $crate::Quantity::new($value, $crate::Unit::Pounds)
    };
}

/// Creates a [`Quantity`] in liters.
///
/// [`Quantity`]: crate::Quantity
#[macro_export]
macro_rules! liters {
    ($value:expr) => {
        $crate::Quantity::new($value, $crate::Unit::Liters)
    };
}

/// Creates a [`Quantity`] in kilograms.
///
/// [`Quantity`]: crate::Quantity
#[macro_export]
macro_rules! kg {
    ($value:expr) => {
        $crate::Quantity::new($value, $crate::Unit::Kilograms)
    };
}
