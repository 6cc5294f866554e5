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

//! Density of aviation kerosene.
//!
//! Both ratios describe the same Jet A-1 density at ISA conditions. Liters
//! are the pivot unit, so each constant is the mass of one liter of fuel.

pub const POUNDS_IN_KILOGRAMS: f64 = 0.4535924;

/// Kilograms of kerosene in one liter.
pub const KILOGRAMS_PER_LITER: f64 = 0.8;

/// Pounds of kerosene in one liter.
pub const POUNDS_PER_LITER: f64 = KILOGRAMS_PER_LITER / POUNDS_IN_KILOGRAMS;
