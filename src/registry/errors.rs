// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;

/// Misuse detected while building a [`CountryRegistry`](super::CountryRegistry).
///
/// Lookups on a built registry never fail, so these are the only
/// exceptional conditions the crate reports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Registry must contain at least one country")]
    Empty,
    #[error("ISO code {0} is not a two-letter code")]
    InvalidIsoCode(String),
    #[error("ISO code {0} appears more than once")]
    DuplicateIsoCode(String),
    #[error("Dial code '{dial_code}' of {iso_code} must be a non-empty run of digits")]
    InvalidDialCode { iso_code: String, dial_code: String },
    #[error("Region code '{region_code}' of {iso_code} must contain digits only")]
    InvalidRegionCode { iso_code: String, region_code: String },
    #[error("Length bounds {min}..={max} of {iso_code} are invalid")]
    InvalidLengthBounds { iso_code: String, min: usize, max: usize },
}
