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

use std::fmt;

use crate::registry::{CountryRecord, CountryRegistry};

use super::{
    errors::NumberValidationError,
    helper_constants::PLUS_SIGN,
    resolver::CountryResolver,
    validator::check_builtin,
};

/// Phone number value handed to hosts and external validators.
///
/// Built fresh on every change and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    country_iso_code: String,
    /// `+` followed by the country's full code.
    country_code: String,
    national_number: String,
}

impl PhoneNumber {
    pub fn new(country: &CountryRecord, national_number: impl Into<String>) -> Self {
        Self {
            country_iso_code: country.iso_code().to_owned(),
            country_code: fast_cat::concat_str!(PLUS_SIGN, country.full_code()),
            national_number: national_number.into(),
        }
    }

    /// Splits a `+`-prefixed complete number into country and national
    /// number, e.g. `"+14155552671"` -> (`US`, `"4155552671"`).
    ///
    /// Follows the same rules as initial resolution without a hint, so an
    /// unmatched calling code falls back to the registry's first country.
    pub fn from_complete_number(registry: &CountryRegistry, complete_number: &str) -> Self {
        let resolution = CountryResolver::new(registry).resolve_initial(complete_number, None);
        Self::new(&resolution.country, resolution.national_number)
    }

    pub fn country_iso_code(&self) -> &str {
        &self.country_iso_code
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn national_number(&self) -> &str {
        &self.national_number
    }

    /// Country code and national number joined, e.g. `"+442071838750"`.
    pub fn complete_number(&self) -> String {
        fast_cat::concat_str!(&self.country_code, &self.national_number)
    }

    /// Checks the national number against the bounds of its country as
    /// found in `registry`.
    ///
    /// A country missing from `registry` is checked against the registry's
    /// first country, like every other failed lookup.
    pub fn is_valid_number(&self, registry: &CountryRegistry) -> Result<(), NumberValidationError> {
        let country = registry.find_by_iso_or_default(&self.country_iso_code);
        check_builtin(&self.national_number, country, true).map_err(NumberValidationError::from)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.country_code, self.national_number)
    }
}
