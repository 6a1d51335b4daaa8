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

use log::{debug, trace};

use crate::{
    i18n::RegionCode,
    registry::{CountryRecord, CountryRegistry},
};

use super::{helper_constants::PLUS_SIGN, phone_number::PhoneNumber};

/// Selected country and the digits left once its prefix was removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionResult {
    pub country: CountryRecord,
    pub national_number: String,
}

impl ResolutionResult {
    pub fn phone_number(&self) -> PhoneNumber {
        PhoneNumber::new(&self.country, self.national_number.as_str())
    }
}

/// Resolves raw field values to a country of an explicitly supplied registry.
#[derive(Debug, Clone, Copy)]
pub struct CountryResolver<'r> {
    registry: &'r CountryRegistry,
    default_iso_code: &'r str,
}

impl<'r> CountryResolver<'r> {
    pub fn new(registry: &'r CountryRegistry) -> Self {
        Self { registry, default_iso_code: RegionCode::get_default() }
    }

    /// Sets the ISO code used when the input carries neither a hint nor a
    /// `+` calling code.
    pub fn with_default_iso_code(mut self, default_iso_code: &'r str) -> Self {
        self.default_iso_code = default_iso_code;
        self
    }

    pub fn registry(&self) -> &'r CountryRegistry {
        self.registry
    }

    /// Determines the country of `raw_value` and strips its prefix.
    ///
    /// Without a hint, a `+`-prefixed value is matched by calling code,
    /// longest full code first. Otherwise the country comes from the hint
    /// (or the default ISO code) and its full code is removed once, with or
    /// without a leading `+`.
    pub fn resolve_initial(&self, raw_value: &str, explicit_iso_hint: Option<&str>) -> ResolutionResult {
        match explicit_iso_hint {
            None if raw_value.starts_with(PLUS_SIGN) => self.resolve_by_calling_code(raw_value),
            hint => self.resolve_by_iso(raw_value, hint.unwrap_or(self.default_iso_code)),
        }
    }

    /// Selects the country for `iso_code` keeping `national_number` as is.
    pub fn resolve_for_iso(&self, iso_code: &str, national_number: &str) -> ResolutionResult {
        let country = self.registry.find_by_iso_or_default(iso_code);
        trace!("Country changed to {}, keeping '{}'", country.iso_code(), national_number);
        ResolutionResult {
            country: country.clone(),
            national_number: national_number.to_owned(),
        }
    }

    fn resolve_by_calling_code(&self, raw_value: &str) -> ResolutionResult {
        let digits = &raw_value[PLUS_SIGN.len()..];
        match self.registry.find_by_full_code_prefix(digits) {
            Some(country) => {
                let national_number = &digits[country.full_code().len()..];
                trace!(
                    "Resolved '{}' to {} by calling code +{}",
                    raw_value,
                    country.iso_code(),
                    country.full_code()
                );
                ResolutionResult {
                    country: country.clone(),
                    national_number: national_number.to_owned(),
                }
            }
            None => {
                // Unknown calling code: the value is kept whole, `+` included,
                // so the numeric check reports it.
                let country = self.registry.default_country();
                debug!(
                    "No calling code matches '{}', falling back to {}",
                    raw_value,
                    country.iso_code()
                );
                ResolutionResult {
                    country: country.clone(),
                    national_number: raw_value.to_owned(),
                }
            }
        }
    }

    fn resolve_by_iso(&self, raw_value: &str, iso_code: &str) -> ResolutionResult {
        let country = self.registry.find_by_iso_or_default(iso_code);
        let national_number = strip_country_prefix(raw_value, country);
        trace!(
            "Resolved '{}' to {} by ISO code, national number '{}'",
            raw_value,
            country.iso_code(),
            national_number
        );
        ResolutionResult {
            country: country.clone(),
            national_number: national_number.to_owned(),
        }
    }
}

fn strip_country_prefix<'a>(raw_value: &'a str, country: &CountryRecord) -> &'a str {
    let digits = raw_value.strip_prefix(PLUS_SIGN).unwrap_or(raw_value);
    digits.strip_prefix(country.full_code()).unwrap_or(raw_value)
}
