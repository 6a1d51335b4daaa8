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

mod countries;
mod country;
pub mod errors;

use std::{
    collections::{HashMap, HashSet},
    sync::{Arc, LazyLock},
};

use log::{trace, warn};

use crate::i18n::RegionCode;

pub use country::CountryRecord;
pub use errors::RegistryError;

/// Registry built from the compiled-in country table.
pub static DEFAULT_REGISTRY: LazyLock<Arc<CountryRegistry>> = LazyLock::new(|| {
    match CountryRegistry::new(countries::compiled_countries()) {
        Ok(registry) => Arc::new(registry),
        Err(err) => {
            let err_message = format!("Compiled-in country table is invalid: {}", err);
            log::error!("{}", err_message);
            panic!("{}", err_message);
        }
    }
});

/// Read-only catalog of countries in canonical order.
///
/// The canonical order is the order the records were supplied in. It is the
/// tie-break between records sharing a full code, and its first entry is
/// the documented fallback for every lookup that does not match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRegistry {
    countries: Vec<CountryRecord>,
    /// Uppercased ISO code to index in `countries`.
    iso_index: HashMap<String, usize>,
}

impl CountryRegistry {
    pub fn new(countries: Vec<CountryRecord>) -> Result<Self, RegistryError> {
        if countries.is_empty() {
            return Err(RegistryError::Empty);
        }
        let mut iso_index = HashMap::with_capacity(countries.len());
        for (index, country) in countries.iter().enumerate() {
            validate_record(country)?;
            if iso_index.insert(country.iso_code().to_owned(), index).is_some() {
                return Err(RegistryError::DuplicateIsoCode(country.iso_code().to_owned()));
            }
        }
        Ok(Self { countries, iso_index })
    }

    /// Shared handle to the compiled-in registry.
    pub fn default_shared() -> Arc<Self> {
        DEFAULT_REGISTRY.clone()
    }

    /// Keeps only the countries whose ISO code is listed, in canonical order.
    ///
    /// Codes that are not in the registry are ignored.
    pub fn filtered<S: AsRef<str>>(&self, iso_codes: &[S]) -> Result<Self, RegistryError> {
        let wanted: HashSet<String> = iso_codes
            .iter()
            .map(|code| code.as_ref().to_ascii_uppercase())
            .collect();
        for code in &wanted {
            if !self.iso_index.contains_key(code) {
                warn!("Country filter names unknown ISO code {}, ignoring", code);
            }
        }
        let countries = self
            .countries
            .iter()
            .filter(|country| wanted.contains(country.iso_code()))
            .cloned()
            .collect();
        Self::new(countries)
    }

    /// All records in canonical order.
    pub fn all(&self) -> &[CountryRecord] {
        &self.countries
    }

    pub fn iter(&self) -> impl Iterator<Item = &CountryRecord> {
        self.countries.iter()
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// The first record in canonical order.
    pub fn default_country(&self) -> &CountryRecord {
        // construction rejects empty lists
        &self.countries[0]
    }

    /// ASCII case-insensitive lookup by ISO code.
    pub fn find_by_iso(&self, iso_code: &str) -> Option<&CountryRecord> {
        let index = match self.iso_index.get(iso_code) {
            Some(index) => Some(index),
            None => self.iso_index.get(&iso_code.to_ascii_uppercase()),
        }?;
        self.countries.get(*index)
    }

    /// Finds the record with the longest full code that prefixes `digits`.
    ///
    /// Dial codes are not prefix-free ("1" and "1268" both exist), so the
    /// longest match is taken. Records sharing an identical full code are
    /// resolved to the first one in canonical order.
    pub fn find_by_full_code_prefix(&self, digits: &str) -> Option<&CountryRecord> {
        let mut best: Option<&CountryRecord> = None;
        for country in &self.countries {
            if !country.matches_full_code_prefix(digits) {
                continue;
            }
            let longer = best.map_or(true, |b| country.full_code().len() > b.full_code().len());
            if longer {
                best = Some(country);
            }
        }
        if let Some(country) = best {
            trace!("Full code {} of {} prefixes '{}'", country.full_code(), country.iso_code(), digits);
        }
        best
    }

    /// Lookup by ISO code falling back to [`CountryRegistry::default_country`].
    pub fn find_by_iso_or_default(&self, iso_code: &str) -> &CountryRecord {
        self.find_by_iso(iso_code).unwrap_or_else(|| {
            log::debug!(
                "ISO code {} is not in the registry, falling back to {}",
                iso_code,
                self.default_country().iso_code()
            );
            self.default_country()
        })
    }
}

fn validate_record(country: &CountryRecord) -> Result<(), RegistryError> {
    let iso_code = country.iso_code();
    if !RegionCode::is_well_formed(iso_code) {
        return Err(RegistryError::InvalidIsoCode(iso_code.to_owned()));
    }
    let dial_code = country.dial_code();
    if dial_code.is_empty() || !dial_code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RegistryError::InvalidDialCode {
            iso_code: iso_code.to_owned(),
            dial_code: dial_code.to_owned(),
        });
    }
    let region_code = country.region_code();
    if !region_code.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RegistryError::InvalidRegionCode {
            iso_code: iso_code.to_owned(),
            region_code: region_code.to_owned(),
        });
    }
    let (min, max) = (country.min_length(), country.max_length());
    if min == 0 || min > max {
        return Err(RegistryError::InvalidLengthBounds { iso_code: iso_code.to_owned(), min, max });
    }
    Ok(())
}
