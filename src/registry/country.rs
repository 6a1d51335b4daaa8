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

use crate::i18n::RegionCode;

/// A single country of the registry.
///
/// Records are immutable once built. The match key used during resolution
/// is [`CountryRecord::full_code`], the dial code followed by the optional
/// region code, so members of a shared calling code (NANP, for example)
/// can be told apart by their leading national digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CountryRecord {
    iso_code: String,
    display_name: String,
    dial_code: String,
    region_code: String,
    full_code: String,
    min_length: usize,
    max_length: usize,
    flag_glyph: String,
}

impl CountryRecord {
    /// Creates a record with the flag glyph derived from `iso_code`.
    ///
    /// Field invariants (digits only codes, `0 < min_length <= max_length`)
    /// are checked when the record is put into a
    /// [`CountryRegistry`](super::CountryRegistry).
    pub fn new(
        iso_code: impl Into<String>,
        display_name: impl Into<String>,
        dial_code: impl Into<String>,
        region_code: impl Into<String>,
        min_length: usize,
        max_length: usize,
    ) -> Self {
        let iso_code = iso_code.into().to_ascii_uppercase();
        let dial_code = dial_code.into();
        let region_code = region_code.into();
        let full_code = fast_cat::concat_str!(&dial_code, &region_code);
        let flag_glyph = RegionCode::flag_glyph(&iso_code);
        Self {
            iso_code,
            display_name: display_name.into(),
            dial_code,
            region_code,
            full_code,
            min_length,
            max_length,
            flag_glyph,
        }
    }

    /// Replaces the derived flag glyph, e.g. for hosts rendering image assets.
    pub fn with_flag_glyph(mut self, flag_glyph: impl Into<String>) -> Self {
        self.flag_glyph = flag_glyph.into();
        self
    }

    pub fn iso_code(&self) -> &str {
        &self.iso_code
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Calling code without the leading `+`.
    pub fn dial_code(&self) -> &str {
        &self.dial_code
    }

    /// Disambiguating digits appended to the dial code, empty if none.
    pub fn region_code(&self) -> &str {
        &self.region_code
    }

    pub fn full_code(&self) -> &str {
        &self.full_code
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn flag_glyph(&self) -> &str {
        &self.flag_glyph
    }

    /// Returns true if `digits` starts with this record's full code.
    pub fn matches_full_code_prefix(&self, digits: &str) -> bool {
        digits.starts_with(&self.full_code)
    }

    pub fn accepts_length(&self, length: usize) -> bool {
        (self.min_length..=self.max_length).contains(&length)
    }
}
