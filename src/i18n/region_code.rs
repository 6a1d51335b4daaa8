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

/// Offset between an ASCII uppercase letter and its regional indicator symbol.
const REGIONAL_INDICATOR_OFFSET: u32 = 0x1F1E6 - 'A' as u32;

pub struct RegionCode {
}

impl RegionCode {
    /// Returns the ISO code used when neither an explicit hint nor a
    /// calling code identifies the country.
    pub fn get_default() -> &'static str {
        return Self::us();
    }

    pub fn us() -> &'static str {
        return "US";
    }

    /// Returns true if `code` has the shape of an ISO 3166-1 alpha-2 code.
    /// Case is not significant.
    pub fn is_well_formed(code: &str) -> bool {
        code.len() == 2 && code.bytes().all(|b| b.is_ascii_alphabetic())
    }

    /// Builds the flag emoji for an alpha-2 code out of two regional
    /// indicator symbols, e.g. `"GB"` -> `"🇬🇧"`.
    ///
    /// Returns an empty string for codes that are not well formed.
    pub fn flag_glyph(code: &str) -> String {
        if !Self::is_well_formed(code) {
            return String::new();
        }
        code.chars()
            .filter_map(|c| char::from_u32(c.to_ascii_uppercase() as u32 + REGIONAL_INDICATOR_OFFSET))
            .collect()
    }
}
