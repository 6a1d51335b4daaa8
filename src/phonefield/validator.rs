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

use crate::{registry::CountryRecord, regex_util::RegexFullMatch};

use super::{
    errors::BuiltinViolation,
    helper_constants::{DEFAULT_INVALID_NUMBER_MESSAGE, DEFAULT_NOT_NUMERIC_MESSAGE, DIGITS_PATTERN},
};

/// Messages surfaced for built-in violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationMessages {
    pub invalid_number: String,
    pub not_numeric: String,
}

impl Default for ValidationMessages {
    fn default() -> Self {
        Self {
            invalid_number: DEFAULT_INVALID_NUMBER_MESSAGE.to_owned(),
            not_numeric: DEFAULT_NOT_NUMERIC_MESSAGE.to_owned(),
        }
    }
}

impl ValidationMessages {
    pub fn message_for(&self, violation: BuiltinViolation) -> &str {
        match violation {
            BuiltinViolation::NonNumeric => &self.not_numeric,
            BuiltinViolation::LengthOutOfRange { .. } => &self.invalid_number,
        }
    }
}

pub(crate) fn contains_only_digits(s: &str) -> bool {
    DIGITS_PATTERN.full_match(s)
}

/// Runs the numeric check, then the length check when enabled.
///
/// The numeric check is never skipped. An empty number is numeric, so it
/// only fails through the length check.
pub fn check_builtin(
    national_number: &str,
    country: &CountryRecord,
    length_check_enabled: bool,
) -> Result<(), BuiltinViolation> {
    if !contains_only_digits(national_number) {
        return Err(BuiltinViolation::NonNumeric);
    }
    if !length_check_enabled {
        return Ok(());
    }
    // only ascii digits are left, so bytes == chars
    let actual = national_number.len();
    if country.accepts_length(actual) {
        Ok(())
    } else {
        Err(BuiltinViolation::LengthOutOfRange {
            min: country.min_length(),
            max: country.max_length(),
            actual,
        })
    }
}

/// Built-in validation of an already stripped national number.
///
/// Returns the configured message for the first violated rule, `None` if
/// the number passes.
pub fn validate_builtin(
    national_number: &str,
    country: &CountryRecord,
    length_check_enabled: bool,
    messages: &ValidationMessages,
) -> Option<String> {
    check_builtin(national_number, country, length_check_enabled)
        .err()
        .map(|violation| messages.message_for(violation).to_owned())
}
