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

/// Reason the built-in checks rejected a national number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum BuiltinViolation {
    /// The number contains something other than decimal digits.
    #[error("The national number contains non-digit characters")]
    NonNumeric,
    /// The digit count falls outside the country's bounds.
    #[error("The national number has {actual} digits, expected {min}..={max}")]
    LengthOutOfRange { min: usize, max: usize, actual: usize },
}

/// Possible outcomes when checking a standalone [`PhoneNumber`](super::phone_number::PhoneNumber)
/// against its country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum NumberValidationError {
    /// The number contains something other than decimal digits.
    #[error("The number contains invalid characters")]
    InvalidCharacters,
    /// The number is shorter than all valid numbers for this country.
    #[error("The number is shorter than all valid numbers for this country")]
    TooShort,
    /// The number is longer than all valid numbers for this country.
    #[error("The number is longer than all valid numbers for this country")]
    TooLong,
}

impl From<BuiltinViolation> for NumberValidationError {
    fn from(value: BuiltinViolation) -> Self {
        match value {
            BuiltinViolation::NonNumeric => NumberValidationError::InvalidCharacters,
            BuiltinViolation::LengthOutOfRange { min, actual, .. } if actual < min => {
                NumberValidationError::TooShort
            }
            BuiltinViolation::LengthOutOfRange { .. } => NumberValidationError::TooLong,
        }
    }
}
