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

//! Country resolution and validation orchestration for international
//! phone-number input fields.
//!
//! A raw value such as `"+14155552671"` is split into a country of a
//! [`CountryRegistry`] and a national number, which is then validated by
//! built-in digit and length checks together with an optional caller
//! supplied [`ExternalValidator`] that may answer synchronously or
//! asynchronously.

mod interfaces;
mod phonefield;
mod registry;
pub mod i18n;
pub(crate) mod regex_util;

#[cfg(test)]
mod tests;

pub use interfaces::{ExternalValidator, ValidatorOutput};
pub use phonefield::{
    BuiltinViolation, ChangeOutcome, CountryChange, CountryResolver, Initialization, NumberValidationError,
    PendingValidation, PhoneField, PhoneFieldConfig, PhoneNumber, ResolutionResult, Settlement,
    TextChange, ValidationMessages, ValidationMode, ValidationOrchestrator, check_builtin,
    validate_builtin,
};
pub use registry::{CountryRecord, CountryRegistry, DEFAULT_REGISTRY, RegistryError};
