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

pub mod enums;
pub mod errors;
pub mod helper_constants;
pub mod orchestrator;
pub mod phone_number;
pub mod phonefield;
pub mod resolver;
pub mod validator;

pub use enums::{Settlement, ValidationMode};
pub use errors::{BuiltinViolation, NumberValidationError};
pub use orchestrator::{ChangeOutcome, PendingValidation, ValidationOrchestrator};
pub use phone_number::PhoneNumber;
pub use phonefield::{CountryChange, Initialization, PhoneField, PhoneFieldConfig, TextChange};
pub use resolver::{CountryResolver, ResolutionResult};
pub use validator::{ValidationMessages, check_builtin, validate_builtin};
