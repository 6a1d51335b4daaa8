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

use std::{
    fmt,
    future::IntoFuture,
    sync::{
        Arc, Mutex, MutexGuard, PoisonError, Weak,
        atomic::{AtomicBool, AtomicU64, Ordering},
    },
};

use futures::{FutureExt, future::BoxFuture};
use log::{debug, trace};

use crate::{
    interfaces::{ExternalValidator, ValidatorOutput},
    registry::CountryRecord,
};

use super::{
    enums::{Settlement, ValidationMode},
    errors::BuiltinViolation,
    phone_number::PhoneNumber,
    resolver::ResolutionResult,
    validator::{ValidationMessages, check_builtin},
};

/// Mutable validation state of one field instance.
///
/// Shared with pending asynchronous validations through a `Weak` handle, so
/// a result arriving after the field is gone has nowhere to land.
struct ValidationState {
    /// Bumped before every change; a pending result applies only if its
    /// captured generation is still the current one.
    generation: AtomicU64,
    disposed: AtomicBool,
    current_message: Mutex<Option<String>>,
}

impl ValidationState {
    fn new() -> Self {
        Self {
            generation: AtomicU64::new(0),
            disposed: AtomicBool::new(false),
            current_message: Mutex::new(None),
        }
    }

    fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    fn lock_message(&self) -> MutexGuard<'_, Option<String>> {
        self.current_message.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn set_message(&self, message: Option<String>) {
        *self.lock_message() = message;
    }

    fn apply_if_current(&self, generation: u64, message: Option<String>) -> Settlement {
        let mut current = self.lock_message();
        if self.disposed.load(Ordering::SeqCst) {
            return Settlement::Disposed;
        }
        let current_generation = self.generation();
        if current_generation != generation {
            return Settlement::Stale { generation, current_generation };
        }
        *current = message.clone();
        Settlement::Applied(message)
    }
}

/// Result of one change as seen by the host.
#[derive(Debug)]
pub struct ChangeOutcome {
    /// Message to display right away.
    pub message: Option<String>,
    /// Asynchronous validator result still to come, if any.
    pub pending: Option<PendingValidation>,
}

impl ChangeOutcome {
    fn settled(message: Option<String>) -> Self {
        Self { message, pending: None }
    }
}

/// An external validator result that has not arrived yet.
///
/// The host drives it, typically by spawning `pending.into_future()` on its
/// runtime. Dropping it abandons the result.
pub struct PendingValidation {
    generation: u64,
    /// Built-in message kept when the validator accepts the number.
    builtin_message: Option<String>,
    state: Weak<ValidationState>,
    future: BoxFuture<'static, Option<String>>,
}

impl PendingValidation {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Waits for the validator and applies its message if the change that
    /// started it is still the latest one and the field is alive.
    pub async fn settle(self) -> Settlement {
        let Self { generation, builtin_message, state, future } = self;
        let external = future.await;
        let Some(state) = state.upgrade() else {
            trace!("Field dropped before validation of generation {} finished", generation);
            return Settlement::Disposed;
        };
        let settlement = state.apply_if_current(generation, external.or(builtin_message));
        match &settlement {
            Settlement::Stale { current_generation, .. } => trace!(
                "Discarding validation of generation {}, field is at {}",
                generation,
                current_generation
            ),
            Settlement::Disposed => trace!("Discarding validation of generation {} for disposed field", generation),
            Settlement::Applied(_) => trace!("Applied validation of generation {}", generation),
        }
        settlement
    }
}

impl IntoFuture for PendingValidation {
    type Output = Settlement;
    type IntoFuture = BoxFuture<'static, Settlement>;

    fn into_future(self) -> Self::IntoFuture {
        self.settle().boxed()
    }
}

impl fmt::Debug for PendingValidation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingValidation")
            .field("generation", &self.generation)
            .field("builtin_message", &self.builtin_message)
            .finish_non_exhaustive()
    }
}

/// Reconciles built-in checks with the optional external validator and owns
/// the single current message of a field.
pub struct ValidationOrchestrator {
    state: Arc<ValidationState>,
    mode: ValidationMode,
    length_check_enabled: bool,
    messages: ValidationMessages,
    validator: Option<Arc<dyn ExternalValidator>>,
}

impl ValidationOrchestrator {
    pub fn new(
        mode: ValidationMode,
        length_check_enabled: bool,
        messages: ValidationMessages,
        validator: Option<Arc<dyn ExternalValidator>>,
    ) -> Self {
        Self {
            state: Arc::new(ValidationState::new()),
            mode,
            length_check_enabled,
            messages,
            validator,
        }
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    pub fn current_message(&self) -> Option<String> {
        self.state.lock_message().clone()
    }

    pub fn generation(&self) -> u64 {
        self.state.generation()
    }

    pub fn is_disposed(&self) -> bool {
        self.state.disposed.load(Ordering::SeqCst)
    }

    /// Starts a fresh lifecycle: generation and message are reset and
    /// anything still pending from before is dropped when it arrives.
    ///
    /// Under [`ValidationMode::Always`] the initial number is validated right
    /// away, otherwise nothing runs.
    pub fn on_initialize(&mut self, resolution: &ResolutionResult) -> ChangeOutcome {
        self.state.disposed.store(true, Ordering::SeqCst);
        self.state = Arc::new(ValidationState::new());
        if self.mode != ValidationMode::Always {
            return ChangeOutcome::settled(None);
        }
        let number = resolution.phone_number();
        self.evaluate(self.state.generation(), &number, &resolution.country)
    }

    /// Validates the national number as typed.
    ///
    /// The generation is bumped first, so any result still pending from an
    /// earlier change becomes stale.
    pub fn on_change(&self, raw_national_number: &str, country: &CountryRecord) -> ChangeOutcome {
        let generation = self.state.next_generation();
        if self.mode == ValidationMode::Disabled {
            return ChangeOutcome::settled(self.current_message());
        }
        let number = PhoneNumber::new(country, raw_national_number);
        self.evaluate(generation, &number, country)
    }

    /// Validation requested by the host, e.g. on submit.
    ///
    /// Runs regardless of mode. An asynchronous validator result cannot be
    /// awaited here: it is dropped and the built-in result is returned.
    pub fn on_manual_validate(&self, national_number: &str, country: &CountryRecord) -> Option<String> {
        let builtin = check_builtin(national_number, country, self.length_check_enabled);
        let builtin_message = self.builtin_message(builtin);
        let message = match (builtin, &self.validator) {
            (Err(BuiltinViolation::NonNumeric), _) | (_, None) => builtin_message,
            (_, Some(validator)) => {
                match validator.validate(&PhoneNumber::new(country, national_number)) {
                    ValidatorOutput::Ready(Some(message)) => Some(message),
                    ValidatorOutput::Ready(None) => builtin_message,
                    ValidatorOutput::Pending(_) => {
                        debug!("Manual validation cannot wait for an asynchronous validator, using built-in result");
                        builtin_message
                    }
                }
            }
        };
        self.state.set_message(message.clone());
        message
    }

    /// Tears the field down. Results still pending are dropped on arrival.
    pub fn dispose(&self) {
        self.state.disposed.store(true, Ordering::SeqCst);
    }

    fn builtin_message(&self, builtin: Result<(), BuiltinViolation>) -> Option<String> {
        builtin.err().map(|violation| self.messages.message_for(violation).to_owned())
    }

    fn evaluate(&self, generation: u64, number: &PhoneNumber, country: &CountryRecord) -> ChangeOutcome {
        let builtin = check_builtin(number.national_number(), country, self.length_check_enabled);
        let builtin_message = self.builtin_message(builtin);

        // a non-numeric candidate is never shown to the external validator
        let validator = match (&self.validator, builtin) {
            (_, Err(BuiltinViolation::NonNumeric)) => None,
            (Some(validator), _) if self.mode.validates_externally_on_change() => Some(validator),
            _ => None,
        };
        let Some(validator) = validator else {
            self.state.apply_if_current(generation, builtin_message.clone());
            return ChangeOutcome::settled(builtin_message);
        };

        match validator.validate(number) {
            ValidatorOutput::Ready(external) => {
                let message = external.or(builtin_message);
                self.state.apply_if_current(generation, message.clone());
                ChangeOutcome::settled(message)
            }
            ValidatorOutput::Pending(future) => {
                self.state.apply_if_current(generation, builtin_message.clone());
                trace!("Validation of generation {} is pending", generation);
                ChangeOutcome {
                    message: builtin_message.clone(),
                    pending: Some(PendingValidation {
                        generation,
                        builtin_message,
                        state: Arc::downgrade(&self.state),
                        future,
                    }),
                }
            }
        }
    }
}
