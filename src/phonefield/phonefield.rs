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

use std::sync::Arc;

use log::debug;

use crate::{
    i18n::RegionCode,
    interfaces::ExternalValidator,
    registry::{CountryRecord, CountryRegistry, RegistryError},
};

use super::{
    enums::ValidationMode,
    orchestrator::{ChangeOutcome, PendingValidation, ValidationOrchestrator},
    phone_number::PhoneNumber,
    resolver::{CountryResolver, ResolutionResult},
    validator::ValidationMessages,
};

/// Everything a host supplies when a field is created.
pub struct PhoneFieldConfig {
    /// Initial value, optionally `+`-prefixed with a calling code.
    pub raw_value: Option<String>,
    pub explicit_iso_hint: Option<String>,
    /// Used when neither a hint nor a calling code selects a country.
    pub default_iso_code: String,
    /// Replaces the compiled-in registry entirely.
    pub country_override_list: Option<Vec<CountryRecord>>,
    /// Restricts the registry to these ISO codes.
    pub countries: Option<Vec<String>>,
    pub validator: Option<Arc<dyn ExternalValidator>>,
    pub mode: ValidationMode,
    pub length_check_enabled: bool,
    pub messages: ValidationMessages,
}

impl Default for PhoneFieldConfig {
    fn default() -> Self {
        Self {
            raw_value: None,
            explicit_iso_hint: None,
            default_iso_code: RegionCode::get_default().to_owned(),
            country_override_list: None,
            countries: None,
            validator: None,
            mode: ValidationMode::default(),
            length_check_enabled: true,
            messages: ValidationMessages::default(),
        }
    }
}

impl PhoneFieldConfig {
    fn build_registry(&mut self) -> Result<Arc<CountryRegistry>, RegistryError> {
        let registry = match self.country_override_list.take() {
            Some(countries) => Arc::new(CountryRegistry::new(countries)?),
            None => CountryRegistry::default_shared(),
        };
        match &self.countries {
            Some(iso_codes) => Ok(Arc::new(registry.filtered(iso_codes)?)),
            None => Ok(registry),
        }
    }
}

/// What a host renders right after initialisation.
#[derive(Debug)]
pub struct Initialization {
    pub resolution: ResolutionResult,
    pub phone_number: PhoneNumber,
    /// Set only under [`ValidationMode::Always`].
    pub message: Option<String>,
    pub pending: Option<PendingValidation>,
}

/// What a host renders after the country selector changed.
#[derive(Debug)]
pub struct CountryChange {
    pub resolution: ResolutionResult,
    pub message: Option<String>,
    pub pending: Option<PendingValidation>,
}

/// What a host renders after a keystroke.
#[derive(Debug)]
pub struct TextChange {
    pub phone_number: PhoneNumber,
    pub message: Option<String>,
    pub pending: Option<PendingValidation>,
}

/// Entry point for a UI layer: one instance per input field.
pub struct PhoneField {
    registry: Arc<CountryRegistry>,
    default_iso_code: String,
    resolution: ResolutionResult,
    orchestrator: ValidationOrchestrator,
}

impl PhoneField {
    /// Resolves the initial value and prepares validation.
    ///
    /// Fails only if the supplied country list or filter leaves no usable
    /// registry.
    pub fn initialize(mut config: PhoneFieldConfig) -> Result<(Self, Initialization), RegistryError> {
        let registry = config.build_registry()?;
        let resolution = CountryResolver::new(&registry)
            .with_default_iso_code(&config.default_iso_code)
            .resolve_initial(
                config.raw_value.as_deref().unwrap_or_default(),
                config.explicit_iso_hint.as_deref(),
            );
        debug!(
            "Initialised field with {} and '{}'",
            resolution.country.iso_code(),
            resolution.national_number
        );

        let mut orchestrator = ValidationOrchestrator::new(
            config.mode,
            config.length_check_enabled,
            config.messages,
            config.validator,
        );
        let ChangeOutcome { message, pending } = orchestrator.on_initialize(&resolution);
        let initialization = Initialization {
            phone_number: resolution.phone_number(),
            resolution: resolution.clone(),
            message,
            pending,
        };
        let field = Self {
            registry,
            default_iso_code: config.default_iso_code,
            resolution,
            orchestrator,
        };
        Ok((field, initialization))
    }

    fn resolver(&self) -> CountryResolver<'_> {
        CountryResolver::new(&self.registry).with_default_iso_code(&self.default_iso_code)
    }

    /// Selects another country, keeping the national number as typed, and
    /// revalidates it against the new country's rules.
    ///
    /// Any validation still pending for the previous country is discarded.
    pub fn change_country(&mut self, iso_code: &str) -> CountryChange {
        self.resolution = self.resolver().resolve_for_iso(iso_code, &self.resolution.national_number);
        let ChangeOutcome { message, pending } = self
            .orchestrator
            .on_change(&self.resolution.national_number, &self.resolution.country);
        CountryChange {
            resolution: self.resolution.clone(),
            message,
            pending,
        }
    }

    /// Handles a keystroke. `raw` is the national number as typed.
    pub fn on_text_changed(&mut self, raw: &str) -> TextChange {
        self.resolution.national_number = raw.to_owned();
        let ChangeOutcome { message, pending } = self.orchestrator.on_change(raw, &self.resolution.country);
        TextChange {
            phone_number: self.resolution.phone_number(),
            message,
            pending,
        }
    }

    /// Validates the current value now, e.g. on form submission.
    pub fn validate_now(&self) -> Option<String> {
        self.orchestrator
            .on_manual_validate(&self.resolution.national_number, &self.resolution.country)
    }

    /// The value to persist on save.
    pub fn on_saved(&self) -> PhoneNumber {
        self.resolution.phone_number()
    }

    pub fn current_message(&self) -> Option<String> {
        self.orchestrator.current_message()
    }

    pub fn selected_country(&self) -> &CountryRecord {
        &self.resolution.country
    }

    pub fn resolution(&self) -> &ResolutionResult {
        &self.resolution
    }

    pub fn registry(&self) -> &CountryRegistry {
        &self.registry
    }

    pub fn mode(&self) -> ValidationMode {
        self.orchestrator.mode()
    }

    pub fn dispose(&self) {
        self.orchestrator.dispose();
    }
}

impl Drop for PhoneField {
    fn drop(&mut self) {
        self.orchestrator.dispose();
    }
}
