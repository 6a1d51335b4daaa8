use std::sync::Arc;

use crate::{
    CountryRecord, DEFAULT_REGISTRY, ExternalValidator, ResolutionResult, Settlement,
    ValidationMessages, ValidationMode, ValidationOrchestrator,
};

use super::{ControlledValidator, FixedValidator, init_logging};

fn us() -> CountryRecord {
    DEFAULT_REGISTRY.find_by_iso("US").unwrap().clone()
}

fn orchestrator(mode: ValidationMode, validator: Option<Arc<dyn ExternalValidator>>) -> ValidationOrchestrator {
    init_logging();
    ValidationOrchestrator::new(mode, true, ValidationMessages::default(), validator)
}

fn invalid_number() -> Option<String> {
    Some(ValidationMessages::default().invalid_number)
}

fn not_numeric() -> Option<String> {
    Some(ValidationMessages::default().not_numeric)
}

#[test]
fn builtin_result_without_external_validator() {
    let orchestrator = orchestrator(ValidationMode::Automatic, None);
    assert_eq!(orchestrator.on_change("415", &us()).message, invalid_number());
    assert_eq!(orchestrator.current_message(), invalid_number());
    assert_eq!(orchestrator.on_change("4155552671", &us()).message, None);
    assert_eq!(orchestrator.current_message(), None);
    assert_eq!(orchestrator.generation(), 2);
}

#[test]
fn synchronous_external_message_supersedes_length_failure() {
    let validator = Arc::new(FixedValidator::new(Some("number is blocked")));
    let orchestrator = orchestrator(ValidationMode::Automatic, Some(validator.clone()));

    let outcome = orchestrator.on_change("415", &us());
    assert_eq!(outcome.message.as_deref(), Some("number is blocked"));
    assert!(outcome.pending.is_none());
    assert_eq!(orchestrator.current_message().as_deref(), Some("number is blocked"));
    assert_eq!(validator.calls(), 1);
}

#[test]
fn accepting_external_validator_keeps_builtin_message() {
    let validator = Arc::new(FixedValidator::new(None));
    let orchestrator = orchestrator(ValidationMode::Always, Some(validator.clone()));
    assert_eq!(orchestrator.on_change("415", &us()).message, invalid_number());
    assert_eq!(orchestrator.on_change("4155552671", &us()).message, None);
    assert_eq!(validator.calls(), 2);
}

#[test]
fn non_numeric_input_never_reaches_external_validator() {
    let validator = Arc::new(FixedValidator::new(Some("external")));
    let orchestrator = orchestrator(ValidationMode::Automatic, Some(validator.clone()));
    assert_eq!(orchestrator.on_change("415a552671", &us()).message, not_numeric());
    assert_eq!(orchestrator.on_manual_validate("415a552671", &us()), not_numeric());
    assert_eq!(validator.calls(), 0);
}

#[test]
fn manual_mode_defers_external_validator() {
    let validator = Arc::new(FixedValidator::new(Some("external")));
    let orchestrator = orchestrator(ValidationMode::Manual, Some(validator.clone()));

    assert_eq!(orchestrator.on_change("415", &us()).message, invalid_number());
    assert_eq!(orchestrator.on_change("4155552671", &us()).message, None);
    assert_eq!(validator.calls(), 0);

    assert_eq!(orchestrator.on_manual_validate("4155552671", &us()).as_deref(), Some("external"));
    assert_eq!(validator.calls(), 1);
    assert_eq!(orchestrator.current_message().as_deref(), Some("external"));
}

#[test]
fn disabled_mode_leaves_message_untouched() {
    let validator = Arc::new(FixedValidator::new(Some("external")));
    let orchestrator = orchestrator(ValidationMode::Disabled, Some(validator.clone()));

    assert_eq!(orchestrator.on_change("abc", &us()).message, None);
    assert_eq!(orchestrator.current_message(), None);
    assert_eq!(orchestrator.generation(), 1);
    assert_eq!(validator.calls(), 0);

    // an explicit validation still runs and its message survives later changes
    assert_eq!(orchestrator.on_manual_validate("415", &us()).as_deref(), Some("external"));
    assert_eq!(orchestrator.on_change("4155552671", &us()).message.as_deref(), Some("external"));
}

#[tokio::test]
async fn asynchronous_message_applies_after_builtin_result() {
    let validator = Arc::new(ControlledValidator::default());
    let orchestrator = orchestrator(ValidationMode::Automatic, Some(validator.clone()));
    let release = validator.expect_call();

    let outcome = orchestrator.on_change("415", &us());
    assert_eq!(outcome.message, invalid_number());
    let pending = outcome.pending.expect("validator answers asynchronously");
    assert_eq!(pending.generation(), 1);

    release.send(Some("number is taken".to_owned())).unwrap();
    assert_eq!(pending.settle().await, Settlement::Applied(Some("number is taken".to_owned())));
    assert_eq!(orchestrator.current_message().as_deref(), Some("number is taken"));
}

#[tokio::test]
async fn asynchronous_acceptance_keeps_builtin_message() {
    let validator = Arc::new(ControlledValidator::default());
    let orchestrator = orchestrator(ValidationMode::Automatic, Some(validator.clone()));
    let release = validator.expect_call();

    let pending = orchestrator.on_change("415", &us()).pending.unwrap();
    release.send(None).unwrap();
    assert_eq!(pending.settle().await, Settlement::Applied(invalid_number()));
    assert_eq!(orchestrator.current_message(), invalid_number());
}

#[tokio::test]
async fn stale_result_never_overwrites_newer_change() {
    let validator = Arc::new(ControlledValidator::default());
    let orchestrator = orchestrator(ValidationMode::Automatic, Some(validator.clone()));
    let release_first = validator.expect_call();
    let release_second = validator.expect_call();

    let first = orchestrator.on_change("415555267", &us()).pending.unwrap();
    let second = orchestrator.on_change("4155552671", &us()).pending.unwrap();

    release_second.send(None).unwrap();
    assert_eq!(second.settle().await, Settlement::Applied(None));

    release_first.send(Some("from the first keystroke".to_owned())).unwrap();
    assert_eq!(
        first.settle().await,
        Settlement::Stale { generation: 1, current_generation: 2 }
    );
    assert_eq!(orchestrator.current_message(), None);

    let seen = validator.seen.lock().unwrap();
    assert_eq!(seen[0].national_number(), "415555267");
    assert_eq!(seen[1].national_number(), "4155552671");
}

#[tokio::test]
async fn stale_result_arriving_first_is_discarded() {
    let validator = Arc::new(ControlledValidator::default());
    let orchestrator = orchestrator(ValidationMode::Automatic, Some(validator.clone()));
    let release_first = validator.expect_call();
    let release_second = validator.expect_call();

    let first = orchestrator.on_change("415555267", &us()).pending.unwrap();
    let second = orchestrator.on_change("4155552671", &us()).pending.unwrap();

    release_first.send(Some("first".to_owned())).unwrap();
    assert!(matches!(first.settle().await, Settlement::Stale { .. }));
    assert_eq!(orchestrator.current_message(), None);

    release_second.send(Some("second".to_owned())).unwrap();
    assert_eq!(second.settle().await, Settlement::Applied(Some("second".to_owned())));
    assert_eq!(orchestrator.current_message().as_deref(), Some("second"));
}

#[tokio::test]
async fn results_for_disposed_field_are_dropped() {
    let validator = Arc::new(ControlledValidator::default());
    let orchestrator = orchestrator(ValidationMode::Automatic, Some(validator.clone()));
    let release = validator.expect_call();

    let pending = orchestrator.on_change("4155552671", &us()).pending.unwrap();
    orchestrator.dispose();
    assert!(orchestrator.is_disposed());
    release.send(Some("late".to_owned())).unwrap();
    assert_eq!(pending.settle().await, Settlement::Disposed);
    assert_eq!(orchestrator.current_message(), None);

    let release = validator.expect_call();
    let other = self::orchestrator(ValidationMode::Automatic, Some(validator.clone()));
    let pending = other.on_change("4155552671", &us()).pending.unwrap();
    drop(other);
    release.send(Some("late".to_owned())).unwrap();
    assert_eq!(pending.settle().await, Settlement::Disposed);
}

#[tokio::test]
async fn manual_validation_drops_asynchronous_result() {
    let validator = Arc::new(ControlledValidator::default());
    let orchestrator = orchestrator(ValidationMode::Manual, Some(validator.clone()));
    let _release = validator.expect_call();

    assert_eq!(orchestrator.on_manual_validate("415", &us()), invalid_number());
    assert_eq!(validator.calls(), 1);
}

#[tokio::test]
async fn pending_validation_can_be_spawned() {
    let validator = Arc::new(ControlledValidator::default());
    let orchestrator = orchestrator(ValidationMode::Automatic, Some(validator.clone()));
    let release = validator.expect_call();

    let pending = orchestrator.on_change("4155552671", &us()).pending.unwrap();
    let handle = tokio::spawn(pending.into_future());
    release.send(Some("checked remotely".to_owned())).unwrap();
    assert_eq!(
        handle.await.unwrap(),
        Settlement::Applied(Some("checked remotely".to_owned()))
    );
    assert_eq!(orchestrator.current_message().as_deref(), Some("checked remotely"));
}

#[tokio::test]
async fn initialisation_validates_only_in_always_mode() {
    let resolution = ResolutionResult { country: us(), national_number: "415".to_owned() };

    let validator = Arc::new(FixedValidator::new(None));
    let mut automatic = orchestrator(ValidationMode::Automatic, Some(validator.clone()));
    let outcome = automatic.on_initialize(&resolution);
    assert_eq!(outcome.message, None);
    assert_eq!(validator.calls(), 0);

    let mut always = orchestrator(ValidationMode::Always, Some(validator.clone()));
    let outcome = always.on_initialize(&resolution);
    assert_eq!(outcome.message, invalid_number());
    assert_eq!(always.current_message(), invalid_number());
    assert_eq!(validator.calls(), 1);
}

#[tokio::test]
async fn reinitialisation_resets_generation_and_drops_pending() {
    let validator = Arc::new(ControlledValidator::default());
    let mut orchestrator = orchestrator(ValidationMode::Always, Some(validator.clone()));
    let release_change = validator.expect_call();
    let pending = orchestrator.on_change("4155552671", &us()).pending.unwrap();
    assert_eq!(orchestrator.generation(), 1);

    let release_init = validator.expect_call();
    let resolution = ResolutionResult { country: us(), national_number: "4155552671".to_owned() };
    let init = orchestrator.on_initialize(&resolution);
    assert_eq!(orchestrator.generation(), 0);
    let init_pending = init.pending.unwrap();
    assert_eq!(init_pending.generation(), 0);

    release_change.send(Some("old".to_owned())).unwrap();
    assert_eq!(pending.settle().await, Settlement::Disposed);

    release_init.send(Some("initial".to_owned())).unwrap();
    assert_eq!(init_pending.settle().await, Settlement::Applied(Some("initial".to_owned())));
    assert_eq!(orchestrator.current_message().as_deref(), Some("initial"));
}
