mod orchestrator_tests;
mod phone_number_tests;

use std::{
    collections::VecDeque,
    sync::{
        Mutex, Once,
        atomic::{AtomicUsize, Ordering},
    },
};

use tokio::sync::oneshot;

use crate::{CountryRecord, CountryRegistry, ExternalValidator, PhoneNumber, ValidatorOutput};

static ONCE: Once = Once::new();

pub(crate) fn init_logging() {
    ONCE.call_once(|| {
        let _ = colog::default_builder()
            .filter_level(log::LevelFilter::Trace)
            .try_init();
    });
}

/// Countries "1" and "123" overlap; "1" is listed twice to exercise the
/// canonical-order tie-break.
pub(crate) fn overlapping_registry() -> CountryRegistry {
    CountryRegistry::new(vec![
        CountryRecord::new("AA", "One", "1", "", 4, 10),
        CountryRecord::new("BB", "One Two Three", "123", "", 4, 10),
        CountryRecord::new("CC", "One again", "1", "", 4, 10),
    ])
    .expect("test registry is valid")
}

/// Validator whose answers are released by the test through oneshot senders,
/// one per call, in call order.
#[derive(Default)]
pub(crate) struct ControlledValidator {
    receivers: Mutex<VecDeque<oneshot::Receiver<Option<String>>>>,
    pub(crate) seen: Mutex<Vec<PhoneNumber>>,
}

impl ControlledValidator {
    /// Queues the next answer and returns the sender that releases it.
    pub(crate) fn expect_call(&self) -> oneshot::Sender<Option<String>> {
        let (tx, rx) = oneshot::channel();
        self.receivers.lock().unwrap().push_back(rx);
        tx
    }

    pub(crate) fn calls(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

impl ExternalValidator for ControlledValidator {
    fn validate(&self, number: &PhoneNumber) -> ValidatorOutput {
        self.seen.lock().unwrap().push(number.clone());
        let rx = self
            .receivers
            .lock()
            .unwrap()
            .pop_front()
            .expect("validator called more often than the test expected");
        ValidatorOutput::pending(async move { rx.await.ok().flatten() })
    }
}

/// Synchronous validator answering with a fixed message and counting calls.
pub(crate) struct FixedValidator {
    pub(crate) answer: Option<String>,
    pub(crate) calls: AtomicUsize,
}

impl FixedValidator {
    pub(crate) fn new(answer: Option<&str>) -> Self {
        Self { answer: answer.map(str::to_owned), calls: AtomicUsize::new(0) }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ExternalValidator for FixedValidator {
    fn validate(&self, _number: &PhoneNumber) -> ValidatorOutput {
        self.calls.fetch_add(1, Ordering::SeqCst);
        ValidatorOutput::Ready(self.answer.clone())
    }
}
