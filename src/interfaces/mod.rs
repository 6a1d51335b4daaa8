use std::future::Future;

use futures::{FutureExt, future::BoxFuture};

use crate::phonefield::phone_number::PhoneNumber;

/// What a caller-supplied validator hands back for one candidate number.
///
/// Validators that can answer immediately return [`ValidatorOutput::Ready`];
/// validators that need to suspend (a lookup service, a debounce timer)
/// return [`ValidatorOutput::Pending`] and the orchestrator reconciles the
/// result once the host drives it to completion.
pub enum ValidatorOutput {
    /// `None` means the validator accepts the number.
    Ready(Option<String>),
    Pending(BoxFuture<'static, Option<String>>),
}

impl ValidatorOutput {
    pub fn accept() -> Self {
        Self::Ready(None)
    }

    pub fn reject(message: impl Into<String>) -> Self {
        Self::Ready(Some(message.into()))
    }

    pub fn pending<F>(future: F) -> Self
    where
        F: Future<Output = Option<String>> + Send + 'static,
    {
        Self::Pending(future.boxed())
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending(_))
    }
}

impl std::fmt::Debug for ValidatorOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ready(message) => f.debug_tuple("Ready").field(message).finish(),
            Self::Pending(_) => f.write_str("Pending(..)"),
        }
    }
}

/// Caller-supplied validation run against the candidate number on change,
/// on initialisation under `Always`, and on manual validation.
pub trait ExternalValidator: Send + Sync {
    fn validate(&self, number: &PhoneNumber) -> ValidatorOutput;
}

impl<F> ExternalValidator for F
where
    F: Fn(&PhoneNumber) -> ValidatorOutput + Send + Sync,
{
    fn validate(&self, number: &PhoneNumber) -> ValidatorOutput {
        self(number)
    }
}
