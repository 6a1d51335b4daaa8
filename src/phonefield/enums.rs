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

use strum::{Display, EnumIter, EnumString};

/// When the external validator runs.
///
/// Parses from and renders as snake_case, e.g. `"manual"`.
#[derive(Debug, Display, EnumIter, EnumString, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[strum(serialize_all = "snake_case")]
pub enum ValidationMode {
    /// **Validate on every change.**
    /// Built-in checks and the external validator run on each keystroke.
    #[default]
    Automatic,
    /// **Validate on request only.**
    /// Changes surface built-in results; the external validator runs when
    /// the host asks for a manual validation.
    Manual,
    /// **No validation on change.**
    /// The current message is left as it was.
    Disabled,
    /// **Validate from the start.**
    /// Like `Automatic`, but the initial value is validated on initialisation.
    Always,
}

impl ValidationMode {
    /// Returns true if the external validator runs as part of a change.
    pub fn validates_externally_on_change(self) -> bool {
        matches!(self, Self::Automatic | Self::Always)
    }
}

/// Outcome of driving a pending asynchronous validation to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement {
    /// The result was current and became the field's message.
    Applied(Option<String>),
    /// A newer change superseded the result; it was discarded.
    Stale { generation: u64, current_generation: u64 },
    /// The field was disposed or re-initialised before the result arrived.
    Disposed,
}
