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

use std::sync::LazyLock;

use regex::Regex;

pub const PLUS_SIGN: &'static str = "+";

/// Matches a run of ASCII decimal digits; used with full matching.
pub const DIGITS: &'static str = "[0-9]*";

pub const DEFAULT_INVALID_NUMBER_MESSAGE: &'static str = "Invalid Mobile Number";
pub const DEFAULT_NOT_NUMERIC_MESSAGE: &'static str = "Only digits are allowed";

pub static DIGITS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(DIGITS) {
        Ok(regex) => regex,
        Err(err) => {
            log::error!("Digits pattern failed to compile: {}", err);
            panic!("Digits pattern failed to compile: {}", err);
        }
    }
});
