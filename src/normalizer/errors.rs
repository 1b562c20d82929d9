// Copyright (C) 2025 Kashin Vladislav
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

use crate::regexp_cache::InvalidRegexError;

/// Why an input could not be normalized.
///
/// Only `try_normalize` shows this; `normalize` folds every variant into the
/// empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum NormalizationError {
    #[error("Input is empty")]
    EmptyInput,
    #[error("No digits left after cleanup")]
    NoDigits,
    #[error("Too short for E.164: {0} digits")]
    TooShort(usize),
    #[error("Too long for E.164: {0} digits")]
    TooLong(usize),
    #[error("Number would start with 0 right after the plus sign")]
    LeadingZero,
}

#[derive(Debug, Error)]
pub enum BuildNormalizerError {
    #[error("{0}")]
    InvalidRegex(#[from] InvalidRegexError),
    #[error("Invalid noise label: '{0}'")]
    InvalidLabel(String),
}
