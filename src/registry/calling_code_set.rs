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

use std::collections::HashSet;

use log::trace;

use crate::{
    i18n::{COUNTRIES, CountryRecord},
    interfaces::CallingCodeMatcher,
    normalizer::helper_constants::PLUS_SIGN,
    string_util::is_ascii_digits,
};

/// The distinct calling codes known to the host, longest first.
///
/// Built once and never mutated afterwards. Ordering by descending length
/// makes "first code that prefixes the digits" the same thing as "longest
/// code that prefixes the digits", so lookups are a plain ordered scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallingCodeSet {
    codes: Vec<String>,
}

impl CallingCodeSet {
    /// Builds the set from raw dial codes as a country picker holds them.
    ///
    /// A leading `+` is dropped and whitespace trimmed; anything that is not
    /// then a non-empty run of ASCII digits is skipped. Duplicates keep their
    /// first occurrence, and codes of equal length keep input order.
    pub fn build<I, S>(dial_codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut codes = Vec::new();

        for raw in dial_codes {
            let raw = raw.as_ref();
            let trimmed = raw.trim();
            let code = trimmed.strip_prefix(PLUS_SIGN).unwrap_or(trimmed).trim();
            if !is_ascii_digits(code) {
                trace!("Dropping malformed dial code '{raw}'");
                continue;
            }
            if seen.insert(code.to_owned()) {
                codes.push(code.to_owned());
            }
        }
        // `sort_by` is stable, equal lengths stay in first-seen order.
        codes.sort_by(|a, b| b.len().cmp(&a.len()));

        trace!("Built calling code set with {} codes", codes.len());
        Self { codes }
    }

    pub fn from_countries(countries: &[CountryRecord]) -> Self {
        Self::build(countries.iter().map(|country| country.dial_code))
    }

    /// For hosts that keep calling codes as integers.
    pub fn from_numeric<I>(codes: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        let mut buf = itoa::Buffer::new();
        Self::build(
            codes
                .into_iter()
                .map(|code| buf.format(code).to_owned())
                .collect::<Vec<_>>(),
        )
    }

    /// The set derived from the embedded country dataset.
    pub fn embedded() -> Self {
        Self::from_countries(COUNTRIES)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Accepts the code with or without its leading `+`.
    pub fn contains(&self, code: &str) -> bool {
        let code = code.trim();
        let code = code.strip_prefix(PLUS_SIGN).unwrap_or(code);
        self.codes.iter().any(|known| known == code)
    }
}

impl CallingCodeMatcher for CallingCodeSet {
    fn longest_prefix_of<'a>(&'a self, digits: &str) -> Option<&'a str> {
        self.codes
            .iter()
            .find(|code| digits.starts_with(code.as_str()))
            .map(String::as_str)
    }
}
