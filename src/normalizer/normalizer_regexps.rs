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

use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::{
    normalizer::helper_constants::{
        BRACKETS, INTERNATIONAL_INTENT, LABEL_TRAILER, LEADING_INTERNATIONAL_PREFIX, PLUS_DIGITS,
        SEPARATORS, ZERO_ONLY_GROUP,
    },
    regexp_cache::{InvalidRegexError, RegexCache},
};

/// Label patterns are shared between normalizers: hosts that build one
/// normalizer per request with the same labels compile the pattern once.
static LABEL_PATTERNS: LazyLock<RegexCache> = LazyLock::new(|| RegexCache::with_capacity(8));

pub(super) struct NormalizerRegExps {
    /// Input starts with `+` or `00`. Used with `matches_start`.
    pub international_intent_pattern: Regex,

    /// Case-insensitive whole-word labels plus their trailing `:`, `-` and
    /// white space. `None` when the label list is empty.
    pub noise_label_pattern: Option<Arc<Regex>>,

    /// Zero-only groups in parentheses, "(0)", "( 00 )".
    pub zero_only_group_pattern: Regex,

    /// A leading `00`, possibly after white space, to be rewritten to `+`.
    pub leading_international_prefix_pattern: Regex,

    pub separator_pattern: Regex,

    /// Bracket characters only; what they enclose stays.
    pub bracket_pattern: Regex,

    /// `+` followed by ASCII digits. Used with `full_match`.
    pub plus_digits_pattern: Regex,
}

impl NormalizerRegExps {
    pub fn new(noise_labels: &[String]) -> Result<Self, InvalidRegexError> {
        Ok(Self {
            international_intent_pattern: Regex::new(INTERNATIONAL_INTENT)?,
            noise_label_pattern: Self::noise_label_pattern(noise_labels)?,
            zero_only_group_pattern: Regex::new(ZERO_ONLY_GROUP)?,
            leading_international_prefix_pattern: Regex::new(LEADING_INTERNATIONAL_PREFIX)?,
            separator_pattern: Regex::new(SEPARATORS)?,
            bracket_pattern: Regex::new(BRACKETS)?,
            plus_digits_pattern: Regex::new(PLUS_DIGITS)?,
        })
    }

    fn noise_label_pattern(noise_labels: &[String]) -> Result<Option<Arc<Regex>>, InvalidRegexError> {
        if noise_labels.is_empty() {
            return Ok(None);
        }
        let mut labels: Vec<String> = noise_labels
            .iter()
            .map(|label| regex::escape(label.trim()))
            .collect();
        // Longer labels first so "mobile" is preferred over "mob" at the same
        // position. The order is also what makes equal label sets share one
        // cache entry.
        labels.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        labels.dedup();

        // (?i) and \b are Unicode aware in the regex crate.
        let pattern = format!(r"(?i)\b(?:{})\b{}", labels.join("|"), LABEL_TRAILER);
        LABEL_PATTERNS.get_regex(&pattern).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::NormalizerRegExps;
    use crate::regex_util::RegexFullMatch;

    fn default_labels() -> Vec<String> {
        ["tel", "phone", "mobile", "mob", "call", "fax"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn check_regexps_are_compiling() {
        NormalizerRegExps::new(&default_labels()).unwrap();
        assert!(NormalizerRegExps::new(&[]).unwrap().noise_label_pattern.is_none());
    }

    #[test]
    fn equal_label_sets_share_pattern() {
        let mut reversed = default_labels();
        reversed.reverse();
        let a = NormalizerRegExps::new(&default_labels()).unwrap();
        let b = NormalizerRegExps::new(&reversed).unwrap();
        assert!(Arc::ptr_eq(
            a.noise_label_pattern.as_ref().unwrap(),
            b.noise_label_pattern.as_ref().unwrap()
        ));
    }

    #[test]
    fn label_pattern_is_whole_word_and_case_insensitive() {
        let reg_exps = NormalizerRegExps::new(&default_labels()).unwrap();
        let labels = reg_exps.noise_label_pattern.unwrap();
        assert_eq!(labels.replace_all("TEL: 123", ""), "123");
        assert_eq!(labels.replace_all("Mobile - 123", ""), "123");
        assert_eq!(labels.replace_all("mob:123", ""), "123");
        assert_eq!(labels.replace_all("hotel 123", ""), "hotel 123");
        assert_eq!(labels.replace_all("telephone 123", ""), "telephone 123");
    }

    #[test]
    fn stage_patterns() {
        let reg_exps = NormalizerRegExps::new(&default_labels()).unwrap();
        assert_eq!(reg_exps.zero_only_group_pattern.replace_all("+44 (0) 20 ( 00 ) (202)", ""), "+44  20  (202)");
        assert_eq!(reg_exps.leading_international_prefix_pattern.replacen(" 0044 00", 1, "+"), "+44 00");
        assert_eq!(reg_exps.separator_pattern.replace_all("1/2.3_4-5\u{2013}6\u{2014}7\\8 9\t0", ""), "1234567890");
        assert_eq!(reg_exps.bracket_pattern.replace_all("(20){7}[9]", ""), "2079");
        assert!(reg_exps.plus_digits_pattern.full_match("+4420"));
        assert!(!reg_exps.plus_digits_pattern.full_match("+44\u{0662}0"));
    }
}
