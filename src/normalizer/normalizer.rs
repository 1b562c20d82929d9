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

use log::{error, trace};

use super::{
    config::NormalizerConfig,
    enums::{DialingIntent, DigitScripts},
    errors::{BuildNormalizerError, NormalizationError},
    helper_constants::PLUS_SIGN,
    helper_functions::{
        attach_calling_code, collapse_plus_signs, into_canonical, normalize_digit_scripts,
        sanitize_default_code,
    },
    normalizer_regexps::NormalizerRegExps,
};
use crate::{
    interfaces::CallingCodeMatcher,
    macros::owned_from_cow_or,
    regex_util::{RegexConsume, RegexFullMatch},
    string_util::trim_leading_zeros,
};

// Helper type for Result
pub type Result<T> = std::result::Result<T, NormalizationError>;

/// Turns free-form phone number input into `+` and 4 to 15 digits.
///
/// The normalizer holds no per-call state: the calling codes and the
/// selected default code are passed into every call, so one instance can be
/// shared between threads.
pub struct PhoneNormalizer {
    /// Helper struct holding the compiled patterns of the pipeline.
    reg_exps: NormalizerRegExps,

    digit_scripts: DigitScripts,
}

impl PhoneNormalizer {
    /// Normalizer with [`NormalizerConfig::default`].
    pub fn new() -> Self {
        match Self::with_config(NormalizerConfig::default()) {
            Ok(normalizer) => normalizer,
            Err(err) => {
                let err_message = format!("Could not build the default normalizer: {:?}", err);
                error!("{}", err_message);
                panic!("{}", err_message);
            }
        }
    }

    pub fn with_config(config: NormalizerConfig) -> std::result::Result<Self, BuildNormalizerError> {
        config.validate()?;
        Ok(Self {
            reg_exps: NormalizerRegExps::new(&config.noise_labels)?,
            digit_scripts: config.digit_scripts,
        })
    }

    /// Normalizes `raw` into `+` followed by 4 to 15 digits.
    ///
    /// `default_code` is the calling code of the country the user selected;
    /// it is used only when the input was not written in international form.
    /// It may carry a leading `+` and may be empty.
    ///
    /// Returns an empty string when the input can't be normalized. Use
    /// [`Self::try_normalize`] to learn why.
    pub fn normalize<M>(&self, raw: &str, default_code: &str, codes: &M) -> String
    where
        M: CallingCodeMatcher + ?Sized,
    {
        match self.try_normalize(raw, default_code, codes) {
            Ok(canonical) => canonical,
            Err(err) => {
                trace!("Could not normalize '{raw}': {err}");
                String::new()
            }
        }
    }

    pub fn try_normalize<M>(&self, raw: &str, default_code: &str, codes: &M) -> Result<String>
    where
        M: CallingCodeMatcher + ?Sized,
    {
        if raw.is_empty() {
            return Err(NormalizationError::EmptyInput);
        }
        let digits_normalized = normalize_digit_scripts(raw, self.digit_scripts);
        let trimmed = digits_normalized.trim();
        // Decided on the input as typed, before labels are stripped.
        let intent = self.intent_of(trimmed);
        let cleaned = self.strip_noise(trimmed);

        if self.reg_exps.plus_digits_pattern.full_match(&cleaned) {
            trace!("'{cleaned}' is in plus form");
            let digits = &cleaned[PLUS_SIGN.len()..];
            return into_canonical(&attach_calling_code(digits, codes));
        }

        let digits_only: String = cleaned.chars().filter(char::is_ascii_digit).collect();
        if digits_only.is_empty() {
            return Err(NormalizationError::NoDigits);
        }

        match intent {
            DialingIntent::International => {
                trace!("'{raw}' was typed in international form, plus sign got lost");
                into_canonical(&attach_calling_code(&digits_only, codes))
            }
            DialingIntent::National => {
                let default_code = sanitize_default_code(default_code);
                trace!("'{raw}' is national, prefixing default code '{default_code}'");
                let local = trim_leading_zeros(&digits_only);
                into_canonical(&fast_cat::concat_str!(default_code, local))
            }
        }
    }

    /// Tells whether `raw` was written in international form (leading `+`
    /// or `00` once digits are normalized and white space trimmed).
    pub fn detect_intent(&self, raw: &str) -> DialingIntent {
        let digits_normalized = normalize_digit_scripts(raw, self.digit_scripts);
        self.intent_of(digits_normalized.trim())
    }

    fn intent_of(&self, trimmed: &str) -> DialingIntent {
        if self.reg_exps.international_intent_pattern.matches_start(trimmed) {
            DialingIntent::International
        } else {
            DialingIntent::National
        }
    }

    /// Labels, trunk placeholders, separators, brackets and stray plus signs
    /// are removed; a leading `00` becomes `+`. Digits and the leading `+`
    /// are all that is meant to survive, though other letters may.
    fn strip_noise(&self, trimmed: &str) -> String {
        let mut s = trimmed.to_owned();
        if let Some(noise_label_pattern) = &self.reg_exps.noise_label_pattern {
            s = owned_from_cow_or!(noise_label_pattern.replace_all(&s, ""), s);
        }
        s = owned_from_cow_or!(self.reg_exps.zero_only_group_pattern.replace_all(&s, ""), s);
        s = owned_from_cow_or!(
            self.reg_exps.leading_international_prefix_pattern.replacen(&s, 1, PLUS_SIGN),
            s
        );
        s = owned_from_cow_or!(self.reg_exps.separator_pattern.replace_all(&s, ""), s);
        s = owned_from_cow_or!(self.reg_exps.bracket_pattern.replace_all(&s, ""), s);
        collapse_plus_signs(s)
    }
}

impl Default for PhoneNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::PhoneNormalizer;
    use crate::normalizer::enums::DialingIntent;

    #[test]
    fn strip_noise_stages() {
        let normalizer = PhoneNormalizer::new();
        assert_eq!(normalizer.strip_noise("tel: 0044 20 7946 0958"), "+442079460958");
        assert_eq!(normalizer.strip_noise("+44 (0) 20-7946-0958"), "+442079460958");
        assert_eq!(normalizer.strip_noise("(202) 555.0123"), "2025550123");
        assert_eq!(normalizer.strip_noise("+1 +202 ++555"), "+1202555");
        assert_eq!(normalizer.strip_noise("Fax - {33} [1] 42_68_53_00"), "33142685300");
        assert_eq!(normalizer.strip_noise("ext 12"), "ext12");
    }

    #[test]
    fn intent_is_taken_before_labels_are_stripped() {
        let normalizer = PhoneNormalizer::new();
        assert_eq!(normalizer.detect_intent("  +44 20"), DialingIntent::International);
        assert_eq!(normalizer.detect_intent("0044 20"), DialingIntent::International);
        assert_eq!(normalizer.detect_intent("\u{0660}\u{0660}44 20"), DialingIntent::International);
        assert_eq!(normalizer.detect_intent("020 7946"), DialingIntent::National);
        assert_eq!(normalizer.detect_intent("tel: +44 20"), DialingIntent::National);
    }
}
