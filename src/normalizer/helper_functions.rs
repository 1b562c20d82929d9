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

use std::borrow::Cow;

use dec_from_char::DecimalExtended;
use log::{trace, warn};

use crate::{
    interfaces::CallingCodeMatcher,
    string_util::{is_ascii_digits, trim_leading_zeros},
};

use super::{
    enums::DigitScripts,
    errors::NormalizationError,
    helper_constants::{
        ARABIC_INDIC_NINE, ARABIC_INDIC_ZERO, EASTERN_ARABIC_INDIC_NINE,
        EASTERN_ARABIC_INDIC_ZERO, MAX_LENGTH_E164, MIN_LENGTH_E164, PLUS_SIGN,
    },
};

/// ASCII digit for an Arabic-Indic or Eastern Arabic-Indic digit, `None` for
/// any other character.
fn arabic_indic_to_ascii(c: char) -> Option<char> {
    let zero = match c {
        ARABIC_INDIC_ZERO..=ARABIC_INDIC_NINE => ARABIC_INDIC_ZERO,
        EASTERN_ARABIC_INDIC_ZERO..=EASTERN_ARABIC_INDIC_NINE => EASTERN_ARABIC_INDIC_ZERO,
        _ => return None,
    };
    char::from_digit(c as u32 - zero as u32, 10)
}

/// Replaces non-ASCII digits with ASCII ones according to `scripts`.
///
/// Returns `Cow::Borrowed` when there was nothing to replace, which is the
/// common case.
pub(super) fn normalize_digit_scripts(raw: &str, scripts: DigitScripts) -> Cow<'_, str> {
    match scripts {
        DigitScripts::ArabicIndic => {
            if !raw.chars().any(|c| arabic_indic_to_ascii(c).is_some()) {
                return Cow::Borrowed(raw);
            }
            Cow::Owned(
                raw.chars()
                    .map(|c| arabic_indic_to_ascii(c).unwrap_or(c))
                    .collect(),
            )
        }
        DigitScripts::AllDecimal => {
            if !raw.chars().any(|c| c.is_decimal_utf8() && !c.is_ascii_digit()) {
                return Cow::Borrowed(raw);
            }
            Cow::Owned(dec_from_char::normalize_decimals(raw).to_string())
        }
    }
}

/// Keeps a `+` at position 0 and drops every other one.
pub(super) fn collapse_plus_signs(s: String) -> String {
    let (head, tail) = match s.strip_prefix(PLUS_SIGN) {
        Some(tail) => (PLUS_SIGN, tail),
        None => ("", s.as_str()),
    };
    if !tail.contains(PLUS_SIGN) {
        return s;
    }
    let rest = tail.replace(PLUS_SIGN, "");
    fast_cat::concat_str!(head, &rest)
}

/// Default code the way a country picker hands it over: " +44 " becomes
/// "44". Anything that is not digits then is ignored.
pub(super) fn sanitize_default_code(default_code: &str) -> &str {
    let trimmed = default_code.trim();
    let code = trimmed.strip_prefix(PLUS_SIGN).unwrap_or(trimmed);
    if code.is_empty() || is_ascii_digits(code) {
        return code;
    }
    warn!("Ignoring default calling code '{default_code}': not a digit string");
    ""
}

/// Splits off the longest known calling code and drops trunk zeros after
/// it. Without a match the zeros are dropped from the whole string.
pub(super) fn attach_calling_code<M>(digits: &str, codes: &M) -> String
where
    M: CallingCodeMatcher + ?Sized,
{
    let matched = codes
        .longest_prefix_of(digits)
        .and_then(|code| digits.strip_prefix(code).map(|local| (code, local)));
    match matched {
        Some((code, local)) => {
            trace!("Matched calling code {code} in '{digits}'");
            fast_cat::concat_str!(code, trim_leading_zeros(local))
        }
        None => {
            trace!("No known calling code prefixes '{digits}'");
            trim_leading_zeros(digits).to_owned()
        }
    }
}

/// Helper method to check the digit count against the E.164 bounds.
pub(super) fn test_e164_length(digits: &str) -> Result<(), NormalizationError> {
    let length = digits.len();
    if length < MIN_LENGTH_E164 {
        return Err(NormalizationError::TooShort(length));
    }
    if length > MAX_LENGTH_E164 {
        return Err(NormalizationError::TooLong(length));
    }
    Ok(())
}

/// Final guard shared by every branch: bounds, no zero after the plus sign,
/// then the plus sign itself.
pub(super) fn into_canonical(digits: &str) -> Result<String, NormalizationError> {
    test_e164_length(digits)?;
    if digits.starts_with('0') {
        return Err(NormalizationError::LeadingZero);
    }
    Ok(fast_cat::concat_str!(PLUS_SIGN, digits))
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::{
        attach_calling_code, collapse_plus_signs, into_canonical, normalize_digit_scripts,
        sanitize_default_code,
    };
    use crate::{
        normalizer::{enums::DigitScripts, errors::NormalizationError},
        registry::CallingCodeSet,
    };

    #[test]
    fn arabic_indic_digits() {
        let eastern = "\u{06F0}\u{06F1}\u{06F2}\u{06F3}\u{06F4}\u{06F5}\u{06F6}\u{06F7}\u{06F8}\u{06F9}";
        let arabic = "\u{0660}\u{0661}\u{0662}\u{0663}\u{0664}\u{0665}\u{0666}\u{0667}\u{0668}\u{0669}";
        assert_eq!(normalize_digit_scripts(eastern, DigitScripts::ArabicIndic), "0123456789");
        assert_eq!(normalize_digit_scripts(arabic, DigitScripts::ArabicIndic), "0123456789");
        assert_eq!(normalize_digit_scripts("+\u{0664}\u{0664} x", DigitScripts::ArabicIndic), "+44 x");
    }

    #[test]
    fn other_scripts_pass_through_by_default() {
        // Fullwidth four and Devanagari four.
        let input = "\u{FF14}\u{096A}";
        assert!(matches!(normalize_digit_scripts(input, DigitScripts::ArabicIndic), Cow::Borrowed(_)));
        assert_eq!(normalize_digit_scripts(input, DigitScripts::AllDecimal), "44");
    }

    #[test]
    fn ascii_input_is_borrowed() {
        for scripts in [DigitScripts::ArabicIndic, DigitScripts::AllDecimal] {
            assert!(matches!(normalize_digit_scripts("+44 20", scripts), Cow::Borrowed("+44 20")));
        }
    }

    #[test]
    fn plus_signs() {
        assert_eq!(collapse_plus_signs("++44+20".to_owned()), "+4420");
        assert_eq!(collapse_plus_signs("44+20+".to_owned()), "4420");
        assert_eq!(collapse_plus_signs("+4420".to_owned()), "+4420");
        assert_eq!(collapse_plus_signs(String::new()), "");
    }

    #[test]
    fn default_code_sanitation() {
        assert_eq!(sanitize_default_code(" +44 "), "44");
        assert_eq!(sanitize_default_code("1268"), "1268");
        assert_eq!(sanitize_default_code(""), "");
        assert_eq!(sanitize_default_code("UK"), "");
        assert_eq!(sanitize_default_code("+4 4"), "");
    }

    #[test]
    fn calling_code_attachment() {
        let codes = CallingCodeSet::build(["1", "44"]);
        assert_eq!(attach_calling_code("4402079460958", &codes), "442079460958");
        assert_eq!(attach_calling_code("0099123", &codes), "99123");
        assert_eq!(attach_calling_code("14155550123", &codes), "14155550123");
    }

    #[test]
    fn canonical_guard() {
        assert_eq!(into_canonical("4420"), Ok("+4420".to_owned()));
        assert_eq!(into_canonical("123"), Err(NormalizationError::TooShort(3)));
        assert_eq!(into_canonical("1234567890123456"), Err(NormalizationError::TooLong(16)));
        assert_eq!(into_canonical("123456789012345"), Ok("+123456789012345".to_owned()));
        assert_eq!(into_canonical("0442079"), Err(NormalizationError::LeadingZero));
    }
}
