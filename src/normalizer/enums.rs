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

use strum::{EnumIter, IntoStaticStr};

/// Words people put next to a number that carry no digits.
///
/// Matched case-insensitively as whole words, together with a trailing
/// colon, dash or white space, so `"Tel: "` and `"MOBILE - "` both go away.
#[derive(Debug, EnumIter, IntoStaticStr, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum NoiseLabel {
    Tel,
    Phone,
    Mobile,
    Mob,
    Call,
    Fax,
}

/// Which non-ASCII digits are turned into ASCII ones before anything else
/// looks at the input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigitScripts {
    /// **Arabic-Indic** (U+0660..U+0669) and **Eastern Arabic-Indic**
    /// (U+06F0..U+06F9) digits only. Everything else passes through.
    #[default]
    ArabicIndic,
    /// Every Unicode decimal digit (fullwidth, Devanagari, Bengali, ...).
    AllDecimal,
}

/// How the user meant the number to be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialingIntent {
    /// **International form.**
    /// The input started with `+` or `00`, so the leading digits are a
    /// calling code.
    International,
    /// **National form.**
    /// Anything else: the number belongs to the selected default country and
    /// leading zeros are a trunk prefix.
    National,
}
