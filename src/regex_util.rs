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

use regex::{Match, Regex};

pub trait RegexFullMatch {
    /// True only when the whole of `s` is one match.
    fn full_match(&self, s: &str) -> bool;
}

pub trait RegexConsume {
    fn matches_start(&self, s: &str) -> bool {
        self.find_start(s).is_some()
    }

    fn find_start<'a>(&self, s: &'a str) -> Option<Match<'a>>;
}

impl RegexFullMatch for Regex {
    fn full_match(&self, s: &str) -> bool {
        let found = self.find(s);
        if let Some(matched) = found {
            return matched.start() == 0 && matched.end() == s.len();
        }
        false
    }
}

impl RegexConsume for Regex {
    fn find_start<'a>(&self, s: &'a str) -> Option<Match<'a>> {
        let found = self.find(s)?;
        if found.start() != 0 {
            return None
        }
        Some(found)
    }
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::{RegexConsume, RegexFullMatch};

    #[test]
    fn full_match_requires_whole_string() {
        let plus_digits = Regex::new(r"\+[0-9]+").unwrap();
        assert!(plus_digits.full_match("+4420"));
        assert!(!plus_digits.full_match("+4420x"));
        assert!(!plus_digits.full_match("x+4420"));
        assert!(!plus_digits.full_match(""));
    }

    #[test]
    fn matches_start_only_at_zero() {
        let intl = Regex::new(r"\+|00").unwrap();
        assert!(intl.matches_start("+44"));
        assert!(intl.matches_start("0044"));
        assert!(!intl.matches_start("044"));
        assert!(!intl.matches_start("tel:+44"));
    }
}
