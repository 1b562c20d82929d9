pub mod config;
pub mod enums;
pub mod errors;
pub(crate) mod helper_constants;
mod helper_functions;
pub mod normalizer;
mod normalizer_regexps;

use std::sync::LazyLock;

use crate::{normalizer::normalizer::PhoneNormalizer, registry::CallingCodeSet};

/// Calling codes of the embedded country dataset, built on first use.
pub static CALLING_CODES: LazyLock<CallingCodeSet> = LazyLock::new(CallingCodeSet::embedded);

pub static PHONE_NORMALIZER: LazyLock<PhoneNormalizer> = LazyLock::new(|| {
    PhoneNormalizer::new()
});

/// Normalizes `raw` with the default configuration against the embedded
/// calling codes. Returns an empty string when the input can't be turned
/// into an E.164-shaped number.
pub fn normalize(raw: &str, default_code: &str) -> String {
    PHONE_NORMALIZER.normalize(raw, default_code, &*CALLING_CODES)
}
