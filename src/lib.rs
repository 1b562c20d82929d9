mod interfaces;
mod normalizer;
mod registry;
mod regexp_cache;
pub mod i18n;
pub(crate) mod regex_util;
pub(crate) mod string_util;

/// There are a few boilerplate places in the pipeline that read better
/// as a macro whose name says what is happening than as several lines
/// of code.
mod macros;

#[cfg(test)]
mod tests;

pub use interfaces::CallingCodeMatcher;
pub use normalizer::{
    CALLING_CODES, PHONE_NORMALIZER, normalize,
    config::NormalizerConfig,
    enums::{DialingIntent, DigitScripts, NoiseLabel},
    errors::{BuildNormalizerError, NormalizationError},
    normalizer::PhoneNormalizer,
};
pub use regexp_cache::InvalidRegexError;
pub use registry::CallingCodeSet;
