use strum::IntoEnumIterator;

use super::{
    enums::{DigitScripts, NoiseLabel},
    errors::BuildNormalizerError,
};

/// Construction-time settings of a [`PhoneNormalizer`].
///
/// The default is what most hosts want: the six [`NoiseLabel`]s and
/// Arabic-Indic digit mapping.
///
/// [`PhoneNormalizer`]: super::normalizer::PhoneNormalizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizerConfig {
    pub noise_labels: Vec<String>,
    pub digit_scripts: DigitScripts,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            noise_labels: NoiseLabel::iter()
                .map(|label| <&'static str>::from(label).to_owned())
                .collect(),
            digit_scripts: DigitScripts::default(),
        }
    }
}

impl NormalizerConfig {
    /// Replaces the label list. An empty list turns label stripping off.
    pub fn with_noise_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.noise_labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Adds labels on top of the current ones, e.g. "tél" or "whatsapp".
    pub fn with_extra_noise_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.noise_labels.extend(labels.into_iter().map(Into::into));
        self
    }

    pub fn with_digit_scripts(mut self, digit_scripts: DigitScripts) -> Self {
        self.digit_scripts = digit_scripts;
        self
    }

    /// Labels have to be single words, otherwise the whole-word match around
    /// them means nothing.
    pub(super) fn validate(&self) -> Result<(), BuildNormalizerError> {
        for label in &self.noise_labels {
            let trimmed = label.trim();
            if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_alphanumeric() || c == '_') {
                return Err(BuildNormalizerError::InvalidLabel(label.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::NormalizerConfig;
    use crate::normalizer::{enums::DigitScripts, errors::BuildNormalizerError};

    #[test]
    fn default_config() {
        let config = NormalizerConfig::default();
        assert_eq!(config.noise_labels.len(), 6);
        assert!(config.noise_labels.iter().any(|label| label == "mobile"));
        assert_eq!(config.digit_scripts, DigitScripts::ArabicIndic);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn extra_labels_are_appended() {
        let config = NormalizerConfig::default().with_extra_noise_labels(["tél", "whatsapp"]);
        assert_eq!(config.noise_labels.len(), 8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn labels_must_be_words() {
        for bad in ["", "  ", "tel:", "cell phone", "a|b"] {
            let config = NormalizerConfig::default().with_noise_labels([bad]);
            assert!(matches!(config.validate(), Err(BuildNormalizerError::InvalidLabel(label)) if label == bad));
        }
    }
}
