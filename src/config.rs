//! Page configuration.
//!
//! [`PageConfig::default`] reproduces the stock page. A host page that wants
//! different phrases or thresholds passes a JSON object (camelCase keys, any
//! subset) to `start_with_config`; missing keys keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_PHRASES, PARALLAX_STRENGTH_DEG};
use crate::error::{FxError, Result};
use crate::scroll::ScrollThresholds;
use crate::toast::ToastTimings;
use crate::typewriter::{Typewriter, TypewriterTiming};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub phrases: Vec<String>,
    pub typewriter: TypewriterTiming,
    pub scroll: ScrollThresholds,
    pub parallax_strength_deg: f64,
    pub toast: ToastTimings,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            phrases: DEFAULT_PHRASES.iter().map(|p| (*p).to_owned()).collect(),
            typewriter: TypewriterTiming::default(),
            scroll: ScrollThresholds::default(),
            parallax_strength_deg: PARALLAX_STRENGTH_DEG,
            toast: ToastTimings::default(),
        }
    }
}

impl PageConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.phrases.is_empty() {
            return Err(FxError::EmptyPhrases);
        }
        self.typewriter.validate()?;
        if !self.parallax_strength_deg.is_finite() || self.parallax_strength_deg < 0.0 {
            return Err(FxError::InvalidConfig(format!(
                "parallaxStrengthDeg must be a non-negative number, got {}",
                self.parallax_strength_deg
            )));
        }
        Ok(())
    }

    /// A fresh typewriter over the configured phrases.
    pub fn typewriter(&self) -> Result<Typewriter> {
        Typewriter::new(self.phrases.clone(), self.typewriter)
    }
}
