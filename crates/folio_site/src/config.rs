//! Site configuration
//!
//! Read from `folio.toml`. Every field has a default, so a missing file or a
//! partial one both work:
//!
//! ```toml
//! [motion]
//! settle_delay_ms = 250
//!
//! [site]
//! viewport_width = 1280
//! viewport_height = 800
//!
//! [contact]
//! endpoint = "https://example.com/api/contact"
//! ```

use crate::error::{Result, SiteError};
use folio_animation::Easing;
use folio_motion::MotionConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Default config file name
pub const CONFIG_FILE: &str = "folio.toml";

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct SiteConfig {
    #[serde(default)]
    pub motion: MotionSection,
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub contact: ContactSection,
}

/// `[motion]`
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct MotionSection {
    /// Wait after a cross-route navigation before in-page work
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
    /// Duration of groups without their own timing
    #[serde(default = "default_duration_ms")]
    pub duration_ms: f32,
    /// Stagger between elements of groups without their own timing
    #[serde(default = "default_stagger_ms")]
    pub stagger_ms: f32,
}

fn default_settle_delay_ms() -> u64 {
    250
}

fn default_duration_ms() -> f32 {
    700.0
}

fn default_stagger_ms() -> f32 {
    100.0
}

impl Default for MotionSection {
    fn default() -> Self {
        Self {
            settle_delay_ms: default_settle_delay_ms(),
            duration_ms: default_duration_ms(),
            stagger_ms: default_stagger_ms(),
        }
    }
}

/// `[site]`
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct SiteSection {
    #[serde(default = "default_viewport_width")]
    pub viewport_width: f32,
    #[serde(default = "default_viewport_height")]
    pub viewport_height: f32,
    /// Dismiss the preloader after this long even if it never completes
    #[serde(default = "default_preloader_fallback_ms")]
    pub preloader_fallback_ms: u64,
    /// Show the preloader on the home page
    #[serde(default = "default_true")]
    pub preloader: bool,
}

fn default_viewport_width() -> f32 {
    1280.0
}

fn default_viewport_height() -> f32 {
    800.0
}

fn default_preloader_fallback_ms() -> u64 {
    4500
}

fn default_true() -> bool {
    true
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            viewport_width: default_viewport_width(),
            viewport_height: default_viewport_height(),
            preloader_fallback_ms: default_preloader_fallback_ms(),
            preloader: true,
        }
    }
}

/// `[contact]`
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ContactSection {
    /// POST target; the form reports a failure when unset
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Address offered when a submission fails
    #[serde(default = "default_fallback_email")]
    pub fallback_email: String,
    /// Value of the `source` field in the payload
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_fallback_email() -> String {
    "hemanthh@umich.edu".to_string()
}

fn default_source() -> String {
    "portfolio".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ContactSection {
    fn default() -> Self {
        Self {
            endpoint: None,
            fallback_email: default_fallback_email(),
            source: default_source(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SiteConfig {
    /// Load from `path`; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("SiteConfig: {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| SiteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|source| SiteError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the site cannot lay out or scroll with
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("site.viewport_width", self.site.viewport_width),
            ("site.viewport_height", self.site.viewport_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SiteError::InvalidSetting {
                    field,
                    reason: "must be a positive number",
                });
            }
        }
        Ok(())
    }

    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Coordinator defaults derived from `[motion]`
    pub fn motion_config(&self) -> MotionConfig {
        MotionConfig {
            settle_delay: Duration::from_millis(self.motion.settle_delay_ms),
            duration_ms: self.motion.duration_ms,
            stagger_ms: self.motion.stagger_ms,
            easing: Easing::POWER3_OUT,
        }
    }
}
