//! Derivation constants as data.
//!
//! [`DeriveConfig`] holds every numeric knob the palette derivations use.
//! `DeriveConfig::default()` reproduces the built-in constants, so loading
//! an empty document yields the stock behavior.
//!
//! ```json
//! {
//!   "hovered": { "background": 6.0, "border": 8.0 },
//!   "min_contrast": 4.5,
//!   "disabled_blend": 0.15
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};

/// Background and border value deltas for one directional state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateDelta {
    pub background: f64,
    pub border: f64,
}

impl StateDelta {
    pub const fn new(background: f64, border: f64) -> Self {
        Self { background, border }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeriveConfig {
    pub hovered: StateDelta,
    pub focused: StateDelta,
    pub pressed: StateDelta,
    pub dragged: StateDelta,
    /// Value delta for `High` (and `Low`, reversed).
    pub high: f64,
    /// Value delta for `Highest` (and `Lowest`, reversed).
    pub highest: f64,
    /// Extra border delta on top of the background delta for elevations.
    pub border_offset: f64,
    /// Foreground contrast target for every state except Disabled.
    pub min_contrast: f64,
    /// Saturation points removed in the Disabled state.
    pub disabled_desaturation: f64,
    /// Fraction of the distance to mid-value covered in the Disabled state.
    pub disabled_blend: f64,
    /// Relaxed foreground contrast target for the Disabled state.
    pub disabled_min_contrast: f64,
}

impl Default for DeriveConfig {
    fn default() -> Self {
        Self {
            hovered: StateDelta::new(6.0, 8.0),
            focused: StateDelta::new(8.0, 10.0),
            pressed: StateDelta::new(12.0, 14.0),
            dragged: StateDelta::new(16.0, 18.0),
            high: 8.0,
            highest: 12.0,
            border_offset: 2.0,
            min_contrast: 4.5,
            disabled_desaturation: 60.0,
            disabled_blend: 0.15,
            disabled_min_contrast: 3.0,
        }
    }
}

impl DeriveConfig {
    /// Load from a JSON string and validate.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        let errors = config.validate();
        if errors.is_empty() {
            Ok(config)
        } else {
            Err(ThemeError::InvalidConfig(errors))
        }
    }

    /// Load from a JSON file on disk and validate.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Check every parameter is within its acceptable range.
    ///
    /// Returns a list of problems; empty means valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        let deltas = [
            ("hovered.background", self.hovered.background),
            ("hovered.border", self.hovered.border),
            ("focused.background", self.focused.background),
            ("focused.border", self.focused.border),
            ("pressed.background", self.pressed.background),
            ("pressed.border", self.pressed.border),
            ("dragged.background", self.dragged.background),
            ("dragged.border", self.dragged.border),
            ("high", self.high),
            ("highest", self.highest),
            ("border_offset", self.border_offset),
            ("disabled_desaturation", self.disabled_desaturation),
        ];
        for (name, value) in deltas {
            if !(0.0..=100.0).contains(&value) {
                errors.push(format!("{name} must be in [0, 100], got {value}"));
            }
        }

        for (name, value) in [
            ("min_contrast", self.min_contrast),
            ("disabled_min_contrast", self.disabled_min_contrast),
        ] {
            if !(1.0..=21.0).contains(&value) {
                errors.push(format!("{name} must be in [1, 21], got {value}"));
            }
        }

        if !(0.0..=1.0).contains(&self.disabled_blend) {
            errors.push(format!(
                "disabled_blend must be in [0, 1], got {}",
                self.disabled_blend
            ));
        }

        errors
    }
}
