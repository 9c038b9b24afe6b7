//! Scene configuration (discs.yaml) parsing.
//!
//! The configuration enumerates every recognised option: palette entries,
//! disc scale range, padding, sample count, sort flag and criteria.
//! Unknown keys are rejected.

use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{ThemeError, Result};
use crate::sort::Criterion;
use crate::types::{ColourTheme, DEFAULT_VARIANCE};

/// Default configuration file name.
pub const CONFIG_FILENAME: &str = "discs.yaml";

/// Upper bound on `num`, the number of discs in a scene.
pub const MAX_DISCS: usize = 100_000;

/// One weighted palette descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntryConfig {
    /// Colour descriptor, e.g. `soft ivory`.
    pub descriptor: String,
    /// Relative weight; shares are `weight / total`.
    pub weight: f64,
}

impl EntryConfig {
    pub fn new(descriptor: impl Into<String>, weight: f64) -> Self {
        Self {
            descriptor: descriptor.into(),
            weight,
        }
    }
}

/// Scene configuration loaded from discs.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    /// Theme name.
    pub name: String,

    /// Weighted descriptors, in insertion order.
    pub palette: Vec<EntryConfig>,

    /// Add a random bright accent colour to the theme.
    pub accent: bool,

    /// Intensity passed to colour ranges.
    pub variance: f32,

    /// Disc radius bounds: `[min, max]`.
    pub scale_range: [f32; 2],

    /// Margin around the sorted grid.
    pub padding: f32,

    pub width: f32,
    pub height: f32,

    /// Number of colours to sample.
    pub num: usize,

    /// Start in the sorted view.
    pub sort: bool,

    pub primary_criteria: String,
    pub secondary_criteria: String,

    /// Number of clusters for the sorted view.
    pub clusters: usize,

    /// Seed for reproducible scenes.
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            name: "discs".to_string(),
            palette: default_palette(),
            accent: true,
            variance: DEFAULT_VARIANCE,
            scale_range: [5.0, 50.0],
            padding: 48.0,
            width: 960.0,
            height: 540.0,
            num: 200,
            sort: false,
            primary_criteria: "HUE".to_string(),
            secondary_criteria: "BRIGHTNESS".to_string(),
            clusters: 10,
            seed: None,
        }
    }
}

fn default_palette() -> Vec<EntryConfig> {
    vec![
        EntryConfig::new("soft ivory", 0.5),
        EntryConfig::new("intense goldenrod", 0.25),
        EntryConfig::new("warm saddlebrown", 0.15),
        EntryConfig::new("fresh teal", 0.05),
        EntryConfig::new("bright yellowgreen", 0.05),
    ]
}

impl SceneConfig {
    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ThemeError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse and validate a configuration from YAML.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content).map_err(|e| ThemeError::Config {
            message: format!("Invalid config: {}", e),
            help: Some("Check discs.yaml syntax and field names".to_string()),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check every option, including that descriptors and criteria resolve.
    pub fn validate(&self) -> Result<()> {
        if self.num == 0 {
            return Err(config_error("num must be at least 1", None));
        }
        if self.num > MAX_DISCS {
            return Err(config_error(
                format!("num {} exceeds the limit of {}", self.num, MAX_DISCS),
                Some("Lower num in discs.yaml or pass a smaller --num"),
            ));
        }
        if self.clusters == 0 {
            return Err(ThemeError::InvalidClusterCount { count: 0 });
        }

        let [lo, hi] = self.scale_range;
        if !(lo.is_finite() && hi.is_finite()) || lo < 0.0 || lo > hi {
            return Err(config_error(
                format!("invalid scale_range [{}, {}]", lo, hi),
                Some("Use [min, max] with 0 <= min <= max"),
            ));
        }
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(config_error("width and height must be positive", None));
        }
        if !(self.padding >= 0.0) || self.padding * 2.0 > self.width.min(self.height) {
            return Err(config_error(
                format!("padding {} does not fit the scene", self.padding),
                None,
            ));
        }
        if !(self.variance.is_finite() && self.variance >= 0.0) {
            return Err(config_error(
                format!("invalid variance {}", self.variance),
                Some("Use a value between 0 and 1"),
            ));
        }

        self.criteria()?;
        self.build_theme_entries()?;
        Ok(())
    }

    /// Resolve the primary and secondary criteria.
    pub fn criteria(&self) -> Result<(Criterion, Criterion)> {
        Ok((
            Criterion::resolve(&self.primary_criteria)?,
            Criterion::resolve(&self.secondary_criteria)?,
        ))
    }

    /// Compile the palette into a theme, adding the accent if enabled.
    pub fn build_theme<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<ColourTheme> {
        let mut theme = self.build_theme_entries()?;
        if self.accent {
            theme.add_accent(rng)?;
        }
        Ok(theme)
    }

    fn build_theme_entries(&self) -> Result<ColourTheme> {
        let mut theme = ColourTheme::new(self.name.clone()).with_variance(self.variance);
        for entry in &self.palette {
            theme.add_range(&entry.descriptor, entry.weight)?;
        }
        Ok(theme)
    }
}

fn config_error(message: impl Into<String>, help: Option<&str>) -> ThemeError {
    ThemeError::Config {
        message: message.into(),
        help: help.map(str::to_string),
    }
}
