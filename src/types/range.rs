//! Colour ranges: named shade/tint transformations.
//!
//! A range constrains saturation and brightness to one or more bands.
//! Applying it to a base colour keeps the base hue (jittered by the
//! intensity) and picks new saturation and brightness inside the bands.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::error::{ThemeError, Result};

use super::Colour;

/// Maximum hue jitter, as a fraction of the colour wheel, at intensity 1.
const HUE_JITTER: f32 = 0.1;

type Band = (f32, f32);

/// A named colour range preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColourRange {
    Light,
    Dark,
    Bright,
    Weak,
    Neutral,
    Fresh,
    Soft,
    Hot,
    Warm,
    Cool,
    Intense,
}

impl ColourRange {
    /// All presets, in presentation order.
    pub const ALL: [ColourRange; 11] = [
        ColourRange::Light,
        ColourRange::Dark,
        ColourRange::Bright,
        ColourRange::Weak,
        ColourRange::Neutral,
        ColourRange::Fresh,
        ColourRange::Soft,
        ColourRange::Hot,
        ColourRange::Warm,
        ColourRange::Cool,
        ColourRange::Intense,
    ];

    /// Upper-case preset name, e.g. `"SOFT"`.
    pub fn name(self) -> &'static str {
        match self {
            ColourRange::Light => "LIGHT",
            ColourRange::Dark => "DARK",
            ColourRange::Bright => "BRIGHT",
            ColourRange::Weak => "WEAK",
            ColourRange::Neutral => "NEUTRAL",
            ColourRange::Fresh => "FRESH",
            ColourRange::Soft => "SOFT",
            ColourRange::Hot => "HOT",
            ColourRange::Warm => "WARM",
            ColourRange::Cool => "COOL",
            ColourRange::Intense => "INTENSE",
        }
    }

    /// Look up a preset by name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|range| range.name().eq_ignore_ascii_case(name.trim()))
    }

    /// All preset names.
    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.into_iter().map(ColourRange::name)
    }

    fn saturation_bands(self) -> &'static [Band] {
        match self {
            ColourRange::Light => &[(0.3, 0.7)],
            ColourRange::Dark => &[(0.7, 1.0)],
            ColourRange::Bright => &[(0.8, 1.0)],
            ColourRange::Weak => &[(0.15, 0.3)],
            ColourRange::Neutral => &[(0.25, 0.35)],
            ColourRange::Fresh => &[(0.4, 0.8)],
            ColourRange::Soft => &[(0.2, 0.3)],
            ColourRange::Hot => &[(0.8, 1.0)],
            ColourRange::Warm => &[(0.6, 0.9)],
            ColourRange::Cool => &[(0.05, 0.2)],
            ColourRange::Intense => &[(0.9, 1.0)],
        }
    }

    fn brightness_bands(self) -> &'static [Band] {
        match self {
            ColourRange::Light => &[(0.9, 1.0)],
            ColourRange::Dark => &[(0.15, 0.4)],
            ColourRange::Bright => &[(0.8, 1.0)],
            ColourRange::Weak => &[(0.7, 1.0)],
            ColourRange::Neutral => &[(0.3, 0.7)],
            ColourRange::Fresh => &[(0.8, 1.0)],
            ColourRange::Soft => &[(0.6, 0.9)],
            ColourRange::Hot => &[(0.3, 0.7)],
            ColourRange::Warm => &[(0.4, 0.9)],
            ColourRange::Cool => &[(0.9, 1.0)],
            ColourRange::Intense => &[(0.2, 0.35), (0.8, 1.0)],
        }
    }

    /// Produce a shade of `base` inside this range.
    ///
    /// `intensity` scales the hue jitter and is clamped to `[0, 1]`; at zero
    /// the base hue is kept exactly. Greyscale bases stay unsaturated.
    /// Alpha is carried over from `base`.
    pub fn apply<R: Rng + ?Sized>(self, base: Colour, intensity: f32, rng: &mut R) -> Colour {
        let intensity = if intensity.is_nan() {
            0.0
        } else {
            intensity.clamp(0.0, 1.0)
        };

        let hue = if intensity > 0.0 {
            let offset = rng.gen_range(-1.0f32..=1.0) * intensity * HUE_JITTER;
            (base.hue() + offset).rem_euclid(1.0)
        } else {
            base.hue()
        };

        let saturation = if base.is_grey() {
            base.saturation()
        } else {
            pick(self.saturation_bands(), rng)
        };
        let brightness = pick(self.brightness_bands(), rng);

        Colour::hsva(hue, saturation, brightness, base.alpha())
    }

    /// Whether `colour` already lies inside this range's bands.
    pub fn contains(self, colour: &Colour) -> bool {
        let within = |bands: &[Band], v: f32| bands.iter().any(|&(lo, hi)| v >= lo && v <= hi);
        (colour.is_grey() || within(self.saturation_bands(), colour.saturation()))
            && within(self.brightness_bands(), colour.brightness())
    }
}

/// Pick a value uniformly from one of the bands.
fn pick<R: Rng + ?Sized>(bands: &[Band], rng: &mut R) -> f32 {
    let (lo, hi) = match bands.len() {
        0 => return 0.0,
        1 => bands[0],
        n => bands[rng.gen_range(0..n)],
    };
    rng.gen_range(lo..=hi)
}

impl FromStr for ColourRange {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| ThemeError::UnknownRangeName {
            name: s.to_string(),
        })
    }
}

impl fmt::Display for ColourRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
