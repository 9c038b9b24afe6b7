//! Colour type and conversions.
//!
//! A `Colour` is stored as HSV facets plus alpha, all in `[0, 1]`.
//! RGB values are derived on demand through the `palette` crate.

use std::f32::consts::TAU;
use std::fmt;
use std::str::FromStr;

use palette::{Hsv, IntoColor, Srgb};
use rand::Rng;

use crate::error::{ThemeError, Result};

/// An immutable HSVA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Colour {
    hue: f32,
    saturation: f32,
    brightness: f32,
    alpha: f32,
}

impl Colour {
    /// Black.
    pub const BLACK: Self = Self {
        hue: 0.0,
        saturation: 0.0,
        brightness: 0.0,
        alpha: 1.0,
    };

    /// White.
    pub const WHITE: Self = Self {
        hue: 0.0,
        saturation: 0.0,
        brightness: 1.0,
        alpha: 1.0,
    };

    /// Create a colour from HSVA facets. Each facet is clamped into `[0, 1]`.
    pub fn hsva(hue: f32, saturation: f32, brightness: f32, alpha: f32) -> Self {
        Self {
            hue: unit(hue),
            saturation: unit(saturation),
            brightness: unit(brightness),
            alpha: unit(alpha),
        }
    }

    /// Create an opaque colour from HSV facets.
    pub fn hsv(hue: f32, saturation: f32, brightness: f32) -> Self {
        Self::hsva(hue, saturation, brightness, 1.0)
    }

    /// Create a colour from 8-bit RGBA channels.
    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        let rgb: Srgb<f32> = Srgb::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
        let hsv: Hsv = rgb.into_color();

        Self::hsva(
            hsv.hue.into_positive_degrees() / 360.0,
            hsv.saturation,
            hsv.value,
            a as f32 / 255.0,
        )
    }

    /// Create an opaque colour from 8-bit RGB channels.
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba8(r, g, b, 255)
    }

    /// A random opaque colour.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::hsv(rng.gen(), rng.gen(), rng.gen())
    }

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RGBA` (4 digits, expanded to 8)
    /// - `#RRGGBB` (6 digits)
    /// - `#RRGGBBAA` (8 digits)
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        let channels: Vec<u8> = match hex.len() {
            3 | 4 => hex
                .chars()
                .map(|c| parse_hex_digit(c).map(|d| d << 4 | d))
                .collect::<Result<_>>()?,
            6 | 8 => (0..hex.len())
                .step_by(2)
                .map(|i| parse_hex_byte(hex.get(i..i + 2).unwrap_or("")))
                .collect::<Result<_>>()?,
            _ => {
                return Err(ThemeError::Parse {
                    message: format!("Invalid hex colour: {}", s),
                    help: Some("Use #RGB, #RGBA, #RRGGBB, or #RRGGBBAA format".to_string()),
                })
            }
        };

        let alpha = channels.get(3).copied().unwrap_or(255);
        Ok(Self::rgba8(channels[0], channels[1], channels[2], alpha))
    }

    pub fn hue(&self) -> f32 {
        self.hue
    }

    pub fn saturation(&self) -> f32 {
        self.saturation
    }

    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Return a copy with a different alpha.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            alpha: unit(alpha),
            ..self
        }
    }

    /// Return a copy with a different hue.
    pub fn with_hue(self, hue: f32) -> Self {
        Self {
            hue: unit(hue),
            ..self
        }
    }

    /// Convert to sRGB components in `[0, 1]`.
    pub fn to_srgb(self) -> [f32; 3] {
        let hsv: Hsv = Hsv::new(self.hue * 360.0, self.saturation, self.brightness);
        let rgb: Srgb<f32> = hsv.into_color();
        [
            rgb.red.clamp(0.0, 1.0),
            rgb.green.clamp(0.0, 1.0),
            rgb.blue.clamp(0.0, 1.0),
        ]
    }

    /// Convert to 8-bit RGBA channels.
    pub fn to_rgba8(self) -> [u8; 4] {
        let [r, g, b] = self.to_srgb();
        [to_byte(r), to_byte(g), to_byte(b), to_byte(self.alpha)]
    }

    pub fn red(&self) -> f32 {
        self.to_srgb()[0]
    }

    pub fn green(&self) -> f32 {
        self.to_srgb()[1]
    }

    pub fn blue(&self) -> f32 {
        self.to_srgb()[2]
    }

    /// Perceived luminance (Rec. 601 weights).
    pub fn luminance(&self) -> f32 {
        let [r, g, b] = self.to_srgb();
        0.299 * r + 0.587 * g + 0.114 * b
    }

    /// CMYK components derived from the sRGB value.
    pub fn to_cmyk(self) -> [f32; 4] {
        let [r, g, b] = self.to_srgb();
        let k = 1.0 - r.max(g).max(b);
        if k >= 1.0 {
            return [0.0, 0.0, 0.0, 1.0];
        }
        let scale = 1.0 - k;
        [
            (1.0 - r - k) / scale,
            (1.0 - g - k) / scale,
            (1.0 - b - k) / scale,
            k,
        ]
    }

    /// Distance to another colour in the HSV cylinder.
    pub fn distance_to(&self, other: &Colour) -> f32 {
        let a = self.hsv_point();
        let b = other.hsv_point();
        ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2) + (a[2] - b[2]).powi(2)).sqrt()
    }

    /// Euclidean distance between the sRGB values.
    pub fn distance_rgb(&self, other: &Colour) -> f32 {
        let a = self.to_srgb();
        let b = other.to_srgb();
        ((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2) + (a[2] - b[2]).powi(2)).sqrt()
    }

    /// Whether the colour carries no meaningful hue.
    pub fn is_grey(&self) -> bool {
        self.saturation < GREY_THRESHOLD
    }

    /// Format as an opaque CSS hex colour: `#RRGGBB`.
    pub fn to_hex_css(self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("#{:02X}{:02X}{:02X}", r, g, b)
    }

    /// Format as a CSS `rgba(r,g,b,a)` colour with 0-255 channels.
    pub fn to_rgba_css(self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("rgba({},{},{},{})", r, g, b, format_alpha(self.alpha))
    }

    fn hsv_point(&self) -> [f32; 3] {
        let angle = self.hue * TAU;
        [
            angle.cos() * self.saturation,
            angle.sin() * self.saturation,
            self.brightness,
        ]
    }
}

impl FromStr for Colour {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
        }
    }
}

const GREY_THRESHOLD: f32 = 0.01;

/// Clamp into `[0, 1]`, mapping NaN to zero.
fn unit(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

fn to_byte(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Alpha with at most three decimals and no trailing zeros.
fn format_alpha(alpha: f32) -> String {
    let s = format!("{:.3}", alpha);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| ThemeError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| ThemeError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_from_hex_6digit() {
        let c = Colour::from_hex("#FF0000").unwrap();
        assert_eq!(c.hue(), 0.0);
        assert_eq!(c.saturation(), 1.0);
        assert_eq!(c.brightness(), 1.0);
        assert_eq!(c.to_rgba8(), [255, 0, 0, 255]);

        let c = Colour::from_hex("#1a1a2e").unwrap();
        assert_eq!(c.to_rgba8(), [0x1a, 0x1a, 0x2e, 255]);
    }

    #[test]
    fn test_from_hex_short_forms() {
        let c = Colour::from_hex("#ABC").unwrap();
        assert_eq!(c.to_rgba8(), [0xAA, 0xBB, 0xCC, 255]);

        let c = Colour::from_hex("#F008").unwrap();
        assert_eq!(c.to_rgba8(), [255, 0, 0, 0x88]);
    }

    #[test]
    fn test_from_hex_8digit() {
        let c = Colour::from_hex("FF000080").unwrap();
        assert_eq!(c.to_rgba8(), [255, 0, 0, 128]);
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Colour::from_hex("#GGG").is_err());
        assert!(Colour::from_hex("#12345").is_err());
        assert!(Colour::from_hex("").is_err());
    }

    #[test]
    fn test_facets_are_clamped() {
        let c = Colour::hsva(1.5, -0.2, 2.0, f32::NAN);
        assert_eq!(c.hue(), 1.0);
        assert_eq!(c.saturation(), 0.0);
        assert_eq!(c.brightness(), 1.0);
        assert_eq!(c.alpha(), 0.0);
    }

    #[test]
    fn test_with_alpha_returns_new_value() {
        let red = Colour::rgb8(255, 0, 0);
        let faded = red.with_alpha(0.5);
        assert_eq!(red.alpha(), 1.0);
        assert_eq!(faded.alpha(), 0.5);
        assert_eq!(faded.hue(), red.hue());
    }

    #[test]
    fn test_css_output() {
        let red = Colour::rgb8(255, 0, 0);
        assert_eq!(red.to_hex_css(), "#FF0000");
        assert_eq!(red.to_rgba_css(), "rgba(255,0,0,1)");
        assert_eq!(red.with_alpha(0.25).to_rgba_css(), "rgba(255,0,0,0.25)");
        assert_eq!(red.with_alpha(0.0).to_rgba_css(), "rgba(255,0,0,0)");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Colour::WHITE), "#FFFFFF");
        assert_eq!(format!("{}", Colour::BLACK.with_alpha(0.5)), "#00000080");
    }

    #[test]
    fn test_distance() {
        let red = Colour::hsv(0.0, 1.0, 1.0);
        let cyan = Colour::hsv(0.5, 1.0, 1.0);
        assert_eq!(red.distance_to(&red), 0.0);
        assert!((red.distance_to(&cyan) - 2.0).abs() < 1e-5);
        assert!((Colour::BLACK.distance_rgb(&Colour::WHITE) - 3f32.sqrt()).abs() < 1e-5);
    }

    #[test]
    fn test_cmyk_and_luminance() {
        assert_eq!(Colour::BLACK.to_cmyk(), [0.0, 0.0, 0.0, 1.0]);
        let [c, m, y, k] = Colour::rgb8(255, 0, 0).to_cmyk();
        assert_eq!((c, m, y, k), (0.0, 1.0, 1.0, 0.0));
        assert!((Colour::WHITE.luminance() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_random_is_opaque_and_bounded() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let c = Colour::random(&mut rng);
            assert_eq!(c.alpha(), 1.0);
            assert!((0.0..=1.0).contains(&c.hue()));
            assert!((0.0..=1.0).contains(&c.saturation()));
            assert!((0.0..=1.0).contains(&c.brightness()));
        }
    }
}
