//! Access criteria: named scalar keys over colours.
//!
//! The registry is a fixed table built at compile time and shared read-only.

use std::fmt;
use std::str::FromStr;

use crate::error::{ThemeError, Result};
use crate::types::Colour;

/// A named key extractor over [`Colour`].
#[derive(Clone, Copy)]
pub struct Criterion {
    name: &'static str,
    key: fn(&Colour) -> f32,
}

impl Criterion {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Extract the sort key for `colour`.
    pub fn key(&self, colour: &Colour) -> f32 {
        (self.key)(colour)
    }

    /// Look up a criterion by name, ignoring case.
    pub fn resolve(name: &str) -> Result<Self> {
        let wanted = name.trim();
        CRITERIA
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| ThemeError::UnknownCriterion {
                name: name.to_string(),
            })
    }
}

impl PartialEq for Criterion {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Criterion {}

impl fmt::Debug for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Criterion").field(&self.name).finish()
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl FromStr for Criterion {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::resolve(s)
    }
}

static CRITERIA: [Criterion; 12] = [
    Criterion {
        name: "HUE",
        key: Colour::hue,
    },
    Criterion {
        name: "SATURATION",
        key: Colour::saturation,
    },
    Criterion {
        name: "BRIGHTNESS",
        key: Colour::brightness,
    },
    Criterion {
        name: "ALPHA",
        key: Colour::alpha,
    },
    Criterion {
        name: "LUMINANCE",
        key: Colour::luminance,
    },
    Criterion {
        name: "RED",
        key: Colour::red,
    },
    Criterion {
        name: "GREEN",
        key: Colour::green,
    },
    Criterion {
        name: "BLUE",
        key: Colour::blue,
    },
    Criterion {
        name: "CYAN",
        key: |c| c.to_cmyk()[0],
    },
    Criterion {
        name: "MAGENTA",
        key: |c| c.to_cmyk()[1],
    },
    Criterion {
        name: "YELLOW",
        key: |c| c.to_cmyk()[2],
    },
    Criterion {
        name: "BLACK",
        key: |c| c.to_cmyk()[3],
    },
];

/// Resolve a criterion by name.
pub fn resolve(name: &str) -> Result<Criterion> {
    Criterion::resolve(name)
}

/// Registered criterion names, in registry order.
pub fn names() -> impl Iterator<Item = &'static str> {
    CRITERIA.iter().map(|c| c.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known() {
        let hue = resolve("HUE").unwrap();
        assert_eq!(hue.name(), "HUE");
        assert_eq!(hue.key(&Colour::hsv(0.25, 0.5, 0.75)), 0.25);

        let brightness = resolve("brightness").unwrap();
        assert_eq!(brightness.key(&Colour::hsv(0.25, 0.5, 0.75)), 0.75);
    }

    #[test]
    fn test_resolve_unknown() {
        let err = resolve("SPARKLE").unwrap_err();
        assert!(matches!(err, ThemeError::UnknownCriterion { name } if name == "SPARKLE"));
    }

    #[test]
    fn test_names_resolve_to_themselves() {
        for name in names() {
            assert_eq!(resolve(name).unwrap().name(), name);
        }
        assert_eq!(names().count(), 12);
    }

    #[test]
    fn test_channel_keys() {
        let red = Colour::rgb8(255, 0, 0);
        assert_eq!(resolve("RED").unwrap().key(&red), 1.0);
        assert_eq!(resolve("GREEN").unwrap().key(&red), 0.0);
        assert_eq!(resolve("BLACK").unwrap().key(&Colour::BLACK), 1.0);
        assert_eq!(resolve("ALPHA").unwrap().key(&red.with_alpha(0.5)), 0.5);
    }
}
