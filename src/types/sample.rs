//! Sampled colour lists.

use std::f64::consts::TAU;
use std::fmt;

use rand::Rng;
use serde::Serialize;

use crate::error::{ThemeError, Result};

use super::Colour;

/// Stable identity of one sampled colour instance.
///
/// Handles are assigned in sample order and stay attached to the colour,
/// so value-equal samples remain distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SampleId(usize);

impl SampleId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of this sample in its original list.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for SampleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A fixed sequence of sampled colours, each tagged with a [`SampleId`].
///
/// The list is never reordered; sorting produces a separate
/// [`ClusterAssignment`](crate::sort::ClusterAssignment).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampledList {
    colours: Vec<Colour>,
}

impl SampledList {
    /// Wrap colours in sample order. Ids are the positions in `colours`.
    pub fn new(colours: Vec<Colour>) -> Self {
        Self { colours }
    }

    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }

    /// Get a colour by its handle.
    pub fn get(&self, id: SampleId) -> Option<Colour> {
        self.colours.get(id.index()).copied()
    }

    /// Colours in original sample order.
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }

    /// Handles in original sample order.
    pub fn ids(&self) -> impl Iterator<Item = SampleId> + '_ {
        (0..self.colours.len()).map(SampleId)
    }

    /// `(handle, colour)` pairs in original sample order.
    pub fn iter(&self) -> impl Iterator<Item = (SampleId, Colour)> + '_ {
        self.colours
            .iter()
            .enumerate()
            .map(|(i, &c)| (SampleId(i), c))
    }

    /// Mean colour of the list.
    ///
    /// Hue is averaged around the colour wheel, so reds either side of 0
    /// stay red. Saturation, brightness and alpha are plain means.
    pub fn average(&self) -> Result<Colour> {
        let first = match self.colours.first() {
            Some(c) => *c,
            None => return Err(ThemeError::EmptyList),
        };

        let mut sum = [0f64; 3];
        for c in &self.colours {
            sum[0] += c.saturation() as f64;
            sum[1] += c.brightness() as f64;
            sum[2] += c.alpha() as f64;
        }
        let n = self.colours.len() as f64;

        let hue = if self.colours.iter().all(|c| c.hue() == first.hue()) {
            first.hue()
        } else {
            self.mean_hue()
        };

        Ok(Colour::hsva(
            hue,
            (sum[0] / n) as f32,
            (sum[1] / n) as f32,
            (sum[2] / n) as f32,
        ))
    }

    fn mean_hue(&self) -> f32 {
        let (sin, cos) = self.colours.iter().fold((0f64, 0f64), |(s, c), colour| {
            let angle = colour.hue() as f64 * TAU;
            (s + angle.sin(), c + angle.cos())
        });

        // Hues spread evenly around the wheel have no mean direction
        if sin.hypot(cos) < 1e-9 {
            let linear: f64 = self.colours.iter().map(|c| c.hue() as f64).sum();
            return (linear / self.colours.len() as f64) as f32;
        }

        (sin.atan2(cos) / TAU).rem_euclid(1.0) as f32
    }

    /// A new list with the same handles and a random alpha per colour.
    pub fn with_random_alpha<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        Self {
            colours: self
                .colours
                .iter()
                .map(|c| c.with_alpha(rng.gen()))
                .collect(),
        }
    }
}
