//! Colour themes: weighted collections of colour descriptors.

use rand::Rng;

use crate::error::{ThemeError, Result};

use super::named::named_colour;
use super::{Colour, ColourRange, SampledList};

/// Default intensity passed to colour ranges when sampling.
pub const DEFAULT_VARIANCE: f32 = 0.35;

/// Weight bounds for a randomly injected accent colour.
const ACCENT_WEIGHT: (f64, f64) = (0.02, 0.05);

/// A resolved descriptor: a base colour with an optional range applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Descriptor {
    pub range: Option<ColourRange>,
    pub base: Colour,
}

impl Descriptor {
    /// Parse a descriptor such as `"soft ivory"`, `"red"` or `"warm #8B4513"`.
    ///
    /// The first word is read as a range when it names one; the rest is the
    /// base colour, either a colour name or a hex literal.
    pub fn parse(input: &str) -> Result<Self> {
        let words: Vec<&str> = input.split_whitespace().collect();

        let Some((&first, rest)) = words.split_first() else {
            return Err(ThemeError::Parse {
                message: "Empty colour descriptor".to_string(),
                help: Some("Use a colour name, optionally preceded by a range: soft ivory".to_string()),
            });
        };

        if !rest.is_empty() {
            if let Some(range) = ColourRange::from_name(first) {
                let base = resolve_base(&rest.join(" "))?;
                return Ok(Self {
                    range: Some(range),
                    base,
                });
            }
        }

        match resolve_base(&words.join(" ")) {
            Ok(base) => Ok(Self { range: None, base }),
            // "sparkly ivory": the colour resolves, so the modifier is at fault
            Err(err) if !rest.is_empty() => match resolve_base(&rest.join(" ")) {
                Ok(_) => Err(ThemeError::UnknownRangeName {
                    name: first.to_string(),
                }),
                Err(_) => Err(err),
            },
            Err(err) => Err(err),
        }
    }

    /// Produce one colour instance from this descriptor.
    pub fn sample<R: Rng + ?Sized>(&self, variance: f32, rng: &mut R) -> Colour {
        match self.range {
            Some(range) => range.apply(self.base, variance, rng),
            None => self.base,
        }
    }
}

fn resolve_base(name: &str) -> Result<Colour> {
    if name.starts_with('#') {
        return Colour::from_hex(name);
    }
    named_colour(name).ok_or_else(|| ThemeError::UnknownColourName {
        name: name.to_string(),
    })
}

/// A weighted theme entry.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteEntry {
    /// Source text, or a generated label for directly added entries.
    pub label: String,
    pub descriptor: Descriptor,
    pub weight: f64,
}

/// A named, weighted collection of colour descriptors.
///
/// Entries are only ever appended. Sampling never mutates the theme.
#[derive(Debug, Clone)]
pub struct ColourTheme {
    name: String,
    entries: Vec<PaletteEntry>,
    variance: f32,
}

impl ColourTheme {
    /// Create an empty theme.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
            variance: DEFAULT_VARIANCE,
        }
    }

    /// Set the intensity passed to colour ranges.
    pub fn with_variance(mut self, variance: f32) -> Self {
        self.variance = variance;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn variance(&self) -> f32 {
        self.variance
    }

    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of raw entry weights. May overflow to infinity for huge weights.
    pub fn total_weight(&self) -> f64 {
        self.entries.iter().map(|e| e.weight).sum()
    }

    /// Parse a descriptor and append it with a weight.
    pub fn add_range(&mut self, descriptor: &str, weight: f64) -> Result<()> {
        check_weight(descriptor, weight)?;
        let parsed = Descriptor::parse(descriptor)?;
        self.entries.push(PaletteEntry {
            label: descriptor.trim().to_string(),
            descriptor: parsed,
            weight,
        });
        Ok(())
    }

    /// Append a range applied to an explicit base colour.
    pub fn add_range_with(&mut self, range: ColourRange, base: Colour, weight: f64) -> Result<()> {
        let label = format!("{} {}", range.name().to_lowercase(), base);
        check_weight(&label, weight)?;
        self.entries.push(PaletteEntry {
            label,
            descriptor: Descriptor {
                range: Some(range),
                base,
            },
            weight,
        });
        Ok(())
    }

    /// Inject a bright accent around a random base colour with a small weight.
    pub fn add_accent<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        let base = Colour::random(rng);
        let weight = rng.gen_range(ACCENT_WEIGHT.0..=ACCENT_WEIGHT.1);
        self.add_range_with(ColourRange::Bright, base, weight)
    }

    /// Draw `n` colours, choosing entries in proportion to their weight.
    pub fn get_colors<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<SampledList> {
        // Weights are scaled by the largest one so the cumulative sum stays
        // finite even when the raw total would overflow.
        let scale = self.entries.iter().map(|e| e.weight).fold(0.0, f64::max);
        if scale <= 0.0 {
            return Err(ThemeError::EmptyTheme {
                name: self.name.clone(),
            });
        }
        let total: f64 = self.entries.iter().map(|e| e.weight / scale).sum();

        let colours = (0..n)
            .map(|_| self.pick(scale, total, rng).sample(self.variance, rng))
            .collect();

        Ok(SampledList::new(colours))
    }

    /// Average colour of a sampled list.
    pub fn get_average(list: &SampledList) -> Result<Colour> {
        list.average()
    }

    /// Weighted choice; ties resolve to the earliest inserted entry.
    fn pick<R: Rng + ?Sized>(&self, scale: f64, total: f64, rng: &mut R) -> &Descriptor {
        let target = rng.gen::<f64>() * total;
        let mut cumulative = 0.0;
        let mut last = None;

        for entry in self.entries.iter().filter(|e| e.weight > 0.0) {
            cumulative += entry.weight / scale;
            if target < cumulative {
                return &entry.descriptor;
            }
            last = Some(&entry.descriptor);
        }

        // Rounding can leave target just above the final cumulative sum
        match last {
            Some(descriptor) => descriptor,
            None => &self.entries[0].descriptor,
        }
    }
}

fn check_weight(descriptor: &str, weight: f64) -> Result<()> {
    if weight.is_finite() && weight >= 0.0 {
        Ok(())
    } else {
        Err(ThemeError::InvalidWeight {
            descriptor: descriptor.to_string(),
            weight,
        })
    }
}
