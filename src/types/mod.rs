//! Core domain types.
//!
//! This module contains the colour model and theme construction:
//! - `Colour` - immutable HSVA colour values
//! - `ColourRange` - named shade/tint presets (soft, bright, warm...)
//! - `ColourTheme` - weighted descriptors compiled into a sampler
//! - `SampledList` - sampled colours tagged with stable `SampleId`s

mod colour;
mod named;
mod range;
mod sample;
mod theme;

pub use colour::Colour;
pub use named::{colour_names, named_colour};
pub use range::ColourRange;
pub use sample::{SampleId, SampledList};
pub use theme::{ColourTheme, Descriptor, PaletteEntry, DEFAULT_VARIANCE};
