//! theme-discs - Weighted colour themes and cluster sorting
//!
//! Builds colour themes from weighted descriptors such as `"soft ivory"`,
//! samples populations of colours from them and sorts those populations
//! into clusters by a primary and secondary criterion.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod scene;
pub mod sort;
pub mod types;

pub use config::{EntryConfig, SceneConfig};
pub use error::{Result, ThemeError};
pub use scene::{Placement, Scene, SceneReport};
pub use sort::{cluster_sort, ClusterAssignment, ClusterPosition, Criterion};
pub use types::{
    colour_names, named_colour, Colour, ColourRange, ColourTheme, Descriptor, PaletteEntry,
    SampleId, SampledList,
};
