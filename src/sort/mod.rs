//! Sorting sampled colours.
//!
//! - `criteria` - the registry of named sort keys (HUE, BRIGHTNESS, ...)
//! - `cluster` - bucket-then-rank cluster sort over a `SampledList`

pub mod cluster;
pub mod criteria;

pub use cluster::{cluster_sort, ClusterAssignment, ClusterPosition};
pub use criteria::Criterion;
