//! Disc scenes: a sampled theme with per-sample placement.
//!
//! A scene owns one sampled list and keys a placement (position and
//! radius) to every `SampleId`. Sorting attaches a cluster assignment;
//! unsorting drops it. The sampled order itself never changes.

use rand::Rng;
use serde::Serialize;

use crate::config::SceneConfig;
use crate::error::Result;
use crate::sort::{cluster_sort, ClusterAssignment, Criterion};
use crate::types::{Colour, ColourTheme, SampleId, SampledList};

/// Radius of every disc in the sorted grid.
pub const SORTED_RADIUS: f32 = 12.0;

/// Position and size of a disc.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

#[derive(Debug, Clone)]
struct SortState {
    primary: Criterion,
    secondary: Criterion,
    assignment: ClusterAssignment,
}

/// A generated scene.
#[derive(Debug, Clone)]
pub struct Scene {
    theme: ColourTheme,
    list: SampledList,
    placements: Vec<Placement>,
    background: Colour,
    width: f32,
    height: f32,
    padding: f32,
    sorted: Option<SortState>,
}

impl Scene {
    /// Build the theme, sample it and place every disc at random.
    ///
    /// Applies the configured sort when `config.sort` is set.
    pub fn generate<R: Rng + ?Sized>(config: &SceneConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;

        let theme = config.build_theme(rng)?;
        let list = theme.get_colors(config.num, rng)?;
        let background = list.average()?;
        let list = list.with_random_alpha(rng);

        let [min_radius, max_radius] = config.scale_range;
        let placements = (0..list.len())
            .map(|_| Placement {
                x: rng.gen::<f32>() * config.width,
                y: rng.gen::<f32>() * config.height,
                radius: rng.gen_range(min_radius..=max_radius),
            })
            .collect();

        let mut scene = Self {
            theme,
            list,
            placements,
            background,
            width: config.width,
            height: config.height,
            padding: config.padding,
            sorted: None,
        };

        if config.sort {
            let (primary, secondary) = config.criteria()?;
            scene.sort(primary, secondary, config.clusters)?;
        }

        Ok(scene)
    }

    pub fn theme(&self) -> &ColourTheme {
        &self.theme
    }

    /// Sampled colours in their original order.
    pub fn list(&self) -> &SampledList {
        &self.list
    }

    /// Average colour of the sample, fully opaque.
    pub fn background(&self) -> Colour {
        self.background
    }

    /// Random placement of a disc.
    pub fn placement(&self, id: SampleId) -> Option<Placement> {
        self.placements.get(id.index()).copied()
    }

    pub fn is_sorted(&self) -> bool {
        self.sorted.is_some()
    }

    pub fn assignment(&self) -> Option<&ClusterAssignment> {
        self.sorted.as_ref().map(|s| &s.assignment)
    }

    /// Switch to the sorted view, replacing any previous assignment.
    pub fn sort(&mut self, primary: Criterion, secondary: Criterion, clusters: usize) -> Result<()> {
        let assignment = cluster_sort(&self.list, &primary, &secondary, clusters)?;
        self.sorted = Some(SortState {
            primary,
            secondary,
            assignment,
        });
        Ok(())
    }

    /// Return to the unsorted view.
    pub fn unsort(&mut self) {
        self.sorted = None;
    }

    /// Where a disc should be drawn in the current view.
    ///
    /// Unsorted discs sit at their random placement. Sorted discs sit on a
    /// padded grid: one column per cluster, one row per rank.
    pub fn target(&self, id: SampleId) -> Option<Placement> {
        let placement = self.placement(id)?;
        let Some(state) = &self.sorted else {
            return Some(placement);
        };
        let position = state.assignment.position(id)?;

        let x = grid_axis(
            self.width,
            self.padding,
            state.assignment.num_clusters(),
            position.cluster,
        );
        let y = grid_axis(
            self.height,
            self.padding,
            state.assignment.largest_cluster(),
            position.rank,
        );

        Some(Placement {
            x,
            y,
            radius: SORTED_RADIUS,
        })
    }

    /// Serializable snapshot of the current view.
    pub fn report(&self) -> SceneReport {
        let discs = self
            .list
            .iter()
            .filter_map(|(id, colour)| {
                let target = self.target(id)?;
                let position = self.assignment().and_then(|a| a.position(id));
                Some(DiscReport {
                    id,
                    fill: colour.to_rgba_css(),
                    x: target.x,
                    y: target.y,
                    radius: target.radius,
                    cluster: position.map(|p| p.cluster),
                    rank: position.map(|p| p.rank),
                })
            })
            .collect();

        SceneReport {
            name: self.theme.name().to_string(),
            background: self.background.to_hex_css(),
            width: self.width,
            height: self.height,
            primary: self.sorted.as_ref().map(|s| s.primary.name()),
            secondary: self.sorted.as_ref().map(|s| s.secondary.name()),
            clusters: self.assignment().map(ClusterAssignment::num_clusters),
            discs,
        }
    }
}

/// Coordinate of slot `index` out of `slots` along an axis of `length`.
///
/// A single slot (or none) is centred instead of spacing by `slots - 1`.
fn grid_axis(length: f32, padding: f32, slots: usize, index: usize) -> f32 {
    if slots <= 1 {
        return length / 2.0;
    }
    let step = (length - padding * 2.0) / (slots - 1) as f32;
    padding + step * index as f32
}

/// JSON view of a scene.
#[derive(Debug, Clone, Serialize)]
pub struct SceneReport {
    pub name: String,
    pub background: String,
    pub width: f32,
    pub height: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clusters: Option<usize>,
    pub discs: Vec<DiscReport>,
}

/// JSON view of one disc.
#[derive(Debug, Clone, Serialize)]
pub struct DiscReport {
    pub id: SampleId,
    pub fill: String,
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<usize>,
}
