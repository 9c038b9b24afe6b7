//! Generate command implementation.
//!
//! Builds a theme from the scene configuration, samples it and prints
//! the resulting scene as JSON on stdout.

use std::path::PathBuf;

use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::SceneConfig;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::scene::Scene;

/// Generate a theme scene and print it as JSON
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Scene configuration file (defaults to the built-in discs theme)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Number of colours to sample
    #[arg(long, short)]
    pub num: Option<usize>,

    /// Seed for a reproducible scene
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output the sorted view
    #[arg(long)]
    pub sort: bool,

    /// Primary sorting criterion (e.g. HUE)
    #[arg(long)]
    pub primary: Option<String>,

    /// Secondary sorting criterion (e.g. BRIGHTNESS)
    #[arg(long)]
    pub secondary: Option<String>,

    /// Number of clusters in the sorted view
    #[arg(long, short = 'k')]
    pub clusters: Option<usize>,

    /// Skip the random bright accent colour
    #[arg(long)]
    pub no_accent: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => {
            printer.status("Loading", &display_path(path));
            SceneConfig::load(path)?
        }
        None => SceneConfig::default(),
    };
    apply_overrides(&mut config, &args);

    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let scene = Scene::generate(&config, &mut rng)?;

    printer.status(
        "Sampled",
        &format!(
            "{} from {} {}",
            plural(scene.list().len(), "colour", "colours"),
            printer.bold(scene.theme().name()),
            printer.dim(&format!("(seed {})", seed)),
        ),
    );

    let report = scene.report();
    if let (Some(primary), Some(secondary), Some(clusters)) =
        (report.primary, report.secondary, report.clusters)
    {
        printer.info(
            "Sorted",
            &format!(
                "by {} then {} into {}",
                primary,
                secondary,
                plural(clusters, "cluster", "clusters")
            ),
        );
    }

    let json = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", json);

    Ok(())
}

/// Command line flags take precedence over the configuration file.
fn apply_overrides(config: &mut SceneConfig, args: &GenerateArgs) {
    if let Some(num) = args.num {
        config.num = num;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if args.sort {
        config.sort = true;
    }
    if let Some(primary) = &args.primary {
        config.primary_criteria = primary.clone();
    }
    if let Some(secondary) = &args.secondary {
        config.secondary_criteria = secondary.clone();
    }
    if let Some(clusters) = args.clusters {
        config.clusters = clusters;
    }
    if args.no_accent {
        config.accent = false;
    }
}
