//! End-to-end tests: theme construction, sampling and cluster sorting.

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use theme_discs::sort::criteria;
use theme_discs::{
    cluster_sort, Colour, ColourRange, ColourTheme, Criterion, SampleId, SampledList, Scene,
    SceneConfig, ThemeError,
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

#[test]
fn red_theme_sorted_into_one_cluster() {
    let mut theme = ColourTheme::new("red");
    theme.add_range("red", 1.0).unwrap();

    let list = theme.get_colors(5, &mut rng(1)).unwrap();
    assert_eq!(list.len(), 5);
    assert!(list.colours().iter().all(|c| *c == Colour::rgb8(255, 0, 0)));

    let hue = Criterion::resolve("HUE").unwrap();
    let brightness = Criterion::resolve("BRIGHTNESS").unwrap();
    let assignment = cluster_sort(&list, &hue, &brightness, 1).unwrap();

    assert_eq!(assignment.num_clusters(), 1);
    assert_eq!(
        assignment.cluster(0).unwrap(),
        list.ids().collect::<Vec<_>>().as_slice()
    );
}

#[test]
fn nine_evenly_spread_colours_split_three_ways() {
    let list = SampledList::new(
        (0..9)
            .map(|i| Colour::hsv(0.5, i as f32 / 8.0, 0.5))
            .collect(),
    );
    let saturation = Criterion::resolve("SATURATION").unwrap();

    let assignment = cluster_sort(&list, &saturation, &saturation, 3).unwrap();

    let sizes: Vec<_> = assignment.clusters().iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![3, 3, 3]);
    insta::assert_json_snapshot!(assignment.position(SampleId::new(8)).unwrap(), @r#"
    {
      "cluster": 2,
      "rank": 2
    }
    "#);
}

#[test]
fn value_equal_samples_keep_distinct_positions() {
    let mut theme = ColourTheme::new("twins");
    theme.add_range("teal", 1.0).unwrap();
    let list = theme.get_colors(4, &mut rng(3)).unwrap();

    let hue = Criterion::resolve("HUE").unwrap();
    let assignment = cluster_sort(&list, &hue, &hue, 2).unwrap();

    let ranks: Vec<_> = list
        .ids()
        .map(|id| assignment.position(id).unwrap().rank)
        .collect();
    assert_eq!(ranks, vec![0, 1, 2, 3]);
}

#[test]
fn sampled_population_stays_in_bounds() {
    let mut theme = ColourTheme::new("mixed");
    for range in ColourRange::ALL {
        theme
            .add_range(&format!("{} cornflowerblue", range.name().to_lowercase()), 1.0)
            .unwrap();
    }
    theme
        .add_range_with(ColourRange::Bright, Colour::random(&mut rng(4)), 0.03)
        .unwrap();

    let list = theme.get_colors(500, &mut rng(5)).unwrap();
    assert_eq!(list.len(), 500);
    for c in list.colours() {
        for facet in [c.hue(), c.saturation(), c.brightness(), c.alpha()] {
            assert!((0.0..=1.0).contains(&facet));
        }
    }
}

#[test]
fn error_kinds_surface_to_caller() {
    let mut theme = ColourTheme::new("broken");
    assert!(matches!(
        theme.add_range("soft unicorn", 1.0),
        Err(ThemeError::UnknownColourName { .. })
    ));
    assert!(matches!(
        theme.add_range("glittery ivory", 1.0),
        Err(ThemeError::UnknownRangeName { .. })
    ));
    assert!(matches!(
        theme.get_colors(3, &mut rng(0)),
        Err(ThemeError::EmptyTheme { .. })
    ));
    assert!(matches!(
        Criterion::resolve("WARMTH"),
        Err(ThemeError::UnknownCriterion { .. })
    ));
    assert!(matches!(
        SampledList::default().average(),
        Err(ThemeError::EmptyList)
    ));
    let hue = Criterion::resolve("HUE").unwrap();
    assert!(matches!(
        cluster_sort(&SampledList::default(), &hue, &hue, 0),
        Err(ThemeError::InvalidClusterCount { .. })
    ));
}

#[test]
fn criteria_names_for_selection_controls() {
    insta::assert_snapshot!(criteria::names().collect::<Vec<_>>().join("\n"), @r"
    HUE
    SATURATION
    BRIGHTNESS
    ALPHA
    LUMINANCE
    RED
    GREEN
    BLUE
    CYAN
    MAGENTA
    YELLOW
    BLACK
    ");
}

#[test]
fn fixture_scene_is_sorted_and_reproducible() {
    let config = SceneConfig::load(&fixture("sunset.yaml")).unwrap();
    assert_eq!(config.seed, Some(2024));

    let seed = config.seed.unwrap();
    let mut scene = Scene::generate(&config, &mut rng(seed)).unwrap();
    let again = Scene::generate(&config, &mut rng(seed)).unwrap();
    assert_eq!(scene.list(), again.list());

    assert!(scene.is_sorted());
    let report = scene.report();
    assert_eq!(report.name, "sunset");
    assert_eq!(report.clusters, Some(6));
    assert_eq!(report.secondary, Some("LUMINANCE"));
    assert_eq!(report.discs.len(), 60);

    let original: Vec<_> = scene.list().iter().collect();
    scene.unsort();
    let primary = Criterion::resolve("BRIGHTNESS").unwrap();
    let secondary = Criterion::resolve("HUE").unwrap();
    scene.sort(primary, secondary, 3).unwrap();
    scene.unsort();
    assert_eq!(scene.list().iter().collect::<Vec<_>>(), original);
    assert!(scene.report().clusters.is_none());
}

#[test]
fn config_written_to_disk_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("discs.yaml");
    std::fs::write(
        &path,
        "palette:\n  - descriptor: cool steelblue\n    weight: 1\naccent: false\nnum: 12\n",
    )
    .unwrap();

    let config = SceneConfig::load(&path).unwrap();
    let theme = config.build_theme(&mut rng(7)).unwrap();
    assert_eq!(theme.len(), 1);
    assert_eq!(theme.entries()[0].label, "cool steelblue");

    let scene = Scene::generate(&config, &mut rng(7)).unwrap();
    assert_eq!(scene.list().len(), 12);
    let background = scene.background();
    assert!(ColourRange::Cool.contains(&background) || background.brightness() >= 0.9);
}
