use std::fs;

use plotstyle::{
    get_mapped_palette, get_palette, ColorMap, ConfigKind, Label, LoadOptions, Palette,
    StyleConfig, StyleError,
};
use proptest::prelude::*;
use tempfile::TempDir;

const LAB_PALETTES: &str = r##"
default: ["#1b9e77", "#d95f02", "#7570b3"]
genotype:
  wt: "#4d4d4d"
  ko: "#b2182b"
"##;

fn write(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path.display().to_string()
}

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "palettes.yaml", LAB_PALETTES);

    let mut config = StyleConfig::new();
    config.load_palettes(&path, &LoadOptions::default()).unwrap();

    assert_eq!(config.available_palette_names(), vec!["default", "genotype"]);
    assert_eq!(
        get_palette(&config, "genotype").unwrap(),
        vec!["#4d4d4d", "#b2182b"]
    );
}

#[test]
fn test_reload_replaces_everything() {
    let dir = TempDir::new().unwrap();
    let first = write(&dir, "a.yaml", LAB_PALETTES);
    let second = write(&dir, "b.yaml", "muted: ['#999999']\n");

    let mut config = StyleConfig::new();
    config.load_palettes(&first, &LoadOptions::default()).unwrap();
    config.load_palettes(&second, &LoadOptions::default()).unwrap();

    assert_eq!(config.available_palette_names(), vec!["muted"]);
    assert!(matches!(
        get_palette(&config, "default"),
        Err(StyleError::NotFound { .. })
    ));
}

#[test]
fn test_failed_load_keeps_previous_palettes() {
    let dir = TempDir::new().unwrap();
    let good = write(&dir, "good.yaml", LAB_PALETTES);
    let bad = write(&dir, "bad.yaml", "- just\n- a list\n");

    let mut config = StyleConfig::new();
    config.load_palettes(&good, &LoadOptions::default()).unwrap();

    let err = config.load_palettes(&bad, &LoadOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        StyleError::ConfigLoad {
            kind: ConfigKind::Palette,
            ..
        }
    ));

    let missing = dir.path().join("nope.yaml").display().to_string();
    assert!(config
        .load_palettes(&missing, &LoadOptions::default())
        .is_err());

    assert_eq!(config.available_palette_names(), vec!["default", "genotype"]);
}

#[test]
fn test_palette_of_wrong_shape_is_a_type_error() {
    let mut config = StyleConfig::new();
    let err = config.load_palettes_str("bad: 42\n").unwrap_err();
    assert!(matches!(err, StyleError::Type(_)));
}

#[test]
fn test_queries_before_loading() {
    let mut config = StyleConfig::new();
    assert!(matches!(
        get_palette(&config, "default"),
        Err(StyleError::EmptyConfig { .. })
    ));
    assert!(matches!(
        get_mapped_palette(&mut config, "default", ["a"], None),
        Err(StyleError::EmptyConfig { .. })
    ));
}

#[test]
fn test_cycling_through_list_palette() {
    let mut config = StyleConfig::new();
    config
        .load_palettes_str("p: ['#ff0000', '#00ff00', '#0000ff']\n")
        .unwrap();

    let map = get_mapped_palette(&mut config, "p", ["d", "b", "a", "c", "a"], None).unwrap();
    let pairs: Vec<(String, String)> = map
        .iter()
        .map(|(label, color)| (label.to_string(), color.to_string()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("a".to_string(), "#ff0000".to_string()),
            ("b".to_string(), "#00ff00".to_string()),
            ("c".to_string(), "#0000ff".to_string()),
            ("d".to_string(), "#ff0000".to_string()),
        ]
    );
}

#[test]
fn test_unseen_labels_stick_until_reload() {
    let mut config = StyleConfig::new();
    config.load_palettes_str(LAB_PALETTES).unwrap();

    let map = get_mapped_palette(&mut config, "genotype", ["het", "wt"], Some("#cccccc")).unwrap();
    assert_eq!(map.len(), 3);
    assert_eq!(map.get(&Label::from("het")), Some("#cccccc"));

    match config.palette("genotype").unwrap() {
        Palette::Mapping(stored) => assert_eq!(stored, &map),
        other => panic!("expected mapping, got {:?}", other),
    }

    config.load_palettes_str(LAB_PALETTES).unwrap();
    assert_eq!(get_palette(&config, "genotype").unwrap().len(), 2);
}

#[test]
fn test_numeric_and_boolean_categories() {
    let mut config = StyleConfig::new();
    config
        .load_palettes_str("dose:\n  0: '#ffffff'\n  10: '#000000'\nflag:\n  true: '#00ff00'\n")
        .unwrap();

    let map = get_mapped_palette(&mut config, "dose", [10], None).unwrap();
    assert_eq!(map.get(&Label::Int(10)), Some("#000000"));
    assert_eq!(map.get(&Label::Int(0)), Some("#ffffff"));

    let flags = get_mapped_palette(&mut config, "flag", [true, false], None).unwrap();
    assert_eq!(flags.get(&Label::Bool(false)), Some("#808080"));
}

#[test]
fn test_bundled_defaults() {
    let config = StyleConfig::with_defaults();
    assert!(config.has_palette("default"));
    assert!(config.has_theme("default"));
    assert!(!get_palette(&config, "default").unwrap().is_empty());
}

#[test]
fn test_defaults_from_directory() {
    let dir = TempDir::new().unwrap();
    write(&dir, "palettes.yaml", LAB_PALETTES);

    let config = StyleConfig::with_defaults_from(dir.path());
    assert_eq!(config.available_palette_names(), vec!["default", "genotype"]);
    assert!(config.available_theme_names().is_empty());
}

fn labels() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,4}", 1..12)
}

proptest! {
    #[test]
    fn prop_mapping_depends_only_on_label_set(labels in labels(), seed in any::<u64>()) {
        let mut config = StyleConfig::new();
        config.load_palettes_str("p: ['#111111', '#222222', '#333333']\n").unwrap();

        let mut shuffled = labels.clone();
        shuffled.rotate_left((seed as usize) % labels.len());
        shuffled.extend(labels.iter().take(2).cloned());

        let a: ColorMap = get_mapped_palette(&mut config, "p", &labels, None).unwrap();
        let b: ColorMap = get_mapped_palette(&mut config, "p", &shuffled, None).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_every_label_gets_a_palette_color(labels in labels()) {
        let mut config = StyleConfig::new();
        config.load_palettes_str("p: ['#111111', '#222222']\n").unwrap();

        let map = get_mapped_palette(&mut config, "p", &labels, None).unwrap();
        for label in &labels {
            let color = map.get(&Label::from(label));
            prop_assert!(matches!(color, Some("#111111") | Some("#222222")));
        }
    }
}
