use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use plotstyle::backend::{GridWhich, MemoryAxis, MemoryBackend, MemoryFigure, PlotBackend};
use plotstyle::config::{Fetch, Source};
use plotstyle::{
    global, set_style, ConfigKind, FetchError, FontAuth, LoadOptions, StyleConfig, StyleError,
    StyleOptions, StyleParams,
};
use serial_test::serial;

const THEMES_URL: &str = "https://raw.githubusercontent.com/lab/style/main/themes.yaml";

const THEMES: &str = r##"
poster:
  figure.dpi: 72
  font.size: 18
  fonts:
    Inter:
      - https://raw.githubusercontent.com/lab/fonts/main/Inter-Regular.otf
      - https://raw.githubusercontent.com/lab/fonts/main/Inter-Bold.otf
    Fira: https://example.org/missing/Fira.ttf
  advanced_grid_style:
    major: { color: "#bbbbbb", linewidth: 0.8 }
    minor: { color: "#eeeeee" }
"##;

type Requests = Arc<Mutex<Vec<(String, Option<String>)>>>;

/// Serves canned responses and records the token sent with each request.
struct StubFetcher {
    files: HashMap<String, Vec<u8>>,
    requests: Requests,
}

impl StubFetcher {
    fn new(requests: Requests) -> Self {
        let mut files = HashMap::new();
        files.insert(THEMES_URL.to_string(), THEMES.as_bytes().to_vec());
        for name in ["Inter-Regular.otf", "Inter-Bold.otf"] {
            files.insert(
                format!("https://raw.githubusercontent.com/lab/fonts/main/{}", name),
                vec![0u8; 16],
            );
        }
        Self { files, requests }
    }
}

impl Fetch for StubFetcher {
    fn fetch(&self, source: &Source, token: Option<&str>) -> Result<Vec<u8>, FetchError> {
        let key = source.to_string();
        self.requests
            .lock()
            .unwrap()
            .push((key.clone(), token.map(str::to_string)));
        self.files.get(&key).cloned().ok_or(FetchError::Http {
            url: key,
            message: "404 Not Found".to_string(),
        })
    }
}

fn stub_config() -> (StyleConfig, Requests) {
    let requests = Requests::default();
    let config = StyleConfig::with_fetcher(Box::new(StubFetcher::new(requests.clone())));
    (config, requests)
}

fn tokens_for(requests: &Requests, suffix: &str) -> Vec<Option<String>> {
    requests
        .lock()
        .unwrap()
        .iter()
        .filter(|(url, _)| url.ends_with(suffix))
        .map(|(_, token)| token.clone())
        .collect()
}

#[test]
fn test_fonts_inherit_theme_token() {
    let (mut config, requests) = stub_config();
    let mut backend = MemoryBackend::new();
    let options = LoadOptions::new().with_auth_token("secret");

    let report = config.load_themes(THEMES_URL, &options, &mut backend).unwrap();

    assert_eq!(report.registered.len(), 2);
    assert_eq!(backend.fonts().len(), 2);
    assert_eq!(backend.fonts()[0].family, "Inter");
    assert_eq!(
        tokens_for(&requests, ".otf"),
        vec![Some("secret".to_string()), Some("secret".to_string())]
    );
}

#[test]
fn test_dedicated_and_disabled_font_tokens() {
    let (mut config, requests) = stub_config();
    let mut backend = MemoryBackend::new();
    let options = LoadOptions::new()
        .with_auth_token("secret")
        .with_font_auth(FontAuth::Token("fonts-only".to_string()));
    config.load_themes(THEMES_URL, &options, &mut backend).unwrap();
    assert!(tokens_for(&requests, ".otf")
        .iter()
        .all(|t| t.as_deref() == Some("fonts-only")));
    assert_eq!(tokens_for(&requests, "themes.yaml"), vec![Some("secret".to_string())]);

    let (mut config, requests) = stub_config();
    let options = LoadOptions::new()
        .with_auth_token("secret")
        .with_font_auth(FontAuth::Disabled);
    config.load_themes(THEMES_URL, &options, &mut backend).unwrap();
    assert!(tokens_for(&requests, ".otf").iter().all(Option::is_none));
}

#[test]
fn test_font_failures_do_not_fail_the_load() {
    let (mut config, _) = stub_config();
    let mut backend = MemoryBackend::new();

    let report = config
        .load_themes(THEMES_URL, &LoadOptions::default(), &mut backend)
        .unwrap();

    assert!(!report.is_clean());
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].family, "Fira");
    assert_eq!(report.issues[0].theme, "poster");
    assert!(config.has_theme("poster"));
}

#[test]
fn test_unreachable_theme_source() {
    let (mut config, _) = stub_config();
    config.load_themes_str("keep: {font.size: 9}\n").unwrap();
    let mut backend = MemoryBackend::new();

    let err = config
        .load_themes(
            "https://github.com/lab/style/raw/nope.yaml",
            &LoadOptions::default(),
            &mut backend,
        )
        .unwrap_err();

    assert!(matches!(
        err,
        StyleError::ConfigLoad {
            kind: ConfigKind::Theme,
            ..
        }
    ));
    assert_eq!(config.available_theme_names(), vec!["keep"]);
}

#[test]
fn test_inspect_theme_shows_authored_settings() {
    let (mut config, _) = stub_config();
    config.load_themes_str(THEMES).unwrap();

    let settings = config.inspect_theme("poster").unwrap();
    assert!(settings.contains_key("fonts"));
    assert!(settings.contains_key("advanced_grid_style"));

    let theme = config.theme("poster").unwrap();
    assert!(!theme.params().contains_key("fonts"));
    assert_eq!(theme.fonts().len(), 2);
}

#[test]
fn test_set_style_with_override_and_grid() {
    let (mut config, _) = stub_config();
    config.load_themes_str(THEMES).unwrap();
    config
        .load_palettes_str("default: ['#000000', '#ff0000']\n")
        .unwrap();

    let mut backend =
        MemoryBackend::with_defaults(StyleParams::new().with("figure.dpi", 100).with("axes.grid", false));
    let options = StyleOptions::new().with_override("figure.dpi", 300);
    let styler = set_style(&config, "poster", &options, &mut backend).unwrap();

    assert_eq!(backend.param("figure.dpi").and_then(|v| v.as_i64()), Some(300));
    assert_eq!(backend.param("font.size").and_then(|v| v.as_i64()), Some(18));
    assert_eq!(backend.param("axes.grid").and_then(|v| v.as_bool()), Some(false));
    assert_eq!(backend.color_cycle(), ["#000000", "#ff0000"]);
    assert!(backend.colormap("project_default").is_some());
    assert!(backend.colormap("project_default_r").is_some());

    let mut axis = MemoryAxis::new();
    styler.apply(&mut axis).unwrap();
    assert!(axis.minor_ticks());
    assert!(axis.grid(GridWhich::Major).is_some());

    let mut figure = MemoryFigure::default();
    assert!(matches!(styler.apply(&mut figure), Err(StyleError::Type(_))));
}

#[test]
fn test_reapplying_without_reset_layers_themes() {
    let mut config = StyleConfig::new();
    config
        .load_themes_str("base: {font.size: 9, axes.grid: true}\ntweak: {font.size: 12}\n")
        .unwrap();
    let mut backend = MemoryBackend::new();

    set_style(&config, "base", &StyleOptions::default(), &mut backend).unwrap();
    set_style(&config, "tweak", &StyleOptions::new().clean_reset(false), &mut backend).unwrap();
    assert_eq!(backend.param("axes.grid").and_then(|v| v.as_bool()), Some(true));
    assert_eq!(backend.param("font.size").and_then(|v| v.as_i64()), Some(12));

    set_style(&config, "tweak", &StyleOptions::default(), &mut backend).unwrap();
    assert!(backend.param("axes.grid").is_none());
}

#[test]
fn test_backend_is_usable_as_trait_object() {
    let config = StyleConfig::with_defaults();
    let mut backend = MemoryBackend::new();
    let dyn_backend: &mut dyn PlotBackend = &mut backend;
    let styler = set_style(&config, "paper", &StyleOptions::default(), dyn_backend).unwrap();
    assert!(styler.grid_style().is_some());
}

#[test]
#[serial]
fn test_global_store_styles_backend() {
    global::reset();
    let mut backend = MemoryBackend::new();
    {
        let config = global::shared();
        set_style(&config, "presentation", &StyleOptions::default(), &mut backend).unwrap();
    }
    assert_eq!(backend.param("font.size").and_then(|v| v.as_i64()), Some(16));
    assert!(!backend.color_cycle().is_empty());
}

#[test]
#[serial]
fn test_global_store_can_be_replaced() {
    let mut custom = StyleConfig::new();
    custom.load_themes_str("mine: {font.size: 7}\n").unwrap();
    global::replace(custom);

    let mut backend = MemoryBackend::new();
    let err = set_style(&global::shared(), "paper", &StyleOptions::default(), &mut backend)
        .unwrap_err();
    assert!(matches!(err, StyleError::NotFound { .. }));

    global::reset();
    assert!(global::shared().has_theme("paper"));
}
