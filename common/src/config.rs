use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use crate::carousel::CarouselTiming;

// site configuration
//
// every page ships the same wasm bundle, so the per-page differences (tabs instead of chips, no
// chip counts, no carousel) live here as named profiles instead of as separate copies of the
// glue.  a page picks its profile with <body data-profile="...">
//
// every field has a default, so an empty [config] table is a valid configuration
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct SiteConfig {
    pub log_level: LogLevel,
    pub features: Features,
    pub header: HeaderConfig,
    pub theme: ThemeConfig,
    pub menu: MenuConfig,
    pub navigation: NavigationConfig,
    pub carousel: CarouselConfig,
    pub filter: FilterConfig,
    pub profiles: HashMap<String, Profile>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    #[default]
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

// switches for whole features; a feature whose elements are missing from the page is skipped
// regardless of what is set here
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Features {
    pub header: bool,
    pub theme: bool,
    pub menu: bool,
    pub navigation: bool,
    pub carousel: bool,
    pub filter: bool,
}

impl Default for Features {
    fn default() -> Self {
        Features {
            header: true,
            theme: true,
            menu: true,
            navigation: true,
            carousel: true,
            filter: true,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub placeholder_id: String,
    pub url: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        HeaderConfig {
            placeholder_id: String::from("header-placeholder"),
            url: String::from("components/header.html"),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub toggle_id: String,
    pub storage_key: String,
    pub attribute: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            toggle_id: String::from("theme-toggle"),
            storage_key: String::from("theme"),
            attribute: String::from("data-theme"),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct MenuConfig {
    pub toggle_selector: String,
    pub nav_selector: String,
    pub overlay_selector: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        MenuConfig {
            toggle_selector: String::from(".mobile-menu-toggle"),
            nav_selector: String::from("nav"),
            overlay_selector: String::from(".mobile-overlay"),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub link_selector: String,
    pub section_selector: String,
    // how far above a section's top the scroll spy already counts it as current
    pub spy_threshold: f64,
    pub anchor_offset: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        NavigationConfig {
            link_selector: String::from("nav a"),
            section_selector: String::from("section[id]"),
            spy_threshold: 100.0,
            anchor_offset: 80.0,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub container_selector: String,
    pub slide_selector: String,
    pub dot_selector: String,
    #[serde(flatten)]
    pub timing: CarouselTiming,
    pub header_clearance: f64,
    pub highlight_delay_ms: u32,
    pub highlight_class: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        CarouselConfig {
            container_selector: String::from(".carousel"),
            slide_selector: String::from(".carousel-slide"),
            dot_selector: String::from(".carousel-dot"),
            timing: CarouselTiming::default(),
            header_clearance: 100.0,
            highlight_delay_ms: 500,
            highlight_class: String::from("highlight"),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct FilterConfig {
    pub control_selector: String,
    pub card_selector: String,
    pub coming_soon_selector: String,
    pub header_selector: String,
    pub dot_selector: String,
    pub chip_counts: bool,
    pub category_headers: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            control_selector: String::from(".filter-chip"),
            card_selector: String::from(".app-card"),
            coming_soon_selector: String::from(".coming-soon"),
            header_selector: String::from(".category-header"),
            dot_selector: String::from(".chip-dot"),
            chip_counts: true,
            category_headers: false,
        }
    }
}

// per-page overrides; whatever a profile sets replaces the base table wholesale
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Profile {
    pub features: Option<Features>,
    pub filter: Option<FilterConfig>,
}

impl SiteConfig {
    /// The configuration a page with the given profile name should run with.
    pub fn for_profile(&self, name: Option<&str>) -> SiteConfig {
        let mut config = self.clone();

        let Some(name) = name else {
            return config;
        };

        match self.profiles.get(name) {
            Some(profile) => {
                debug!({ profile = name }, "applying page profile");
                if let Some(features) = profile.features {
                    config.features = features;
                }
                if let Some(filter) = &profile.filter {
                    config.filter = filter.clone();
                }
            }
            None => debug!({ profile = name }, "unknown page profile, using base config"),
        }

        config
    }
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    #[serde(default)]
    config: SiteConfig,
}

#[instrument(level = Level::DEBUG, skip(doc))]
pub fn parse_config(doc: &str) -> anyhow::Result<SiteConfig> {
    let data: TomlConfigFile = toml::from_str(doc)?;

    debug!("successfully parsed config");
    Ok(data.config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.carousel.timing.rotation_interval_ms, 5000);
        assert_eq!(config.carousel.timing.resume_delay_ms, 10000);
        assert_eq!(config.theme.storage_key, "theme");
    }

    #[test]
    fn test_partial_tables_keep_other_defaults() {
        let config = parse_config(
            r#"
            [config]
            log_level = "warn"

            [config.carousel]
            rotation_interval_ms = 3000

            [config.features]
            carousel = false
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.carousel.timing.rotation_interval_ms, 3000);
        assert_eq!(config.carousel.timing.resume_delay_ms, 10000);
        assert_eq!(config.carousel.highlight_delay_ms, 500);
        assert!(!config.features.carousel);
        assert!(config.features.filter);
    }

    #[test]
    fn test_profile_overrides() {
        let config = parse_config(
            r#"
            [config.profiles.games.filter]
            control_selector = ".filter-tab"
            chip_counts = false
            category_headers = true

            [config.profiles.about.features]
            carousel = false
            filter = false
            "#,
        )
        .unwrap();

        let games = config.for_profile(Some("games"));
        assert_eq!(games.filter.control_selector, ".filter-tab");
        assert!(!games.filter.chip_counts);
        assert!(games.filter.category_headers);
        assert_eq!(games.filter.card_selector, ".app-card");
        assert!(games.features.carousel);

        let about = config.for_profile(Some("about"));
        assert!(!about.features.carousel);
        assert!(about.features.menu);

        assert_eq!(config.for_profile(Some("missing")).filter, config.filter);
        assert_eq!(config.for_profile(None).features, config.features);
    }

    #[test]
    fn test_bad_document_is_an_error() {
        assert!(parse_config("[config]\nlog_level = \"loud\"").is_err());
        assert!(parse_config("[config").is_err());
    }
}
