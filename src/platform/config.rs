// iconforge - platform/config.rs
//
// iconforge.toml loading with startup validation.
//
// The file is optional: without it every value comes from util::constants.
// A present but broken file never aborts the run; each problem becomes an
// actionable warning and the affected value falls back to its default.

use crate::core::color::BrandColor;
use crate::core::model::{AlternateSlot, AndroidDensity, IosSlot, Palette, Variant};
use crate::core::targets;
use crate::util::constants;
use crate::util::error::ConfigError;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

// =============================================================================
// Raw file shape
// =============================================================================

/// Raw deserialisable shape of iconforge.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// Source logo path, relative to the project root.
    pub source: Option<String>,
    /// `[android]` section.
    pub android: AndroidSection,
    /// `[ios]` section.
    pub ios: IosSection,
    /// `[palette]` section: variant name -> hex colour.
    pub palette: BTreeMap<String, BrandColor>,
    /// `[variants]` section.
    pub variants: VariantsSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[android]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct AndroidSection {
    pub res_dir: Option<String>,
    pub padding_ratio: Option<f64>,
    pub foreground_padding_ratio: Option<f64>,
}

/// `[ios]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct IosSection {
    pub appiconset_dir: Option<String>,
    pub alternate_icons_dir: Option<String>,
}

/// `[variants]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct VariantsSection {
    /// Palette entries rendered as alternate icons next to the primary one.
    pub alternates: Vec<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

// =============================================================================
// Validated configuration
// =============================================================================

/// Everything a generation run needs, resolved against the project root.
///
/// The size tables are carried here rather than read from globals so the
/// emitters stay functions of their inputs.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub source_path: PathBuf,
    pub android_res_dir: PathBuf,
    pub ios_appiconset_dir: PathBuf,
    pub ios_alternate_dir: PathBuf,

    /// Padding of regular (legacy and iOS) icons.
    pub padding_ratio: f64,
    /// Padding of adaptive-icon foreground layers.
    pub foreground_padding_ratio: f64,

    pub palette: Palette,
    /// Alternate variant names, in render order. Always present in `palette`.
    pub alternates: Vec<String>,

    pub android_densities: Vec<AndroidDensity>,
    pub ios_slots: Vec<IosSlot>,
    pub ios_alternate_slots: Vec<AlternateSlot>,

    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl GeneratorConfig {
    /// Defaults with every path resolved under `root`.
    pub fn for_root(root: &Path) -> Self {
        Self {
            source_path: root.join(constants::DEFAULT_SOURCE_PATH),
            android_res_dir: root.join(constants::DEFAULT_ANDROID_RES_DIR),
            ios_appiconset_dir: root.join(constants::DEFAULT_IOS_APPICONSET_DIR),
            ios_alternate_dir: root.join(constants::DEFAULT_IOS_ALTERNATE_DIR),
            padding_ratio: constants::DEFAULT_PADDING_RATIO,
            foreground_padding_ratio: constants::DEFAULT_FOREGROUND_PADDING_RATIO,
            palette: Palette::default(),
            alternates: Vec::new(),
            android_densities: targets::android_densities(),
            ios_slots: targets::ios_slots(),
            ios_alternate_slots: targets::ios_alternate_slots(),
            log_level: None,
        }
    }

    /// The primary variant followed by each configured alternate.
    pub fn variants(&self) -> Vec<Variant> {
        std::iter::once(constants::PRIMARY_VARIANT)
            .chain(self.alternates.iter().map(String::as_str))
            .filter_map(|name| self.palette.get(name).map(|color| Variant::new(name, color)))
            .collect()
    }
}

/// Locate, read and validate the config file.
///
/// `explicit` is the `--config` path, taken as given; otherwise
/// `root/iconforge.toml` is tried. Returns the validated config and the
/// non-fatal problems found, each of which fell back to a default.
///
/// Runs before the tracing subscriber exists, so it reports through the
/// returned list only.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> (GeneratorConfig, Vec<ConfigError>) {
    let config_path = match explicit {
        Some(p) => p.to_path_buf(),
        None => root.join(constants::CONFIG_FILE_NAME),
    };

    if !config_path.exists() {
        let warnings = match explicit {
            Some(_) => vec![ConfigError::NotFound { path: config_path }],
            None => Vec::new(),
        };
        return (GeneratorConfig::for_root(root), warnings);
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            let err = ConfigError::Io {
                path: config_path,
                source: e,
            };
            return (GeneratorConfig::for_root(root), vec![err]);
        }
    };

    match toml::from_str::<RawConfig>(&content) {
        Ok(raw) => apply_raw(root, raw),
        Err(e) => {
            let err = ConfigError::TomlParse {
                path: config_path,
                source: e,
            };
            (GeneratorConfig::for_root(root), vec![err])
        }
    }
}

/// Validate each field of `raw` against the named limits, accumulating all
/// problems instead of stopping at the first.
pub fn apply_raw(root: &Path, raw: RawConfig) -> (GeneratorConfig, Vec<ConfigError>) {
    let mut config = GeneratorConfig::for_root(root);
    let mut warnings = Vec::new();

    // -- Paths --
    if let Some(source) = raw.source.filter(|s| !s.is_empty()) {
        config.source_path = root.join(source);
    }
    if let Some(dir) = raw.android.res_dir.filter(|s| !s.is_empty()) {
        config.android_res_dir = root.join(dir);
    }
    if let Some(dir) = raw.ios.appiconset_dir.filter(|s| !s.is_empty()) {
        config.ios_appiconset_dir = root.join(dir);
    }
    if let Some(dir) = raw.ios.alternate_icons_dir.filter(|s| !s.is_empty()) {
        config.ios_alternate_dir = root.join(dir);
    }

    // -- Padding ratios --
    if let Some(ratio) = raw.android.padding_ratio {
        match check_padding("android.padding_ratio", ratio, constants::DEFAULT_PADDING_RATIO) {
            Ok(()) => config.padding_ratio = ratio,
            Err(e) => warnings.push(e),
        }
    }
    if let Some(ratio) = raw.android.foreground_padding_ratio {
        match check_padding(
            "android.foreground_padding_ratio",
            ratio,
            constants::DEFAULT_FOREGROUND_PADDING_RATIO,
        ) {
            Ok(()) => config.foreground_padding_ratio = ratio,
            Err(e) => warnings.push(e),
        }
    }

    // -- Palette: entries override or extend the built-in colours --
    for (name, color) in raw.palette {
        config.palette.insert(name, color);
    }

    // -- Variants --
    for name in raw.variants.alternates {
        if name == constants::PRIMARY_VARIANT || config.alternates.contains(&name) {
            continue;
        }
        if config.palette.contains(&name) {
            config.alternates.push(name);
        } else {
            warnings.push(ConfigError::UnknownVariant { name });
        }
    }

    // -- Logging: level --
    if let Some(level) = raw.logging.level {
        if constants::VALID_LOG_LEVELS.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level);
        } else {
            warnings.push(ConfigError::ValueOutOfRange {
                field: "logging.level".to_string(),
                value: level,
                expected: constants::VALID_LOG_LEVELS.join(", "),
                default: constants::DEFAULT_LOG_LEVEL.to_string(),
            });
        }
    }

    (config, warnings)
}

fn check_padding(field: &str, ratio: f64, default: f64) -> Result<(), ConfigError> {
    if (constants::MIN_PADDING_RATIO..=constants::MAX_PADDING_RATIO).contains(&ratio) {
        Ok(())
    } else {
        Err(ConfigError::ValueOutOfRange {
            field: field.to_string(),
            value: ratio.to_string(),
            expected: format!(
                "{} to {}",
                constants::MIN_PADDING_RATIO,
                constants::MAX_PADDING_RATIO
            ),
            default: default.to_string(),
        })
    }
}
