// iconforge - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.
// Every fixed path, ratio, size and resource name used by the emitters
// lives here so the tables in core::targets stay pure data.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "iconforge";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Default input / output locations (relative to the project root)
// =============================================================================

/// Source logo: a transparent PNG containing only the logo mark.
pub const DEFAULT_SOURCE_PATH: &str = "Logo_Source.png";

/// Android resource directory that receives the `mipmap-*` folders.
pub const DEFAULT_ANDROID_RES_DIR: &str = "android/app/src/main/res";

/// iOS asset catalog icon set for the primary app icon.
pub const DEFAULT_IOS_APPICONSET_DIR: &str = "ios/Runner/Assets.xcassets/AppIcon.appiconset";

/// Directory for iOS alternate icons (switched at runtime by the app).
pub const DEFAULT_IOS_ALTERNATE_DIR: &str = "ios/Runner/Icons";

// =============================================================================
// Compositing
// =============================================================================

/// Margin on each edge of a regular icon, as a fraction of the canvas edge.
pub const DEFAULT_PADDING_RATIO: f64 = 0.05;

/// Margin for adaptive-icon foregrounds. The larger value keeps the logo
/// inside the circular safe zone (66dp of the 108dp layer).
pub const DEFAULT_FOREGROUND_PADDING_RATIO: f64 = 0.25;

/// Smallest accepted padding ratio.
pub const MIN_PADDING_RATIO: f64 = 0.0;

/// Largest accepted padding ratio. At 0.5 the logo area collapses to zero.
pub const MAX_PADDING_RATIO: f64 = 0.45;

/// Adaptive foreground layers are 108dp where a legacy icon is 48dp.
pub const ADAPTIVE_LAYER_DP: u32 = 108;

/// Legacy launcher icon edge in dp.
pub const LEGACY_ICON_DP: u32 = 48;

// =============================================================================
// Palette
// =============================================================================

/// Variant name of the default (non-alternate) icon.
pub const PRIMARY_VARIANT: &str = "primary";

/// Built-in brand palette: `(variant name, hex colour)`.
pub const DEFAULT_PALETTE: &[(&str, &str)] = &[
    ("primary", "#2E88F6"),
    ("danger", "#FF5959"),
    ("warning", "#FF9F43"),
    ("success", "#4CAF50"),
];

// =============================================================================
// Android resource names
// =============================================================================

/// Basename of the launcher icon for the primary variant.
pub const ANDROID_LAUNCHER_BASENAME: &str = "ic_launcher";

/// Suffix appended to a launcher basename for the round icon.
pub const ANDROID_ROUND_SUFFIX: &str = "_round";

/// Basename of the adaptive-icon foreground layer.
pub const ANDROID_FOREGROUND_BASENAME: &str = "ic_launcher_foreground";

/// Folder holding the adaptive-icon XML descriptors (API 26+).
pub const ANDROID_ANYDPI_DIR: &str = "mipmap-anydpi-v26";

/// Suffix of the colour resource referenced as adaptive background.
pub const ANDROID_COLOR_RESOURCE_SUFFIX: &str = "_color";

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name, looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "iconforge.toml";
