// iconforge - core/model.rs
//
// Core data model types. Pure data definitions with no I/O.
//
// These types are the shared vocabulary between the compositor, the size
// tables, the config loader and the emitters.

use crate::core::color::BrandColor;
use crate::util::constants;
use std::collections::BTreeMap;

// =============================================================================
// Palette and variants
// =============================================================================

/// Mapping from a symbolic variant name ("primary", "danger", ...) to the
/// background colour of that icon variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: BTreeMap<String, BrandColor>,
}

impl Palette {
    pub fn new() -> Self {
        Self {
            colors: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, color: BrandColor) {
        self.colors.insert(name.into(), color);
    }

    pub fn get(&self, name: &str) -> Option<BrandColor> {
        self.colors.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.colors.contains_key(name)
    }
}

impl Default for Palette {
    /// The built-in brand palette from `constants::DEFAULT_PALETTE`.
    fn default() -> Self {
        let mut palette = Self::new();
        for (name, hex) in constants::DEFAULT_PALETTE {
            if let Ok(color) = BrandColor::from_hex(hex) {
                palette.insert(*name, color);
            }
        }
        palette
    }
}

/// One icon variant to render: a name and its resolved background colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub name: String,
    pub color: BrandColor,
}

impl Variant {
    pub fn new(name: impl Into<String>, color: BrandColor) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    /// The primary variant provides the default app icon; every other
    /// variant is an alternate.
    pub fn is_primary(&self) -> bool {
        self.name == constants::PRIMARY_VARIANT
    }
}

// =============================================================================
// Size specifications
// =============================================================================

/// One Android density bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AndroidDensity {
    /// Resource folder name, e.g. `mipmap-xhdpi`.
    pub folder: String,
    /// Legacy launcher icon edge in pixels at this density.
    pub legacy_size: u32,
}

impl AndroidDensity {
    pub fn new(folder: impl Into<String>, legacy_size: u32) -> Self {
        Self {
            folder: folder.into(),
            legacy_size,
        }
    }

    /// Edge of the adaptive foreground layer: 48dp legacy maps to 108dp.
    pub fn foreground_size(&self) -> u32 {
        self.legacy_size * constants::ADAPTIVE_LAYER_DP / constants::LEGACY_ICON_DP
    }
}

/// One slot of an iOS appiconset.
#[derive(Debug, Clone, PartialEq)]
pub struct IosSlot {
    /// Logical size in points. 83.5 is the iPad Pro slot.
    pub point_size: f32,
    pub scale: u32,
    pub filename: String,
}

impl IosSlot {
    pub fn new(point_size: f32, scale: u32, filename: impl Into<String>) -> Self {
        Self {
            point_size,
            scale,
            filename: filename.into(),
        }
    }

    /// Pixel edge, truncated (83.5pt @2x is 167px).
    pub fn pixel_size(&self) -> u32 {
        (self.point_size * self.scale as f32) as u32
    }
}

/// One image of an iOS alternate icon, named `{variant}{suffix}.png`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternateSlot {
    pub pixel_size: u32,
    pub suffix: String,
}

impl AlternateSlot {
    pub fn new(pixel_size: u32, suffix: impl Into<String>) -> Self {
        Self {
            pixel_size,
            suffix: suffix.into(),
        }
    }

    pub fn filename(&self, variant: &str) -> String {
        format!("{variant}{}.png", self.suffix)
    }
}

// =============================================================================
// Compositing
// =============================================================================

/// Canvas fill behind the logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    Solid(BrandColor),
    /// Fully transparent, used for adaptive-icon foreground layers.
    Transparent,
}
