// iconforge - app/ios.rs
//
// iOS icons: the primary AppIcon.appiconset and, when alternates are
// configured, the alternate icon images. Every iOS output is flattened to
// RGB because App Store icon slots reject an alpha channel.

use crate::core::compositor::{compose_icon, ComposeSpec};
use crate::core::model::{Background, Variant};
use crate::platform::config::GeneratorConfig;
use crate::platform::fs;
use crate::util::error::Result;
use image::RgbaImage;
use std::path::PathBuf;

fn opaque(size: u32, variant: &Variant, padding_ratio: f64) -> ComposeSpec {
    ComposeSpec {
        size,
        background: Background::Solid(variant.color),
        padding_ratio,
        strip_alpha: true,
    }
}

/// Write the appiconset for the primary variant and the alternate-icon
/// images for every other variant. Returns the written paths.
pub fn emit(
    source: &RgbaImage,
    variants: &[Variant],
    config: &GeneratorConfig,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    if let Some(primary) = variants.iter().find(|v| v.is_primary()) {
        fs::ensure_dir(&config.ios_appiconset_dir)?;
        for slot in &config.ios_slots {
            let icon = compose_icon(
                source,
                &opaque(slot.pixel_size(), primary, config.padding_ratio),
            )?;
            let path = config.ios_appiconset_dir.join(&slot.filename);
            fs::save_png(&icon, &path)?;
            written.push(path);
        }
    } else {
        tracing::warn!("No primary variant configured; skipping AppIcon.appiconset");
    }

    let alternates: Vec<&Variant> = variants.iter().filter(|v| !v.is_primary()).collect();
    if !alternates.is_empty() {
        fs::ensure_dir(&config.ios_alternate_dir)?;
        for variant in alternates {
            for slot in &config.ios_alternate_slots {
                let icon = compose_icon(
                    source,
                    &opaque(slot.pixel_size, variant, config.padding_ratio),
                )?;
                let path = config.ios_alternate_dir.join(slot.filename(&variant.name));
                fs::save_png(&icon, &path)?;
                written.push(path);
            }
        }
    }

    tracing::info!(files = written.len(), "iOS icons written");
    Ok(written)
}
