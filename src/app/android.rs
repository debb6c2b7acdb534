// iconforge - app/android.rs
//
// Android launcher icons: legacy + round PNGs per density and variant, the
// colour-independent adaptive foreground layer per density, and the
// adaptive-icon XML descriptors in mipmap-anydpi-v26.

use crate::core::compositor::{compose_icon, ComposeSpec};
use crate::core::model::{Background, Variant};
use crate::platform::config::GeneratorConfig;
use crate::platform::fs;
use crate::util::constants;
use crate::util::error::Result;
use image::RgbaImage;
use std::path::PathBuf;

/// Resource basename of a variant's launcher icon:
/// `ic_launcher` for the primary, `ic_launcher_{name}` otherwise.
pub fn launcher_basename(variant: &Variant) -> String {
    if variant.is_primary() {
        constants::ANDROID_LAUNCHER_BASENAME.to_string()
    } else {
        format!("{}_{}", constants::ANDROID_LAUNCHER_BASENAME, variant.name)
    }
}

/// Adaptive-icon descriptor referencing `@color/{variant}_color` as the
/// background layer and the shared foreground mipmap.
pub fn adaptive_icon_xml(variant: &Variant) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<adaptive-icon xmlns:android="http://schemas.android.com/apk/res/android">
    <background android:drawable="@color/{name}{suffix}"/>
    <foreground android:drawable="@mipmap/{foreground}"/>
</adaptive-icon>"#,
        name = variant.name,
        suffix = constants::ANDROID_COLOR_RESOURCE_SUFFIX,
        foreground = constants::ANDROID_FOREGROUND_BASENAME,
    )
}

/// Write every Android asset for `variants` under `config.android_res_dir`.
///
/// Returns the written paths in write order. Directories are created as
/// needed and existing files are overwritten.
pub fn emit(
    source: &RgbaImage,
    variants: &[Variant],
    config: &GeneratorConfig,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for density in &config.android_densities {
        let out_dir = config.android_res_dir.join(&density.folder);
        fs::ensure_dir(&out_dir)?;

        for variant in variants {
            let icon = compose_icon(
                source,
                &ComposeSpec {
                    size: density.legacy_size,
                    background: Background::Solid(variant.color),
                    padding_ratio: config.padding_ratio,
                    strip_alpha: false,
                },
            )?;

            let base = launcher_basename(variant);
            // The round slot gets the same square artwork; the launcher masks it.
            for name in [
                format!("{base}.png"),
                format!("{base}{}.png", constants::ANDROID_ROUND_SUFFIX),
            ] {
                let path = out_dir.join(name);
                fs::save_png(&icon, &path)?;
                written.push(path);
            }
        }

        let foreground = compose_icon(
            source,
            &ComposeSpec {
                size: density.foreground_size(),
                background: Background::Transparent,
                padding_ratio: config.foreground_padding_ratio,
                strip_alpha: false,
            },
        )?;
        let path = out_dir.join(format!("{}.png", constants::ANDROID_FOREGROUND_BASENAME));
        fs::save_png(&foreground, &path)?;
        written.push(path);

        tracing::debug!(
            folder = %density.folder,
            legacy = density.legacy_size,
            foreground = density.foreground_size(),
            "Density complete"
        );
    }

    let anydpi_dir = config.android_res_dir.join(constants::ANDROID_ANYDPI_DIR);
    fs::ensure_dir(&anydpi_dir)?;

    for variant in variants {
        let xml = adaptive_icon_xml(variant);
        let base = launcher_basename(variant);
        for name in [
            format!("{base}.xml"),
            format!("{base}{}.xml", constants::ANDROID_ROUND_SUFFIX),
        ] {
            let path = anydpi_dir.join(name);
            fs::write_text(&path, &xml)?;
            written.push(path);
        }
    }

    tracing::info!(
        files = written.len(),
        variants = variants.len(),
        "Android icons written"
    );
    Ok(written)
}
