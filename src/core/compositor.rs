// iconforge - core/compositor.rs
//
// The icon compositor: scale a transparent logo to fit inside a padded
// square, centre it, and paste it onto a solid or transparent canvas.
// Pure function of its inputs; never touches the filesystem.

use crate::core::model::Background;
use crate::util::error::ComposeError;
use fast_image_resize as fr;
use image::imageops;
use image::{DynamicImage, Rgba, RgbaImage};

/// Parameters for one rendered icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComposeSpec {
    /// Edge of the square output in pixels.
    pub size: u32,
    pub background: Background,
    /// Fraction of the edge left empty on each side of the logo.
    pub padding_ratio: f64,
    /// Flatten to 3-channel RGB. Some platform slots reject alpha.
    pub strip_alpha: bool,
}

/// Edge of the square the logo is fitted into: `size * (1 - 2 * ratio)`,
/// truncated.
pub fn logo_area(size: u32, padding_ratio: f64) -> u32 {
    (f64::from(size) * (1.0 - 2.0 * padding_ratio)) as u32
}

/// Scale `(width, height)` so the larger side equals `area`, keeping the
/// aspect ratio. The derived side is truncated.
pub fn fit_within(width: u32, height: u32, area: u32) -> (u32, u32) {
    let aspect = f64::from(width) / f64::from(height);
    if aspect > 1.0 {
        (area, (f64::from(area) / aspect) as u32)
    } else {
        ((f64::from(area) * aspect) as u32, area)
    }
}

/// Leading offset that centres `extent` on `canvas`. Odd remainders put the
/// extra pixel on the trailing side.
pub fn center_offset(canvas: u32, extent: u32) -> u32 {
    canvas.saturating_sub(extent) / 2
}

/// Lanczos3 resample of an RGBA logo.
///
/// Colour channels are multiplied by alpha before filtering and divided
/// back afterwards, so the RGB stored under fully transparent pixels never
/// bleeds into the edge of the scaled logo.
pub fn resample_logo(
    source: &RgbaImage,
    width: u32,
    height: u32,
) -> Result<RgbaImage, ComposeError> {
    let resample_error = |reason: String| ComposeError::Resample {
        width,
        height,
        reason,
    };

    let src = fr::images::Image::from_vec_u8(
        source.width(),
        source.height(),
        source.as_raw().clone(),
        fr::PixelType::U8x4,
    )
    .map_err(|e| resample_error(e.to_string()))?;
    let mut dst = fr::images::Image::new(width, height, fr::PixelType::U8x4);

    // Default options premultiply U8x4 before convolution.
    let options = fr::ResizeOptions::new()
        .resize_alg(fr::ResizeAlg::Convolution(fr::FilterType::Lanczos3));
    fr::Resizer::new()
        .resize(&src, &mut dst, Some(&options))
        .map_err(|e| resample_error(e.to_string()))?;

    RgbaImage::from_raw(width, height, dst.into_vec())
        .ok_or_else(|| resample_error("output buffer size mismatch".to_string()))
}

/// Render `source` as a `spec.size` square icon.
///
/// The logo is resampled with [`resample_logo`] and pasted using its own
/// alpha, so transparent logo pixels leave the background untouched.
pub fn compose_icon(
    source: &RgbaImage,
    spec: &ComposeSpec,
) -> Result<DynamicImage, ComposeError> {
    let ratio = spec.padding_ratio;
    if !ratio.is_finite() || !(0.0..0.5).contains(&ratio) {
        return Err(ComposeError::InvalidPadding { ratio });
    }

    let area = logo_area(spec.size, ratio);
    let (width, height) = fit_within(source.width(), source.height(), area);
    if width == 0 || height == 0 {
        return Err(ComposeError::DegenerateSize {
            size: spec.size,
            padding_ratio: ratio,
            scaled_width: width,
            scaled_height: height,
        });
    }

    let fill = match spec.background {
        Background::Solid(color) => color.to_rgba(),
        Background::Transparent => Rgba([0, 0, 0, 0]),
    };
    let mut canvas = RgbaImage::from_pixel(spec.size, spec.size, fill);

    let logo = resample_logo(source, width, height)?;
    let x = center_offset(spec.size, width);
    let y = center_offset(spec.size, height);
    imageops::overlay(&mut canvas, &logo, i64::from(x), i64::from(y));

    tracing::trace!(
        size = spec.size,
        logo_width = width,
        logo_height = height,
        x,
        y,
        strip_alpha = spec.strip_alpha,
        "Composed icon"
    );

    let icon = DynamicImage::ImageRgba8(canvas);
    if spec.strip_alpha {
        Ok(DynamicImage::ImageRgb8(icon.to_rgb8()))
    } else {
        Ok(icon)
    }
}
