// iconforge - core/targets.rs
//
// Hand-authored size tables for every platform slot. Returned as owned data
// so the emitters take them as inputs instead of reading globals.

use crate::core::model::{AlternateSlot, AndroidDensity, IosSlot};

/// Android launcher densities with their legacy icon edge in pixels.
pub fn android_densities() -> Vec<AndroidDensity> {
    [
        ("mipmap-mdpi", 48),
        ("mipmap-hdpi", 72),
        ("mipmap-xhdpi", 96),
        ("mipmap-xxhdpi", 144),
        ("mipmap-xxxhdpi", 192),
    ]
    .into_iter()
    .map(|(folder, size)| AndroidDensity::new(folder, size))
    .collect()
}

/// The primary AppIcon.appiconset: notification (20pt), settings (29pt),
/// spotlight (40pt), iPhone app (60pt), iPad app (76pt), iPad Pro (83.5pt)
/// and the App Store marketing slot.
pub fn ios_slots() -> Vec<IosSlot> {
    const TABLE: &[(f32, u32)] = &[
        (20.0, 1),
        (20.0, 2),
        (20.0, 3),
        (29.0, 1),
        (29.0, 2),
        (29.0, 3),
        (40.0, 1),
        (40.0, 2),
        (40.0, 3),
        (60.0, 2),
        (60.0, 3),
        (76.0, 1),
        (76.0, 2),
        (83.5, 2),
        (1024.0, 1),
    ];

    TABLE
        .iter()
        .map(|&(points, scale)| IosSlot::new(points, scale, ios_filename(points, scale)))
        .collect()
}

/// `Icon-App-{pt}x{pt}@{scale}x.png`, printing whole point sizes without a
/// fractional part.
fn ios_filename(points: f32, scale: u32) -> String {
    let pt = if points.fract() == 0.0 {
        format!("{}", points as u32)
    } else {
        format!("{points}")
    };
    format!("Icon-App-{pt}x{pt}@{scale}x.png")
}

/// Images written per iOS alternate icon variant.
pub fn ios_alternate_slots() -> Vec<AlternateSlot> {
    vec![
        AlternateSlot::new(120, "@2x"),
        AlternateSlot::new(180, "@3x"),
        AlternateSlot::new(1024, "_1024"),
    ]
}
