// iconforge - tests/e2e_generate.rs
//
// End-to-end tests for the generation pipeline.
//
// These tests write a real source PNG into a temporary project root, run
// the full driver, and decode the PNGs it wrote back from disk.

use iconforge::app::generate::{self, GenerationReport, Progress};
use iconforge::core::color::BrandColor;
use iconforge::platform::config::{load_config, GeneratorConfig};
use iconforge::util::error::{IconForgeError, SourceError};
use image::{ColorType, Rgba, RgbaImage};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// =============================================================================
// Helpers
// =============================================================================

const PRIMARY: BrandColor = BrandColor::new(0x2E, 0x88, 0xF6);

/// 512x512 transparent canvas with an opaque white circle of radius 200.
fn circle_logo() -> RgbaImage {
    RgbaImage::from_fn(512, 512, |x, y| {
        let dx = x as f64 + 0.5 - 256.0;
        let dy = y as f64 + 0.5 - 256.0;
        if dx * dx + dy * dy <= 200.0 * 200.0 {
            Rgba([255, 255, 255, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
}

fn project_with_logo() -> TempDir {
    let root = TempDir::new().expect("tempdir");
    circle_logo()
        .save(root.path().join("Logo_Source.png"))
        .expect("write source logo");
    root
}

fn run_quiet(config: &GeneratorConfig) -> GenerationReport {
    generate::run(config, |_| {}).expect("generation should succeed")
}

fn count_files(dir: &Path) -> usize {
    let mut count = 0;
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            count += count_files(&path);
        } else {
            count += 1;
        }
    }
    count
}

// =============================================================================
// Output contract
// =============================================================================

/// Every size specification produces exactly one file, plus two XML files.
#[test]
fn e2e_default_run_writes_expected_tree() {
    let root = project_with_logo();
    let config = GeneratorConfig::for_root(root.path());
    let report = run_quiet(&config);

    // 5 densities x (legacy + round + foreground) + 2 XML descriptors
    assert_eq!(report.android.len(), 17);
    assert_eq!(report.ios.len(), 15);
    for file in report.files() {
        assert!(file.is_file(), "{} was reported but not written", file.display());
    }

    let res = root.path().join("android/app/src/main/res");
    for folder in ["mdpi", "hdpi", "xhdpi", "xxhdpi", "xxxhdpi"] {
        let dir = res.join(format!("mipmap-{folder}"));
        for name in ["ic_launcher.png", "ic_launcher_round.png", "ic_launcher_foreground.png"] {
            assert!(dir.join(name).is_file(), "missing {folder}/{name}");
        }
    }
    assert!(res.join("mipmap-anydpi-v26/ic_launcher.xml").is_file());
    assert!(res.join("mipmap-anydpi-v26/ic_launcher_round.xml").is_file());

    // No alternates configured: the alternate-icon directory is untouched.
    assert!(!root.path().join("ios/Runner/Icons").exists());
}

/// Progress is reported in Android, iOS, Finished order.
#[test]
fn e2e_progress_order() {
    let root = project_with_logo();
    let config = GeneratorConfig::for_root(root.path());
    let mut events = Vec::new();
    generate::run(&config, |p| events.push(p)).unwrap();

    assert_eq!(
        events,
        vec![
            Progress::AndroidStarted,
            Progress::IosStarted,
            Progress::Finished { files: 32 },
        ]
    );
}

// =============================================================================
// Scenarios
// =============================================================================

/// mdpi legacy icon is 48x48 and its corners are the primary colour.
#[test]
fn e2e_mdpi_icon_corners_are_primary() {
    let root = project_with_logo();
    run_quiet(&GeneratorConfig::for_root(root.path()));

    let icon = image::open(
        root.path()
            .join("android/app/src/main/res/mipmap-mdpi/ic_launcher.png"),
    )
    .unwrap();
    assert_eq!((icon.width(), icon.height()), (48, 48));
    assert_eq!(icon.color(), ColorType::Rgba8, "legacy icons keep alpha");

    let rgba = icon.to_rgba8();
    for (x, y) in [(0, 0), (47, 0), (0, 47), (47, 47)] {
        assert_eq!(*rgba.get_pixel(x, y), PRIMARY.to_rgba(), "corner ({x},{y})");
    }
}

/// The App Store slot is 1024x1024 and fully opaque.
#[test]
fn e2e_ios_store_icon_is_opaque() {
    let root = project_with_logo();
    run_quiet(&GeneratorConfig::for_root(root.path()));

    let icon = image::open(
        root.path()
            .join("ios/Runner/Assets.xcassets/AppIcon.appiconset/Icon-App-1024x1024@1x.png"),
    )
    .unwrap();
    assert_eq!((icon.width(), icon.height()), (1024, 1024));
    assert!(!icon.color().has_alpha());
    assert!(icon.to_rgba8().pixels().all(|p| p[3] == 255));
}

/// The mdpi adaptive foreground is 108px and clear outside the logo.
#[test]
fn e2e_mdpi_foreground_is_transparent_outside_logo() {
    let root = project_with_logo();
    run_quiet(&GeneratorConfig::for_root(root.path()));

    let fg = image::open(
        root.path()
            .join("android/app/src/main/res/mipmap-mdpi/ic_launcher_foreground.png"),
    )
    .unwrap()
    .to_rgba8();
    assert_eq!((fg.width(), fg.height()), (108, 108));

    // 54px logo centred at (54, 54); the circle's radius is about 21px.
    for (x, y, pixel) in fg.enumerate_pixels() {
        let dx = x as f64 + 0.5 - 54.0;
        let dy = y as f64 + 0.5 - 54.0;
        if (dx * dx + dy * dy).sqrt() > 26.0 {
            assert_eq!(pixel[3], 0, "pixel ({x},{y}) should be transparent");
        }
    }
    assert!(fg.get_pixel(54, 54)[3] >= 250);
}

// =============================================================================
// Idempotence
// =============================================================================

#[test]
fn e2e_second_run_is_byte_identical() {
    let root = project_with_logo();
    let config = GeneratorConfig::for_root(root.path());

    let first = run_quiet(&config);
    let snapshot: Vec<Vec<u8>> = first.files().map(|p| fs::read(p).unwrap()).collect();

    let second = run_quiet(&config);
    assert_eq!(first.files().collect::<Vec<_>>(), second.files().collect::<Vec<_>>());
    for (path, before) in second.files().zip(snapshot) {
        assert_eq!(fs::read(path).unwrap(), before, "{} changed", path.display());
    }
}

// =============================================================================
// Failure paths
// =============================================================================

#[test]
fn e2e_missing_source_writes_nothing() {
    let root = TempDir::new().unwrap();
    let result = generate::run(&GeneratorConfig::for_root(root.path()), |_| {});

    assert!(
        matches!(result, Err(IconForgeError::Source(SourceError::Missing { .. }))),
        "expected MissingSource, got {result:?}"
    );
    assert_eq!(count_files(root.path()), 0);
}

#[test]
fn e2e_undecodable_source_writes_nothing() {
    let root = TempDir::new().unwrap();
    fs::write(root.path().join("Logo_Source.png"), b"\x89PNG but not really").unwrap();

    let result = generate::run(&GeneratorConfig::for_root(root.path()), |_| {});
    assert!(
        matches!(result, Err(IconForgeError::Source(SourceError::Decode { .. }))),
        "expected DecodeFailure, got {result:?}"
    );
    assert_eq!(count_files(root.path()), 1, "only the bad source may exist");
}

// =============================================================================
// Alternate variants
// =============================================================================

#[test]
fn e2e_alternates_from_config_file() {
    let root = project_with_logo();
    fs::write(
        root.path().join("iconforge.toml"),
        "[variants]\nalternates = [\"danger\", \"warning\", \"success\"]\n",
    )
    .unwrap();

    let (config, warnings) = load_config(root.path(), None);
    assert!(warnings.is_empty(), "{warnings:?}");
    let report = run_quiet(&config);

    // 5 densities x (4 variants x 2 + foreground) + 4 variants x 2 XML
    assert_eq!(report.android.len(), 53);
    // 15 appiconset slots + 3 alternates x 3 images
    assert_eq!(report.ios.len(), 24);

    let anydpi = root.path().join("android/app/src/main/res/mipmap-anydpi-v26");
    let xml = fs::read_to_string(anydpi.join("ic_launcher_success_round.xml")).unwrap();
    assert!(xml.contains("@color/success_color"));

    let danger = image::open(root.path().join("ios/Runner/Icons/danger_1024.png")).unwrap();
    assert_eq!((danger.width(), danger.height()), (1024, 1024));
    assert_eq!(danger.to_rgb8().get_pixel(0, 0).0, [0xFF, 0x59, 0x59]);

    let legacy = image::open(
        root.path()
            .join("android/app/src/main/res/mipmap-hdpi/ic_launcher_warning.png"),
    )
    .unwrap();
    assert_eq!((legacy.width(), legacy.height()), (72, 72));
    assert_eq!(*legacy.to_rgba8().get_pixel(0, 0), Rgba([0xFF, 0x9F, 0x43, 255]));
}
