// iconforge - app/generate.rs
//
// Run driver: validate and load the source logo once, then run the Android
// emitter followed by the iOS emitter.
//
//   Start -> Validated -> Done
//   Start -> Failed          (missing or undecodable source; nothing written)
//
// Failures after validation propagate as-is. Files already written stay on
// disk; a re-run overwrites them.

use crate::app::{android, ios};
use crate::platform::config::GeneratorConfig;
use crate::util::error::{Result, SourceError};
use image::RgbaImage;
use std::path::{Path, PathBuf};

/// Driver lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Start,
    Validated,
    Done,
    Failed,
}

/// Progress notifications for the caller (the CLI prints them).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    AndroidStarted,
    IosStarted,
    Finished { files: usize },
}

/// Files written by one run, per platform, in write order.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub android: Vec<PathBuf>,
    pub ios: Vec<PathBuf>,
}

impl GenerationReport {
    pub fn total(&self) -> usize {
        self.android.len() + self.ios.len()
    }

    pub fn files(&self) -> impl Iterator<Item = &PathBuf> {
        self.android.iter().chain(self.ios.iter())
    }
}

/// Check the source exists and decode it to RGBA.
pub fn load_source(path: &Path) -> std::result::Result<RgbaImage, SourceError> {
    if !path.exists() {
        return Err(SourceError::Missing {
            path: path.to_path_buf(),
        });
    }

    let image = image::open(path).map_err(|e| SourceError::Decode {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "Source logo loaded"
    );
    Ok(image.into_rgba8())
}

fn transition(state: &mut RunState, next: RunState) {
    tracing::debug!(from = ?state, to = ?next, "Run state");
    *state = next;
}

/// Generate every configured asset.
///
/// `on_progress` is invoked as each phase starts and once on completion.
pub fn run<F>(config: &GeneratorConfig, mut on_progress: F) -> Result<GenerationReport>
where
    F: FnMut(Progress),
{
    let mut state = RunState::Start;

    let source = match load_source(&config.source_path) {
        Ok(source) => source,
        Err(e) => {
            transition(&mut state, RunState::Failed);
            return Err(e.into());
        }
    };
    transition(&mut state, RunState::Validated);

    let variants = config.variants();
    let names: Vec<&str> = variants.iter().map(|v| v.name.as_str()).collect();
    tracing::info!(variants = ?names, "Generating icons");

    on_progress(Progress::AndroidStarted);
    let android = android::emit(&source, &variants, config)?;

    on_progress(Progress::IosStarted);
    let ios = ios::emit(&source, &variants, config)?;

    let report = GenerationReport { android, ios };
    transition(&mut state, RunState::Done);
    on_progress(Progress::Finished {
        files: report.total(),
    });

    Ok(report)
}
