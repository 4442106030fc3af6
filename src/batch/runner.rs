//! Sequential batch execution
//!
//! Walks a manifest one entry at a time. A failing entry is logged and
//! counted; the rest of the batch still runs.

use log::{error, info, warn};

use crate::api::{BandSlicer, SliceRequest};
use crate::utils::progress::ProgressTracker;
use crate::utils::selection_utils::{parse_page_band, BandSelection};
use crate::utils::write_utils::SaveOutcome;

use super::manifest::BatchManifest;

/// Counts of what a batch run did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub written: usize,
    pub skipped: usize,
    /// Entries that were not `page:band`
    pub invalid: usize,
    /// Entries whose screenshot could not be sliced
    pub failed: usize,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.invalid == 0 && self.failed == 0
    }
}

/// Run every entry of the manifest through `slicer`
pub fn run_batch(slicer: &BandSlicer<'_>, manifest: &BatchManifest, progress: &ProgressTracker) -> BatchReport {
    let mut report = BatchReport::default();

    for movie in &manifest.movies {
        progress.set_message(&movie.movie);

        // Review numbers count valid entries only
        let mut review = 0u32;
        for entry in &movie.entries {
            progress.increment(1);

            let page_band = match parse_page_band(entry) {
                Ok(pb) => pb,
                Err(e) => {
                    warn!("Invalid entry '{}' for {}: {}", entry, movie.movie, e);
                    report.invalid += 1;
                    continue;
                }
            };

            review += 1;
            let input = manifest.page_path(&movie.movie, page_band.page);
            let request = SliceRequest {
                selection: BandSelection::Indices(vec![page_band.band]),
                output_dir: manifest.output_dir.clone(),
                template: manifest.template.clone(),
                movie: Some(movie.movie.clone()),
                page: Some(page_band.page),
                review: Some(review),
                policy: manifest.policy,
            };

            match slicer.slice(&input, &request) {
                Ok(saved) => {
                    for band in saved {
                        match band.outcome {
                            SaveOutcome::Written => report.written += 1,
                            SaveOutcome::Skipped => report.skipped += 1,
                        }
                    }
                    info!("Review {} for {} is done", review, movie.movie);
                }
                Err(e) => {
                    error!("Failed {} ({}): {}", movie.movie, input.display(), e);
                    report.failed += 1;
                }
            }
        }
    }

    progress.finish(&format!(
        "{} written, {} skipped, {} failed, {} invalid",
        report.written, report.skipped, report.failed, report.invalid
    ));
    report
}
