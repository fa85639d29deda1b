//! Selection resolution and quest loading.
//!
//! Resolution runs in a fixed order (names, then directory, then all) and
//! the first failure aborts the whole run, so callers never see a partial
//! bundle.

use crate::error::{BundleError, Result};
use crate::models::{QuestBundle, Selection};
use crate::scanner::QuestScanner;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Builds quest bundles from a scanner and a selection.
pub struct QuestAggregator {
    scanner: QuestScanner,
    show_progress: bool,
}

impl QuestAggregator {
    pub fn new(scanner: QuestScanner, show_progress: bool) -> Self {
        Self {
            scanner,
            show_progress,
        }
    }

    /// Resolve a selection to the ordered list of quest files.
    pub fn resolve(&self, selection: &Selection) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::new();

        for quest in &selection.quests {
            paths.extend(self.scanner.find_quest_files(quest)?);
        }

        if let Some(ref dir_name) = selection.directory {
            let dir = self
                .scanner
                .find_directory(dir_name)?
                .ok_or_else(|| BundleError::DirectoryNotFound(dir_name.clone()))?;
            let files = self.scanner.list_quest_files_in(&dir)?;
            debug!("Directory {} holds {} quest file(s)", dir.display(), files.len());
            paths.extend(files);
        }

        if selection.all {
            let files = self.scanner.find_all_quest_files()?;
            debug!(
                "Found {} quest file(s) under {}",
                files.len(),
                self.scanner.root().display()
            );
            paths.extend(files);
        }

        info!("Resolved {} to {} quest file(s)", selection, paths.len());
        Ok(paths)
    }

    /// Resolve the selection and parse every quest into a bundle.
    pub fn build(&self, selection: &Selection) -> Result<QuestBundle> {
        let paths = self.resolve(selection)?;
        let progress = self.progress_bar(paths.len());

        let mut quests = Vec::with_capacity(paths.len());
        for path in &paths {
            quests.push(load_quest(path)?);
            progress.inc(1);
        }
        progress.finish_and_clear();

        Ok(QuestBundle::new(quests))
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} quests")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb
    }
}

/// Read and parse one quest file. The content is not checked against any schema.
pub fn load_quest(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|source| BundleError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| BundleError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
