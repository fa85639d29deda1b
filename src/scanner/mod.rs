//! Quest file discovery.
//!
//! All lookups share one depth-first, pre-order walk of the quests root.
//! Entries are visited in the order the filesystem lists them unless
//! `sort_entries` is set.

use crate::error::{BundleError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Extension that marks a quest file.
pub const QUEST_EXTENSION: &str = ".json";

/// Configuration for quest scanning.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Visit directory entries sorted by file name instead of listing order
    pub sort_entries: bool,
    /// Follow symbolic links while walking
    pub follow_links: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            sort_entries: false,
            follow_links: true,
        }
    }
}

impl From<&crate::config::QuestsConfig> for ScanConfig {
    fn from(config: &crate::config::QuestsConfig) -> Self {
        Self {
            sort_entries: config.sort_entries,
            follow_links: config.follow_links,
        }
    }
}

/// Walks a quests root looking for quest files and directories.
pub struct QuestScanner {
    config: ScanConfig,
    root: PathBuf,
}

impl QuestScanner {
    /// Create a new scanner rooted at `root`.
    pub fn new(root: PathBuf, config: ScanConfig) -> Self {
        Self { config, root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every file named `<name>.json` anywhere under the root.
    ///
    /// Same-named quests in different folders are all returned. Fails with
    /// `QuestNotFound` when there is no match.
    pub fn find_quest_files(&self, name: &str) -> Result<Vec<PathBuf>> {
        let file_name = format!("{}{}", name, QUEST_EXTENSION);
        let matches = self.collect_files(&self.root, None, |entry| {
            entry.file_name().to_str() == Some(file_name.as_str())
        })?;

        if matches.is_empty() {
            return Err(BundleError::QuestNotFound(name.to_string()));
        }

        debug!("Quest '{}' resolved to {} file(s)", name, matches.len());
        Ok(matches)
    }

    /// First directory named `dir_name` in traversal order.
    ///
    /// The root itself is never matched. Later directories with the same
    /// name are ignored.
    pub fn find_directory(&self, dir_name: &str) -> Result<Option<PathBuf>> {
        self.ensure_root()?;

        for entry in self.walker(&self.root, None) {
            let entry = entry?;
            if entry.file_type().is_dir() && entry.file_name().to_str() == Some(dir_name) {
                debug!("Directory '{}' resolved to {}", dir_name, entry.path().display());
                return Ok(Some(entry.into_path()));
            }
        }

        Ok(None)
    }

    /// Every JSON file under the root, at any depth.
    pub fn find_all_quest_files(&self) -> Result<Vec<PathBuf>> {
        self.collect_files(&self.root, None, is_quest_file)
    }

    /// JSON files directly inside `dir`, without descending.
    pub fn list_quest_files_in(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        self.collect_files(dir, Some(1), is_quest_file)
    }

    fn ensure_root(&self) -> Result<()> {
        if self.root.is_dir() {
            Ok(())
        } else {
            Err(BundleError::RootNotFound(self.root.clone()))
        }
    }

    fn walker(&self, start: &Path, max_depth: Option<usize>) -> walkdir::IntoIter {
        let mut walker = WalkDir::new(start)
            .min_depth(1)
            .follow_links(self.config.follow_links);

        if let Some(depth) = max_depth {
            walker = walker.max_depth(depth);
        }
        if self.config.sort_entries {
            walker = walker.sort_by_file_name();
        }

        walker.into_iter()
    }

    /// Walk `start` and keep the regular files accepted by `predicate`.
    fn collect_files<P>(
        &self,
        start: &Path,
        max_depth: Option<usize>,
        predicate: P,
    ) -> Result<Vec<PathBuf>>
    where
        P: Fn(&DirEntry) -> bool,
    {
        self.ensure_root()?;

        let mut files = Vec::new();
        for entry in self.walker(start, max_depth) {
            let entry = entry?;
            if entry.file_type().is_file() && predicate(&entry) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }
}

/// Check if an entry's name carries the quest extension.
fn is_quest_file(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.ends_with(QUEST_EXTENSION))
}
