//! Data models for quest bundling.
//!
//! This module contains the selection criteria a run is driven by and the
//! envelope document that is written to disk.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Which quest files a run should include.
///
/// The modes are not exclusive. When several are set, results are
/// concatenated in the order: names, directory, all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Quest names, each resolved to `<name>.json` anywhere under the root.
    pub quests: Vec<String>,
    /// Directory name whose direct-child JSON files are included.
    pub directory: Option<String>,
    /// Include every JSON file under the root.
    pub all: bool,
}

impl Selection {
    /// Returns true when no selection mode is set.
    pub fn is_empty(&self) -> bool {
        self.quests.is_empty() && self.directory.is_none() && !self.all
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if !self.quests.is_empty() {
            parts.push(format!("quests [{}]", self.quests.join(", ")));
        }
        if let Some(ref dir) = self.directory {
            parts.push(format!("directory {}", dir));
        }
        if self.all {
            parts.push("all".to_string());
        }
        if parts.is_empty() {
            write!(f, "nothing")
        } else {
            write!(f, "{}", parts.join(" + "))
        }
    }
}

/// The document consumed by Go Map!!.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestBundle {
    /// Reserved by the importer; always written empty.
    pub feature_quest_list: Vec<Value>,
    /// Parsed quest documents in selection order.
    pub filter_quest_list: Vec<Value>,
}

impl QuestBundle {
    /// Wrap parsed quests in the envelope.
    pub fn new(filter_quest_list: Vec<Value>) -> Self {
        Self {
            feature_quest_list: Vec::new(),
            filter_quest_list,
        }
    }

    /// Number of quests in the bundle.
    pub fn len(&self) -> usize {
        self.filter_quest_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filter_quest_list.is_empty()
    }
}
