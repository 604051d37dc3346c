// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};

/// How `add_elements` completes relationships between present elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeCompletion {
    /// After each inserted element, add relationships to elements already
    /// present. Insertion order matters: an edge between two candidates of
    /// the same call is only found once its second endpoint is inserted.
    #[default]
    Incremental,
    /// After the whole call, add every relationship whose endpoints are both
    /// present.
    Batch,
}

/// Engine settings shared by all views of a workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub edge_completion: EdgeCompletion,
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{EdgeCompletion, Settings};

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings = Settings::from_json("{}").expect("settings");
        assert_eq!(settings.edge_completion, EdgeCompletion::Incremental);
    }

    #[test]
    fn batch_completion_is_opt_in() {
        let settings = Settings::from_json(r#"{"edge_completion":"batch"}"#).expect("settings");
        assert_eq!(settings.edge_completion, EdgeCompletion::Batch);
        assert!(Settings::from_json(r#"{"edge_completion":"eager"}"#).is_err());
    }
}
