// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Filtered views derive their content from a base view by tag.

use std::fmt;
use std::str::FromStr;

use crate::model::{ElementId, Model, RelationshipId, Tags};

use super::View;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterMode {
    /// Keep only what carries one of the tags.
    #[default]
    Include,
    /// Drop what carries one of the tags.
    Exclude,
}

impl FilterMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Include => "Include",
            Self::Exclude => "Exclude",
        }
    }

    fn keeps(self, tags: &Tags, filter: &[String]) -> bool {
        let matches = filter.iter().any(|tag| tags.contains(tag));
        match self {
            Self::Include => matches,
            Self::Exclude => !matches,
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = ParseFilterModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Include" => Ok(Self::Include),
            "Exclude" => Ok(Self::Exclude),
            _ => Err(ParseFilterModeError),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseFilterModeError;

impl fmt::Display for ParseFilterModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("filter mode must be Include or Exclude")
    }
}

impl std::error::Error for ParseFilterModeError {}

/// The derived membership of a filtered view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredContent {
    pub element_ids: Vec<ElementId>,
    pub relationship_ids: Vec<RelationshipId>,
}

/// Applies a tag filter to the membership of `base`.
///
/// Relationships survive only when both endpoints survive and the
/// relationship's own tags pass the filter.
pub fn filter_view(model: &Model, base: &View, mode: FilterMode, tags: &[String]) -> FilteredContent {
    let element_ids = base
        .element_ids()
        .filter(|id| {
            model
                .element(id)
                .is_some_and(|element| mode.keeps(element.tags(), tags))
        })
        .cloned()
        .collect::<Vec<_>>();

    let relationship_ids = base
        .relationship_ids()
        .filter_map(|id| model.relationship(id))
        .filter(|rel| {
            element_ids.contains(rel.source_id())
                && element_ids.contains(rel.destination_id())
                && mode.keeps(rel.tags(), tags)
        })
        .map(|rel| rel.id().clone())
        .collect();

    FilteredContent {
        element_ids,
        relationship_ids,
    }
}

#[cfg(test)]
mod tests {
    use super::{filter_view, FilterMode};
    use crate::model::fixtures::{bank_model, eid};
    use crate::model::ViewKey;
    use crate::view::{View, ViewScope};

    #[test]
    fn include_and_exclude_are_complementary_for_elements() {
        let model = bank_model();
        let mut base = View::new(
            ViewKey::new("c").expect("key"),
            ViewScope::Container {
                software_system_id: eid("bank"),
            },
        );
        base.add_elements(&model, &[eid("web"), eid("api"), eid("db")])
            .expect("add");

        let store = vec!["Store".to_owned()];
        let included = filter_view(&model, &base, FilterMode::Include, &store);
        let excluded = filter_view(&model, &base, FilterMode::Exclude, &store);

        assert_eq!(included.element_ids, vec![eid("db")]);
        assert!(included.relationship_ids.is_empty());
        assert_eq!(excluded.element_ids, vec![eid("web"), eid("api")]);
        assert_eq!(excluded.relationship_ids.len(), 1);
    }

    #[test]
    fn filter_mode_parses_its_display_form() {
        for mode in [FilterMode::Include, FilterMode::Exclude] {
            assert_eq!(mode.to_string().parse::<FilterMode>(), Ok(mode));
        }
        assert!("Other".parse::<FilterMode>().is_err());
    }
}
