// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use smallvec::SmallVec;
use smol_str::SmolStr;

pub const TAG_ELEMENT: &str = "Element";
pub const TAG_PERSON: &str = "Person";
pub const TAG_SOFTWARE_SYSTEM: &str = "Software System";
pub const TAG_CONTAINER: &str = "Container";
pub const TAG_COMPONENT: &str = "Component";
pub const TAG_DEPLOYMENT_NODE: &str = "Deployment Node";
pub const TAG_INFRASTRUCTURE_NODE: &str = "Infrastructure Node";
pub const TAG_CONTAINER_INSTANCE: &str = "Container Instance";
pub const TAG_RELATIONSHIP: &str = "Relationship";

/// Ordered, duplicate-free tag set.
///
/// Insertion order is kept because style resolution and the workspace document
/// both depend on it. Most entities carry two or three tags, hence the inline
/// capacity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tags {
    tags: SmallVec<[SmolStr; 4]>,
}

impl Tags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `tag` unless already present. Returns whether it was added.
    pub fn merge(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.contains(tag) {
            return false;
        }
        self.tags.push(SmolStr::new(tag));
        true
    }

    pub fn merge_all<'a>(&mut self, tags: impl IntoIterator<Item = &'a str>) {
        for tag in tags {
            self.merge(tag);
        }
    }

    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|existing| existing.as_str() != tag);
        self.tags.len() != before
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|existing| existing.as_str() == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(SmolStr::as_str)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Parses the comma separated form used by the workspace document.
    pub fn from_joined(joined: &str) -> Self {
        let mut tags = Self::new();
        tags.merge_all(joined.split(','));
        tags
    }

    pub fn joined(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Tags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, tag) in self.tags.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            f.write_str(tag)?;
        }
        Ok(())
    }
}

impl<'a> FromIterator<&'a str> for Tags {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut tags = Self::new();
        tags.merge_all(iter);
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::Tags;

    #[test]
    fn merge_is_idempotent_and_keeps_order() {
        let mut tags = Tags::new();
        assert!(tags.merge("Element"));
        assert!(tags.merge("Database"));
        assert!(!tags.merge("Element"));
        assert!(!tags.merge("  "));

        assert_eq!(tags.iter().collect::<Vec<_>>(), vec!["Element", "Database"]);
    }

    #[test]
    fn joined_form_trims_and_dedups() {
        let tags = Tags::from_joined("Element, Person,Element,,External");
        assert_eq!(tags.joined(), "Element,Person,External");
    }
}
