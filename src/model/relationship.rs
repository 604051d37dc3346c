// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ids::{ElementId, RelationshipId};
use super::tags::Tags;

/// How the source interacts with the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionStyle {
    #[default]
    Undefined,
    Synchronous,
    Asynchronous,
}

impl InteractionStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Undefined => "Undefined",
            Self::Synchronous => "Synchronous",
            Self::Asynchronous => "Asynchronous",
        }
    }
}

impl fmt::Display for InteractionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InteractionStyle {
    type Err = std::convert::Infallible;

    /// Unknown strings decode to [`InteractionStyle::Undefined`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Synchronous" => Self::Synchronous,
            "Asynchronous" => Self::Asynchronous,
            _ => Self::Undefined,
        })
    }
}

impl Serialize for InteractionStyle {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for InteractionStyle {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or_default())
    }
}

/// Optional attributes shared by draft and resolved relationships.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelationshipAttrs {
    pub description: Option<String>,
    pub technology: Option<String>,
    pub interaction_style: InteractionStyle,
    pub tags: Tags,
    pub url: Option<String>,
    pub linked_relationship_id: Option<RelationshipId>,
}

impl RelationshipAttrs {
    pub fn described(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..Self::default()
        }
    }

    pub fn with_technology(mut self, technology: impl Into<String>) -> Self {
        self.technology = Some(technology.into());
        self
    }

    pub fn with_interaction_style(mut self, interaction_style: InteractionStyle) -> Self {
        self.interaction_style = interaction_style;
        self
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tags.merge(tag);
        self
    }
}

/// A directed edge of the finalized architecture graph.
///
/// Destinations are always concrete here; symbolic destinations only exist on
/// the builder side and are resolved by `finalize`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    id: RelationshipId,
    source_id: ElementId,
    destination_id: ElementId,
    attrs: RelationshipAttrs,
}

impl Relationship {
    pub fn new(
        id: RelationshipId,
        source_id: ElementId,
        destination_id: ElementId,
        attrs: RelationshipAttrs,
    ) -> Self {
        Self {
            id,
            source_id,
            destination_id,
            attrs,
        }
    }

    pub fn id(&self) -> &RelationshipId {
        &self.id
    }

    pub fn source_id(&self) -> &ElementId {
        &self.source_id
    }

    pub fn destination_id(&self) -> &ElementId {
        &self.destination_id
    }

    /// Whether `element_id` is either endpoint.
    pub fn touches(&self, element_id: &ElementId) -> bool {
        &self.source_id == element_id || &self.destination_id == element_id
    }

    /// The endpoint opposite to `element_id`, if `element_id` is an endpoint.
    pub fn other_end(&self, element_id: &ElementId) -> Option<&ElementId> {
        if &self.source_id == element_id {
            Some(&self.destination_id)
        } else if &self.destination_id == element_id {
            Some(&self.source_id)
        } else {
            None
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.attrs.description.as_deref()
    }

    pub fn technology(&self) -> Option<&str> {
        self.attrs.technology.as_deref()
    }

    pub fn interaction_style(&self) -> InteractionStyle {
        self.attrs.interaction_style
    }

    pub fn tags(&self) -> &Tags {
        &self.attrs.tags
    }

    pub fn url(&self) -> Option<&str> {
        self.attrs.url.as_deref()
    }

    pub fn linked_relationship_id(&self) -> Option<&RelationshipId> {
        self.attrs.linked_relationship_id.as_ref()
    }

    pub fn attrs(&self) -> &RelationshipAttrs {
        &self.attrs
    }
}
