// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Portable workspace document.
//!
//! A JSON shape for exchanging a finalized workspace with rendering tools:
//! elements nested by containment, relationships listed under their source,
//! views grouped by kind. Locations and interaction styles use their
//! `"Internal"`/`"External"`/`"Undefined"` and
//! `"Synchronous"`/`"Asynchronous"`/`"Undefined"` encodings; unknown strings
//! decode to `"Undefined"`.

mod export;

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{InteractionStyle, Location};
use crate::style::Styles;
use crate::view::Vertex;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceDocument {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub model: ModelDocument,
    #[serde(default)]
    pub views: ViewsDocument,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModelDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enterprise: Option<EnterpriseDocument>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub people: Vec<PersonDocument>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub software_systems: Vec<SoftwareSystemDocument>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deployment_nodes: Vec<DeploymentNodeDocument>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EnterpriseDocument {
    pub name: String,
}

/// Attributes every element shares.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ElementFields {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technology: Option<String>,
    /// Comma-separated, structural tags first.
    #[serde(default)]
    pub tags: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relationships: Vec<RelationshipDocument>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonDocument {
    #[serde(flatten)]
    pub element: ElementFields,
    #[serde(default)]
    #[schemars(with = "String")]
    pub location: Location,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SoftwareSystemDocument {
    #[serde(flatten)]
    pub element: ElementFields,
    #[serde(default)]
    #[schemars(with = "String")]
    pub location: Location,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub containers: Vec<ContainerDocument>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContainerDocument {
    #[serde(flatten)]
    pub element: ElementFields,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<ComponentDocument>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDocument {
    #[serde(flatten)]
    pub element: ElementFields,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentNodeDocument {
    #[serde(flatten)]
    pub element: ElementFields,
    pub environment: String,
    pub instances: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DeploymentNodeDocument>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub infrastructure_nodes: Vec<InfrastructureNodeDocument>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub container_instances: Vec<ContainerInstanceDocument>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InfrastructureNodeDocument {
    #[serde(flatten)]
    pub element: ElementFields,
    pub environment: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContainerInstanceDocument {
    #[serde(flatten)]
    pub element: ElementFields,
    pub container_id: String,
    pub instance_id: u32,
    pub environment: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipDocument {
    pub id: String,
    pub source_id: String,
    pub destination_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technology: Option<String>,
    #[serde(default)]
    #[schemars(with = "String")]
    pub interaction_style: InteractionStyle,
    #[serde(default)]
    pub tags: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_relationship_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ViewsDocument {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub system_landscape_views: Vec<ViewDocument>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub system_context_views: Vec<ViewDocument>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub container_views: Vec<ViewDocument>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub component_views: Vec<ViewDocument>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dynamic_views: Vec<ViewDocument>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deployment_views: Vec<ViewDocument>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filtered_views: Vec<FilteredViewDocument>,
    #[serde(default)]
    pub configuration: ConfigurationDocument,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ConfigurationDocument {
    #[serde(default)]
    pub styles: Styles,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ViewDocument {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub software_system_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper_size: Option<String>,
    #[serde(default)]
    pub elements: Vec<ElementViewDocument>,
    #[serde(default)]
    pub relationships: Vec<RelationshipViewDocument>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub animations: Vec<AnimationStepDocument>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ElementViewDocument {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RelationshipViewDocument {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vertices: Vec<Vertex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AnimationStepDocument {
    pub order: usize,
    #[serde(default)]
    pub elements: Vec<String>,
    #[serde(default)]
    pub relationships: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilteredViewDocument {
    pub key: String,
    pub base_view_key: String,
    pub mode: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl WorkspaceDocument {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// JSON schema of [`WorkspaceDocument`].
pub fn workspace_schema() -> serde_json::Value {
    serde_json::to_value(schemars::schema_for!(WorkspaceDocument)).unwrap_or_default()
}

#[cfg(test)]
mod tests;
