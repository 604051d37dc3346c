// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ids::ElementId;
use super::tags::{self, Tags};

pub const DEFAULT_ENVIRONMENT: &str = "Default";

/// The kind of an architecture element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementKind {
    Person,
    SoftwareSystem,
    Container,
    Component,
    DeploymentNode,
    InfrastructureNode,
    ContainerInstance,
}

impl ElementKind {
    /// The structural tag every element of this kind carries.
    pub fn default_tag(self) -> &'static str {
        match self {
            Self::Person => tags::TAG_PERSON,
            Self::SoftwareSystem => tags::TAG_SOFTWARE_SYSTEM,
            Self::Container => tags::TAG_CONTAINER,
            Self::Component => tags::TAG_COMPONENT,
            Self::DeploymentNode => tags::TAG_DEPLOYMENT_NODE,
            Self::InfrastructureNode => tags::TAG_INFRASTRUCTURE_NODE,
            Self::ContainerInstance => tags::TAG_CONTAINER_INSTANCE,
        }
    }

    pub fn is_deployment(self) -> bool {
        matches!(
            self,
            Self::DeploymentNode | Self::InfrastructureNode | Self::ContainerInstance
        )
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_tag())
    }
}

/// Whether an element is part of the enterprise being modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Location {
    #[default]
    Undefined,
    Internal,
    External,
}

impl Location {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Undefined => "Undefined",
            Self::Internal => "Internal",
            Self::External => "External",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Location {
    type Err = std::convert::Infallible;

    /// Unknown strings decode to [`Location::Undefined`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Internal" => Self::Internal,
            "External" => Self::External,
            _ => Self::Undefined,
        })
    }
}

impl Serialize for Location {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(raw.parse().unwrap_or_default())
    }
}

/// Kind-specific element data. The variant *is* the element kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementData {
    Person {
        location: Location,
    },
    SoftwareSystem {
        location: Location,
    },
    Container,
    Component,
    DeploymentNode {
        environment: String,
        instances: u32,
    },
    InfrastructureNode {
        environment: String,
    },
    ContainerInstance {
        container_id: ElementId,
        instance_id: u32,
        environment: String,
    },
}

impl ElementData {
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Person { .. } => ElementKind::Person,
            Self::SoftwareSystem { .. } => ElementKind::SoftwareSystem,
            Self::Container => ElementKind::Container,
            Self::Component => ElementKind::Component,
            Self::DeploymentNode { .. } => ElementKind::DeploymentNode,
            Self::InfrastructureNode { .. } => ElementKind::InfrastructureNode,
            Self::ContainerInstance { .. } => ElementKind::ContainerInstance,
        }
    }
}

/// A node of the architecture graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    id: ElementId,
    name: String,
    description: Option<String>,
    technology: Option<String>,
    tags: Tags,
    url: Option<String>,
    properties: BTreeMap<String, String>,
    parent_id: Option<ElementId>,
    children: Vec<ElementId>,
    data: ElementData,
}

impl Element {
    /// Creates an element carrying the structural `Element` and kind tags.
    pub fn new(id: ElementId, name: impl Into<String>, data: ElementData) -> Self {
        let mut tags = Tags::new();
        tags.merge(tags::TAG_ELEMENT);
        tags.merge(data.kind().default_tag());
        Self {
            id,
            name: name.into(),
            description: None,
            technology: None,
            tags,
            url: None,
            properties: BTreeMap::new(),
            parent_id: None,
            children: Vec::new(),
            data,
        }
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn kind(&self) -> ElementKind {
        self.data.kind()
    }

    pub fn data(&self) -> &ElementData {
        &self.data
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description<T: Into<String>>(&mut self, description: Option<T>) {
        self.description = description.map(Into::into);
    }

    pub fn technology(&self) -> Option<&str> {
        self.technology.as_deref()
    }

    pub fn set_technology<T: Into<String>>(&mut self, technology: Option<T>) {
        self.technology = technology.map(Into::into);
    }

    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    pub fn tags_mut(&mut self) -> &mut Tags {
        &mut self.tags
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn set_url<T: Into<String>>(&mut self, url: Option<T>) {
        self.url = url.map(Into::into);
    }

    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut BTreeMap<String, String> {
        &mut self.properties
    }

    pub fn parent_id(&self) -> Option<&ElementId> {
        self.parent_id.as_ref()
    }

    pub(crate) fn set_parent_id(&mut self, parent_id: Option<ElementId>) {
        self.parent_id = parent_id;
    }

    /// Structural children in declaration order.
    pub fn children(&self) -> &[ElementId] {
        &self.children
    }

    pub(crate) fn push_child(&mut self, child_id: ElementId) {
        self.children.push(child_id);
    }

    pub fn location(&self) -> Location {
        match &self.data {
            ElementData::Person { location } | ElementData::SoftwareSystem { location } => {
                *location
            }
            _ => Location::Undefined,
        }
    }

    pub fn environment(&self) -> Option<&str> {
        match &self.data {
            ElementData::DeploymentNode { environment, .. }
            | ElementData::InfrastructureNode { environment }
            | ElementData::ContainerInstance { environment, .. } => Some(environment),
            _ => None,
        }
    }

    /// The container a container instance instantiates.
    pub fn instantiated_container_id(&self) -> Option<&ElementId> {
        match &self.data {
            ElementData::ContainerInstance { container_id, .. } => Some(container_id),
            _ => None,
        }
    }
}
