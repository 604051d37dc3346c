// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Model construction.
//!
//! Construction is an explicit sequence of calls against a [`ModelBuilder`].
//! Relationships may name destinations that are declared later; they are
//! resolved once, by [`ModelBuilder::finalize`], after construction is complete.

mod resolve;

use std::collections::BTreeMap;

use log::{debug, info};

use crate::error::{ModelError, ValidationErrors};
use crate::model::{
    Element, ElementData, ElementId, ElementKind, ElementPath, EntityRef, Location, Model,
    Registry, RelationshipAttrs, RelationshipId, DEFAULT_ENVIRONMENT,
};

pub use resolve::resolve_destination;

/// Declarative attributes of an element to be created.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementSpec {
    pub id: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub technology: Option<String>,
    pub tags: Vec<String>,
    pub url: Option<String>,
    pub properties: BTreeMap<String, String>,
    pub location: Location,
    pub environment: Option<String>,
    pub instances: Option<u32>,
}

impl ElementSpec {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn technology(mut self, technology: impl Into<String>) -> Self {
        self.technology = Some(technology.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    pub fn environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    pub fn instances(mut self, instances: u32) -> Self {
        self.instances = Some(instances);
        self
    }
}

/// Where a relationship points before finalize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Element(ElementId),
    Symbolic(ElementPath),
}

impl From<ElementId> for Destination {
    fn from(id: ElementId) -> Self {
        Self::Element(id)
    }
}

impl From<&ElementId> for Destination {
    fn from(id: &ElementId) -> Self {
        Self::Element(id.clone())
    }
}

impl From<ElementPath> for Destination {
    fn from(path: ElementPath) -> Self {
        Self::Symbolic(path)
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Element(id) => write!(f, "{id}"),
            Self::Symbolic(path) => write!(f, "{path}"),
        }
    }
}

/// A relationship as declared, before its destination is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipDraft {
    pub id: RelationshipId,
    pub source_id: ElementId,
    pub destination: Destination,
    pub attrs: RelationshipAttrs,
}

/// Scoped construction context for one model.
///
/// Owns the registry for the duration of the build; nothing is shared with
/// other builders.
#[derive(Debug, Default)]
pub struct ModelBuilder {
    enterprise: Option<String>,
    elements: Vec<Element>,
    drafts: Vec<RelationshipDraft>,
    registry: Registry,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_enterprise(&mut self, name: impl Into<String>) {
        self.enterprise = Some(name.into());
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.registry
            .element_index(id)
            .and_then(|index| self.elements.get(index))
    }

    /// Mutable access to a declared element, e.g. to add tags after creation.
    pub fn element_mut(&mut self, id: &ElementId) -> Option<&mut Element> {
        self.registry
            .element_index(id)
            .and_then(|index| self.elements.get_mut(index))
    }

    pub fn drafts(&self) -> &[RelationshipDraft] {
        &self.drafts
    }

    pub fn add_person(&mut self, spec: ElementSpec) -> Result<ElementId, ModelError> {
        let location = spec.location;
        self.insert_element(None, spec, ElementData::Person { location })
    }

    pub fn add_software_system(&mut self, spec: ElementSpec) -> Result<ElementId, ModelError> {
        let location = spec.location;
        self.insert_element(None, spec, ElementData::SoftwareSystem { location })
    }

    pub fn add_container(
        &mut self,
        system_id: &ElementId,
        spec: ElementSpec,
    ) -> Result<ElementId, ModelError> {
        self.expect_parent_kind(system_id, ElementKind::Container, &[ElementKind::SoftwareSystem])?;
        self.insert_element(Some(system_id), spec, ElementData::Container)
    }

    pub fn add_component(
        &mut self,
        container_id: &ElementId,
        spec: ElementSpec,
    ) -> Result<ElementId, ModelError> {
        self.expect_parent_kind(container_id, ElementKind::Component, &[ElementKind::Container])?;
        self.insert_element(Some(container_id), spec, ElementData::Component)
    }

    /// Adds a deployment node, top-level when `parent_id` is `None`.
    ///
    /// Child nodes inherit the parent's environment unless one is given explicitly.
    pub fn add_deployment_node(
        &mut self,
        parent_id: Option<&ElementId>,
        spec: ElementSpec,
    ) -> Result<ElementId, ModelError> {
        let inherited = match parent_id {
            Some(parent_id) => {
                self.expect_parent_kind(
                    parent_id,
                    ElementKind::DeploymentNode,
                    &[ElementKind::DeploymentNode],
                )?;
                self.element(parent_id)
                    .and_then(Element::environment)
                    .map(ToOwned::to_owned)
            }
            None => None,
        };
        let environment = spec
            .environment
            .clone()
            .or(inherited)
            .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_owned());
        let instances = spec.instances.unwrap_or(1);
        self.insert_element(
            parent_id,
            spec,
            ElementData::DeploymentNode {
                environment,
                instances,
            },
        )
    }

    pub fn add_infrastructure_node(
        &mut self,
        node_id: &ElementId,
        spec: ElementSpec,
    ) -> Result<ElementId, ModelError> {
        self.expect_parent_kind(
            node_id,
            ElementKind::InfrastructureNode,
            &[ElementKind::DeploymentNode],
        )?;
        let environment = self.environment_of(node_id);
        self.insert_element(
            Some(node_id),
            spec,
            ElementData::InfrastructureNode { environment },
        )
    }

    /// Deploys an instance of `container_id` into `node_id`.
    ///
    /// Instance ids count up per container and environment, starting at 1.
    pub fn add_container_instance(
        &mut self,
        node_id: &ElementId,
        container_id: &ElementId,
        tags: &[&str],
    ) -> Result<ElementId, ModelError> {
        self.expect_parent_kind(
            node_id,
            ElementKind::ContainerInstance,
            &[ElementKind::DeploymentNode],
        )?;
        let Some(container) = self.element(container_id) else {
            return Err(ModelError::UnknownElement {
                id: container_id.to_string(),
            });
        };
        if container.kind() != ElementKind::Container {
            return Err(ModelError::InvalidParent {
                parent_id: node_id.clone(),
                parent_kind: ElementKind::DeploymentNode,
                child_kind: container.kind(),
            });
        }
        let name = container.name().to_owned();
        let environment = self.environment_of(node_id);
        let instance_id = self
            .elements
            .iter()
            .filter(|element| {
                element.instantiated_container_id() == Some(container_id)
                    && element.environment() == Some(environment.as_str())
            })
            .count() as u32
            + 1;

        let mut spec = ElementSpec::named(name);
        spec.tags = tags.iter().map(|tag| (*tag).to_owned()).collect();
        self.insert_element(
            Some(node_id),
            spec,
            ElementData::ContainerInstance {
                container_id: container_id.clone(),
                instance_id,
                environment,
            },
        )
    }

    /// Declares a relationship; `destination` may name an element declared later.
    pub fn add_relationship(
        &mut self,
        source_id: &ElementId,
        destination: impl Into<Destination>,
        attrs: RelationshipAttrs,
    ) -> Result<RelationshipId, ModelError> {
        self.add_relationship_with_id(None, source_id, destination, attrs)
    }

    pub fn add_relationship_with_id(
        &mut self,
        id: Option<&str>,
        source_id: &ElementId,
        destination: impl Into<Destination>,
        attrs: RelationshipAttrs,
    ) -> Result<RelationshipId, ModelError> {
        if self.element(source_id).is_none() {
            return Err(ModelError::UnknownElement {
                id: source_id.to_string(),
            });
        }
        let raw_id = match id {
            Some(id) => id.to_owned(),
            None => self.registry.next_free_id(),
        };
        let relationship_id: RelationshipId = parse_id(&raw_id)?;
        self.registry
            .register(&raw_id, EntityRef::Relationship(self.drafts.len()))?;
        self.drafts.push(RelationshipDraft {
            id: relationship_id.clone(),
            source_id: source_id.clone(),
            destination: destination.into(),
            attrs,
        });
        Ok(relationship_id)
    }

    /// Shorthand for a described relationship to a symbolic destination.
    pub fn uses(
        &mut self,
        source_id: &ElementId,
        destination: &str,
        description: &str,
    ) -> Result<RelationshipId, ModelError> {
        let path = destination
            .parse::<ElementPath>()
            .map_err(|_| ModelError::UnknownElement {
                id: destination.to_owned(),
            })?;
        self.add_relationship(source_id, path, RelationshipAttrs::described(description))
    }

    /// Checks every relationship destination without consuming the builder.
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for draft in &self.drafts {
            if resolve_destination(&self.elements, &self.registry, draft).is_none() {
                errors.add(
                    format!("relationship {}", draft.id),
                    unresolved(draft),
                );
            }
        }
        errors
    }

    /// Resolves every relationship destination and hands the graph to a [`Model`].
    ///
    /// Fails with every unresolved destination at once; a partially resolved
    /// model is never returned.
    pub fn finalize(self) -> Result<Model, ValidationErrors> {
        let Self {
            enterprise,
            elements,
            drafts,
            mut registry,
        } = self;

        info!(
            elements = elements.len(),
            relationships = drafts.len();
            "finalizing model"
        );

        let mut relationships = resolve::resolve_all(&elements, &registry, drafts)?;
        let linked = resolve::link_container_instances(&elements, &mut registry, &mut relationships)
            .map_err(|error| {
                let mut errors = ValidationErrors::new();
                errors.add("model", error);
                errors
            })?;
        debug!(linked = linked; "container instance relationships linked");

        Ok(Model::from_parts(enterprise, elements, relationships, registry))
    }

    fn insert_element(
        &mut self,
        parent_id: Option<&ElementId>,
        spec: ElementSpec,
        data: ElementData,
    ) -> Result<ElementId, ModelError> {
        let raw_id = match &spec.id {
            Some(id) => id.clone(),
            None => self.registry.next_free_id(),
        };
        let id: ElementId = parse_id(&raw_id)?;
        let index = self.elements.len();
        self.registry.register(&raw_id, EntityRef::Element(index))?;

        let mut element = Element::new(id.clone(), spec.name, data);
        element.set_description(spec.description);
        element.set_technology(spec.technology);
        element.set_url(spec.url);
        element
            .tags_mut()
            .merge_all(spec.tags.iter().map(String::as_str));
        *element.properties_mut() = spec.properties;
        element.set_parent_id(parent_id.cloned());

        if let Some(parent_id) = parent_id {
            if let Some(parent) = self.element_mut(parent_id) {
                parent.push_child(id.clone());
            }
        }
        debug!(id:% = id, kind:% = element.kind(); "element declared");
        self.elements.push(element);
        Ok(id)
    }

    fn expect_parent_kind(
        &self,
        parent_id: &ElementId,
        child_kind: ElementKind,
        allowed: &[ElementKind],
    ) -> Result<(), ModelError> {
        let Some(parent) = self.element(parent_id) else {
            return Err(ModelError::UnknownElement {
                id: parent_id.to_string(),
            });
        };
        if allowed.contains(&parent.kind()) {
            Ok(())
        } else {
            Err(ModelError::InvalidParent {
                parent_id: parent_id.clone(),
                parent_kind: parent.kind(),
                child_kind,
            })
        }
    }

    fn environment_of(&self, node_id: &ElementId) -> String {
        self.element(node_id)
            .and_then(Element::environment)
            .unwrap_or(DEFAULT_ENVIRONMENT)
            .to_owned()
    }
}

fn parse_id<T>(raw: &str) -> Result<crate::model::Id<T>, ModelError> {
    crate::model::Id::new(raw).map_err(|source| ModelError::InvalidId {
        value: raw.to_owned(),
        source,
    })
}

fn unresolved(draft: &RelationshipDraft) -> ModelError {
    ModelError::UnresolvedDestination {
        relationship_id: draft.id.clone(),
        source_id: draft.source_id.clone(),
        destination: draft.destination.to_string(),
    }
}
