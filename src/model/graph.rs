// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::element::{Element, ElementKind};
use super::ids::{ElementId, RelationshipId};
use super::registry::Registry;
use super::relationship::Relationship;

/// The finalized architecture graph.
///
/// Produced by [`ModelBuilder::finalize`]; identities are immutable from here
/// on. Elements and relationships keep their declaration order.
///
/// [`ModelBuilder::finalize`]: crate::build::ModelBuilder::finalize
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    enterprise: Option<String>,
    elements: Vec<Element>,
    relationships: Vec<Relationship>,
    registry: Registry,
}

impl Model {
    pub(crate) fn from_parts(
        enterprise: Option<String>,
        elements: Vec<Element>,
        relationships: Vec<Relationship>,
        registry: Registry,
    ) -> Self {
        Self {
            enterprise,
            elements,
            relationships,
            registry,
        }
    }

    pub fn enterprise(&self) -> Option<&str> {
        self.enterprise.as_deref()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    pub fn element(&self, id: &ElementId) -> Option<&Element> {
        self.registry
            .element_index(id)
            .and_then(|index| self.elements.get(index))
    }

    /// Element lookup by raw string id.
    pub fn element_by_str(&self, id: &str) -> Option<&Element> {
        match self.registry.lookup(id) {
            Some(super::registry::EntityRef::Element(index)) => self.elements.get(index),
            _ => None,
        }
    }

    pub fn relationship(&self, id: &RelationshipId) -> Option<&Relationship> {
        self.registry
            .relationship_index(id)
            .and_then(|index| self.relationships.get(index))
    }

    pub fn element_kind(&self, id: &ElementId) -> Option<ElementKind> {
        self.element(id).map(Element::kind)
    }

    pub fn elements_of_kind(&self, kind: ElementKind) -> impl Iterator<Item = &Element> {
        self.elements
            .iter()
            .filter(move |element| element.kind() == kind)
    }

    /// Relationships touching `element_id` in either direction, declaration order.
    pub fn relationships_touching<'a>(
        &'a self,
        element_id: &'a ElementId,
    ) -> impl Iterator<Item = &'a Relationship> + 'a {
        self.relationships
            .iter()
            .filter(move |rel| rel.touches(element_id))
    }

    pub fn parent(&self, id: &ElementId) -> Option<&Element> {
        self.element(id)
            .and_then(Element::parent_id)
            .and_then(|parent_id| self.element(parent_id))
    }

    /// Structural ancestors of `id`, innermost first.
    pub fn ancestors(&self, id: &ElementId) -> Vec<&Element> {
        let mut ancestors = Vec::new();
        let mut current = self.parent(id);
        while let Some(element) = current {
            ancestors.push(element);
            current = self.parent(element.id());
        }
        ancestors
    }

    pub fn children_of_kind(
        &self,
        id: &ElementId,
        kind: ElementKind,
    ) -> impl Iterator<Item = &Element> {
        self.element(id)
            .map(Element::children)
            .unwrap_or_default()
            .iter()
            .filter_map(move |child_id| self.element(child_id))
            .filter(move |child| child.kind() == kind)
    }

    /// The software system owning a container.
    pub fn system_of_container(&self, container_id: &ElementId) -> Option<&Element> {
        self.parent(container_id)
            .filter(|parent| parent.kind() == ElementKind::SoftwareSystem)
    }

    /// The software system whose container a container instance instantiates.
    pub fn system_of_instance(&self, instance_id: &ElementId) -> Option<&Element> {
        self.element(instance_id)
            .and_then(Element::instantiated_container_id)
            .and_then(|container_id| self.system_of_container(container_id))
    }

    /// Top-level deployment nodes in declaration order.
    pub fn root_deployment_nodes(&self) -> impl Iterator<Item = &Element> {
        self.elements_of_kind(ElementKind::DeploymentNode)
            .filter(|node| node.parent_id().is_none())
    }
}
