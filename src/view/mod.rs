// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Views: kind-constrained projections of the model.
//!
//! A [`View`] holds element and relationship membership records plus an
//! append-only animation sequence. Membership is only changed through the
//! operations in this module, which keep every relationship view's endpoints
//! present in the same view.

mod animation;
mod collection;
mod deployment;
pub mod filtered;
mod helpers;
mod membership;
mod validate;

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::EdgeCompletion;
use crate::model::{ElementId, ElementKind, RelationshipId, ViewKey};

pub use collection::Views;
pub use filtered::{FilterMode, FilteredContent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViewKind {
    Landscape,
    Context,
    Container,
    Component,
    Dynamic,
    Deployment,
    Filtered,
}

impl ViewKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Landscape => "Landscape",
            Self::Context => "Context",
            Self::Container => "Container",
            Self::Component => "Component",
            Self::Dynamic => "Dynamic",
            Self::Deployment => "Deployment",
            Self::Filtered => "Filtered",
        }
    }

    /// Whether elements of `kind` may be members of a view of this kind.
    pub fn admits(self, kind: ElementKind) -> bool {
        use ElementKind as K;
        match self {
            Self::Landscape | Self::Context => matches!(kind, K::Person | K::SoftwareSystem),
            Self::Container => matches!(kind, K::Person | K::SoftwareSystem | K::Container),
            Self::Component | Self::Dynamic => matches!(
                kind,
                K::Person | K::SoftwareSystem | K::Container | K::Component
            ),
            Self::Deployment => kind.is_deployment(),
            Self::Filtered => false,
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewKind {
    type Err = ParseViewKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "Landscape" => Self::Landscape,
            "Context" => Self::Context,
            "Container" => Self::Container,
            "Component" => Self::Component,
            "Dynamic" => Self::Dynamic,
            "Deployment" => Self::Deployment,
            "Filtered" => Self::Filtered,
            _ => return Err(ParseViewKindError),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseViewKindError;

impl fmt::Display for ParseViewKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown view kind")
    }
}

impl std::error::Error for ParseViewKindError {}

/// What a view is "for". The variant determines the view kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewScope {
    Landscape,
    Context {
        software_system_id: ElementId,
    },
    Container {
        software_system_id: ElementId,
    },
    Component {
        container_id: ElementId,
    },
    Dynamic {
        element_id: Option<ElementId>,
    },
    Deployment {
        software_system_id: Option<ElementId>,
        environment: String,
    },
    Filtered {
        base_key: ViewKey,
        mode: FilterMode,
        tags: Vec<String>,
    },
}

impl ViewScope {
    pub fn kind(&self) -> ViewKind {
        match self {
            Self::Landscape => ViewKind::Landscape,
            Self::Context { .. } => ViewKind::Context,
            Self::Container { .. } => ViewKind::Container,
            Self::Component { .. } => ViewKind::Component,
            Self::Dynamic { .. } => ViewKind::Dynamic,
            Self::Deployment { .. } => ViewKind::Deployment,
            Self::Filtered { .. } => ViewKind::Filtered,
        }
    }

    /// The element this view is scoped to, if any.
    pub fn scope_element_id(&self) -> Option<&ElementId> {
        match self {
            Self::Context { software_system_id } | Self::Container { software_system_id } => {
                Some(software_system_id)
            }
            Self::Component { container_id } => Some(container_id),
            Self::Dynamic { element_id } => element_id.as_ref(),
            Self::Deployment {
                software_system_id, ..
            } => software_system_id.as_ref(),
            Self::Landscape | Self::Filtered { .. } => None,
        }
    }
}

/// Stored layout point. Never computed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct Vertex {
    pub x: i64,
    pub y: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementView {
    element_id: ElementId,
    position: Option<Vertex>,
}

impl ElementView {
    pub fn new(element_id: ElementId) -> Self {
        Self {
            element_id,
            position: None,
        }
    }

    pub fn element_id(&self) -> &ElementId {
        &self.element_id
    }

    pub fn position(&self) -> Option<Vertex> {
        self.position
    }

    pub fn set_position(&mut self, position: Option<Vertex>) {
        self.position = position;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationshipView {
    relationship_id: RelationshipId,
    pub description: Option<String>,
    pub order: Option<String>,
    pub vertices: Vec<Vertex>,
    pub routing: Option<String>,
    pub position: Option<u32>,
}

impl RelationshipView {
    pub fn new(relationship_id: RelationshipId) -> Self {
        Self {
            relationship_id,
            description: None,
            order: None,
            vertices: Vec::new(),
            routing: None,
            position: None,
        }
    }

    pub fn relationship_id(&self) -> &RelationshipId {
        &self.relationship_id
    }
}

/// One presentation step: the elements it introduces and the relationships
/// bridging them to earlier steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationStep {
    order: usize,
    element_ids: Vec<ElementId>,
    relationship_ids: Vec<RelationshipId>,
}

impl AnimationStep {
    pub fn order(&self) -> usize {
        self.order
    }

    pub fn element_ids(&self) -> &[ElementId] {
        &self.element_ids
    }

    pub fn relationship_ids(&self) -> &[RelationshipId] {
        &self.relationship_ids
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    key: ViewKey,
    scope: ViewScope,
    title: Option<String>,
    description: Option<String>,
    paper_size: Option<String>,
    rev: u64,
    edge_completion: EdgeCompletion,
    element_views: Vec<ElementView>,
    relationship_views: Vec<RelationshipView>,
    animation: Vec<AnimationStep>,
}

impl View {
    pub fn new(key: ViewKey, scope: ViewScope) -> Self {
        Self {
            key,
            scope,
            title: None,
            description: None,
            paper_size: None,
            rev: 0,
            edge_completion: EdgeCompletion::default(),
            element_views: Vec::new(),
            relationship_views: Vec::new(),
            animation: Vec::new(),
        }
    }

    pub fn key(&self) -> &ViewKey {
        &self.key
    }

    pub fn kind(&self) -> ViewKind {
        self.scope.kind()
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn set_title<T: Into<String>>(&mut self, title: Option<T>) {
        self.title = title.map(Into::into);
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description<T: Into<String>>(&mut self, description: Option<T>) {
        self.description = description.map(Into::into);
    }

    pub fn paper_size(&self) -> Option<&str> {
        self.paper_size.as_deref()
    }

    pub fn set_paper_size<T: Into<String>>(&mut self, paper_size: Option<T>) {
        self.paper_size = paper_size.map(Into::into);
    }

    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn bump_rev(&mut self) {
        self.rev = self.rev.saturating_add(1);
    }

    pub fn edge_completion(&self) -> EdgeCompletion {
        self.edge_completion
    }

    pub fn set_edge_completion(&mut self, edge_completion: EdgeCompletion) {
        self.edge_completion = edge_completion;
    }

    pub fn element_views(&self) -> &[ElementView] {
        &self.element_views
    }

    pub fn relationship_views(&self) -> &[RelationshipView] {
        &self.relationship_views
    }

    pub fn animation(&self) -> &[AnimationStep] {
        &self.animation
    }

    pub fn element_ids(&self) -> impl Iterator<Item = &ElementId> {
        self.element_views.iter().map(ElementView::element_id)
    }

    pub fn relationship_ids(&self) -> impl Iterator<Item = &RelationshipId> {
        self.relationship_views
            .iter()
            .map(RelationshipView::relationship_id)
    }

    pub fn contains_element(&self, id: &ElementId) -> bool {
        self.element_views.iter().any(|ev| ev.element_id() == id)
    }

    pub fn contains_relationship(&self, id: &RelationshipId) -> bool {
        self.relationship_views
            .iter()
            .any(|rv| rv.relationship_id() == id)
    }

    pub fn element_view_mut(&mut self, id: &ElementId) -> Option<&mut ElementView> {
        self.element_views
            .iter_mut()
            .find(|ev| ev.element_id() == id)
    }

    pub fn relationship_view_mut(&mut self, id: &RelationshipId) -> Option<&mut RelationshipView> {
        self.relationship_views
            .iter_mut()
            .find(|rv| rv.relationship_id() == id)
    }

    /// Stores a layout position for a member element. Returns `false` when the
    /// element is not in the view.
    pub fn set_position(&mut self, id: &ElementId, position: Vertex) -> bool {
        match self.element_view_mut(id) {
            Some(ev) => {
                ev.set_position(Some(position));
                true
            }
            None => false,
        }
    }

    pub(crate) fn push_element_view(&mut self, element_view: ElementView) {
        self.element_views.push(element_view);
    }

    pub(crate) fn push_relationship_view(&mut self, relationship_view: RelationshipView) {
        self.relationship_views.push(relationship_view);
    }

    pub(crate) fn push_step(
        &mut self,
        element_ids: Vec<ElementId>,
        relationship_ids: Vec<RelationshipId>,
    ) -> usize {
        let order = self.animation.len() + 1;
        self.animation.push(AnimationStep {
            order,
            element_ids,
            relationship_ids,
        });
        order
    }
}
