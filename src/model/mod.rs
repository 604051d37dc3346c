// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core architecture model.
//!
//! Elements and relationships form a directed multigraph with a containment
//! tree on the side. A [`Model`] is only ever produced by the builder.

pub mod element;
pub mod element_path;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod graph;
pub mod ids;
pub mod registry;
pub mod relationship;
pub mod tags;

pub use element::{Element, ElementData, ElementKind, Location, DEFAULT_ENVIRONMENT};
pub use element_path::{ElementPath, ElementPathError};
pub use graph::Model;
pub use ids::{ElementId, Id, IdError, RelationshipId, ViewKey};
pub use registry::{EntityRef, Registry};
pub use relationship::{InteractionStyle, Relationship, RelationshipAttrs};
pub use tags::{
    Tags, TAG_COMPONENT, TAG_CONTAINER, TAG_CONTAINER_INSTANCE, TAG_DEPLOYMENT_NODE,
    TAG_ELEMENT, TAG_INFRASTRUCTURE_NODE, TAG_PERSON, TAG_RELATIONSHIP, TAG_SOFTWARE_SYSTEM,
};
