// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Archscope: architecture model builder and view materialization engine.
//!
//! Declare people, software systems, containers, components and deployment
//! topology with a [`ModelBuilder`], finalize it into an immutable [`Model`],
//! then populate kind-constrained [`View`]s (landscape, context, container,
//! component, dynamic, deployment, filtered) from it. Views keep their
//! relationship members consistent with their element members; batches of
//! view edits go through [`ops::apply_view_ops`].

pub mod build;
pub mod config;
pub mod document;
pub mod error;
pub mod model;
pub mod ops;
pub mod query;
pub mod store;
pub mod style;
pub mod view;
pub mod workspace;

pub use build::{Destination, ElementSpec, ModelBuilder};
pub use config::{EdgeCompletion, Settings};
pub use document::WorkspaceDocument;
pub use error::{BuildError, ModelError, ValidationError, ValidationErrors};
pub use model::{
    Element, ElementId, ElementKind, ElementPath, InteractionStyle, Location, Model, Relationship,
    RelationshipAttrs, RelationshipId, Tags, ViewKey,
};
pub use view::{FilterMode, View, ViewKind, ViewScope, Views};
pub use workspace::Workspace;
