// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Error taxonomy shared by the builder, the view engine and validation.
//!
//! Single-operation errors are returned immediately as [`ModelError`]. Model-wide
//! consistency problems are accumulated into [`ValidationErrors`] so the caller
//! sees every problem at once.

use std::fmt;

use thiserror::Error;

use crate::model::{ElementId, ElementKind, IdError, RelationshipId, ViewKey};
use crate::view::ViewKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("id {id:?} is already registered")]
    DuplicateId { id: String },

    #[error("relationship {relationship_id} from {source_id}: could not find destination {destination:?}")]
    UnresolvedDestination {
        relationship_id: RelationshipId,
        source_id: ElementId,
        destination: String,
    },

    #[error("{element_kind} {element_id} cannot be added to {view_kind} view {view_key}")]
    TypeMismatch {
        view_key: ViewKey,
        view_kind: ViewKind,
        element_id: ElementId,
        element_kind: ElementKind,
    },

    #[error("animation step {order} in view {view_key} introduces no new elements")]
    EmptyAnimationStep { view_key: ViewKey, order: usize },

    #[error("none of the elements exist in view {view_key} or all appear in previous animation steps")]
    NoNewElements { view_key: ViewKey },

    #[error("{view_kind} view {view_key} cannot contain {element_kind} {element_id}")]
    ViewMembershipViolation {
        view_key: ViewKey,
        view_kind: ViewKind,
        element_id: ElementId,
        element_kind: ElementKind,
    },

    #[error("relationship {relationship_id} in view {view_key} has an endpoint without element view")]
    DanglingRelationshipView {
        view_key: ViewKey,
        relationship_id: RelationshipId,
    },

    #[error("element {id} not found")]
    UnknownElement { id: String },

    #[error("relationship {id} not found")]
    UnknownRelationship { id: String },

    #[error("{child_kind} cannot be placed inside {parent_kind} {parent_id}")]
    InvalidParent {
        parent_id: ElementId,
        parent_kind: ElementKind,
        child_kind: ElementKind,
    },

    #[error("view {view_key} not found")]
    UnknownView { view_key: String },

    #[error("view key {view_key} is already used")]
    DuplicateViewKey { view_key: ViewKey },

    #[error("invalid id {value:?}: {source}")]
    InvalidId {
        value: String,
        #[source]
        source: IdError,
    },
}

/// One failure found by a validation pass, attributed to the entity it concerns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub entity: String,
    pub error: ModelError,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.entity, self.error)
    }
}

/// Accumulated validation failures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entity: impl Into<String>, error: ModelError) {
        self.errors.push(ValidationError {
            entity: entity.into(),
            error,
        });
    }

    pub fn merge(&mut self, other: ValidationErrors) {
        self.errors.extend(other.errors);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, error) in self.errors.iter().enumerate() {
            if index > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

/// Failure of a whole workspace build.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("model validation failed:\n{0}")]
    Validation(ValidationErrors),

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl From<ValidationErrors> for BuildError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}
