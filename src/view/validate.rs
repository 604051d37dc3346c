// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashSet;

use super::{View, ViewKind};
use crate::error::{ModelError, ValidationErrors};
use crate::model::{ElementId, Model};

impl View {
    /// Consistency pass over this view's current content.
    ///
    /// Views may be populated by other means than `add_elements` (e.g. loaded
    /// from a document), so kind constraints are checked again here.
    pub fn validate(&self, model: &Model) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        let entity = format!("view {}", self.key);
        let kind = self.kind();

        if matches!(
            kind,
            ViewKind::Landscape | ViewKind::Context | ViewKind::Container
        ) {
            for id in self.element_ids() {
                match model.element_kind(id) {
                    Some(element_kind) if !kind.admits(element_kind) => {
                        errors.add(
                            entity.clone(),
                            ModelError::ViewMembershipViolation {
                                view_key: self.key.clone(),
                                view_kind: kind,
                                element_id: id.clone(),
                                element_kind,
                            },
                        );
                    }
                    Some(_) => {}
                    None => errors.add(
                        entity.clone(),
                        ModelError::UnknownElement { id: id.to_string() },
                    ),
                }
            }
        }

        for rv in &self.relationship_views {
            let endpoints_present = model
                .relationship(rv.relationship_id())
                .is_some_and(|rel| {
                    self.contains_element(rel.source_id())
                        && self.contains_element(rel.destination_id())
                });
            if !endpoints_present {
                errors.add(
                    entity.clone(),
                    ModelError::DanglingRelationshipView {
                        view_key: self.key.clone(),
                        relationship_id: rv.relationship_id().clone(),
                    },
                );
            }
        }

        let mut seen: HashSet<&ElementId> = HashSet::new();
        for step in &self.animation {
            let introduces_new = step
                .element_ids()
                .iter()
                .fold(false, |any, id| seen.insert(id) || any);
            if !introduces_new {
                errors.add(
                    entity.clone(),
                    ModelError::EmptyAnimationStep {
                        view_key: self.key.clone(),
                        order: step.order(),
                    },
                );
            }
        }

        errors
    }
}
