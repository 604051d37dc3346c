// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;

use log::debug;

use super::{AnimationStep, View};
use crate::error::ModelError;
use crate::model::{ElementId, ElementKind, Model};

impl View {
    /// Appends the next animation step.
    ///
    /// Candidates not in the view, or already claimed by an earlier step, are
    /// skipped. Infrastructure nodes and container instances also claim their
    /// unclaimed deployment-node ancestors. A relationship view is attributed
    /// to the step when one endpoint is new in this step and the other was
    /// claimed by an earlier one.
    ///
    /// Fails with [`ModelError::NoNewElements`] when nothing was claimed; the
    /// view is left unchanged in that case.
    pub fn append_step(
        &mut self,
        model: &Model,
        candidates: &[ElementId],
    ) -> Result<&AnimationStep, ModelError> {
        let order = self.animation.len() + 1;
        let mut claims: HashMap<&ElementId, usize> = HashMap::new();
        for step in &self.animation {
            for id in &step.element_ids {
                claims.entry(id).or_insert(step.order);
            }
        }

        let mut claimed = Vec::new();
        for id in candidates {
            if !self.contains_element(id) || claims.contains_key(id) {
                continue;
            }
            claims.insert(id, order);
            claimed.push(id.clone());

            if matches!(
                model.element_kind(id),
                Some(ElementKind::InfrastructureNode | ElementKind::ContainerInstance)
            ) {
                for ancestor in model.ancestors(id) {
                    if ancestor.kind() != ElementKind::DeploymentNode {
                        break;
                    }
                    if claims.contains_key(ancestor.id()) {
                        break;
                    }
                    if !self.contains_element(ancestor.id()) {
                        continue;
                    }
                    claims.insert(ancestor.id(), order);
                    claimed.push(ancestor.id().clone());
                }
            }
        }

        if claimed.is_empty() {
            return Err(ModelError::NoNewElements {
                view_key: self.key.clone(),
            });
        }

        let relationship_ids = self
            .relationship_views
            .iter()
            .filter_map(|rv| model.relationship(rv.relationship_id()))
            .filter(|rel| {
                let source = claims.get(rel.source_id()).copied();
                let destination = claims.get(rel.destination_id()).copied();
                match (source, destination) {
                    (Some(s), Some(d)) => (s == order && d < order) || (d == order && s < order),
                    _ => false,
                }
            })
            .map(|rel| rel.id().clone())
            .collect::<Vec<_>>();

        debug!(
            view:% = self.key,
            order = order,
            elements = claimed.len(),
            relationships = relationship_ids.len();
            "animation step appended"
        );
        self.push_step(claimed, relationship_ids);
        Ok(&self.animation[order - 1])
    }
}
