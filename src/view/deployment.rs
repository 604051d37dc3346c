// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use log::trace;

use super::{View, ViewScope};
use crate::model::{ElementId, ElementKind, Model};

impl View {
    /// Adds one deployment-tree element to a deployment view.
    ///
    /// Deployment nodes are projected and pruned; the other kinds are added
    /// directly (container instances only when in scope). Anything added
    /// brings its ancestor chain along.
    pub(super) fn add_deployment_element(&mut self, model: &Model, id: &ElementId) {
        let included = match model.element_kind(id) {
            Some(ElementKind::DeploymentNode) => self.project_node(model, id),
            Some(ElementKind::InfrastructureNode) => {
                self.insert_element(model, id);
                true
            }
            Some(ElementKind::ContainerInstance) => {
                if self.instance_in_scope(model, id) {
                    self.insert_element(model, id);
                    true
                } else {
                    false
                }
            }
            _ => false,
        };
        if included {
            self.insert_ancestors(model, id);
        } else {
            trace!(view:% = self.key, element:% = id; "deployment element pruned");
        }
    }

    /// Includes the in-scope content of `node_id`, bottom-up. Returns whether
    /// the node ended up nested, i.e. added.
    fn project_node(&mut self, model: &Model, node_id: &ElementId) -> bool {
        let Some(node) = model.element(node_id) else {
            return false;
        };
        let mut nested = false;
        for child_id in node.children() {
            match model.element_kind(child_id) {
                Some(ElementKind::ContainerInstance) => {
                    if self.instance_in_scope(model, child_id) {
                        self.insert_element(model, child_id);
                        nested = true;
                    }
                }
                Some(ElementKind::InfrastructureNode) => {
                    self.insert_element(model, child_id);
                    nested = true;
                }
                Some(ElementKind::DeploymentNode) => {
                    // Every child is projected even once this node is nested.
                    nested |= self.project_node(model, child_id);
                }
                _ => {}
            }
        }
        if nested {
            self.insert_element(model, node_id);
        }
        nested
    }

    fn insert_ancestors(&mut self, model: &Model, id: &ElementId) {
        let ancestors = model
            .ancestors(id)
            .into_iter()
            .map(|ancestor| ancestor.id().clone())
            .collect::<Vec<_>>();
        for ancestor in &ancestors {
            self.insert_element(model, ancestor);
        }
    }

    fn instance_in_scope(&self, model: &Model, instance_id: &ElementId) -> bool {
        let ViewScope::Deployment {
            software_system_id: Some(system_id),
            ..
        } = &self.scope
        else {
            return true;
        };
        model
            .system_of_instance(instance_id)
            .is_some_and(|system| system.id() == system_id)
    }
}
