// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use log::{debug, trace};

use super::{ElementView, RelationshipView, View, ViewKind, ViewScope};
use crate::config::EdgeCompletion;
use crate::error::ModelError;
use crate::model::{ElementId, ElementKind, Model, RelationshipId};

impl View {
    /// Adds elements to the view and completes relationships to them.
    ///
    /// Every candidate is kind-checked before anything is inserted, so a
    /// [`ModelError::TypeMismatch`] leaves the view untouched. Candidates
    /// already present are not inserted twice. Deployment views route every
    /// deployment node through the subtree projector, which may prune it.
    pub fn add_elements(&mut self, model: &Model, ids: &[ElementId]) -> Result<(), ModelError> {
        let kind = self.kind();
        for id in ids {
            let element_kind = model
                .element_kind(id)
                .ok_or_else(|| ModelError::UnknownElement { id: id.to_string() })?;
            if !kind.admits(element_kind) {
                return Err(ModelError::TypeMismatch {
                    view_key: self.key.clone(),
                    view_kind: kind,
                    element_id: id.clone(),
                    element_kind,
                });
            }
        }

        for id in ids {
            // a node present only as an ancestor still needs its subtree
            if kind == ViewKind::Deployment {
                self.add_deployment_element(model, id);
            } else {
                self.insert_element(model, id);
            }
        }

        if self.edge_completion == EdgeCompletion::Batch {
            self.complete_all_edges(model);
        }
        Ok(())
    }

    /// Adds relationships whose endpoints are both present. Anything else,
    /// including ids already present or unknown, is skipped. Returns how many
    /// relationship views were added.
    pub fn add_relationships(&mut self, model: &Model, ids: &[RelationshipId]) -> usize {
        let mut added = 0;
        for id in ids {
            if self.contains_relationship(id) {
                continue;
            }
            let Some(rel) = model.relationship(id) else {
                continue;
            };
            if self.contains_element(rel.source_id()) && self.contains_element(rel.destination_id())
            {
                self.push_relationship_view(RelationshipView::new(id.clone()));
                added += 1;
            }
        }
        added
    }

    /// Removes an element and every relationship view touching it.
    ///
    /// Animation steps are append-only and keep the ids they claimed.
    ///
    /// Returns `false` when nothing was removed, either because the element is
    /// not present or because the view refuses to drop its own scope.
    pub fn remove(&mut self, model: &Model, id: &ElementId) -> bool {
        if self.is_scope_protected(model, id) {
            debug!(view:% = self.key, element:% = id; "refusing to remove view scope");
            return false;
        }

        let mut removed = false;
        if self.kind() == ViewKind::Deployment
            && model.element_kind(id) == Some(ElementKind::DeploymentNode)
        {
            removed |= self.remove_deployment_children(model, id);
        }
        removed |= self.remove_element_view(model, id);
        removed
    }

    /// Removes a single relationship view.
    pub fn remove_relationship(&mut self, id: &RelationshipId) -> bool {
        let before = self.relationship_views.len();
        self.relationship_views
            .retain(|rv| rv.relationship_id() != id);
        self.relationship_views.len() != before
    }

    /// Inserts an element view without kind checks and completes edges per the
    /// view's completion mode. Returns `false` if it was already present.
    pub(super) fn insert_element(&mut self, model: &Model, id: &ElementId) -> bool {
        if self.contains_element(id) {
            return false;
        }
        self.push_element_view(ElementView::new(id.clone()));
        trace!(view:% = self.key, element:% = id; "element view added");
        if self.edge_completion == EdgeCompletion::Incremental {
            self.complete_edges_for(model, id);
        }
        true
    }

    /// Adds relationships touching `id` whose other endpoint is present.
    fn complete_edges_for(&mut self, model: &Model, id: &ElementId) {
        let candidates = model
            .relationships_touching(id)
            .filter(|rel| {
                rel.other_end(id)
                    .is_some_and(|other| self.contains_element(other))
            })
            .map(|rel| rel.id().clone())
            .collect::<Vec<_>>();
        self.add_relationships(model, &candidates);
    }

    /// Adds every relationship whose endpoints are both present.
    pub(super) fn complete_all_edges(&mut self, model: &Model) {
        let candidates = model
            .relationships()
            .iter()
            .map(|rel| rel.id().clone())
            .collect::<Vec<_>>();
        let added = self.add_relationships(model, &candidates);
        trace!(view:% = self.key, added = added; "batch edge completion");
    }

    fn is_scope_protected(&self, model: &Model, id: &ElementId) -> bool {
        match &self.scope {
            ViewScope::Context { software_system_id }
            | ViewScope::Container { software_system_id } => software_system_id == id,
            ViewScope::Component { container_id } => {
                container_id == id
                    || model
                        .system_of_container(container_id)
                        .is_some_and(|system| system.id() == id)
            }
            _ => false,
        }
    }

    /// Post-order removal of everything nested under a deployment node.
    fn remove_deployment_children(&mut self, model: &Model, node_id: &ElementId) -> bool {
        let Some(node) = model.element(node_id) else {
            return false;
        };
        let mut removed = false;
        for child_id in node.children() {
            if model.element_kind(child_id) == Some(ElementKind::DeploymentNode) {
                removed |= self.remove_deployment_children(model, child_id);
            }
            removed |= self.remove_element_view(model, child_id);
        }
        removed
    }

    fn remove_element_view(&mut self, model: &Model, id: &ElementId) -> bool {
        let before = self.element_views.len();
        self.element_views.retain(|ev| ev.element_id() != id);
        if self.element_views.len() == before {
            return false;
        }

        let dangling = self
            .relationship_views
            .iter()
            .filter(|rv| {
                model
                    .relationship(rv.relationship_id())
                    .map_or(true, |rel| rel.touches(id))
            })
            .map(|rv| rv.relationship_id().clone())
            .collect::<Vec<_>>();
        for rel_id in &dangling {
            self.remove_relationship(rel_id);
        }
        trace!(
            view:% = self.key,
            element:% = id,
            relationships = dangling.len();
            "element view removed"
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::config::EdgeCompletion;
    use crate::error::ModelError;
    use crate::model::fixtures::{bank_model, eid, rid};
    use crate::model::ViewKey;
    use crate::view::{View, ViewKind, ViewScope};

    fn container_view() -> View {
        View::new(
            ViewKey::new("containers").expect("key"),
            ViewScope::Container {
                software_system_id: eid("bank"),
            },
        )
    }

    fn relationship_ids(view: &View) -> Vec<&str> {
        view.relationship_ids().map(|id| id.as_str()).collect()
    }

    #[test]
    fn incremental_completion_depends_on_insertion_order() {
        let model = bank_model();
        let mut view = container_view();

        view.add_elements(&model, &[eid("web")]).expect("web");
        view.add_elements(&model, &[eid("api")]).expect("api");
        assert_eq!(relationship_ids(&view), vec!["r-wa"]);

        // Each edge is found when its second endpoint arrives.
        let mut view = container_view();
        view.add_elements(&model, &[eid("api"), eid("web"), eid("customer")])
            .expect("add");
        assert_eq!(relationship_ids(&view), vec!["r-wa", "r-cw"]);
    }

    #[test]
    fn batch_completion_adds_relationships_in_declaration_order() {
        let model = bank_model();
        let mut view = container_view();
        view.set_edge_completion(EdgeCompletion::Batch);

        view.add_elements(&model, &[eid("api"), eid("web"), eid("customer")])
            .expect("add");
        assert_eq!(relationship_ids(&view), vec!["r-cw", "r-wa"]);
    }

    #[test]
    fn kind_mismatch_rejects_the_whole_call() {
        let model = bank_model();
        let mut view = View::new(ViewKey::new("ctx").expect("key"), ViewScope::Landscape);

        let err = view
            .add_elements(&model, &[eid("customer"), eid("web")])
            .expect_err("container not admitted");
        assert!(matches!(
            err,
            ModelError::TypeMismatch {
                view_kind: ViewKind::Landscape,
                ..
            }
        ));
        assert!(view.element_views().is_empty());
    }

    #[test]
    fn unknown_element_is_reported() {
        let model = bank_model();
        let mut view = container_view();
        let err = view
            .add_elements(&model, &[eid("ghost")])
            .expect_err("unknown");
        assert_eq!(err, ModelError::UnknownElement { id: "ghost".to_owned() });
    }

    #[test]
    fn add_relationships_filters_and_is_idempotent() {
        let model = bank_model();
        let mut view = container_view();
        view.set_edge_completion(EdgeCompletion::Batch);
        view.add_elements(&model, &[eid("web")]).expect("web");
        view.add_elements(&model, &[eid("api")]).expect("api");
        view.remove_relationship(&rid("r-wa"));

        let ids = [rid("r-wa"), rid("r-ad"), rid("nope")];
        assert_eq!(view.add_relationships(&model, &ids), 1);
        let first = view.relationship_views().to_vec();
        assert_eq!(view.add_relationships(&model, &ids), 0);
        assert_eq!(view.relationship_views(), first.as_slice());
    }

    #[test]
    fn remove_drops_touching_relationship_views() {
        let model = bank_model();
        let mut view = container_view();
        view.add_elements(&model, &[eid("customer"), eid("web"), eid("api"), eid("db")])
            .expect("add");
        assert!(view.contains_relationship(&rid("r-wa")));

        assert!(view.remove(&model, &eid("api")));
        assert!(!view.contains_element(&eid("api")));
        assert_eq!(relationship_ids(&view), vec!["r-cw"]);
        assert!(!view.remove(&model, &eid("api")));
    }

    #[test]
    fn remove_leaves_animation_steps_alone() {
        let model = bank_model();
        let mut view = View::new(ViewKey::new("l").expect("key"), ViewScope::Landscape);
        view.add_elements(&model, &[eid("customer"), eid("bank")])
            .expect("add");
        view.append_step(&model, &[eid("customer")]).expect("step 1");
        view.append_step(&model, &[eid("bank")]).expect("step 2");
        let steps = view.animation().to_vec();

        assert!(view.remove(&model, &eid("customer")));
        assert!(!view.contains_relationship(&rid("r-cb")));
        assert_eq!(view.animation(), steps.as_slice());
        assert_eq!(view.animation()[0].element_ids(), &[eid("customer")]);
        assert!(view.validate(&model).is_empty());
    }

    #[test]
    fn scoped_views_refuse_to_remove_their_scope() {
        let model = bank_model();
        let mut view = container_view();
        view.add_elements(&model, &[eid("bank")]).expect("add");
        assert!(!view.remove(&model, &eid("bank")));
        assert!(view.contains_element(&eid("bank")));

        let mut component = View::new(
            ViewKey::new("components").expect("key"),
            ViewScope::Component {
                container_id: eid("api"),
            },
        );
        component
            .add_elements(&model, &[eid("bank"), eid("api"), eid("ctrl")])
            .expect("add");
        assert!(!component.remove(&model, &eid("api")));
        assert!(!component.remove(&model, &eid("bank")));
        assert!(component.remove(&model, &eid("ctrl")));
    }
}
