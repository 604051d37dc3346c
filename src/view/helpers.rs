// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashSet;

use super::View;
use crate::model::{ElementId, Model};
use crate::query;

impl View {
    /// Member elements carrying `tag`, in view order.
    pub fn all_tagged(&self, model: &Model, tag: &str) -> Vec<ElementId> {
        self.element_ids()
            .filter(|id| {
                model
                    .element(id)
                    .is_some_and(|element| element.tags().contains(tag))
            })
            .cloned()
            .collect()
    }

    /// Member elements that are neither `root` nor reachable from it.
    pub fn all_unreachable(&self, model: &Model, root: &ElementId) -> Vec<ElementId> {
        let reachable = query::reachable(model, root);
        self.element_ids()
            .filter(|id| *id != root && reachable.binary_search(id).is_err())
            .cloned()
            .collect()
    }

    /// Member elements no relationship view of this view touches.
    pub fn all_unrelated(&self, model: &Model) -> Vec<ElementId> {
        let mut related: HashSet<&ElementId> = HashSet::new();
        for rel in self
            .relationship_ids()
            .filter_map(|id| model.relationship(id))
        {
            related.insert(rel.source_id());
            related.insert(rel.destination_id());
        }
        self.element_ids()
            .filter(|id| !related.contains(id))
            .cloned()
            .collect()
    }

    pub fn remove_tagged(&mut self, model: &Model, tag: &str) -> usize {
        let ids = self.all_tagged(model, tag);
        self.remove_all(model, &ids)
    }

    pub fn remove_unreachable(&mut self, model: &Model, root: &ElementId) -> usize {
        let ids = self.all_unreachable(model, root);
        self.remove_all(model, &ids)
    }

    pub fn remove_unrelated(&mut self, model: &Model) -> usize {
        let ids = self.all_unrelated(model);
        self.remove_all(model, &ids)
    }

    fn remove_all(&mut self, model: &Model, ids: &[ElementId]) -> usize {
        ids.iter().filter(|id| self.remove(model, id)).count()
    }
}
