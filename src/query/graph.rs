// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::model::{Element, ElementId, ElementKind, Model};

/// Undirected adjacency over every relationship of the model.
fn undirected_adjacency(model: &Model) -> BTreeMap<&ElementId, Vec<&ElementId>> {
    let mut adjacency: BTreeMap<&ElementId, Vec<&ElementId>> = BTreeMap::new();
    for rel in model.relationships() {
        adjacency
            .entry(rel.source_id())
            .or_default()
            .push(rel.destination_id());
        adjacency
            .entry(rel.destination_id())
            .or_default()
            .push(rel.source_id());
    }
    adjacency
}

/// Every element reachable from `root` following relationships in either
/// direction.
///
/// The result never contains `root`, even when a cycle leads back to it, and
/// is sorted by id without duplicates. Unknown roots yield an empty result.
pub fn reachable(model: &Model, root: &ElementId) -> Vec<ElementId> {
    let adjacency = undirected_adjacency(model);
    let mut visited: BTreeSet<&ElementId> = BTreeSet::new();
    let mut stack: Vec<&ElementId> = Vec::new();

    visited.insert(root);
    stack.push(root);
    while let Some(element_id) = stack.pop() {
        for &next_id in adjacency.get(element_id).into_iter().flatten() {
            if visited.insert(next_id) {
                stack.push(next_id);
            }
        }
    }

    visited.remove(root);
    visited.into_iter().cloned().collect()
}

/// Elements one relationship away from `root`, in either direction, filtered
/// by kind. Ordered by first appearance in relationship declaration order.
pub fn related<'a>(model: &'a Model, root: &ElementId, kind: ElementKind) -> Vec<&'a Element> {
    let mut seen: HashSet<&ElementId> = HashSet::new();
    let mut related = Vec::new();
    for rel in model.relationships() {
        let Some(other_id) = rel.other_end(root) else {
            continue;
        };
        let Some(other) = model.element(other_id) else {
            continue;
        };
        if other.kind() == kind && seen.insert(other.id()) {
            related.push(other);
        }
    }
    related
}

pub fn related_people<'a>(model: &'a Model, root: &ElementId) -> Vec<&'a Element> {
    related(model, root, ElementKind::Person)
}

pub fn related_software_systems<'a>(model: &'a Model, root: &ElementId) -> Vec<&'a Element> {
    related(model, root, ElementKind::SoftwareSystem)
}

pub fn related_containers<'a>(model: &'a Model, root: &ElementId) -> Vec<&'a Element> {
    related(model, root, ElementKind::Container)
}

pub fn related_components<'a>(model: &'a Model, root: &ElementId) -> Vec<&'a Element> {
    related(model, root, ElementKind::Component)
}
