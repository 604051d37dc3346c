// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Membership of a view before an op, used to derive the op's delta.
struct Membership {
    elements: HashSet<ElementId>,
    relationships: HashSet<RelationshipId>,
    steps: usize,
}

impl Membership {
    fn of(view: &View) -> Self {
        Self {
            elements: view.element_ids().cloned().collect(),
            relationships: view.relationship_ids().cloned().collect(),
            steps: view.animation().len(),
        }
    }

    fn record_changes(self, view: &View, delta: &mut DeltaBuilder) {
        let mut still_present = HashSet::new();
        for id in view.element_ids() {
            still_present.insert(id);
            if !self.elements.contains(id) {
                delta.record_added(ViewObjectRef::Element(id.clone()));
            }
        }
        for id in &self.elements {
            if !still_present.contains(id) {
                delta.record_removed(ViewObjectRef::Element(id.clone()));
            }
        }

        let mut still_present = HashSet::new();
        for id in view.relationship_ids() {
            still_present.insert(id);
            if !self.relationships.contains(id) {
                delta.record_added(ViewObjectRef::Relationship(id.clone()));
            }
        }
        for id in &self.relationships {
            if !still_present.contains(id) {
                delta.record_removed(ViewObjectRef::Relationship(id.clone()));
            }
        }

        for step in &view.animation()[self.steps.min(view.animation().len())..] {
            delta.record_added(ViewObjectRef::Step(step.order()));
        }
    }
}

fn apply_view_op(
    model: &Model,
    view: &mut View,
    op: &ViewOp,
    delta: &mut DeltaBuilder,
) -> Result<(), ApplyError> {
    let before = Membership::of(view);
    match op {
        ViewOp::AddElements { element_ids } => {
            view.add_elements(model, element_ids)?;
        }
        ViewOp::AddRelationships { relationship_ids } => {
            view.add_relationships(model, relationship_ids);
        }
        ViewOp::Remove { element_id } => {
            view.remove(model, element_id);
        }
        ViewOp::RemoveRelationship { relationship_id } => {
            view.remove_relationship(relationship_id);
        }
        ViewOp::AppendStep { element_ids } => {
            view.append_step(model, element_ids)?;
        }
        ViewOp::RemoveTagged { tag } => {
            view.remove_tagged(model, tag);
        }
        ViewOp::RemoveUnreachable { root_id } => {
            view.remove_unreachable(model, root_id);
        }
        ViewOp::RemoveUnrelated => {
            view.remove_unrelated(model);
        }
        ViewOp::SetPosition {
            element_id,
            position,
        } => {
            if !view.set_position(element_id, *position) {
                return Err(ApplyError::NotInView {
                    element_id: element_id.clone(),
                });
            }
            delta.record_updated(ViewObjectRef::Element(element_id.clone()));
        }
    }
    before.record_changes(view, delta);
    Ok(())
}
