// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use log::{debug, trace};

use super::{parse_id, unresolved, Destination, RelationshipDraft};
use crate::error::{ModelError, ValidationErrors};
use crate::model::{
    Element, ElementId, ElementKind, EntityRef, Registry, Relationship, RelationshipAttrs,
    TAG_RELATIONSHIP,
};

/// Resolves the destination of one draft against the declared elements.
///
/// Symbolic destinations are tried as an exact element id first, then as a
/// name path from the top level, then as a name path relative to each
/// ancestor of the source, innermost first.
pub fn resolve_destination(
    elements: &[Element],
    registry: &Registry,
    draft: &RelationshipDraft,
) -> Option<ElementId> {
    let path = match &draft.destination {
        Destination::Element(id) => {
            return registry.element_index(id).map(|_| id.clone());
        }
        Destination::Symbolic(path) => path,
    };

    if let Some(single) = path.as_single() {
        if let Some(EntityRef::Element(index)) = registry.lookup(single) {
            return elements.get(index).map(|element| element.id().clone());
        }
    }

    let segments = path.segments();
    let top_level = elements
        .iter()
        .enumerate()
        .filter(|(_, element)| element.parent_id().is_none())
        .map(|(index, _)| index)
        .collect::<Vec<_>>();
    if let Some(index) = walk(elements, registry, &top_level, segments) {
        return Some(elements[index].id().clone());
    }

    let mut scope = registry
        .element_index(&draft.source_id)
        .and_then(|index| elements[index].parent_id());
    while let Some(scope_id) = scope {
        let Some(scope_index) = registry.element_index(scope_id) else {
            break;
        };
        let children = child_indices(elements, registry, scope_index);
        if let Some(index) = walk(elements, registry, &children, segments) {
            trace!(
                relationship:% = draft.id,
                scope:% = scope_id;
                "destination resolved relative to scope"
            );
            return Some(elements[index].id().clone());
        }
        scope = elements[scope_index].parent_id();
    }
    None
}

/// Resolves every draft, accumulating one error per unresolved destination.
pub(super) fn resolve_all(
    elements: &[Element],
    registry: &Registry,
    drafts: Vec<RelationshipDraft>,
) -> Result<Vec<Relationship>, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let mut relationships = Vec::with_capacity(drafts.len());

    for draft in drafts {
        let Some(destination_id) = resolve_destination(elements, registry, &draft) else {
            errors.add(format!("relationship {}", draft.id), unresolved(&draft));
            continue;
        };
        let RelationshipDraft {
            id,
            source_id,
            attrs,
            ..
        } = draft;
        relationships.push(Relationship::new(
            id,
            source_id,
            destination_id,
            with_structural_tag(attrs),
        ));
    }

    if errors.is_empty() {
        Ok(relationships)
    } else {
        debug!(unresolved = errors.len(); "finalize failed");
        Err(errors)
    }
}

/// Mirrors container-to-container relationships onto the container instances
/// deployed in the same environment. Returns the number of relationships added.
pub(super) fn link_container_instances(
    elements: &[Element],
    registry: &mut Registry,
    relationships: &mut Vec<Relationship>,
) -> Result<usize, ModelError> {
    let instances = elements
        .iter()
        .filter(|element| element.kind() == ElementKind::ContainerInstance)
        .filter_map(|element| {
            Some((
                element.id(),
                element.instantiated_container_id()?,
                element.environment()?,
            ))
        })
        .collect::<Vec<_>>();
    if instances.is_empty() {
        return Ok(0);
    }

    let declared = relationships.len();
    let mut added = 0;
    for rel_index in 0..declared {
        let rel = &relationships[rel_index];
        if rel.linked_relationship_id().is_some() {
            continue;
        }
        let mut pairs = Vec::new();
        for (source, source_container, source_env) in &instances {
            if *source_container != rel.source_id() {
                continue;
            }
            for (destination, destination_container, destination_env) in &instances {
                if *destination_container == rel.destination_id()
                    && destination_env == source_env
                    && source != destination
                {
                    pairs.push(((*source).clone(), (*destination).clone()));
                }
            }
        }

        let linked_id = rel.id().clone();
        let mut attrs = rel.attrs().clone();
        attrs.linked_relationship_id = Some(linked_id.clone());
        for (source, destination) in pairs {
            let already_linked = relationships.iter().any(|existing| {
                existing.source_id() == &source
                    && existing.destination_id() == &destination
                    && existing.linked_relationship_id() == Some(&linked_id)
            });
            if already_linked {
                continue;
            }
            let raw_id = registry.next_free_id();
            let id = parse_id(&raw_id)?;
            registry.register(&raw_id, EntityRef::Relationship(relationships.len()))?;
            relationships.push(Relationship::new(id, source, destination, attrs.clone()));
            added += 1;
        }
    }
    Ok(added)
}

fn with_structural_tag(mut attrs: RelationshipAttrs) -> RelationshipAttrs {
    attrs.tags.merge(TAG_RELATIONSHIP);
    attrs
}

fn child_indices(elements: &[Element], registry: &Registry, index: usize) -> Vec<usize> {
    elements[index]
        .children()
        .iter()
        .filter_map(|child| registry.element_index(child))
        .collect()
}

/// Follows `segments` by element name, starting among `candidates`.
fn walk(
    elements: &[Element],
    registry: &Registry,
    candidates: &[usize],
    segments: &[String],
) -> Option<usize> {
    let (first, rest) = segments.split_first()?;
    let mut current = candidates
        .iter()
        .copied()
        .find(|index| elements[*index].name() == first)?;
    for segment in rest {
        current = child_indices(elements, registry, current)
            .into_iter()
            .find(|index| elements[*index].name() == segment)?;
    }
    Some(current)
}
