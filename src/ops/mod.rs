// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mutation operations for views.
//!
//! Operations are applied with optimistic concurrency (revision checks) against
//! a working copy of the view, committed only when every op succeeds, and
//! produce a minimal delta of what changed.

use std::collections::{BTreeMap, HashSet};

use log::debug;
use rayon::prelude::*;
use thiserror::Error;

use crate::error::ModelError;
use crate::model::{ElementId, Model, RelationshipId, ViewKey};
use crate::view::{Vertex, View, Views};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewOp {
    AddElements {
        element_ids: Vec<ElementId>,
    },
    AddRelationships {
        relationship_ids: Vec<RelationshipId>,
    },
    Remove {
        element_id: ElementId,
    },
    RemoveRelationship {
        relationship_id: RelationshipId,
    },
    AppendStep {
        element_ids: Vec<ElementId>,
    },
    RemoveTagged {
        tag: String,
    },
    RemoveUnreachable {
        root_id: ElementId,
    },
    RemoveUnrelated,
    SetPosition {
        element_id: ElementId,
        position: Vertex,
    },
}

/// A view member touched by an op.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViewObjectRef {
    Element(ElementId),
    Relationship(RelationshipId),
    Step(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyResult {
    pub new_rev: u64,
    pub applied: usize,
    pub delta: Delta,
}

/// Which view members were added, removed or updated, sorted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Delta {
    pub added: Vec<ViewObjectRef>,
    pub removed: Vec<ViewObjectRef>,
    pub updated: Vec<ViewObjectRef>,
}

impl Delta {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.updated.is_empty()
    }
}

#[derive(Debug, Default)]
struct DeltaBuilder {
    added: HashSet<ViewObjectRef>,
    removed: HashSet<ViewObjectRef>,
    updated: HashSet<ViewObjectRef>,
}

impl DeltaBuilder {
    fn record_added(&mut self, object_ref: ViewObjectRef) {
        if self.removed.remove(&object_ref) {
            // removed then re-added within one batch
            self.updated.insert(object_ref);
            return;
        }
        self.updated.remove(&object_ref);
        self.added.insert(object_ref);
    }

    fn record_removed(&mut self, object_ref: ViewObjectRef) {
        self.updated.remove(&object_ref);
        if self.added.remove(&object_ref) {
            return;
        }
        self.removed.insert(object_ref);
    }

    fn record_updated(&mut self, object_ref: ViewObjectRef) {
        if self.added.contains(&object_ref) || self.removed.contains(&object_ref) {
            return;
        }
        self.updated.insert(object_ref);
    }

    fn finish(self) -> Delta {
        let mut added = self.added.into_iter().collect::<Vec<_>>();
        let mut removed = self.removed.into_iter().collect::<Vec<_>>();
        let mut updated = self.updated.into_iter().collect::<Vec<_>>();

        added.sort();
        removed.sort();
        updated.sort();

        Delta {
            added,
            removed,
            updated,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplyError {
    #[error("stale base_rev (base_rev={base_rev}, current_rev={current_rev})")]
    Conflict { base_rev: u64, current_rev: u64 },

    #[error("op {index} failed: {source}")]
    Op {
        index: usize,
        #[source]
        source: ModelError,
    },

    #[error("element {element_id} is not in the view")]
    NotInView { element_id: ElementId },

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Applies `ops` to `view` as one transaction.
///
/// Fails with [`ApplyError::Conflict`] when `base_rev` is stale. A failing op
/// leaves the view untouched; on success the revision is bumped once.
pub fn apply_view_ops(
    model: &Model,
    view: &mut View,
    base_rev: u64,
    ops: &[ViewOp],
) -> Result<ApplyResult, ApplyError> {
    let current_rev = view.rev();
    if base_rev != current_rev {
        return Err(ApplyError::Conflict {
            base_rev,
            current_rev,
        });
    }

    if ops.is_empty() {
        return Ok(ApplyResult {
            new_rev: current_rev,
            applied: 0,
            delta: Delta::default(),
        });
    }

    let mut working = view.clone();
    let mut delta = DeltaBuilder::default();

    for (index, op) in ops.iter().enumerate() {
        apply_view_op(model, &mut working, op, &mut delta).map_err(|err| match err {
            ApplyError::Model(source) => ApplyError::Op { index, source },
            other => other,
        })?;
    }

    working.bump_rev();
    *view = working;
    let new_rev = view.rev();
    debug!(view:% = view.key(), new_rev = new_rev, ops = ops.len(); "view ops applied");

    Ok(ApplyResult {
        new_rev,
        applied: ops.len(),
        delta: delta.finish(),
    })
}

/// One op batch addressed to a view by key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewBatch {
    pub view_key: ViewKey,
    pub base_rev: u64,
    pub ops: Vec<ViewOp>,
}

/// Applies batches to distinct views in parallel.
///
/// Views never affect each other, so each view's batches run on their own
/// rayon task; batches for the same view run in the given order. Results come
/// back in batch order.
pub fn apply_view_ops_par(
    model: &Model,
    views: &mut Views,
    batches: &[ViewBatch],
) -> Vec<Result<ApplyResult, ApplyError>> {
    let mut by_key: BTreeMap<&ViewKey, Vec<usize>> = BTreeMap::new();
    for (index, batch) in batches.iter().enumerate() {
        by_key.entry(&batch.view_key).or_default().push(index);
    }

    let mut results = views
        .views_mut()
        .par_iter_mut()
        .filter_map(|view| {
            let indices = by_key.get(view.key())?;
            let view_results = indices
                .iter()
                .map(|&index| {
                    let batch = &batches[index];
                    (index, apply_view_ops(model, view, batch.base_rev, &batch.ops))
                })
                .collect::<Vec<_>>();
            Some(view_results)
        })
        .flatten()
        .collect::<Vec<_>>();

    let known = results
        .iter()
        .map(|(index, _)| *index)
        .collect::<HashSet<_>>();
    for (index, batch) in batches.iter().enumerate() {
        if !known.contains(&index) {
            results.push((
                index,
                Err(ApplyError::Model(ModelError::UnknownView {
                    view_key: batch.view_key.to_string(),
                })),
            ));
        }
    }

    results.sort_by_key(|(index, _)| *index);
    results.into_iter().map(|(_, result)| result).collect()
}

// Per-op application against the working copy.
include!("ops_impl.rs");
