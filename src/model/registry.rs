// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use log::trace;

use super::ids::{ElementId, RelationshipId};
use crate::error::ModelError;

/// What a registered identifier refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityRef {
    /// Index into the model's element table.
    Element(usize),
    /// Index into the model's relationship table.
    Relationship(usize),
}

/// Identifier-keyed lookup for every element and relationship of one model.
///
/// Owned by the builder during construction and handed to the [`Model`] by
/// `finalize`, so independent builds never share state.
///
/// [`Model`]: crate::model::Model
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    entries: BTreeMap<String, EntityRef>,
    next_id: u64,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `entity` under `id`.
    ///
    /// Registering the same entity under the same id again is a no-op;
    /// a different entity fails with [`ModelError::DuplicateId`].
    pub fn register(&mut self, id: &str, entity: EntityRef) -> Result<(), ModelError> {
        match self.entries.get(id) {
            Some(existing) if *existing == entity => Ok(()),
            Some(_) => Err(ModelError::DuplicateId { id: id.to_owned() }),
            None => {
                trace!(id = id, entity:? = entity; "registered");
                self.entries.insert(id.to_owned(), entity);
                Ok(())
            }
        }
    }

    /// Returns the next free decimal identifier, skipping ids already taken
    /// by explicit registrations.
    pub fn next_free_id(&mut self) -> String {
        loop {
            self.next_id = self.next_id.saturating_add(1);
            let candidate = self.next_id.to_string();
            if !self.entries.contains_key(&candidate) {
                return candidate;
            }
        }
    }

    pub fn lookup(&self, id: &str) -> Option<EntityRef> {
        self.entries.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn element_index(&self, id: &ElementId) -> Option<usize> {
        match self.lookup(id.as_str()) {
            Some(EntityRef::Element(index)) => Some(index),
            _ => None,
        }
    }

    pub fn relationship_index(&self, id: &RelationshipId) -> Option<usize> {
        match self.lookup(id.as_str()) {
            Some(EntityRef::Relationship(index)) => Some(index),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
