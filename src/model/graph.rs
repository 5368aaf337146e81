// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;

use super::entity::Entity;
use super::ids::{EntityId, RelationshipId};
use super::point::Point;
use super::relationship::{Relationship, RelationshipKind};

/// One scope's full structure: the entity map plus the relationship list.
///
/// Entities are keyed for lookup; relationships keep insertion order because
/// role stacking order on grouped edges follows list order. The revision
/// counter supports the batch op surface's optimistic concurrency checks.
///
/// Mutations uphold two invariants: a relationship's endpoints always resolve
/// within this graph, and removing an entity atomically removes every
/// relationship touching it — no dangling relationship is ever observable
/// after a mutation returns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Graph {
    entities: BTreeMap<EntityId, Entity>,
    relationships: Vec<Relationship>,
    rev: u64,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entities(&self) -> &BTreeMap<EntityId, Entity> {
        &self.entities
    }

    pub fn entity(&self, entity_id: &EntityId) -> Option<&Entity> {
        self.entities.get(entity_id)
    }

    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    pub fn relationship(&self, relationship_id: &RelationshipId) -> Option<&Relationship> {
        self.relationships
            .iter()
            .find(|r| r.relationship_id() == relationship_id)
    }

    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn set_rev(&mut self, rev: u64) {
        self.rev = rev;
    }

    pub fn bump_rev(&mut self) {
        self.rev = self.rev.saturating_add(1);
    }

    /// Appends a fully-formed entity. The caller guarantees id uniqueness
    /// (timestamp-derived ids in the UI); an existing id is replaced.
    pub fn add_entity(&mut self, entity: Entity) {
        self.entities.insert(entity.entity_id().clone(), entity);
    }

    /// Replaces the entity with the matching id. Silently ignored when the id
    /// is unknown — callers cannot address absent records to their detriment.
    pub fn update_entity(&mut self, updated: Entity) {
        if self.entities.contains_key(updated.entity_id()) {
            self.entities.insert(updated.entity_id().clone(), updated);
        }
    }

    /// Moves an entity; no-op when the id is unknown. This is the drag path,
    /// so it deliberately skips the full-record replace.
    pub fn set_entity_position(&mut self, entity_id: &EntityId, position: Point) {
        if let Some(entity) = self.entities.get_mut(entity_id) {
            entity.set_position(position);
        }
    }

    /// Removes the entity and cascades removal of every relationship whose
    /// source or target is the entity. Returns the removed relationship ids,
    /// or `None` when the entity did not exist (a no-op).
    pub fn remove_entity(&mut self, entity_id: &EntityId) -> Option<Vec<RelationshipId>> {
        self.entities.remove(entity_id)?;
        let removed = self
            .relationships
            .iter()
            .filter(|r| r.touches(entity_id))
            .map(|r| r.relationship_id().clone())
            .collect::<Vec<_>>();
        self.relationships.retain(|r| !r.touches(entity_id));
        Some(removed)
    }

    /// Appends a relationship after validating that both endpoints resolve
    /// and that it is not a self-loop. Duplicate roles between the same pair
    /// are valid (the multi-role case) and never deduplicated.
    pub fn add_relationship(&mut self, relationship: Relationship) -> Result<(), GraphError> {
        if relationship.source_id() == relationship.target_id() {
            return Err(GraphError::SelfLoop {
                entity_id: relationship.source_id().clone(),
            });
        }
        for endpoint in [relationship.source_id(), relationship.target_id()] {
            if !self.entities.contains_key(endpoint) {
                return Err(GraphError::MissingEndpoint {
                    entity_id: endpoint.clone(),
                });
            }
        }
        self.relationships.push(relationship);
        Ok(())
    }

    /// Retypes the relationship with the matching id; optionally replaces its
    /// metadata. No-op when the id is unknown.
    pub fn update_relationship(
        &mut self,
        relationship_id: &RelationshipId,
        kind: RelationshipKind,
        metadata: Option<BTreeMap<String, String>>,
    ) {
        if let Some(existing) = self
            .relationships
            .iter_mut()
            .find(|r| r.relationship_id() == relationship_id)
        {
            existing.set_kind(kind);
            if let Some(metadata) = metadata {
                existing.set_metadata(metadata);
            }
        }
    }

    /// Removes by id; no-op when the id is unknown. Returns whether anything
    /// was removed.
    pub fn remove_relationship(&mut self, relationship_id: &RelationshipId) -> bool {
        let before = self.relationships.len();
        self.relationships
            .retain(|r| r.relationship_id() != relationship_id);
        self.relationships.len() != before
    }

    /// Relationships touching the given entity, in list order.
    pub fn relationships_of(&self, entity_id: &EntityId) -> Vec<&Relationship> {
        self.relationships
            .iter()
            .filter(|r| r.touches(entity_id))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    SelfLoop { entity_id: EntityId },
    MissingEndpoint { entity_id: EntityId },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfLoop { entity_id } => {
                write!(f, "relationship may not connect {entity_id} to itself")
            }
            Self::MissingEndpoint { entity_id } => {
                write!(f, "relationship endpoint not found (id={entity_id})")
            }
        }
    }
}

impl std::error::Error for GraphError {}
