// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Batch mutation operations against a graph scope.
//!
//! Operations are applied with optimistic concurrency (revision checks) and
//! all-or-nothing semantics: the batch runs against a working copy and only
//! replaces the live graph when every op validated, so a failed batch leaves
//! the previous state untouched. A coarse delta reports which entities and
//! relationships changed so derived state (grouping, scene) can refresh.
//!
//! Update and remove ops addressing an unknown id are deliberately silent
//! no-ops: callers cannot address absent records to their detriment. Only
//! additions validate (unresolved endpoints, self-loops) and only those can
//! fail a batch.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use crate::model::{
    Entity, EntityId, Graph, GraphError, Point, Relationship, RelationshipId, RelationshipKind,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    AddEntity {
        entity: Entity,
    },
    UpdateEntity {
        entity: Entity,
    },
    SetEntityPosition {
        entity_id: EntityId,
        position: Point,
    },
    RemoveEntity {
        entity_id: EntityId,
    },
    AddRelationship {
        relationship: Relationship,
    },
    UpdateRelationship {
        relationship_id: RelationshipId,
        kind: RelationshipKind,
        metadata: Option<BTreeMap<String, String>>,
    },
    RemoveRelationship {
        relationship_id: RelationshipId,
    },
}

/// A reference to one changed record, for delta reporting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GraphRef {
    Entity(EntityId),
    Relationship(RelationshipId),
}

impl fmt::Display for GraphRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entity(entity_id) => write!(f, "entity/{entity_id}"),
            Self::Relationship(relationship_id) => write!(f, "relationship/{relationship_id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApplyResult {
    pub new_rev: u64,
    pub applied: usize,
    pub delta: Delta,
}

/// Minimal delta describing which records changed as the result of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Delta {
    pub added: Vec<GraphRef>,
    pub removed: Vec<GraphRef>,
    pub updated: Vec<GraphRef>,
}

#[derive(Debug, Default)]
struct DeltaBuilder {
    added: HashSet<GraphRef>,
    removed: HashSet<GraphRef>,
    updated: HashSet<GraphRef>,
}

impl DeltaBuilder {
    fn record_added(&mut self, graph_ref: GraphRef) {
        self.removed.remove(&graph_ref);
        self.updated.remove(&graph_ref);
        self.added.insert(graph_ref);
    }

    fn record_removed(&mut self, graph_ref: GraphRef) {
        self.added.remove(&graph_ref);
        self.updated.remove(&graph_ref);
        self.removed.insert(graph_ref);
    }

    fn record_updated(&mut self, graph_ref: GraphRef) {
        if self.added.contains(&graph_ref) || self.removed.contains(&graph_ref) {
            return;
        }
        self.updated.insert(graph_ref);
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

pub fn apply_ops(graph: &mut Graph, base_rev: u64, ops: &[Op]) -> Result<ApplyResult, ApplyError> {
    let current_rev = graph.rev();
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

    let mut working = graph.clone();
    let mut delta = DeltaBuilder::default();

    for op in ops {
        apply_op(&mut working, op, &mut delta)?;
    }

    working.bump_rev();
    let new_rev = working.rev();
    *graph = working;

    Ok(ApplyResult {
        new_rev,
        applied: ops.len(),
        delta: delta.finish(),
    })
}

fn apply_op(graph: &mut Graph, op: &Op, delta: &mut DeltaBuilder) -> Result<(), ApplyError> {
    match op {
        Op::AddEntity { entity } => {
            delta.record_added(GraphRef::Entity(entity.entity_id().clone()));
            graph.add_entity(entity.clone());
            Ok(())
        }
        Op::UpdateEntity { entity } => {
            if graph.entity(entity.entity_id()).is_some() {
                delta.record_updated(GraphRef::Entity(entity.entity_id().clone()));
                graph.update_entity(entity.clone());
            }
            Ok(())
        }
        Op::SetEntityPosition {
            entity_id,
            position,
        } => {
            if graph.entity(entity_id).is_some() {
                delta.record_updated(GraphRef::Entity(entity_id.clone()));
                graph.set_entity_position(entity_id, *position);
            }
            Ok(())
        }
        Op::RemoveEntity { entity_id } => {
            if let Some(removed_relationship_ids) = graph.remove_entity(entity_id) {
                for relationship_id in removed_relationship_ids {
                    delta.record_removed(GraphRef::Relationship(relationship_id));
                }
                delta.record_removed(GraphRef::Entity(entity_id.clone()));
            }
            Ok(())
        }
        Op::AddRelationship { relationship } => {
            graph.add_relationship(relationship.clone())?;
            delta.record_added(GraphRef::Relationship(
                relationship.relationship_id().clone(),
            ));
            Ok(())
        }
        Op::UpdateRelationship {
            relationship_id,
            kind,
            metadata,
        } => {
            if graph.relationship(relationship_id).is_some() {
                delta.record_updated(GraphRef::Relationship(relationship_id.clone()));
                graph.update_relationship(relationship_id, *kind, metadata.clone());
            }
            Ok(())
        }
        Op::RemoveRelationship { relationship_id } => {
            if graph.remove_relationship(relationship_id) {
                delta.record_removed(GraphRef::Relationship(relationship_id.clone()));
            }
            Ok(())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    Conflict { base_rev: u64, current_rev: u64 },
    SelfLoop { entity_id: EntityId },
    MissingEndpoint { entity_id: EntityId },
}

impl From<GraphError> for ApplyError {
    fn from(error: GraphError) -> Self {
        match error {
            GraphError::SelfLoop { entity_id } => Self::SelfLoop { entity_id },
            GraphError::MissingEndpoint { entity_id } => Self::MissingEndpoint { entity_id },
        }
    }
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conflict {
                base_rev,
                current_rev,
            } => {
                write!(
                    f,
                    "stale base_rev (base_rev={base_rev}, current_rev={current_rev})"
                )
            }
            Self::SelfLoop { entity_id } => {
                write!(f, "relationship may not connect {entity_id} to itself")
            }
            Self::MissingEndpoint { entity_id } => {
                write!(f, "relationship endpoint not found (id={entity_id})")
            }
        }
    }
}

impl std::error::Error for ApplyError {}
