// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use proteus::model::{
    Entity, EntityId, EntityKind, Graph, Point, Relationship, RelationshipId, RelationshipKind,
};

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Small,
    Medium,
    LargeDense,
}

impl Case {
    pub fn entities(self) -> usize {
        match self {
            Self::Small => 8,
            Self::Medium => 64,
            Self::LargeDense => 512,
        }
    }

    pub fn relationships(self) -> usize {
        match self {
            Self::Small => 12,
            Self::Medium => 160,
            Self::LargeDense => 2048,
        }
    }
}

fn kind_for(index: usize) -> EntityKind {
    EntityKind::ALL[index % EntityKind::ALL.len()]
}

fn role_for(index: usize) -> RelationshipKind {
    RelationshipKind::ALL[index % RelationshipKind::ALL.len()]
}

pub fn entity_id(index: usize) -> EntityId {
    EntityId::new(format!("bench_entity_{index:06}")).expect("entity id")
}

/// Deterministic structure graph: entities on a grid, relationships walking
/// the entity list with a stride so the pair distribution has both unique
/// pairs and repeats (grouped edges with multiple roles).
pub fn structure(case: Case) -> Graph {
    let entity_count = case.entities();
    let relationship_count = case.relationships();

    let mut graph = Graph::new();
    for index in 0..entity_count {
        graph.add_entity(Entity::new(
            entity_id(index),
            kind_for(index),
            format!("Bench Entity {index:06}"),
            Point::new(
                (index % 16) as f64 * 300.0,
                (index / 16) as f64 * 200.0,
            ),
        ));
    }

    for index in 0..relationship_count {
        let from_index = (index.wrapping_mul(7)) % entity_count;
        let mut to_index = (index.wrapping_mul(7).wrapping_add(3)) % entity_count;
        if to_index == from_index {
            to_index = (to_index + 1) % entity_count;
        }
        let relationship_id =
            RelationshipId::new(format!("bench_rel_{index:06}")).expect("relationship id");
        graph
            .add_relationship(Relationship::new(
                relationship_id,
                entity_id(from_index),
                entity_id(to_index),
                role_for(index),
            ))
            .expect("fixture relationship endpoints resolve");
    }

    graph
}
