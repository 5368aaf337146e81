// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Structure generation boundary.
//!
//! A [`StructureGenerator`] proposes a replacement structure (from a prompt
//! and a snapshot of the current graph) as a JSON document. The wire format
//! is lenient by design: unknown entity or relationship kinds fall back to
//! sensible defaults, and edges referencing unknown or identical endpoints
//! are dropped rather than failing the whole proposal. Entities that survive
//! from the current graph keep their positions; new ones are spread on a
//! grid.

use std::fmt;

use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

use crate::layout::spread_position;
use crate::model::{
    Entity, EntityId, EntityKind, Graph, IdError, Relationship, RelationshipId, RelationshipKind,
};

/// Read-only view of the current graph handed to a generator for context.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct GraphSnapshot {
    pub rev: u64,
    pub nodes: Vec<GeneratedNode>,
    pub edges: Vec<GeneratedEdge>,
}

/// The document a generator returns.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GeneratedStructure {
    pub nodes: Vec<GeneratedNode>,
    pub edges: Vec<GeneratedEdge>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GeneratedNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GeneratedEdge {
    pub id: String,
    #[serde(rename = "sourceId")]
    pub source_id: String,
    #[serde(rename = "targetId")]
    pub target_id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Produces a structure proposal. Implementations may block; the TUI runs
/// them on a worker thread.
pub trait StructureGenerator {
    fn generate(
        &self,
        prompt: &str,
        snapshot: &GraphSnapshot,
    ) -> Result<GeneratedStructure, GenerateError>;
}

/// The JSON schema a generator's output must satisfy, for prompting.
pub fn structure_schema() -> schemars::Schema {
    schema_for!(GeneratedStructure)
}

/// Snapshots the graph into the wire shape.
pub fn snapshot(graph: &Graph) -> GraphSnapshot {
    GraphSnapshot {
        rev: graph.rev(),
        nodes: graph
            .entities()
            .values()
            .map(|entity| GeneratedNode {
                id: entity.entity_id().to_string(),
                kind: entity.kind().label().to_string(),
                name: entity.name().to_string(),
                description: entity.description().to_string(),
            })
            .collect(),
        edges: graph
            .relationships()
            .iter()
            .map(|relationship| GeneratedEdge {
                id: relationship.relationship_id().to_string(),
                source_id: relationship.source_id().to_string(),
                target_id: relationship.target_id().to_string(),
                kind: relationship.kind().label().to_string(),
            })
            .collect(),
    }
}

/// Parses a generator's raw JSON output.
pub fn parse_structure(raw: &str) -> Result<GeneratedStructure, GenerateError> {
    serde_json::from_str(raw).map_err(GenerateError::BadJson)
}

/// Builds the replacement graph from a proposal.
///
/// Entities with an id present in `context` inherit their current position;
/// new entities are spread on a grid in proposal order. Unknown kind labels
/// fall back to `Company` / `Shareholder`. Edges whose endpoints do not
/// resolve within the proposal, or that loop onto one entity, are dropped.
/// The result's rev continues from the context graph.
pub fn integrate_structure(
    proposal: &GeneratedStructure,
    context: &Graph,
) -> Result<Graph, GenerateError> {
    let mut graph = Graph::new();

    for (index, node) in proposal.nodes.iter().enumerate() {
        let entity_id = EntityId::new(&node.id).map_err(|source| GenerateError::BadId {
            id: node.id.clone(),
            source,
        })?;
        let kind = EntityKind::parse_label(&node.kind).unwrap_or(EntityKind::Company);
        let position = match context.entity(&entity_id) {
            Some(existing) => existing.position(),
            None => spread_position(index),
        };
        graph.add_entity(
            Entity::new(entity_id, kind, &node.name, position)
                .with_description(&node.description),
        );
    }

    for edge in &proposal.edges {
        let relationship_id =
            RelationshipId::new(&edge.id).map_err(|source| GenerateError::BadId {
                id: edge.id.clone(),
                source,
            })?;
        let (Ok(source_id), Ok(target_id)) =
            (EntityId::new(&edge.source_id), EntityId::new(&edge.target_id))
        else {
            continue;
        };
        let kind =
            RelationshipKind::parse_label(&edge.kind).unwrap_or(RelationshipKind::Shareholder);
        // Unresolved endpoints and self-loops are silently dropped.
        let _ = graph.add_relationship(Relationship::new(
            relationship_id,
            source_id,
            target_id,
            kind,
        ));
    }

    graph.set_rev(context.rev() + 1);
    Ok(graph)
}

#[derive(Debug)]
pub enum GenerateError {
    BadJson(serde_json::Error),
    BadId { id: String, source: IdError },
    /// Generator-side failure, surfaced verbatim to the operator.
    Provider(String),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadJson(error) => write!(f, "generator returned invalid JSON: {error}"),
            Self::BadId { id, source } => {
                write!(f, "generator returned an unusable id {id:?}: {source}")
            }
            Self::Provider(message) => write!(f, "generation failed: {message}"),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::BadJson(error) => Some(error),
            Self::BadId { source, .. } => Some(source),
            Self::Provider(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{integrate_structure, parse_structure, snapshot};
    use crate::model::{Entity, EntityId, EntityKind, Graph, Point, RelationshipKind};

    fn eid(value: &str) -> EntityId {
        EntityId::new(value).expect("entity id")
    }

    fn context() -> Graph {
        let mut graph = Graph::new();
        graph.add_entity(Entity::new(
            eid("n1"),
            EntityKind::Individual,
            "Alice",
            Point::new(123.0, 456.0),
        ));
        graph.set_rev(7);
        graph
    }

    #[test]
    fn parse_accepts_the_wire_field_names() {
        let proposal = parse_structure(
            r#"{
                "nodes": [
                    {"id": "n1", "type": "Individual", "name": "Alice"},
                    {"id": "n2", "type": "Company", "name": "Alice Holdings Pty Ltd",
                     "description": "New holding company"}
                ],
                "edges": [
                    {"id": "e1", "sourceId": "n1", "targetId": "n2", "type": "Shareholder of"}
                ]
            }"#,
        )
        .expect("proposal");
        assert_eq!(proposal.nodes.len(), 2);
        assert_eq!(proposal.edges[0].source_id, "n1");
    }

    #[test]
    fn parse_rejects_malformed_json() {
        assert!(parse_structure("{nodes:").is_err());
    }

    #[test]
    fn integrate_keeps_known_positions_and_spreads_new_entities() {
        let proposal = parse_structure(
            r#"{
                "nodes": [
                    {"id": "n1", "type": "Individual", "name": "Alice"},
                    {"id": "n2", "type": "Company", "name": "Holdings"}
                ],
                "edges": []
            }"#,
        )
        .expect("proposal");
        let graph = integrate_structure(&proposal, &context()).expect("graph");

        assert_eq!(
            graph.entity(&eid("n1")).expect("n1").position(),
            Point::new(123.0, 456.0)
        );
        assert_eq!(
            graph.entity(&eid("n2")).expect("n2").position(),
            Point::new(600.0, 150.0)
        );
        assert_eq!(graph.rev(), 8);
    }

    #[test]
    fn integrate_falls_back_on_unknown_kind_labels() {
        let proposal = parse_structure(
            r#"{
                "nodes": [
                    {"id": "n1", "type": "Conglomerate", "name": "X"},
                    {"id": "n2", "type": "Company", "name": "Y"}
                ],
                "edges": [
                    {"id": "e1", "sourceId": "n1", "targetId": "n2", "type": "Overlord of"}
                ]
            }"#,
        )
        .expect("proposal");
        let graph = integrate_structure(&proposal, &Graph::new()).expect("graph");

        assert_eq!(
            graph.entity(&eid("n1")).expect("n1").kind(),
            EntityKind::Company
        );
        assert_eq!(
            graph.relationships()[0].kind(),
            RelationshipKind::Shareholder
        );
    }

    #[test]
    fn integrate_drops_unresolved_and_self_loop_edges() {
        let proposal = parse_structure(
            r#"{
                "nodes": [
                    {"id": "n1", "type": "Individual", "name": "Alice"},
                    {"id": "n2", "type": "Company", "name": "Holdings"}
                ],
                "edges": [
                    {"id": "e1", "sourceId": "n1", "targetId": "ghost", "type": "Director of"},
                    {"id": "e2", "sourceId": "n2", "targetId": "n2", "type": "Director of"},
                    {"id": "e3", "sourceId": "n1", "targetId": "n2", "type": "Director of"}
                ]
            }"#,
        )
        .expect("proposal");
        let graph = integrate_structure(&proposal, &Graph::new()).expect("graph");
        assert_eq!(graph.relationships().len(), 1);
        assert_eq!(graph.relationships()[0].relationship_id().to_string(), "e3");
    }

    #[test]
    fn integrate_rejects_unusable_ids() {
        let proposal = parse_structure(
            r#"{
                "nodes": [{"id": "", "type": "Company", "name": "X"}],
                "edges": []
            }"#,
        )
        .expect("proposal");
        assert!(integrate_structure(&proposal, &Graph::new()).is_err());
    }

    #[test]
    fn snapshot_mirrors_the_graph() {
        let graph = context();
        let snap = snapshot(&graph);
        assert_eq!(snap.rev, 7);
        assert_eq!(snap.nodes.len(), 1);
        assert_eq!(snap.nodes[0].kind, "Individual");
    }
}
