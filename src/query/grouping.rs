// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Collapses parallel relationships into one visual edge per entity pair.
//!
//! Two entities connected by several roles (say director and shareholder)
//! render as a single line carrying all role labels. The pair key is
//! direction-insensitive, so A->B and B->A relationships share an edge; each
//! grouped role remembers its original direction for arrowheads.

use std::collections::BTreeMap;

use smallvec::SmallVec;

use crate::model::{EntityId, Graph, RelationshipId, RelationshipKind};

/// One relationship inside a grouped edge, with its original direction
/// relative to the canonical pair order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedRole {
    pub relationship_id: RelationshipId,
    pub kind: RelationshipKind,
    /// Source of the underlying relationship. Equal to the grouped edge's
    /// `first` when the relationship runs first -> second.
    pub source_id: EntityId,
}

/// A direction-insensitive visual edge between two entities, canonically
/// ordered `first < second`. Most pairs carry one or two roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedEdge {
    pub first: EntityId,
    pub second: EntityId,
    pub roles: SmallVec<[GroupedRole; 2]>,
}

impl GroupedEdge {
    /// Whether any underlying relationship runs first -> second, which puts
    /// an arrowhead on the `second` end.
    pub fn arrow_at_second(&self) -> bool {
        self.roles.iter().any(|role| role.source_id == self.first)
    }

    /// Whether any underlying relationship runs second -> first.
    pub fn arrow_at_first(&self) -> bool {
        self.roles.iter().any(|role| role.source_id == self.second)
    }

    /// Role labels in insertion order, for the edge caption.
    pub fn labels(&self) -> Vec<&'static str> {
        self.roles.iter().map(|role| role.kind.label()).collect()
    }
}

/// Groups the graph's relationships by unordered entity pair. Edges come out
/// sorted by their canonical pair key; roles keep the relationship order of
/// the graph.
pub fn grouped_edges(graph: &Graph) -> Vec<GroupedEdge> {
    let mut groups: BTreeMap<(EntityId, EntityId), SmallVec<[GroupedRole; 2]>> = BTreeMap::new();

    for relationship in graph.relationships() {
        let source_id = relationship.source_id().clone();
        let target_id = relationship.target_id().clone();
        let key = if source_id <= target_id {
            (source_id.clone(), target_id)
        } else {
            (target_id, source_id.clone())
        };
        groups.entry(key).or_default().push(GroupedRole {
            relationship_id: relationship.relationship_id().clone(),
            kind: relationship.kind(),
            source_id,
        });
    }

    groups
        .into_iter()
        .map(|((first, second), roles)| GroupedEdge {
            first,
            second,
            roles,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::grouped_edges;
    use crate::model::{
        Entity, EntityId, EntityKind, Graph, Point, Relationship, RelationshipId, RelationshipKind,
    };

    fn eid(value: &str) -> EntityId {
        EntityId::new(value).expect("entity id")
    }

    fn rid(value: &str) -> RelationshipId {
        RelationshipId::new(value).expect("relationship id")
    }

    fn graph_with(edges: &[(&str, &str, &str, RelationshipKind)]) -> Graph {
        let mut graph = Graph::new();
        for id in ["a", "b", "c"] {
            graph.add_entity(Entity::new(
                eid(id),
                EntityKind::Company,
                id.to_uppercase(),
                Point::new(0.0, 0.0),
            ));
        }
        for (id, source, target, kind) in edges {
            graph
                .add_relationship(Relationship::new(rid(id), eid(source), eid(target), *kind))
                .expect("edge");
        }
        graph
    }

    #[test]
    fn parallel_roles_collapse_into_one_edge() {
        let graph = graph_with(&[
            ("r1", "a", "b", RelationshipKind::Director),
            ("r2", "a", "b", RelationshipKind::Shareholder),
        ]);
        let edges = grouped_edges(&graph);
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].roles.len(), 2);
        assert_eq!(edges[0].labels(), vec!["Director of", "Shareholder of"]);
    }

    #[test]
    fn opposite_directions_share_an_edge_with_both_arrows() {
        let graph = graph_with(&[
            ("r1", "a", "b", RelationshipKind::Director),
            ("r2", "b", "a", RelationshipKind::Beneficiary),
        ]);
        let edges = grouped_edges(&graph);
        assert_eq!(edges.len(), 1);
        assert!(edges[0].arrow_at_first());
        assert!(edges[0].arrow_at_second());
    }

    #[test]
    fn one_directional_pair_arrows_only_the_target_end() {
        let graph = graph_with(&[("r1", "a", "b", RelationshipKind::Trustee)]);
        let edges = grouped_edges(&graph);
        assert!(edges[0].arrow_at_second());
        assert!(!edges[0].arrow_at_first());
    }

    #[test]
    fn distinct_pairs_stay_separate_and_sorted() {
        let graph = graph_with(&[
            ("r1", "c", "b", RelationshipKind::Partner),
            ("r2", "a", "b", RelationshipKind::Partner),
        ]);
        let edges = grouped_edges(&graph);
        assert_eq!(edges.len(), 2);
        assert_eq!(edges[0].first, eid("a"));
        assert_eq!(edges[0].second, eid("b"));
        assert_eq!(edges[1].first, eid("b"));
        assert_eq!(edges[1].second, eid("c"));
    }

    #[test]
    fn empty_graph_groups_to_nothing() {
        assert!(grouped_edges(&Graph::new()).is_empty());
    }
}
