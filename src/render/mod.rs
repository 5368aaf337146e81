// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Scene assembly: turns a graph plus UI state into flat draw lists.
//!
//! The scene is backend-agnostic graph-space geometry; the TUI maps it to
//! terminal cells, but nothing here knows about cells or colors beyond the
//! highlight/dim flags.

use crate::layout::{edge_segment, EdgeSegment};
use crate::model::{EntityId, EntityKind, Graph, Point};
use crate::query::{focused_entity_ids, grouped_edges};

#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub entity_id: EntityId,
    pub kind: EntityKind,
    pub name: String,
    pub description: String,
    pub position: Point,
    pub selected: bool,
    /// Armed as the source of a pending connection.
    pub connecting: bool,
    /// Outside the selection's neighborhood, rendered faded.
    pub dimmed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeView {
    pub segment: EdgeSegment,
    pub labels: Vec<&'static str>,
    pub arrow_at_from: bool,
    pub arrow_at_to: bool,
    /// Touches the selected entity.
    pub highlighted: bool,
    pub dimmed: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub cards: Vec<CardView>,
    pub edges: Vec<EdgeView>,
}

/// Builds the draw lists for one graph scope. Cards come out in id order and
/// edges in canonical pair order, so successive frames of an unchanged graph
/// are identical.
pub fn build_scene(
    graph: &Graph,
    selected: Option<&EntityId>,
    connecting: Option<&EntityId>,
) -> Scene {
    let focused = focused_entity_ids(graph, selected);
    let in_focus =
        |entity_id: &EntityId| focused.as_ref().map_or(true, |set| set.contains(entity_id));

    let cards = graph
        .entities()
        .values()
        .map(|entity| CardView {
            entity_id: entity.entity_id().clone(),
            kind: entity.kind(),
            name: entity.name().to_string(),
            description: entity.description().to_string(),
            position: entity.position(),
            selected: selected == Some(entity.entity_id()),
            connecting: connecting == Some(entity.entity_id()),
            dimmed: !in_focus(entity.entity_id()),
        })
        .collect();

    let edges = grouped_edges(graph)
        .into_iter()
        .filter_map(|edge| {
            let first = graph.entity(&edge.first)?;
            let second = graph.entity(&edge.second)?;
            let touches_selection =
                selected == Some(&edge.first) || selected == Some(&edge.second);
            Some(EdgeView {
                segment: edge_segment(first.position(), second.position()),
                labels: edge.labels(),
                arrow_at_from: edge.arrow_at_first(),
                arrow_at_to: edge.arrow_at_second(),
                highlighted: touches_selection,
                dimmed: selected.is_some() && !touches_selection,
            })
        })
        .collect();

    Scene { cards, edges }
}

#[cfg(test)]
mod tests {
    use super::build_scene;
    use crate::model::{
        Entity, EntityId, EntityKind, Graph, Point, Relationship, RelationshipId, RelationshipKind,
    };

    fn eid(value: &str) -> EntityId {
        EntityId::new(value).expect("entity id")
    }

    fn rid(value: &str) -> RelationshipId {
        RelationshipId::new(value).expect("relationship id")
    }

    fn sample() -> Graph {
        let mut graph = Graph::new();
        for (id, x) in [("a", 0.0), ("b", 600.0), ("c", 1200.0)] {
            graph.add_entity(Entity::new(
                eid(id),
                EntityKind::Company,
                id.to_uppercase(),
                Point::new(x, 0.0),
            ));
        }
        graph
            .add_relationship(Relationship::new(
                rid("r1"),
                eid("a"),
                eid("b"),
                RelationshipKind::Director,
            ))
            .expect("edge");
        graph
            .add_relationship(Relationship::new(
                rid("r2"),
                eid("a"),
                eid("b"),
                RelationshipKind::Shareholder,
            ))
            .expect("edge");
        graph
    }

    #[test]
    fn parallel_roles_render_as_one_edge_with_both_labels() {
        let scene = build_scene(&sample(), None, None);
        assert_eq!(scene.cards.len(), 3);
        assert_eq!(scene.edges.len(), 1);
        assert_eq!(scene.edges[0].labels, vec!["Director of", "Shareholder of"]);
        assert!(scene.edges[0].arrow_at_to);
        assert!(!scene.edges[0].arrow_at_from);
    }

    #[test]
    fn selection_dims_cards_outside_the_neighborhood() {
        let graph = sample();
        let selected = eid("a");
        let scene = build_scene(&graph, Some(&selected), None);

        let card = |id: &str| {
            scene
                .cards
                .iter()
                .find(|c| c.entity_id == eid(id))
                .expect("card")
        };
        assert!(card("a").selected);
        assert!(!card("a").dimmed);
        assert!(!card("b").dimmed);
        assert!(card("c").dimmed);
        assert!(scene.edges[0].highlighted);
    }

    #[test]
    fn no_selection_dims_nothing() {
        let scene = build_scene(&sample(), None, None);
        assert!(scene.cards.iter().all(|card| !card.dimmed));
        assert!(scene.edges.iter().all(|edge| !edge.dimmed));
    }

    #[test]
    fn connecting_source_is_flagged() {
        let graph = sample();
        let source = eid("b");
        let scene = build_scene(&graph, None, Some(&source));
        let card = scene
            .cards
            .iter()
            .find(|c| c.entity_id == source)
            .expect("card");
        assert!(card.connecting);
    }

    #[test]
    fn edge_endpoints_are_trimmed_off_the_card_centers() {
        let scene = build_scene(&sample(), None, None);
        let segment = scene.edges[0].segment;
        // Horizontal neighbors: the segment runs between the facing sides.
        assert!(segment.from.x > 256.0);
        assert!(segment.to.x < 600.0);
        assert_eq!(segment.from.y, 60.0);
        assert_eq!(segment.to.y, 60.0);
    }
}
