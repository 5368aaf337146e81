// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! End-to-end workspace scenarios: building a structure through the ops
//! layer, reading it back through grouping and the scene, and branching
//! strategies.

use proteus::model::{
    Entity, EntityId, EntityKind, Graph, Point, Relationship, RelationshipId, RelationshipKind,
    StrategyId, Workspace,
};
use proteus::ops::{apply_ops, Op};
use proteus::query::grouped_edges;
use proteus::render::build_scene;

fn eid(value: &str) -> EntityId {
    EntityId::new(value).expect("entity id")
}

fn rid(value: &str) -> RelationshipId {
    RelationshipId::new(value).expect("relationship id")
}

fn sid(value: &str) -> StrategyId {
    StrategyId::new(value).expect("strategy id")
}

#[test]
fn two_roles_between_two_entities_render_as_one_edge() {
    let mut graph = Graph::new();
    let rev = graph.rev();
    apply_ops(
        &mut graph,
        rev,
        &[
            Op::AddEntity {
                entity: Entity::new(
                    eid("alice"),
                    EntityKind::Individual,
                    "Alice",
                    Point::new(0.0, 0.0),
                ),
            },
            Op::AddEntity {
                entity: Entity::new(
                    eid("holdco"),
                    EntityKind::Company,
                    "HoldCo Pty Ltd",
                    Point::new(600.0, 0.0),
                ),
            },
            Op::AddRelationship {
                relationship: Relationship::new(
                    rid("r1"),
                    eid("alice"),
                    eid("holdco"),
                    RelationshipKind::Director,
                ),
            },
            Op::AddRelationship {
                relationship: Relationship::new(
                    rid("r2"),
                    eid("alice"),
                    eid("holdco"),
                    RelationshipKind::Shareholder,
                ),
            },
        ],
    )
    .expect("batch");

    let edges = grouped_edges(&graph);
    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].roles.len(), 2);
    assert_eq!(edges[0].labels(), vec!["Director of", "Shareholder of"]);
    assert!(edges[0].arrow_at_second());
    assert!(!edges[0].arrow_at_first());

    let scene = build_scene(&graph, None, None);
    assert_eq!(scene.cards.len(), 2);
    assert_eq!(scene.edges.len(), 1);
}

#[test]
fn removing_an_entity_cascades_through_grouping_and_the_scene() {
    let mut graph = Graph::new();
    let rev = graph.rev();
    apply_ops(
        &mut graph,
        rev,
        &[
            Op::AddEntity {
                entity: Entity::new(
                    eid("alice"),
                    EntityKind::Individual,
                    "Alice",
                    Point::new(0.0, 0.0),
                ),
            },
            Op::AddEntity {
                entity: Entity::new(
                    eid("holdco"),
                    EntityKind::Company,
                    "HoldCo Pty Ltd",
                    Point::new(600.0, 0.0),
                ),
            },
            Op::AddRelationship {
                relationship: Relationship::new(
                    rid("r1"),
                    eid("alice"),
                    eid("holdco"),
                    RelationshipKind::Director,
                ),
            },
        ],
    )
    .expect("setup batch");

    let rev = graph.rev();
    apply_ops(
        &mut graph,
        rev,
        &[Op::RemoveEntity {
            entity_id: eid("alice"),
        }],
    )
    .expect("remove batch");

    assert_eq!(graph.entities().len(), 1);
    assert!(graph.relationships().is_empty());
    assert!(grouped_edges(&graph).is_empty());
    assert_eq!(build_scene(&graph, None, None).edges.len(), 0);
}

#[test]
fn strategy_branching_isolates_edits_and_falls_back_on_delete() {
    let mut baseline = Graph::new();
    baseline.add_entity(Entity::new(
        eid("alice"),
        EntityKind::Individual,
        "Alice",
        Point::new(0.0, 0.0),
    ));
    baseline.add_entity(Entity::new(
        eid("opco"),
        EntityKind::Company,
        "OpCo Pty Ltd",
        Point::new(600.0, 0.0),
    ));
    let mut workspace = Workspace::new(baseline);

    // Branch and restructure: a new holding company between Alice and OpCo.
    workspace.create_strategy(sid("restructure"), "Holding company restructure");
    {
        let graph = workspace.active_graph_mut();
        graph.add_entity(Entity::new(
            eid("holdco"),
            EntityKind::Company,
            "HoldCo Pty Ltd",
            Point::new(300.0, 300.0),
        ));
        graph
            .add_relationship(Relationship::new(
                rid("r1"),
                eid("alice"),
                eid("holdco"),
                RelationshipKind::Shareholder,
            ))
            .expect("add relationship");
        graph
            .add_relationship(Relationship::new(
                rid("r2"),
                eid("holdco"),
                eid("opco"),
                RelationshipKind::Shareholder,
            ))
            .expect("add relationship");
    }

    assert_eq!(workspace.active_graph().entities().len(), 3);
    assert_eq!(workspace.baseline().entities().len(), 2);
    assert!(workspace.baseline().relationships().is_empty());

    // Comparison mode shows (and edits) the baseline while the strategy
    // stays selected.
    workspace.set_comparing(true);
    assert_eq!(workspace.active_graph().entities().len(), 2);
    assert_eq!(
        workspace.active_strategy_id(),
        Some(&sid("restructure"))
    );
    workspace.set_comparing(false);
    assert_eq!(workspace.active_graph().entities().len(), 3);

    // Deleting the active strategy falls back to the untouched baseline.
    workspace.delete_strategy(&sid("restructure"));
    assert_eq!(workspace.active_strategy_id(), None);
    assert_eq!(workspace.active_graph().entities().len(), 2);
    assert!(workspace.active_graph().relationships().is_empty());
}

#[test]
fn selection_focus_flows_into_the_scene() {
    let workspace = proteus::tui::demo_workspace();
    let graph = workspace.baseline();

    let selected = eid("n5");
    let scene = build_scene(graph, Some(&selected), None);

    // n5 connects to n1 and n2 only; n3, n4 and n6 dim out.
    let dimmed: Vec<String> = scene
        .cards
        .iter()
        .filter(|card| card.dimmed)
        .map(|card| card.entity_id.to_string())
        .collect();
    assert_eq!(dimmed, vec!["n3", "n4", "n6"]);

    let highlighted = scene.edges.iter().filter(|edge| edge.highlighted).count();
    assert_eq!(highlighted, 2);
}
