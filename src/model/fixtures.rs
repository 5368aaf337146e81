// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::entity::{Entity, EntityKind};
use super::graph::Graph;
use super::ids::{EntityId, RelationshipId};
use super::point::Point;
use super::relationship::{Relationship, RelationshipKind};

fn eid(value: &str) -> EntityId {
    EntityId::new(value).expect("entity id")
}

fn rid(value: &str) -> RelationshipId {
    RelationshipId::new(value).expect("relationship id")
}

/// The demo family-group structure: two principals, a holding company, a
/// trading company and two discretionary trusts.
pub(crate) fn family_group() -> Graph {
    let mut graph = Graph::new();

    graph.add_entity(
        Entity::new(
            eid("n1"),
            EntityKind::Individual,
            "Alessandro Vicinanza",
            Point::new(300.0, 150.0),
        )
        .with_description("Managing Director & Principal."),
    );
    graph.add_entity(
        Entity::new(
            eid("n2"),
            EntityKind::Individual,
            "Korine Vicinanza",
            Point::new(700.0, 150.0),
        )
        .with_description("Director & Spouse."),
    );
    graph.add_entity(
        Entity::new(
            eid("n3"),
            EntityKind::Company,
            "Vicio Pty Limited",
            Point::new(500.0, 400.0),
        )
        .with_description("Holding Company & Trustee Layer."),
    );
    graph.add_entity(
        Entity::new(
            eid("n4"),
            EntityKind::Company,
            "Cose Buone Pty Ltd",
            Point::new(500.0, 650.0),
        )
        .with_description("Core Trading & Operating Entity."),
    );
    graph.add_entity(
        Entity::new(
            eid("n5"),
            EntityKind::Trust,
            "AK Italia Family Trust",
            Point::new(200.0, 800.0),
        )
        .with_description("Discretionary Wealth Vehicle."),
    );
    graph.add_entity(
        Entity::new(
            eid("n6"),
            EntityKind::Trust,
            "AK Italia Family Inv. Trust",
            Point::new(800.0, 800.0),
        )
        .with_description("Investment Accumulation Trust."),
    );

    let edges = [
        ("e1", "n1", "n2", RelationshipKind::Partner),
        ("e2", "n1", "n3", RelationshipKind::Director),
        ("e3", "n1", "n3", RelationshipKind::Shareholder),
        ("e4", "n2", "n3", RelationshipKind::Director),
        ("e5", "n2", "n3", RelationshipKind::Shareholder),
        ("e6", "n3", "n4", RelationshipKind::Shareholder),
        ("e7", "n1", "n4", RelationshipKind::Director),
        ("e8", "n2", "n4", RelationshipKind::Director),
        ("e9", "n3", "n6", RelationshipKind::Trustee),
        ("e10", "n1", "n5", RelationshipKind::Beneficiary),
        ("e11", "n2", "n5", RelationshipKind::Beneficiary),
        ("e12", "n1", "n6", RelationshipKind::Beneficiary),
    ];
    for (id, source, target, kind) in edges {
        graph
            .add_relationship(Relationship::new(rid(id), eid(source), eid(target), kind))
            .expect("fixture relationship endpoints resolve");
    }

    graph
}
