// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A workspace holds the baseline structure graph plus strategy scenarios;
//! graphs hold entities (parties) and their directed role relationships.

pub mod entity;
pub(crate) mod fixtures;
pub mod graph;
pub mod ids;
pub mod point;
pub mod relationship;
pub mod strategy;
pub mod workspace;

pub use entity::{Entity, EntityKind};
pub use graph::{Graph, GraphError};
pub use ids::{EntityId, Id, IdError, RelationshipId, StrategyId};
pub use point::Point;
pub use relationship::{Relationship, RelationshipKind};
pub use strategy::Strategy;
pub use workspace::Workspace;
