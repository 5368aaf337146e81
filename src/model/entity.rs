// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;

use super::ids::EntityId;
use super::point::Point;

/// The closed set of party kinds a structure map can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Individual,
    Company,
    Trust,
    Smsf,
    Partnership,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Individual,
        EntityKind::Company,
        EntityKind::Trust,
        EntityKind::Smsf,
        EntityKind::Partnership,
    ];

    /// Display label, matching the labels external payloads use.
    pub fn label(self) -> &'static str {
        match self {
            Self::Individual => "Individual",
            Self::Company => "Company",
            Self::Trust => "Trust",
            Self::Smsf => "SMSF",
            Self::Partnership => "Partnership",
        }
    }

    /// Case-insensitive label match; `None` when the label is not in the
    /// closed set (callers decide the fallback policy).
    pub fn parse_label(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(trimmed))
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A party in the structure: individual, company, trust, SMSF or partnership.
///
/// `position` is the authoritative layout coordinate (graph space) and is
/// always defined once the entity exists.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    entity_id: EntityId,
    kind: EntityKind,
    name: String,
    description: String,
    position: Point,
    metadata: BTreeMap<String, String>,
}

impl Entity {
    pub fn new(
        entity_id: EntityId,
        kind: EntityKind,
        name: impl Into<String>,
        position: Point,
    ) -> Self {
        Self {
            entity_id,
            kind,
            name: name.into(),
            description: String::new(),
            position,
            metadata: BTreeMap::new(),
        }
    }

    pub fn entity_id(&self) -> &EntityId {
        &self.entity_id
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: EntityKind) {
        self.kind = kind;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut BTreeMap<String, String> {
        &mut self.metadata
    }
}
