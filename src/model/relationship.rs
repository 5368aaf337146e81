// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::fmt;

use super::ids::{EntityId, RelationshipId};

/// The closed set of directed roles one entity can hold toward another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RelationshipKind {
    Appointer,
    Beneficiary,
    Partner,
    Settlor,
    Shareholder,
    Trustee,
    Director,
    Secretary,
    Member,
}

impl RelationshipKind {
    pub const ALL: [RelationshipKind; 9] = [
        RelationshipKind::Appointer,
        RelationshipKind::Beneficiary,
        RelationshipKind::Partner,
        RelationshipKind::Settlor,
        RelationshipKind::Shareholder,
        RelationshipKind::Trustee,
        RelationshipKind::Director,
        RelationshipKind::Secretary,
        RelationshipKind::Member,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Appointer => "Appointer of",
            Self::Beneficiary => "Beneficiary of",
            Self::Partner => "Partner of",
            Self::Settlor => "Settlor of",
            Self::Shareholder => "Shareholder of",
            Self::Trustee => "Trustee of",
            Self::Director => "Director of",
            Self::Secretary => "Secretary of",
            Self::Member => "Member of",
        }
    }

    /// Case-insensitive label match against the closed set.
    pub fn parse_label(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(trimmed))
    }

    /// The role assigned when an operator connects two cards without picking
    /// one explicitly.
    pub fn default_connect() -> Self {
        Self::Shareholder
    }

    /// The next role in the closed set, wrapping; used by the retype control.
    pub fn next(self) -> Self {
        let index = Self::ALL
            .iter()
            .position(|kind| *kind == self)
            .unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A directed, typed role one entity holds with respect to another.
///
/// Multiple relationships between the same ordered or unordered pair are
/// expected (the multi-role case), not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Relationship {
    relationship_id: RelationshipId,
    source_id: EntityId,
    target_id: EntityId,
    kind: RelationshipKind,
    metadata: BTreeMap<String, String>,
}

impl Relationship {
    pub fn new(
        relationship_id: RelationshipId,
        source_id: EntityId,
        target_id: EntityId,
        kind: RelationshipKind,
    ) -> Self {
        Self {
            relationship_id,
            source_id,
            target_id,
            kind,
            metadata: BTreeMap::new(),
        }
    }

    pub fn relationship_id(&self) -> &RelationshipId {
        &self.relationship_id
    }

    pub fn source_id(&self) -> &EntityId {
        &self.source_id
    }

    pub fn target_id(&self) -> &EntityId {
        &self.target_id
    }

    pub fn kind(&self) -> RelationshipKind {
        self.kind
    }

    pub fn set_kind(&mut self, kind: RelationshipKind) {
        self.kind = kind;
    }

    pub fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut BTreeMap<String, String> {
        &mut self.metadata
    }

    pub fn set_metadata(&mut self, metadata: BTreeMap<String, String>) {
        self.metadata = metadata;
    }

    pub fn touches(&self, entity_id: &EntityId) -> bool {
        &self.source_id == entity_id || &self.target_id == entity_id
    }
}
