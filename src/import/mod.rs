// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! CRM payload import.
//!
//! Accepts the JSON export shape of an upstream CRM (camelCase field names,
//! free-form kind labels) and materializes a baseline graph from it.
//! Imported entities are laid out on a ring; relationships whose endpoints
//! did not survive the record pass are dropped. Source record ids are kept
//! in metadata under `crm_id` so later re-imports can be reconciled.

use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::Deserialize;

use crate::layout::ring_position;
use crate::model::{
    Entity, EntityId, EntityKind, Graph, IdError, Relationship, RelationshipId, RelationshipKind,
};

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CrmPayload {
    pub records: Vec<CrmRecord>,
    #[serde(default)]
    pub relationships: Vec<CrmRelationship>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CrmRecord {
    pub id: String,
    #[serde(rename = "sfId", default)]
    pub sf_id: Option<String>,
    #[serde(rename = "mappedType", default)]
    pub mapped_type: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CrmRelationship {
    pub id: String,
    #[serde(rename = "fromId")]
    pub from_id: String,
    #[serde(rename = "toId")]
    pub to_id: String,
    #[serde(rename = "mappedType", default)]
    pub mapped_type: Option<String>,
}

pub fn parse_payload(raw: &str) -> Result<CrmPayload, ImportError> {
    serde_json::from_str(raw).map_err(ImportError::BadJson)
}

/// Builds a baseline graph from the payload. Record order determines ring
/// placement; unknown kind labels fall back to `Company`, unknown role
/// labels to `Shareholder`. Relationships with unresolved endpoints or
/// identical endpoints are skipped.
pub fn import_graph(payload: &CrmPayload) -> Result<Graph, ImportError> {
    let mut graph = Graph::new();

    for (index, record) in payload.records.iter().enumerate() {
        let entity_id = EntityId::new(&record.id).map_err(|source| ImportError::BadId {
            id: record.id.clone(),
            source,
        })?;
        let kind = record
            .mapped_type
            .as_deref()
            .and_then(EntityKind::parse_label)
            .unwrap_or(EntityKind::Company);

        let mut entity = Entity::new(entity_id, kind, &record.name, ring_position(index));
        if let Some(description) = &record.description {
            entity.set_description(description);
        }
        if let Some(sf_id) = &record.sf_id {
            entity
                .metadata_mut()
                .insert("crm_id".to_string(), sf_id.clone());
        }
        for (key, value) in &record.fields {
            let rendered = match value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            entity.metadata_mut().insert(key.clone(), rendered);
        }
        graph.add_entity(entity);
    }

    for crm_relationship in &payload.relationships {
        let relationship_id =
            RelationshipId::new(&crm_relationship.id).map_err(|source| ImportError::BadId {
                id: crm_relationship.id.clone(),
                source,
            })?;
        let (Ok(source_id), Ok(target_id)) = (
            EntityId::new(&crm_relationship.from_id),
            EntityId::new(&crm_relationship.to_id),
        ) else {
            continue;
        };
        let kind = crm_relationship
            .mapped_type
            .as_deref()
            .and_then(RelationshipKind::parse_label)
            .unwrap_or(RelationshipKind::Shareholder);
        // Unresolved endpoints and self-loops are dropped, not fatal.
        let _ = graph.add_relationship(Relationship::new(
            relationship_id,
            source_id,
            target_id,
            kind,
        ));
    }

    Ok(graph)
}

#[derive(Debug)]
pub enum ImportError {
    BadJson(serde_json::Error),
    BadId { id: String, source: IdError },
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadJson(error) => write!(f, "payload is not valid JSON: {error}"),
            Self::BadId { id, source } => write!(f, "payload record id {id:?} is unusable: {source}"),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::BadJson(error) => Some(error),
            Self::BadId { source, .. } => Some(source),
        }
    }
}
