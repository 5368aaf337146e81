// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use regex::RegexBuilder;

use crate::model::{Entity, Graph};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    Substring,
    Regex,
}

/// One search hit, with which field matched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityMatch<'a> {
    pub entity: &'a Entity,
    pub matched_name: bool,
    pub matched_description: bool,
}

/// Searches entity names and descriptions. Entities come back in id order,
/// the graph's natural iteration order.
pub fn entity_search<'a>(
    graph: &'a Graph,
    needle: &str,
    mode: SearchMode,
    case_insensitive: bool,
) -> Result<Vec<EntityMatch<'a>>, SearchError> {
    let matcher: Box<dyn Fn(&str) -> bool> = match mode {
        SearchMode::Substring => {
            if case_insensitive {
                let needle_lower = needle.to_lowercase();
                Box::new(move |haystack: &str| haystack.to_lowercase().contains(&needle_lower))
            } else {
                let needle = needle.to_string();
                Box::new(move |haystack: &str| haystack.contains(&needle))
            }
        }
        SearchMode::Regex => {
            let regex = RegexBuilder::new(needle)
                .case_insensitive(case_insensitive)
                .build()
                .map_err(SearchError::BadPattern)?;
            Box::new(move |haystack: &str| regex.is_match(haystack))
        }
    };

    Ok(graph
        .entities()
        .values()
        .filter_map(|entity| {
            let matched_name = matcher(entity.name());
            let matched_description = matcher(entity.description());
            (matched_name || matched_description).then_some(EntityMatch {
                entity,
                matched_name,
                matched_description,
            })
        })
        .collect())
}

/// Ranks all entities against the needle by fuzzy similarity, best first.
/// Used by the command palette's jump-to-entity prompt; an empty needle
/// ranks nothing.
pub fn fuzzy_rank<'a>(graph: &'a Graph, needle: &str) -> Vec<(&'a Entity, f64)> {
    let needle = needle.trim();
    if needle.is_empty() {
        return Vec::new();
    }
    let needle_lower = needle.to_lowercase();

    let mut ranked: Vec<(&Entity, f64)> = graph
        .entities()
        .values()
        .map(|entity| {
            let score = rapidfuzz::fuzz::ratio(
                needle_lower.chars(),
                entity.name().to_lowercase().chars(),
            );
            (entity, score)
        })
        .collect();

    ranked.sort_by(|(a, score_a), (b, score_b)| {
        score_b
            .partial_cmp(score_a)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.entity_id().cmp(b.entity_id()))
    });
    ranked
}

#[derive(Debug)]
pub enum SearchError {
    BadPattern(regex::Error),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadPattern(error) => write!(f, "invalid search pattern: {error}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::BadPattern(error) => Some(error),
        }
    }
}
