// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::{SystemTime, UNIX_EPOCH};

use super::graph::Graph;
use super::ids::StrategyId;

/// A named what-if scenario: a full deep copy of the baseline graph taken at
/// creation time, diverging independently thereafter.
#[derive(Debug, Clone, PartialEq)]
pub struct Strategy {
    strategy_id: StrategyId,
    name: String,
    description: String,
    graph: Graph,
    created_at_millis: u64,
}

impl Strategy {
    pub fn new(strategy_id: StrategyId, name: impl Into<String>, graph: Graph) -> Self {
        let created_at_millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Self {
            strategy_id,
            name: name.into(),
            description: String::new(),
            graph,
            created_at_millis,
        }
    }

    pub fn strategy_id(&self) -> &StrategyId {
        &self.strategy_id
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

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut Graph {
        &mut self.graph
    }

    pub fn created_at_millis(&self) -> u64 {
        self.created_at_millis
    }
}
