// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::graph::Graph;
use super::ids::{EntityId, StrategyId};
use super::strategy::Strategy;

/// The top-level container the TUI runs against: the baseline structure plus
/// zero or more strategy scenarios, and which scope is currently active.
///
/// Exactly one scope is effective at a time. Comparison mode forces the
/// baseline as the displayed/edited graph while a strategy stays logically
/// selected, so the operator can flip between "proposed" and "existing"
/// without losing their place.
#[derive(Debug, Clone, PartialEq)]
pub struct Workspace {
    baseline: Graph,
    strategies: Vec<Strategy>,
    active_strategy_id: Option<StrategyId>,
    comparing: bool,
    selected_entity_id: Option<EntityId>,
}

impl Workspace {
    pub fn new(baseline: Graph) -> Self {
        Self {
            baseline,
            strategies: Vec::new(),
            active_strategy_id: None,
            comparing: false,
            selected_entity_id: None,
        }
    }

    pub fn baseline(&self) -> &Graph {
        &self.baseline
    }

    pub fn baseline_mut(&mut self) -> &mut Graph {
        &mut self.baseline
    }

    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    pub fn strategy(&self, strategy_id: &StrategyId) -> Option<&Strategy> {
        self.strategies
            .iter()
            .find(|s| s.strategy_id() == strategy_id)
    }

    pub fn active_strategy_id(&self) -> Option<&StrategyId> {
        self.active_strategy_id.as_ref()
    }

    pub fn comparing(&self) -> bool {
        self.comparing
    }

    /// Deep-clones the baseline into a new strategy, makes it active and
    /// leaves comparison mode.
    pub fn create_strategy(
        &mut self,
        strategy_id: StrategyId,
        name: impl Into<String>,
    ) -> &Strategy {
        let strategy = Strategy::new(strategy_id.clone(), name, self.baseline.clone());
        self.strategies.push(strategy);
        self.active_strategy_id = Some(strategy_id);
        self.comparing = false;
        self.strategies.last().expect("strategy just pushed")
    }

    /// Selects the active scope: `None` is the baseline (and clears comparison
    /// mode). An unknown strategy id is ignored.
    pub fn select_scope(&mut self, strategy_id: Option<StrategyId>) {
        match strategy_id {
            None => {
                self.active_strategy_id = None;
                self.comparing = false;
            }
            Some(strategy_id) => {
                if self.strategy(&strategy_id).is_some() {
                    self.active_strategy_id = Some(strategy_id);
                }
            }
        }
    }

    /// Removes the strategy; when it was the active scope, the workspace
    /// falls back to the baseline.
    pub fn delete_strategy(&mut self, strategy_id: &StrategyId) {
        self.strategies.retain(|s| s.strategy_id() != strategy_id);
        if self.active_strategy_id.as_ref() == Some(strategy_id) {
            self.active_strategy_id = None;
            self.comparing = false;
        }
    }

    /// Comparison mode forces the baseline as the effective graph while a
    /// strategy stays selected. With no strategy selected it means nothing,
    /// so it is refused there.
    pub fn set_comparing(&mut self, comparing: bool) {
        self.comparing = comparing && self.active_strategy_id.is_some();
    }

    /// The effective graph: baseline when no strategy is active or comparison
    /// mode is on, else the active strategy's graph.
    pub fn active_graph(&self) -> &Graph {
        match self.active_strategy_for_edit() {
            Some(strategy) => strategy.graph(),
            None => &self.baseline,
        }
    }

    /// Mutable counterpart of [`active_graph`]; every store mutation is
    /// routed through this, which is what keeps scopes isolated.
    pub fn active_graph_mut(&mut self) -> &mut Graph {
        if self.comparing {
            return &mut self.baseline;
        }
        let active_strategy_id = self.active_strategy_id.clone();
        match active_strategy_id {
            Some(strategy_id) => {
                match self
                    .strategies
                    .iter_mut()
                    .find(|s| *s.strategy_id() == strategy_id)
                {
                    Some(strategy) => strategy.graph_mut(),
                    None => &mut self.baseline,
                }
            }
            None => &mut self.baseline,
        }
    }

    fn active_strategy_for_edit(&self) -> Option<&Strategy> {
        if self.comparing {
            return None;
        }
        let strategy_id = self.active_strategy_id.as_ref()?;
        self.strategy(strategy_id)
    }

    pub fn selected_entity_id(&self) -> Option<&EntityId> {
        self.selected_entity_id.as_ref()
    }

    pub fn set_selected_entity_id(&mut self, entity_id: Option<EntityId>) {
        self.selected_entity_id = entity_id;
    }

    /// Click-to-select semantics: selecting a new entity, or deselecting when
    /// the same entity is clicked again.
    pub fn toggle_selected(&mut self, entity_id: &EntityId) {
        if self.selected_entity_id.as_ref() == Some(entity_id) {
            self.selected_entity_id = None;
        } else {
            self.selected_entity_id = Some(entity_id.clone());
        }
    }

    /// Drops the selection when the selected entity no longer exists in the
    /// effective graph (scope switch or deletion).
    pub fn prune_selection(&mut self) {
        if let Some(selected) = &self.selected_entity_id {
            if self.active_graph().entity(selected).is_none() {
                self.selected_entity_id = None;
            }
        }
    }
}
