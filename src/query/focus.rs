// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use crate::model::{EntityId, Graph};

/// The focus set for a selection: the selected entity plus every direct
/// neighbor (either direction). Everything outside the set renders dimmed.
/// No selection means no focus set, and nothing is dimmed.
pub fn focused_entity_ids(graph: &Graph, selected: Option<&EntityId>) -> Option<BTreeSet<EntityId>> {
    let selected = selected?;
    let mut focused = BTreeSet::new();
    focused.insert(selected.clone());
    for relationship in graph.relationships() {
        if relationship.source_id() == selected {
            focused.insert(relationship.target_id().clone());
        } else if relationship.target_id() == selected {
            focused.insert(relationship.source_id().clone());
        }
    }
    Some(focused)
}
