// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only derivations over a graph: visual edge grouping, selection focus
//! and entity search.

pub mod focus;
pub mod grouping;
pub mod search;

pub use focus::focused_entity_ids;
pub use grouping::{grouped_edges, GroupedEdge, GroupedRole};
pub use search::{entity_search, fuzzy_rank, EntityMatch, SearchError, SearchMode};
