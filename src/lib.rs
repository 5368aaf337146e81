// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Proteus: terminal ownership structure mapper with what-if strategy
//! scenarios.

pub mod generate;
pub mod import;
pub mod interact;
pub mod layout;
pub mod model;
pub mod ops;
pub mod query;
pub mod render;
pub mod tui;
pub mod viewport;
