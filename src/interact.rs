// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pointer interaction state machine: card dragging, canvas panning,
//! click-to-select and two-click relationship connecting.
//!
//! The machine is driven by screen-space pointer events; hit-testing against
//! cards happens in graph space at the caller (the TUI knows cell metrics,
//! this module does not). Dragging preserves the grab offset so a card does
//! not jump to put its corner under the cursor. Connect mode survives
//! press/release cycles and resolves on the next click: a target completes
//! it, anything else cancels it.

use crate::model::{EntityId, Point, Relationship, RelationshipId, RelationshipKind, Workspace};
use crate::viewport::Viewport;

/// What the pointer is currently doing.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PointerMode {
    #[default]
    Idle,
    /// Moving a card. `grab_offset` is cursor-minus-card-origin in graph
    /// space, captured at press time.
    Dragging {
        entity_id: EntityId,
        grab_offset: Point,
    },
    /// Moving the camera. `last` is the previous cursor position in screen
    /// space.
    Panning { last: Point },
}

/// What a click resolved to, for the caller to surface (toast, sidebar).
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    /// Connect mode completed: a relationship was added to the active graph.
    Connected { relationship_id: RelationshipId },
    /// Connect mode was aborted by clicking the pending source again.
    ConnectCancelled,
    /// Plain selection toggle on an entity.
    SelectionToggled,
    /// Click on empty canvas: selection and any pending connect cleared.
    Cleared,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Interaction {
    mode: PointerMode,
    connecting_from_id: Option<EntityId>,
}

impl Interaction {
    pub fn mode(&self) -> &PointerMode {
        &self.mode
    }

    pub fn connecting_from_id(&self) -> Option<&EntityId> {
        self.connecting_from_id.as_ref()
    }

    /// Arms connect mode from the given source entity.
    pub fn start_connect(&mut self, entity_id: EntityId) {
        self.connecting_from_id = Some(entity_id);
    }

    pub fn cancel_connect(&mut self) {
        self.connecting_from_id = None;
    }

    /// Pointer pressed at `screen`. A hit on a card starts a drag; a miss
    /// starts a pan.
    pub fn pointer_down(
        &mut self,
        screen: Point,
        hit: Option<&EntityId>,
        workspace: &Workspace,
        viewport: &Viewport,
    ) {
        match hit {
            Some(entity_id) => {
                let Some(entity) = workspace.active_graph().entity(entity_id) else {
                    return;
                };
                let graph_cursor = viewport.screen_to_graph(screen);
                self.mode = PointerMode::Dragging {
                    entity_id: entity_id.clone(),
                    grab_offset: graph_cursor - entity.position(),
                };
            }
            None => {
                self.mode = PointerMode::Panning { last: screen };
            }
        }
    }

    /// Pointer moved to `screen` while held.
    pub fn pointer_move(
        &mut self,
        screen: Point,
        workspace: &mut Workspace,
        viewport: &mut Viewport,
    ) {
        match &mut self.mode {
            PointerMode::Idle => {}
            PointerMode::Dragging {
                entity_id,
                grab_offset,
            } => {
                let position = viewport.screen_to_graph(screen) - *grab_offset;
                let entity_id = entity_id.clone();
                workspace
                    .active_graph_mut()
                    .set_entity_position(&entity_id, position);
            }
            PointerMode::Panning { last } => {
                viewport.pan(screen.x - last.x, screen.y - last.y);
                *last = screen;
            }
        }
    }

    /// Pointer released: back to idle. Connect mode, if armed, stays armed.
    pub fn pointer_up(&mut self) {
        self.mode = PointerMode::Idle;
    }

    /// A click (press and release without significant movement). `hit` is
    /// the card under the cursor, if any; `mint_relationship_id` supplies a
    /// fresh id when the click completes a connection.
    pub fn click(
        &mut self,
        hit: Option<&EntityId>,
        workspace: &mut Workspace,
        mint_relationship_id: impl FnOnce() -> RelationshipId,
    ) -> ClickOutcome {
        match (hit, self.connecting_from_id.take()) {
            (Some(target_id), Some(source_id)) => {
                if *target_id == source_id {
                    return ClickOutcome::ConnectCancelled;
                }
                let relationship_id = mint_relationship_id();
                let relationship = Relationship::new(
                    relationship_id.clone(),
                    source_id,
                    target_id.clone(),
                    RelationshipKind::default_connect(),
                );
                match workspace.active_graph_mut().add_relationship(relationship) {
                    Ok(()) => ClickOutcome::Connected { relationship_id },
                    // Endpoints vanished between arming and clicking.
                    Err(_) => ClickOutcome::ConnectCancelled,
                }
            }
            (Some(entity_id), None) => {
                workspace.toggle_selected(entity_id);
                ClickOutcome::SelectionToggled
            }
            (None, _) => {
                // Canvas click clears both the selection and a pending connect.
                workspace.set_selected_entity_id(None);
                ClickOutcome::Cleared
            }
        }
    }
}
