// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pan/zoom camera over the graph plane.
//!
//! Screen coordinates map to graph coordinates through an offset + uniform
//! scale: `screen = graph * scale + offset`. Zoom is anchored at the cursor,
//! so the graph point under the pointer stays under the pointer across a
//! zoom step.

use crate::model::Point;

pub const MIN_SCALE: f64 = 0.05;
pub const MAX_SCALE: f64 = 5.0;

const RESET_SCALE: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    offset: Point,
    scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            offset: Point::new(0.0, 0.0),
            scale: 1.0,
        }
    }
}

impl Viewport {
    pub fn new(offset: Point, scale: f64) -> Self {
        Self {
            offset,
            scale: scale.clamp(MIN_SCALE, MAX_SCALE),
        }
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn screen_to_graph(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.offset.x) / self.scale,
            (screen.y - self.offset.y) / self.scale,
        )
    }

    pub fn graph_to_screen(&self, graph: Point) -> Point {
        Point::new(
            graph.x * self.scale + self.offset.x,
            graph.y * self.scale + self.offset.y,
        )
    }

    pub fn pan(&mut self, dx: f64, dy: f64) {
        self.offset.x += dx;
        self.offset.y += dy;
    }

    /// Multiplies the scale by `factor`, keeping the graph point under
    /// `cursor` fixed on screen. The clamp applies before the offset is
    /// recomputed, so hitting a scale bound never shifts the view.
    pub fn zoom_at(&mut self, cursor: Point, factor: f64) {
        let new_scale = (self.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
        let ratio = new_scale / self.scale;
        self.offset = Point::new(
            cursor.x - (cursor.x - self.offset.x) * ratio,
            cursor.y - (cursor.y - self.offset.y) * ratio,
        );
        self.scale = new_scale;
    }

    /// Keyboard zoom: scales about the viewport center.
    pub fn zoom_step(&mut self, factor: f64, width: f64, height: f64) {
        self.zoom_at(Point::new(width / 2.0, height / 2.0), factor);
    }

    /// Returns the camera to the home framing for a viewport of the given
    /// size: a quarter-offset origin at a slightly zoomed-out scale.
    pub fn reset(&mut self, width: f64, height: f64) {
        self.offset = Point::new(width / 4.0, height / 4.0);
        self.scale = RESET_SCALE;
    }

    /// The graph point currently at the center of a `width` x `height` view.
    pub fn visible_center(&self, width: f64, height: f64) -> Point {
        self.screen_to_graph(Point::new(width / 2.0, height / 2.0))
    }
}
