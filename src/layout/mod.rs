// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Card geometry and automatic placement.
//!
//! Entities render as fixed-size cards anchored at their top-left position.
//! Placement helpers spread newly created entities so bulk inserts do not
//! stack on one point.

use crate::model::Point;

pub mod edges;

pub use edges::{boundary_point, edge_segment, EdgeSegment};

pub const CARD_WIDTH: f64 = 256.0;
pub const CARD_HEIGHT: f64 = 120.0;

/// Extra clearance between a card border and the point where an edge meets it.
pub const CARD_EDGE_PADDING: f64 = 15.0;

/// Center of the card anchored at `position`.
pub fn card_center(position: Point) -> Point {
    Point::new(position.x + CARD_WIDTH / 2.0, position.y + CARD_HEIGHT / 2.0)
}

/// Whether the graph-space point falls inside the card anchored at `position`.
pub fn card_contains(position: Point, point: Point) -> bool {
    point.x >= position.x
        && point.x <= position.x + CARD_WIDTH
        && point.y >= position.y
        && point.y <= position.y + CARD_HEIGHT
}

/// Grid placement for generated entities: three columns, wrapping downward.
pub fn spread_position(index: usize) -> Point {
    Point::new(
        300.0 + (index % 3) as f64 * 300.0,
        150.0 + (index / 3) as f64 * 250.0,
    )
}

/// Ring placement for imported entities: walks a circle of radius 350 in
/// 0.8-radian steps, which keeps consecutive cards from overlapping for
/// typical import sizes.
pub fn ring_position(index: usize) -> Point {
    let angle = index as f64 * 0.8;
    Point::new(400.0 + angle.cos() * 350.0, 400.0 + angle.sin() * 350.0)
}

#[cfg(test)]
mod tests {
    use super::{card_center, card_contains, ring_position, spread_position};
    use crate::model::Point;

    #[test]
    fn card_center_offsets_by_half_the_card() {
        assert_eq!(
            card_center(Point::new(100.0, 200.0)),
            Point::new(228.0, 260.0)
        );
    }

    #[test]
    fn card_contains_is_inclusive_of_the_border() {
        let position = Point::new(0.0, 0.0);
        assert!(card_contains(position, Point::new(0.0, 0.0)));
        assert!(card_contains(position, Point::new(256.0, 120.0)));
        assert!(!card_contains(position, Point::new(256.1, 60.0)));
        assert!(!card_contains(position, Point::new(-0.1, 60.0)));
    }

    #[test]
    fn spread_walks_a_three_column_grid() {
        assert_eq!(spread_position(0), Point::new(300.0, 150.0));
        assert_eq!(spread_position(1), Point::new(600.0, 150.0));
        assert_eq!(spread_position(2), Point::new(900.0, 150.0));
        assert_eq!(spread_position(3), Point::new(300.0, 400.0));
        assert_eq!(spread_position(4), Point::new(600.0, 400.0));
    }

    #[test]
    fn ring_positions_stay_on_the_circle() {
        for index in 0..24 {
            let p = ring_position(index);
            let r = ((p.x - 400.0).powi(2) + (p.y - 400.0).powi(2)).sqrt();
            assert!((r - 350.0).abs() < 1e-9);
        }
    }
}
