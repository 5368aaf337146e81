// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Boundary-aware edge geometry.
//!
//! Edges are drawn between card borders, not card centers: each endpoint is
//! pulled from the card center toward the other card until it crosses the
//! padded card boundary. Labels sit at the midpoint of the trimmed segment.

use crate::model::Point;

use super::{card_center, CARD_EDGE_PADDING, CARD_HEIGHT, CARD_WIDTH};

/// A rendered edge between two cards, trimmed to their padded borders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeSegment {
    pub from: Point,
    pub to: Point,
    pub label_anchor: Point,
}

/// Intersection of the ray from the card center at `position` toward
/// `toward` with the card's padded bounding box. Degenerate rays (both
/// centers coincide) fall back to the card center.
pub fn boundary_point(position: Point, toward: Point) -> Point {
    let center = card_center(position);
    let dx = toward.x - center.x;
    let dy = toward.y - center.y;
    if dx == 0.0 && dy == 0.0 {
        return center;
    }

    let half_width = CARD_WIDTH / 2.0 + CARD_EDGE_PADDING;
    let half_height = CARD_HEIGHT / 2.0 + CARD_EDGE_PADDING;

    let scale_x = if dx == 0.0 {
        f64::INFINITY
    } else {
        half_width / dx.abs()
    };
    let scale_y = if dy == 0.0 {
        f64::INFINITY
    } else {
        half_height / dy.abs()
    };
    let scale = scale_x.min(scale_y);

    Point::new(center.x + dx * scale, center.y + dy * scale)
}

/// Trims the center-to-center line between two cards to their padded
/// boundaries and anchors the label at its midpoint.
pub fn edge_segment(source_position: Point, target_position: Point) -> EdgeSegment {
    let source_center = card_center(source_position);
    let target_center = card_center(target_position);
    let from = boundary_point(source_position, target_center);
    let to = boundary_point(target_position, source_center);
    EdgeSegment {
        from,
        to,
        label_anchor: from.midpoint(to),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{boundary_point, edge_segment};
    use crate::layout::{card_center, CARD_EDGE_PADDING, CARD_HEIGHT, CARD_WIDTH};
    use crate::model::Point;

    const HALF_W: f64 = CARD_WIDTH / 2.0 + CARD_EDGE_PADDING;
    const HALF_H: f64 = CARD_HEIGHT / 2.0 + CARD_EDGE_PADDING;

    #[test]
    fn horizontal_ray_exits_through_the_side() {
        let position = Point::new(0.0, 0.0);
        let center = card_center(position);
        let exit = boundary_point(position, Point::new(center.x + 1000.0, center.y));
        assert_eq!(exit, Point::new(center.x + HALF_W, center.y));
    }

    #[test]
    fn vertical_ray_exits_through_the_top_or_bottom() {
        let position = Point::new(50.0, 50.0);
        let center = card_center(position);
        let exit = boundary_point(position, Point::new(center.x, center.y - 1000.0));
        assert_eq!(exit, Point::new(center.x, center.y - HALF_H));
    }

    #[rstest]
    #[case(1000.0, 0.0, HALF_W, 0.0)]
    #[case(-1000.0, 0.0, -HALF_W, 0.0)]
    #[case(0.0, 1000.0, 0.0, HALF_H)]
    #[case(0.0, -1000.0, 0.0, -HALF_H)]
    fn axis_rays_exit_through_the_facing_side(
        #[case] dx: f64,
        #[case] dy: f64,
        #[case] expect_dx: f64,
        #[case] expect_dy: f64,
    ) {
        let position = Point::new(40.0, -70.0);
        let center = card_center(position);
        let exit = boundary_point(position, Point::new(center.x + dx, center.y + dy));
        assert_eq!(exit, Point::new(center.x + expect_dx, center.y + expect_dy));
    }

    #[test]
    fn coincident_centers_fall_back_to_the_center() {
        let position = Point::new(10.0, 20.0);
        let center = card_center(position);
        assert_eq!(boundary_point(position, center), center);
    }

    #[test]
    fn boundary_points_lie_on_the_padded_box() {
        let position = Point::new(-120.0, 340.0);
        let center = card_center(position);
        for step in 0..32 {
            let angle = step as f64 * std::f64::consts::TAU / 32.0;
            let toward = Point::new(
                center.x + angle.cos() * 2000.0,
                center.y + angle.sin() * 2000.0,
            );
            let exit = boundary_point(position, toward);
            let on_x = ((exit.x - center.x).abs() - HALF_W).abs() < 1e-9;
            let on_y = ((exit.y - center.y).abs() - HALF_H).abs() < 1e-9;
            assert!(on_x || on_y, "exit {exit} not on the padded boundary");
            assert!((exit.x - center.x).abs() <= HALF_W + 1e-9);
            assert!((exit.y - center.y).abs() <= HALF_H + 1e-9);
        }
    }

    #[test]
    fn segment_trims_both_ends_and_centers_the_label() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1000.0, 0.0);
        let segment = edge_segment(a, b);

        let a_center = card_center(a);
        let b_center = card_center(b);
        assert_eq!(segment.from, Point::new(a_center.x + HALF_W, a_center.y));
        assert_eq!(segment.to, Point::new(b_center.x - HALF_W, b_center.y));
        assert_eq!(segment.label_anchor, segment.from.midpoint(segment.to));
    }

    #[test]
    fn overlapping_cards_still_yield_a_finite_segment() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 5.0);
        let segment = edge_segment(a, b);
        assert!(segment.from.x.is_finite() && segment.from.y.is_finite());
        assert!(segment.to.x.is_finite() && segment.to.y.is_finite());
    }
}
