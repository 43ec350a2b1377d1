//! Control point set — the twelve anchor positions derived from the
//! surface rectangle.
//!
//! Corners are rigid: they are the rectangle's vertices and are never
//! simulated. Midpoint and curvature-center anchors are the rest
//! positions the dynamic points are pulled towards.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use wobble_types::constants::EDGE_COUNT;
use wobble_types::EdgeIndex;

use crate::rect::Rect;

/// Anchor positions for one surface rectangle.
///
/// Recomputed on every geometry change; never touched by the physics step.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ControlPointSet {
    rect: Rect,
    /// Clockwise from top-left.
    corners: [Vec2; EDGE_COUNT],
    /// Edge midpoints; edge `i` spans corner `i` → corner `i + 1`.
    midpoint_anchors: [Vec2; EDGE_COUNT],
    /// Edge midpoints pushed inward by the inscribed radius.
    curvature_anchors: [Vec2; EDGE_COUNT],
}

impl ControlPointSet {
    /// Derives all anchors from `rect`.
    pub fn from_rect(rect: Rect) -> Self {
        let mut set = Self::default();
        set.update(rect);
        set
    }

    /// Recomputes every anchor for a new rectangle.
    pub fn update(&mut self, rect: Rect) {
        let Rect { x, y, width: w, height: h } = rect;
        let radius = rect.inscribed_radius();

        self.rect = rect;
        self.corners = [
            Vec2::new(x, y),
            Vec2::new(x + w, y),
            Vec2::new(x + w, y + h),
            Vec2::new(x, y + h),
        ];
        self.midpoint_anchors = [
            Vec2::new(x + w * 0.5, y),
            Vec2::new(x + w, y + h * 0.5),
            Vec2::new(x + w * 0.5, y + h),
            Vec2::new(x, y + h * 0.5),
        ];
        for edge in EdgeIndex::ALL {
            let i = edge.index();
            self.curvature_anchors[i] = self.midpoint_anchors[i] + Self::inward_normal(edge) * radius;
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[inline]
    pub fn corners(&self) -> &[Vec2; EDGE_COUNT] {
        &self.corners
    }

    #[inline]
    pub fn corner(&self, corner: EdgeIndex) -> Vec2 {
        self.corners[corner.index()]
    }

    #[inline]
    pub fn midpoint_anchors(&self) -> &[Vec2; EDGE_COUNT] {
        &self.midpoint_anchors
    }

    #[inline]
    pub fn midpoint_anchor(&self, edge: EdgeIndex) -> Vec2 {
        self.midpoint_anchors[edge.index()]
    }

    #[inline]
    pub fn curvature_anchors(&self) -> &[Vec2; EDGE_COUNT] {
        &self.curvature_anchors
    }

    #[inline]
    pub fn curvature_anchor(&self, edge: EdgeIndex) -> Vec2 {
        self.curvature_anchors[edge.index()]
    }

    /// Inward unit normal of `edge`.
    pub fn inward_normal(edge: EdgeIndex) -> Vec2 {
        match edge.index() {
            0 => Vec2::Y,
            1 => Vec2::NEG_X,
            2 => Vec2::NEG_Y,
            _ => Vec2::X,
        }
    }
}
