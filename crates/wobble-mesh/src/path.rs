//! Closed outline made of line and quadratic-curve segments.

use std::fmt::Write as _;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// One segment of a [`ClosedPath`]. The segment starts where the previous
/// one ended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathSegment {
    /// Straight segment.
    Line { to: Vec2 },
    /// Quadratic Bézier segment.
    Quad { control: Vec2, to: Vec2 },
}

impl PathSegment {
    /// End point of the segment.
    #[inline]
    pub fn end(&self) -> Vec2 {
        match *self {
            PathSegment::Line { to } | PathSegment::Quad { to, .. } => to,
        }
    }

    #[inline]
    pub fn is_curve(&self) -> bool {
        matches!(self, PathSegment::Quad { .. })
    }

    /// Point at parameter `t ∈ [0, 1]` along the segment starting at `from`.
    pub fn eval(&self, from: Vec2, t: f32) -> Vec2 {
        match *self {
            PathSegment::Line { to } => from.lerp(to, t),
            PathSegment::Quad { control, to } => {
                let u = 1.0 - t;
                from * (u * u) + control * (2.0 * u * t) + to * (t * t)
            }
        }
    }
}

/// A closed outline in the surface's local drawing frame.
///
/// The wobble engine always produces exactly four segments, the last one
/// ending back at `start`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ClosedPath {
    pub start: Vec2,
    pub segments: Vec<PathSegment>,
}

impl ClosedPath {
    pub fn new(start: Vec2) -> Self {
        Self {
            start,
            segments: Vec::with_capacity(4),
        }
    }

    pub fn line_to(&mut self, to: Vec2) {
        self.segments.push(PathSegment::Line { to });
    }

    pub fn quad_to(&mut self, control: Vec2, to: Vec2) {
        self.segments.push(PathSegment::Quad { control, to });
    }

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Number of quadratic segments.
    pub fn curve_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_curve()).count()
    }

    /// Last coordinate of the path (the start when it has no segments).
    pub fn end(&self) -> Vec2 {
        self.segments.last().map_or(self.start, PathSegment::end)
    }

    /// True when the final segment lands exactly on the start point.
    pub fn is_closed(&self) -> bool {
        self.end() == self.start
    }

    /// The on-curve vertices: the start followed by every segment end.
    pub fn vertices(&self) -> Vec<Vec2> {
        std::iter::once(self.start)
            .chain(self.segments.iter().map(PathSegment::end))
            .collect()
    }

    /// Samples the outline as a polyline with `per_segment` points per segment.
    pub fn flatten(&self, per_segment: usize) -> Vec<Vec2> {
        let per_segment = per_segment.max(1);
        let mut points = Vec::with_capacity(1 + self.segments.len() * per_segment);
        points.push(self.start);
        let mut from = self.start;
        for segment in &self.segments {
            for step in 1..=per_segment {
                points.push(segment.eval(from, step as f32 / per_segment as f32));
            }
            from = segment.end();
        }
        points
    }

    /// SVG path data (`M`, `L`, `Q`, `Z`).
    pub fn to_svg_data(&self) -> String {
        let mut data = format!("M{} {}", self.start.x, self.start.y);
        for segment in &self.segments {
            // Writing into a String cannot fail.
            let _ = match *segment {
                PathSegment::Line { to } => write!(data, " L{} {}", to.x, to.y),
                PathSegment::Quad { control, to } => {
                    write!(data, " Q{} {} {} {}", control.x, control.y, to.x, to.y)
                }
            };
        }
        data.push_str(" Z");
        data
    }
}
