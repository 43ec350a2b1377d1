//! Strongly-typed identifiers for mesh entities.
//!
//! The dynamic points live in one arena: midpoints occupy slots `0..4`,
//! curvature centers occupy slots `4..8`. Both groups are indexed by the
//! edge they belong to.

use serde::{Deserialize, Serialize};

use crate::constants::EDGE_COUNT;

/// Index of an edge (and of the corner it starts from), clockwise from
/// the top edge: 0 = top, 1 = right, 2 = bottom, 3 = left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeIndex(pub u8);

impl EdgeIndex {
    /// All four edges in clockwise order.
    pub const ALL: [EdgeIndex; EDGE_COUNT] = [EdgeIndex(0), EdgeIndex(1), EdgeIndex(2), EdgeIndex(3)];

    /// Returns the raw index as `usize` for array indexing.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The edge (and corner) following this one clockwise.
    #[inline]
    pub fn next(self) -> Self {
        Self((self.0 + 1) % EDGE_COUNT as u8)
    }
}

/// Slot in the dynamic point arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointId(pub u32);

impl PointId {
    /// The midpoint of `edge`.
    #[inline]
    pub fn midpoint(edge: EdgeIndex) -> Self {
        Self(edge.0 as u32)
    }

    /// The curvature center of `edge`.
    #[inline]
    pub fn curvature_center(edge: EdgeIndex) -> Self {
        Self(edge.0 as u32 + EDGE_COUNT as u32)
    }

    /// Returns the raw index as `usize` for array indexing.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The edge this point belongs to.
    #[inline]
    pub fn edge(self) -> EdgeIndex {
        EdgeIndex((self.0 % EDGE_COUNT as u32) as u8)
    }

    /// Returns true for midpoint slots.
    #[inline]
    pub fn is_midpoint(self) -> bool {
        self.index() < EDGE_COUNT
    }
}

impl From<u32> for PointId {
    fn from(val: u32) -> Self {
        Self(val)
    }
}

impl From<u8> for EdgeIndex {
    fn from(val: u8) -> Self {
        Self(val % EDGE_COUNT as u8)
    }
}
