//! Edge mask — which edges of the quadrilateral render curved.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use wobble_types::{EdgeIndex, WobbleError};

/// 4-bit flag set. A set flag renders its edge as a quadratic curve,
/// a clear flag as a straight segment.
///
/// Flag values follow `{Left, Top, Right, Bottom} = {0001, 0010, 0100, 1000}`.
/// Edges are numbered clockwise from the top, so [`EdgeMask::for_edge`]
/// maps edge 0 to `TOP` and edge 3 to `LEFT`.
///
/// Serializes as its integer bits and deserializes from either the bits or
/// a name list such as `"right|top"`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeMask(u8);

impl EdgeMask {
    pub const NONE: Self = Self(0b0000);
    pub const LEFT: Self = Self(0b0001);
    pub const TOP: Self = Self(0b0010);
    pub const RIGHT: Self = Self(0b0100);
    pub const BOTTOM: Self = Self(0b1000);
    pub const ALL: Self = Self(0b1111);

    /// Builds a mask from raw bits, ignoring anything above the low nibble.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// `(flags & edge) != 0`.
    #[inline]
    pub const fn is_set(self, edge: EdgeMask) -> bool {
        self.0 & edge.0 != 0
    }

    /// The flag of the edge running from corner `edge` to corner `edge + 1`.
    pub const fn for_edge(edge: EdgeIndex) -> Self {
        match edge.0 % 4 {
            0 => Self::TOP,
            1 => Self::RIGHT,
            2 => Self::BOTTOM,
            _ => Self::LEFT,
        }
    }

    /// Whether edge `edge` is curved.
    #[inline]
    pub const fn curves(self, edge: EdgeIndex) -> bool {
        self.is_set(Self::for_edge(edge))
    }

    /// Iterates all 16 possible masks.
    pub fn all_combinations() -> impl Iterator<Item = EdgeMask> {
        (0..=Self::ALL.0).map(EdgeMask)
    }
}

impl Default for EdgeMask {
    fn default() -> Self {
        Self::RIGHT
    }
}

impl BitOr for EdgeMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for EdgeMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for EdgeMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeMask({self})")
    }
}

impl fmt::Display for EdgeMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::NONE => return f.write_str("none"),
            Self::ALL => return f.write_str("all"),
            _ => {}
        }
        let names = [
            (Self::LEFT, "left"),
            (Self::TOP, "top"),
            (Self::RIGHT, "right"),
            (Self::BOTTOM, "bottom"),
        ];
        let set: Vec<&str> = names
            .iter()
            .filter(|(flag, _)| self.is_set(*flag))
            .map(|(_, name)| *name)
            .collect();
        f.write_str(&set.join("|"))
    }
}

impl FromStr for EdgeMask {
    type Err = WobbleError;

    /// Parses `"right"`, `"left|top"`, `"top,bottom"`, `"all"` or `"none"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut mask = Self::NONE;
        for name in s.split(['|', ',']).map(str::trim).filter(|n| !n.is_empty()) {
            mask |= match name.to_ascii_lowercase().as_str() {
                "none" => Self::NONE,
                "left" => Self::LEFT,
                "top" => Self::TOP,
                "right" => Self::RIGHT,
                "bottom" => Self::BOTTOM,
                "all" => Self::ALL,
                other => {
                    return Err(WobbleError::InvalidConfig(format!(
                        "Unknown edge '{other}'. Expected left, top, right, bottom, all or none"
                    )))
                }
            };
        }
        Ok(mask)
    }
}

impl Serialize for EdgeMask {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for EdgeMask {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Bits(u8),
            Names(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Bits(bits) if bits <= Self::ALL.0 => Ok(Self(bits)),
            Repr::Bits(bits) => Err(serde::de::Error::custom(format!(
                "edge mask {bits} has bits outside the low nibble"
            ))),
            Repr::Names(names) => names.parse().map_err(serde::de::Error::custom),
        }
    }
}
