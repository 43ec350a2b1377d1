//! Integration tests for wobble-types.

use wobble_types::{EdgeIndex, PointId, WobbleError};

// ─── ID Tests ──────────────────────────────────────────────────

#[test]
fn point_id_slots() {
    let edge = EdgeIndex(2);
    assert_eq!(PointId::midpoint(edge).index(), 2);
    assert_eq!(PointId::curvature_center(edge).index(), 6);
    assert_eq!(PointId::curvature_center(edge).edge(), edge);
    assert!(PointId::midpoint(edge).is_midpoint());
    assert!(!PointId::curvature_center(edge).is_midpoint());
}

#[test]
fn edge_index_wraps() {
    assert_eq!(EdgeIndex(3).next(), EdgeIndex(0));
    assert_eq!(EdgeIndex(0).next(), EdgeIndex(1));
    assert_eq!(EdgeIndex::from(5u8), EdgeIndex(1));
}

#[test]
fn ids_are_serializable() {
    let id = PointId(7);
    let json = serde_json::to_string(&id).unwrap();
    let deserialized: PointId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, deserialized);
}

// ─── Error Tests ──────────────────────────────────────────────

#[test]
fn error_display() {
    let err = WobbleError::InvalidConfig("frequency must be positive".into());
    assert!(err.to_string().contains("frequency must be positive"));
}

#[test]
fn io_error_converts() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: WobbleError = io.into();
    assert!(err.to_string().starts_with("I/O error"));
}
