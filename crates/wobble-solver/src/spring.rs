//! Spring attachments — damped harmonic links between a dynamic point and
//! the anchor it is pulled toward.
//!
//! Attachments are parametrized the way UI spring behaviors usually are:
//! a natural frequency in Hz and a damping ratio. Unit mass is assumed, so
//! stiffness is `ω²` and the damping coefficient is `2ζω`, with
//! `ω = 2π · frequency`.
//!
//! Integration uses the closed-form solution of the damped oscillator over
//! each `dt` (anchor held fixed during the step). It is unconditionally
//! stable, converges to the anchor for any `ζ > 0`, and conserves energy
//! exactly for `ζ = 0`.

use std::f32::consts::TAU;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use wobble_types::constants::{CRITICAL_DAMPING_TOLERANCE, MAX_FREQUENCY_HZ, MIN_FREQUENCY_HZ};
use wobble_types::{EdgeIndex, PointId, Scalar};

use crate::state::DynamicPoint;

/// What an attachment's anchor follows from frame to frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnchorTarget {
    /// A rigid rectangle corner.
    Corner(EdgeIndex),
    /// The rest position of an edge's curvature center.
    CurvatureAnchor(EdgeIndex),
}

/// A single spring-damper link.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringAttachment {
    /// The dynamic point this attachment moves.
    pub point: PointId,
    /// What the anchor tracks.
    pub target: AnchorTarget,
    /// Current anchor position; refreshed every frame.
    pub anchor: Vec2,
    frequency_hz: Scalar,
    damping_ratio: Scalar,
}

impl SpringAttachment {
    /// Creates an attachment. Frequency is clamped to
    /// `[MIN_FREQUENCY_HZ, MAX_FREQUENCY_HZ]` and damping to `>= 0`.
    /// NaN falls back to the lower bounds.
    pub fn new(
        point: PointId,
        target: AnchorTarget,
        anchor: Vec2,
        frequency_hz: Scalar,
        damping_ratio: Scalar,
    ) -> Self {
        let frequency_hz = if frequency_hz.is_nan() {
            MIN_FREQUENCY_HZ
        } else {
            frequency_hz.clamp(MIN_FREQUENCY_HZ, MAX_FREQUENCY_HZ)
        };
        let damping_ratio = if damping_ratio.is_finite() {
            damping_ratio.max(0.0)
        } else {
            0.0
        };
        Self {
            point,
            target,
            anchor,
            frequency_hz,
            damping_ratio,
        }
    }

    #[inline]
    pub fn frequency_hz(&self) -> Scalar {
        self.frequency_hz
    }

    #[inline]
    pub fn damping_ratio(&self) -> Scalar {
        self.damping_ratio
    }

    /// `ω = 2π · f` in rad/s.
    #[inline]
    pub fn angular_frequency(&self) -> Scalar {
        TAU * self.frequency_hz
    }

    /// Moves the anchor. The point's state is left alone, so a moving
    /// target perturbs the spring instead of teleporting the point.
    #[inline]
    pub fn retarget(&mut self, anchor: Vec2) {
        self.anchor = anchor;
    }

    /// Acceleration this spring applies to `point` (unit mass).
    pub fn acceleration(&self, point: &DynamicPoint) -> Vec2 {
        let omega = self.angular_frequency();
        (self.anchor - point.position) * (omega * omega)
            - point.velocity * (2.0 * self.damping_ratio * omega)
    }

    /// Folds several attachments acting on the same point into one
    /// equivalent spring.
    ///
    /// Forces add: stiffness `Σ ω_i²`, damping `Σ 2ζ_i ω_i`, and the anchor
    /// is the stiffness-weighted mean of the individual anchors. Returns
    /// `None` for an empty set.
    ///
    /// Stiffnesses are summed relative to the stiffest spring so the
    /// weights stay in `(0, 1]` whatever the frequencies.
    pub fn equivalent<'a, I>(attachments: I) -> Option<SpringAttachment>
    where
        I: IntoIterator<Item = &'a SpringAttachment>,
        I::IntoIter: Clone,
    {
        let iter = attachments.into_iter();
        let first = iter.clone().next()?;
        let omega_max = iter
            .clone()
            .map(SpringAttachment::angular_frequency)
            .fold(0.0, Scalar::max);

        let mut relative_stiffness = 0.0;
        let mut damping = 0.0;
        let mut weighted_anchor = Vec2::ZERO;
        for a in iter {
            let omega = a.angular_frequency();
            let ratio = omega / omega_max;
            let weight = ratio * ratio;
            relative_stiffness += weight;
            damping += 2.0 * a.damping_ratio * omega;
            weighted_anchor += a.anchor * weight;
        }

        let omega = omega_max * relative_stiffness.sqrt();
        Some(SpringAttachment {
            point: first.point,
            target: first.target,
            anchor: weighted_anchor / relative_stiffness,
            frequency_hz: omega / TAU,
            damping_ratio: damping / (2.0 * omega),
        })
    }

    /// Advances `point` by `dt` seconds toward the anchor and returns the
    /// new position.
    pub fn step(&self, point: &mut DynamicPoint, dt: Scalar) -> Vec2 {
        let offset = point.position - self.anchor;
        let (offset, velocity) = damped_oscillation(
            offset,
            point.velocity,
            self.angular_frequency(),
            self.damping_ratio,
            dt,
        );
        point.position = self.anchor + offset;
        point.velocity = velocity;
        point.position
    }

    /// Motion magnitude of `point` relative to this spring:
    /// `sqrt(|v|² + ω²|x - anchor|²)`, in points per second.
    ///
    /// Constant for an undamped spring, decays with the oscillation
    /// envelope otherwise.
    pub fn motion(&self, point: &DynamicPoint) -> Scalar {
        let omega = self.angular_frequency();
        let displacement = (point.position - self.anchor) * omega;
        (point.velocity.length_squared() + displacement.length_squared()).sqrt()
    }
}

/// Closed-form state of a unit-mass damped oscillator after `t` seconds,
/// starting from displacement `x0` and velocity `v0`.
fn damped_oscillation(
    x0: Vec2,
    v0: Vec2,
    omega: Scalar,
    zeta: Scalar,
    t: Scalar,
) -> (Vec2, Vec2) {
    if (zeta - 1.0).abs() <= CRITICAL_DAMPING_TOLERANCE {
        // x = (x0 + (v0 + ω x0) t) e^{-ωt}
        let decay = (-omega * t).exp();
        let b = v0 + x0 * omega;
        let x = (x0 + b * t) * decay;
        let v = (v0 - b * (omega * t)) * decay;
        (x, v)
    } else if zeta < 1.0 {
        let omega_d = omega * (1.0 - zeta * zeta).sqrt();
        let decay = (-zeta * omega * t).exp();
        let (sin, cos) = (omega_d * t).sin_cos();
        let b = (v0 + x0 * (zeta * omega)) / omega_d;
        let x = (x0 * cos + b * sin) * decay;
        let v = (v0 * cos - (x0 * omega_d + b * (zeta * omega)) * sin) * decay;
        (x, v)
    } else {
        let root = omega * (zeta * zeta - 1.0).sqrt();
        let r1 = -zeta * omega + root;
        let r2 = -zeta * omega - root;
        let c2 = (v0 - x0 * r1) / (r2 - r1);
        let c1 = x0 - c2;
        let e1 = (r1 * t).exp();
        let e2 = (r2 * t).exp();
        let x = c1 * e1 + c2 * e2;
        let v = c1 * (r1 * e1) + c2 * (r2 * e2);
        (x, v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(zeta: Scalar, steps: usize) -> (Vec2, Vec2) {
        let mut x = Vec2::new(10.0, -4.0);
        let mut v = Vec2::new(0.0, 3.0);
        for _ in 0..steps {
            (x, v) = damped_oscillation(x, v, TAU * 3.0, zeta, 1.0 / 60.0);
        }
        (x, v)
    }

    #[test]
    fn every_regime_decays() {
        for zeta in [0.05, 0.3, 1.0, 2.5] {
            let (x, v) = run(zeta, 2000);
            assert!(x.length() < 1e-3, "zeta {zeta}: x = {x}");
            assert!(v.length() < 1e-3, "zeta {zeta}: v = {v}");
        }
    }

    #[test]
    fn undamped_keeps_energy() {
        let omega = TAU * 3.0;
        let energy = |x: Vec2, v: Vec2| v.length_squared() + omega * omega * x.length_squared();
        let start = energy(Vec2::new(10.0, -4.0), Vec2::new(0.0, 3.0));
        let (x, v) = run(0.0, 600);
        let end = energy(x, v);
        assert!(((end - start) / start).abs() < 1e-3, "start {start}, end {end}");
    }

    #[test]
    fn zero_dt_is_identity() {
        let (x, v) = damped_oscillation(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0), 10.0, 0.3, 0.0);
        assert!((x - Vec2::new(1.0, 2.0)).length() < 1e-6);
        assert!((v - Vec2::new(3.0, 4.0)).length() < 1e-6);
    }
}
