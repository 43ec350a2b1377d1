//! Wobble simulator — owns the spring network and steps it once per frame.
//!
//! ```text
//! Idle --(on_geometry_changed)--> Active --(clock reports rest)--> Idle
//! ```
//!
//! The simulator never decides on its own to go idle. Each tick returns a
//! [`TickReport`] carrying the settled signal; the clock collaborator acts
//! on it by pausing and calling [`WobbleSimulator::did_come_to_rest`].

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};
use wobble_mesh::{ClosedPath, ControlPointSet, CurvePathBuilder, MeshFrame, Rect};
use wobble_types::{EdgeIndex, PointId, Scalar, WobbleResult};

use crate::clock::FrameClock;
use crate::config::WobbleConfig;
use crate::spring::{AnchorTarget, SpringAttachment};
use crate::state::MeshState;

/// Lifecycle state of the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SimulatorState {
    #[default]
    Idle,
    Active,
}

/// Outcome of a single [`WobbleSimulator::tick`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// False when the tick was absorbed without stepping (idle, no geometry
    /// yet, or an unusable `dt`).
    pub stepped: bool,
    /// Largest per-point motion magnitude after the step.
    pub motion: Scalar,
    /// True when `motion` fell below the settle epsilon.
    pub settled: bool,
}

impl TickReport {
    fn skipped(motion: Scalar) -> Self {
        Self {
            stepped: false,
            motion,
            settled: false,
        }
    }
}

/// Spring-network simulator for one surface.
#[derive(Debug, Clone)]
pub struct WobbleSimulator {
    config: WobbleConfig,
    control_points: ControlPointSet,
    mesh: MeshState,
    attachments: Vec<SpringAttachment>,
    state: SimulatorState,
    has_geometry: bool,
    ticks: u64,
}

impl WobbleSimulator {
    /// Creates an idle simulator with no geometry yet.
    pub fn new(config: WobbleConfig) -> WobbleResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            control_points: ControlPointSet::default(),
            mesh: MeshState::default(),
            attachments: Vec::new(),
            state: SimulatorState::Idle,
            has_geometry: false,
            ticks: 0,
        })
    }

    /// Creates an idle simulator already resting on `rect`.
    pub fn with_rect(config: WobbleConfig, rect: Rect) -> WobbleResult<Self> {
        let mut simulator = Self::new(config)?;
        simulator.seed(rect.validated()?);
        Ok(simulator)
    }

    /// Geometry source entry point.
    ///
    /// Recomputes the anchors for `rect`, retargets the existing
    /// attachments in place, goes `Active` and arms the clock. Dynamic
    /// points keep their position and velocity; no step is performed.
    /// The first call places the points at their rest anchors.
    pub fn on_geometry_changed(
        &mut self,
        rect: Rect,
        clock: &mut dyn FrameClock,
    ) -> WobbleResult<()> {
        let rect = rect.validated()?;

        if self.has_geometry {
            self.control_points.update(rect);
            self.refresh_anchors();
        } else {
            self.seed(rect);
        }

        debug!(
            x = rect.x,
            y = rect.y,
            width = rect.width,
            height = rect.height,
            was = ?self.state,
            "geometry_changed"
        );

        self.state = SimulatorState::Active;
        clock.resume();
        Ok(())
    }

    /// Advances every dynamic point by `dt` seconds.
    ///
    /// Absorbed silently while `Idle`, before the first geometry, or for a
    /// non-positive / non-finite `dt`.
    pub fn tick(&mut self, dt: Scalar) -> TickReport {
        if self.state != SimulatorState::Active || !self.has_geometry {
            return TickReport::skipped(self.motion());
        }
        if !dt.is_finite() || dt <= 0.0 {
            return TickReport::skipped(self.motion());
        }

        self.refresh_anchors();

        let mut motion: Scalar = 0.0;
        for id in MeshState::ids() {
            let Some(spring) = self.spring_for(id) else {
                continue;
            };
            let point = self.mesh.point_mut(id);
            spring.step(point, dt);
            motion = motion.max(spring.motion(point));
        }

        self.ticks += 1;
        let settled = motion < self.config.settle_epsilon;
        trace!(tick = self.ticks, motion, settled, "wobble_tick");

        TickReport {
            stepped: true,
            motion,
            settled,
        }
    }

    /// Called by the clock collaborator once it has stopped delivering
    /// frames because the mesh is at rest.
    pub fn did_come_to_rest(&mut self) {
        if self.state == SimulatorState::Active {
            info!(ticks = self.ticks, "wobble_settled");
        }
        self.state = SimulatorState::Idle;
    }

    /// Applies a new configuration and rebuilds the attachment set.
    ///
    /// Dynamic points are placed back on their rest anchors with zero
    /// velocity. An invalid configuration is rejected and leaves the
    /// running mesh untouched.
    pub fn reset(&mut self, config: WobbleConfig) -> WobbleResult<()> {
        config.validate()?;
        self.config = config;
        if self.has_geometry {
            self.mesh = MeshState::at_rest(&self.control_points);
            self.rebuild_attachments();
        }
        debug!(
            frequency_hz = config.frequency_hz,
            damping_ratio = config.damping_ratio,
            edges = %config.edges,
            "wobble_reset"
        );
        Ok(())
    }

    #[inline]
    pub fn config(&self) -> &WobbleConfig {
        &self.config
    }

    #[inline]
    pub fn state(&self) -> SimulatorState {
        self.state
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.state == SimulatorState::Active
    }

    #[inline]
    pub fn has_geometry(&self) -> bool {
        self.has_geometry
    }

    #[inline]
    pub fn control_points(&self) -> &ControlPointSet {
        &self.control_points
    }

    #[inline]
    pub fn mesh(&self) -> &MeshState {
        &self.mesh
    }

    #[inline]
    pub fn attachments(&self) -> &[SpringAttachment] {
        &self.attachments
    }

    /// Ticks stepped since creation.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Current largest per-point motion magnitude, without stepping.
    pub fn motion(&self) -> Scalar {
        MeshState::ids()
            .filter_map(|id| self.spring_for(id).map(|s| s.motion(self.mesh.point(id))))
            .fold(0.0, Scalar::max)
    }

    /// Snapshot of every position the path builder needs.
    pub fn mesh_frame(&self) -> MeshFrame {
        MeshFrame {
            origin: self.control_points.rect().origin(),
            corners: *self.control_points.corners(),
            midpoints: self.mesh.midpoints(),
            curvature_centers: self.mesh.curvature_centers(),
        }
    }

    /// Outline for the current mesh with the configured edge mask.
    pub fn build_path(&self) -> ClosedPath {
        CurvePathBuilder::build(&self.mesh_frame(), self.config.edges)
    }

    fn seed(&mut self, rect: Rect) {
        self.control_points = ControlPointSet::from_rect(rect);
        self.mesh = MeshState::at_rest(&self.control_points);
        self.rebuild_attachments();
        self.has_geometry = true;
    }

    /// Midpoint `i` hangs off corners `i` and `i + 1`; curvature center `i`
    /// hangs off its inward rest anchor.
    fn rebuild_attachments(&mut self) {
        let WobbleConfig {
            frequency_hz,
            damping_ratio,
            ..
        } = self.config;

        self.attachments.clear();
        for edge in EdgeIndex::ALL {
            let midpoint = PointId::midpoint(edge);
            for corner in [edge, edge.next()] {
                self.attachments.push(SpringAttachment::new(
                    midpoint,
                    AnchorTarget::Corner(corner),
                    self.control_points.corner(corner),
                    frequency_hz,
                    damping_ratio,
                ));
            }
            self.attachments.push(SpringAttachment::new(
                PointId::curvature_center(edge),
                AnchorTarget::CurvatureAnchor(edge),
                self.control_points.curvature_anchor(edge),
                frequency_hz,
                damping_ratio,
            ));
        }
    }

    /// Moves every anchor to the live position of what it tracks.
    fn refresh_anchors(&mut self) {
        for attachment in &mut self.attachments {
            let anchor = match attachment.target {
                AnchorTarget::Corner(corner) => self.control_points.corner(corner),
                AnchorTarget::CurvatureAnchor(edge) => self.control_points.curvature_anchor(edge),
            };
            attachment.retarget(anchor);
        }
    }

    /// The single spring equivalent to all attachments on `id`.
    fn spring_for(&self, id: PointId) -> Option<SpringAttachment> {
        SpringAttachment::equivalent(self.attachments.iter().filter(|a| a.point == id))
    }
}
