//! Wobble surface — wires a geometry source, the simulator, a frame clock
//! and the two path consumers together.
//!
//! ```text
//! set_frame(rect) ──► simulator.on_geometry_changed ──► clock.resume
//! display_frame() ──► clock.next_frame ──► simulator.tick ──► build path
//!                       ──► fill sink + clip sink (same path)
//!                       ──► settled? clock.pause + simulator.did_come_to_rest
//! ```

use tracing::debug;
use wobble_mesh::{ClosedPath, CurvePathBuilder, Rect};
use wobble_solver::{FrameClock, WobbleConfig, WobbleSimulator};
use wobble_telemetry::{EventBus, EventKind, SurfaceEvent};
use wobble_types::WobbleResult;

use crate::sink::PathSink;

/// One wobbling surface.
pub struct WobbleSurface<C: FrameClock> {
    simulator: WobbleSimulator,
    clock: C,
    /// Draws the surface's own shape.
    fill: Box<dyn PathSink>,
    /// Restricts the surface's children to the same silhouette.
    clip: Box<dyn PathSink>,
    telemetry: Option<EventBus>,
    frame: u64,
}

impl<C: FrameClock> WobbleSurface<C> {
    /// Creates a surface with no geometry yet.
    pub fn new(
        config: WobbleConfig,
        clock: C,
        fill: Box<dyn PathSink>,
        clip: Box<dyn PathSink>,
    ) -> WobbleResult<Self> {
        Ok(Self {
            simulator: WobbleSimulator::new(config)?,
            clock,
            fill,
            clip,
            telemetry: None,
            frame: 0,
        })
    }

    /// Attaches a telemetry bus.
    pub fn with_telemetry(mut self, bus: EventBus) -> Self {
        self.telemetry = Some(bus);
        self
    }

    /// Geometry source entry point: the surface's layout changed.
    pub fn set_frame(&mut self, rect: Rect) -> WobbleResult<()> {
        let was_paused = self.clock.is_paused();
        self.simulator.on_geometry_changed(rect, &mut self.clock)?;

        let validated = self.simulator.control_points().rect();
        self.emit(EventKind::GeometryChanged {
            x: validated.x,
            y: validated.y,
            width: validated.width,
            height: validated.height,
        });
        if was_paused && !self.clock.is_paused() {
            self.emit(EventKind::ClockResumed);
        }
        self.flush_telemetry();
        Ok(())
    }

    /// Handles one display refresh.
    ///
    /// Returns the published outline, or `None` when the clock delivered no
    /// frame (paused) or the tick was absorbed.
    pub fn display_frame(&mut self) -> WobbleResult<Option<ClosedPath>> {
        let Some(dt) = self.clock.next_frame() else {
            return Ok(None);
        };

        let report = self.simulator.tick(dt);
        if !report.stepped {
            return Ok(None);
        }
        self.emit(EventKind::Tick {
            dt,
            motion: report.motion,
        });

        let path = self.simulator.build_path();
        self.publish(&path)?;

        if report.settled {
            self.clock.pause();
            self.simulator.did_come_to_rest();
            self.emit(EventKind::Settled {
                ticks: self.simulator.ticks(),
            });
            self.emit(EventKind::ClockPaused);
        }

        self.frame += 1;
        self.flush_telemetry();
        Ok(Some(path))
    }

    /// Pumps display frames until the clock pauses or `max_frames` frames
    /// have been delivered. Returns the number of frames handled.
    pub fn run_until_settled(&mut self, max_frames: u32) -> WobbleResult<u32> {
        let mut handled = 0;
        while handled < max_frames && !self.clock.is_paused() {
            if self.display_frame()?.is_none() {
                break;
            }
            handled += 1;
        }
        Ok(handled)
    }

    /// Applies new parameters (rebuilding the attachment set) and publishes
    /// a straight-edged outline of the current corners.
    pub fn reset(&mut self, config: WobbleConfig) -> WobbleResult<()> {
        self.simulator.reset(config)?;
        self.emit(EventKind::Reset {
            frequency_hz: config.frequency_hz,
            damping_ratio: config.damping_ratio,
            edges: config.edges.bits(),
        });

        if self.simulator.has_geometry() {
            let outline = CurvePathBuilder::outline(&self.simulator.mesh_frame());
            self.publish(&outline)?;
        }
        self.flush_telemetry();
        Ok(())
    }

    /// Flushes telemetry and finalizes both sinks.
    pub fn finalize(&mut self) -> WobbleResult<()> {
        if let Some(bus) = self.telemetry.as_mut() {
            bus.finalize();
        }
        self.fill.finalize()?;
        self.clip.finalize()?;
        debug!(frames = self.frame, "surface_finalized");
        Ok(())
    }

    #[inline]
    pub fn simulator(&self) -> &WobbleSimulator {
        &self.simulator
    }

    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    #[inline]
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Display frames handled so far.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    #[inline]
    pub fn fill_sink(&self) -> &dyn PathSink {
        self.fill.as_ref()
    }

    #[inline]
    pub fn clip_sink(&self) -> &dyn PathSink {
        self.clip.as_ref()
    }

    fn publish(&mut self, path: &ClosedPath) -> WobbleResult<()> {
        self.fill.submit(self.frame, path)?;
        self.clip.submit(self.frame, path)?;
        self.emit(EventKind::PathPublished {
            segments: path.segment_count() as u32,
            curves: path.curve_count() as u32,
        });
        Ok(())
    }

    fn emit(&self, kind: EventKind) {
        if let Some(bus) = &self.telemetry {
            bus.emit(SurfaceEvent::new(self.frame, kind));
        }
    }

    fn flush_telemetry(&mut self) {
        if let Some(bus) = self.telemetry.as_mut() {
            bus.flush();
        }
    }
}
