//! Benchmark scenarios — a config plus a script of geometry changes.
//!
//! 1. **Square settle** — 100×100 square at the origin, one geometry report
//! 2. **Resize burst** — the surface grows every few frames while still moving
//! 3. **Drifting origin** — the surface slides right, keeping its size
//! 4. **Undamped** — zero damping; the run only ends at the frame cap

use serde::{Deserialize, Serialize};
use wobble_mesh::{EdgeMask, Rect};
use wobble_solver::WobbleConfig;
use wobble_types::constants::DEFAULT_DT;

/// Which benchmark scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    SquareSettle,
    ResizeBurst,
    DriftingOrigin,
    Undamped,
}

impl ScenarioKind {
    /// Returns all scenario kinds.
    pub fn all() -> &'static [ScenarioKind] {
        &[
            ScenarioKind::SquareSettle,
            ScenarioKind::ResizeBurst,
            ScenarioKind::DriftingOrigin,
            ScenarioKind::Undamped,
        ]
    }

    /// Returns a human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::SquareSettle => "square_settle",
            ScenarioKind::ResizeBurst => "resize_burst",
            ScenarioKind::DriftingOrigin => "drifting_origin",
            ScenarioKind::Undamped => "undamped",
        }
    }

    /// Looks a scenario up by name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.name() == name)
    }
}

/// A geometry report delivered at a given frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometryEvent {
    pub frame: u32,
    pub rect: Rect,
}

/// A fully specified benchmark scenario.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub kind: ScenarioKind,
    pub config: WobbleConfig,
    /// Geometry reports in frame order. Frame 0 is the initial layout.
    pub script: Vec<GeometryEvent>,
    /// Upper bound on display frames.
    pub max_frames: u32,
    /// Frame interval (seconds).
    pub dt: f32,
}

impl Scenario {
    /// 100×100 square at the origin, default parameters, right edge curved.
    pub fn square_settle() -> Self {
        Self {
            kind: ScenarioKind::SquareSettle,
            config: WobbleConfig::default(),
            script: vec![GeometryEvent {
                frame: 0,
                rect: Rect::new(0.0, 0.0, 100.0, 100.0),
            }],
            max_frames: 500,
            dt: DEFAULT_DT,
        }
    }

    /// Grows a 120×80 card by 15 points of width every 6 frames, five times.
    pub fn resize_burst() -> Self {
        let script = (0..=5)
            .map(|i| GeometryEvent {
                frame: i * 6,
                rect: Rect::new(0.0, 0.0, 120.0 + 15.0 * i as f32, 80.0),
            })
            .collect();
        Self {
            kind: ScenarioKind::ResizeBurst,
            config: WobbleConfig::default().with_edges(EdgeMask::ALL),
            script,
            max_frames: 900,
            dt: DEFAULT_DT,
        }
    }

    /// Slides a 100×60 card 10 points right every 4 frames, ten times.
    pub fn drifting_origin() -> Self {
        let script = (0..=10)
            .map(|i| GeometryEvent {
                frame: i * 4,
                rect: Rect::new(10.0 * i as f32, 0.0, 100.0, 60.0),
            })
            .collect();
        Self {
            kind: ScenarioKind::DriftingOrigin,
            config: WobbleConfig::jelly().with_edges(EdgeMask::LEFT | EdgeMask::RIGHT),
            script,
            max_frames: 1200,
            dt: DEFAULT_DT,
        }
    }

    /// A square stretched once with no damping; never settles.
    pub fn undamped() -> Self {
        Self {
            kind: ScenarioKind::Undamped,
            config: WobbleConfig::undamped(),
            script: vec![
                GeometryEvent {
                    frame: 0,
                    rect: Rect::new(0.0, 0.0, 100.0, 100.0),
                },
                GeometryEvent {
                    frame: 1,
                    rect: Rect::new(0.0, 0.0, 140.0, 100.0),
                },
            ],
            max_frames: 600,
            dt: DEFAULT_DT,
        }
    }

    /// Create a scenario by kind.
    pub fn from_kind(kind: ScenarioKind) -> Self {
        match kind {
            ScenarioKind::SquareSettle => Self::square_settle(),
            ScenarioKind::ResizeBurst => Self::resize_burst(),
            ScenarioKind::DriftingOrigin => Self::drifting_origin(),
            ScenarioKind::Undamped => Self::undamped(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: WobbleConfig) -> Self {
        self.config = config;
        self
    }

    /// Frame of the last scripted geometry report.
    pub fn last_event_frame(&self) -> u32 {
        self.script.last().map_or(0, |e| e.frame)
    }
}
