//! Benchmark runner — drives a headless surface through a scenario.

use std::time::Instant;

use wobble_render::{HeadlessSink, WobbleSurface};
use wobble_solver::{FrameClock, ManualFrameClock};
use wobble_types::WobbleResult;

use crate::metrics::BenchmarkMetrics;
use crate::scenarios::{Scenario, ScenarioKind};

/// Runs benchmark scenarios and collects metrics.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Run a single scenario.
    ///
    /// Geometry reports are delivered at their scripted frame. Once the
    /// clock has paused and no report is left, the run ends early.
    pub fn run(scenario: &Scenario) -> WobbleResult<BenchmarkMetrics> {
        let mut surface = WobbleSurface::new(
            scenario.config,
            ManualFrameClock::new(scenario.dt),
            Box::new(HeadlessSink::new()),
            Box::new(HeadlessSink::new()),
        )?;

        let mut script = scenario.script.iter().peekable();
        let mut frame_times: Vec<f64> = Vec::with_capacity(scenario.max_frames as usize);
        let mut peak_motion: f32 = 0.0;
        let mut settled_frame = None;

        let total_start = Instant::now();

        for frame in 0..scenario.max_frames {
            while let Some(event) = script.next_if(|e| e.frame <= frame) {
                surface.set_frame(event.rect)?;
                settled_frame = None;
            }

            let start = Instant::now();
            if surface.display_frame()?.is_some() {
                frame_times.push(start.elapsed().as_secs_f64());
                peak_motion = peak_motion.max(surface.simulator().motion());
            }

            if surface.clock().is_paused() {
                settled_frame.get_or_insert(frame);
                if script.peek().is_none() {
                    break;
                }
            }
        }

        let total_wall_time = total_start.elapsed().as_secs_f64();
        let avg_frame_time = if frame_times.is_empty() {
            0.0
        } else {
            frame_times.iter().sum::<f64>() / frame_times.len() as f64
        };
        let max_frame_time = frame_times.iter().copied().fold(0.0, f64::max);

        surface.finalize()?;

        Ok(BenchmarkMetrics {
            scenario: scenario.kind.name().to_string(),
            total_wall_time,
            frames_rendered: frame_times.len() as u32,
            settled_frame,
            avg_frame_time,
            max_frame_time,
            peak_motion,
            final_motion: surface.simulator().motion(),
            curved_edges: surface.simulator().build_path().curve_count() as u32,
        })
    }

    /// Run all scenarios and return metrics for each.
    pub fn run_all() -> WobbleResult<Vec<BenchmarkMetrics>> {
        ScenarioKind::all()
            .iter()
            .map(|&kind| Self::run(&Scenario::from_kind(kind)))
            .collect()
    }
}
