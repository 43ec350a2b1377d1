//! CLI command implementations.

use wobble_bench::metrics::BenchmarkMetrics;
use wobble_bench::runner::BenchmarkRunner;
use wobble_bench::scenarios::{Scenario, ScenarioKind};
use wobble_debug::snapshot::MeshSnapshot;
use wobble_mesh::{EdgeMask, PathSegment, Rect};
use wobble_render::{HeadlessSink, JsonPathExporter, PathSink, WobbleSurface};
use wobble_solver::{FrameClock, ManualFrameClock, WobbleConfig};
use wobble_telemetry::{EventBus, EventKind, VecSink};

/// Options for [`simulate`].
pub struct SimulateArgs<'a> {
    pub config_path: Option<&'a str>,
    pub width: f32,
    pub height: f32,
    pub stretch: Option<f32>,
    pub edges: Option<&'a str>,
    pub frames: u32,
    pub output_path: Option<&'a str>,
    pub snapshot_path: Option<&'a str>,
    pub print_events: bool,
}

/// Drive a headless surface from a config file.
pub fn simulate(args: SimulateArgs<'_>) -> Result<(), Box<dyn std::error::Error>> {
    println!("Wobble Simulation");
    println!("─────────────────");

    let mut config = match args.config_path {
        Some(path) => {
            println!("Config:    {path}");
            WobbleConfig::load(path)?
        }
        None => WobbleConfig::default(),
    };
    if let Some(edges) = args.edges {
        config = config.with_edges(edges.parse::<EdgeMask>()?);
    }

    println!("Frequency: {:.3} Hz", config.frequency_hz);
    println!("Damping:   {:.3}", config.damping_ratio);
    println!("Edges:     {}", config.edges);
    println!("Surface:   {}×{}", args.width, args.height);
    println!();

    let fill: Box<dyn PathSink> = match args.output_path {
        Some(path) => Box::new(JsonPathExporter::new(path)),
        None => Box::new(HeadlessSink::new()),
    };
    let clock = ManualFrameClock::default();
    let dt = f64::from(clock.frame_interval());

    let sink = VecSink::new();
    let log = sink.log();
    let mut bus = EventBus::new();
    bus.add_sink(Box::new(sink));

    let mut surface = WobbleSurface::new(config, clock, fill, Box::new(HeadlessSink::new()))?
        .with_telemetry(bus);

    surface.set_frame(Rect::new(0.0, 0.0, args.width, args.height))?;
    if let Some(width) = args.stretch {
        surface.display_frame()?;
        surface.set_frame(Rect::new(0.0, 0.0, width, args.height))?;
    }

    let handled = surface.run_until_settled(args.frames)?;
    surface.finalize()?;

    let simulator = surface.simulator();
    println!("Frames:    {}", surface.frame());
    println!("Ticks:     {}", simulator.ticks());
    println!("Motion:    {:.6e}", simulator.motion());
    if surface.clock().is_paused() {
        println!("Settled after {handled} frames.");
    } else {
        println!("Still moving after {handled} frames.");
    }

    let path = simulator.build_path();
    println!("Outline:   {}", path.to_svg_data());
    for (edge, segment) in path.segments.iter().enumerate() {
        if let PathSegment::Quad { control, .. } = segment {
            println!("  edge {edge}: control ({:.3}, {:.3})", control.x, control.y);
        }
    }

    if let Some(path) = args.output_path {
        println!("Paths written to: {path}");
    }

    if let Some(path) = args.snapshot_path {
        let sim_time = simulator.ticks() as f64 * dt;
        let snapshot = MeshSnapshot::capture(surface.frame(), sim_time, simulator);
        std::fs::write(path, snapshot.to_bytes()?)?;
        println!("Snapshot written to: {path}");
    }

    if args.print_events {
        println!();
        println!("Events:");
        let events = log.lock().map_err(|_| "telemetry log poisoned")?;
        for event in events.iter() {
            if !matches!(event.kind, EventKind::Tick { .. }) {
                println!("  [{:>5}] {:?}", event.frame, event.kind);
            }
        }
        let ticks = events
            .iter()
            .filter(|e| matches!(e.kind, EventKind::Tick { .. }))
            .count();
        println!("  ({ticks} tick events)");
    }

    Ok(())
}

/// Run benchmark suite.
pub fn benchmark(
    scenario_name: &str,
    output_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Wobble Benchmark Suite");
    println!("══════════════════════");
    println!();

    let scenarios: Vec<ScenarioKind> = if scenario_name == "all" {
        ScenarioKind::all().to_vec()
    } else {
        match ScenarioKind::from_name(scenario_name) {
            Some(kind) => vec![kind],
            None => {
                let available: Vec<&str> = ScenarioKind::all().iter().map(|k| k.name()).collect();
                eprintln!("Unknown scenario: {scenario_name}");
                eprintln!("Available: {}, all", available.join(", "));
                return Err("Unknown scenario".into());
            }
        }
    };

    let mut all_metrics = Vec::new();

    for &kind in &scenarios {
        let scenario = Scenario::from_kind(kind);

        println!(
            "Running: {} ({} geometry reports, up to {} frames)",
            kind.name(),
            scenario.script.len(),
            scenario.max_frames,
        );

        let metrics =
            BenchmarkRunner::run(&scenario).map_err(|e| format!("Benchmark failed: {e}"))?;

        println!("  Wall time:     {:.3}s", metrics.total_wall_time);
        println!("  Frames:        {}", metrics.frames_rendered);
        match metrics.settled_frame {
            Some(frame) => println!("  Settled at:    frame {frame}"),
            None => println!("  Settled at:    never"),
        }
        println!("  Avg frame:     {:.3}µs", metrics.avg_frame_time * 1e6);
        println!("  Peak motion:   {:.4}", metrics.peak_motion);
        println!();

        all_metrics.push(metrics);
    }

    if let Some(path) = output_path {
        let csv = BenchmarkMetrics::to_csv(&all_metrics);
        std::fs::write(path, &csv)?;
        println!("Results written to: {path}");
    } else {
        println!("CSV Output:");
        println!("{}", BenchmarkMetrics::to_csv(&all_metrics));
    }

    Ok(())
}

/// Inspect a mesh snapshot.
pub fn inspect(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Wobble Snapshot Inspector");
    println!("─────────────────────────");
    println!();

    let data = std::fs::read(path)?;
    let snapshot =
        MeshSnapshot::from_bytes(&data).map_err(|e| format!("Failed to read snapshot: {e}"))?;

    println!("Frame:        {}", snapshot.frame);
    println!("Sim time:     {:.4}s", snapshot.sim_time);
    println!("State:        {:?}", snapshot.state);
    println!(
        "Rect:         ({}, {}) {}×{}",
        snapshot.rect.x, snapshot.rect.y, snapshot.rect.width, snapshot.rect.height
    );
    println!("Points:       {}", snapshot.point_count());
    println!("Max speed:    {:.6e}", snapshot.max_speed());
    println!("Motion:       {:.6e}", snapshot.motion);

    for (i, p) in snapshot.positions.chunks_exact(2).enumerate() {
        let role = if i < 4 { "midpoint" } else { "curvature" };
        println!("  [{i}] {role:<9} ({:>9.3}, {:>9.3})", p[0], p[1]);
    }

    Ok(())
}

/// Validate a config.
pub fn validate(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Wobble Validator");
    println!("────────────────");
    println!();

    if !path.ends_with(".toml") {
        return Err(format!("Unsupported file type: {path} (expected .toml)").into());
    }

    println!("Validating config: {path}");
    let config = WobbleConfig::load(path)?;
    println!("  Frequency:      {} Hz", config.frequency_hz);
    println!("  Damping ratio:  {}", config.damping_ratio);
    println!("  Edges:          {}", config.edges);
    println!("  Settle epsilon: {}", config.settle_epsilon);
    println!("✅ Config is valid.");

    Ok(())
}
