//! Wobble CLI — headless simulation, benchmarking, and inspection.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "wobble")]
#[command(version, about = "Wobble — spring-network engine for elastic surfaces")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Drive a headless surface until it settles.
    Simulate {
        /// Path to wobble config (TOML). Defaults are used when omitted.
        #[arg(short, long)]
        config: Option<String>,

        /// Surface width.
        #[arg(long, default_value_t = 100.0)]
        width: f32,

        /// Surface height.
        #[arg(long, default_value_t = 100.0)]
        height: f32,

        /// Width after the first frame, to set the surface in motion.
        #[arg(long)]
        stretch: Option<f32>,

        /// Curved edges, e.g. "right|bottom" or "all". Overrides the config.
        #[arg(short, long)]
        edges: Option<String>,

        /// Maximum display frames.
        #[arg(short, long, default_value_t = 600)]
        frames: u32,

        /// Write every published outline to this JSON file.
        #[arg(short, long)]
        output: Option<String>,

        /// Write a final mesh snapshot to this file.
        #[arg(long)]
        snapshot: Option<String>,

        /// Print the telemetry event log.
        #[arg(long)]
        events: bool,
    },

    /// Run benchmark suite.
    Benchmark {
        /// Which scenario to run (square_settle, resize_burst, drifting_origin, undamped, all).
        #[arg(short, long, default_value = "all")]
        scenario: String,

        /// Output CSV file path.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Inspect a mesh snapshot file.
    Inspect {
        /// Path to snapshot file.
        path: String,
    },

    /// Validate a wobble config.
    Validate {
        /// Path to config file (TOML).
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Simulate {
            config,
            width,
            height,
            stretch,
            edges,
            frames,
            output,
            snapshot,
            events,
        } => commands::simulate(commands::SimulateArgs {
            config_path: config.as_deref(),
            width,
            height,
            stretch,
            edges: edges.as_deref(),
            frames,
            output_path: output.as_deref(),
            snapshot_path: snapshot.as_deref(),
            print_events: events,
        }),
        Commands::Benchmark { scenario, output } => {
            commands::benchmark(&scenario, output.as_deref())
        }
        Commands::Inspect { path } => commands::inspect(&path),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
