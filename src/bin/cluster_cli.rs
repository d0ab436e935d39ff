use clap::{Args, Parser, Subcommand, ValueEnum};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::error::Error;

use cluster_ballistics::{
    simulate_full_arcs, simulate_impacts, simulate_impacts_batch, split_time_sweep,
    summarize_spread, ImpactSet, LaunchInputs, SampledArcs, SpreadSummary,
};

#[derive(Parser)]
#[command(name = "cluster")]
#[command(version = "0.1.0")]
#[command(about = "Deterministic split-projectile trajectory calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Launch parameters shared by every simulation subcommand.
#[derive(Args)]
struct LaunchArgs {
    /// Initial speed (unit/s)
    #[arg(short = 'v', long, default_value = "10.0")]
    speed: f64,

    /// Launch angle (degrees)
    #[arg(short = 'a', long, default_value = "0.0", allow_hyphen_values = true)]
    angle: f64,

    /// Start x position
    #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
    start_x: f64,

    /// Start y position
    #[arg(long, default_value = "50.0", allow_hyphen_values = true)]
    start_y: f64,

    /// Signed gravitational acceleration (negative pulls down)
    #[arg(short = 'g', long, default_value = "-9.81", allow_hyphen_values = true)]
    gravity: f64,

    /// Seconds of flight before the split event
    #[arg(short = 't', long, default_value = "1.5")]
    split_time: f64,

    /// Split impulse magnitude along the velocity direction
    #[arg(short = 'f', long, default_value = "1.5")]
    split_force: f64,

    /// Half-angle between the main line and each deviation (degrees)
    #[arg(short = 's', long, default_value = "10.0")]
    split_angle: f64,

    /// Target elevation (y of the impact plane)
    #[arg(short = 'e', long, default_value = "0.0", allow_hyphen_values = true)]
    target_elevation: f64,
}

impl LaunchArgs {
    fn to_inputs(&self) -> LaunchInputs {
        LaunchInputs {
            initial_speed: self.speed,
            launch_angle_deg: self.angle,
            start_position: Vector2::new(self.start_x, self.start_y),
            gravity: self.gravity,
            time_to_split: self.split_time,
            split_force: self.split_force,
            split_angle_deg: self.split_angle,
            target_elevation: self.target_elevation,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the three final impacts at the target elevation
    Impacts {
        #[command(flatten)]
        launch: LaunchArgs,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Calculate sampled arcs for the pre-split and post-split paths
    Arcs {
        #[command(flatten)]
        launch: LaunchArgs,

        /// Sampling time step (seconds)
        #[arg(long, default_value = "0.1")]
        step: f64,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,

        /// Full output (print every sampled point)
        #[arg(long)]
        full: bool,
    },

    /// Sweep the split time over a range and summarize the landing spread
    Sweep {
        #[command(flatten)]
        launch: LaunchArgs,

        /// First split time of the sweep (seconds)
        #[arg(long, default_value = "0.5")]
        from: f64,

        /// Last split time of the sweep (seconds)
        #[arg(long, default_value = "2.5")]
        to: f64,

        /// Number of candidates to evaluate
        #[arg(short = 'n', long, default_value = "21")]
        steps: usize,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,
    },

    /// Display engine information
    Info,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
    Table,
}

#[derive(Debug, Serialize, Deserialize)]
struct ImpactRow {
    line: String,
    time: f64,
    x: f64,
    y: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct ImpactsOutput {
    impacts: Vec<ImpactRow>,
}

#[derive(Debug, Serialize, Deserialize)]
struct PointRow {
    x: f64,
    y: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct ArcsOutput {
    pre_split: Vec<PointRow>,
    main: Vec<PointRow>,
    plus: Vec<PointRow>,
    minus: Vec<PointRow>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SweepOutput {
    num_candidates: usize,
    num_valid: usize,
    mean_main_x: f64,
    std_main_x: f64,
    min_main_x: f64,
    max_main_x: f64,
    mean_spread_width: f64,
}

const LINE_LABELS: [&str; 3] = ["main", "plus", "minus"];

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Impacts { launch, output } => {
            let impacts = simulate_impacts(&launch.to_inputs())?;
            display_impacts(&impacts, output)?;
        }

        Commands::Arcs {
            launch,
            step,
            output,
            full,
        } => {
            let arcs = simulate_full_arcs(&launch.to_inputs(), step)?;
            display_arcs(&arcs, output, full)?;
        }

        Commands::Sweep {
            launch,
            from,
            to,
            steps,
            output,
        } => {
            let candidates = split_time_sweep(&launch.to_inputs(), from, to, steps);
            let results = simulate_impacts_batch(&candidates);
            match summarize_spread(&results) {
                Some(summary) => display_sweep(&summary, output)?,
                None => return Err("no candidate in the sweep produced a valid impact".into()),
            }
        }

        Commands::Info => {
            println!("╔════════════════════════════════════════╗");
            println!("║      CLUSTER BALLISTICS v0.1.0        ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Deterministic 2D split-projectile      ║");
            println!("║ trajectory engine.                     ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Features:                              ║");
            println!("║ • Closed-form constant-gravity arcs    ║");
            println!("║ • Mid-flight three-way split event     ║");
            println!("║ • Exact-endpoint arc sampling          ║");
            println!("║ • Parallel candidate sweeps            ║");
            println!("╚════════════════════════════════════════╝");
        }
    }

    Ok(())
}

fn impact_rows(impacts: &ImpactSet) -> Vec<ImpactRow> {
    LINE_LABELS
        .iter()
        .enumerate()
        .map(|(i, label)| ImpactRow {
            line: label.to_string(),
            time: impacts.times[i],
            x: impacts.positions[i].x,
            y: impacts.positions[i].y,
        })
        .collect()
}

fn point_rows(arc: &[Vector2<f64>]) -> Vec<PointRow> {
    arc.iter().map(|p| PointRow { x: p.x, y: p.y }).collect()
}

fn display_impacts(impacts: &ImpactSet, format: OutputFormat) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            let result = ImpactsOutput {
                impacts: impact_rows(impacts),
            };
            println!("{}", serde_json::to_string_pretty(&result)?);
        }

        OutputFormat::Csv => {
            println!("line,time,x,y");
            for row in impact_rows(impacts) {
                println!("{},{:.4},{:.4},{:.4}", row.line, row.time, row.x, row.y);
            }
        }

        OutputFormat::Table => {
            println!("╔══════════════════════════════════════════╗");
            println!("║              IMPACT RESULTS              ║");
            println!("╠══════════╦════════════╦══════════════════╣");
            println!("║   Line   ║  Time (s)  ║  Landing x       ║");
            println!("╠══════════╬════════════╬══════════════════╣");
            for row in impact_rows(impacts) {
                println!("║ {:>8} ║ {:>10.4} ║ {:>16.4} ║", row.line, row.time, row.x);
            }
            println!("╚══════════╩════════════╩══════════════════╝");
        }
    }

    Ok(())
}

fn display_arcs(arcs: &SampledArcs, format: OutputFormat, full: bool) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            let result = ArcsOutput {
                pre_split: point_rows(&arcs.pre_split),
                main: point_rows(&arcs.post_split[0]),
                plus: point_rows(&arcs.post_split[1]),
                minus: point_rows(&arcs.post_split[2]),
            };
            println!("{}", serde_json::to_string_pretty(&result)?);
        }

        OutputFormat::Csv => {
            println!("arc,x,y");
            for p in &arcs.pre_split {
                println!("pre_split,{:.4},{:.4}", p.x, p.y);
            }
            for (arc, label) in arcs.post_split.iter().zip(LINE_LABELS.iter()) {
                for p in arc {
                    println!("{},{:.4},{:.4}", label, p.x, p.y);
                }
            }
        }

        OutputFormat::Table => {
            let split_point = arcs.pre_split.last().expect("arcs always carry endpoints");
            println!("╔══════════════════════════════════════════╗");
            println!("║               SAMPLED ARCS               ║");
            println!("╠══════════╦════════════╦══════════════════╣");
            println!("║   Arc    ║   Points   ║  End position    ║");
            println!("╠══════════╬════════════╬══════════════════╣");
            println!(
                "║ {:>8} ║ {:>10} ║ ({:>6.2},{:>6.2}) ║",
                "pre",
                arcs.pre_split.len(),
                split_point.x,
                split_point.y
            );
            for (arc, label) in arcs.post_split.iter().zip(LINE_LABELS.iter()) {
                let end = arc.last().expect("arcs always carry endpoints");
                println!(
                    "║ {:>8} ║ {:>10} ║ ({:>6.2},{:>6.2}) ║",
                    label,
                    arc.len(),
                    end.x,
                    end.y
                );
            }
            println!("╚══════════╩════════════╩══════════════════╝");

            if full {
                println!("\nFull Sampled Points:");
                println!("┌──────────┬──────────┬──────────┐");
                println!("│   Arc    │   X      │   Y      │");
                println!("├──────────┼──────────┼──────────┤");
                for p in &arcs.pre_split {
                    println!("│ {:>8} │ {:>8.2} │ {:>8.2} │", "pre", p.x, p.y);
                }
                for (arc, label) in arcs.post_split.iter().zip(LINE_LABELS.iter()) {
                    for p in arc {
                        println!("│ {:>8} │ {:>8.2} │ {:>8.2} │", label, p.x, p.y);
                    }
                }
                println!("└──────────┴──────────┴──────────┘");
            }
        }
    }

    Ok(())
}

fn display_sweep(summary: &SpreadSummary, format: OutputFormat) -> Result<(), Box<dyn Error>> {
    let result = SweepOutput {
        num_candidates: summary.num_candidates,
        num_valid: summary.num_valid,
        mean_main_x: summary.mean_main_x,
        std_main_x: summary.std_main_x,
        min_main_x: summary.min_main_x,
        max_main_x: summary.max_main_x,
        mean_spread_width: summary.mean_spread_width,
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }

        OutputFormat::Csv => {
            println!("metric,value");
            println!("num_candidates,{}", result.num_candidates);
            println!("num_valid,{}", result.num_valid);
            println!("mean_main_x,{:.4}", result.mean_main_x);
            println!("std_main_x,{:.4}", result.std_main_x);
            println!("min_main_x,{:.4}", result.min_main_x);
            println!("max_main_x,{:.4}", result.max_main_x);
            println!("mean_spread_width,{:.4}", result.mean_spread_width);
        }

        OutputFormat::Table => {
            println!("╔════════════════════════════════════════╗");
            println!("║         SPLIT TIME SWEEP               ║");
            println!(
                "║         {:>3} candidates, {:>3} valid      ║",
                result.num_candidates, result.num_valid
            );
            println!("╠════════════════════════════════════════╣");
            println!("║ MAIN LANDING X                         ║");
            println!("║ Mean:              {:>10.2}          ║", result.mean_main_x);
            println!("║ Std Dev:           {:>10.2}          ║", result.std_main_x);
            println!("║ Min:               {:>10.2}          ║", result.min_main_x);
            println!("║ Max:               {:>10.2}          ║", result.max_main_x);
            println!("╠════════════════════════════════════════╣");
            println!("║ DEVIATED SPREAD                        ║");
            println!("║ Mean width:        {:>10.2}          ║", result.mean_spread_width);
            println!("╚════════════════════════════════════════╝");
        }
    }

    Ok(())
}
