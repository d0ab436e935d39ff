/// Basic Split Trajectory Example
///
/// Demonstrates the canonical scenario: a horizontal launch from an elevated
/// start that splits 1.5 seconds into flight, with the three sub-projectiles
/// landing on the ground plane.

use cluster_ballistics::{simulate_full_arcs, simulate_impacts, LaunchInputs};

fn main() {
    println!("=== Basic Split Example ===\n");

    let inputs = LaunchInputs::default();

    println!("Launch Parameters:");
    println!("  Speed: {} unit/s", inputs.initial_speed);
    println!("  Angle: {}°", inputs.launch_angle_deg);
    println!(
        "  Start: ({}, {})",
        inputs.start_position.x, inputs.start_position.y
    );
    println!("  Gravity: {}", inputs.gravity);
    println!("  Split at: {} s", inputs.time_to_split);
    println!("  Split force: {}", inputs.split_force);
    println!("  Split angle: ±{}°", inputs.split_angle_deg);
    println!();

    // Fast path: impacts only
    let impacts = simulate_impacts(&inputs).expect("canonical scenario is valid");

    println!("Impacts at target elevation {}:", inputs.target_elevation);
    println!("  Line   | Time (s) | Landing x");
    println!("  -------|----------|----------");
    for (label, i) in [("main", 0), ("plus", 1), ("minus", 2)] {
        println!(
            "  {:>6} | {:8.3} | {:8.3}",
            label, impacts.times[i], impacts.positions[i].x
        );
    }
    println!();

    // Rendering path: sampled arcs
    let arcs = simulate_full_arcs(&inputs, 0.1).expect("canonical scenario is valid");

    println!("Sampled arcs at 0.1 s steps:");
    println!("  Pre-split arc: {} points", arcs.pre_split.len());
    for (label, arc) in ["main", "plus", "minus"].iter().zip(arcs.post_split.iter()) {
        let end = arc.last().unwrap();
        println!(
            "  {:>6} arc: {} points, ends at ({:.3}, {:.3})",
            label,
            arc.len(),
            end.x,
            end.y
        );
    }
}
