//! Default binary for the cluster ballistics engine

fn main() {
    println!("Cluster Ballistics v0.1.0");
    println!();
    println!("Deterministic 2D split-projectile trajectory engine.");
    println!("The library computes the three ballistic arcs of a projectile that");
    println!("splits mid-flight, either as final impacts or as sampled point paths.");
    println!();
    println!("For the full command-line interface, use:");
    println!("  cluster-cli --help");
    println!();
    println!("To use as a Rust library:");
    println!("  Add to Cargo.toml: cluster-ballistics = \"0.1\"");
}
