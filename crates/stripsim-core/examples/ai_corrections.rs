//! AI Physics Correction Test Tool
//!
//! Drives a simulated quarter-mile pass and forwards each snapshot to an AI
//! physics endpoint, printing the correction factors that come back. Useful
//! for checking an endpoint deployment without the full simulator running.
//!
//! Usage:
//!   cargo run --example ai_corrections -- [OPTIONS]
//!
//! Options:
//!   --url URL         Endpoint origin (default: http://localhost:8080)
//!   --interval MS     Snapshot interval in ms (default: 250)
//!   --seed N          Seed for the simulated run (default: random)
//!   --turbo           Fit a turbocharger to the demo vehicle
//!   --nitrous HP      Fit a nitrous system with the given shot size

use stripsim_core::ai_physics::AiPhysicsClient;
use stripsim_core::demo::DragRunSimulator;
use stripsim_core::telemetry::EcuConfig;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();

    // Parse arguments
    let mut url = "http://localhost:8080".to_string();
    let mut interval_ms = 250u64;
    let mut seed: Option<u64> = None;
    let mut config = EcuConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--url" | "-u" => {
                i += 1;
                if i < args.len() {
                    url = args[i].clone();
                }
            }
            "--interval" | "-i" => {
                i += 1;
                if i < args.len() {
                    interval_ms = args[i].parse().unwrap_or(250);
                }
            }
            "--seed" | "-s" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().ok();
                }
            }
            "--turbo" => {
                config.has_turbo = true;
            }
            "--nitrous" => {
                i += 1;
                if i < args.len() {
                    config.has_nitrous = true;
                    config.nitrous_power = args[i].parse().unwrap_or(100.0);
                }
            }
            other => {
                eprintln!("Unknown option: {}", other);
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let client = AiPhysicsClient::new(&url);
    if !client.is_reachable().await {
        eprintln!("Warning: {} not reachable, expect neutral fallbacks", url);
    }

    let mut sim = match seed {
        Some(seed) => DragRunSimulator::with_seed(config, seed),
        None => DragRunSimulator::with_config(config),
    };

    println!("Posting snapshots to {}{}", url, stripsim_core::ai_physics::AI_PHYSICS_PATH);
    let mut elapsed_ms = 0u64;
    loop {
        elapsed_ms += interval_ms;
        let snapshot = sim.update(elapsed_ms);
        let result = client.fetch_corrections(&snapshot).await;
        let tag = if result.is_fallback() { "fallback" } else { "remote" };
        let factors = result.factors();

        println!(
            "{:>6}ms  {:>5.0} rpm  gear {}  {:>5.1} mph  [{}] grip x{:.2} drag x{:.2} traction x{:.2} {}",
            elapsed_ms,
            snapshot.rpm,
            snapshot.gear,
            snapshot.speed,
            tag,
            factors.grip_multiplier,
            factors.drag_multiplier,
            factors.traction_multiplier,
            factors.ai_notes,
        );

        if sim.is_finished() {
            println!("Run complete in {:.1}s", elapsed_ms as f64 / 1000.0);
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(interval_ms)).await;
    }
}
