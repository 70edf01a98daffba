//! Scatter placement demo
//!
//! Runs the clustered placement pipeline against a synthetic flat world
//! (grass everywhere, a water pond in the middle) and prints the layout.
//!
//! Usage:
//!     scatter_demo [OPTIONS]
//!
//! Options:
//!     -c, --config <PATH>     Load a placement config from a RON file
//!     -n, --count <N>         Total object count (default: 40)
//!     --seed <SEED>           Fixed seed for the run (default: 42)
//!     -h, --help              Show this help message

use std::env;
use std::process::ExitCode;

use glam::Vec3;
use thicket::{
    run_placement, CountPolicy, ExclusionZone, PlacementArea, PlacementConfig, SeedSettings,
    SurfaceHit, SurfaceProbe, SurfaceRule, SurfaceTag,
};

const GRASS: SurfaceTag = SurfaceTag(1);
const WATER: SurfaceTag = SurfaceTag(2);

/// Flat terrain at y = 0 with a circular pond around the origin.
struct DemoWorld {
    pond_radius: f32,
}

impl SurfaceProbe for DemoWorld {
    fn cast(&self, origin: Vec3, _direction: Vec3, max_distance: f32) -> Option<SurfaceHit> {
        if origin.y < 0.0 || origin.y > max_distance {
            return None;
        }
        let tag = if origin.x * origin.x + origin.z * origin.z <= self.pond_radius * self.pond_radius
        {
            WATER
        } else {
            GRASS
        };
        Some(SurfaceHit {
            point: Vec3::new(origin.x, 0.0, origin.z),
            tag,
        })
    }
}

fn print_help() {
    eprintln!("scatter_demo - clustered placement demo");
    eprintln!();
    eprintln!("Usage: scatter_demo [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("    -c, --config <PATH>     Load a placement config from a RON file");
    eprintln!("    -n, --count <N>         Total object count (default: 40)");
    eprintln!("    --seed <SEED>           Fixed seed for the run (default: 42)");
    eprintln!("    -h, --help              Show this help message");
}

struct Args {
    config_path: Option<String>,
    count: usize,
    seed: u64,
}

fn parse_args() -> Result<Args, String> {
    let mut args = env::args().skip(1);
    let mut config_path = None;
    let mut count = 40usize;
    let mut seed = 42u64;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-c" | "--config" => {
                config_path = Some(args.next().ok_or("--config needs a path")?);
            }
            "-n" | "--count" => {
                let v = args.next().ok_or("--count needs a value")?;
                count = v.parse().map_err(|_| format!("bad count '{}'", v))?;
            }
            "--seed" => {
                let v = args.next().ok_or("--seed needs a value")?;
                seed = v.parse().map_err(|_| format!("bad seed '{}'", v))?;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => return Err(format!("unknown argument '{}'", other)),
        }
    }

    Ok(Args { config_path, count, seed })
}

fn default_config(count: usize, seed: u64) -> PlacementConfig {
    PlacementConfig {
        area: PlacementArea {
            center: Vec3::ZERO,
            half_extents: Vec3::new(60.0, 10.0, 60.0),
        },
        total_objects: count,
        cluster_count: CountPolicy::Fixed(5),
        objects_per_cluster: CountPolicy::Range { min: 4, max: 10 },
        min_cluster_distance: 18.0,
        cluster_radius: 7.0,
        radius_variability: 0.4,
        min_height_above_surface: 0.0,
        max_height_above_surface: 0.3,
        fallback_height: 0.0,
        surface_rule: SurfaceRule {
            accepted: [GRASS].into_iter().collect(),
            excluded: [WATER].into_iter().collect(),
        },
        seeding: SeedSettings::fixed(seed),
    }
}

fn main() -> ExitCode {
    thicket::logging::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("error: {}", msg);
            print_help();
            return ExitCode::FAILURE;
        }
    };

    let config = match &args.config_path {
        Some(path) => match PlacementConfig::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("error: failed to load '{}': {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => default_config(args.count, args.seed),
    };

    let world = DemoWorld { pond_radius: 15.0 };
    // One rectangular keep-out strip, as a host would carve around a road.
    let zones = [ExclusionZone {
        center: Vec3::new(0.0, 0.0, -40.0),
        size: Vec3::new(120.0, 20.0, 8.0),
    }];

    let outcome = run_placement(&config, &zones, &world);

    println!(
        "placed {}/{} points across {} clusters",
        outcome.realized(),
        outcome.requested,
        outcome.layout.clusters.len()
    );
    if outcome.constraints_degraded {
        println!("warning: placement constraints degraded (area too small for the requested spacing)");
    }
    for (i, cluster) in outcome.layout.clusters.iter().enumerate() {
        println!(
            "  cluster {} @ ({:7.2}, {:5.2}, {:7.2}): {} points",
            i, cluster.center.x, cluster.center.y, cluster.center.z,
            cluster.points.len()
        );
        for p in &cluster.points {
            println!("      ({:7.2}, {:5.2}, {:7.2})", p.x, p.y, p.z);
        }
    }

    // Single-point placement, as a host would use for one-off spawns.
    if let Some(p) = thicket::adjust_single(25.0, 25.0, &config, &world).point() {
        println!("single-point adjust at (25, 25) -> ({:.2}, {:.2}, {:.2})", p.x, p.y, p.z);
    }

    ExitCode::SUCCESS
}
