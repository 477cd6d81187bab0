use anyhow::{ensure, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use volume::glam::{IVec3, Vec3};
use volume::{cast_between, cast_from, pick_voxel, Region, Volume};

#[derive(Parser)]
#[command(name = "voxtool")]
#[command(about = "Voxel volume raycasting playground", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Scene {
    /// Empty except for one dense voxel at (5,5,5)
    SingleVoxel,
    /// Solid walls on the x and y faces, open ends in z
    HollowBox,
    /// Everything past the x midplane is solid
    HalfFilled,
}

#[derive(Subcommand)]
enum Commands {
    /// Cast a ray between two points and report the first solid voxel
    Cast {
        /// Side length of the demo volume
        #[arg(long, default_value_t = 32)]
        size: i32,

        /// Demo scene to build
        #[arg(long, value_enum, default_value = "single-voxel")]
        scene: Scene,

        /// Ray start point as x,y,z
        #[arg(long, value_parser = parse_vec3)]
        from: Vec3,

        /// Ray end point as x,y,z
        #[arg(long, value_parser = parse_vec3)]
        to: Vec3,

        /// Densities above this value count as solid
        #[arg(long, default_value_t = 0)]
        threshold: i8,
    },

    /// Pick the first non-empty voxel along origin + direction
    Pick {
        /// Side length of the demo volume
        #[arg(long, default_value_t = 32)]
        size: i32,

        /// Demo scene to build
        #[arg(long, value_enum, default_value = "half-filled")]
        scene: Scene,

        /// Ray origin as x,y,z
        #[arg(long, value_parser = parse_vec3)]
        origin: Vec3,

        /// Ray direction as x,y,z; its length is the pick distance
        #[arg(long, value_parser = parse_vec3)]
        direction: Vec3,

        /// Voxel value treated as empty space
        #[arg(long, default_value_t = 0)]
        empty: i8,
    },

    /// Cast a fan of rays from the volume center and report hit statistics
    Sweep {
        /// Side length of the demo volume
        #[arg(long, default_value_t = 32)]
        size: i32,

        /// Demo scene to build
        #[arg(long, value_enum, default_value = "hollow-box")]
        scene: Scene,

        /// Length of each ray
        #[arg(long, default_value_t = 64.0)]
        length: f32,

        /// Densities above this value count as solid
        #[arg(long, default_value_t = 0)]
        threshold: i8,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Cast {
            size,
            scene,
            from,
            to,
            threshold,
        } => {
            let vol = build_scene(scene, size)?;
            info!("casting {from} -> {to} (threshold {threshold})");
            match cast_between(&vol, from, to, |v| v > threshold) {
                Some(hit) => {
                    println!("hit voxel {} (value {})", hit.voxel, hit.value);
                    if let Some(previous) = hit.previous {
                        println!("entered from {previous}");
                    }
                }
                None => println!("miss"),
            }
        }

        Commands::Pick {
            size,
            scene,
            origin,
            direction,
            empty,
        } => {
            let vol = build_scene(scene, size)?;
            info!("picking from {origin} along {direction}");
            match pick_voxel(&vol, origin, direction, empty) {
                Some(result) => {
                    println!("picked voxel {}", result.hit_voxel);
                    if let Some(previous) = result.previous_voxel {
                        println!("placement position {previous}");
                    }
                }
                None => println!("nothing picked"),
            }
        }

        Commands::Sweep {
            size,
            scene,
            length,
            threshold,
        } => {
            let vol = build_scene(scene, size)?;
            let center = Vec3::splat(size as f32 / 2.0);

            let mut hits = 0;
            let mut escapes = 0;
            for dx in -1..=1 {
                for dy in -1..=1 {
                    for dz in -1..=1 {
                        if dx == 0 && dy == 0 && dz == 0 {
                            continue;
                        }
                        let direction =
                            Vec3::new(dx as f32, dy as f32, dz as f32).normalize() * length;
                        match cast_from(&vol, center, direction, |v| v > threshold) {
                            Some(hit) => {
                                debug!("direction {direction} hit {}", hit.voxel);
                                hits += 1;
                            }
                            None => {
                                debug!("direction {direction} escaped");
                                escapes += 1;
                            }
                        }
                    }
                }
            }

            println!("{hits} hits, {escapes} escapes out of {} rays", hits + escapes);
        }
    }

    Ok(())
}

/// Build one of the demo volumes
fn build_scene(scene: Scene, size: i32) -> Result<Volume<i8>> {
    ensure!(size >= 8, "demo scenes need a side length of at least 8");

    let mut vol = Volume::new(Region::cube(IVec3::ZERO, size));
    match scene {
        Scene::SingleVoxel => {
            vol.set(IVec3::new(5, 5, 5), 100)?;
        }
        Scene::HollowBox => {
            for z in 0..size {
                for y in 0..size {
                    for x in 0..size {
                        let wall = x == 0 || x == size - 1 || y == 0 || y == size - 1;
                        let value = if wall { 100 } else { -100 };
                        vol.set(IVec3::new(x, y, z), value)?;
                    }
                }
            }
        }
        Scene::HalfFilled => {
            for z in 0..size {
                for y in 0..size {
                    for x in (size / 2 + 1)..size {
                        vol.set(IVec3::new(x, y, z), 100)?;
                    }
                }
            }
        }
    }
    Ok(vol)
}

/// Parse a Vec3 from a string like "0.5,16,31.5"
fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let parts: Vec<&str> = s.split(',').map(|p| p.trim()).collect();
    if parts.len() != 3 {
        return Err(format!("expected 3 components, got {}", parts.len()));
    }

    let x = parts[0].parse::<f32>().map_err(|e| e.to_string())?;
    let y = parts[1].parse::<f32>().map_err(|e| e.to_string())?;
    let z = parts[2].parse::<f32>().map_err(|e| e.to_string())?;

    Ok(Vec3::new(x, y, z))
}
