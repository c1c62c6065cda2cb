//! Headless flame run.
//!
//! Steps the default fire scene for a number of frames and reports the live
//! particle count. Pass a JSON scene config path to override the defaults.
//!
//! Run with: `RUST_LOG=pyre=debug cargo run -- [frames] [config.json]`

use pyre::{FireScene, SceneConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let frames: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(300);

    let config = match args.next() {
        Some(path) => match SceneConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => SceneConfig::default(),
    };

    let mut scene = match FireScene::new(config) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    for frame in 1..=frames {
        scene.tick();
        if frame % 60 == 0 {
            log::info!(
                "frame {}: {} live particles, {} bytes of vertex data",
                frame,
                scene.particles().len(),
                scene.particles().vertex_bytes().len()
            );
        }
    }

    println!(
        "{} frames, {:.2}s simulated, {} particles spawned, {} alive",
        scene.time().frame(),
        scene.time().elapsed(),
        scene.particles().spawned_total(),
        scene.particles().len()
    );
    ExitCode::SUCCESS
}
