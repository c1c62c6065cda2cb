//! Integration tests for the particle simulator.
//!
//! These drive `ParticleSystem` through many frames and check the properties
//! that must hold after every update: emission rate, aging, culling, depth
//! order, and drag.

use pyre::prelude::*;
use pyre::Particle;
use std::collections::HashMap;

/// Stable identity for a particle across frames.
///
/// Everything in the key is fixed at spawn.
type Key = (u32, u32, u32);

fn key(p: &Particle) -> Key {
    (p.max_life.to_bits(), p.size.to_bits(), p.rotation_rate.to_bits())
}

fn snapshot(system: &ParticleSystem) -> HashMap<Key, Particle> {
    system.particles().iter().map(|p| (key(p), p.clone())).collect()
}

fn fire(config: ParticleSystemConfig, seed: u64) -> ParticleSystem {
    ParticleSystem::new(config)
        .expect("valid config")
        .with_lifecycle(Lifecycle::fire())
        .with_seed(seed)
}

// ============================================================================
// Emission
// ============================================================================

#[test]
fn test_end_to_end_first_ticks() {
    let mut system = fire(ParticleSystemConfig::default().with_rate(200.0).with_max_life(1.5), 1);

    system.update(0.016);
    assert_eq!(system.len(), 3);
    assert!((system.pending() - 0.2).abs() < 1e-4);
    let first: Vec<Key> = system.particles().iter().map(key).collect();

    system.update(0.016);
    assert_eq!(system.len(), 6);
    assert!((system.pending() - 0.4).abs() < 1e-4);

    // 94 * 0.016 > 1.5, the longest possible life.
    for _ in 2..94 {
        system.update(0.016);
    }
    let live = snapshot(&system);
    for k in &first {
        assert!(!live.contains_key(k), "first-spawned particle outlived max_life");
    }
}

fn spawned_over(ticks: &[f32], rate: f32) -> (u64, f64) {
    let mut system = fire(ParticleSystemConfig::default().with_rate(rate), 4);
    let mut total = 0.0_f64;
    for &dt in ticks {
        system.update(dt);
        total += dt as f64;
    }
    (system.spawned_total(), total)
}

#[test]
fn test_emission_does_not_drift_with_small_ticks() {
    let ticks = vec![0.001_f32; 2000];
    let (spawned, total) = spawned_over(&ticks, 200.0);
    let expected = (200.0 * total).floor() as i64;
    assert!((spawned as i64 - expected).abs() <= 1, "spawned {} expected {}", spawned, expected);
}

#[test]
fn test_emission_does_not_drift_with_large_ticks() {
    let ticks = vec![0.05_f32; 40];
    let (spawned, total) = spawned_over(&ticks, 200.0);
    let expected = (200.0 * total).floor() as i64;
    assert!((spawned as i64 - expected).abs() <= 1, "spawned {} expected {}", spawned, expected);
}

#[test]
fn test_emission_does_not_drift_with_uneven_ticks() {
    let pattern = [0.003_f32, 0.017, 0.011, 0.029, 0.0, 0.0165];
    let ticks: Vec<f32> = pattern.iter().copied().cycle().take(600).collect();
    let (spawned, total) = spawned_over(&ticks, 137.0);
    let expected = (137.0 * total).floor() as i64;
    assert!((spawned as i64 - expected).abs() <= 1, "spawned {} expected {}", spawned, expected);
}

// ============================================================================
// Aging and culling
// ============================================================================

#[test]
fn test_life_decreases_by_elapsed_and_culls_on_crossing() {
    let mut system = fire(ParticleSystemConfig::default(), 9);
    let ticks = [0.016_f32, 0.033, 0.1, 0.007, 0.25];

    for _ in 0..40 {
        for &dt in &ticks {
            let before = snapshot(&system);
            system.update(dt);
            let after = snapshot(&system);

            for (k, old) in &before {
                let expected = old.life - dt;
                match after.get(k) {
                    Some(p) => {
                        assert!(expected > 0.0, "particle survived with life {}", expected);
                        assert_eq!(p.life, expected);
                        assert!(p.life <= p.max_life);
                    }
                    None => {
                        assert!(expected <= 0.0, "particle removed early with life {}", expected)
                    }
                }
            }
        }
    }
}

#[test]
fn test_all_live_particles_have_positive_life() {
    let mut system = fire(ParticleSystemConfig::default(), 10);
    for _ in 0..200 {
        system.update(0.016);
        assert!(system.particles().iter().all(|p| p.life > 0.0 && p.life <= p.max_life));
    }
}

#[test]
fn test_idle_system_does_not_age() {
    let mut system = fire(ParticleSystemConfig::default(), 12);
    for _ in 0..10 {
        system.update(0.016);
    }
    let before = snapshot(&system);
    system.update(0.0);
    let after = snapshot(&system);

    assert_eq!(before.len(), after.len());
    for (k, old) in &before {
        assert_eq!(after[k].life, old.life);
    }
}

// ============================================================================
// Depth order
// ============================================================================

#[test]
fn test_particles_sorted_farthest_first() {
    let viewpoint = Vec3::new(35.0, 8.0, 36.0);
    let mut system = fire(ParticleSystemConfig::default(), 13)
        .with_emitter_position(Vec3::new(0.1, -2.2, -1.6))
        .with_viewpoint(viewpoint);

    for frame in 0..150 {
        if frame == 75 {
            // Viewpoint jumps to the other side; order must flip with it.
            system.set_viewpoint(Vec3::new(-35.0, 8.0, -36.0));
        }
        system.update(0.016);

        let eye = system.viewpoint();
        let distances: Vec<f32> = system
            .particles()
            .iter()
            .map(|p| p.position.distance_squared(eye))
            .collect();
        assert!(distances.windows(2).all(|w| w[0] >= w[1]));
    }
}

#[test]
fn test_vertex_buffer_follows_sorted_order() {
    let mut system =
        fire(ParticleSystemConfig::default(), 14).with_viewpoint(Vec3::new(0.0, 0.0, 10.0));
    for _ in 0..60 {
        system.update(0.016);
    }
    let vertices = system.vertices();
    assert_eq!(vertices.len(), system.len());
    for (p, v) in system.particles().iter().zip(vertices) {
        assert_eq!(v.position, p.position.to_array());
        assert_eq!(v.size, p.current_size);
        assert_eq!(v.color, [p.color.x, p.color.y, p.color.z, p.alpha]);
        assert_eq!(v.angle, p.rotation);
    }
}

// ============================================================================
// Motion
// ============================================================================

fn sign_kept(before: f32, after: f32) -> bool {
    after == 0.0 || before.signum() == after.signum()
}

#[test]
fn test_drag_never_flips_velocity() {
    let config = ParticleSystemConfig::default()
        .with_initial_velocity(Vec3::new(-0.7, 1.5, 0.3))
        .with_drag(40.0);
    let mut system = fire(config, 15);
    let ticks = [0.016_f32, 0.05, 0.2];

    for _ in 0..30 {
        for &dt in &ticks {
            let before = snapshot(&system);
            system.update(dt);
            for p in system.particles() {
                if let Some(old) = before.get(&key(p)) {
                    assert!(sign_kept(old.velocity.x, p.velocity.x));
                    assert!(sign_kept(old.velocity.y, p.velocity.y));
                    assert!(sign_kept(old.velocity.z, p.velocity.z));
                    assert!(p.velocity.abs().cmple(old.velocity.abs()).all());
                }
            }
        }
    }
}

#[test]
fn test_particles_rise_and_spin() {
    let mut system = fire(ParticleSystemConfig::default(), 16);
    system.update(0.016);
    let before = snapshot(&system);

    system.update(0.016);
    for p in system.particles() {
        if let Some(old) = before.get(&key(p)) {
            assert!(p.position.y > old.position.y);
            assert_eq!(p.position.x, old.position.x);
            assert_eq!(p.position.z, old.position.z);
            assert_eq!(p.rotation, old.rotation + p.rotation_rate);
        }
    }
}

#[test]
fn test_derived_attributes_use_life_fraction() {
    let lifecycle = Lifecycle::fire();
    let mut system = fire(ParticleSystemConfig::default(), 17);
    for _ in 0..50 {
        system.update(0.016);
        for p in system.particles() {
            let t = 1.0 - p.life / p.max_life;
            assert!((0.0..=1.0).contains(&t));
            let expected = lifecycle.sample(t);
            assert_eq!(p.alpha, expected.alpha);
            assert_eq!(p.current_size, p.size * expected.size_scale);
            assert!((0.0..=1.0).contains(&p.alpha));
        }
    }
}
