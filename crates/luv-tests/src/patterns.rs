//! Test sample generation
//!
//! Every generator is deterministic so failures reproduce.

use oxluv_core::Srgb;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Evenly spaced sRGB grid with `steps` samples per axis, corners included
pub fn srgb_grid(steps: usize) -> Vec<Srgb> {
    assert!(steps >= 2, "grid needs at least both endpoints");
    let scale = (steps - 1) as f64;
    let mut out = Vec::with_capacity(steps * steps * steps);
    for r in 0..steps {
        for g in 0..steps {
            for b in 0..steps {
                out.push(Srgb::new(
                    r as f64 / scale,
                    g as f64 / scale,
                    b as f64 / scale,
                ));
            }
        }
    }
    out
}

/// The 8 corners of the sRGB cube
pub fn cube_corners() -> Vec<Srgb> {
    srgb_grid(2)
}

/// Neutral ramp from black to white
pub fn gray_ramp(steps: usize) -> Vec<Srgb> {
    assert!(steps >= 2, "ramp needs at least both endpoints");
    let scale = (steps - 1) as f64;
    (0..steps)
        .map(|i| {
            let v = i as f64 / scale;
            Srgb::new(v, v, v)
        })
        .collect()
}

/// Uniformly random in-gamut sRGB colors
pub fn random_srgb(seed: u64, count: usize) -> Vec<Srgb> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| Srgb::new(rng.r#gen(), rng.r#gen(), rng.r#gen()))
        .collect()
}

/// Uniformly random linear-light triplets in [0, 1)³
pub fn random_linear(seed: u64, count: usize) -> Vec<[f64; 3]> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| [rng.r#gen(), rng.r#gen(), rng.r#gen()])
        .collect()
}
