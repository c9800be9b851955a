// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/qimcore

//! Noise attacks for robustness evaluation.
//!
//! These operate on plain sample arrays and are used to measure how well an
//! embedding survives channel degradation. Callers supply the RNG, so
//! attacks are reproducible with a seeded ChaCha20 generator.

use rand::Rng;

/// Replace each sample with probability `density` by salt (`max_value`) or
/// pepper (0), chosen with equal probability. Returns the noisy copy.
pub fn salt_pepper_noise<R: Rng + ?Sized>(
    image: &[f64],
    density: f64,
    max_value: f64,
    rng: &mut R,
) -> Vec<f64> {
    image
        .iter()
        .map(|&sample| {
            if rng.gen::<f64>() < density {
                if rng.gen::<bool>() {
                    max_value
                } else {
                    0.0
                }
            } else {
                sample
            }
        })
        .collect()
}

/// Add white Gaussian noise with standard deviation
/// `std(image) × percent_noise`, clamping the result to `[0, max_value]`.
/// Returns the noisy copy.
pub fn gaussian_noise<R: Rng + ?Sized>(
    image: &[f64],
    percent_noise: f64,
    max_value: f64,
    rng: &mut R,
) -> Vec<f64> {
    let sigma = std_deviation(image) * percent_noise;
    image
        .iter()
        .map(|&sample| (sample + sigma * standard_normal(rng)).clamp(0.0, max_value))
        .collect()
}

/// Population standard deviation.
fn std_deviation(image: &[f64]) -> f64 {
    if image.is_empty() {
        return 0.0;
    }
    let n = image.len() as f64;
    let mean = image.iter().sum::<f64>() / n;
    let variance = image.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / n;
    variance.sqrt()
}

/// One standard normal variate via the Box–Muller transform.
fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    // u1 in (0, 1] so the logarithm stays finite.
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}
