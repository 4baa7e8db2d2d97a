//! Request workload generators.
//!
//! Produces cylinder request sequences for demos and tests. Every
//! generated value lies on the given disk, so the sequences can be fed
//! straight into [`crate::engine::SimulationEngine::enqueue_all`].
//! Generators are generic over the RNG; seed it for reproducible runs.

use rand::Rng;

use crate::models::DiskGeometry;

/// Uniformly random cylinders across the whole disk.
pub fn uniform<R: Rng>(rng: &mut R, count: usize, geometry: DiskGeometry) -> Vec<u32> {
    (0..count)
        .map(|_| rng.random_range(0..geometry.cylinders()))
        .collect()
}

/// Cylinders clustered around hot spots.
///
/// Each request picks a random center and offsets it by up to `spread`
/// cylinders either way, clamped onto the disk. Models locality-heavy
/// workloads where SSTF and the SCAN family shine against FCFS. Falls
/// back to [`uniform`] when `centers` is empty.
pub fn clustered<R: Rng>(
    rng: &mut R,
    count: usize,
    geometry: DiskGeometry,
    centers: &[u32],
    spread: u32,
) -> Vec<u32> {
    if centers.is_empty() {
        return uniform(rng, count, geometry);
    }
    (0..count)
        .map(|_| {
            let center = i64::from(centers[rng.random_range(0..centers.len())]);
            let offset = rng.random_range(-i64::from(spread)..=i64::from(spread));
            let cylinder = (center + offset).max(0) as u32;
            geometry.clamp(cylinder)
        })
        .collect()
}
