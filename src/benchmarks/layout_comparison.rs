//! Array-of-structs vs. struct-of-arrays transform throughput.
//!
//! Measures the same workload three ways: a combined-record baseline where
//! every pass drags annotation bytes through the cache, the split-storage
//! fast path over [`Collection::points_mut`], and the rayon-parallel variant
//! of that fast path.

use std::time::{Duration, Instant};

use rand::distributions::Uniform;
use rand::Rng;

use crate::collection::Collection;
use crate::config::{Transformf, Vector3f};
use crate::object::Object;
use crate::transform::{transform, Transformer};

/// Annotation sized to one cache line, so the baseline pass wastes most of
/// its memory bandwidth on metadata.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WideTag {
    pub id: u32,
    pub flags: u32,
    pub payload: [u8; 56],
}

impl Default for WideTag {
    fn default() -> Self {
        Self {
            id: 0,
            flags: 0,
            payload: [0; 56],
        }
    }
}

/// Benchmark parameters
#[derive(Debug, Clone)]
pub struct LayoutBenchConfig {
    pub entity_count: usize,
    pub iterations: usize,
}

impl Default for LayoutBenchConfig {
    fn default() -> Self {
        Self {
            entity_count: 1_000_000,
            iterations: 10,
        }
    }
}

/// Timing for one measured pass
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub name: &'static str,
    pub entity_count: usize,
    pub iterations: usize,
    pub elapsed: Duration,
}

impl BenchmarkResult {
    /// Transformed points per second across all iterations.
    pub fn throughput(&self) -> f64 {
        let total = (self.entity_count * self.iterations) as f64;
        total / self.elapsed.as_secs_f64()
    }
}

impl std::fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {:.2}ms for {} entities x {} iterations ({:.1}M points/s)",
            self.name,
            self.elapsed.as_secs_f64() * 1000.0,
            self.entity_count,
            self.iterations,
            self.throughput() / 1_000_000.0
        )
    }
}

/// The composed rotation-plus-translation used by every pass.
pub fn bench_transform() -> Transformer<impl Fn(Vector3f) -> Vector3f + Copy> {
    let m = Transformf::from_rotation_z(0.9)
        * Transformf::from_rotation_y(1.234)
        * Transformf::from_rotation_z(-43.0)
        * Transformf::from_translation(Vector3f::new(1.0, 1.0, 2.0));
    transform(m)
}

/// Generate a random point cloud with tags.
pub fn generate_entities(count: usize) -> Vec<Object<Vector3f, WideTag>> {
    let mut rng = rand::thread_rng();
    let dist = Uniform::new(0.0f32, 10_000.0);

    (0..count)
        .map(|i| {
            let point = Vector3f::new(rng.sample(dist), rng.sample(dist), rng.sample(dist));
            let tag = WideTag {
                id: i as u32,
                ..WideTag::default()
            };
            Object::new(point, tag)
        })
        .collect()
}

/// Run all three passes over the same data and return their timings:
/// combined records first, then the serial and parallel split-storage passes.
pub fn run_layout_comparison(config: &LayoutBenchConfig) -> Vec<BenchmarkResult> {
    let entities = generate_entities(config.entity_count);
    let trans = bench_transform();

    log::info!(
        "layout comparison: {} entities, {} iterations",
        config.entity_count,
        config.iterations
    );

    let mut results = Vec::with_capacity(3);

    // Baseline: combined records, every pass streams annotations too.
    let mut aos = entities.clone();
    let start = Instant::now();
    for _ in 0..config.iterations {
        for object in aos.iter_mut() {
            object.point = trans.apply(object.point);
        }
    }
    results.push(BenchmarkResult {
        name: "aos_combined_records",
        entity_count: config.entity_count,
        iterations: config.iterations,
        elapsed: start.elapsed(),
    });

    // Split storage, serial pass over the raw point array.
    let mut soa: Collection<Vector3f, WideTag> = entities.iter().copied().collect();
    let start = Instant::now();
    for _ in 0..config.iterations {
        trans.apply_points(soa.points_mut());
    }
    results.push(BenchmarkResult {
        name: "soa_points_serial",
        entity_count: config.entity_count,
        iterations: config.iterations,
        elapsed: start.elapsed(),
    });

    // Split storage, rayon-parallel pass.
    let mut soa_par: Collection<Vector3f, WideTag> = entities.into_iter().collect();
    let start = Instant::now();
    for _ in 0..config.iterations {
        trans.apply_points_par(soa_par.points_mut());
    }
    results.push(BenchmarkResult {
        name: "soa_points_parallel",
        entity_count: config.entity_count,
        iterations: config.iterations,
        elapsed: start.elapsed(),
    });

    for result in &results {
        log::info!("{}", result);
    }

    results
}

/// Speedup of every pass relative to the first (baseline) result.
pub fn speedup_over_baseline(results: &[BenchmarkResult]) -> Vec<(&'static str, f64)> {
    let Some(baseline) = results.first() else {
        return Vec::new();
    };
    let base = baseline.throughput();
    results
        .iter()
        .map(|r| (r.name, r.throughput() / base))
        .collect()
}
