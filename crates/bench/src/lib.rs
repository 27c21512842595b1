use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const RNG_SEED: u64 = 0x5EED_2026;

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// Random positive `i32` with the given magnitude bit length (1..=31).
pub fn random_i32_with_bits<R: Rng + ?Sized>(rng: &mut R, bits: u32) -> i32 {
    if bits == 0 {
        return 0;
    }

    let high_bit = (bits - 1).min(30);
    let min = 1_i32 << high_bit;
    let max = if bits >= 31 {
        i32::MAX
    } else {
        (1_i32 << bits) - 1
    };
    rng.random_range(min..=max)
}
