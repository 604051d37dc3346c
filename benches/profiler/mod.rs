// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Archscope-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Archscope and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::str::FromStr;
use std::time::Duration;

use criterion::Criterion;
use pprof::criterion::{Output, PProfProfiler};

/// Reads `name` from the environment, clamped to `[min, max]`.
fn env_clamped<T>(name: &str, default: T, min: T, max: T) -> T
where
    T: FromStr + Ord,
{
    std::env::var(name)
        .ok()
        .and_then(|raw| raw.trim().parse::<T>().ok())
        .unwrap_or(default)
        .clamp(min, max)
}

/// Criterion config with a pprof flamegraph profiler attached.
///
/// Tunables: `ARCHSCOPE_PROFILE_FREQ`, `ARCHSCOPE_BENCH_SAMPLES`,
/// `ARCHSCOPE_BENCH_WARMUP_SECS`, `ARCHSCOPE_BENCH_MEASURE_SECS`.
pub fn criterion() -> Criterion {
    let frequency = env_clamped("ARCHSCOPE_PROFILE_FREQ", 100i32, 1, 1000);
    let samples = env_clamped("ARCHSCOPE_BENCH_SAMPLES", 50usize, 10, 200);
    let warmup = env_clamped("ARCHSCOPE_BENCH_WARMUP_SECS", 2u64, 1, 60);
    let measure = env_clamped("ARCHSCOPE_BENCH_MEASURE_SECS", 5u64, 1, 120);

    Criterion::default()
        .sample_size(samples)
        .warm_up_time(Duration::from_secs(warmup))
        .measurement_time(Duration::from_secs(measure))
        .with_profiler(PProfProfiler::new(frequency, Output::Flamegraph(None)))
}
