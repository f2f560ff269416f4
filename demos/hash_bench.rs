use farmhash64::{farmhash64, hash_batch, BatchConfig, BatchStats};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::time::Instant;

const KEYS_PER_BUCKET: usize = 50_000;
const ROUNDS: usize = 7;
const GEN_SEED: u64 = 42;

/// One row per length path: (label, min_len, max_len).
const BUCKETS: [(&str, usize, usize); 6] = [
    ("0-3", 0, 3),
    ("4-7", 4, 7),
    ("8-16", 8, 16),
    ("17-32", 17, 32),
    ("33-64", 33, 64),
    ("65-1024", 65, 1024),
];

struct SummaryStats {
    median: f64,
    p95: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("bucket,keys,mean_len,median_ns,p95_ns,mb_per_sec,batch_ms");

    for (idx, &(label, min_len, max_len)) in BUCKETS.iter().enumerate() {
        let keys = gen_random_keys(KEYS_PER_BUCKET, GEN_SEED ^ idx as u64, min_len, max_len);
        let total_bytes: usize = keys.iter().map(Vec::len).sum();

        let mut samples = Vec::with_capacity(ROUNDS);
        let mut sink = 0u64;
        for _ in 0..ROUNDS {
            let t0 = Instant::now();
            for k in &keys {
                sink ^= farmhash64(k);
            }
            samples.push(t0.elapsed().as_secs_f64() * 1e9 / keys.len() as f64);
        }
        std::hint::black_box(sink);
        let stats = summarize(&mut samples);

        let cfg = BatchConfig {
            min_parallel_keys: 0,
            ..BatchConfig::default()
        };
        let t0 = Instant::now();
        let hashes = hash_batch(&keys, &cfg)?;
        let batch_ms = t0.elapsed().as_secs_f64() * 1000.0;

        let mean_len = total_bytes as f64 / keys.len() as f64;
        let mb_per_sec = mean_len / stats.median * 1e9 / (1024.0 * 1024.0);
        println!(
            "{},{},{:.1},{:.2},{:.2},{:.1},{:.2}",
            label,
            keys.len(),
            mean_len,
            stats.median,
            stats.p95,
            mb_per_sec,
            batch_ms
        );

        if idx == BUCKETS.len() - 1 {
            BatchStats::collect(&keys, &hashes).print_stats();
        }
    }

    Ok(())
}

fn gen_random_keys(n: usize, seed: u64, min_len: usize, max_len: usize) -> Vec<Vec<u8>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut keys = Vec::with_capacity(n);
    while keys.len() < n {
        let len = rng.gen_range(min_len..=max_len);
        let mut key = vec![0u8; len];
        rng.fill_bytes(&mut key);
        keys.push(key);
    }
    keys
}

fn summarize(samples: &mut [f64]) -> SummaryStats {
    samples.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    SummaryStats {
        median: percentile_sorted(samples, 0.5),
        p95: percentile_sorted(samples, 0.95),
    }
}

fn percentile_sorted(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let idx = ((sorted.len() - 1) as f64 * q.clamp(0.0, 1.0)).round() as usize;
    sorted[idx]
}
