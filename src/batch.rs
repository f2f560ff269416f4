//! Hashing many independent keys at once.

use crate::word::mix_64_to_32;
use hashbrown::HashSet;
use std::ffi::OsStr;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use rayon::ThreadPoolBuilder;
use thiserror::Error;

/// Configuration for batch hashing
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Hash on a rayon pool when the batch is large enough.
    pub parallel: bool,
    /// Batches smaller than this are hashed on the calling thread.
    pub min_parallel_keys: usize,
    /// Worker threads for the pool.
    pub threads: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel: cfg!(feature = "parallel"),
            min_parallel_keys: 4096,
            threads: detect_threads(),
        }
    }
}

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("parallel batch needs at least one thread")]
    NoThreads,
    #[cfg(feature = "parallel")]
    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// FarmHash64 of every key, in input order.
pub fn hash_batch<K>(keys: &[K], config: &BatchConfig) -> Result<Vec<u64>, BatchError>
where
    K: AsRef<[u8]> + Sync,
{
    if !config.parallel || keys.len() < config.min_parallel_keys {
        return Ok(hash_sequential(keys));
    }
    if cfg!(feature = "parallel") && config.threads == 0 {
        return Err(BatchError::NoThreads);
    }
    hash_with_pool(keys, config)
}

/// FarmHash32 of every key, in input order.
pub fn hash_batch32<K>(keys: &[K], config: &BatchConfig) -> Result<Vec<u32>, BatchError>
where
    K: AsRef<[u8]> + Sync,
{
    Ok(hash_batch(keys, config)?
        .into_iter()
        .map(mix_64_to_32)
        .collect())
}

fn hash_sequential<K: AsRef<[u8]>>(keys: &[K]) -> Vec<u64> {
    keys.iter().map(|k| crate::farmhash64(k.as_ref())).collect()
}

#[cfg(feature = "parallel")]
fn hash_with_pool<K>(keys: &[K], config: &BatchConfig) -> Result<Vec<u64>, BatchError>
where
    K: AsRef<[u8]> + Sync,
{
    let pool = ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;
    Ok(pool.install(|| {
        keys.par_iter()
            .map(|k| crate::farmhash64(k.as_ref()))
            .collect()
    }))
}

#[cfg(not(feature = "parallel"))]
fn hash_with_pool<K>(keys: &[K], _config: &BatchConfig) -> Result<Vec<u64>, BatchError>
where
    K: AsRef<[u8]> + Sync,
{
    Ok(hash_sequential(keys))
}

fn detect_threads() -> usize {
    let from_env = std::env::var_os("FARMHASH_THREADS");
    if let Some(n) = parse_threads(from_env.as_deref()) {
        return n;
    }
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Thread count from a `FARMHASH_THREADS` value. Zero is clamped to one.
fn parse_threads(value: Option<&OsStr>) -> Option<usize> {
    let parsed = value?.to_string_lossy().trim().parse::<usize>().ok()?;
    Some(parsed.max(1))
}

/// Batch statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchStats {
    pub keys: usize,
    pub bytes: usize,
    pub unique: usize,
}

impl BatchStats {
    /// `hashes[i]` must be the fingerprint of `keys[i]`.
    pub fn collect<K: AsRef<[u8]>>(keys: &[K], hashes: &[u64]) -> Self {
        assert_eq!(
            keys.len(),
            hashes.len(),
            "BatchStats::collect: keys and hashes differ in length"
        );
        let mut seen: HashSet<u64> = HashSet::with_capacity(hashes.len());
        seen.extend(hashes.iter().copied());
        Self {
            keys: keys.len(),
            bytes: keys.iter().map(|k| k.as_ref().len()).sum(),
            unique: seen.len(),
        }
    }

    /// Keys whose fingerprint matched an earlier key.
    pub fn collisions(&self) -> usize {
        self.keys.saturating_sub(self.unique)
    }

    pub fn print_stats(&self) {
        println!("Batch Statistics:");
        println!("  Keys: {}", self.keys);
        println!("  Bytes: {}", self.bytes);
        println!("  Unique fingerprints: {}", self.unique);
        println!("  Collisions: {}", self.collisions());
    }
}
