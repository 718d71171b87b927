//! Input generators for tests and benchmarks.
//!
//! All random patterns of one process draw from the same seed, printed by the shared tests, so a
//! failure can be replayed with `OVERRIDE_SEED=<seed>`. Benchmarks opt out of this with
//! [`use_random_seed_each_time`].

use std::env;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;

use rand::distributions::Uniform;
use rand::prelude::*;

/// Uniformly distributed over the whole `i32` range, so duplicates are rare.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = seeded_rng();

    (0..len).map(|_| rng.gen()).collect()
}

/// Uniformly distributed over `range`, e.g. `0..=1` for a binary input.
pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    let dist: Uniform<i32> = range.into();

    seeded_rng().sample_iter(dist).take(len).collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// Strictly ascending multiples of `stride`. With a stride above one every value in between is
/// a guaranteed miss for a search.
pub fn ascending_stride(len: usize, stride: i32) -> Vec<i32> {
    (0..len as i32).map(|i| i * stride).collect()
}

/// Random values cut into `saw_count` runs, each sorted ascending or descending at random.
pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    let mut v = random(len);
    let run_len = (len / saw_count.max(1)).max(1);

    let mut rng = seeded_rng();
    for run in v.chunks_mut(run_len) {
        if rng.gen() {
            run.sort_unstable();
        } else {
            run.sort_unstable_by(|a, b| b.cmp(a));
        }
    }

    v
}

/// Ascending first half, descending second half.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mut v = random(len);
    let (rising, falling) = v.split_at_mut(len / 2);

    rising.sort_unstable();
    falling.sort_unstable_by(|a, b| b.cmp(a));

    v
}

/// Makes every call of a random pattern draw a fresh seed. Meant for benchmarks, where a fixed
/// seed would measure the same input over and over.
///
/// Panics if `OVERRIDE_SEED` is set, the two contradict each other.
pub fn use_random_seed_each_time() {
    assert!(
        env::var("OVERRIDE_SEED").is_err(),
        "use_random_seed_each_time conflicts with OVERRIDE_SEED"
    );

    FRESH_SEED_PER_CALL.store(true, Ordering::Release);
}

/// The seed random patterns are drawn from: `OVERRIDE_SEED` if set, otherwise one random seed per
/// process.
pub fn random_init_seed() -> u64 {
    if FRESH_SEED_PER_CALL.load(Ordering::Acquire) {
        return thread_rng().gen();
    }

    static SEED: OnceCell<u64> = OnceCell::new();

    *SEED.get_or_init(|| match env::var("OVERRIDE_SEED") {
        Ok(seed) => seed
            .parse()
            .unwrap_or_else(|err| panic!("invalid OVERRIDE_SEED {seed:?}: {err}")),
        Err(_) => thread_rng().gen(),
    })
}

static FRESH_SEED_PER_CALL: AtomicBool = AtomicBool::new(false);

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}
