use criterion::{BatchSize, Bencher};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sorted_queue::{NoopSink, SortedQueue};

/// A queue of `n` random priorities, built in ascending order so that every insertion appends.
fn filled(n: usize, rng: &mut StdRng) -> SortedQueue<u64, NoopSink> {
    let mut keys: Vec<u64> = (0..n).map(|_| rng.gen()).collect();
    keys.sort_unstable();
    let q = SortedQueue::with_sink(n, NoopSink);
    q.insert_many(keys);
    q
}

fn insert_keys(b: &mut Bencher, keys: Vec<u64>) {
    b.iter_batched(
        || keys.clone(),
        |keys| {
            let q = SortedQueue::with_sink(keys.len(), NoopSink);
            for k in keys {
                q.insert(k);
            }
            q
        },
        BatchSize::SmallInput,
    );
}

pub fn insert_ascending(b: &mut Bencher, n: usize) {
    insert_keys(b, (0..n as u64).collect());
}

pub fn insert_descending(b: &mut Bencher, n: usize) {
    insert_keys(b, (0..n as u64).rev().collect());
}

pub fn insert_random(b: &mut Bencher, n: usize) {
    let mut rng = StdRng::seed_from_u64(42);
    insert_keys(b, (0..n).map(|_| rng.gen()).collect());
}

pub fn insert_duplicates(b: &mut Bencher, n: usize) {
    let mut rng = StdRng::seed_from_u64(42);
    insert_keys(b, (0..n).map(|_| rng.gen_range(0..16)).collect());
}

pub fn merge(b: &mut Bencher, n: usize) {
    let mut rng = StdRng::seed_from_u64(42);
    let other = filled(n, &mut rng);
    b.iter_batched(
        || filled(n, &mut rng),
        |q| {
            q.merge(&other);
            q
        },
        BatchSize::SmallInput,
    );
}

pub fn search_present(b: &mut Bencher, n: usize) {
    let mut rng = StdRng::seed_from_u64(42);
    let q = filled(n, &mut rng);
    let keys: Vec<u64> = q.to_vec().iter().map(|k| **k).collect();
    b.iter_batched(
        || keys[rng.gen_range(0..keys.len())],
        |k| q.search(k),
        BatchSize::SmallInput,
    );
}

pub fn search_absent(b: &mut Bencher, n: usize) {
    let mut rng = StdRng::seed_from_u64(42);
    let q = filled(n, &mut rng);
    b.iter_batched(|| rng.gen::<u64>(), |k| q.search(k), BatchSize::SmallInput);
}

pub fn get(b: &mut Bencher, n: usize) {
    let mut rng = StdRng::seed_from_u64(42);
    let q = filled(n, &mut rng);
    b.iter_batched(
        || rng.gen_range(0..n as isize),
        |i| q.get(i),
        BatchSize::SmallInput,
    );
}
