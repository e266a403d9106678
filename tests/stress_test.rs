//! Stress tests for the contest-kit sorted collection.
//!
//! These tests verify:
//! 1. Long random operation sequences agree with a naive linear model
//! 2. The sort invariant holds throughout
//! 3. Determinism is preserved across runs
//! 4. Throughput stays reasonable as the collection grows
//!
//! ## Running Stress Tests
//!
//! ```bash
//! # Run all stress tests (release mode recommended)
//! cargo test --release --test stress_test -- --nocapture
//!
//! # Run specific test
//! cargo test --release --test stress_test stress_random_ops -- --nocapture
//! ```

use std::time::Instant;

use contest_kit::{Relation, SortedCollection};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

// ============================================================================
// TEST CONSTANTS
// ============================================================================

/// Number of operations for the model comparison test
const MODEL_OP_COUNT: usize = 20_000;

/// Keys are drawn from `0..KEY_SPACE`, so equal keys are common
const KEY_SPACE: u32 = 500;

/// Minimum acceptable throughput for mixed operations (ops per second)
const TARGET_THROUGHPUT: f64 = 10_000.0;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// A record: (key, unique id)
type Item = (u32, u64);

#[derive(Debug, Clone, Copy)]
enum Op {
    Insert(Item),
    InsertRight(Item),
    Remove(u32),
    Find(Relation, u32),
}

/// Generate a deterministic operation sequence.
///
/// Uses a seeded RNG for reproducibility. Same seed = same operations.
fn generate_deterministic_ops(count: usize, seed: u64) -> Vec<Op> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut ops = Vec::with_capacity(count);

    for i in 0..count {
        let key = rng.gen_range(0..KEY_SPACE);
        let op = match rng.gen_range(0..10) {
            0..=2 => Op::Insert((key, i as u64)),
            3..=5 => Op::InsertRight((key, i as u64)),
            6..=7 => Op::Remove(key),
            _ => Op::Find(Relation::ALL[rng.gen_range(0..5)], key),
        };
        ops.push(op);
    }

    ops
}

fn key_of(item: &Item) -> u32 {
    item.0
}

/// Linear-scan reference implementation.
#[derive(Default)]
struct Model {
    entries: Vec<Item>,
}

impl Model {
    fn insert(&mut self, item: Item) {
        let i = self
            .entries
            .iter()
            .position(|e| e.0 >= item.0)
            .unwrap_or(self.entries.len());
        self.entries.insert(i, item);
    }

    fn insert_right(&mut self, item: Item) {
        let i = self
            .entries
            .iter()
            .position(|e| e.0 > item.0)
            .unwrap_or(self.entries.len());
        self.entries.insert(i, item);
    }

    fn remove(&mut self, key: u32) -> Option<Item> {
        let i = self.entries.iter().position(|e| e.0 == key)?;
        Some(self.entries.remove(i))
    }

    fn find(&self, relation: Relation, key: u32) -> Option<&Item> {
        match relation {
            Relation::Eq => self.entries.iter().find(|e| e.0 == key),
            Relation::Gt => self.entries.iter().find(|e| e.0 > key),
            Relation::Ge => self.entries.iter().find(|e| e.0 >= key),
            Relation::Lt => self.entries.iter().rev().find(|e| e.0 < key),
            Relation::Le => self.entries.iter().rev().find(|e| e.0 <= key),
        }
    }
}

fn apply(collection: &mut SortedCollection<Item, u32>, op: Op) {
    match op {
        Op::Insert(item) => collection.insert(item),
        Op::InsertRight(item) => collection.insert_right(item),
        Op::Remove(key) => {
            let _ = collection.remove(&key);
        }
        Op::Find(relation, key) => {
            let _ = collection.find(relation, &key);
        }
    }
}

/// SHA-256 over the final (key, id) sequence.
fn digest(collection: &SortedCollection<Item, u32>) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for (key, id) in collection.iter() {
        hasher.update(key.to_le_bytes());
        hasher.update(id.to_le_bytes());
    }
    hasher.finalize().into()
}

/// Run a deterministic operation sequence and return the final digest.
fn run_deterministic_sequence(seed: u64, count: usize) -> [u8; 32] {
    let mut collection: SortedCollection<Item, u32> =
        SortedCollection::new(Vec::new(), key_of);
    for op in generate_deterministic_ops(count, seed) {
        apply(&mut collection, op);
    }
    digest(&collection)
}

fn assert_sorted(collection: &SortedCollection<Item, u32>) {
    assert_eq!(collection.items().len(), collection.keys().len());
    assert!(collection.keys().windows(2).all(|w| w[0] <= w[1]));
    for (item, key) in collection.iter().zip(collection.keys()) {
        assert_eq!(item.0, *key);
    }
}

// ============================================================================
// STRESS TESTS
// ============================================================================

/// Compare every operation against the linear model.
///
/// # Verification
/// - Every `find` and `remove` returns the same item as the model
/// - The full item sequence matches at regular checkpoints
/// - The sort invariant holds at every checkpoint
#[test]
fn stress_random_ops_match_model() {
    println!("\n=== STRESS TEST: Model Comparison ===\n");

    let ops = generate_deterministic_ops(MODEL_OP_COUNT, 42);
    let mut collection: SortedCollection<Item, u32> =
        SortedCollection::new(Vec::new(), key_of);
    let mut model = Model::default();

    let mut removed = 0;
    let mut found = 0;

    for (step, op) in ops.into_iter().enumerate() {
        match op {
            Op::Insert(item) => {
                collection.insert(item);
                model.insert(item);
            }
            Op::InsertRight(item) => {
                collection.insert_right(item);
                model.insert_right(item);
            }
            Op::Remove(key) => {
                let expected = model.remove(key);
                assert_eq!(collection.remove(&key).ok(), expected, "step {}", step);
                removed += expected.is_some() as usize;
            }
            Op::Find(relation, key) => {
                let expected = model.find(relation, key);
                assert_eq!(
                    collection.find(relation, &key).ok(),
                    expected,
                    "step {}: find({} {})",
                    step,
                    relation,
                    key
                );
                found += expected.is_some() as usize;
            }
        }

        if step % 1_000 == 0 {
            assert_eq!(collection.items(), model.entries.as_slice(), "step {}", step);
            assert_sorted(&collection);
        }
    }

    assert_eq!(collection.items(), model.entries.as_slice());
    assert_sorted(&collection);

    println!("  Operations:        {:>12}", MODEL_OP_COUNT);
    println!("  Successful removes:{:>12}", removed);
    println!("  Successful finds:  {:>12}", found);
    println!("  Final size:        {:>12}", collection.len());

    assert!(removed > 0, "Expected some removals to hit");
    assert!(found > 0, "Expected some finds to hit");

    println!("\n=== MODEL COMPARISON PASSED ===\n");
}

/// Verify determinism: Same sequence produces identical digest.
#[test]
fn verify_determinism() {
    println!("\n=== DETERMINISM TEST ===\n");

    const TEST_COUNT: usize = 10_000;
    const SEED: u64 = 12345;

    let root1 = run_deterministic_sequence(SEED, TEST_COUNT);
    let root2 = run_deterministic_sequence(SEED, TEST_COUNT);

    println!("  Run 1 digest:     {}", hex::encode(root1));
    println!("  Run 2 digest:     {}", hex::encode(root2));

    assert_eq!(root1, root2, "Digests must match for determinism");

    let root3 = run_deterministic_sequence(SEED + 1, TEST_COUNT);
    println!("  Different seed:   {}", hex::encode(root3));
    assert_ne!(root1, root3, "Different seeds should produce different digests");

    println!("\n=== DETERMINISM VERIFIED ===\n");
}

/// Grow a collection and drain it again, measuring mixed throughput.
#[test]
fn stress_fill_and_drain() {
    println!("\n=== FILL AND DRAIN TEST ===\n");

    const ITEM_COUNT: usize = 10_000;

    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let keys: Vec<u32> = (0..ITEM_COUNT).map(|_| rng.gen_range(0..u32::MAX)).collect();

    let start = Instant::now();

    let mut collection: SortedCollection<Item, u32> =
        SortedCollection::new(Vec::new(), key_of);
    for (i, &key) in keys.iter().enumerate() {
        collection.insert_right((key, i as u64));
    }
    assert_eq!(collection.len(), ITEM_COUNT);
    assert_sorted(&collection);

    for key in &keys {
        assert!(collection.remove(key).is_ok());
    }

    let elapsed = start.elapsed();
    let throughput = (ITEM_COUNT * 2) as f64 / elapsed.as_secs_f64();

    println!("  Items:             {:>12}", ITEM_COUNT);
    println!("  Elapsed time:      {:>12.2?}", elapsed);
    println!("  Throughput:        {:>12.0} ops/sec", throughput);

    assert!(collection.is_empty());
    assert!(
        throughput >= TARGET_THROUGHPUT,
        "Throughput {:.0} ops/sec below target {:.0}",
        throughput,
        TARGET_THROUGHPUT
    );

    println!("\n=== FILL AND DRAIN PASSED ===\n");
}

/// Test varying sizes to ensure queries stay logarithmic.
#[test]
fn stress_scaling() {
    println!("\n=== SCALING TEST ===\n");

    let test_sizes = [1_000, 10_000, 100_000];

    println!("{:>12} {:>12} {:>12}", "Items", "Build", "10k finds");
    println!("{:-<12} {:-<12} {:-<12}", "", "", "");

    for &size in &test_sizes {
        let mut rng = ChaCha8Rng::seed_from_u64(size as u64);
        let items: Vec<Item> = (0..size)
            .map(|i| (rng.gen_range(0..u32::MAX), i as u64))
            .collect();

        let start = Instant::now();
        let collection = SortedCollection::new(items, key_of);
        let build = start.elapsed();
        assert_sorted(&collection);

        let start = Instant::now();
        let mut hits = 0;
        for _ in 0..10_000 {
            let probe = rng.gen_range(0..u32::MAX);
            if collection.find(Relation::Ge, &probe).is_ok() {
                hits += 1;
            }
        }
        let finds = start.elapsed();

        println!("{:>12} {:>12.2?} {:>12.2?}", size, build, finds);
        assert!(hits > 0);
    }

    println!("\n=== SCALING TEST COMPLETE ===\n");
}
