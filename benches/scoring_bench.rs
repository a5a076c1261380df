//! Criterion benchmarks for the scoring pass.
//!
//! Uses synthetic random databases and rules to measure matching overhead
//! independent of any real dataset.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_seqrules::model::{Item, Itemset, SequenceDatabase, SequentialRule};
use u_seqrules::scoring::{MatchPolicy, RuleScorer, ScoreConfig};

const ALPHABET: Item = 50;

fn random_database<R: Rng>(rng: &mut R, sequences: usize) -> SequenceDatabase {
    let mut db = SequenceDatabase::new();
    for _ in 0..sequences {
        let len = rng.random_range(3..12);
        let itemsets: Vec<Vec<Item>> = (0..len)
            .map(|_| {
                let width = rng.random_range(1..5);
                (0..width).map(|_| rng.random_range(0..ALPHABET)).collect()
            })
            .collect();
        db.push(itemsets);
    }
    db
}

fn random_itemset<R: Rng>(rng: &mut R) -> Itemset {
    let width = rng.random_range(1..3);
    Itemset::new((0..width).map(|_| rng.random_range(0..ALPHABET)))
}

fn random_rules<R: Rng>(rng: &mut R, count: usize) -> Vec<SequentialRule> {
    (0..count)
        .map(|_| SequentialRule::new(random_itemset(rng), random_itemset(rng)))
        .collect()
}

fn bench_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("score");
    let mut rng = StdRng::seed_from_u64(42);
    let rules = random_rules(&mut rng, 100);

    for &sequences in &[100usize, 1_000, 10_000] {
        let db = random_database(&mut rng, sequences);
        for policy in [MatchPolicy::Positional, MatchPolicy::Scattered] {
            let config = ScoreConfig::default().with_policy(policy);
            group.bench_with_input(
                BenchmarkId::new(policy.to_string(), sequences),
                &db,
                |b, db| {
                    b.iter(|| {
                        let mut rules = rules.clone();
                        let summary =
                            RuleScorer::score_in_place(black_box(db), &mut rules, &config);
                        black_box(summary)
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_scoring);
criterion_main!(benches);
