//! Benchmarks for trie construction and matching.
//!
//! Run with: `cargo bench`
//! View reports: `open target/criterion/report/index.html`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lextrie::{Trie, TrieBuilder};

/// A C-like operator table, id = position in this list.
const OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "%", "=", "==", "!=", "<", ">", "<=", ">=", "!", "&&", "||", "&", "|",
    "^", "~", "<<", ">>", "<<=", ">>=", "::", "->", "=>", ".", ",", ";",
];

fn build_operator_trie() -> Trie<char, u32> {
    let mut builder = TrieBuilder::new();
    for (id, op) in OPERATORS.iter().enumerate() {
        builder.insert_str(op, id as u32).unwrap();
    }
    builder.build()
}

/// Generate a stream of concatenated operator lexemes.
fn generate_operator_stream(count: usize) -> String {
    (0..count).map(|i| OPERATORS[i % OPERATORS.len()]).collect()
}

/// Generate a deterministic pseudo-random key set.
fn generate_keys(count: usize, alphabet: u8, len: usize) -> Vec<Vec<u8>> {
    (0..count as u64)
        .map(|i| {
            let mut state = 0x9E37_79B9_7F4A_7C15u64.wrapping_mul(i + 1);
            (0..len)
                .map(|_| {
                    state = state
                        .wrapping_mul(6364136223846793005)
                        .wrapping_add(1442695040888963407);
                    ((state >> 33) as u8) % alphabet
                })
                .collect()
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    group.bench_function("operator_table", |b| {
        b.iter(|| {
            let mut builder = TrieBuilder::new();
            for (id, op) in OPERATORS.iter().enumerate() {
                builder.insert_str(black_box(op), id as u32).unwrap();
            }
            builder.build()
        })
    });

    for count in [100usize, 1_000, 10_000] {
        let keys = generate_keys(count, 16, 8);
        group.bench_with_input(BenchmarkId::new("random_keys", count), &keys, |b, keys| {
            b.iter(|| {
                let mut builder = TrieBuilder::new();
                for (id, key) in keys.iter().enumerate() {
                    builder.insert(black_box(key), id as u32).unwrap();
                }
                builder.build()
            })
        });
    }

    group.finish();
}

fn bench_match(c: &mut Criterion) {
    let trie = build_operator_trie();
    let mut group = c.benchmark_group("match");

    for count in [100usize, 1_000, 10_000] {
        let stream = generate_operator_stream(count);
        group.throughput(Throughput::Bytes(stream.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("maximal_munch", count),
            &stream,
            |b, stream| {
                b.iter(|| {
                    let mut input = stream.as_str();
                    let mut matched = 0usize;
                    while let Some((len, id)) = trie.longest_match_str(black_box(input)) {
                        black_box(id);
                        matched += 1;
                        input = &input[len..];
                    }
                    matched
                })
            },
        );
    }

    group.finish();
}

/// Sibling-group lookup across the linear-scan/binary-search threshold.
fn bench_group_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("group_width");

    for width in [2usize, 4, 8, 16, 64, 256] {
        let mut builder = TrieBuilder::new();
        for t in 0..width as u32 {
            builder.insert(&[t], t).unwrap();
        }
        let trie = builder.build();
        group.bench_with_input(BenchmarkId::from_parameter(width), &trie, |b, trie| {
            b.iter(|| {
                let mut hits = 0usize;
                for t in 0..width as u32 {
                    if trie.find_next(None, black_box(t)).is_some() {
                        hits += 1;
                    }
                }
                hits
            })
        });
    }

    group.finish();
}

fn bench_traverse(c: &mut Criterion) {
    let trie = build_operator_trie();
    let mut group = c.benchmark_group("traverse");

    group.bench_function("deepest_operator", |b| {
        b.iter(|| trie.traverse_str(black_box("<<=")))
    });
    group.bench_function("miss_at_root", |b| {
        b.iter(|| trie.traverse_str(black_box("@")))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_match,
    bench_group_width,
    bench_traverse
);
criterion_main!(benches);
