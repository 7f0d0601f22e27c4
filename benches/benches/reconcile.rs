// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use trellis_order::{IndexMap, Position, PositionCache, reconcile};

fn gen_lists(lists: usize, items_per_list: usize) -> IndexMap<String, Vec<String>> {
    let mut out = IndexMap::with_capacity(lists);
    for l in 0..lists {
        let items = (0..items_per_list)
            .map(|i| format!("item-{l}-{i}"))
            .collect();
        out.insert(format!("list-{l}"), items);
    }
    out
}

// Xorshift keeps the scramble deterministic without a rand dependency.
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
}

// A cache whose indices disagree with declaration order everywhere, as after
// a long editing session.
fn scrambled_cache(lists: &IndexMap<String, Vec<String>>, seed: u64) -> PositionCache<String, String> {
    let mut rng = Rng::new(seed);
    let mut cache = PositionCache::new();
    for (list, items) in lists {
        let mut order: Vec<&String> = items.iter().collect();
        // Fisher-Yates over the declared items.
        for i in (1..order.len()).rev() {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "Modulus is far below u32 range."
            )]
            let j = (rng.next_u64() % (i as u64 + 1)) as usize;
            order.swap(i, j);
        }
        for (index, id) in order.into_iter().enumerate() {
            cache.insert(
                id.clone(),
                Position {
                    list: list.clone(),
                    index,
                },
            );
        }
    }
    cache
}

fn bench_reconcile(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconcile");

    for &(lists, items) in &[(4_usize, 64_usize), (8, 256)] {
        let declared = gen_lists(lists, items);
        let empty = PositionCache::new();
        let warm = reconcile(declared.clone(), &empty, |it: &String| it.clone()).cache;
        let scrambled = scrambled_cache(&declared, 0x5eed);

        group.bench_function(format!("cold_{lists}x{items}"), |b| {
            b.iter_batched(
                || declared.clone(),
                |input| reconcile(black_box(input), &empty, |it: &String| it.clone()),
                BatchSize::SmallInput,
            );
        });
        group.bench_function(format!("warm_{lists}x{items}"), |b| {
            b.iter_batched(
                || declared.clone(),
                |input| reconcile(black_box(input), &warm, |it: &String| it.clone()),
                BatchSize::SmallInput,
            );
        });
        group.bench_function(format!("scrambled_{lists}x{items}"), |b| {
            b.iter_batched(
                || declared.clone(),
                |input| reconcile(black_box(input), &scrambled, |it: &String| it.clone()),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_move_to(c: &mut Criterion) {
    let declared = gen_lists(4, 256);
    let cache = reconcile(declared, &PositionCache::new(), |it: &String| it.clone()).cache;
    let id = "item-0-0".to_string();
    let target = "list-3".to_string();

    c.bench_function("move_to_cross_list_4x256", |b| {
        b.iter(|| cache.move_to(black_box(&id), &target, 128));
    });
}

criterion_group!(benches, bench_reconcile, bench_move_to);
criterion_main!(benches);
