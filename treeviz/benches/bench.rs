use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use treeviz::{layout, LayoutOptions, Tree, TreeKind};

fn avl_insert(c: &mut Criterion) {
    c.bench_function("avl_insert_1k_ascending", |b| {
        b.iter(|| {
            let mut tree = Tree::new(TreeKind::Avl);
            for v in 0..1_000i64 {
                tree.insert_now(black_box(v));
            }
            tree
        })
    });
}

fn avl_insert_delete(c: &mut Criterion) {
    c.bench_function("avl_insert_delete_1k", |b| {
        b.iter(|| {
            let mut tree = Tree::new(TreeKind::Avl);
            for v in 0..1_000i64 {
                tree.insert_now(black_box(v));
            }
            for v in 0..1_000i64 {
                tree.delete_now(black_box(v));
            }
            tree
        })
    });
}

fn layout_compute(c: &mut Criterion) {
    let mut tree = Tree::new(TreeKind::Avl);
    for v in 0..100i64 {
        tree.insert_now(v);
    }
    let opts = LayoutOptions::default();
    c.bench_function("layout_100_nodes", |b| {
        b.iter(|| layout::compute(black_box(tree.arena()), &opts))
    });
}

criterion_group!(benches, avl_insert, avl_insert_delete, layout_compute);
criterion_main!(benches);
