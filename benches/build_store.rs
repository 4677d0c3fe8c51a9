use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gedtree::parser::parse_str;
use std::fmt::Write as _;

/// Synthetic pedigree: a binary ancestor tree `generations` deep. Each couple
/// has one child; the child of couple (g, i) sits in family F(g, i).
fn synthetic_gedcom(generations: u32) -> String {
    let mut s = String::new();
    s.push_str("0 HEAD\n");
    for g in 0..generations {
        for i in 0..(1u32 << g) {
            let fam = (1u32 << g) + i;
            let husb = fam * 2;
            let wife = fam * 2 + 1;
            let _ = writeln!(s, "0 @I{husb}@ INDI\n1 NAME Husband /G{g}/\n1 FAMS @F{fam}@");
            let _ = writeln!(s, "0 @I{wife}@ INDI\n1 NAME Wife /G{g}/\n1 FAMS @F{fam}@");
            let _ = writeln!(
                s,
                "0 @F{fam}@ FAM\n1 HUSB @I{husb}@\n1 WIFE @I{wife}@\n1 CHIL @I{fam}@"
            );
        }
    }
    s.push_str("0 TRLR\n");
    s
}

fn bench_build_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_store");
    for generations in [6u32, 9, 12] {
        let content = synthetic_gedcom(generations);
        group.bench_function(BenchmarkId::new("parse_str", generations), |b| {
            b.iter(|| {
                let store = parse_str(black_box(&content));
                black_box(store.person_count())
            })
        });
    }
    group.finish();
}

criterion_group!(name = benches; config = Criterion::default(); targets = bench_build_store);
criterion_main!(benches);
