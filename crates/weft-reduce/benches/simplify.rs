use criterion::{black_box, criterion_group, criterion_main, Criterion};
use weft_reduce::generators::gen_layered_dag;
use weft_reduce::{edge_list_hash, simplify};

fn simplify_bench(c: &mut Criterion) {
    let small = gen_layered_dag(6, 4, 0x5eed).expect("valid shape");
    let large = gen_layered_dag(12, 10, 0x5eed).expect("valid shape");

    c.bench_function("simplify_layered_6x4", |b| {
        b.iter(|| black_box(simplify(&small)));
    });
    c.bench_function("simplify_layered_12x10", |b| {
        b.iter(|| black_box(simplify(&large)));
    });
    c.bench_function("edge_list_hash_12x10", |b| {
        b.iter(|| black_box(edge_list_hash(&large)));
    });
}

criterion_group!(benches, simplify_bench);
criterion_main!(benches);
