use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hanviet::align::{Aligner, LengthAligner};

// deterministic sentence lengths, target side being ~3x longer with some merges.
fn lengths(nb: usize) -> (Vec<usize>, Vec<usize>) {
    let mut state = 7u64;
    let mut next = || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (state >> 33) as usize % 40 + 5
    };

    let src: Vec<usize> = (0..nb).map(|_| next()).collect();
    let mut tgt = Vec::with_capacity(nb);
    let mut i = 0;
    while i < nb {
        if i % 17 == 0 && i + 1 < nb {
            tgt.push((src[i] + src[i + 1]) * 3);
            i += 2;
        } else {
            tgt.push(src[i] * 3);
            i += 1;
        }
    }
    (src, tgt)
}

pub fn align_lengths(c: &mut Criterion) {
    let aligner = LengthAligner::default();
    let mut group = c.benchmark_group("align lengths");
    for nb in [100, 1000, 5000] {
        let (src, tgt) = lengths(nb);
        group.bench_with_input(BenchmarkId::from_parameter(nb), &(src, tgt), |b, (s, t)| {
            b.iter(|| aligner.align_lengths(black_box(s), black_box(t)).unwrap())
        });
    }
    group.finish();
}

pub fn align_text(c: &mut Criterion) {
    let src: String = (0..500)
        .map(|i| format!("第{}句天地玄黃宇宙洪荒。", i))
        .collect::<Vec<_>>()
        .join("\n");
    let tgt: String = (0..500)
        .map(|i| format!("Câu thứ {} trời đất huyền hoàng, vũ trụ hồng hoang.", i))
        .collect::<Vec<_>>()
        .join("\n");
    let aligner = LengthAligner::default();

    c.bench_function("align 500 sentences", |b| {
        b.iter(|| aligner.align(black_box(&src), black_box(&tgt)).unwrap())
    });
}

criterion_group!(benches, align_lengths, align_text);
criterion_main!(benches);
