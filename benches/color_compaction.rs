use cde_colors::{color::twelve_to_rgb, compact, SchemeBuilder};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use palette::Srgb;

fn benchmark_compaction(c: &mut Criterion) {
    c.bench_function("compact_12_digit", |b| {
        b.iter(|| compact(black_box("#aeae54549090")))
    });

    c.bench_function("twelve_to_rgb", |b| {
        b.iter(|| twelve_to_rgb(black_box("#aeae54549090")))
    });
}

fn benchmark_scheme_build(c: &mut Criterion) {
    let palette: Vec<Srgb<u8>> = vec![
        Srgb::new(21, 23, 26),
        Srgb::new(176, 67, 60),
        Srgb::new(78, 154, 6),
        Srgb::new(196, 160, 0),
        Srgb::new(52, 101, 164),
        Srgb::new(117, 80, 123),
        Srgb::new(6, 152, 154),
        Srgb::new(211, 215, 207),
    ];
    let builder = SchemeBuilder::new();

    c.bench_function("scheme_build_8_colors", |b| {
        b.iter(|| builder.build(black_box(&palette)))
    });
}

criterion_group!(benches, benchmark_compaction, benchmark_scheme_build);
criterion_main!(benches);
