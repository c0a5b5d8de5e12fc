//! Run these benches with `cargo bench --bench profile -- --verbose`
use cm1_sounding::{derive_sounding, profile, writer, MixingRatioUnits};
use criterion::{criterion_group, criterion_main, Criterion};

mod utils;

fn build_tester() -> Criterion {
    Criterion::default()
        .sample_size(200)
        .measurement_time(std::time::Duration::from_secs(10))
        .noise_threshold(0.03)
        .significance_level(0.01)
}

criterion_main!(profile_benches);

criterion_group!(
    name = profile_benches;
    config = build_tester();
    targets = temperature_bench, dew_point_bench, wind_bench, derive_sounding_bench, write_bench
);

fn temperature_bench(c: &mut Criterion) {
    let raw = utils::synthetic_column();
    let pres = profile::pressure(&raw.pressure);

    c.bench_function("temperature", |b| {
        b.iter(|| {
            let _x = profile::temperature(&pres, &raw.theta);
        });
    });
}

fn dew_point_bench(c: &mut Criterion) {
    let raw = utils::synthetic_column();
    let pres = profile::pressure(&raw.pressure);

    c.bench_function("dew_point", |b| {
        b.iter(|| {
            let _x = profile::dew_point(&pres, &raw.mixing_ratio, MixingRatioUnits::GramsPerKilogram);
        });
    });
}

fn wind_bench(c: &mut Criterion) {
    let raw = utils::synthetic_column();

    c.bench_function("wind", |b| {
        b.iter(|| {
            let _x = profile::wind(&raw.u, &raw.v);
        });
    });
}

fn derive_sounding_bench(c: &mut Criterion) {
    let raw = utils::synthetic_column();

    c.bench_function("derive_sounding", |b| {
        b.iter(|| {
            let _x = derive_sounding(&raw, MixingRatioUnits::GramsPerKilogram);
        });
    });
}

fn write_bench(c: &mut Criterion) {
    let raw = utils::synthetic_column();
    let snd = derive_sounding(&raw, MixingRatioUnits::GramsPerKilogram).expect("oops");

    c.bench_function("write_sounding", |b| {
        b.iter(|| {
            let mut buf: Vec<u8> = Vec::with_capacity(16 * 1024);
            writer::write_sounding(&snd, &mut buf).expect("oops");
        });
    });
}
