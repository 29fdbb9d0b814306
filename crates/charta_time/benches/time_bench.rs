use criterion::{Criterion, black_box, criterion_group, criterion_main};
use charta_time::{
    DateStringConverter, DateStyle, FixedLocalOffset, JulianDate, OffsetMode, TimeOptions,
    year_item_from_ref_day,
};

fn decompose_bench(c: &mut Criterion) {
    let jd = 2_450_587.538_363_563;

    let mut group = c.benchmark_group("decompose");
    group.bench_function("julian_date_new", |b| {
        b.iter(|| JulianDate::new(black_box(jd), black_box(7200.0)))
    });
    group.bench_function("year_item_modern", |b| {
        b.iter(|| year_item_from_ref_day(black_box(10_000.25)))
    });
    group.bench_function("year_item_far_future", |b| {
        b.iter(|| year_item_from_ref_day(black_box(365_000_000.5)))
    });
    group.finish();
}

fn format_bench(c: &mut Criterion) {
    let date = JulianDate::new(2_450_587.538_363_563, 7200.0);

    let mut group = c.benchmark_group("format");
    group.bench_function("iso_t", |b| {
        b.iter(|| black_box(&date).format(DateStyle::IsoT, TimeOptions::default()))
    });
    group.bench_function("extended", |b| {
        b.iter(|| black_box(&date).format(DateStyle::Extended, TimeOptions::hours_minutes()))
    });
    group.finish();
}

fn parse_bench(c: &mut Criterion) {
    let conv = DateStringConverter::with_source(FixedLocalOffset(0));

    let mut group = c.benchmark_group("parse");
    group.bench_function("local_form_explicit", |b| {
        b.iter(|| {
            conv.date_to_julian_day(black_box("1997-05-19T02:55:14"), OffsetMode::Explicit(7200.0))
        })
    });
    group.bench_function("utc_form_auto", |b| {
        b.iter(|| conv.date_to_julian_day(black_box("1997-05-19T02:55:14.250Z"), OffsetMode::Auto))
    });
    group.finish();
}

criterion_group!(benches, decompose_bench, format_bench, parse_bench);
criterion_main!(benches);
