use amlich::lunar::{astro, sexagenary};
use amlich::{CalendarDate, Date, LunarDate, LunarYear, LunarYearCache, TimeZone, to_lunar, to_solar};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn astro_bench(c: &mut Criterion) {
    let date = Date::from_gregorian(2025, 11, 24).unwrap();

    let mut group = c.benchmark_group("astro");
    group.bench_function("new_moon_instant", |b| {
        b.iter(|| astro::new_moon_instant(black_box(1550)))
    });
    group.bench_function("sun_sector", |b| {
        b.iter(|| astro::sun_sector(black_box(date), TimeZone::ICT))
    });
    group.finish();
}

fn year_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("lunar_year");
    group.bench_function("common_2024", |b| {
        b.iter(|| LunarYear::new(black_box(2024), TimeZone::ICT))
    });
    group.bench_function("leap_2025", |b| {
        b.iter(|| LunarYear::new(black_box(2025), TimeZone::ICT))
    });
    group.finish();
}

fn convert_bench(c: &mut Criterion) {
    let date = CalendarDate::new(2025, 11, 24).unwrap();
    let lunar = LunarDate::new(2025, 10, 5, false);
    let cache = LunarYearCache::default();

    let mut group = c.benchmark_group("convert");
    group.bench_function("to_lunar", |b| {
        b.iter(|| to_lunar(black_box(date), TimeZone::ICT))
    });
    group.bench_function("to_solar", |b| {
        b.iter(|| to_solar(black_box(lunar), TimeZone::ICT))
    });
    group.bench_function("to_lunar_cached", |b| {
        b.iter(|| cache.to_lunar(black_box(date), TimeZone::ICT))
    });
    group.bench_function("day_can_chi", |b| {
        b.iter(|| sexagenary::day_can_chi(black_box(2461004)))
    });
    group.finish();
}

criterion_group!(benches, astro_bench, year_bench, convert_bench);
criterion_main!(benches);
