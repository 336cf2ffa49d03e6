//! Benchmarks for ranking and aggregation queries
//!
//! Run with: cargo bench --package queries
//!
//! Uses a synthetic catalog so the benches run without any dataset on disk.

use catalog::{Catalog, Film};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

const GENRES: [&str; 5] = ["Action", "Drama", "Family", "Fantasy", "Sci-Fi"];

fn synthetic_catalog(films: u32) -> Catalog {
    (0..films)
        .map(|i| Film {
            title: format!("Film #{i}"),
            director: format!("Director #{}", i % 97),
            duration: (i % 7 != 0).then_some(60 + i % 120),
            genres: [GENRES[(i % 5) as usize].to_string()].into_iter().collect(),
            rating: if i % 3 == 0 { "PG-13" } else { "R" }.to_string(),
            year: Some(1950 + (i % 75) as u16),
            score: (i % 11 != 0).then(|| f64::from(i % 100) / 10.0),
        })
        .collect()
}

fn bench_top_n(c: &mut Criterion) {
    let catalog = synthetic_catalog(10_000);

    c.bench_function("top_n_by_score", |b| {
        b.iter(|| {
            let ranked = queries::top_n(black_box(&catalog), |f| f.score, black_box(10));
            black_box(ranked)
        })
    });
}

fn bench_top_n_matching(c: &mut Criterion) {
    let catalog = synthetic_catalog(10_000);

    c.bench_function("top_n_action_by_score", |b| {
        b.iter(|| {
            let ranked = queries::top_n_matching(
                black_box(&catalog),
                |f| f.has_genre("Action"),
                |f| f.score,
                black_box(8),
            );
            black_box(ranked)
        })
    });
}

fn bench_group_average(c: &mut Criterion) {
    let catalog = synthetic_catalog(10_000);

    c.bench_function("group_average_family_duration", |b| {
        b.iter(|| {
            let avg = queries::group_average(
                black_box(&catalog),
                |f| f.has_genre("Family"),
                |f| f.duration.map(f64::from),
            );
            black_box(avg)
        })
    });
}

criterion_group!(benches, bench_top_n, bench_top_n_matching, bench_group_average);
criterion_main!(benches);
