use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use rdocs::{Collection, Database, Filter, FlushMode, StoreConfig};
use serde_json::json;
use std::time::Duration;

const CITIES: [&str; 5] = ["Pune", "Oslo", "Lima", "Kyiv", "Nairobi"];

/// Fill a collection with `count` random user documents
fn populate(collection: &Collection, count: usize, rng: &mut StdRng) {
    for i in 0..count {
        let city = CITIES[rng.gen_range(0..CITIES.len())];
        collection
            .insert(&json!({
                "name": format!("user_{}", i),
                "age": rng.gen_range(18..80),
                "city": city,
                "tags": ["a", "b"],
            }))
            .unwrap();
    }
}

fn benchmark_queries(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let temp_dir = tempfile::tempdir().unwrap();
    let mut rng = StdRng::seed_from_u64(42);

    let mut group = c.benchmark_group("queries");
    group.measurement_time(Duration::from_secs(5));
    group.warm_up_time(Duration::from_secs(1));

    for size in [1_000usize, 10_000] {
        let collection = rt
            .block_on(Collection::open(
                temp_dir.path().join(format!("users_{}.json", size)),
            ))
            .unwrap();
        populate(&collection, size, &mut rng);

        let by_city = Filter::new(json!({"city": "Oslo"})).unwrap();
        let composite = Filter::new(json!({"city": "Lima", "tags": ["a", "b"]})).unwrap();
        let ids = collection.ids();

        group.bench_with_input(BenchmarkId::new("find_scalar", size), &size, |b, _| {
            b.iter(|| collection.find(Some(&by_city), None).len())
        });

        group.bench_with_input(BenchmarkId::new("find_composite", size), &size, |b, _| {
            b.iter(|| collection.find(Some(&composite), None).len())
        });

        group.bench_with_input(BenchmarkId::new("find_limit_10", size), &size, |b, _| {
            b.iter(|| collection.find(Some(&by_city), Some(10)).len())
        });

        group.bench_with_input(BenchmarkId::new("find_by_id", size), &size, |b, _| {
            b.iter(|| {
                let id = &ids[rng.gen_range(0..ids.len())];
                collection.find_by_id(id).is_some()
            })
        });
    }

    group.finish();
}

fn benchmark_insert_and_flush(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let temp_dir = tempfile::tempdir().unwrap();

    let database = rt
        .block_on(Database::open(
            temp_dir.path().join("bench"),
            &StoreConfig::default(),
        ))
        .unwrap();
    let collection = rt.block_on(database.collection("events")).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    populate(&collection, 1_000, &mut rng);

    let mut group = c.benchmark_group("mutations");
    group.measurement_time(Duration::from_secs(5));

    group.bench_function("insert", |b| {
        b.iter(|| {
            collection
                .insert(&json!({"kind": "click", "x": 10, "y": 20}))
                .unwrap()
        })
    });

    group.bench_function("flush_blocking_dirty", |b| {
        b.iter(|| {
            collection.insert(&json!({"kind": "scroll"})).unwrap();
            rt.block_on(database.flush(FlushMode::Blocking)).unwrap();
        })
    });

    group.bench_function("flush_background_dirty", |b| {
        b.iter(|| {
            collection.insert(&json!({"kind": "scroll"})).unwrap();
            rt.block_on(database.flush(FlushMode::Background)).unwrap();
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_queries, benchmark_insert_and_flush);
criterion_main!(benches);
