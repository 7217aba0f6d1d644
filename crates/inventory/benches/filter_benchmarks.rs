use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use stockscout_inventory::{FilterCriteria, InventoryRecord, RecordId, filter};

fn synthetic_records(n: u32) -> Vec<InventoryRecord> {
    let categories = ["Electronics", "Books", "Furniture", "Appliances"];
    (0..n)
        .map(|i| InventoryRecord {
            id: RecordId(i),
            product_name: format!("Product {i} model {}", i % 17),
            category: categories[(i as usize) % categories.len()].to_string(),
            price: f64::from(i % 2_000),
            quantity: i % 500,
            supplier: format!("Supplier {}", i % 31),
            city: format!("City {}", i % 11),
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    for size in [100u32, 1_000, 10_000] {
        let records = synthetic_records(size);
        group.throughput(Throughput::Elements(u64::from(size)));

        group.bench_with_input(BenchmarkId::new("identity", size), &records, |b, records| {
            let criteria = FilterCriteria::default();
            b.iter(|| filter(black_box(records), black_box(&criteria)));
        });

        group.bench_with_input(BenchmarkId::new("combined", size), &records, |b, records| {
            let criteria = FilterCriteria {
                name: Some("model 3".to_string()),
                category: Some("Electronics".to_string()),
                min_price: Some(100.0),
                max_price: Some(1_500.0),
            };
            b.iter(|| filter(black_box(records), black_box(&criteria)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
