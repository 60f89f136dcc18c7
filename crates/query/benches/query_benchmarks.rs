use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use core::cmp::Ordering;

use eproc_query::{Select, SortBy, SortDirection, narrow, search, sort_by_key};

#[derive(Debug, Clone)]
struct CatalogRow {
    name: String,
    category: &'static str,
    price: u64,
}

impl eproc_query::TextSearch for CatalogRow {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name]
    }
}

struct ByPrice(SortDirection);

impl SortBy<CatalogRow> for ByPrice {
    fn compare(&self, a: &CatalogRow, b: &CatalogRow) -> Ordering {
        self.0.orient(a.price.cmp(&b.price))
    }
}

const CATEGORIES: [&str; 4] = ["IT Equipment", "Office Supplies", "Furniture", "Services"];
const STEMS: [&str; 6] = ["Laptop", "Monitor", "Paper", "Toner", "Chair", "Cable"];

fn synthetic_rows(n: usize) -> Vec<CatalogRow> {
    (0..n)
        .map(|i| CatalogRow {
            name: format!("{} Model {}", STEMS[i % STEMS.len()], i),
            category: CATEGORIES[i % CATEGORIES.len()],
            price: ((i * 37) % 9000) as u64 + 100,
        })
        .collect()
}

fn bench_list_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_query");

    for size in [100usize, 1_000, 10_000] {
        let rows = synthetic_rows(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("search", size), &rows, |b, rows| {
            b.iter(|| search(black_box(rows), black_box("paper")))
        });

        group.bench_with_input(BenchmarkId::new("narrow", size), &rows, |b, rows| {
            b.iter(|| narrow(black_box(rows), &Select::Only("Furniture"), |r| r.category))
        });

        group.bench_with_input(
            BenchmarkId::new("search_narrow_sort", size),
            &rows,
            |b, rows| {
                b.iter(|| {
                    let hits = search(black_box(rows), "model");
                    let hits = narrow(&hits, &Select::Only("IT Equipment"), |r| r.category);
                    sort_by_key(&hits, &ByPrice(SortDirection::Descending))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_list_pipeline);
criterion_main!(benches);
