//! Performance benchmarks for the feed registry.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use quotefeed::{FeedRegistry, PriceSubscriber};
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Counts notifications without doing any work.
#[derive(Default)]
struct Sink {
    seen: AtomicU64,
}

impl PriceSubscriber for Sink {
    fn on_price(&self, _feed: &str, price: Decimal) {
        self.seen.fetch_add(1, Ordering::Relaxed);
        black_box(price);
    }
}

/// Benchmark dispatch fan-out with varying subscriber counts
fn bench_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("fan_out");

    for subscriber_count in [1, 10, 100, 1000] {
        group.bench_with_input(
            BenchmarkId::new("subscribers", subscriber_count),
            &subscriber_count,
            |b, &count| {
                let registry = FeedRegistry::new();
                for _ in 0..count {
                    registry.subscribe(Arc::new(Sink::default()), "AAPL");
                }

                let mut price = 0i64;
                b.iter(|| {
                    price += 1;
                    registry.update_price("AAPL", Decimal::from(price));
                });
            },
        );
    }

    group.finish();
}

/// Benchmark price overwrite with no subscribers attached
fn bench_price_overwrite(c: &mut Criterion) {
    c.bench_function("price_overwrite", |b| {
        let registry = FeedRegistry::new();
        let mut price = 0i64;

        b.iter(|| {
            price += 1;
            registry.update_price("AAPL", Decimal::from(price));
            black_box(registry.price("AAPL"));
        });
    });
}

/// Benchmark subscribe/unsubscribe churn on a feed with existing subscribers
fn bench_subscription_churn(c: &mut Criterion) {
    c.bench_function("subscription_churn", |b| {
        let registry = FeedRegistry::new();
        for _ in 0..100 {
            registry.subscribe(Arc::new(Sink::default()), "AAPL");
        }

        b.iter(|| {
            let sub: Arc<dyn PriceSubscriber> = Arc::new(Sink::default());
            registry.subscribe(sub.clone(), "AAPL");
            registry.unsubscribe(&sub, "AAPL");
        });
    });
}

criterion_group!(
    benches,
    bench_fan_out,
    bench_price_overwrite,
    bench_subscription_churn
);
criterion_main!(benches);
