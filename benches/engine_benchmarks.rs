//! Performance benchmarks for the shift registration engine.
//!
//! The registration desk serializes submissions behind one lock, so the
//! interesting numbers are the per-operation costs inside that critical
//! section: eligibility evaluation, the derived meal ceiling, and a full
//! commit.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;

use shiftdesk::api::{create_router, AppState};
use shiftdesk::catalog::{Catalog, DayKind, MealSlotId, RoomId, ShiftId};
use shiftdesk::config::CapacityConfig;
use shiftdesk::engine::{
    offered_meal_slots, offered_shifts, CapacityAllocator, RegistrationDesk, RegistrationForm,
};
use shiftdesk::store::MemoryStore;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Benchmark: offered shift and meal slot evaluation.
fn bench_eligibility(c: &mut Criterion) {
    let catalog = Catalog::standard();
    let entry = Decimal::new(95, 1); // 09:30

    c.bench_function("offered_shifts", |b| {
        b.iter(|| {
            black_box(offered_shifts(
                black_box(&catalog),
                black_box(entry),
                DayKind::Weekday,
            ))
        })
    });

    let shift = catalog.shift(ShiftId::Shift2);
    c.bench_function("offered_meal_slots", |b| {
        b.iter(|| black_box(offered_meal_slots(black_box(&catalog), black_box(shift))))
    });
}

/// Benchmark: the derived meal ceiling, recomputed on every read.
fn bench_effective_ceiling(c: &mut Criterion) {
    let mut allocator = CapacityAllocator::new(&CapacityConfig::default());
    allocator.set_room_headcount(RoomId::Room1, 1);
    allocator.set_room_headcount(RoomId::Room3, 2);

    c.bench_function("effective_meal_ceiling", |b| {
        b.iter(|| black_box(allocator.effective_meal_ceiling(black_box(MealSlotId::Meal2))))
    });
}

/// Benchmark: a full submission (validation, commit, persistence).
fn bench_submit(c: &mut Criterion) {
    let now = Utc.with_ymd_and_hms(2026, 1, 12, 9, 30, 0).unwrap();

    let mut group = c.benchmark_group("workflow");
    group.throughput(Throughput::Elements(1));
    group.bench_function("submit", |b| {
        b.iter_batched(
            || {
                let mut config = CapacityConfig::default();
                config.default_shift_ceiling = u32::MAX;
                config.default_meal_ceiling = u32::MAX;
                let mut desk = RegistrationDesk::new(&config, MemoryStore::new());
                for room in RoomId::ALL {
                    desk.allocator_mut().set_room_headcount(room, 1);
                }
                desk
            },
            |mut desk| {
                let form = RegistrationForm {
                    employee_name: "Ana Torres".to_string(),
                    email: "ana.torres@example.com".to_string(),
                    entry_time: None,
                    shift: Some(ShiftId::Shift1),
                    meal_slot: Some(MealSlotId::Meal2),
                };
                let stored = desk.submit(&form, now).unwrap();
                desk.acknowledge();
                black_box(stored)
            },
            criterion::BatchSize::SmallInput,
        )
    });
    group.finish();
}

/// Benchmark: availability evaluation through the HTTP surface.
fn bench_availability_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = AppState::new(&CapacityConfig::default());
    let router = create_router(state);

    c.bench_function("availability_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .uri("/availability?date=2026-01-12&entry_time=09:30&shift=shift1")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_eligibility,
    bench_effective_ceiling,
    bench_submit,
    bench_availability_endpoint,
);
criterion_main!(benches);
