//! Benchmark for the account dispatch styles.
//!
//! Compares sending a message by name, sending a typed request, calling a
//! table member looked up by name, and calling the member directly.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use message_passing::account::{MessageAccount, Request, TableAccount};
use std::hint::black_box;

// =============================================================================
// Single Deposit
// =============================================================================

fn benchmark_single_deposit(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("single_deposit");

    group.bench_function("dispatch_by_name", |bencher| {
        let mut account = MessageAccount::new(0_i64);
        bencher.iter(|| {
            let result = account
                .dispatch(black_box("deposit"))
                .and_then(|mut method| method.call(&[black_box(1)]));
            black_box(result)
        });
    });

    group.bench_function("send_typed_request", |bencher| {
        let mut account = MessageAccount::new(0_i64);
        bencher.iter(|| black_box(account.send(Request::Deposit).call(&[black_box(1)])));
    });

    group.bench_function("table_member_by_name", |bencher| {
        let mut account = TableAccount::new(0_i64);
        bencher.iter(|| {
            let result = account
                .member(black_box("deposit"))
                .map(|mut member| member.call(&[black_box(1)]));
            black_box(result)
        });
    });

    group.bench_function("table_direct_call", |bencher| {
        let mut account = TableAccount::new(0_i64);
        bencher.iter(|| black_box(account.deposit(black_box(1))));
    });

    group.finish();
}

// =============================================================================
// Operation Sequences
// =============================================================================

fn benchmark_sequence(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("deposit_withdraw_sequence");

    for size in [16_u64, 256, 4096] {
        group.throughput(Throughput::Elements(size));

        group.bench_with_input(
            BenchmarkId::new("dispatch_by_name", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut account = MessageAccount::new(0_i64);
                    for index in 0..size {
                        let message = if index % 2 == 0 { "deposit" } else { "withdraw" };
                        let _ = account.dispatch(message).and_then(|mut method| method.call(&[3]));
                    }
                    black_box(account)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("table_direct_call", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut account = TableAccount::new(0_i64);
                    for index in 0..size {
                        if index % 2 == 0 {
                            let _ = account.deposit(3);
                        } else {
                            let _ = account.withdraw(3);
                        }
                    }
                    black_box(account)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_single_deposit, benchmark_sequence);
criterion_main!(benches);
