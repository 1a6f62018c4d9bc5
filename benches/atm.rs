use atm::{roster::Roster, run::run};
use criterion::{criterion_group, criterion_main, Criterion};

fn visit(operations: usize) -> String {
    format!(
        "user1\n1234\n{}1\n5\n",
        "3\n100\n2\n40.5\n4\nuser2\n10\n2\n1000\n7\n".repeat(operations)
    )
}

pub fn bench_visit_100_operations(c: &mut Criterion) {
    c.bench_function("visit_100_operations", |b| {
        let cursor = std::io::Cursor::new(visit(100));

        b.iter(move || run(Roster::demo(), cursor.clone(), std::io::sink()))
    });
}

pub fn bench_visit_5000_operations(c: &mut Criterion) {
    c.bench_function("visit_5000_operations", |b| {
        let cursor = std::io::Cursor::new(visit(5_000));

        b.iter(move || run(Roster::demo(), cursor.clone(), std::io::sink()))
    });
}

criterion_group!(
    benches,
    bench_visit_100_operations,
    bench_visit_5000_operations,
);
criterion_main!(benches);
