// Chain evaluation benchmarks.
//
// Measures the per-rule cost of the evaluation loop with trivial projections
// and predicates, and the cost of an early short-circuit.

use std::hint::black_box;

use chain_validator::prelude::*;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

struct Person {
    name: String,
    age: u32,
    developer: bool,
}

fn person() -> Person {
    Person {
        name: "Mario".to_string(),
        age: 25,
        developer: true,
    }
}

fn passing_chain(rules: usize) -> Chain<'static, Person> {
    (0..rules)
        .fold(ChainBuilder::<Person>::new(), |builder, i| match i % 3 {
            0 => builder.link(|p| &p.name, |name| !name.is_empty()),
            1 => builder.link(|p| &p.age, |age| *age > 18),
            _ => builder.link_with_message(|p| &p.developer, |dev| *dev, "not a developer"),
        })
        .with_sink(NoopSink)
        .bond()
}

fn bench_passing(c: &mut Criterion) {
    let subject = person();
    let mut group = c.benchmark_group("passing_chain");
    for rules in [1_usize, 8, 64] {
        let chain = passing_chain(rules);
        group.bench_with_input(BenchmarkId::from_parameter(rules), &chain, |b, chain| {
            b.iter(|| chain.check(black_box(&subject)));
        });
    }
    group.finish();
}

fn bench_short_circuit(c: &mut Criterion) {
    let subject = person();
    let chain = ChainBuilder::<Person>::new()
        .link_with_message(|p| &p.name, |name| name == "Mauro", "bad name")
        .link(|p| &p.age, |age| *age > 18)
        .link(|p| &p.developer, |dev| *dev)
        .with_sink(NoopSink)
        .bond();

    c.bench_function("short_circuit_first_rule", |b| {
        b.iter(|| chain.check(black_box(&subject)));
    });
}

criterion_group!(benches, bench_passing, bench_short_circuit);
criterion_main!(benches);
