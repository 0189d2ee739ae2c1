//! Basic usage example for chain-validator

use std::sync::Arc;

use chain_validator::prelude::*;

struct Order {
    id: String,
    quantity: u32,
    unit_price_cents: u64,
}

fn main() {
    let sink = Arc::new(MemorySink::new());

    // One unbound chain, reused for several orders
    let chain = ChainBuilder::<Order>::new()
        .link_with_message(|o| &o.id, |id| !id.is_empty(), "order id is required")
        .link_with_message(|o| &o.quantity, |q| (1..=100).contains(q), "quantity out of range")
        .link_map_with_message(
            |o| u64::from(o.quantity) * o.unit_price_cents,
            |total| *total <= 50_000,
            "order total exceeds limit",
        )
        .with_shared_sink(sink.clone())
        .bond();

    let orders = [
        Order {
            id: "A-1".into(),
            quantity: 2,
            unit_price_cents: 1_500,
        },
        Order {
            id: String::new(),
            quantity: 2,
            unit_price_cents: 1_500,
        },
        Order {
            id: "A-3".into(),
            quantity: 90,
            unit_price_cents: 1_500,
        },
    ];

    for order in &orders {
        match chain.check(order) {
            Ok(true) => println!("✓ '{}' is valid", order.id),
            Ok(false) => println!("✗ '{}' is invalid", order.id),
            Err(e) => println!("✗ Error: {e}"),
        }
    }

    for (severity, message) in sink.entries() {
        println!("  [{severity}] {message}");
    }
}
