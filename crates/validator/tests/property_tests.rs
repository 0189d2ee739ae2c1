//! Property-based tests for chain evaluation.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use chain_validator::prelude::{Chain, ChainBuilder, MemorySink};
use proptest::prelude::*;

/// Builds a chain where rule `i` returns `outcomes[i]` and counts how many
/// rules ran. Every rule carries the message `rule-{i}`.
fn scripted_chain(
    outcomes: &[bool],
    sink: Arc<MemorySink>,
) -> (Chain<'static, u32>, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let builder = outcomes
        .iter()
        .enumerate()
        .fold(ChainBuilder::<u32>::new(), |builder, (i, &outcome)| {
            let calls = Arc::clone(&calls);
            builder.link_map_with_message(
                move |_: &u32| {
                    calls.fetch_add(1, Ordering::SeqCst);
                    outcome
                },
                |outcome| *outcome,
                format!("rule-{i}"),
            )
        });
    (builder.with_shared_sink(sink).bond(), calls)
}

// ============================================================================
// RESULT: evaluate == all(outcomes)
// ============================================================================

proptest! {
    #[test]
    fn result_is_conjunction(outcomes in prop::collection::vec(any::<bool>(), 0..16)) {
        let (chain, _) = scripted_chain(&outcomes, Arc::new(MemorySink::new()));
        let expected = outcomes.iter().all(|o| *o);
        prop_assert_eq!(chain.check(&0), Ok(expected));
    }
}

// ============================================================================
// SHORT-CIRCUIT: rules after the first failure never run
// ============================================================================

proptest! {
    #[test]
    fn stops_at_first_failure(outcomes in prop::collection::vec(any::<bool>(), 0..16)) {
        let sink = Arc::new(MemorySink::new());
        let (chain, calls) = scripted_chain(&outcomes, sink.clone());
        let _ = chain.check(&0);

        match outcomes.iter().position(|o| !*o) {
            Some(first) => {
                prop_assert_eq!(calls.load(Ordering::SeqCst), first + 1);
                prop_assert_eq!(sink.messages(), vec![format!("rule-{first}")]);
            }
            None => {
                prop_assert_eq!(calls.load(Ordering::SeqCst), outcomes.len());
                prop_assert!(sink.is_empty());
            }
        }
    }
}

// ============================================================================
// IDEMPOTENCY: check(x) == check(x), same diagnostics each time
// ============================================================================

proptest! {
    #[test]
    fn evaluation_is_idempotent(
        outcomes in prop::collection::vec(any::<bool>(), 0..16),
        subject in any::<u32>(),
    ) {
        let sink = Arc::new(MemorySink::new());
        let (chain, _) = scripted_chain(&outcomes, sink.clone());

        let first = chain.check(&subject);
        let first_messages = sink.messages();
        sink.clear();
        let second = chain.check(&subject);

        prop_assert_eq!(first, second);
        prop_assert_eq!(first_messages, sink.messages());
    }
}

// ============================================================================
// VERDICT: index of the failure matches the first false outcome
// ============================================================================

proptest! {
    #[test]
    fn verdict_points_at_first_failure(outcomes in prop::collection::vec(any::<bool>(), 0..16)) {
        let (chain, _) = scripted_chain(&outcomes, Arc::new(MemorySink::new()));
        let verdict = chain.verdict(&0).unwrap();
        let index = verdict.failure().map(|f| f.index);
        prop_assert_eq!(index, outcomes.iter().position(|o| !*o));
    }
}
