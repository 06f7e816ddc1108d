//! Property-based tests for handler chains

use crate::common::{calls, CountingHandler};
use authflow::chain::HandlerChain;
use authflow::shared::{Request, ValidationError};
use proptest::prelude::*;

/// Build a chain from per-node verdicts, returning the call counters
fn chain_of(verdicts: &[bool]) -> (HandlerChain, Vec<std::sync::Arc<std::sync::atomic::AtomicUsize>>) {
    let mut nodes = Vec::new();
    let mut counters = Vec::new();
    for (i, fails) in verdicts.iter().enumerate() {
        let error = ValidationError::ALL[i % ValidationError::ALL.len()];
        let (node, counter) = CountingHandler::with_counter(&format!("h{}", i), fails.then_some(error));
        nodes.push(node);
        counters.push(counter);
    }
    (HandlerChain::link(nodes), counters)
}

proptest! {
    #[test]
    fn test_first_failure_decides(verdicts in prop::collection::vec(any::<bool>(), 0..12)) {
        let (chain, counters) = chain_of(&verdicts);
        let first_failure = verdicts.iter().position(|fails| *fails);

        let result = chain.handle(&Request::default());
        let expected = first_failure.map(|i| ValidationError::ALL[i % ValidationError::ALL.len()]);
        prop_assert_eq!(result, expected);

        let stop = first_failure.unwrap_or(verdicts.len().saturating_sub(1));
        for (i, counter) in counters.iter().enumerate() {
            let expected_calls = if verdicts.is_empty() || i > stop { 0 } else { 1 };
            prop_assert_eq!(calls(counter), expected_calls);
        }
    }

    #[test]
    fn test_sub_chain_equivalence(verdicts in prop::collection::vec(any::<bool>(), 1..12)) {
        let (chain, _) = chain_of(&verdicts);
        let request = Request::default();
        let full = chain.handle(&request);

        // Every entry point at or before the first failure gives the full-chain answer.
        let first_failure = verdicts.iter().position(|fails| *fails).unwrap_or(verdicts.len() - 1);
        for entry in 0..=first_failure {
            let node = chain.node(entry).unwrap();
            prop_assert_eq!(node.handle(&request), full);
        }
    }

    #[test]
    fn test_next_walk_visits_every_node(len in 0usize..12) {
        let (chain, _) = chain_of(&vec![false; len]);
        let mut visited = 0;
        let mut node = chain.head();
        while let Some(current) = node {
            prop_assert_eq!(current.position(), visited);
            visited += 1;
            node = current.next();
        }
        prop_assert_eq!(visited, len);
    }
}
