// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::collections::HashSet;
use std::thread;

use arbor_core::{next_instance_id, process_allocator, InstanceId, SerialAllocator};
use proptest::prelude::*;

#[test]
fn process_allocator_never_repeats_across_threads() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 1_000;

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            thread::spawn(|| {
                (0..PER_THREAD)
                    .map(|_| next_instance_id())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        let ids = handle.join().expect("allocation thread panicked");
        // Per-thread order must still be strictly increasing: each id is drawn
        // after the previous one completed.
        for pair in ids.windows(2) {
            assert!(pair[1] > pair[0]);
        }
        for id in ids {
            assert!(seen.insert(id), "id {id} was issued twice");
        }
    }
    assert_eq!(seen.len(), THREADS * PER_THREAD);
}

#[test]
fn allocator_state_is_reached_only_through_next() {
    // The counter is private; the public surface issues ids one at a time and
    // never exposes a way to rewind or reuse.
    let alloc = SerialAllocator::new();
    let first = alloc.next();
    let second = alloc.next();
    assert_eq!(first, InstanceId::from_raw(1));
    assert_eq!(second, InstanceId::from_raw(2));
}

#[test]
fn process_allocator_is_one_instance() {
    let a = process_allocator().next();
    let b = next_instance_id();
    assert!(b > a, "both paths must draw from the same counter");
}

proptest! {
    /// For any N, a fresh allocator issues N pairwise-distinct ids in strictly
    /// increasing call order.
    #[test]
    fn fresh_allocator_issues_distinct_increasing_ids(n in 1usize..512) {
        let alloc = SerialAllocator::new();
        let ids: Vec<InstanceId> = (0..n).map(|_| alloc.next()).collect();
        for pair in ids.windows(2) {
            prop_assert!(pair[1] > pair[0]);
        }
        let unique: HashSet<_> = ids.iter().copied().collect();
        prop_assert_eq!(unique.len(), ids.len());
    }
}
