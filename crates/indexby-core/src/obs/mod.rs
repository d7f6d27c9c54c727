//! Observability: thread-local event counters for generation, filtering,
//! and memoization.
//!
//! Accessor and relation logic never touch counter state directly; every
//! instrumentation point flows through [`MetricsEvent`] and [`record`].
//! Thread-local by construction: generation and finalization run on one
//! initialization thread, so no synchronization is provided.


use serde::Serialize;
use std::{cell::RefCell, collections::BTreeMap};

thread_local! {
    static METRICS: RefCell<EventState> = RefCell::new(EventState::default());
}

///
/// MetricsEvent
///

#[derive(Clone, Copy, Debug)]
pub enum MetricsEvent<'a> {
    Finalize { relation: &'a str },
    AccessorsGenerated { relation: &'a str, count: u64 },
    Restrict { relation: &'a str },
    MemoHit { relation: &'a str },
    MemoMiss { relation: &'a str },
    Curry { relation: &'a str },
}

///
/// EventOps
/// Process-wide operation counters.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct EventOps {
    pub finalize_calls: u64,
    pub accessors_generated: u64,
    pub restrict_calls: u64,
    pub memo_hits: u64,
    pub memo_misses: u64,
    pub partial_applications: u64,
}

///
/// RelationCounters
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct RelationCounters {
    pub finalize_calls: u64,
    pub accessors_generated: u64,
    pub restrict_calls: u64,
    pub memo_hits: u64,
    pub memo_misses: u64,
    pub partial_applications: u64,
}

///
/// EventState
/// Ephemeral, in-memory counters; reset only via [`metrics_reset_all`].
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct EventState {
    pub ops: EventOps,
    pub relations: BTreeMap<String, RelationCounters>,
}

/// Record one event against the global and per-relation counters.
pub(crate) fn record(event: &MetricsEvent<'_>) {
    METRICS.with_borrow_mut(|state| {
        let relation = match event {
            MetricsEvent::Finalize { relation }
            | MetricsEvent::AccessorsGenerated { relation, .. }
            | MetricsEvent::Restrict { relation }
            | MetricsEvent::MemoHit { relation }
            | MetricsEvent::MemoMiss { relation }
            | MetricsEvent::Curry { relation } => (*relation).to_string(),
        };
        let counters = state.relations.entry(relation).or_default();

        match event {
            MetricsEvent::Finalize { .. } => {
                state.ops.finalize_calls += 1;
                counters.finalize_calls += 1;
            }
            MetricsEvent::AccessorsGenerated { count, .. } => {
                state.ops.accessors_generated += count;
                counters.accessors_generated += count;
            }
            MetricsEvent::Restrict { .. } => {
                state.ops.restrict_calls += 1;
                counters.restrict_calls += 1;
            }
            MetricsEvent::MemoHit { .. } => {
                state.ops.memo_hits += 1;
                counters.memo_hits += 1;
            }
            MetricsEvent::MemoMiss { .. } => {
                state.ops.memo_misses += 1;
                counters.memo_misses += 1;
            }
            MetricsEvent::Curry { .. } => {
                state.ops.partial_applications += 1;
                counters.partial_applications += 1;
            }
        }
    });
}

/// Snapshot the current counters.
#[must_use]
pub fn metrics_report() -> EventState {
    METRICS.with_borrow(Clone::clone)
}

/// Reset all counters to zero.
pub fn metrics_reset_all() {
    METRICS.with_borrow_mut(|state| *state = EventState::default());
}
