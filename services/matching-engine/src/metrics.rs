//! Observability for the matching engine
//!
//! Counter and latency collection for Prometheus-style monitoring. The
//! solvers themselves stay pure; [`Instrumented`] wraps the engine entry
//! points and reports into a shared [`SolverMetrics`] sink, which tolerates
//! concurrent updates from parallel calls.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Instant;

use types::applicant::Applicant;
use types::assignment::MatchOutcome;
use types::slot::Slot;

use crate::engine::MatchingEngine;

/// Core metrics for the matching engine
pub struct SolverMetrics {
    pub greedy_solves: AtomicU64,
    pub stable_solves: AtomicU64,
    pub stable_faults: AtomicU64,
    pub assignments_produced: AtomicU64,
    pub solve_latency_ns: Mutex<LatencyTracker>,
}

impl SolverMetrics {
    pub fn new() -> Self {
        Self {
            greedy_solves: AtomicU64::new(0),
            stable_solves: AtomicU64::new(0),
            stable_faults: AtomicU64::new(0),
            assignments_produced: AtomicU64::new(0),
            solve_latency_ns: Mutex::new(LatencyTracker::new(1000)),
        }
    }

    /// Record a completed greedy solve.
    pub fn record_greedy(&self, latency_ns: u64, assignments: u64) {
        self.greedy_solves.fetch_add(1, Ordering::Relaxed);
        self.record_common(latency_ns, assignments);
    }

    /// Record a completed stable solve.
    pub fn record_stable(&self, latency_ns: u64, assignments: u64, faulted: bool) {
        self.stable_solves.fetch_add(1, Ordering::Relaxed);
        if faulted {
            self.stable_faults.fetch_add(1, Ordering::Relaxed);
        }
        self.record_common(latency_ns, assignments);
    }

    fn record_common(&self, latency_ns: u64, assignments: u64) {
        self.assignments_produced
            .fetch_add(assignments, Ordering::Relaxed);
        if let Ok(mut tracker) = self.solve_latency_ns.lock() {
            tracker.record(latency_ns);
        }
    }

    /// Export metrics as a BTreeMap for Prometheus-style exposition.
    pub fn export(&self) -> BTreeMap<String, u64> {
        let mut m = BTreeMap::new();
        m.insert(
            "greedy_solves".to_string(),
            self.greedy_solves.load(Ordering::Relaxed),
        );
        m.insert(
            "stable_solves".to_string(),
            self.stable_solves.load(Ordering::Relaxed),
        );
        m.insert(
            "stable_faults".to_string(),
            self.stable_faults.load(Ordering::Relaxed),
        );
        m.insert(
            "assignments_produced".to_string(),
            self.assignments_produced.load(Ordering::Relaxed),
        );
        if let Ok(tracker) = self.solve_latency_ns.lock() {
            if let Some(p99) = tracker.percentile(99) {
                m.insert("solve_latency_p99_ns".to_string(), p99);
            }
            if let Some(avg) = tracker.average() {
                m.insert("solve_latency_avg_ns".to_string(), avg);
            }
        }
        m
    }
}

impl Default for SolverMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Engine decorator that records invocation counts and latency
///
/// Wraps the two entry points without touching matching semantics, so the
/// same engine serves instrumented and bare callers alike.
#[derive(Clone)]
pub struct Instrumented {
    engine: MatchingEngine,
    metrics: Arc<SolverMetrics>,
}

impl Instrumented {
    pub fn new(engine: MatchingEngine, metrics: Arc<SolverMetrics>) -> Self {
        Self { engine, metrics }
    }

    pub fn metrics(&self) -> &Arc<SolverMetrics> {
        &self.metrics
    }

    pub fn solve_greedy(&self, applicants: &[Applicant], slots: &[Slot]) -> MatchOutcome {
        let start = Instant::now();
        let outcome = self.engine.solve_greedy(applicants, slots);
        self.metrics.record_greedy(
            start.elapsed().as_nanos() as u64,
            outcome.len() as u64,
        );
        outcome
    }

    pub fn solve_stable(&self, applicants: &[Applicant], slots: &[Slot]) -> MatchOutcome {
        let start = Instant::now();
        let outcome = self.engine.solve_stable(applicants, slots);
        // The stable entry point only clears the flag on an internal fault
        self.metrics.record_stable(
            start.elapsed().as_nanos() as u64,
            outcome.len() as u64,
            !outcome.stable,
        );
        outcome
    }
}

/// Tracks latency samples in a bounded window for percentile calculation.
pub struct LatencyTracker {
    samples: Vec<u64>,
    max_samples: usize,
}

impl LatencyTracker {
    pub fn new(max_samples: usize) -> Self {
        Self {
            samples: Vec::with_capacity(max_samples),
            max_samples,
        }
    }

    /// Record a latency sample, evicting the oldest past the window.
    pub fn record(&mut self, value: u64) {
        if self.samples.len() >= self.max_samples {
            self.samples.remove(0);
        }
        self.samples.push(value);
    }

    /// Get a percentile value (0-100).
    pub fn percentile(&self, p: usize) -> Option<u64> {
        if self.samples.is_empty() {
            return None;
        }

        let mut sorted = self.samples.clone();
        sorted.sort_unstable();

        let idx = (p as f64 / 100.0 * (sorted.len() - 1) as f64) as usize;
        Some(sorted[idx.min(sorted.len() - 1)])
    }

    /// Average latency.
    pub fn average(&self) -> Option<u64> {
        if self.samples.is_empty() {
            return None;
        }
        let sum: u64 = self.samples.iter().sum();
        Some(sum / self.samples.len() as u64)
    }

    /// Number of samples recorded.
    pub fn count(&self) -> usize {
        self.samples.len()
    }
}
