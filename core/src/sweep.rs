//! The central **abstraction** for batch exploration.
//!
//! This module defines the unified interface that specific sweep strategies
//! (such as the [`parallel`] rayon pool or the one-at-a-time [`sequential`]
//! walk) must implement, and owns the shared counters threaded through a
//! running sweep.
//!
//! **Architectural Note:**
//! Frontends should depend on [`perform_sweep`] rather than on concrete
//! submodules. The dispatch here picks the underlying technique; callers only
//! describe what to explore and watch the progress counter.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use anyhow::ensure;
use async_trait::async_trait;
use revadd_common::candidates::CandidateSet;
use revadd_common::config::Config;
use revadd_digits::DigitSeq;

use crate::explore::explore;
use crate::report::CandidateReport;

mod parallel;
mod sequential;

use parallel::ParallelSweep;
use sequential::SequentialSweep;

/// Shared state a strategy needs while it runs: the per-candidate step
/// budget, an optional worker count, and the two atomics the frontend
/// watches and flips.
#[derive(Clone)]
pub struct SweepControls {
    pub max_steps: u32,
    pub threads: Option<usize>,
    pub progress: Arc<AtomicUsize>,
    pub stop: Arc<AtomicBool>,
}

/// Defines the lifecycle of one sweep technique.
///
/// A runner consumes the candidate list, explores each seed, and returns
/// one report per candidate it got to before a stop request.
#[async_trait]
pub trait SweepRunner {
    async fn run(
        &self,
        candidates: Vec<u64>,
        controls: SweepControls,
    ) -> anyhow::Result<Vec<CandidateReport>>;
}

/// Executes a full exploration cycle against the specified candidates.
///
/// Reports come back sorted by seed regardless of the completion order
/// inside the strategy.
pub async fn perform_sweep(
    set: &CandidateSet,
    cfg: &Config,
    progress: Arc<AtomicUsize>,
    stop: Arc<AtomicBool>,
) -> anyhow::Result<Vec<CandidateReport>> {
    let candidates = set.materialize();
    ensure!(!candidates.is_empty(), "nothing to explore");

    let controls = SweepControls {
        max_steps: cfg.max_steps,
        threads: cfg.threads,
        progress,
        stop,
    };

    // A single candidate gains nothing from a pool.
    let runner: Box<dyn SweepRunner + Send + Sync> =
        if cfg.sequential || candidates.len() == 1 {
            Box::new(SequentialSweep)
        } else {
            Box::new(ParallelSweep)
        };

    let mut reports = runner.run(candidates, controls).await?;
    reports.sort_by_key(|report| report.seed);
    Ok(reports)
}

/// Explores one seed and bumps the shared progress counter.
fn explore_candidate(seed: u64, controls: &SweepControls) -> CandidateReport {
    let outcome = explore(DigitSeq::from_seed(seed), controls.max_steps);
    controls.progress.fetch_add(1, Ordering::Relaxed);
    CandidateReport::new(seed, outcome)
}
