//! A **work-stealing** sweep over a rayon pool.
//!
//! Candidates are independent, so they fan out across worker threads with no
//! coordination beyond the shared progress and stop atomics. Pool sizing
//! defaults to rayon's global pool; an explicit worker count builds a scoped
//! pool instead.

use std::sync::atomic::Ordering;

use async_trait::async_trait;
use rayon::prelude::*;

use super::{SweepControls, SweepRunner, explore_candidate};
use crate::report::CandidateReport;

pub struct ParallelSweep;

#[async_trait]
impl SweepRunner for ParallelSweep {
    async fn run(
        &self,
        candidates: Vec<u64>,
        controls: SweepControls,
    ) -> anyhow::Result<Vec<CandidateReport>> {
        let threads = controls.threads;

        let reports = tokio::task::spawn_blocking(
            move || -> anyhow::Result<Vec<CandidateReport>> {
                let sweep = move || {
                    candidates
                        .into_par_iter()
                        // Sheds remaining work once a stop is requested;
                        // candidates already in flight run to completion.
                        .filter(|_| !controls.stop.load(Ordering::Relaxed))
                        .map(|seed| explore_candidate(seed, &controls))
                        .collect()
                };

                match threads {
                    Some(count) => {
                        let pool = rayon::ThreadPoolBuilder::new()
                            .num_threads(count)
                            .thread_name(|idx| format!("revadd-worker-{idx}"))
                            .build()?;
                        Ok(pool.install(sweep))
                    }
                    None => Ok(sweep()),
                }
            },
        )
        .await??;

        Ok(reports)
    }
}
