//! A **one-at-a-time** sweep.
//!
//! Walks the candidate list in order on a single blocking thread. Used for
//! lone candidates and whenever deterministic, in-order progression matters
//! more than throughput.

use std::sync::atomic::Ordering;

use async_trait::async_trait;

use super::{SweepControls, SweepRunner, explore_candidate};
use crate::report::CandidateReport;

pub struct SequentialSweep;

#[async_trait]
impl SweepRunner for SequentialSweep {
    async fn run(
        &self,
        candidates: Vec<u64>,
        controls: SweepControls,
    ) -> anyhow::Result<Vec<CandidateReport>> {
        let reports = tokio::task::spawn_blocking(move || {
            let mut reports = Vec::with_capacity(candidates.len());

            for seed in candidates {
                if controls.stop.load(Ordering::Relaxed) {
                    break;
                }
                reports.push(explore_candidate(seed, &controls));
            }

            reports
        })
        .await?;

        Ok(reports)
    }
}
