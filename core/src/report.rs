//! # Sweep Results
//!
//! Plain data carried from the sweep back to the caller. Rendering
//! lives with the frontend; this module only aggregates.

use crate::explore::Outcome;

/// Result of exploring one candidate seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateReport {
    pub seed: u64,
    pub outcome: Outcome,
}

impl CandidateReport {
    pub fn new(seed: u64, outcome: Outcome) -> Self {
        Self { seed, outcome }
    }
}

/// Aggregate numbers over a finished sweep.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SweepStats {
    pub explored: usize,
    pub converged: usize,
    pub gave_up: usize,
    /// Converged seed that needed the most additions, with its step count.
    pub most_delayed: Option<(u64, u32)>,
}

impl SweepStats {
    pub fn tally(reports: &[CandidateReport]) -> Self {
        let mut stats = Self { explored: reports.len(), ..Self::default() };

        for report in reports {
            match &report.outcome {
                Outcome::Found { steps, .. } => {
                    stats.converged += 1;
                    if stats.most_delayed.is_none_or(|(_, best)| *steps > best) {
                        stats.most_delayed = Some((report.seed, *steps));
                    }
                }
                Outcome::GaveUp { .. } => stats.gave_up += 1,
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explore::explore;
    use revadd_digits::DigitSeq;

    fn report(seed: u64, max_steps: u32) -> CandidateReport {
        CandidateReport::new(seed, explore(DigitSeq::from_seed(seed), max_steps))
    }

    #[test]
    fn test_tally_counts_both_outcomes() {
        let reports = vec![report(19, 1000), report(59, 1000), report(196, 50)];
        let stats = SweepStats::tally(&reports);

        assert_eq!(stats.explored, 3);
        assert_eq!(stats.converged, 2);
        assert_eq!(stats.gave_up, 1);
    }

    #[test]
    fn test_tally_tracks_the_slowest_convergent() {
        // 19 needs 2 additions, 59 needs 3.
        let reports = vec![report(19, 1000), report(59, 1000)];
        let stats = SweepStats::tally(&reports);

        assert_eq!(stats.most_delayed, Some((59, 3)));
    }

    #[test]
    fn test_tally_of_nothing() {
        let stats = SweepStats::tally(&[]);
        assert_eq!(stats, SweepStats::default());
        assert!(stats.most_delayed.is_none());
    }
}
