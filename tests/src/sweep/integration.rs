#![cfg(test)]
use revadd_common::candidates::{self, CandidateSet, SeedRange, SweepTarget};
use revadd_common::config::Config;
use revadd_core::explore::Outcome;
use revadd_core::report::SweepStats;
use revadd_core::sweep;
use revadd_digits::DigitSeq;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// This test verifies the full path from a single queued candidate to a
/// converged report. It uses the 'perform_sweep' entry point, which
/// automatically picks the sequential strategy for lone candidates.
#[tokio::test]
async fn sweep_single_candidate_converges() {
    let config: Config = Config {
        max_steps: 1000,
        threads: None,
        sequential: false,
        quiet: 0,
        no_banner: true,
        disable_input: true,
        digits_shown: 24,
    };

    let mut targets: CandidateSet = CandidateSet::new();
    targets.add_single(19);

    let result = sweep::perform_sweep(
        &targets,
        &config,
        Arc::new(AtomicUsize::new(0)),
        Arc::new(AtomicBool::new(false)),
    )
    .await;

    assert!(result.is_ok(), "Sweep failed: {:?}", result.err());
    let reports = result.unwrap();
    assert_eq!(reports.len(), 1, "Exactly one candidate was queued");

    let expected: DigitSeq = "121".parse().unwrap();
    match &reports[0].outcome {
        Outcome::Found { palindrome, steps } => {
            assert_eq!(palindrome, &expected, "19 converges to 121");
            assert_eq!(*steps, 2, "19 needs exactly two additions");
        }
        other => panic!("19 should converge, got {:?}", other),
    }
}

#[tokio::test]
async fn sweep_classic_range_all_converge() {
    let config: Config = Config {
        max_steps: 1000,
        threads: None,
        sequential: false,
        quiet: 0,
        no_banner: true,
        disable_input: true,
        digits_shown: 24,
    };

    let target = SweepTarget::from_str("classic").expect("keyword should parse");
    let targets = candidates::to_candidates(target).expect("classic should resolve");

    let reports = sweep::perform_sweep(
        &targets,
        &config,
        Arc::new(AtomicUsize::new(0)),
        Arc::new(AtomicBool::new(false)),
    )
    .await
    .expect("sweep should succeed");

    assert_eq!(reports.len(), 186, "Classic covers 10 through 195");
    assert!(
        reports.iter().all(|report| report.outcome.converged()),
        "Every seed below 196 converges"
    );

    // 89 is the famous slow one down here: 24 additions.
    let stats = SweepStats::tally(&reports);
    assert_eq!(stats.most_delayed, Some((89, 24)));
}

#[tokio::test]
async fn sweep_suspects_hold_out_at_default_budget() {
    let config: Config = Config {
        max_steps: 1000,
        threads: None,
        sequential: false,
        quiet: 0,
        no_banner: true,
        disable_input: true,
        digits_shown: 24,
    };

    let targets = candidates::to_candidates(SweepTarget::Suspects).expect("suspects resolve");

    let reports = sweep::perform_sweep(
        &targets,
        &config,
        Arc::new(AtomicUsize::new(0)),
        Arc::new(AtomicBool::new(false)),
    )
    .await
    .expect("sweep should succeed");

    assert_eq!(reports.len(), 13);
    for report in &reports {
        match &report.outcome {
            Outcome::GaveUp { steps, last_value } => {
                assert_eq!(*steps, 1000, "budget spent in full on {}", report.seed);
                assert!(!last_value.is_palindrome());
                assert!(
                    last_value.len() > 100,
                    "a thousand additions grow {} far past 100 digits, got {}",
                    report.seed,
                    last_value.len()
                );
            }
            other => panic!("{} unexpectedly converged: {:?}", report.seed, other),
        }
    }
}

#[tokio::test]
async fn sweep_strategies_agree() {
    // 10-250 mixes quick convergents with the 196 holdout; both
    // strategies must report identical outcomes either way.
    let range = SeedRange::new(10, 250).unwrap();

    let mut targets: CandidateSet = CandidateSet::new();
    targets.add_range(range);

    let sequential_cfg: Config = Config {
        max_steps: 300,
        threads: None,
        sequential: true,
        quiet: 0,
        no_banner: true,
        disable_input: true,
        digits_shown: 24,
    };
    let parallel_cfg: Config = Config {
        max_steps: 300,
        threads: Some(4),
        sequential: false,
        quiet: 0,
        no_banner: true,
        disable_input: true,
        digits_shown: 24,
    };

    let sequential = sweep::perform_sweep(
        &targets,
        &sequential_cfg,
        Arc::new(AtomicUsize::new(0)),
        Arc::new(AtomicBool::new(false)),
    )
    .await
    .expect("sequential sweep should succeed");

    let parallel = sweep::perform_sweep(
        &targets,
        &parallel_cfg,
        Arc::new(AtomicUsize::new(0)),
        Arc::new(AtomicBool::new(false)),
    )
    .await
    .expect("parallel sweep should succeed");

    assert_eq!(sequential, parallel);
    assert_eq!(sequential.len(), 241);
}

#[tokio::test]
async fn sweep_progress_counter_reaches_total() {
    let config: Config = Config {
        max_steps: 1000,
        threads: None,
        sequential: false,
        quiet: 0,
        no_banner: true,
        disable_input: true,
        digits_shown: 24,
    };

    let mut targets: CandidateSet = CandidateSet::new();
    targets.add_range(SeedRange::new(10, 99).unwrap());

    let progress = Arc::new(AtomicUsize::new(0));
    let reports = sweep::perform_sweep(
        &targets,
        &config,
        progress.clone(),
        Arc::new(AtomicBool::new(false)),
    )
    .await
    .expect("sweep should succeed");

    assert_eq!(reports.len(), 90);
    assert_eq!(progress.load(Ordering::Relaxed), 90);
}

#[tokio::test]
async fn sweep_preset_stop_yields_nothing() {
    let config: Config = Config {
        max_steps: 1000,
        threads: None,
        sequential: true,
        quiet: 0,
        no_banner: true,
        disable_input: true,
        digits_shown: 24,
    };

    let mut targets: CandidateSet = CandidateSet::new();
    targets.add_range(SeedRange::new(10, 99).unwrap());

    let stop = Arc::new(AtomicBool::new(true));
    let reports = sweep::perform_sweep(&targets, &config, Arc::new(AtomicUsize::new(0)), stop)
        .await
        .expect("an interrupted sweep still returns cleanly");

    assert!(reports.is_empty(), "stop was raised before the first candidate");
}

#[tokio::test]
async fn sweep_comma_list_targets() {
    let config: Config = Config {
        max_steps: 1000,
        threads: None,
        sequential: false,
        quiet: 0,
        no_banner: true,
        disable_input: true,
        digits_shown: 24,
    };

    let target = SweepTarget::from_str("19,59,100-110").expect("list should parse");
    let targets = candidates::to_candidates(target).expect("list should resolve");
    assert_eq!(targets.len(), 13);

    let reports = sweep::perform_sweep(
        &targets,
        &config,
        Arc::new(AtomicUsize::new(0)),
        Arc::new(AtomicBool::new(false)),
    )
    .await
    .expect("sweep should succeed");

    assert_eq!(reports.len(), 13);
    assert!(reports.iter().all(|report| report.outcome.converged()));
    assert!(
        reports.windows(2).all(|pair| pair[0].seed < pair[1].seed),
        "reports come back sorted by seed"
    );
}
