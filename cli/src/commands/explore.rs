use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use anyhow;
use colored::*;

use crate::{
    mprint,
    terminal::{colors, format, print, spinner},
};
use revadd_common::candidates::{self, SweepTarget};
use revadd_common::config::Config;
use revadd_common::utils::input::InterruptListener;
use revadd_common::{success, warn};
use revadd_core::report::{CandidateReport, SweepStats};
use revadd_core::sweep;

pub async fn explore(target: SweepTarget, cfg: &Config) -> anyhow::Result<()> {
    let set = candidates::to_candidates(target)?;

    let progress: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
    let stop: Arc<AtomicBool> = Arc::new(AtomicBool::new(false));
    let running: Arc<AtomicBool> = Arc::new(AtomicBool::new(true));

    let mut listener = InterruptListener::new(running.clone(), stop.clone());
    if !cfg.disable_input {
        listener.start();
    }
    let watcher = spinner::watch_progress(progress.clone(), running.clone());

    let start_time: Instant = Instant::now();
    let outcome = sweep::perform_sweep(&set, cfg, progress, stop.clone()).await;

    running.store(false, Ordering::Relaxed);
    let _ = watcher.join();
    spinner::finish();

    let reports = outcome?;
    if stop.load(Ordering::Relaxed) {
        warn!(
            "Sweep interrupted: {} of {} candidates explored",
            reports.len(),
            set.len()
        );
    }

    sweep_ends(&reports, start_time.elapsed(), cfg);
    Ok(())
}

fn sweep_ends(reports: &[CandidateReport], total_time: Duration, cfg: &Config) {
    let stats = SweepStats::tally(reports);

    if stats.converged == 0 {
        print::header("ZERO PALINDROMES DETECTED", cfg.quiet);
        print::no_results();
        if reports.is_empty() {
            return;
        }
    } else {
        if cfg.quiet > 0 {
            mprint!();
        }
        print::header("Reverse-and-Add Sweep", cfg.quiet);
    }

    print_reports(reports, cfg);
    print_summary(&stats, total_time, cfg);
}

fn print_reports(reports: &[CandidateReport], cfg: &Config) {
    if cfg.quiet >= 2 {
        return;
    }

    for (idx, report) in reports.iter().enumerate() {
        print_report_tree(report, idx, cfg);
        if idx + 1 != reports.len() {
            mprint!();
        }
    }
}

fn print_summary(stats: &SweepStats, total_time: Duration, cfg: &Config) {
    let found: ColoredString = format!("{} palindromes", stats.converged).bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let mut line: String = format!("Exploration Complete: {found} identified in {total_time}");

    if stats.gave_up > 0 {
        let gave_up: ColoredString = format!("{} gave up", stats.gave_up).bold().red();
        line = format!("{line} ({gave_up})");
    }
    let output: &ColoredString = &line.color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output.to_string());
            if let Some((seed, steps)) = stats.most_delayed {
                let delayed = format!("Most delayed: {seed} needed {steps} additions")
                    .color(colors::TEXT_DEFAULT);
                print::centerln(&delayed.to_string());
            }
        }
        _ => {
            mprint!();
            success!("{}", output)
        }
    }
}

fn print_report_tree(report: &CandidateReport, idx: usize, cfg: &Config) {
    print::tree_head(idx, report.seed);
    print::as_tree_one_level(format::outcome_to_details(&report.outcome, cfg));
}
