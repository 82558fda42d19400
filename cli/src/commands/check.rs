use anyhow::Context;
use colored::*;

use crate::{
    mprint,
    terminal::{colors, format, print, spinner},
};
use revadd_common::config::Config;
use revadd_common::{success, warn};
use revadd_core::explore::{Outcome, explore_traced};
use revadd_digits::DigitSeq;

/// Runs reverse-and-add on a single value of any size, showing every
/// intermediate step. Values past 64 bits are welcome here; the sweep
/// grammar sends them this way.
pub fn check(value: &str, cfg: &Config) -> anyhow::Result<()> {
    let seed: DigitSeq = value
        .parse()
        .with_context(|| format!("'{value}' is not a decimal value"))?;

    let (outcome, trajectory) = explore_traced(seed, cfg.max_steps);

    if cfg.quiet == 0 {
        print_trajectory(&trajectory, cfg);
    }
    print_outcome(&outcome, cfg);

    spinner::finish();
    Ok(())
}

fn print_trajectory(trajectory: &[DigitSeq], cfg: &Config) {
    let last_step = trajectory.len() - 1;
    let key_width = format!("Step {last_step}").len();
    print::GLOBAL_KEY_WIDTH.set(key_width);

    for (step, value) in trajectory.iter().enumerate() {
        let preview = format::digit_preview(value, cfg.digits_shown);
        let rendered: ColoredString = if step == last_step && value.is_palindrome() {
            preview.color(colors::PALINDROME).bold()
        } else {
            preview.color(colors::TEXT_DEFAULT)
        };
        print::aligned_line(&format!("Step {step}"), rendered);
    }
}

fn print_outcome(outcome: &Outcome, cfg: &Config) {
    mprint!();
    match outcome {
        Outcome::Found { palindrome, steps: 0 } => {
            let value = format::digit_preview(palindrome, cfg.digits_shown)
                .color(colors::PALINDROME)
                .bold();
            success!("{value} already reads the same both ways");
        }
        Outcome::Found { palindrome, steps } => {
            let value = format::digit_preview(palindrome, cfg.digits_shown)
                .color(colors::PALINDROME)
                .bold();
            let unit: &str = if *steps == 1 { "addition" } else { "additions" };
            let count = format!("{steps} {unit}").bold().yellow();
            success!("Palindrome {value} reached after {count}");
        }
        Outcome::GaveUp { steps, last_value } => {
            let width = format!("{} digits", last_value.len()).bold().red();
            warn!("No palindrome within {steps} additions; the value has grown to {width}");
        }
    }
}
