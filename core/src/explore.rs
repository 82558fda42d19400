//! # Reverse-and-Add Iteration
//!
//! Drives a single candidate through repeated reverse-and-add steps
//! until the value reads the same both ways or the step budget runs out.

use revadd_digits::{DigitSeq, add};
use tracing::trace;

/// Terminal state of one candidate's exploration.
///
/// Running out of budget is an expected result, not a failure: for the
/// suspected Lychrel seeds nobody knows whether any budget would suffice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A palindrome appeared after `steps` additions.
    Found { palindrome: DigitSeq, steps: u32 },
    /// The budget ran out; `last_value` is where the process stopped.
    GaveUp { steps: u32, last_value: DigitSeq },
}

impl Outcome {
    pub fn converged(&self) -> bool {
        matches!(self, Outcome::Found { .. })
    }

    /// Additions performed before the process stopped.
    pub fn steps(&self) -> u32 {
        match self {
            Outcome::Found { steps, .. } | Outcome::GaveUp { steps, .. } => *steps,
        }
    }
}

/// Runs reverse-and-add on `seed` until a palindrome appears or
/// `max_steps` additions have been spent.
///
/// Steps count additions, so a seed that already reads the same both
/// ways is `Found` at zero steps.
pub fn explore(seed: DigitSeq, max_steps: u32) -> Outcome {
    let mut current = seed;
    let mut steps: u32 = 0;

    loop {
        let reversed = current.reversed();
        if reversed == current {
            return Outcome::Found { palindrome: current, steps };
        }
        if steps == max_steps {
            return Outcome::GaveUp { steps, last_value: current };
        }

        current = add(&current, &reversed);
        steps += 1;
        trace!(step = steps, width = current.len(), "reverse-and-add");
    }
}

/// Like [`explore`], additionally recording every value the process
/// visits: the seed first, the terminal value last.
pub fn explore_traced(seed: DigitSeq, max_steps: u32) -> (Outcome, Vec<DigitSeq>) {
    let mut trajectory = vec![seed.clone()];
    let mut current = seed;
    let mut steps: u32 = 0;

    loop {
        let reversed = current.reversed();
        if reversed == current {
            return (Outcome::Found { palindrome: current, steps }, trajectory);
        }
        if steps == max_steps {
            return (Outcome::GaveUp { steps, last_value: current }, trajectory);
        }

        current = add(&current, &reversed);
        steps += 1;
        trajectory.push(current.clone());
    }
}
