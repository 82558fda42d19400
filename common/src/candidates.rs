//! # Sweep Target Model
//!
//! Defines the possible inputs for a reverse-and-add sweep.
//!
//! This module handles parsing and representing candidate selections,
//! which can be:
//! * A single starting number (e.g., `196`).
//! * An inclusive seed range (e.g., `10-196`).
//! * A comma-separated mix of both (e.g., `19,59,100-150`).
//! * A named sweep (`classic`, `suspects`).

use std::collections::BTreeSet;
use std::str::FromStr;

use thiserror::Error;

use crate::{info, success};

/// First seed of the canonical sweep.
pub const CLASSIC_FIRST: u64 = 10;
/// Last seed of the canonical sweep, stopping just short of the famous
/// holdout at 196. Every seed in between converges quickly.
pub const CLASSIC_LAST: u64 = 195;

/// Suspected Lychrel seeds below 1000. None is proven; all have resisted
/// millions of iterations.
pub const SUSPECTS: [u64; 13] = [
    196, 295, 394, 493, 592, 689, 691, 788, 790, 879, 887, 978, 986,
];

/// Represents a distinct selection of candidates to sweep.
#[derive(Clone, Debug)]
pub enum SweepTarget {
    /// Explore a single starting number.
    Single { seed: u64 },
    /// Explore an inclusive range of starting numbers.
    Range { seed_range: SeedRange },
    /// The canonical 10-195 sweep; the classic warm-up before 196.
    Classic,
    /// The suspected Lychrel seeds below 1000.
    Suspects,
    /// Holds a list of different targets.
    Multi { targets: Vec<SweepTarget> },
}

impl FromStr for SweepTarget {
    type Err = String;

    /// Parses a string into a `SweepTarget`.
    ///
    /// Supported formats:
    /// * **Keywords**: "classic", "suspects" (case-insensitive).
    /// * **Seed**: a single positive integer (e.g., "196").
    /// * **Range**: "First-Last", inclusive (e.g., "10-196").
    /// * **List**: comma-separated seeds and ranges (e.g., "19,59,100-150").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();

        if let Some(target) = parse_keyword(&lower) {
            return Ok(target);
        }

        if s.contains(',') {
            return parse_commas(s).map_err(|e| e.to_string());
        }

        if let Some(target) = parse_single(s)? {
            return Ok(target);
        }

        if let Some(target) = parse_seed_range(s)? {
            return Ok(target);
        }

        Err(format!("invalid target: {s}"))
    }
}

/// Rejected candidate selections.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CandidateError {
    /// Zero never participates: the process is defined on positive integers.
    #[error("seeds start at 1")]
    Zero,
    /// Ranges are inclusive and must run forwards.
    #[error("range {first}-{last} runs backwards")]
    Inverted { first: u64, last: u64 },
}

/// An inclusive range of starting numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeedRange {
    pub first: u64,
    pub last: u64,
}

impl SeedRange {
    pub fn new(first: u64, last: u64) -> Result<Self, CandidateError> {
        if first == 0 {
            return Err(CandidateError::Zero);
        }
        if first > last {
            return Err(CandidateError::Inverted { first, last });
        }
        Ok(Self { first, last })
    }

    pub fn to_iter(&self) -> impl Iterator<Item = u64> {
        self.first..=self.last
    }

    /// Seeds covered, inclusive of both ends. Validation guarantees at
    /// least one.
    pub fn len(&self) -> u64 {
        self.last - self.first + 1
    }
}

/// The flat collection of seeds a sweep will actually run.
#[derive(Debug, Default, Clone)]
pub struct CandidateSet {
    pub singles: Vec<u64>,
    pub ranges: Vec<SeedRange>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_single(&mut self, seed: u64) {
        self.singles.push(seed);
    }

    pub fn add_range(&mut self, seed_range: SeedRange) {
        self.ranges.push(seed_range);
    }

    /// Raw count of queued seeds; overlapping entries count twice.
    pub fn len(&self) -> u64 {
        let from_ranges: u64 = self.ranges.iter().map(SeedRange::len).sum();
        self.singles.len() as u64 + from_ranges
    }

    pub fn is_empty(&self) -> bool {
        self.singles.is_empty() && self.ranges.is_empty()
    }

    /// Flattens the set into sorted, deduplicated seeds.
    pub fn materialize(&self) -> Vec<u64> {
        let mut seeds: BTreeSet<u64> = BTreeSet::new();

        for &seed in &self.singles {
            seeds.insert(seed);
        }

        for range in &self.ranges {
            for seed in range.to_iter() {
                seeds.insert(seed);
            }
        }

        seeds.into_iter().collect()
    }
}

/// Recursively flattens nested targets into one collection.
fn resolve_target(target: SweepTarget, set: &mut CandidateSet) -> anyhow::Result<()> {
    match target {
        SweepTarget::Single { seed } => {
            set.add_single(seed);
        }
        SweepTarget::Range { seed_range } => {
            set.add_range(seed_range);
        }
        SweepTarget::Classic => {
            info!("Sweeping the classic range {CLASSIC_FIRST}-{CLASSIC_LAST}");
            set.add_range(SeedRange::new(CLASSIC_FIRST, CLASSIC_LAST)?);
        }
        SweepTarget::Suspects => {
            info!("Queueing the {} suspected Lychrel seeds below 1000", SUSPECTS.len());
            for seed in SUSPECTS {
                set.add_single(seed);
            }
        }
        SweepTarget::Multi { targets } => {
            for target in targets {
                resolve_target(target, set)?;
            }
        }
    }
    Ok(())
}

/// Converts a parsed target into the candidate set a sweep consumes.
pub fn to_candidates(target: SweepTarget) -> anyhow::Result<CandidateSet> {
    let mut set = CandidateSet::new();

    resolve_target(target, &mut set)?;

    let len: u64 = set.len();
    let unit: &str = if len == 1 { "candidate has been" } else { "candidates have been" };
    success!("{len} {unit} queued for the sweep");

    Ok(set)
}

/// Parses a comma-separated list of targets (e.g., "19, 59, 100-150, suspects").
pub fn parse_commas(s: &str) -> anyhow::Result<SweepTarget> {
    let mut targets = Vec::new();

    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        let target = SweepTarget::from_str(part)
            .map_err(|e| anyhow::anyhow!("Failed to parse target '{}': {}", part, e))?;

        targets.push(target);
    }

    Ok(SweepTarget::Multi { targets })
}

/// Parses named sweeps like "classic" or "suspects".
fn parse_keyword(s_lower: &str) -> Option<SweepTarget> {
    match s_lower {
        "classic" => Some(SweepTarget::Classic),
        "suspects" => Some(SweepTarget::Suspects),
        _ => None,
    }
}

/// Parses a single seed.
///
/// Distinguishes "not a number" (falls through to range parsing) from
/// numbers this grammar cannot hold: zero, and seeds past 64 bits.
fn parse_single(s: &str) -> Result<Option<SweepTarget>, String> {
    match s.parse::<u64>() {
        Ok(0) => Err(CandidateError::Zero.to_string()),
        Ok(seed) => Ok(Some(SweepTarget::Single { seed })),
        Err(_) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => Err(format!(
            "seed {s} does not fit in 64 bits; `check` takes values of any size"
        )),
        Err(_) => Ok(None),
    }
}

/// Parses a range string like "10-196".
fn parse_seed_range(s: &str) -> Result<Option<SweepTarget>, String> {
    let Some((first_str, last_str)) = s.split_once('-') else {
        return Ok(None);
    };

    let first = first_str
        .trim()
        .parse::<u64>()
        .map_err(|e| format!("Invalid start of range '{first_str}': {e}"))?;

    let last = last_str
        .trim()
        .parse::<u64>()
        .map_err(|e| format!("Invalid end of range '{last_str}': {e}"))?;

    let seed_range = SeedRange::new(first, last).map_err(|e| e.to_string())?;
    Ok(Some(SweepTarget::Range { seed_range }))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
