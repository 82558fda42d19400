pub mod check;
pub mod explore;
pub mod info;

use clap::{ArgAction, Parser, Subcommand};
use revadd_common::candidates::SweepTarget;

#[derive(Parser)]
#[command(name = "revadd")]
#[command(about = "A reverse-and-add palindrome explorer.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Additions to attempt per candidate before giving up
    #[arg(long, global = true, default_value_t = 1000)]
    pub max_steps: u32,

    /// Worker threads for the parallel sweep (default: all cores)
    #[arg(long, global = true)]
    pub threads: Option<usize>,

    /// Explore candidates one at a time, in order
    #[arg(long, global = true)]
    pub sequential: bool,

    /// Reduce output; repeat to drop per-candidate detail too
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Skip the ASCII banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Do not grab the keyboard for 'q' interrupts
    #[arg(long, global = true)]
    pub disable_input: bool,

    /// Digits to keep when eliding the middle of huge values
    #[arg(long, global = true, default_value_t = 24)]
    pub digits_shown: usize,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show facts about the tool and the 196 problem
    #[command(alias = "i")]
    Info,
    /// Print the full reverse-and-add chain for one value
    #[command(alias = "c")]
    Check { value: String },
    /// Sweep candidates for delayed palindromes
    #[command(alias = "e")]
    Explore { target: SweepTarget },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
