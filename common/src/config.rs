/// Runtime options shared between the CLI and the sweep engine.
pub struct Config {
    /// Additions performed per candidate before giving up.
    pub max_steps: u32,

    /// Worker override for parallel sweeps.
    ///
    /// `None` lets the thread pool size itself to the machine.
    pub threads: Option<usize>,

    /// Runs candidates one after another on a single worker.
    pub sequential: bool,

    /// Output reduction: 1 drops the banner and headers, 2 drops
    /// per-candidate detail too and keeps only the summary line.
    pub quiet: u8,

    /// Suppresses the startup banner only.
    pub no_banner: bool,

    /// Keeps the keyboard listener off (no 'q' to stop early).
    pub disable_input: bool,

    /// Digits kept when huge values are elided for display.
    pub digits_shown: usize,
}
