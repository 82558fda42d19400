use anyhow;
use colored::*;

use crate::{
    mprint,
    terminal::{colors, print, spinner},
};
use revadd_common::candidates::{CLASSIC_FIRST, CLASSIC_LAST, SUSPECTS};
use revadd_common::config::Config;

pub fn info(cfg: &Config) -> anyhow::Result<()> {
    let about = "Revadd explores the reverse-and-add process behind the 196 problem."
        .color(colors::TEXT_DEFAULT);
    mprint!(&about.to_string());
    mprint!();

    print::GLOBAL_KEY_WIDTH.set(9);
    print_about_the_tool();
    print_the_problem(cfg);

    print::end_of_program();
    spinner::finish();
    Ok(())
}

fn print_about_the_tool() {
    print::aligned_line("Version", env!("CARGO_PKG_VERSION"));
    print::aligned_line("License", "MIT");
    print::aligned_line("Usage", "revadd explore classic".color(colors::ACCENT));
}

fn print_the_problem(cfg: &Config) {
    print::header("the 196 problem", cfg.quiet);
    print::aligned_line("Process", "reverse the digits, add them back, repeat");
    print::aligned_line(
        "Classic",
        format!("seeds {CLASSIC_FIRST}-{CLASSIC_LAST} all converge"),
    );
    print::aligned_line(
        "Suspects",
        format!("{} seeds below 1000 have never converged", SUSPECTS.len()),
    );
    print::aligned_line("Budget", format!("{} additions per candidate", cfg.max_steps));
    print::aligned_line("Escape", "press 'q' during a sweep to finish early");
}
