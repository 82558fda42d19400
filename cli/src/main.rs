mod commands;
mod terminal;

use commands::{CommandLine, Commands, check, explore, info};
use revadd_common::config::Config;
use terminal::print;

use crate::terminal::spinner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    spinner::init_logging();

    let cfg = Config {
        max_steps: commands.max_steps,
        threads: commands.threads,
        sequential: commands.sequential,
        quiet: commands.quiet,
        no_banner: commands.no_banner,
        disable_input: commands.disable_input,
        digits_shown: commands.digits_shown,
    };

    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command {
        Commands::Info => {
            print::header("about the tool", cfg.quiet);
            info::info(&cfg)
        }
        Commands::Check { value } => {
            print::header("checking a single value", cfg.quiet);
            check::check(&value, &cfg)
        }
        Commands::Explore { target } => {
            print::header("getting ready to explore", cfg.quiet);
            explore::explore(target, &cfg).await
        }
    }
}
