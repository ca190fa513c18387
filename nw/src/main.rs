mod align;
mod args;
mod batch;
mod traceback;
mod util;

use align::align_command;
use args::{Cli, SubCommands};
use batch::batch_command;
use traceback::traceback_command;

use clap::Parser;

#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: jemallocator::Jemalloc = jemallocator::Jemalloc;

fn main() -> anyhow::Result<()> {
    color_backtrace::install();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match Cli::parse().command {
        SubCommands::Align(args) => {
            align_command(&args)?;
        }
        SubCommands::Traceback(args) => {
            traceback_command(&args)?;
        }
        SubCommands::Batch(args) => {
            batch_command(&args)?;
        }
    }
    Ok(())
}
