//! collect-poetry: flatten chinese-poetry JSON into training text.
//!
//! Reads the `宋词/` and `全唐诗/` record files and writes one paragraph
//! per line to `ci.txt`, `shi_tang.txt` and `shi_song.txt`.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse_from(commands::expand_short_flags(std::env::args_os()));
    commands::init_tracing(&cli);
    commands::run(cli)
}
