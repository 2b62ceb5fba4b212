use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use bookprep::io::{open_input, stdout_writer};
use bookprep::perft::split_perft_lines;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "split_perft", about = "Rewrite `FEN; n1; n2; ...` perft records as one line per depth")]
struct Args {
    /// Perft file; stdin when omitted
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let reader = open_input(args.input.as_deref()).context("open input")?;
    let mut out = stdout_writer();
    let n = split_perft_lines(reader, &mut out).context("split perft lines")?;
    out.flush()?;
    log::info!("wrote {} lines", n);
    Ok(())
}
