use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use bookprep::io::{open_input, stdout_writer};
use bookprep::strip::strip_moves;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "strip_moves", about = "Strip move numbers and annotation glyphs from a game list")]
struct Args {
    /// Game list with a credit line first; stdin when omitted
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let reader = open_input(args.input.as_deref()).context("open input")?;
    let mut out = stdout_writer();
    strip_moves(reader, &mut out).context("strip moves")?;
    out.flush()?;
    Ok(())
}
