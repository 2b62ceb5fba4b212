use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use bookprep::games::process_corpus;
use bookprep::io::{open_input, stdout_writer};
use bookprep::overrides::OverrideTable;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "process_games", about = "Apply manual exceptions to the processed game corpus")]
struct Args {
    /// Exception list: `<game> <move_index> <move>` per line
    #[arg(long, default_value = "references/book/exceptions.txt")]
    exceptions: PathBuf,
    /// One game per line, result token last ("-" for stdin)
    #[arg(long, default_value = "references/book/processed_games.txt")]
    games: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let table = OverrideTable::from_path(&args.exceptions)
        .with_context(|| format!("load exceptions: {}", args.exceptions.display()))?;
    let reader = open_input(Some(args.games.as_path()))
        .with_context(|| format!("open games: {}", args.games.display()))?;

    let mut out = stdout_writer();
    let res = process_corpus(&table, reader, &mut out);
    out.flush()?;
    if let Err(e) = res {
        let code = e.report(&mut std::io::stderr())?;
        std::process::exit(code);
    }
    Ok(())
}
