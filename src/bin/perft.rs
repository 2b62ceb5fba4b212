use bookprep::perft::{parse_fen, perft_split};
use cozy_chess::Board;

#[derive(clap::Parser, Debug)]
#[command(name = "perft", about = "Perft driver for a single position")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// FEN string or "startpos"
    #[arg(value_name = "FEN", default_value = "startpos")]
    fen: String,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
}

fn main() -> anyhow::Result<()> {
    use clap::Parser;
    use std::time::Instant;

    env_logger::init();
    let args = Args::parse();
    let base = if args.fen == "startpos" { Board::default() } else { parse_fen(&args.fen, 1)? };

    let t0 = Instant::now();
    let nodes = perft_split(&base, args.depth, args.threads)?;
    let dt = t0.elapsed().as_secs_f64();

    if args.nps { println!("nodes: {nodes} elapsed: {:.3}s nps: {:.1}", dt, nodes as f64 / dt.max(f64::EPSILON)); }
    else { println!("nodes: {nodes}"); }
    Ok(())
}
