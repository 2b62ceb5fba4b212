use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use bookprep::io::open_input;
use bookprep::perft::{load_perft, verify_case};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

// Checks every `FEN; n1; n2; ...` record of a perft file against the move
// generator.
//
// Usage:
//   cargo run --release --bin perft_suite -- tests/perft.txt --max-depth 4 --threads 8

#[derive(Parser, Debug)]
#[command(name = "perft_suite", about = "Verify a perft file against the move generator")]
struct Args {
    /// Perft file; stdin when omitted
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,
    /// Skip expected counts deeper than this
    #[arg(long, default_value_t = 4)]
    max_depth: u32,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Print one JSON report per case instead of the progress bar
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let reader = open_input(args.input.as_deref()).context("open perft file")?;
    let cases = load_perft(reader).context("parse perft file")?;

    let pb = if args.json { ProgressBar::hidden() } else { ProgressBar::new(cases.len() as u64) };
    pb.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} cases [{elapsed_precise}] {msg}")?
            .progress_chars("=> "),
    );

    let t0 = Instant::now();
    let mut failed = 0usize;
    let mut nodes = 0u64;
    for case in &cases {
        let report = verify_case(case, args.max_depth, args.threads)?;
        nodes += report.nodes;
        if !report.passed() {
            failed += 1;
            pb.set_message(format!("{failed} failed"));
            for m in &report.mismatches {
                pb.println(format!("line {} depth {}: expected {} got {}  {}", report.line, m.depth, m.expected, m.got, report.fen));
            }
        }
        if args.json { println!("{}", serde_json::to_string(&report)?); }
        pb.inc(1);
    }
    pb.finish_and_clear();

    let dt = t0.elapsed().as_secs_f64();
    eprintln!("summary: cases={} failed={} nodes={} elapsed={:.3}s nps={:.1} max_depth={} threads={}",
        cases.len(), failed, nodes, dt, nodes as f64 / dt.max(f64::EPSILON), args.max_depth, args.threads);
    if failed > 0 { std::process::exit(1); }
    Ok(())
}
