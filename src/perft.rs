use std::io::{BufRead, Write};

use cozy_chess::{Board, Move};
use rayon::prelude::*;
use serde::Serialize;

use crate::error::{BookError, Result};

const FIELD_SEP: &str = "; ";

pub fn perft(board: &Board, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    let mut nodes = 0u64;
    board.generate_moves(|moves| {
        for m in moves {
            let mut child = board.clone();
            child.play(m);
            nodes += perft(&child, depth - 1);
        }
        false
    });
    nodes
}

/// Root-split perft on a dedicated rayon pool. `threads <= 1` runs serially.
pub fn perft_split(board: &Board, depth: u32, threads: usize) -> Result<u64> {
    if threads <= 1 || depth == 0 { return Ok(perft(board, depth)); }
    let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
    let mut root_moves: Vec<Move> = Vec::new();
    board.generate_moves(|moves| { for m in moves { root_moves.push(m); } false });
    Ok(pool.install(|| {
        root_moves.par_iter().map(|&mv| {
            let mut b = board.clone();
            b.play(mv);
            perft(&b, depth - 1)
        }).sum()
    }))
}

pub fn parse_fen(fen: &str, line: usize) -> Result<Board> {
    Board::from_fen(fen, false)
        .map_err(|e| BookError::malformed(line, format!("FEN {fen:?}: {e:?}")))
}

/// One record of a perft file: `FEN; n1; n2; ...` where `nk` is the node
/// count at depth k.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PerftCase {
    pub line: usize,
    pub fen: String,
    pub expected: Vec<(u32, u64)>,
}

pub fn parse_perft_line(line: &str, lineno: usize) -> Result<PerftCase> {
    let mut fields = line.split(FIELD_SEP);
    let fen = fields.next().unwrap_or_default().trim().to_string();
    let mut expected = Vec::new();
    for (i, f) in fields.enumerate() {
        let nodes: u64 = f.trim().parse()
            .map_err(|e| BookError::malformed(lineno, format!("depth {} count {:?}: {}", i + 1, f.trim(), e)))?;
        expected.push((i as u32 + 1, nodes));
    }
    if expected.is_empty() {
        return Err(BookError::malformed(lineno, "no node counts after FEN"));
    }
    Ok(PerftCase { line: lineno, fen, expected })
}

pub fn load_perft<R: BufRead>(reader: R) -> Result<Vec<PerftCase>> {
    let mut cases = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        cases.push(parse_perft_line(&line, i + 1)?);
    }
    Ok(cases)
}

/// Explode `FEN; n1; n2` records into `FEN; 1; n1` / `FEN; 2; n2` lines.
/// Returns the number of lines written.
pub fn split_perft_lines<R: BufRead, W: Write>(reader: R, out: &mut W) -> Result<usize> {
    let mut written = 0usize;
    for line in reader.lines() {
        let line = line?;
        let mut fields = line.split(FIELD_SEP);
        let fen = fields.next().unwrap_or_default();
        for (idx, result) in fields.enumerate() {
            writeln!(out, "{}{}{}{}{}", fen, FIELD_SEP, idx + 1, FIELD_SEP, result.trim())?;
            written += 1;
        }
    }
    Ok(written)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DepthMismatch {
    pub depth: u32,
    pub expected: u64,
    pub got: u64,
}

#[derive(Clone, Debug, Serialize)]
pub struct CaseReport {
    pub line: usize,
    pub fen: String,
    pub depths_checked: usize,
    pub nodes: u64,
    pub mismatches: Vec<DepthMismatch>,
}

impl CaseReport {
    pub fn passed(&self) -> bool { self.mismatches.is_empty() }
}

/// Run every depth of `case` up to `max_depth` and compare node counts.
pub fn verify_case(case: &PerftCase, max_depth: u32, threads: usize) -> Result<CaseReport> {
    let board = parse_fen(&case.fen, case.line)?;
    let mut report = CaseReport {
        line: case.line,
        fen: case.fen.clone(),
        depths_checked: 0,
        nodes: 0,
        mismatches: Vec::new(),
    };
    for &(depth, expected) in case.expected.iter().filter(|(d, _)| *d <= max_depth) {
        let got = perft_split(&board, depth, threads)?;
        report.depths_checked += 1;
        report.nodes += got;
        if got != expected {
            log::warn!("line {} depth {}: expected {} got {} ({})", case.line, depth, expected, got, case.fen);
            report.mismatches.push(DepthMismatch { depth, expected, got });
        }
    }
    Ok(report)
}
