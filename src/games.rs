use std::io::{BufRead, Write};

use crate::error::{BookError, Result};
use crate::io::write_joined;
use crate::overrides::{OverrideEntry, OverrideTable};

/// Remove every check (`+`) and mate (`#`) marker from a move token.
pub fn strip_annotations(token: &str) -> String {
    token.replace(['+', '#'], "")
}

/// Drop the second character of an override token.
///
/// Exception entries spell the move with one extra letter right after the
/// piece (a capture `x` or a disambiguating file/rank, e.g. `Nxf3`, `Nbd7`),
/// while the book wants the short form (`Nf3`, `Nd7`). Tokens shorter than
/// two characters come back unchanged.
pub fn drop_second_char(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(token.len());
            out.push(first);
            chars.next();
            out.extend(chars);
            out
        }
        None => String::new(),
    }
}

/// Parse one corpus line: whitespace-split, drop the trailing result token,
/// strip annotations from the rest.
pub fn parse_game_line(line: &str) -> Vec<String> {
    let mut tokens: Vec<&str> = line.split_whitespace().collect();
    tokens.pop();
    tokens.into_iter().map(strip_annotations).collect()
}

/// Check and apply `entries` to `moves` in order. Returns the number applied.
pub fn apply_overrides(game: usize, moves: &mut [String], entries: &[OverrideEntry]) -> Result<usize> {
    for e in entries {
        let Some(actual) = moves.get(e.index) else {
            return Err(BookError::malformed(
                e.line,
                format!("exception targets move {} of game {}, which has {} moves", e.index, game, moves.len()),
            ));
        };
        if *actual != e.expected {
            return Err(BookError::OverrideMismatch {
                game,
                index: e.index,
                expected: e.expected.clone(),
                actual: actual.clone(),
            });
        }
        let short = drop_second_char(&e.expected);
        log::debug!("game {} move {}: {} -> {}", game, e.index, e.expected, short);
        moves[e.index] = short;
    }
    Ok(entries.len())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorpusStats {
    pub games: usize,
    pub applied: usize,
    /// Games named in the override table but absent from the corpus.
    pub unused_games: Vec<usize>,
}

/// Stream the corpus from `reader` to `out`, one cleaned game per line.
/// Stops at the first error; lines already written stay written.
pub fn process_corpus<R: BufRead, W: Write>(table: &OverrideTable, reader: R, out: &mut W) -> Result<CorpusStats> {
    let mut stats = CorpusStats::default();
    for line in reader.lines() {
        let line = line.map_err(|e| match e.kind() {
            std::io::ErrorKind::InvalidData => BookError::malformed(stats.games + 1, format!("game {}: {}", stats.games + 1, e)),
            _ => BookError::Io(e),
        })?;
        stats.games += 1;
        let mut moves = parse_game_line(&line);
        stats.applied += apply_overrides(stats.games, &mut moves, table.for_game(stats.games))?;
        write_joined(out, &moves)?;
    }
    stats.unused_games = table.games().into_iter().filter(|&g| g > stats.games).collect();
    if !stats.unused_games.is_empty() {
        log::warn!("overrides for {} games beyond the corpus were ignored: {:?}", stats.unused_games.len(), stats.unused_games);
    }
    log::info!("processed {} games, applied {} of {} overrides", stats.games, stats.applied, table.len());
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_second_char_handles_short_tokens() {
        assert_eq!(drop_second_char("Nxf3"), "Nf3");
        assert_eq!(drop_second_char("Nbd7"), "Nd7");
        assert_eq!(drop_second_char("e"), "e");
        assert_eq!(drop_second_char(""), "");
    }

    #[test]
    fn parse_drops_result_and_markers() {
        assert_eq!(parse_game_line("e4 e5 Qh5 Nc6 Bc4 Nf6 Qxf7# 1-0"),
            vec!["e4", "e5", "Qh5", "Nc6", "Bc4", "Nf6", "Qxf7"]);
        assert!(parse_game_line("").is_empty());
        assert!(parse_game_line("1/2-1/2").is_empty());
    }
}
