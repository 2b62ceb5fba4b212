// Manual corrections ("exceptions") for the processed game corpus.
//
// File format, one entry per line:
//   <game_index> <move_index> <move_token>
// game_index is 1-based, move_index is 0-based into the stripped move list.

use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use crate::error::{BookError, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverrideEntry {
    /// 1-based line in the exception file.
    pub line: usize,
    pub index: usize,
    pub expected: String,
}

/// Overrides keyed by game index, each list in file order.
#[derive(Clone, Debug, Default)]
pub struct OverrideTable {
    by_game: HashMap<usize, Vec<OverrideEntry>>,
    total: usize,
}

impl OverrideTable {
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut table = OverrideTable::default();
        for (lineno, line) in reader.lines().enumerate() {
            let line = line?;
            let (game, entry) = parse_override_line(&line, lineno + 1)?;
            table.by_game.entry(game).or_default().push(entry);
            table.total += 1;
        }
        log::debug!("loaded {} overrides for {} games", table.total, table.by_game.len());
        Ok(table)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let f = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(f))
    }

    /// Entries for `game`; a game with no entries gets an empty slice.
    pub fn for_game(&self, game: usize) -> &[OverrideEntry] {
        self.by_game.get(&game).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Game indices that have at least one entry, ascending.
    pub fn games(&self) -> Vec<usize> {
        let mut g: Vec<usize> = self.by_game.keys().copied().collect();
        g.sort_unstable();
        g
    }

    pub fn len(&self) -> usize { self.total }

    pub fn is_empty(&self) -> bool { self.total == 0 }
}

fn parse_override_line(line: &str, lineno: usize) -> Result<(usize, OverrideEntry)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [game, index, mv] = fields.as_slice() else {
        return Err(BookError::malformed(lineno, format!("expected 3 fields, got {}", fields.len())));
    };
    let game: usize = game
        .parse()
        .map_err(|e| BookError::malformed(lineno, format!("game index {game:?}: {e}")))?;
    if game == 0 {
        return Err(BookError::malformed(lineno, "game index must be positive"));
    }
    let index: usize = index
        .parse()
        .map_err(|e| BookError::malformed(lineno, format!("move index {index:?}: {e}")))?;
    Ok((game, OverrideEntry { line: lineno, index, expected: mv.to_string() }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_file_order_within_a_game() {
        let src = "3 10 Nbd7\n1 4 Rfe1\n3 2 Ngf6\n";
        let t = OverrideTable::from_reader(src.as_bytes()).unwrap();
        assert_eq!(t.len(), 3);
        assert_eq!(t.games(), vec![1, 3]);
        let idx: Vec<usize> = t.for_game(3).iter().map(|e| e.index).collect();
        assert_eq!(idx, vec![10, 2]);
        assert!(t.for_game(2).is_empty());
    }

    #[test]
    fn rejects_wrong_field_count_with_line_number() {
        let src = "1 4 Rfe1\n2 5\n";
        match OverrideTable::from_reader(src.as_bytes()) {
            Err(BookError::MalformedInput { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected MalformedInput, got {other:?}"),
        }
    }

    #[test]
    fn blank_line_is_malformed() {
        let src = "1 4 Rfe1\n\n2 5 Nbd7\n";
        match OverrideTable::from_reader(src.as_bytes()) {
            Err(BookError::MalformedInput { line, reason }) => {
                assert_eq!(line, 2);
                assert_eq!(reason, "expected 3 fields, got 0");
            }
            other => panic!("expected MalformedInput, got {other:?}"),
        }
        assert!(OverrideTable::from_reader("1 0 exd5\n   \n".as_bytes()).is_err());
    }

    #[test]
    fn rejects_game_zero_and_negative_index() {
        assert!(OverrideTable::from_reader("0 1 Nbd2".as_bytes()).is_err());
        assert!(OverrideTable::from_reader("1 -1 Nbd2".as_bytes()).is_err());
    }
}
