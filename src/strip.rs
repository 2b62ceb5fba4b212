use std::io::{BufRead, Write};

use crate::error::Result;
use crate::io::write_joined;

/// Clean a single movetext token. Returns `None` for bare move numbers.
///
/// `12.` and `12...` vanish, `12.e4` becomes `e4`, trailing `!`/`?` glyphs go.
/// Check and mate markers stay; the game processor removes those.
pub fn clean_token(token: &str) -> Option<&str> {
    let digits = token.len() - token.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    let tok = if digits > 0 && token[digits..].starts_with('.') {
        token[digits..].trim_start_matches('.')
    } else {
        token
    };
    let tok = tok.trim_end_matches(['!', '?']);
    if tok.is_empty() { None } else { Some(tok) }
}

pub fn strip_line(line: &str) -> Vec<&str> {
    line.split_whitespace().filter_map(clean_token).collect()
}

/// Skip the credit line, then write one cleaned game per non-blank line.
/// Returns the number of games written.
pub fn strip_moves<R: BufRead, W: Write>(reader: R, out: &mut W) -> Result<usize> {
    let mut lines = reader.lines();
    if let Some(header) = lines.next() {
        log::debug!("skipping header: {}", header?);
    }
    let mut games = 0usize;
    for line in lines {
        let line = line?;
        let moves = strip_line(&line);
        if moves.is_empty() { continue; }
        write_joined(out, &moves)?;
        games += 1;
    }
    log::info!("stripped {} games", games);
    Ok(games)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_numbers_and_glyphs() {
        assert_eq!(clean_token("12."), None);
        assert_eq!(clean_token("12..."), None);
        assert_eq!(clean_token("12.e4"), Some("e4"));
        assert_eq!(clean_token("Nf3?!"), Some("Nf3"));
        assert_eq!(clean_token("Qxf7#"), Some("Qxf7#"));
        assert_eq!(clean_token("1-0"), Some("1-0"));
        assert_eq!(clean_token("1/2-1/2"), Some("1/2-1/2"));
    }
}
