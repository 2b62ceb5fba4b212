use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Open `path` for buffered line reading. `None` or `-` reads stdin.
pub fn open_input(path: Option<&Path>) -> io::Result<Box<dyn BufRead>> {
    match path {
        Some(p) if p != Path::new("-") => {
            let f = File::open(p)?;
            Ok(Box::new(BufReader::new(f)))
        }
        _ => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

/// Buffered stdout; callers flush before exiting.
pub fn stdout_writer() -> BufWriter<io::Stdout> {
    BufWriter::new(io::stdout())
}

/// Write `tokens` joined by single spaces, then a newline.
pub fn write_joined<W: Write, S: AsRef<str>>(out: &mut W, tokens: &[S]) -> io::Result<()> {
    for (i, t) in tokens.iter().enumerate() {
        if i > 0 { out.write_all(b" ")?; }
        out.write_all(t.as_ref().as_bytes())?;
    }
    out.write_all(b"\n")
}
