use thiserror::Error;

/// Fatal conditions raised while reformatting book and perft data.
/// None of them is recoverable: callers stop at the first one.
#[derive(Error, Debug)]
pub enum BookError {
    /// An exception entry does not match the stripped move it targets.
    #[error("Game {game} move {index}\nExpected {expected} got {actual}")]
    OverrideMismatch {
        game: usize,
        index: usize,
        expected: String,
        actual: String,
    },

    #[error("malformed input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl BookError {
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        BookError::MalformedInput { line, reason: reason.into() }
    }

    /// Write the fatal diagnostic to `err` and return the process exit status.
    /// A mismatch prints its two lines bare; anything else gets an `error:` prefix.
    pub fn report<W: std::io::Write>(&self, err: &mut W) -> std::io::Result<i32> {
        match self {
            BookError::OverrideMismatch { .. } => writeln!(err, "{self}")?,
            _ => writeln!(err, "error: {self}")?,
        }
        err.flush()?;
        Ok(1)
    }
}

pub type Result<T> = std::result::Result<T, BookError>;
