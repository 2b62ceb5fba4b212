// Data preparation for the opening book and the perft regression suite
pub mod error;
pub mod io;
pub mod games;
pub mod overrides;
pub mod strip;
pub mod perft;

pub use error::{BookError, Result};
