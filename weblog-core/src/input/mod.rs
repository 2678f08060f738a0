//! Input discovery and line reading.
//!
//! An input is a single path or a glob. Matched files are read in sorted
//! path order and their lines concatenated.

mod discover;
mod error;
mod read;

pub use discover::{discover, is_glob, resolve_input};
pub use error::InputError;
pub use read::{load_lines, read_lines};
