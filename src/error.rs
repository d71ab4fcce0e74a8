/// Errors raised while loading or placing a level.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("could not read level file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("level contains no rows")]
    Empty,

    #[error("level has no spawn marker '@'")]
    MissingSpawn,

    #[error("level has {count} spawn markers '@', expected exactly one")]
    MultipleSpawns { count: usize },

    #[error("no level configured at index {0}")]
    NoSuchLevel(usize),
}
