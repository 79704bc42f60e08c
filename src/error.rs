use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while generating texture sidecars.
///
/// None of these are recovered: the first failure ends the run.
#[derive(Debug, Error)]
pub enum Error {
    /// The directory tree could not be enumerated
    #[error("failed to scan {}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// An existing sidecar could not be opened or read
    #[error("failed to read sidecar {}", path.display())]
    ReadSidecar {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A sidecar could not be created or written
    #[error("failed to write sidecar {}", path.display())]
    WriteSidecar {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A notice could not be printed
    #[error("failed to print notice")]
    Output(#[source] io::Error),

    #[error("failed to resolve the working directory")]
    CurrentDir(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
