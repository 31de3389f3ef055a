use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to read theme file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid theme definition: {0}")]
    Parse(#[from] serde_json::Error),
}
