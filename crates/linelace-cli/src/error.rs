use std::{io, path::PathBuf};

use linelace_game::CatalogError;

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CliError {
    #[display("failed to read {}: {source}", path.display())]
    #[from(ignore)]
    Read { path: PathBuf, source: io::Error },
    #[display("failed to write {}: {source}", path.display())]
    #[from(ignore)]
    Write { path: PathBuf, source: io::Error },
    #[display("invalid progress file {}: {source}", path.display())]
    #[from(ignore)]
    Progress {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[display("{_0}")]
    Catalog(CatalogError),
    #[display("{_0}")]
    Io(io::Error),
}
