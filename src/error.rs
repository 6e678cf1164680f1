use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::session::SessionState;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{op} is not valid while the session is {state:?}")]
    InvalidState {
        op: &'static str,
        state: SessionState,
    },

    #[error("track has no samples")]
    EmptyTrack,

    #[error("malformed track record: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("storage error at {}: {source}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("record name is not a safe file name: {0:?}")]
    UnsafeName(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
