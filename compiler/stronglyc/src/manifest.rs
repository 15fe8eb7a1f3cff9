//! Declaration manifest: the JSON form of the host compiler's feed.
//!
//! ```json
//! {
//!   "defaults": [{ "target": "defaults", "positional": [4] }],
//!   "declarations": [
//!     {
//!       "name": "OrderId",
//!       "ancestors": [{ "kind": "namespace", "name": "Shop" }],
//!       "attribute": { "named": [{ "name": "converters", "value": 8 }] }
//!     }
//!   ]
//! }
//! ```
//!
//! An argument the host could not evaluate is written as `null`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strongly_ir::{RawAttribute, RawDeclaration};

/// Failure to load a manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("cannot read manifest `{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid manifest `{path}`: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Assembly-level defaults attributes.
    #[serde(default)]
    pub defaults: Vec<RawAttribute>,
    #[serde(default)]
    pub declarations: Vec<RawDeclaration>,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let text = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
