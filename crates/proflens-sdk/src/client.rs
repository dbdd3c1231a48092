use std::path::{Path, PathBuf};

use proflens_index::{ArtifactIndex, RunTools, Storage};
use proflens_types::{ToolKind, tool_by_key};

use crate::error::Result;

/// Plugin identifier; also the asset subdirectory name under
/// `<logdir>/plugins/`
pub const PLUGIN_NAME: &str = "profile";

const PLUGINS_DIR: &str = "plugins";

/// Resolve the plugin asset root for a log directory
pub fn asset_root(logdir: &Path) -> PathBuf {
    logdir.join(PLUGINS_DIR).join(PLUGIN_NAME)
}

/// Payload of a successfully resolved artifact
#[derive(Debug, Clone, PartialEq)]
pub enum ToolData {
    /// Decoded trace-viewer document
    Json(String),
    /// Verbatim bytes for raw tools
    Raw(Vec<u8>),
}

impl ToolData {
    /// The payload as bytes ready to send to the frontend
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            ToolData::Json(text) => text.into_bytes(),
            ToolData::Raw(bytes) => bytes,
        }
    }
}

/// Facade over the artifact index and the trace decoder.
///
/// Holds no mutable state; every query re-scans storage, so concurrent
/// use from multiple threads needs no locking.
pub struct Client {
    logdir: PathBuf,
    index: ArtifactIndex,
}

impl Client {
    /// Client over `logdir` using local-filesystem storage
    pub fn new(logdir: impl Into<PathBuf>) -> Self {
        let logdir = logdir.into();
        let index = ArtifactIndex::new(asset_root(&logdir));
        Self { logdir, index }
    }

    /// Client with an injected storage backend
    pub fn with_storage(logdir: impl Into<PathBuf>, storage: Box<dyn Storage>) -> Self {
        let logdir = logdir.into();
        let index = ArtifactIndex::with_storage(asset_root(&logdir), storage);
        Self { logdir, index }
    }

    /// The log directory this client was created over
    pub fn logdir(&self) -> &Path {
        &self.logdir
    }

    /// The plugin asset root runs are scanned from
    pub fn asset_root(&self) -> &Path {
        self.index.root()
    }

    /// Available runs and, per run, the tools with data
    pub fn runs(&self) -> RunTools {
        self.index.runs_and_tools()
    }

    /// Hosts with data for (run, tool), in storage listing order
    pub fn hosts(&self, run: &str, tool: &str) -> Vec<String> {
        self.index.hosts(run, tool)
    }

    /// Artifact content for (run, tool, host): decoded to the viewer
    /// JSON document for the trace tool, verbatim bytes otherwise.
    ///
    /// `Ok(None)` covers every absence case: unknown tool, missing
    /// run, and missing host are indistinguishable by return shape.
    /// `Err` only for a present but malformed trace payload.
    pub fn tool_data(&self, run: &str, tool: &str, host: &str) -> Result<Option<ToolData>> {
        let Some(spec) = tool_by_key(tool) else {
            return Ok(None);
        };
        let Some(raw) = self.index.artifact(run, tool, host) else {
            return Ok(None);
        };
        match spec.kind {
            ToolKind::Trace => {
                let text = proflens_trace::decode(&raw)?;
                Ok(Some(ToolData::Json(text)))
            }
            ToolKind::Raw => Ok(Some(ToolData::Raw(raw))),
        }
    }

    /// True iff at least one run has at least one available tool
    pub fn is_active(&self) -> bool {
        self.runs().values().any(|tools| !tools.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_root_nests_under_plugins() {
        assert_eq!(
            asset_root(Path::new("/logs/train")),
            PathBuf::from("/logs/train/plugins/profile")
        );
    }

    #[test]
    fn tool_data_payload_converts_to_bytes() {
        assert_eq!(ToolData::Json("{}".to_string()).into_bytes(), b"{}");
        assert_eq!(ToolData::Raw(vec![1, 2]).into_bytes(), vec![1, 2]);
    }
}
