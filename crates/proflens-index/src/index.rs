use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use proflens_types::{all_tools, tool_by_key};

use crate::storage::{LocalStorage, Storage, StorageError};

/// Map from run name to the tool keys with at least one data file
pub type RunTools = BTreeMap<String, Vec<&'static str>>;

// NOTE: Query behavior
// - Every query re-scans storage; results reflect on-disk state at call time
// - Absence (missing run, missing file, unknown tool) is a value, not an error
// - Operational storage failures are logged and degrade to absence for the
//   affected item only; a multi-run scan still returns the rest

/// Queryable view over a profiling artifact directory.
///
/// The expected layout is one subdirectory per run, containing files
/// named `<host><tool-suffix>` for each tool with data. Run and host
/// values are joined as single path components; request validation
/// belongs to the calling layer.
pub struct ArtifactIndex {
    root: PathBuf,
    storage: Box<dyn Storage>,
}

impl ArtifactIndex {
    /// Index over `root` using local-filesystem storage
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_storage(root, Box::new(LocalStorage))
    }

    /// Index over `root` with an injected storage backend
    pub fn with_storage(root: impl Into<PathBuf>, storage: Box<dyn Storage>) -> Self {
        Self {
            root: root.into(),
            storage,
        }
    }

    /// The directory runs are scanned from
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Available runs and, per run, the tools with at least one data
    /// file.
    ///
    /// A missing or non-directory root yields an empty map. Entries
    /// under the root that are not directories are skipped silently. A
    /// run directory that cannot be listed is logged and skipped; the
    /// scan continues with the remaining runs. Runs with no matching
    /// files are still reported, with an empty tool list.
    pub fn runs_and_tools(&self) -> RunTools {
        let mut runs = RunTools::new();
        if !self.storage.is_dir(&self.root) {
            return runs;
        }
        let entries = match self.storage.list_dir(&self.root) {
            Ok(entries) => entries,
            Err(err) => {
                log::warn!("Cannot list index root {}: {}", self.root.display(), err);
                return runs;
            }
        };
        for run in entries {
            let run_dir = self.root.join(&run);
            if !self.storage.is_dir(&run_dir) {
                continue;
            }
            let files = match self.storage.list_dir(&run_dir) {
                Ok(files) => files,
                Err(err) => {
                    log::warn!("Cannot read run directory {}: {}", run_dir.display(), err);
                    continue;
                }
            };
            let tools = all_tools()
                .iter()
                .filter(|tool| files.iter().any(|f| f.ends_with(tool.suffix)))
                .map(|tool| tool.key)
                .collect();
            runs.insert(run, tools);
        }
        runs
    }

    /// Hosts with data for `tool` inside `run`, one per matching file,
    /// named by stripping the tool suffix from the filename.
    ///
    /// Order follows the storage listing and is not guaranteed sorted.
    /// An unknown tool key or an unresolvable run directory yields an
    /// empty list after a logged warning; callers cannot distinguish an
    /// unknown run from a run with no data for this tool.
    pub fn hosts(&self, run: &str, tool: &str) -> Vec<String> {
        let Some(spec) = tool_by_key(tool) else {
            log::warn!("Unknown tool key: {}", tool);
            return Vec::new();
        };
        let run_dir = self.root.join(run);
        if !self.storage.is_dir(&run_dir) {
            log::warn!("Cannot find run directory: {}", run_dir.display());
            return Vec::new();
        }
        match self.storage.list_dir(&run_dir) {
            Ok(files) => files
                .iter()
                .filter_map(|f| f.strip_suffix(spec.suffix))
                .map(str::to_owned)
                .collect(),
            Err(err) => {
                log::warn!("Cannot read run directory {}: {}", run_dir.display(), err);
                Vec::new()
            }
        }
    }

    /// Full contents of the artifact at (run, tool, host), or `None`
    /// for any absent or unreadable combination.
    ///
    /// The expected filename is `<host><tool-suffix>` inside the run
    /// directory. All-or-nothing: no partial reads. An unknown tool
    /// key, a missing file, and a storage failure all surface as
    /// `None`, indistinguishable by return shape.
    pub fn artifact(&self, run: &str, tool: &str, host: &str) -> Option<Vec<u8>> {
        let spec = tool_by_key(tool)?;
        let path = self.root.join(run).join(format!("{}{}", host, spec.suffix));
        match self.storage.read(&path) {
            Ok(bytes) => Some(bytes),
            Err(StorageError::NotFound(_)) => {
                log::warn!("Artifact not found: {}", path.display());
                None
            }
            Err(err) => {
                log::warn!("Cannot read artifact {}: {}", path.display(), err);
                None
            }
        }
    }
}
