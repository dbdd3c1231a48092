//! TestWorld pattern for building throwaway profiling log directories.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use proflens_trace::Trace;
use proflens_types::tool_by_key;

use crate::fixtures::encode_trace;

/// Declarative profiling logdir builder.
///
/// Creates an isolated `<logdir>/plugins/profile` tree and offers
/// helpers to drop run directories and artifact files into it, in the
/// layout the external producer writes.
///
/// # Example
/// ```no_run
/// use proflens_testing::{TestWorld, sample_trace};
///
/// let world = TestWorld::new()
///     .with_trace("runA", "host1", &sample_trace())
///     .with_file("runA", "op_profile.json", b"{}");
/// assert!(world.asset_root().join("runA").is_dir());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    asset_root: PathBuf,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated logdir with an empty plugin asset root
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let asset_root = temp_dir.path().join("plugins").join("profile");
        fs::create_dir_all(&asset_root).expect("Failed to create asset root");
        Self {
            temp_dir,
            asset_root,
        }
    }

    /// The logdir handed to clients (the temp root)
    pub fn logdir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The plugin asset root run directories live under
    pub fn asset_root(&self) -> &Path {
        &self.asset_root
    }

    /// Create an (empty) run directory
    pub fn with_run(self, run: &str) -> Self {
        fs::create_dir_all(self.asset_root.join(run)).expect("Failed to create run dir");
        self
    }

    /// Write an artifact file into a run directory, creating the run as
    /// needed
    pub fn with_file(self, run: &str, name: &str, bytes: &[u8]) -> Self {
        let run_dir = self.asset_root.join(run);
        fs::create_dir_all(&run_dir).expect("Failed to create run dir");
        fs::write(run_dir.join(name), bytes).expect("Failed to write artifact");
        self
    }

    /// Write an encoded trace payload for `host` into a run directory
    pub fn with_trace(self, run: &str, host: &str, trace: &Trace) -> Self {
        let suffix = tool_by_key("trace_viewer")
            .expect("trace_viewer is a known tool")
            .suffix;
        let bytes = encode_trace(trace);
        self.with_file(run, &format!("{}{}", host, suffix), &bytes)
    }

    /// Write a non-directory entry directly under the asset root
    pub fn with_stray_file(self, name: &str, bytes: &[u8]) -> Self {
        fs::write(self.asset_root.join(name), bytes).expect("Failed to write stray file");
        self
    }
}
