use serde::{Deserialize, Serialize};

/// Tool classification by data handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolKind {
    /// Binary trace data, decoded to the viewer JSON schema before serving
    Trace,
    /// Data served to the frontend byte-for-byte
    Raw,
}

/// One entry of the profiling tool taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolSpec {
    /// Stable key the frontend selects the tool by
    pub key: &'static str,
    /// Filename suffix locating the tool's data inside a run directory
    pub suffix: &'static str,
    pub kind: ToolKind,
}

// The tool set is fixed at startup. Run and host sets are derived from
// directory scans at query time, never cached.
const TOOLS: &[ToolSpec] = &[
    ToolSpec {
        key: "trace_viewer",
        suffix: ".trace",
        kind: ToolKind::Trace,
    },
    ToolSpec {
        key: "op_profile",
        suffix: "op_profile.json",
        kind: ToolKind::Raw,
    },
    ToolSpec {
        key: "input_pipeline_analyzer",
        suffix: "input_pipeline.json",
        kind: ToolKind::Raw,
    },
    ToolSpec {
        key: "overview_page",
        suffix: "overview_page.json",
        kind: ToolKind::Raw,
    },
];

pub fn all_tools() -> &'static [ToolSpec] {
    TOOLS
}

/// Look up a tool by its stable key
pub fn tool_by_key(key: &str) -> Option<&'static ToolSpec> {
    TOOLS.iter().find(|t| t.key == key)
}

pub fn tool_keys() -> Vec<&'static str> {
    TOOLS.iter().map(|t| t.key).collect()
}
