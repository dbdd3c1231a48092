pub mod tool;

pub use tool::{ToolKind, ToolSpec, all_tools, tool_by_key, tool_keys};
