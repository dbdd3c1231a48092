//! proflens-sdk: the query surface a routing layer consumes.
//!
//! # Overview
//!
//! `proflens-sdk` wires the artifact index and the trace decoder into
//! the queries a viewer frontend needs (runs with their available
//! tools, hosts for a run/tool pair, and artifact content) plus a
//! liveness predicate. Results are data, empty collections, or `None`;
//! only a malformed trace payload surfaces as an error.
//!
//! # Quickstart
//!
//! ```no_run
//! use proflens_sdk::{Client, ToolData};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new("/var/log/training");
//! for (run, tools) in client.runs() {
//!     for tool in tools {
//!         for host in client.hosts(&run, tool) {
//!             if let Some(data) = client.tool_data(&run, tool, &host)? {
//!                 match data {
//!                     ToolData::Json(text) => println!("{} bytes of JSON", text.len()),
//!                     ToolData::Raw(bytes) => println!("{} raw bytes", bytes.len()),
//!                 }
//!             }
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;

pub use client::{Client, PLUGIN_NAME, ToolData, asset_root};
pub use error::{Error, Result};
