//! Shared test fixtures for the proflens workspace.

pub mod fixtures;
pub mod world;

pub use fixtures::{encode_trace, sample_trace};
pub use world::TestWorld;
