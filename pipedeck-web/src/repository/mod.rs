//! Repository Module
//!
//! Data access layer for the web application.
//! Records live in process memory and are lost on restart.

pub mod pipeline;

// Re-export for convenience
pub use pipeline as pipeline_repository;
pub use pipeline::PipelineStore;
