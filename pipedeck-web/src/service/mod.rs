//! Service Module
//!
//! Business logic layer for the web application.
//! Services sit between the HTTP handlers and the store.

pub mod design;
pub mod pipeline;

// Re-export for convenience
pub use design as design_service;
pub use pipeline as pipeline_service;
