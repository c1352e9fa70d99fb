//! Core domain types
//!
//! Pipeline records are owned by the web application's store. Templates are
//! static descriptors and designs are opaque editor graphs.

pub mod design;
pub mod pipeline;
pub mod template;
