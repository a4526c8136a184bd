//! Registered project roots and containment-based resolution
//!
//! The workspace knows which top-level directories the user has registered as
//! projects. Resolution answers "which project owns this file" by containment,
//! with registration order as the tie-break for nested roots.

pub mod resolver;

pub use resolver::{ProjectRegistry, ProjectRoot, resolve_project};
