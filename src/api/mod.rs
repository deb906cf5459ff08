//! # Backend API
//!
//! Everything the console knows about the Domos web backend: the two read
//! endpoints, the opaque module records they return, and the `ModuleSource`
//! seam the rest of the crate talks to.

pub mod client;
pub mod source;
pub mod types;

pub use client::HttpModuleSource;
pub use source::{ApiError, ModuleSource};
pub use types::{Endpoint, ModuleRecord};
