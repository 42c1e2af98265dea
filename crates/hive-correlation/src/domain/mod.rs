//! # Domain Module
//!
//! Types of the submit/watch round trip and the correlation error
//! taxonomy.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
