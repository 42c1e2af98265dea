//! # Domain Module
//!
//! Shared types of the hook-state wire format: keys, records, descriptors,
//! wire constants, and the codec error taxonomy.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use value_objects::*;
